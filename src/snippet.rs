//! Code snippet references
//!
//! A snippet reference pulls code from another file into the rendered page:
//!
//! ```text
//! :::code language="csharp" source="../samples/Program.cs" id="Snippet1":::
//! ```
//!
//! The reference can select the whole file, a region marked with an id, or a set of line
//! ranges. Choosing between them is a short sequence of prompts, modelled by
//! [`SnippetSelector`].

use std::path::Path;
use std::sync::LazyLock;

use phf::phf_map;
use regex::Regex;

/// Snippet language names, keyed by file extension (with dot) or by common alias
static SNIPPET_LANGUAGES: phf::Map<&'static str, &'static str> = phf_map! {
    ".as" => "actionscript",
    ".ino" => "arduino",
    "nasm" => "assembly",
    ".asm" => "assembly",
    ".bat" => "batchfile",
    ".cmd" => "batchfile",
    "c" => "cpp",
    "c++" => "cpp",
    "objective-c" => "cpp",
    "obj-c" => "cpp",
    "objc" => "cpp",
    "objectivec" => "cpp",
    ".c" => "cpp",
    ".cpp" => "cpp",
    ".h" => "cpp",
    ".hpp" => "cpp",
    ".cc" => "cpp",
    "cs" => "csharp",
    ".cs" => "csharp",
    ".cu" => "cuda",
    ".cuh" => "cuda",
    "dlang" => "d",
    ".d" => "d",
    ".erl" => "erlang",
    "fs" => "fsharp",
    ".fs" => "fsharp",
    ".fsi" => "fsharp",
    ".fsx" => "fsharp",
    "golang" => "go",
    ".go" => "go",
    ".hs" => "haskell",
    ".html" => "html",
    ".jsp" => "html",
    ".asp" => "html",
    ".aspx" => "html",
    ".ascx" => "html",
    ".cshtml" => "cshtml",
    "aspx-cs" => "cshtml",
    "aspx-csharp" => "cshtml",
    ".vbhtml" => "vbhtml",
    "aspx-vb" => "vbhtml",
    ".java" => "java",
    "js" => "javascript",
    "node" => "javascript",
    ".js" => "javascript",
    ".lisp" => "lisp",
    ".lsp" => "lisp",
    ".lua" => "lua",
    ".matlab" => "matlab",
    ".pas" => "pascal",
    ".pl" => "perl",
    ".php" => "php",
    "posh" => "powershell",
    ".ps1" => "powershell",
    ".pde" => "processing",
    ".py" => "python",
    ".r" => "r",
    "ru" => "ruby",
    ".ru" => "ruby",
    ".ruby" => "ruby",
    ".rs" => "rust",
    ".scala" => "scala",
    "sh" => "shell",
    "bash" => "shell",
    ".sh" => "shell",
    ".bash" => "shell",
    ".st" => "smalltalk",
    ".sql" => "sql",
    ".swift" => "swift",
    "ts" => "typescript",
    ".ts" => "typescript",
    ".xaml" => "xaml",
    "xsl" => "xml",
    "xslt" => "xml",
    "xsd" => "xml",
    "wsdl" => "xml",
    ".xml" => "xml",
    ".csdl" => "xml",
    ".edmx" => "xml",
    ".xsl" => "xml",
    ".xslt" => "xml",
    ".xsd" => "xml",
    ".wsdl" => "xml",
    "vbnet" => "vb",
    "vbscript" => "vb",
    ".vb" => "vb",
    ".bas" => "vb",
    ".vbs" => "vb",
    ".vba" => "vb",
};

/// "1-15,18,20": line numbers and inclusive ranges, comma separated
static LINE_RANGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(-\d+)?(,\d+(-\d+)?)*$").expect("valid line range regex"));

/// Snippet language for a file extension (".cs") or alias ("golang").
///
/// Unknown extensions fall back to the extension itself, without its dot.
pub fn language_for_extension(ext: &str) -> String {
    if ext.is_empty() {
        return String::new();
    }
    let lowered = ext.to_ascii_lowercase();
    SNIPPET_LANGUAGES
        .get(lowered.as_str())
        .map(|language| language.to_string())
        .unwrap_or_else(|| ext.trim_start_matches('.').to_string())
}

/// Snippet language for the file at `source`
pub fn language_for_path(source: &str) -> String {
    Path::new(source)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| language_for_extension(&format!(".{ext}")))
        .unwrap_or_default()
}

/// Whether `range` is a valid line selection such as "1-15,18,20". Spaces are ignored.
pub fn is_valid_line_range(range: &str) -> bool {
    let compact: String = range.chars().filter(|c| !c.is_whitespace()).collect();
    LINE_RANGE_REGEX.is_match(&compact)
}

/// Which part of the source file a reference selects
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// A region tagged with an id, e.g. `<Snippet1>`
    Id(String),
    /// Line ranges, e.g. "1-15,18,20"
    Range(String),
    /// The whole file
    WholeFile,
}

/// Render a snippet reference
pub fn snippet_builder(language: &str, source: &str, selector: &Selector) -> String {
    match selector {
        Selector::Id(id) => format!(":::code language=\"{language}\" source=\"{source}\" id=\"{id}\":::"),
        Selector::Range(range) => {
            format!(":::code language=\"{language}\" source=\"{source}\" range=\"{range}\":::")
        }
        Selector::WholeFile => format!(":::code language=\"{language}\" source=\"{source}\":::"),
    }
}

/// The first choice the user makes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorKind {
    Id,
    Range,
    None,
}

impl SelectorKind {
    pub const ALL: [SelectorKind; 3] = [SelectorKind::Id, SelectorKind::Range, SelectorKind::None];

    pub fn label(self) -> &'static str {
        match self {
            SelectorKind::Id => "Id",
            SelectorKind::Range => "Range",
            SelectorKind::None => "None",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SelectorKind::Id => "Select code by id tag (for example: <Snippet1>)",
            SelectorKind::Range => "Select code by line range (for example: 1-15,18,20)",
            SelectorKind::None => "Select entire file",
        }
    }

    /// Prompt for the detail this kind needs, if any
    pub fn detail_prompt(self) -> Option<&'static str> {
        match self {
            SelectorKind::Id => Some("Enter id to select"),
            SelectorKind::Range => Some("Enter line selection range"),
            SelectorKind::None => None,
        }
    }
}

/// Selector prompt sequence: kind, then detail, then done.
///
/// Dismissing either prompt finishes with no selector. An invalid line range keeps the
/// selector waiting for another range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnippetSelector {
    AwaitingSelectorKind,
    AwaitingDetail(SelectorKind),
    Done(Option<Selector>),
}

impl Default for SnippetSelector {
    fn default() -> Self {
        Self::start()
    }
}

impl SnippetSelector {
    pub fn start() -> Self {
        SnippetSelector::AwaitingSelectorKind
    }

    pub fn is_done(&self) -> bool {
        matches!(self, SnippetSelector::Done(_))
    }

    /// Feed the selector kind. `None` means the prompt was dismissed.
    pub fn choose_kind(self, kind: Option<SelectorKind>) -> Self {
        match self {
            SnippetSelector::AwaitingSelectorKind => match kind {
                Some(SelectorKind::None) => SnippetSelector::Done(Some(Selector::WholeFile)),
                Some(kind) => SnippetSelector::AwaitingDetail(kind),
                None => SnippetSelector::Done(None),
            },
            other => {
                log::debug!("Ignoring selector kind in state {other:?}");
                other
            }
        }
    }

    /// Feed the id or range. `None` or an empty string means the prompt was dismissed.
    pub fn provide_detail(self, detail: Option<String>) -> Self {
        match self {
            SnippetSelector::AwaitingDetail(kind) => {
                let Some(detail) = detail.map(|d| d.trim().to_string()).filter(|d| !d.is_empty()) else {
                    return SnippetSelector::Done(None);
                };
                match kind {
                    SelectorKind::Id => SnippetSelector::Done(Some(Selector::Id(detail))),
                    SelectorKind::Range if is_valid_line_range(&detail) => {
                        SnippetSelector::Done(Some(Selector::Range(detail)))
                    }
                    SelectorKind::Range => {
                        log::debug!("Rejected line range {detail:?}");
                        SnippetSelector::AwaitingDetail(kind)
                    }
                    SelectorKind::None => SnippetSelector::Done(Some(Selector::WholeFile)),
                }
            }
            other => {
                log::debug!("Ignoring selector detail in state {other:?}");
                other
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_builder() {
        assert_eq!(
            snippet_builder("csharp", "../code/Program.cs", &Selector::Id("Snippet1".to_string())),
            r#":::code language="csharp" source="../code/Program.cs" id="Snippet1":::"#
        );
        assert_eq!(
            snippet_builder("python", "app.py", &Selector::Range("1-15,18".to_string())),
            r#":::code language="python" source="app.py" range="1-15,18":::"#
        );
        assert_eq!(
            snippet_builder("rust", "main.rs", &Selector::WholeFile),
            r#":::code language="rust" source="main.rs":::"#
        );
    }

    #[test]
    fn test_language_for_extension() {
        assert_eq!(language_for_extension(".cs"), "csharp");
        assert_eq!(language_for_extension("golang"), "go");
        assert_eq!(language_for_extension(".HPP"), "cpp");
        assert_eq!(language_for_extension(".vbs"), "vb");
        assert_eq!(language_for_extension(".kt"), "kt");
        assert_eq!(language_for_extension(""), "");
    }

    #[test]
    fn test_language_for_path() {
        assert_eq!(language_for_path("samples/snippets/Program.cs"), "csharp");
        assert_eq!(language_for_path("scripts/build.sh"), "shell");
        assert_eq!(language_for_path("Makefile"), "");
    }

    #[test]
    fn test_line_ranges() {
        assert!(is_valid_line_range("1-15,18,20"));
        assert!(is_valid_line_range("3"));
        assert!(is_valid_line_range("1 - 4, 9"));
        assert!(!is_valid_line_range("1-"));
        assert!(!is_valid_line_range("a-b"));
        assert!(!is_valid_line_range(""));
    }

    #[test]
    fn test_whole_file_completes_immediately() {
        let state = SnippetSelector::start().choose_kind(Some(SelectorKind::None));
        assert_eq!(state, SnippetSelector::Done(Some(Selector::WholeFile)));
    }

    #[test]
    fn test_id_flow() {
        let state = SnippetSelector::start().choose_kind(Some(SelectorKind::Id));
        assert_eq!(state, SnippetSelector::AwaitingDetail(SelectorKind::Id));
        let state = state.provide_detail(Some(" Snippet1 ".to_string()));
        assert_eq!(state, SnippetSelector::Done(Some(Selector::Id("Snippet1".to_string()))));
    }

    #[test]
    fn test_invalid_range_waits_for_another() {
        let state = SnippetSelector::start()
            .choose_kind(Some(SelectorKind::Range))
            .provide_detail(Some("ten".to_string()));
        assert_eq!(state, SnippetSelector::AwaitingDetail(SelectorKind::Range));
        let state = state.provide_detail(Some("10-12".to_string()));
        assert_eq!(state, SnippetSelector::Done(Some(Selector::Range("10-12".to_string()))));
    }

    #[test]
    fn test_cancellation_at_each_step() {
        assert_eq!(SnippetSelector::start().choose_kind(None), SnippetSelector::Done(None));
        let state = SnippetSelector::start().choose_kind(Some(SelectorKind::Id));
        assert_eq!(state.clone().provide_detail(None), SnippetSelector::Done(None));
        assert_eq!(state.provide_detail(Some(String::new())), SnippetSelector::Done(None));
    }

    #[test]
    fn test_out_of_order_input_is_ignored() {
        let state = SnippetSelector::start().provide_detail(Some("x".to_string()));
        assert_eq!(state, SnippetSelector::AwaitingSelectorKind);
        let done = SnippetSelector::Done(None).choose_kind(Some(SelectorKind::Id));
        assert_eq!(done, SnippetSelector::Done(None));
    }
}
