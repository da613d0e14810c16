//! Syntax highlighting language catalogue
//!
//! Derived from the highlight.js language list used by the Docs rendering pipeline.
//! Canonical names are display labels; the first alias of each entry is the tag that
//! gets inserted into a fence. Aliases are unique across the whole catalogue,
//! compared case-insensitively.

use crate::languages::LanguageEntry;

const fn entry(canonical_name: &'static str, aliases: &'static [&'static str], is_popular: bool) -> LanguageEntry {
    LanguageEntry {
        canonical_name,
        aliases,
        is_popular,
    }
}

/// Every language the renderer can highlight, in catalogue order
pub static CATALOGUE: &[LanguageEntry] = &[
    entry("1C", &["1c"], false),
    entry("ABNF", &["abnf"], false),
    entry("Access logs", &["accesslog"], false),
    entry("Ada", &["ada"], false),
    entry("ARM assembler", &["armasm", "arm"], false),
    entry("AVR assembler", &["avrasm"], false),
    entry("ActionScript", &["actionscript", "as"], false),
    entry("Alan", &["alan", "i"], false),
    entry("AngelScript", &["angelscript", "asc"], false),
    entry("Apache", &["apache", "apacheconf"], false),
    entry("AppleScript", &["applescript", "osascript"], false),
    entry("Arcade", &["arcade"], false),
    entry("AsciiDoc", &["asciidoc", "adoc"], false),
    entry("AspectJ", &["aspectj"], false),
    entry("AutoHotkey", &["autohotkey"], false),
    entry("AutoIt", &["autoit"], false),
    entry("Awk", &["awk", "mawk", "nawk", "gawk"], false),
    entry("Axapta", &["axapta"], false),
    entry("Azure CLI", &["azurecli"], true),
    entry("Azure CLI (Interactive)", &["azurecli-interactive"], true),
    entry("Azure Powershell (Interactive)", &["azurepowershell-interactive"], true),
    entry("Bash", &["bash", "sh", "zsh"], true),
    entry("Basic", &["basic"], false),
    entry("BNF", &["bnf"], false),
    entry("Brainfuck", &["brainfuck", "bf"], false),
    entry("C#", &["csharp", "cs"], true),
    entry("C# (Interactive)", &["csharp-interactive"], true),
    entry("C++", &["cpp", "c", "cc", "h", "c++", "h++", "hpp"], true),
    entry("C/AL", &["cal"], false),
    entry("Cache Object Script", &["cos", "cls"], false),
    entry("CMake", &["cmake", "cmake.in"], false),
    entry("Coq", &["coq"], false),
    entry("CSP", &["csp"], false),
    entry("CSS", &["css"], false),
    entry("Cap\u{2019}n Proto", &["capnproto", "capnp"], false),
    entry("Clojure", &["clojure", "clj"], false),
    entry("CoffeeScript", &["coffeescript", "coffee", "cson", "iced"], false),
    entry("Crmsh", &["crmsh", "crm", "pcmk"], false),
    entry("Crystal", &["crystal", "cr"], false),
    entry("Cypher (Neo4j)", &["cypher"], false),
    entry("D", &["d"], false),
    entry("DNS Zone file", &["dns", "zone", "bind"], false),
    entry("DOS", &["dos", "bat", "cmd"], true),
    entry("Dart", &["dart"], false),
    entry("Delphi", &["delphi", "dpr", "dfm", "pas", "pascal", "freepascal", "lazarus", "lpr", "lfm"], false),
    entry("Diff", &["diff", "patch"], false),
    entry("Django", &["django", "jinja"], false),
    entry("Dockerfile", &["dockerfile", "docker"], true),
    entry("dsconfig", &["dsconfig"], false),
    entry("DTS (Device Tree)", &["dts"], false),
    entry("Dust", &["dust", "dst"], false),
    entry("Dylan", &["dylan"], false),
    entry("EBNF", &["ebnf"], false),
    entry("Elixir", &["elixir"], false),
    entry("Elm", &["elm"], false),
    entry("Erlang", &["erlang", "erl"], false),
    entry("Excel", &["excel", "xls", "xlsx"], false),
    entry("Extempore", &["extempore", "xtlang", "xtm"], false),
    entry("F#", &["fsharp", "fs"], true),
    entry("FIX", &["fix"], false),
    entry("Fortran", &["fortran", "f90", "f95"], false),
    entry("G-Code", &["gcode", "nc"], false),
    entry("Gams", &["gams", "gms"], false),
    entry("GAUSS", &["gauss", "gss"], false),
    entry("GDScript", &["godot", "gdscript"], false),
    entry("Gherkin", &["gherkin"], false),
    entry("GN for Ninja", &["gn", "gni"], false),
    entry("Go", &["go", "golang"], true),
    entry("Golo", &["golo", "gololang"], false),
    entry("Gradle", &["gradle"], false),
    entry("Groovy", &["groovy"], false),
    entry("HTML", &["html", "xhtml"], true),
    entry("HTTP", &["http", "https"], true),
    entry("Haml", &["haml"], false),
    entry("Handlebars", &["handlebars", "hbs", "html.hbs", "html.handlebars"], false),
    entry("Haskell", &["haskell", "hs"], false),
    entry("Haxe", &["haxe", "hx"], false),
    entry("Hy", &["hy", "hylang"], false),
    entry("Ini", &["ini"], true),
    entry("Inform7", &["inform7", "i7"], false),
    entry("IRPF90", &["irpf90"], false),
    entry("JSON", &["json"], true),
    entry("Java", &["java", "jsp"], true),
    entry("JavaScript", &["javascript", "js", "jsx"], true),
    entry("Kotlin", &["kotlin", "kt"], true),
    entry("Leaf", &["leaf"], false),
    entry("Lasso", &["lasso", "ls", "lassoscript"], false),
    entry("Less", &["less"], true),
    entry("LDIF", &["ldif"], false),
    entry("Lisp", &["lisp"], false),
    entry("LiveCode Server", &["livecodeserver"], false),
    entry("LiveScript", &["livescript"], false),
    entry("Lua", &["lua"], false),
    entry("Makefile", &["makefile", "mk", "mak"], true),
    entry("Markdown", &["markdown", "md", "mkdown", "mkd"], true),
    entry("Mathematica", &["mathematica", "mma", "wl"], false),
    entry("Matlab", &["matlab"], false),
    entry("Maxima", &["maxima"], false),
    entry("Maya Embedded Language", &["mel"], false),
    entry("Mercury", &["mercury"], false),
    entry("mIRC Scripting Language", &["mirc", "mrc"], false),
    entry("Mizar", &["mizar"], false),
    entry("Mojolicious", &["mojolicious"], false),
    entry("Monkey", &["monkey"], false),
    entry("Moonscript", &["moonscript", "moon"], false),
    entry("MS Graph (Interactive)", &["msgraph-interactive"], true),
    entry("N1QL", &["n1ql"], false),
    entry("NSIS", &["nsis"], false),
    entry("Nginx", &["nginx", "nginxconf"], true),
    entry("Nimrod", &["nimrod", "nim"], false),
    entry("Nix", &["nix"], false),
    entry("OCaml", &["ocaml", "ml"], false),
    entry("Objective C", &["objectivec", "mm", "objc", "obj-c"], true),
    entry("OpenGL Shading Language", &["glsl"], false),
    entry("OpenSCAD", &["openscad", "scad"], false),
    entry("Oracle Rules Language", &["ruleslanguage"], false),
    entry("Oxygene", &["oxygene"], false),
    entry("PF", &["pf", "pf.conf"], false),
    entry("PHP", &["php", "php3", "php4", "php5", "php6"], true),
    entry("Parser3", &["parser3"], false),
    entry("Perl", &["perl", "pl", "pm"], false),
    entry("Plaintext: no highlight", &["plaintext"], true),
    entry("Pony", &["pony"], false),
    entry("PostgreSQL & PL/pgSQL", &["pgsql", "postgres", "postgresql"], false),
    entry("PowerShell", &["powershell", "ps"], true),
    entry("PowerShell (Interactive)", &["powershell-interactive"], true),
    entry("Processing", &["processing"], false),
    entry("Prolog", &["prolog"], false),
    entry("Properties", &["properties"], false),
    entry("Protocol Buffers", &["protobuf"], true),
    entry("Puppet", &["puppet", "pp"], false),
    entry("Python", &["python", "py", "gyp"], true),
    entry("Python profiler results", &["profile"], false),
    entry("Q", &["k", "kdb"], true),
    entry("QML", &["qml"], false),
    entry("R", &["r"], true),
    entry("Razor CSHTML", &["cshtml", "razor", "razor-cshtml"], true),
    entry("ReasonML", &["reasonml", "re"], false),
    entry("RenderMan RIB", &["rib"], false),
    entry("RenderMan RSL", &["rsl"], false),
    entry("Roboconf", &["graph", "instances"], false),
    entry("Robot Framework", &["robot", "rf"], false),
    entry("RPM spec files", &["rpm-specfile", "rpm", "spec", "rpm-spec", "specfile"], false),
    entry("Ruby", &["ruby", "rb", "gemspec", "podspec", "thor", "irb"], true),
    entry("Rust", &["rust", "rs"], true),
    entry("SAS", &["sas"], true),
    entry("SCSS", &["scss"], true),
    entry("SQL", &["sql"], true),
    entry("STEP Part 21", &["p21", "step", "stp"], false),
    entry("Scala", &["scala"], true),
    entry("Scheme", &["scheme"], false),
    entry("Scilab", &["scilab", "sci"], false),
    entry("Shape Expressions", &["shexc"], false),
    entry("Shell", &["shell", "console"], true),
    entry("Smali", &["smali"], false),
    entry("Smalltalk", &["smalltalk", "st"], false),
    entry("Solidity", &["solidity", "sol"], false),
    entry("Stan", &["stan"], false),
    entry("Stata", &["stata"], false),
    entry("Structured Text", &["iecst", "scl", "stl", "structured-text"], true),
    entry("Stylus", &["stylus", "styl"], false),
    entry("SubUnit", &["subunit"], false),
    entry("Supercollider", &["supercollider", "sc"], false),
    entry("Swift", &["swift"], true),
    entry("Tcl", &["tcl", "tk"], false),
    entry("Terraform (HCL)", &["terraform", "tf", "hcl"], false),
    entry("Test Anything Protocol", &["tap"], false),
    entry("TeX", &["tex"], false),
    entry("Thrift", &["thrift"], false),
    entry("TOML", &["toml"], false),
    entry("TP", &["tp"], false),
    entry("Twig", &["twig", "craftcms"], false),
    entry("TypeScript", &["typescript", "ts"], true),
    entry("VB.Net", &["vbnet", "vb"], true),
    entry("VBScript", &["vbscript", "vbs"], false),
    entry("VHDL", &["vhdl"], false),
    entry("Vala", &["vala"], false),
    entry("Verilog", &["verilog", "v"], false),
    entry("Vim Script", &["vim"], true),
    entry("x86 Assembly", &["x86asm"], true),
    entry("XL", &["xl", "tao"], false),
    entry("XQuery", &["xquery", "xpath", "xq"], false),
    entry("YAML", &["yml", "yaml"], true),
    entry("XML", &["xml", "rss", "atom", "xjb", "xsd", "xsl", "plist"], true),
    entry("Zephir", &["zephir", "zep"], false),
];

// Statistics:
// - 185 languages
// - 48 popular
