//! Language registry for code fence tags
//!
//! Wraps the static catalogue in [`crate::language_data`] with the lookups the rest of the
//! crate needs: alias validation, alias resolution and the picker views used by
//! completions and language prompts.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

use crate::config::LanguageConfig;
use crate::language_data::CATALOGUE;

/// A highlightable language and the fence tags that select it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageEntry {
    /// Human-readable label, never used as a tag
    pub canonical_name: &'static str,
    /// Accepted tags, the first one is the default
    pub aliases: &'static [&'static str],
    /// Shown in pickers even when the full catalogue is not requested
    pub is_popular: bool,
}

impl LanguageEntry {
    /// The tag inserted when this language is picked
    pub fn default_alias(&self) -> &'static str {
        self.aliases.first().copied().unwrap_or_default()
    }

    /// One-line description shown next to the entry in pickers and completions
    pub fn picker_description(&self) -> String {
        format!(
            "Use the \"{}\" language identifier (alias: {}).",
            self.canonical_name,
            self.default_alias()
        )
    }
}

/// Result of checking a single fence tag against the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub tag: String,
    pub is_valid: bool,
}

/// Read-only view over the language catalogue
///
/// The process-wide instance is built lazily on first use (see [`LanguageRegistry::global`]).
#[derive(Debug)]
pub struct LanguageRegistry {
    entries: &'static [LanguageEntry],
    /// Lowercase alias -> index into `entries`
    alias_index: HashMap<String, usize>,
    popular: Vec<LanguageEntry>,
    sorted: Vec<LanguageEntry>,
}

static GLOBAL: LazyLock<LanguageRegistry> = LazyLock::new(|| LanguageRegistry::new(CATALOGUE));

impl LanguageRegistry {
    /// Build a registry over a catalogue.
    ///
    /// When two entries claim the same alias (ignoring case) the first entry keeps it.
    pub fn new(entries: &'static [LanguageEntry]) -> Self {
        let mut alias_index = HashMap::with_capacity(entries.len() * 2);
        for (idx, entry) in entries.iter().enumerate() {
            for alias in entry.aliases {
                let key = alias.to_lowercase();
                if key.is_empty() {
                    continue;
                }
                if alias_index.contains_key(&key) {
                    log::debug!(
                        "Alias '{}' of '{}' is already registered, keeping the first owner",
                        alias,
                        entry.canonical_name
                    );
                    continue;
                }
                alias_index.insert(key, idx);
            }
        }

        let popular = entries.iter().filter(|e| e.is_popular).copied().collect();
        let mut sorted = entries.to_vec();
        sorted.sort_by(|a, b| a.canonical_name.cmp(b.canonical_name));

        Self {
            entries,
            alias_index,
            popular,
            sorted,
        }
    }

    /// The process-wide registry built from the built-in catalogue
    pub fn global() -> &'static LanguageRegistry {
        &GLOBAL
    }

    /// All entries in catalogue order
    pub fn entries(&self) -> &[LanguageEntry] {
        self.entries
    }

    /// Case-insensitive membership test against every alias in the registry.
    /// The empty string is never valid.
    pub fn is_valid_alias(&self, tag: &str) -> bool {
        if tag.is_empty() {
            return false;
        }
        self.alias_index.contains_key(&tag.to_lowercase())
    }

    /// Check a tag and keep the tag alongside the verdict
    pub fn validate(&self, tag: &str) -> ValidationResult {
        ValidationResult {
            tag: tag.to_string(),
            is_valid: self.is_valid_alias(tag),
        }
    }

    /// Resolve an alias (any case) to the entry that owns it
    pub fn resolve(&self, alias: &str) -> Option<&LanguageEntry> {
        self.alias_index
            .get(&alias.to_lowercase())
            .map(|&idx| &self.entries[idx])
    }

    /// Find an entry by its canonical name
    pub fn find_by_name(&self, canonical_name: &str) -> Option<&LanguageEntry> {
        self.entries.iter().find(|e| e.canonical_name == canonical_name)
    }

    /// Entries offered by pickers and completions.
    ///
    /// With `include_all_languages` the whole catalogue is returned sorted by canonical name;
    /// otherwise only popular entries, in catalogue order.
    pub fn list_for_picker(&self, include_all_languages: bool) -> &[LanguageEntry] {
        if include_all_languages {
            &self.sorted
        } else {
            &self.popular
        }
    }

    /// Picker entries for the given configuration
    pub fn configured(&self, config: &LanguageConfig) -> &[LanguageEntry] {
        self.list_for_picker(config.all_available_languages)
    }

    /// The tag inserted for an entry
    pub fn default_alias(entry: &LanguageEntry) -> &'static str {
        entry.default_alias()
    }
}
