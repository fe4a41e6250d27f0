//! Compiled-in English/Greek dictionaries and the dotted-path resolver.
//!
//! English is the reference dictionary. A lookup that cannot be walked in the
//! active language is retried against English from the root, and a lookup
//! that fails there too comes back as the key itself, so a page never renders
//! an empty slot for a missing string.

use std::fmt;

use log::error;
use once_cell::sync::Lazy;
use serde_json::{Map, Value};

pub mod context;
pub mod meta;
pub mod store;

const EN_SOURCE: &str = include_str!("../../i18n/en.json");
const EL_SOURCE: &str = include_str!("../../i18n/el.json");

static BUILTIN: Lazy<Translations> = Lazy::new(|| {
    Translations::from_values(
        parse_dictionary(Language::En, EN_SOURCE),
        parse_dictionary(Language::El, EL_SOURCE),
    )
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    El,
}

impl Language {
    /// Dictionary every other language falls back to.
    pub const REFERENCE: Language = Language::En;

    pub fn tag(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::El => "el",
        }
    }

    /// Parses a persisted tag. Only the exact lowercase tags are accepted.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "en" => Some(Language::En),
            "el" => Some(Language::El),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::El,
            Language::El => Language::En,
        }
    }

    /// Short label shown on the navbar switch.
    pub fn label(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::El => "ΕΛ",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Translations {
    en: Value,
    el: Value,
}

impl Translations {
    pub fn from_values(en: Value, el: Value) -> Self {
        Self { en, el }
    }

    /// Dictionaries shipped with the site, parsed on first use.
    pub fn builtin() -> &'static Translations {
        &BUILTIN
    }

    pub fn dictionary(&self, language: Language) -> &Value {
        match language {
            Language::En => &self.en,
            Language::El => &self.el,
        }
    }

    /// Walks `key` in one dictionary only. A path that stops on a branch is a miss.
    pub fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        walk(self.dictionary(language), key)
    }

    pub fn resolve(&self, language: Language, key: &str) -> String {
        self.lookup(language, key)
            .or_else(|| {
                if language == Language::REFERENCE {
                    None
                } else {
                    self.lookup(Language::REFERENCE, key)
                }
            })
            .map(str::to_owned)
            .unwrap_or_else(|| key.to_owned())
    }
}

fn walk<'a>(root: &'a Value, key: &str) -> Option<&'a str> {
    key.split('.')
        .try_fold(root, |node, segment| node.as_object()?.get(segment))?
        .as_str()
}

fn parse_dictionary(language: Language, source: &str) -> Value {
    match serde_json::from_str::<Value>(source) {
        Ok(value) if value.is_object() => value,
        Ok(_) => {
            error!("Dictionary for {} is not an object, using an empty one", language);
            Value::Object(Map::new())
        }
        Err(e) => {
            error!("Failed to parse dictionary for {}: {}", language, e);
            Value::Object(Map::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Translations {
        Translations::from_values(
            json!({
                "a": { "b": "Hello" },
                "greeting": "Hi",
                "empty": "",
                "nested": { "deep": { "er": { "leaf": "bottom" } } },
            }),
            json!({
                "a": {},
                "greeting": "Γεια",
                "empty": "",
            }),
        )
    }

    #[test]
    fn falls_back_to_english_when_greek_branch_is_missing_a_leaf() {
        assert_eq!(sample().resolve(Language::El, "a.b"), "Hello");
    }

    #[test]
    fn returns_key_when_no_dictionary_has_the_path() {
        let translations = sample();
        assert_eq!(translations.resolve(Language::En, "a.c"), "a.c");
        assert_eq!(translations.resolve(Language::El, "a.c"), "a.c");
        assert_eq!(translations.resolve(Language::El, "nope.at.all"), "nope.at.all");
    }

    #[test]
    fn single_segment_keys_resolve_top_level_fields() {
        let translations = sample();
        assert_eq!(translations.resolve(Language::En, "greeting"), "Hi");
        assert_eq!(translations.resolve(Language::El, "greeting"), "Γεια");
    }

    #[test]
    fn empty_leaf_is_a_hit() {
        let translations = sample();
        assert_eq!(translations.lookup(Language::El, "empty"), Some(""));
        assert_eq!(translations.resolve(Language::El, "empty"), "");
    }

    #[test]
    fn path_ending_on_a_branch_is_a_miss() {
        let translations = sample();
        assert_eq!(translations.lookup(Language::En, "a"), None);
        assert_eq!(translations.resolve(Language::En, "nested.deep"), "nested.deep");
    }

    #[test]
    fn walking_through_a_leaf_is_a_miss() {
        assert_eq!(sample().resolve(Language::En, "greeting.more"), "greeting.more");
    }

    #[test]
    fn resolves_deep_paths() {
        assert_eq!(sample().resolve(Language::El, "nested.deep.er.leaf"), "bottom");
    }

    #[test]
    fn builtin_dictionaries_cover_every_english_path() {
        fn leaf_paths(prefix: &str, node: &Value, out: &mut Vec<String>) {
            match node {
                Value::Object(map) => {
                    for (segment, child) in map {
                        let path = if prefix.is_empty() {
                            segment.clone()
                        } else {
                            format!("{}.{}", prefix, segment)
                        };
                        leaf_paths(&path, child, out);
                    }
                }
                _ => out.push(prefix.to_owned()),
            }
        }

        let translations = Translations::builtin();
        let mut paths = Vec::new();
        leaf_paths("", translations.dictionary(Language::En), &mut paths);
        assert!(paths.len() > 50);

        for path in paths {
            let english = translations.lookup(Language::En, &path).map(str::to_owned);
            for language in [Language::En, Language::El] {
                let resolved = translations.resolve(language, &path);
                assert!(
                    resolved != path || english.as_deref() == Some(path.as_str()),
                    "{} resolved to its own key in {}",
                    path,
                    language
                );
            }
        }
    }

    #[test]
    fn builtin_greek_uses_its_own_strings_and_english_brand_names() {
        let translations = Translations::builtin();
        assert_eq!(translations.resolve(Language::El, "navbar.home"), "Αρχική");
        assert_eq!(
            translations.resolve(Language::El, "portfolio.intellity.title"),
            "Intellity"
        );
    }

    #[test]
    fn tags_round_trip_and_reject_unknown_values() {
        assert_eq!(Language::from_tag("el"), Some(Language::El));
        assert_eq!(Language::from_tag(Language::En.tag()), Some(Language::En));
        assert_eq!(Language::from_tag("EL"), None);
        assert_eq!(Language::from_tag("de"), None);
        assert_eq!(Language::from_tag(""), None);
    }
}
