//! Shared string utilities for identifier generation.

use serde::Deserialize;

/// Identifier casing applied to migration names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Casing {
    /// `add-owner` -> `addOwner`
    #[default]
    Camel,
    /// `add-owner` -> `AddOwner`
    Pascal,
}

impl Casing {
    /// Apply this casing to a separator-delimited name.
    pub fn apply(&self, s: &str) -> String {
        match self {
            Casing::Camel => to_camel_case(s),
            Casing::Pascal => to_pascal_case(s),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Casing::Camel => "camel",
            Casing::Pascal => "pascal",
        }
    }
}

/// Characters that separate words in a slug.
pub fn is_word_separator(c: char) -> bool {
    matches!(c, '-' | '_' | '.' | ' ')
}

/// Split a slug into its non-empty words.
pub fn split_words(s: &str) -> impl Iterator<Item = &str> {
    s.split(is_word_separator).filter(|w| !w.is_empty())
}

fn with_first(word: &str, upper: bool) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) if upper => c.to_ascii_uppercase().to_string() + chars.as_str(),
        Some(c) => c.to_ascii_lowercase().to_string() + chars.as_str(),
    }
}

/// Convert a string to camelCase (e.g., "hello-world" -> "helloWorld").
///
/// Only the first letter of each word is touched, so an identifier that is
/// already camelCase comes back unchanged.
pub fn to_camel_case(s: &str) -> String {
    split_words(s)
        .enumerate()
        .map(|(i, word)| with_first(word, i > 0))
        .collect()
}

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld")
pub fn to_pascal_case(s: &str) -> String {
    split_words(s).map(|word| with_first(word, true)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("test"), "test");
        assert_eq!(to_camel_case("test-migration"), "testMigration");
        assert_eq!(to_camel_case("add_owner_email"), "addOwnerEmail");
        assert_eq!(to_camel_case("Add-Owner"), "addOwner");
        assert_eq!(to_camel_case("v2.cleanup"), "v2Cleanup");
        assert_eq!(to_camel_case("double--dash"), "doubleDash");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_to_camel_case_is_idempotent() {
        for slug in ["testMigration", "test-migration", "addOwnerEmail", "x"] {
            let once = to_camel_case(slug);
            assert_eq!(to_camel_case(&once), once);
        }
        assert_eq!(to_camel_case("testMigration"), "testMigration");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("foo-bar-baz"), "FooBarBaz");
        assert_eq!(to_pascal_case("hElLo"), "HElLo");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_pascal_case_is_idempotent() {
        let once = to_pascal_case("test-migration");
        assert_eq!(once, "TestMigration");
        assert_eq!(to_pascal_case(&once), once);
    }

    #[test]
    fn test_casing_apply() {
        assert_eq!(Casing::Camel.apply("test-migration"), "testMigration");
        assert_eq!(Casing::Pascal.apply("test-migration"), "TestMigration");
        assert_eq!(Casing::default(), Casing::Camel);
    }

    #[test]
    fn test_casing_deserialize() {
        #[derive(Deserialize)]
        struct Config {
            casing: Casing,
        }
        let config: Config = toml::from_str(r#"casing = "pascal""#).unwrap();
        assert_eq!(config.casing, Casing::Pascal);
    }

    #[test]
    fn test_non_ascii_left_alone() {
        assert_eq!(to_camel_case("über-name"), "überName");
    }
}
