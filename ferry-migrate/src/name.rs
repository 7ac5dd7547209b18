//! Migration name normalization.

use ferry_codegen::is_valid_identifier;
use ferry_core::Casing;

use crate::{Error, Result};

const SUFFIX: &str = "Migration";

/// A validated migration name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationName {
    /// The name as given, used verbatim in file names.
    pub slug: String,
    /// The exported binding, e.g. `addOwnerMigration`.
    pub identifier: String,
}

impl MigrationName {
    /// Validate `slug` and derive its identifier.
    pub fn parse(slug: &str, casing: Casing) -> Result<Self> {
        if let Some(reason) = slug_problem(slug) {
            return Err(Box::new(Error::InvalidName {
                name: slug.to_string(),
                reason: reason.to_string(),
            }));
        }

        let identifier = normalize(slug, casing);
        if !is_valid_identifier(&identifier) {
            return Err(Box::new(Error::InvalidName {
                name: slug.to_string(),
                reason: format!("'{}' is not a usable TypeScript identifier", identifier),
            }));
        }

        Ok(Self {
            slug: slug.to_string(),
            identifier,
        })
    }
}

/// Turn a slug into the exported migration identifier.
///
/// The casing is applied word by word and `Migration` is appended unless
/// the result already ends with it, so normalizing an identifier again
/// returns it unchanged.
///
/// ```
/// use ferry_core::Casing;
/// use ferry_migrate::normalize;
///
/// assert_eq!(normalize("test", Casing::Camel), "testMigration");
/// assert_eq!(normalize("test-migration", Casing::Camel), "testMigration");
/// assert_eq!(normalize("testMigration", Casing::Camel), "testMigration");
/// assert_eq!(normalize("add-owner", Casing::Pascal), "AddOwnerMigration");
/// ```
pub fn normalize(slug: &str, casing: Casing) -> String {
    let cased = casing.apply(slug);
    if cased.ends_with(SUFFIX) && cased.len() > SUFFIX.len() {
        cased
    } else {
        cased + SUFFIX
    }
}

fn slug_problem(slug: &str) -> Option<&'static str> {
    let mut chars = slug.chars();
    match chars.next() {
        None => Some("the name cannot be empty"),
        Some(c) if !c.is_ascii_alphabetic() => Some("the name must start with an ASCII letter"),
        _ if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ' ')) => {
            Some("use only ASCII letters, digits, '-', '_', '.' and spaces")
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_is_idempotent() {
        for slug in ["test", "test-migration", "add_owner", "v2.cleanup"] {
            let once = normalize(slug, Casing::Camel);
            assert_eq!(normalize(&once, Casing::Camel), once);
        }
    }

    #[test]
    fn test_normalize_separators() {
        assert_eq!(normalize("add_owner", Casing::Camel), "addOwnerMigration");
        assert_eq!(normalize("v2.cleanup", Casing::Camel), "v2CleanupMigration");
        assert_eq!(normalize("drop old keys", Casing::Camel), "dropOldKeysMigration");
    }

    #[test]
    fn test_bare_suffix_still_gets_suffix() {
        assert_eq!(normalize("Migration", Casing::Pascal), "MigrationMigration");
    }

    #[test]
    fn test_parse_keeps_slug_verbatim() {
        let name = MigrationName::parse("Add-Owner", Casing::Camel).unwrap();
        assert_eq!(name.slug, "Add-Owner");
        assert_eq!(name.identifier, "addOwnerMigration");
    }

    #[test]
    fn test_parse_rejects_bad_slugs() {
        for slug in ["", "1st", "-x", "a/b", "über", "semi;colon"] {
            let err = MigrationName::parse(slug, Casing::Camel).unwrap_err();
            assert!(
                matches!(*err, Error::InvalidName { .. }),
                "expected InvalidName for {:?}",
                slug
            );
        }
    }
}
