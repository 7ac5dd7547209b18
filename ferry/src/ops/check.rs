//! Check operation - project validation.

use std::collections::HashSet;

use ferry_core::FileTree;
use ferry_manifest::Manifest;
use ferry_migrate::{RegistryState, Result, Scaffold};

use crate::reports::{CheckReport, RegistryCheck};

/// Execute the check operation.
///
/// Extracts the current version and parses every existing registry. Hard
/// failures (missing canonical file, bad marker, missing anchors) are
/// returned as errors; anything the next `new` would cope with becomes a
/// warning.
pub fn check(manifest: &Manifest, tree: &dyn FileTree, config: &str) -> Result<CheckReport> {
    let status = Scaffold::new(manifest)?.inspect(tree)?;

    let mut warnings = Vec::new();
    let mut registries = Vec::new();

    if status.next_version.is_none() {
        warnings.push(format!(
            "version {} in {} cannot be incremented",
            status.version,
            status.canonical.display()
        ));
    }

    for model in &status.models {
        let Some(registry) = &model.registry else {
            warnings.push(format!(
                "model '{}' has no registry, its migrations must be listed by hand",
                model.key
            ));
            continue;
        };

        match &registry.state {
            RegistryState::Missing => warnings.push(format!(
                "{} does not exist yet and will be created by the next migration",
                registry.path.display()
            )),
            RegistryState::Parsed { entries, .. } => {
                let mut seen = HashSet::new();
                for entry in entries {
                    if !seen.insert(entry) {
                        warnings.push(format!(
                            "'{}' is listed more than once in {}",
                            entry,
                            registry.path.display()
                        ));
                    }
                }
                registries.push(RegistryCheck {
                    path: registry.path.clone(),
                    name: registry.name.clone(),
                    entries: entries.len(),
                });
            }
        }
    }

    Ok(CheckReport {
        config: config.to_string(),
        canonical: status.canonical,
        version: status.version,
        registries,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use ferry_core::SchemaVersion;

    use super::*;
    use crate::{
        ops::fixtures::{self, CANONICAL, RESTORE_REGISTRY},
        reports::{BufferOutput, Report},
    };

    #[test]
    fn test_check_default_layout() {
        let manifest = Manifest::default_layout();
        let tree = fixtures::project();

        let report = check(&manifest, &tree, "built-in layout").unwrap();

        assert_eq!(report.version, SchemaVersion::new(5));
        assert_eq!(report.registries.len(), 1);
        assert_eq!(report.registries[0].name, "RestoreFileMigrations");
        assert_eq!(report.registries[0].entries, 1);
        assert_eq!(
            report.warnings,
            ["src/app/migrations/state/app/index.ts does not exist yet and will be created by the next migration"]
        );

        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(out.lines[0], "✓ built-in layout is valid");
        assert_eq!(out.warnings.len(), 1);
    }

    #[test]
    fn test_check_warns_about_duplicates() {
        let manifest = Manifest::default_layout();
        let registry = fixtures::RESTORE_INDEX.replace(
            "  firstMigration,\n",
            "  firstMigration,\n  firstMigration,\n",
        );
        let tree = fixtures::project().with_file(RESTORE_REGISTRY, registry);

        let report = check(&manifest, &tree, "ferry.toml").unwrap();

        assert!(
            report
                .warnings
                .contains(&format!("'firstMigration' is listed more than once in {}", RESTORE_REGISTRY))
        );
    }

    #[test]
    fn test_check_fails_without_anchor() {
        let manifest = Manifest::default_layout();
        let tree = fixtures::project().with_file(RESTORE_REGISTRY, "export const Other = [];\n");

        let err = check(&manifest, &tree, "ferry.toml").unwrap_err();

        assert!(matches!(*err, ferry_migrate::Error::RegistryAnchorMissing { .. }));
    }

    #[test]
    fn test_check_fails_without_marker() {
        let manifest = Manifest::default_layout();
        let tree = fixtures::project().with_file(CANONICAL, "export class AppState {}\n");

        let err = check(&manifest, &tree, "ferry.toml").unwrap_err();

        assert!(matches!(*err, ferry_migrate::Error::PatternMismatch { .. }));
    }
}
