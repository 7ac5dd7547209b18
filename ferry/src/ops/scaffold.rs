//! Scaffold operation - generate the stubs for one migration.

use ferry_core::FileTree;
use ferry_manifest::Manifest;
use ferry_migrate::{Result, Scaffold};

use crate::reports::{PlannedFile, ScaffoldReport, ScaffoldResult};

/// Options for the scaffold operation.
pub struct ScaffoldOptions {
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the scaffold operation.
///
/// Plans the migration named `name` and, unless this is a dry run, applies
/// it to `tree`.
pub fn scaffold(
    manifest: &Manifest,
    tree: &mut dyn FileTree,
    name: &str,
    opts: ScaffoldOptions,
) -> Result<ScaffoldReport> {
    let scaffold = Scaffold::new(manifest)?;
    let plan = if opts.dry_run {
        scaffold.plan(&*tree, name)?
    } else {
        scaffold.run(tree, name)?
    };

    let files = plan
        .changes()
        .iter()
        .map(|change| PlannedFile {
            path: change.path().display().to_string(),
            created: change.is_create(),
            content: change.content().to_string(),
        })
        .collect();

    Ok(ScaffoldReport {
        identifier: plan.name.identifier.clone(),
        version: plan.version,
        next_version: plan.next_version,
        result: if opts.dry_run {
            ScaffoldResult::Preview(files)
        } else {
            ScaffoldResult::Written(files)
        },
    })
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::ops::fixtures::{self, CANONICAL};

    #[test]
    fn test_scaffold_writes_plan() {
        let manifest = Manifest::default_layout();
        let mut tree = fixtures::project();

        let report = scaffold(
            &manifest,
            &mut tree,
            "add-codes",
            ScaffoldOptions { dry_run: false },
        )
        .unwrap();

        assert_eq!(report.identifier, "addCodesMigration");
        let ScaffoldResult::Written(files) = &report.result else {
            panic!("expected written result");
        };
        assert_eq!(files.len(), 5);
        assert!(tree.exists(Path::new("src/app/migrations/state/app/6.add-codes.ts")));
        assert!(
            tree.read(Path::new(CANONICAL))
                .unwrap()
                .contains("version: 6")
        );
    }

    #[test]
    fn test_scaffold_dry_run_leaves_tree_alone() {
        let manifest = Manifest::default_layout();
        let mut tree = fixtures::project();
        let before = tree.clone();

        let report = scaffold(&manifest, &mut tree, "test", ScaffoldOptions { dry_run: true })
            .unwrap();

        assert_eq!(tree, before);
        let ScaffoldResult::Preview(files) = &report.result else {
            panic!("expected preview result");
        };
        assert_eq!(
            files.iter().map(|f| f.path.as_str()).collect::<Vec<_>>(),
            [
                "src/app/migrations/restore-file/6.test.ts",
                "src/app/migrations/state/app/6.test.ts",
                "src/app/migrations/restore-file/index.ts",
                "src/app/migrations/state/app/index.ts",
                CANONICAL,
            ]
        );
        assert!(files[2].content.contains("  testMigration,"));
    }

    #[test]
    fn test_scaffold_reports_engine_errors() {
        let manifest = Manifest::default_layout();
        let mut tree = fixtures::project();

        let err = scaffold(&manifest, &mut tree, "9lives", ScaffoldOptions { dry_run: false })
            .unwrap_err();

        assert!(matches!(*err, ferry_migrate::Error::InvalidName { .. }));
    }
}
