//! Info operation - project information.

use ferry_core::FileTree;
use ferry_manifest::Manifest;
use ferry_migrate::{Result, Scaffold};

use crate::reports::InfoReport;

/// Execute the info operation.
pub fn info(manifest: &Manifest, tree: &dyn FileTree, config: &str) -> Result<InfoReport> {
    let status = Scaffold::new(manifest)?.inspect(tree)?;
    Ok(InfoReport {
        config: config.to_string(),
        status,
    })
}

#[cfg(test)]
mod tests {
    use ferry_core::SchemaVersion;

    use super::*;
    use crate::ops::fixtures;

    #[test]
    fn test_info_collects_models() {
        let manifest = Manifest::default_layout();
        let report = info(&manifest, &fixtures::project(), "built-in layout").unwrap();

        assert_eq!(report.status.next_version, Some(SchemaVersion::new(6)));
        assert_eq!(
            report
                .status
                .models
                .iter()
                .map(|m| m.key.as_str())
                .collect::<Vec<_>>(),
            ["restore-file", "state-app"]
        );
    }
}
