//! Check command report data structures.

use std::path::PathBuf;

use ferry_core::SchemaVersion;

use super::output::{Output, Report};

/// Report data from validating a project.
#[derive(Debug)]
pub struct CheckReport {
    /// Where the configuration came from.
    pub config: String,
    /// File holding the version marker.
    pub canonical: PathBuf,
    /// Version found in the canonical file.
    pub version: SchemaVersion,
    /// Registries whose anchors were found.
    pub registries: Vec<RegistryCheck>,
    /// Warning messages.
    pub warnings: Vec<String>,
}

/// A registry that parsed successfully.
#[derive(Debug)]
pub struct RegistryCheck {
    pub path: PathBuf,
    pub name: String,
    pub entries: usize,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        out.preformatted(&format!("✓ {} is valid", self.config));
        out.newline();
        out.key_value_indented(
            "version",
            &format!("{} in {}", self.version, self.canonical.display()),
        );
        for registry in &self.registries {
            out.key_value_indented(
                "registry",
                &format!(
                    "{} in {} ({} {})",
                    registry.name,
                    registry.path.display(),
                    registry.entries,
                    if registry.entries == 1 { "entry" } else { "entries" }
                ),
            );
        }
    }
}
