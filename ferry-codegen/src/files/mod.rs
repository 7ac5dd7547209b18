//! TypeScript file generators.

mod migration_ts;
mod registry_ts;

use std::path::{Path, PathBuf};

pub use migration_ts::{MigrationTs, STUB_MARKER};
pub use registry_ts::RegistryTs;

use crate::{Import, TsStyle};

/// A named TypeScript export and the project-relative, extensionless module
/// that provides it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    pub name: String,
    pub module: PathBuf,
}

impl TypeRef {
    pub fn new(name: impl Into<String>, module: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            module: module.into(),
        }
    }

    /// The import of this type as seen from a file in `from_dir`.
    pub(crate) fn import_from(&self, from_dir: &Path, style: &TsStyle) -> Import {
        Import::new(ferry_core::module_specifier(from_dir, &self.module))
            .named(&self.name)
            .quote(style.quote)
    }
}
