//! Manifest types and parsing for ferry.toml files.

mod file;
mod parse;
mod validate;

use std::path::{Path, PathBuf};

use ferry_codegen::{Indent, Quote, TsStyle};
use ferry_core::Casing;
use indexmap::IndexMap;
use serde::Deserialize;

pub use file::FerryToml;
pub use validate::ParseContext;

/// File name ferry looks for at the project root.
pub const MANIFEST_FILE: &str = "ferry.toml";

/// Root manifest for ferry.toml
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Project-wide settings
    #[serde(default)]
    pub project: ProjectConfig,

    /// Tracked models, in the order their stubs are generated
    pub models: IndexMap<String, ModelConfig>,
}

/// The `[project]` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// File holding the `version` marker.
    pub canonical: PathBuf,
    /// Decorator whose `defaults` object carries the version.
    pub decorator: String,
    /// Extension of generated stubs, without the dot.
    pub extension: String,
    pub casing: Casing,
    pub quote: Quote,
    pub indent: Indent,
    /// Extensionless module exporting the migration contract type.
    pub contract: PathBuf,
    pub contract_type: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            canonical: PathBuf::from("src/app/state/app/app.state.ts"),
            decorator: "State".to_string(),
            extension: "ts".to_string(),
            casing: Casing::default(),
            quote: Quote::default(),
            indent: Indent::default(),
            contract: PathBuf::from("src/app/migrations/migrator/migrator"),
            contract_type: "Migration".to_string(),
        }
    }
}

impl ProjectConfig {
    /// Formatting used for every generated or patched TypeScript file.
    pub fn style(&self) -> TsStyle {
        TsStyle {
            quote: self.quote,
            indent: self.indent,
        }
    }
}

/// A `[models.<key>]` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelConfig {
    /// Domain type the model's migrations transform.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Extensionless module exporting the domain type.
    pub import: PathBuf,
    /// Directory the model's stubs are written to.
    pub dir: PathBuf,
    /// Registry file listing the model's migrations.
    #[serde(default)]
    pub registry: Option<PathBuf>,
    /// Name of the exported registry array.
    #[serde(default)]
    pub registry_name: Option<String>,
}

impl ModelConfig {
    /// The registry array name, defaulting to `<type>Migrations`.
    ///
    /// Returns `None` when the model has no registry.
    pub fn registry_name(&self) -> Option<String> {
        self.registry.as_ref()?;
        Some(
            self.registry_name
                .clone()
                .unwrap_or_else(|| format!("{}Migrations", self.type_name)),
        )
    }
}

impl Manifest {
    /// The layout used when a project has no ferry.toml.
    ///
    /// Tracks the persisted restore file and the application state, each
    /// with its own registry.
    pub fn default_layout() -> Self {
        let mut models = IndexMap::new();
        models.insert(
            "restore-file".to_string(),
            ModelConfig {
                type_name: "RestoreFile".to_string(),
                import: PathBuf::from(
                    "src/app/features/restore/owner/restore-file/restore-file.model",
                ),
                dir: PathBuf::from("src/app/migrations/restore-file"),
                registry: Some(PathBuf::from("src/app/migrations/restore-file/index.ts")),
                registry_name: Some("RestoreFileMigrations".to_string()),
            },
        );
        models.insert(
            "state-app".to_string(),
            ModelConfig {
                type_name: "AppStateModel".to_string(),
                import: PathBuf::from("src/app/state/app/app.state"),
                dir: PathBuf::from("src/app/migrations/state/app"),
                registry: Some(PathBuf::from("src/app/migrations/state/app/index.ts")),
                registry_name: Some("AppStateMigrations".to_string()),
            },
        );

        Self {
            project: ProjectConfig::default(),
            models,
        }
    }

    /// Load `ferry.toml` from `root`, falling back to the default layout
    /// when the file does not exist.
    pub fn discover(root: &Path) -> crate::Result<Self> {
        let path = root.join(MANIFEST_FILE);
        if path.is_file() {
            log::debug!("loading {}", path.display());
            Self::from_file(path)
        } else {
            log::debug!(
                "no {} in {}, using the default layout",
                MANIFEST_FILE,
                root.display()
            );
            Ok(Self::default_layout())
        }
    }

    /// Iterate over models that have a registry, with the registry path and
    /// array name.
    pub fn registries(&self) -> impl Iterator<Item = (&str, &Path, String)> {
        self.models.iter().filter_map(|(key, model)| {
            let path = model.registry.as_deref()?;
            let name = model.registry_name()?;
            Some((key.as_str(), path, name))
        })
    }
}
