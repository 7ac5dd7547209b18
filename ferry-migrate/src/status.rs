//! Read-only view of a project's migration state.

use std::path::PathBuf;

use ferry_core::SchemaVersion;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectStatus {
    pub canonical: PathBuf,
    pub version: SchemaVersion,
    /// `None` when the version cannot be incremented.
    pub next_version: Option<SchemaVersion>,
    pub models: Vec<ModelStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelStatus {
    pub key: String,
    pub type_name: String,
    pub dir: PathBuf,
    pub registry: Option<RegistryStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryStatus {
    pub path: PathBuf,
    pub name: String,
    pub state: RegistryState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryState {
    /// Not created yet; the next migration creates it.
    Missing,
    Parsed {
        imports: usize,
        entries: Vec<String>,
    },
}
