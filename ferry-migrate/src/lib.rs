//! The migration engine behind `ferry new`.
//!
//! Given a project layout ([`ferry_manifest::Manifest`]) and a file tree,
//! [`Scaffold`] reads the schema version from the canonical file, generates
//! one stub per tracked model for the next version, appends each stub to its
//! model's registry and bumps the version marker in place.
//!
//! Work is split into a [`Plan`] built purely from reads and an apply step
//! that writes it. Any pattern, anchor or collision failure is therefore
//! reported before the first write.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod name;
mod plan;
mod registry;
mod scaffold;
mod scan;
mod status;
mod version;

pub use error::{Error, Result};
pub use name::{MigrationName, normalize};
pub use plan::{FileChange, Plan};
pub use registry::{RegistryAnchor, RegistryFile};
pub use scaffold::Scaffold;
pub use status::{ModelStatus, ProjectStatus, RegistryState, RegistryStatus};
pub use version::{VersionExtractor, VersionMarker};
