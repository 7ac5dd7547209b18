//! Configuration for the ferry migration scaffolder.
//!
//! A project describes its layout in a `ferry.toml` at its root: where the
//! canonical version marker lives, which models get a migration stub on
//! every run, and which registries list those stubs. Projects without a
//! `ferry.toml` get [`Manifest::default_layout`].

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{FerryToml, MANIFEST_FILE, Manifest, ModelConfig, ParseContext, ProjectConfig};
