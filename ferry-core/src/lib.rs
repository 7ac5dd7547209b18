//! Core utilities and types for the ferry migration scaffolder.
//!
//! This crate provides the file-tree abstraction every other ferry crate
//! writes through, plus the small string and path helpers shared by the
//! code generator and the migration engine.

mod file;
mod paths;
mod tree;
mod utils;
mod version;

// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult};
// Relative module specifiers
pub use paths::{module_specifier, normalize_path};
// File trees
pub use tree::{DiskTree, FileTree, MemoryTree};
// String utilities
pub use utils::{Casing, is_word_separator, split_words, to_camel_case, to_pascal_case};
pub use version::SchemaVersion;
