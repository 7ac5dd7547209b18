//! TypeScript code generation for ferry.
//!
//! This crate renders the two kinds of TypeScript file ferry writes from
//! scratch: migration stubs and empty migration registries. It also renders
//! the single import lines the migration engine splices into existing
//! registries, so generated and patched code share one style.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`ast`] - TypeScript syntax builders (imports, consts, objects, arrays)
//! - [`files`] - Generated files (migration stubs, registry skeletons)

mod code_file;
mod naming;
mod style;

pub mod ast;
pub mod builder;
pub mod files;

pub use ast::{ArrowFn, Const, Import, JsArray, JsObject};
pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use code_file::CodeFile;
pub use files::{MigrationTs, RegistryTs, TypeRef};
pub use naming::{TS_RESERVED_WORDS, is_reserved, is_valid_identifier};
pub use style::{Quote, TsStyle};
