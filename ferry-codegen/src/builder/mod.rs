//! Lowering from AST nodes to indented text.
//!
//! Nodes implement [`Renderable`] and produce [`CodeFragment`]s; a
//! [`CodeBuilder`] configured with an [`Indent`] turns those into a string.

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
