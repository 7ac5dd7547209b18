//! The slice of TypeScript syntax ferry emits: imports, exported consts
//! and the literals they hold.

mod arrays;
mod consts;
mod imports;
mod objects;

pub use arrays::JsArray;
pub use consts::{Const, ConstValue};
pub use imports::Import;
pub use objects::{ArrowFn, JsObject, PropertyValue};
