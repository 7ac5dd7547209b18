//! TypeScript const declaration builder.

use super::{arrays::JsArray, objects::JsObject};
use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// The initializer of a const declaration.
#[derive(Debug, Clone)]
pub enum ConstValue {
    /// A raw expression.
    Raw(String),
    /// An object literal, rendered across multiple lines.
    Object(JsObject),
    /// An array literal, rendered on one line.
    Array(JsArray),
}

/// Builder for TypeScript const declarations.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    value: ConstValue,
    ty: Option<String>,
    exported: bool,
}

impl Const {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_value(name, ConstValue::Raw(value.into()))
    }

    /// Declare a const initialized with an object literal.
    pub fn object(name: impl Into<String>, value: JsObject) -> Self {
        Self::with_value(name, ConstValue::Object(value))
    }

    /// Declare a const initialized with an array literal.
    pub fn array(name: impl Into<String>, value: JsArray) -> Self {
        Self::with_value(name, ConstValue::Array(value))
    }

    fn with_value(name: impl Into<String>, value: ConstValue) -> Self {
        Self {
            name: name.into(),
            value,
            ty: None,
            exported: true,
        }
    }

    /// Add a type annotation.
    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    /// Make this const private (not exported).
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    fn declaration(&self) -> String {
        let export = if self.exported { "export " } else { "" };
        match &self.ty {
            Some(ty) => format!("{}const {}: {} =", export, self.name, ty),
            None => format!("{}const {} =", export, self.name),
        }
    }

    /// Build the const declaration as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let decl = self.declaration();
        match &self.value {
            ConstValue::Raw(value) => vec![CodeFragment::Line(format!("{} {};", decl, value))],
            ConstValue::Array(arr) => {
                vec![CodeFragment::Line(format!("{} {};", decl, arr.build()))]
            }
            ConstValue::Object(obj) if obj.is_empty() => {
                vec![CodeFragment::Line(format!("{} {{}};", decl))]
            }
            ConstValue::Object(obj) => vec![CodeFragment::block(
                format!("{} {{", decl),
                obj.properties_to_fragments(),
                "};",
            )],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_const() {
        let c = Const::new("foo", "42").build();
        assert_eq!(c, "export const foo = 42;\n");
    }

    #[test]
    fn test_const_with_type() {
        let c = Const::new("name", "'hello'").ty("string").build();
        assert_eq!(c, "export const name: string = 'hello';\n");
    }

    #[test]
    fn test_private_const() {
        let c = Const::new("secret", "123").private().build();
        assert_eq!(c, "const secret = 123;\n");
    }

    #[test]
    fn test_const_array() {
        let c = Const::array("RestoreFileMigrations", JsArray::new())
            .ty("Migration<RestoreFile>[]")
            .build();
        assert_eq!(
            c,
            "export const RestoreFileMigrations: Migration<RestoreFile>[] = [];\n"
        );
    }

    #[test]
    fn test_const_object() {
        let c = Const::object("testMigration", JsObject::new().raw("version", "5"))
            .ty("Migration<RestoreFile>")
            .build();
        assert_eq!(
            c,
            "export const testMigration: Migration<RestoreFile> = {\n  version: 5,\n};\n"
        );
    }

    #[test]
    fn test_const_empty_object() {
        let c = Const::object("empty", JsObject::new()).build();
        assert_eq!(c, "export const empty = {};\n");
    }
}
