//! Object literals: the body of every migration stub.

use crate::builder::{CodeBuilder, CodeFragment, Renderable};

#[derive(Debug, Clone)]
pub enum PropertyValue {
    /// Emitted verbatim, e.g. a number or an identifier.
    Expr(String),
    ArrowFn(ArrowFn),
}

/// `(params): returns => { body }`, always rendered as a block.
#[derive(Debug, Clone)]
pub struct ArrowFn {
    pub params: String,
    pub returns: Option<String>,
    pub body: Vec<String>,
}

impl ArrowFn {
    pub fn new(params: impl Into<String>) -> Self {
        Self {
            params: params.into(),
            returns: None,
            body: Vec::new(),
        }
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.returns = Some(ty.into());
        self
    }

    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    fn header(&self, key: &str) -> String {
        let ret = self
            .returns
            .as_deref()
            .map(|ty| format!(": {}", ty))
            .unwrap_or_default();
        format!("{}: ({}){} => {{", key, self.params, ret)
    }

    fn to_fragment(&self, key: &str) -> CodeFragment {
        CodeFragment::block(
            self.header(key),
            self.body.iter().map(CodeFragment::line).collect(),
            "},",
        )
    }
}

/// Object literal with properties kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct JsObject {
    properties: Vec<(String, PropertyValue)>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties
            .push((key.into(), PropertyValue::Expr(value.into())));
        self
    }

    pub fn arrow_fn(mut self, key: impl Into<String>, value: ArrowFn) -> Self {
        self.properties
            .push((key.into(), PropertyValue::ArrowFn(value)));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }

    /// One trailing-comma entry per property, without the surrounding braces.
    pub(crate) fn properties_to_fragments(&self) -> Vec<CodeFragment> {
        self.properties
            .iter()
            .map(|(key, value)| match value {
                PropertyValue::Expr(expr) => CodeFragment::line(format!("{}: {},", key, expr)),
                PropertyValue::ArrowFn(func) => func.to_fragment(key),
            })
            .collect()
    }
}

impl Renderable for JsObject {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.is_empty() {
            return vec![CodeFragment::line("{}")];
        }
        vec![CodeFragment::block("{", self.properties_to_fragments(), "}")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object() {
        assert_eq!(JsObject::new().build(), "{}\n");
    }

    #[test]
    fn test_version_properties_keep_order() {
        let obj = JsObject::new().raw("version", "5").raw("nextVersion", "6");
        assert_eq!(obj.build(), "{\n  version: 5,\n  nextVersion: 6,\n}\n");
    }

    #[test]
    fn test_arrow_fn_property() {
        let obj = JsObject::new().arrow_fn(
            "migrate",
            ArrowFn::new("state: AppStateModel")
                .returns("AppStateModel")
                .body_line("return state;"),
        );
        assert_eq!(
            obj.build(),
            "{\n  migrate: (state: AppStateModel): AppStateModel => {\n    return state;\n  },\n}\n"
        );
    }

    #[test]
    fn test_arrow_fn_without_return_type() {
        let obj = JsObject::new().arrow_fn("migrate", ArrowFn::new("state"));
        assert_eq!(obj.build(), "{\n  migrate: (state) => {\n  },\n}\n");
    }
}
