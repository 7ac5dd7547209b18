//! TypeScript import builder.

use crate::{
    Quote,
    builder::{CodeBuilder, CodeFragment, Renderable},
};

/// Builder for TypeScript import statements.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    default: Option<String>,
    named: Vec<String>,
    type_only: bool,
    quote: Quote,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            default: None,
            named: Vec::new(),
            type_only: false,
            quote: Quote::default(),
        }
    }

    /// Import a default export.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Make this a type-only import (`import type { ... }`).
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }

    /// Quote the module specifier with `quote`.
    pub fn quote(mut self, quote: Quote) -> Self {
        self.quote = quote;
        self
    }

    /// The module specifier this import reads from.
    pub fn module(&self) -> &str {
        &self.from
    }

    /// Format the import statement without a trailing newline.
    pub fn statement(&self) -> String {
        let type_kw = if self.type_only { "type " } else { "" };
        let from = self.quote.wrap(&self.from);

        match (&self.default, self.named.is_empty()) {
            (Some(def), true) => format!("import {}{} from {};", type_kw, def, from),
            (Some(def), false) => format!(
                "import {}{}, {{ {} }} from {};",
                type_kw,
                def,
                self.named.join(", "),
                from
            ),
            (None, false) => format!(
                "import {}{{ {} }} from {};",
                type_kw,
                self.named.join(", "),
                from
            ),
            (None, true) => format!("import {};", from),
        }
    }

    /// Build the import as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.statement())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_import() {
        let i = Import::new("./module").default("Foo").build();
        assert_eq!(i, "import Foo from './module';\n");
    }

    #[test]
    fn test_named_import() {
        let i = Import::new("./utils").named("foo").named("bar").build();
        assert_eq!(i, "import { foo, bar } from './utils';\n");
    }

    #[test]
    fn test_default_and_named_import() {
        let i = Import::new("@ngxs/store")
            .default("Store")
            .named("State")
            .build();
        assert_eq!(i, "import Store, { State } from '@ngxs/store';\n");
    }

    #[test]
    fn test_type_only_import() {
        let i = Import::new("./types").named("Config").type_only().build();
        assert_eq!(i, "import type { Config } from './types';\n");
    }

    #[test]
    fn test_side_effect_import() {
        let i = Import::new("./polyfill").build();
        assert_eq!(i, "import './polyfill';\n");
    }

    #[test]
    fn test_double_quoted_import() {
        let i = Import::new("./6.test")
            .named("testMigration")
            .quote(Quote::Double)
            .statement();
        assert_eq!(i, "import { testMigration } from \"./6.test\";");
    }
}
