//! Whole TypeScript modules: an import block, then top-level statements.

use crate::{
    ast::Import,
    builder::{CodeBuilder, CodeFragment, Indent, Renderable},
};

/// One generated module. Imports render first, in insertion order; every
/// body item is separated from the next by one blank line.
///
/// ```
/// use ferry_codegen::{CodeFile, Const, Import};
///
/// let file = CodeFile::new()
///     .import(Import::new("./6.test").named("testMigration"))
///     .add(Const::new("answer", "42"))
///     .render();
///
/// assert_eq!(
///     file,
///     "import { testMigration } from './6.test';\n\nexport const answer = 42;\n"
/// );
/// ```
#[derive(Default)]
pub struct CodeFile {
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Append a top-level statement.
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    pub fn render(&self) -> String {
        self.render_with_indent(Indent::TYPESCRIPT)
    }

    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);

        for import in &self.imports {
            builder.emit(import);
        }

        if !self.imports.is_empty() && !self.body.is_empty() {
            builder.push_blank();
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment);
            }
        }

        builder.build()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.body.is_empty()
    }
}
