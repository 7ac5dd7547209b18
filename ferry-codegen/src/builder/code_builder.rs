//! Indentation-aware string buffer behind every generated file.

use super::{CodeFragment, Indent, Renderable};

/// Accumulates generated TypeScript one line at a time.
///
/// ```
/// use ferry_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::typescript();
/// builder
///     .push_line("export const m = {")
///     .push_indent()
///     .push_line("version: 5,")
///     .push_dedent()
///     .push_line("};");
/// builder.apply_fragment(&CodeFragment::Blank);
/// assert_eq!(builder.build(), "export const m = {\n  version: 5,\n};\n\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    depth: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            depth: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Builder using [`Indent::TYPESCRIPT`].
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Write `s` at the current depth followed by `\n`.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        for _ in 0..self.depth {
            self.buffer.push_str(self.indent.as_str());
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Blank lines never carry indentation.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    pub fn emit(&mut self, node: &(impl Renderable + ?Sized)) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(&fragment);
        }
        self
    }

    pub fn apply_fragment(&mut self, fragment: &CodeFragment) -> &mut Self {
        match fragment {
            CodeFragment::Line(s) => self.push_line(s),
            CodeFragment::Blank => self.push_blank(),
            CodeFragment::Block { open, body, close } => {
                self.push_line(open).push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent().push_line(close)
            }
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn build(self) -> String {
        self.buffer
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::typescript()
    }
}
