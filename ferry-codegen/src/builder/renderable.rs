//! Line-oriented output of the TypeScript AST.
//!
//! Every node lowers to a list of [`CodeFragment`]s; [`super::CodeBuilder`]
//! owns indentation, so nodes never see the configured indent width.

/// One piece of emitted TypeScript.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    Line(String),
    Blank,
    /// `open` and `close` at the current depth, `body` one level deeper.
    ///
    /// Object literals, arrow function bodies and `const` initializers all
    /// take this shape, so `close` carries its own punctuation (`},` or `};`).
    Block {
        open: String,
        body: Vec<CodeFragment>,
        close: String,
    },
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn block(
        open: impl Into<String>,
        body: Vec<CodeFragment>,
        close: impl Into<String>,
    ) -> Self {
        Self::Block {
            open: open.into(),
            body,
            close: close.into(),
        }
    }
}

/// A node that knows how to lower itself to fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl Renderable for CodeFragment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![self.clone()]
    }
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

impl<T: Renderable> Renderable for [T] {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.iter().flat_map(Renderable::to_fragments).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_concatenates_nodes() {
        struct Entry(&'static str);
        impl Renderable for Entry {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::line(format!("{},", self.0))]
            }
        }

        let entries = [Entry("firstMigration"), Entry("testMigration")];
        assert_eq!(
            entries[..].to_fragments(),
            vec![
                CodeFragment::line("firstMigration,"),
                CodeFragment::line("testMigration,"),
            ]
        );
    }
}
