//! TypeScript/JavaScript array literal builder.

/// Builder for JavaScript/TypeScript array literals of raw expressions.
#[derive(Debug, Clone, Default)]
pub struct JsArray {
    elements: Vec<String>,
}

impl JsArray {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a raw expression element (will not be quoted).
    pub fn raw(mut self, value: impl Into<String>) -> Self {
        self.elements.push(value.into());
        self
    }

    /// Check if the array is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Build the array literal as a single-line string.
    pub fn build(&self) -> String {
        format!("[{}]", self.elements.join(", "))
    }
}
