//! Formatting knobs for generated TypeScript.

use serde::Deserialize;

use crate::Indent;

/// Quote character used for module specifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quote {
    #[default]
    Single,
    Double,
}

impl Quote {
    pub fn as_char(&self) -> char {
        match self {
            Quote::Single => '\'',
            Quote::Double => '"',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Quote::Single => "single",
            Quote::Double => "double",
        }
    }

    /// Wrap `s` in this quote, escaping backslashes and the quote itself.
    pub fn wrap(&self, s: &str) -> String {
        let q = self.as_char();
        let mut out = String::with_capacity(s.len() + 2);
        out.push(q);
        for c in s.chars() {
            if c == q || c == '\\' {
                out.push('\\');
            }
            out.push(c);
        }
        out.push(q);
        out
    }
}

/// Style shared by every generated TypeScript file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TsStyle {
    pub quote: Quote,
    pub indent: Indent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap() {
        assert_eq!(Quote::Single.wrap("./6.test"), "'./6.test'");
        assert_eq!(Quote::Double.wrap("./6.test"), "\"./6.test\"");
        assert_eq!(Quote::Single.wrap("it's"), "'it\\'s'");
    }

    #[test]
    fn test_default_style() {
        let style = TsStyle::default();
        assert_eq!(style.quote, Quote::Single);
        assert_eq!(style.indent, Indent::Spaces(2));
    }
}
