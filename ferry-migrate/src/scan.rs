//! A minimal TypeScript lexer.
//!
//! Only distinguishes code from comments and string literals, which is all
//! the registry patcher needs to find brackets and commas reliably.

/// A character outside comments and string literals, with its byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CodeChar {
    pub offset: usize,
    pub ch: char,
}

impl CodeChar {
    pub fn end(&self) -> usize {
        self.offset + self.ch.len_utf8()
    }
}

#[derive(Clone, Copy)]
enum State {
    Code,
    LineComment,
    BlockComment,
    Str(char),
}

/// Scan `src`, keeping every character that is code.
///
/// The contents of string literals (including their quotes) and comments are
/// dropped. Template literal interpolations are treated as part of the string.
pub(crate) fn code_chars(src: &str) -> Vec<CodeChar> {
    let mut out = Vec::new();
    let mut state = State::Code;
    let mut chars = src.char_indices().peekable();

    while let Some((offset, ch)) = chars.next() {
        match state {
            State::Code => match ch {
                '/' if chars.peek().is_some_and(|&(_, c)| c == '/') => {
                    chars.next();
                    state = State::LineComment;
                }
                '/' if chars.peek().is_some_and(|&(_, c)| c == '*') => {
                    chars.next();
                    state = State::BlockComment;
                }
                '\'' | '"' | '`' => state = State::Str(ch),
                _ => out.push(CodeChar { offset, ch }),
            },
            State::LineComment => {
                if ch == '\n' {
                    out.push(CodeChar { offset, ch });
                    state = State::Code;
                }
            }
            State::BlockComment => {
                if ch == '*' && chars.peek().is_some_and(|&(_, c)| c == '/') {
                    chars.next();
                    state = State::Code;
                }
            }
            State::Str(quote) => match ch {
                '\\' => {
                    chars.next();
                }
                '\n' if quote != '`' => state = State::Code,
                c if c == quote => state = State::Code,
                _ => {}
            },
        }
    }

    out
}

/// Whether `offset` is the start of a code character in `code`.
pub(crate) fn is_code(code: &[CodeChar], offset: usize) -> bool {
    code.binary_search_by_key(&offset, |c| c.offset).is_ok()
}

/// Index in `code` of the bracket closing the one at `open`.
pub(crate) fn matching_close(code: &[CodeChar], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in code.iter().enumerate().skip(open) {
        match c.ch {
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split the code strictly between `open` and `close` at top-level commas.
///
/// Returns the byte range of every non-empty element and whether the list
/// ends with a trailing comma.
pub(crate) fn split_elements(
    code: &[CodeChar],
    open: usize,
    close: usize,
) -> (Vec<std::ops::Range<usize>>, bool) {
    let mut elements = Vec::new();
    let mut current: Option<std::ops::Range<usize>> = None;
    let mut depth = 0usize;
    let mut trailing_comma = false;

    for c in &code[open + 1..close] {
        if c.ch.is_whitespace() {
            continue;
        }
        match c.ch {
            ',' if depth == 0 => {
                elements.extend(current.take());
                trailing_comma = true;
                continue;
            }
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            _ => {}
        }
        trailing_comma = false;
        match &mut current {
            Some(range) => range.end = c.end(),
            None => current = Some(c.offset..c.end()),
        }
    }
    elements.extend(current);

    let trailing_comma = trailing_comma && !elements.is_empty();
    (elements, trailing_comma)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code_string(src: &str) -> String {
        code_chars(src).iter().map(|c| c.ch).collect()
    }

    #[test]
    fn test_comments_and_strings_are_skipped() {
        let src = "a /* [ */ b // ]\nc 'x]' \"y[\" `z{`";
        assert_eq!(code_string(src), "a  b \nc   ");
    }

    #[test]
    fn test_escaped_quote_in_string() {
        assert_eq!(code_string(r"'it\'s' + x"), " + x");
    }

    #[test]
    fn test_matching_close_skips_commented_brackets() {
        let src = "[a, /* ] */ [b], c]";
        let code = code_chars(src);
        let close = matching_close(&code, 0).unwrap();
        assert_eq!(code[close].offset, src.len() - 1);
    }

    #[test]
    fn test_matching_close_unbalanced() {
        let code = code_chars("[a, [b]");
        assert_eq!(matching_close(&code, 0), None);
    }

    #[test]
    fn test_split_elements() {
        let src = "[a, f(b, c), [d],\n  // note\n  e,\n]";
        let code = code_chars(src);
        let close = matching_close(&code, 0).unwrap();
        let (elements, trailing) = split_elements(&code, 0, close);

        let texts: Vec<_> = elements.iter().map(|r| &src[r.clone()]).collect();
        assert_eq!(texts, ["a", "f(b, c)", "[d]", "e"]);
        assert!(trailing);
    }

    #[test]
    fn test_split_elements_empty_with_comment() {
        let src = "[\n  // existing migrations\n]";
        let code = code_chars(src);
        let close = matching_close(&code, 0).unwrap();
        let (elements, trailing) = split_elements(&code, 0, close);
        assert!(elements.is_empty());
        assert!(!trailing);
    }

    #[test]
    fn test_is_code() {
        let src = "a // b";
        let code = code_chars(src);
        assert!(is_code(&code, 0));
        assert!(!is_code(&code, 5));
    }
}
