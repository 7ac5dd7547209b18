//! Reading and rewriting the canonical schema version.

use std::{ops::Range, path::Path};

use ferry_core::SchemaVersion;
use miette::{NamedSource, SourceSpan};
use regex::Regex;

use crate::{
    Error, Result,
    scan::{self, CodeChar},
};

/// The location of the version number in the canonical file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionMarker {
    pub version: SchemaVersion,
    /// Byte range of the digits.
    pub span: Range<usize>,
}

impl VersionMarker {
    /// Return `src` with the marker's digits replaced by `version`.
    ///
    /// Every byte outside the digits is kept as is.
    pub fn rewrite(&self, src: &str, version: SchemaVersion) -> String {
        let mut out = String::with_capacity(src.len() + 2);
        out.push_str(&src[..self.span.start]);
        out.push_str(&version.to_string());
        out.push_str(&src[self.span.end..]);
        out
    }
}

/// Finds `version: <n>` inside the `defaults` object of a decorator call
/// such as `@State<AppStateModel>({ name: 'app', defaults: { version: 5 } })`.
///
/// Only a `version` key directly inside `defaults` counts; keys of nested
/// objects, comments and string literals are ignored.
#[derive(Debug, Clone)]
pub struct VersionExtractor {
    decorator: String,
    pattern: Regex,
}

impl VersionExtractor {
    pub fn new(decorator: &str) -> Result<Self> {
        let pattern = format!(r"@{}\b", regex::escape(decorator));
        let pattern =
            Regex::new(&pattern).map_err(|e| Error::invalid_pattern("the version marker", e))?;
        Ok(Self {
            decorator: decorator.to_string(),
            pattern,
        })
    }

    /// Locate the single version marker in `src`.
    pub fn extract(&self, path: &Path, src: &str) -> Result<VersionMarker> {
        let code = scan::code_chars(src);
        let mut values = self
            .pattern
            .find_iter(src)
            .filter(|m| scan::is_code(&code, m.start()))
            .flat_map(|m| version_values(src, &code, m.end()));

        let Some(start) = values.next() else {
            return Err(self.mismatch(path, src, None, "no version marker found"));
        };
        if let Some(second) = values.next() {
            return Err(self.mismatch(
                path,
                src,
                Some(second..second + 1),
                "found more than one version marker",
            ));
        }

        let len = src[start..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        let span = start..start + len;
        let trailing = src[span.end..].chars().next();
        if len == 0 || trailing.is_some_and(|c| c == '.' || is_ident_char(c)) {
            return Err(self.mismatch(
                path,
                src,
                Some(start..start + len.max(1)),
                "version must be a non-negative integer",
            ));
        }

        let version = src[span.clone()]
            .parse::<SchemaVersion>()
            .map_err(|message| self.mismatch(path, src, Some(span.clone()), &message))?;

        log::debug!("found version {} in {}", version, path.display());
        Ok(VersionMarker { version, span })
    }

    fn mismatch(
        &self,
        path: &Path,
        src: &str,
        span: Option<Range<usize>>,
        message: &str,
    ) -> Box<Error> {
        Box::new(Error::PatternMismatch {
            src: NamedSource::new(path.display().to_string(), src.to_string()),
            span: span.map(SourceSpan::from),
            path: path.to_path_buf(),
            decorator: self.decorator.clone(),
            message: message.to_string(),
        })
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Byte offsets of the values of every top-level `version` key in the
/// `defaults` object of the decorator call whose name ends at `after`.
fn version_values(src: &str, code: &[CodeChar], after: usize) -> Vec<usize> {
    let Some(paren) = code
        .iter()
        .position(|c| c.offset >= after && c.ch == '(')
    else {
        return Vec::new();
    };
    let Some(call_close) = scan::matching_close(code, paren) else {
        return Vec::new();
    };
    let Some(options) = (paren + 1..call_close).find(|&i| code[i].ch == '{') else {
        return Vec::new();
    };
    let Some(options_close) = scan::matching_close(code, options) else {
        return Vec::new();
    };

    top_level_values(src, code, options, options_close, "defaults")
        .into_iter()
        .filter(|&i| code[i].ch == '{')
        .filter_map(|open| Some((open, scan::matching_close(code, open)?)))
        .flat_map(|(open, close)| top_level_values(src, code, open, close, "version"))
        .map(|i| code[i].offset)
        .collect()
}

/// Indices in `code` of the first character of the value of every `key:`
/// directly inside the object spanning `open..=close`.
fn top_level_values(
    src: &str,
    code: &[CodeChar],
    open: usize,
    close: usize,
    key: &str,
) -> Vec<usize> {
    let mut values = Vec::new();
    let mut depth = 0usize;
    let mut i = open + 1;
    while i < close {
        let c = code[i];
        match c.ch {
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            _ if depth == 0 && starts_key(src, code, i, key) => {
                let after_key = (i + key.len()..close).find(|&j| !code[j].ch.is_whitespace());
                if let Some(colon) = after_key.filter(|&j| code[j].ch == ':') {
                    if let Some(value) =
                        (colon + 1..close).find(|&j| !code[j].ch.is_whitespace())
                    {
                        values.push(value);
                    }
                }
                i += key.len();
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    values
}

/// Whether the identifier `key` starts at `code[i]` as a whole word.
fn starts_key(src: &str, code: &[CodeChar], i: usize, key: &str) -> bool {
    let start = code[i].offset;
    if !src[start..].starts_with(key) || i + key.len() > code.len() {
        return false;
    }
    let contiguous = code[i..i + key.len()]
        .iter()
        .enumerate()
        .all(|(k, c)| c.offset == start + k);
    let before = i.checked_sub(1).map(|p| code[p].ch);
    let after = src[start + key.len()..].chars().next();
    contiguous && !before.is_some_and(is_ident_char) && !after.is_some_and(is_ident_char)
}
