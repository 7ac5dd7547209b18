//! Parsing and patching of migration registries.
//!
//! A registry is a TypeScript module that imports every migration of one
//! model and lists them in an exported array:
//!
//! ```ts
//! import { Migration } from '../migrator/migrator';
//! import { firstMigration } from './2.first';
//!
//! export const RestoreFileMigrations: Migration<RestoreFile>[] = [
//!   firstMigration,
//! ];
//! ```
//!
//! [`RegistryFile::parse`] records where the imports end and where the array
//! elements sit. [`RegistryFile::patch`] splices one import and one element
//! into the original text, leaving every other byte untouched.

use std::{
    ops::Range,
    path::{Path, PathBuf},
};

use ferry_codegen::Indent;
use miette::{NamedSource, SourceSpan};
use regex::Regex;

use crate::{
    Error, Result,
    scan::{self, CodeChar},
};

const IMPORT_PATTERN: &str =
    r#"(?m)^[ \t]*import\b(?:[^'"]*?\bfrom)?\s*['"][^'"\n]+['"][ \t]*;?"#;

/// Identifies the registry array: its exported name and element type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryAnchor {
    pub name: String,
    /// Element type, e.g. `Migration<RestoreFile>`.
    pub element_type: String,
}

impl RegistryAnchor {
    pub fn new(name: impl Into<String>, element_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            element_type: element_type.into(),
        }
    }

    fn declaration(&self) -> String {
        format!("export const {}: {}[]", self.name, self.element_type)
    }

    fn pattern(&self) -> Result<Regex> {
        // `Migration<RestoreFile>` matches with any spacing around the brackets.
        let ty = self
            .element_type
            .split_inclusive(['<', '>'])
            .flat_map(|part| {
                let (name, bracket) = match part.strip_suffix(['<', '>']) {
                    Some(name) => (name, &part[name.len()..]),
                    None => (part, ""),
                };
                [regex::escape(name.trim()), regex::escape(bracket)]
            })
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(r"\s*");

        let pattern = format!(
            r"\bexport\s+const\s+{}\s*:\s*{}\s*\[\s*\]\s*=\s*\[",
            regex::escape(&self.name),
            ty
        );
        Regex::new(&pattern).map_err(|e| Error::invalid_pattern(self.declaration(), e))
    }
}

/// The array literal a registry exports.
#[derive(Debug, Clone)]
struct ArrayLiteral {
    /// Offset of `[`.
    open: usize,
    /// Offset of the matching `]`.
    close: usize,
    elements: Vec<Range<usize>>,
    trailing_comma: bool,
}

/// A parsed registry.
#[derive(Debug, Clone)]
pub struct RegistryFile<'a> {
    path: PathBuf,
    src: &'a str,
    imports: Vec<Range<usize>>,
    array: ArrayLiteral,
}

impl<'a> RegistryFile<'a> {
    /// Parse `src`, locating its imports and the array named by `anchor`.
    pub fn parse(path: &Path, src: &'a str, anchor: &RegistryAnchor) -> Result<Self> {
        let code = scan::code_chars(src);
        let imports = find_imports(src, &code)?;

        let pattern = anchor.pattern()?;
        let open_offset = pattern
            .find_iter(src)
            .filter(|m| scan::is_code(&code, m.start()))
            .map(|m| m.end() - 1)
            .find(|&offset| scan::is_code(&code, offset))
            .ok_or_else(|| {
                anchor_missing(path, src, None, format!("array `{}`", anchor.declaration()))
            })?;

        let open = code
            .binary_search_by_key(&open_offset, |c| c.offset)
            .map_err(|_| {
                anchor_missing(path, src, None, format!("array `{}`", anchor.declaration()))
            })?;
        let close = scan::matching_close(&code, open).ok_or_else(|| {
            anchor_missing(
                path,
                src,
                Some(open_offset..open_offset + 1),
                format!("closing bracket of `{}`", anchor.name),
            )
        })?;
        let (elements, trailing_comma) = scan::split_elements(&code, open, close);

        Ok(Self {
            path: path.to_path_buf(),
            src,
            imports,
            array: ArrayLiteral {
                open: open_offset,
                close: code[close].offset,
                elements,
                trailing_comma,
            },
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Import statements in source order.
    pub fn imports(&self) -> impl Iterator<Item = &'a str> + '_ {
        let src = self.src;
        self.imports.iter().map(move |r| &src[r.clone()])
    }

    /// Array elements in source order.
    pub fn entries(&self) -> impl Iterator<Item = &'a str> + '_ {
        let src = self.src;
        self.array.elements.iter().map(move |r| &src[r.clone()])
    }

    /// Return the registry text with `import` added after the last import and
    /// `entry` appended to the array.
    ///
    /// Nothing is deduplicated: patching twice adds two imports and two entries.
    pub fn patch(&self, import: &str, entry: &str, indent: Indent) -> String {
        if self.entries().any(|e| e == entry) {
            log::warn!(
                "{} already lists {}, adding it again",
                self.path.display(),
                entry
            );
        }

        let mut edits = self.entry_edits(entry, indent);
        edits.push(self.import_edit(import));
        edits.sort_by_key(|(range, _)| range.start);

        let mut out = String::with_capacity(self.src.len() + import.len() + entry.len() + 8);
        let mut pos = 0;
        for (range, text) in edits {
            out.push_str(&self.src[pos..range.start]);
            out.push_str(&text);
            pos = range.end;
        }
        out.push_str(&self.src[pos..]);
        out
    }

    fn import_edit(&self, import: &str) -> (Range<usize>, String) {
        let Some(last) = self.imports.last() else {
            log::warn!(
                "{} has no imports, adding one at the top",
                self.path.display()
            );
            return (0..0, format!("{}\n", import));
        };

        match self.src[last.end..].find('\n') {
            Some(newline) => {
                let at = last.end + newline + 1;
                (at..at, format!("{}\n", import))
            }
            None => {
                let at = self.src.len();
                (at..at, format!("\n{}", import))
            }
        }
    }

    fn entry_edits(&self, entry: &str, indent: Indent) -> Vec<(Range<usize>, String)> {
        let array = &self.array;

        if !self.src[array.open..array.close].contains('\n') {
            let edit = match array.elements.last() {
                None => {
                    let base = line_indent(self.src, array.open);
                    let inner = array.open + 1..array.close;
                    // Comments between the brackets stay where they are.
                    let at = if self.src[inner.clone()].trim().is_empty() {
                        inner
                    } else {
                        array.close..array.close
                    };
                    (
                        at,
                        format!("\n{}{}{},\n{}", base, indent.as_str(), entry, base),
                    )
                }
                Some(last) if array.trailing_comma => {
                    let at = self.src[last.end..array.close]
                        .find(',')
                        .map_or(last.end, |comma| last.end + comma + 1);
                    (at..at, format!(" {},", entry))
                }
                Some(last) => (last.end..last.end, format!(", {}", entry)),
            };
            return vec![edit];
        }

        let mut edits = Vec::new();
        if let Some(last) = array.elements.last()
            && !array.trailing_comma
        {
            edits.push((last.end..last.end, ",".to_string()));
        }

        let entry_indent = self.entry_indent(indent);
        let close_line_start = line_start(self.src, array.close);
        if self.src[close_line_start..array.close].trim().is_empty() {
            edits.push((
                close_line_start..close_line_start,
                format!("{}{},\n", entry_indent, entry),
            ));
        } else {
            let base = line_indent(self.src, array.open);
            edits.push((
                array.close..array.close,
                format!("\n{}{},\n{}", entry_indent, entry, base),
            ));
        }
        edits
    }

    /// Indentation for a new element of a multi-line array.
    fn entry_indent(&self, indent: Indent) -> String {
        let array = &self.array;
        let body_start = array.open + 1;

        // The indentation of the first existing element or comment line.
        let inner = &self.src[body_start..array.close];
        let first_content_line = inner
            .split_inclusive('\n')
            .skip(1)
            .find(|line| !line.trim().is_empty());
        if let Some(line) = first_content_line {
            let leading = line.len() - line.trim_start().len();
            if leading > 0 {
                return line[..leading].to_string();
            }
        }

        format!("{}{}", line_indent(self.src, array.close), indent.as_str())
    }
}

fn find_imports(src: &str, code: &[CodeChar]) -> Result<Vec<Range<usize>>> {
    let pattern = Regex::new(IMPORT_PATTERN).map_err(|e| Error::invalid_pattern("imports", e))?;
    Ok(pattern
        .find_iter(src)
        .filter(|m| {
            let keyword = m.start() + (m.len() - m.as_str().trim_start().len());
            scan::is_code(code, keyword)
        })
        .map(|m| {
            let text = m.as_str();
            let start = m.start() + (text.len() - text.trim_start().len());
            start..m.end()
        })
        .collect())
}

fn line_start(src: &str, offset: usize) -> usize {
    src[..offset].rfind('\n').map_or(0, |i| i + 1)
}

fn line_indent(src: &str, offset: usize) -> &str {
    let start = line_start(src, offset);
    let line = &src[start..];
    let end = line
        .find(|c: char| c != ' ' && c != '\t')
        .unwrap_or(line.len());
    &line[..end]
}

fn anchor_missing(
    path: &Path,
    src: &str,
    span: Option<Range<usize>>,
    anchor: String,
) -> Box<Error> {
    Box::new(Error::RegistryAnchorMissing {
        src: NamedSource::new(path.display().to_string(), src.to_string()),
        span: span.map(SourceSpan::from),
        path: path.to_path_buf(),
        anchor,
    })
}
