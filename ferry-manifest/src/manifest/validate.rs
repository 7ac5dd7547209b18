//! Validation of parsed manifests.

use std::{
    collections::HashMap,
    path::{Component, Path, PathBuf},
};

use ferry_codegen::{is_reserved, is_valid_identifier};
use ferry_core::normalize_path;
use miette::SourceSpan;

use super::Manifest;
use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// Holds the raw TOML and the current table path so that errors can point
/// at the offending key or value.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "ferry.toml");
/// ctx.push("models").push("settings").validate_identifier("Settings", "type")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    src: &'a str,
    filename: &'a str,
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self {
            src,
            filename,
            path: Vec::new(),
        }
    }

    /// Push a table path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            src: self.src,
            filename: self.filename,
            path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Describe a field for error messages, e.g. `type in 'models.settings'`.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    fn source(&self) -> SourceContext {
        SourceContext::new(self.src, self.filename)
    }

    /// Find the span of a table key such as `[models.<name>]`.
    pub fn find_key_span(&self, name: &str) -> Option<SourceSpan> {
        let patterns = [format!(".{}]", name), format!(".{}.", name)];
        for pattern in &patterns {
            if let Some(pos) = self.src.find(pattern.as_str()) {
                return Some(SourceSpan::from((pos + 1, name.len())));
            }
        }
        self.find_value_span(name, 0)
    }

    /// Find the span of the `nth` quoted occurrence of `value`.
    pub fn find_value_span(&self, value: &str, nth: usize) -> Option<SourceSpan> {
        ['"', '\''].iter().find_map(|q| {
            let quoted = format!("{q}{value}{q}");
            self.src
                .match_indices(quoted.as_str())
                .nth(nth)
                .map(|(pos, _)| SourceSpan::from((pos + 1, value.len())))
        })
    }

    /// Validate that `name` can be used as a TypeScript binding.
    pub fn validate_identifier(&self, name: &str, kind: &str) -> Result<()> {
        if is_reserved(name) {
            return Err(self.source().reserved_word_error(
                name,
                self.context_for(kind),
                self.find_value_span(name, 0),
            ));
        }

        if !is_valid_identifier(name) {
            return Err(self.source().invalid_identifier_error(
                name,
                self.context_for(kind),
                identifier_problem(name),
                self.find_value_span(name, 0),
            ));
        }

        Ok(())
    }

    /// Validate a model key.
    pub fn validate_key(&self, key: &str) -> Result<()> {
        if let Some(reason) = slug_problem(key) {
            return Err(self.source().invalid_identifier_error(
                key,
                self.context_for("model key"),
                reason,
                self.find_key_span(key),
            ));
        }
        Ok(())
    }

    /// Validate that a configured path stays inside the project root.
    pub fn validate_relative_path(&self, path: &Path, kind: &str) -> Result<()> {
        let display = path.display().to_string();
        let span = || self.find_value_span(&display, 0);

        if path.as_os_str().is_empty() {
            return Err(self
                .source()
                .validation_error(format!("{} cannot be empty", self.context_for(kind)), span()));
        }

        let escapes = path.is_absolute()
            || matches!(
                normalize_path(path).components().next(),
                Some(Component::ParentDir | Component::RootDir | Component::Prefix(_))
            );
        if escapes {
            return Err(self.source().validation_error(
                format!(
                    "{} '{}' must be relative to the project root",
                    self.context_for(kind),
                    display
                ),
                span(),
            ));
        }

        Ok(())
    }

    /// Validate a parsed manifest.
    pub fn validate_manifest(&self, manifest: &Manifest) -> Result<()> {
        let project = &manifest.project;
        let project_ctx = self.push("project");

        project_ctx.validate_relative_path(&project.canonical, "canonical")?;
        project_ctx.validate_relative_path(&project.contract, "contract")?;
        project_ctx.validate_identifier(&project.decorator, "decorator")?;
        project_ctx.validate_identifier(&project.contract_type, "contract_type")?;

        if project.extension.is_empty()
            || !project.extension.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(self.source().validation_error(
                format!(
                    "extension '{}' must be non-empty and alphanumeric, without a leading dot",
                    project.extension
                ),
                self.find_value_span(&project.extension, 0),
            ));
        }

        if manifest.models.is_empty() {
            return Err(self.source().validation_error(
                "ferry.toml must declare at least one [models.<name>] table",
                None,
            ));
        }

        let mut dirs = PathTracker::new(self, "dir");
        let mut registries = PathTracker::new(self, "registry");

        for (key, model) in &manifest.models {
            self.validate_key(key)?;

            let model_ctx = self.push("models").push(key);
            model_ctx.validate_identifier(&model.type_name, "type")?;
            model_ctx.validate_relative_path(&model.import, "import")?;
            model_ctx.validate_relative_path(&model.dir, "dir")?;
            dirs.insert(&model.dir)?;

            if let Some(registry) = &model.registry {
                model_ctx.validate_relative_path(registry, "registry")?;
                registries.insert(registry)?;
            }
            if let Some(name) = model.registry_name() {
                model_ctx.validate_identifier(&name, "registry_name")?;
            }
        }

        let canonical = normalize_path(&project.canonical);
        for registry in manifest.models.values().filter_map(|m| m.registry.as_ref()) {
            let key = normalize_path(registry);
            let clash = if key == canonical {
                "the canonical file"
            } else if dirs.contains(&key) {
                "a model's migration directory"
            } else {
                continue;
            };
            let display = registry.display().to_string();
            return Err(self.source().validation_error(
                format!("registry '{}' is also {}", display, clash),
                self.find_value_span(&display, 0),
            ));
        }

        Ok(())
    }
}

/// Tracks normalized paths of one kind and rejects repeats.
struct PathTracker<'c, 'a> {
    ctx: &'c ParseContext<'a>,
    kind: &'static str,
    seen: HashMap<PathBuf, String>,
}

impl<'c, 'a> PathTracker<'c, 'a> {
    fn new(ctx: &'c ParseContext<'a>, kind: &'static str) -> Self {
        Self {
            ctx,
            kind,
            seen: HashMap::new(),
        }
    }

    fn contains(&self, normalized: &Path) -> bool {
        self.seen.contains_key(normalized)
    }

    fn insert(&mut self, path: &Path) -> Result<()> {
        let key = normalize_path(path);
        let raw = path.display().to_string();
        if let Some(first) = self.seen.get(&key) {
            // Identical spellings share a search string, so look for the second hit.
            let second_nth = usize::from(*first == raw);
            return Err(self.ctx.source().duplicate_path_error(
                raw.clone(),
                self.kind,
                self.ctx.find_value_span(first, 0),
                self.ctx.find_value_span(&raw, second_nth),
            ));
        }

        self.seen.insert(key, raw);
        Ok(())
    }
}

fn identifier_problem(name: &str) -> &'static str {
    let mut chars = name.chars();
    match chars.next() {
        None => "name cannot be empty",
        Some(c) if !(c.is_ascii_alphabetic() || c == '_' || c == '$') => {
            "must start with an ASCII letter, '_' or '$'"
        }
        _ => "use only ASCII letters, digits, '_' and '$'",
    }
}

fn slug_problem(key: &str) -> Option<&'static str> {
    let mut chars = key.chars();
    match chars.next() {
        None => Some("model key cannot be empty"),
        Some(c) if !c.is_ascii_alphabetic() => Some("model key must start with an ASCII letter"),
        _ if !chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') => {
            Some("use only ASCII letters, digits, '-' and '_'")
        }
        _ => None,
    }
}
