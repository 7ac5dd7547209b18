//! ferry.toml generator.

use std::path::{Path, PathBuf};

use ferry_codegen::Indent;
use ferry_core::{FileRules, GeneratedFile};

use super::{MANIFEST_FILE, Manifest};

/// The ferry.toml configuration file, rendered from a [`Manifest`].
pub struct FerryToml {
    pub manifest: Manifest,
}

impl FerryToml {
    pub fn new(manifest: Manifest) -> Self {
        Self { manifest }
    }

    /// A ferry.toml spelling out the built-in layout.
    pub fn default_layout() -> Self {
        Self::new(Manifest::default_layout())
    }
}

fn string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

fn path(value: &Path) -> String {
    string(&value.to_string_lossy())
}

impl GeneratedFile for FerryToml {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(MANIFEST_FILE)
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        let project = &self.manifest.project;
        let indent = match project.indent {
            Indent::Spaces(n) => n.to_string(),
            Indent::Tab => string("tab"),
        };

        let mut out = format!(
            r#"# Migration scaffolding layout for `ferry new <name>`.

[project]
# File whose @{decorator}({{ defaults: {{ version: N }} }}) block holds the schema version
canonical = {canonical}
decorator = {decorator_value}
extension = {extension}
# Identifier casing for migration names: camel | pascal
casing = {casing}
# Quote style for generated imports: single | double
quote = {quote}
indent = {indent}
# Module exporting the migration contract type
contract = {contract}
contract_type = {contract_type}
"#,
            decorator = project.decorator,
            canonical = path(&project.canonical),
            decorator_value = string(&project.decorator),
            extension = string(&project.extension),
            casing = string(project.casing.as_str()),
            quote = string(project.quote.as_str()),
            indent = indent,
            contract = path(&project.contract),
            contract_type = string(&project.contract_type),
        );

        for (key, model) in &self.manifest.models {
            out.push_str(&format!(
                "\n[models.{}]\ntype = {}\nimport = {}\ndir = {}\n",
                key,
                string(&model.type_name),
                path(&model.import),
                path(&model.dir),
            ));
            if let Some(registry) = &model.registry {
                out.push_str(&format!("registry = {}\n", path(registry)));
            }
            if let Some(name) = &model.registry_name {
                out.push_str(&format!("registry_name = {}\n", string(name)));
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use ferry_core::{FileTree, MemoryTree, Overwrite, WriteResult};

    use super::*;

    #[test]
    fn test_default_layout_round_trips() {
        let rendered = FerryToml::default_layout().render();
        let parsed: Manifest = rendered.parse().unwrap();
        assert_eq!(parsed, Manifest::default_layout());
    }

    #[test]
    fn test_render_mentions_both_registries() {
        let rendered = FerryToml::default_layout().render();
        assert!(rendered.contains("[models.restore-file]"));
        assert!(rendered.contains("registry_name = \"RestoreFileMigrations\""));
        assert!(rendered.contains("[models.state-app]"));
        assert!(rendered.contains("registry_name = \"AppStateMigrations\""));
    }

    #[test]
    fn test_never_overwrites() {
        let file = FerryToml::default_layout();
        assert_eq!(file.rules().overwrite, Overwrite::IfMissing);

        let mut tree = MemoryTree::new().with_file("ferry.toml", "# mine");
        let result = file.write(&mut tree, Path::new("")).unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(tree.read(Path::new("ferry.toml")).unwrap(), "# mine");
    }
}
