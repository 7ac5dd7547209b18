//! Registry skeleton generator.

use std::path::{Path, PathBuf};

use ferry_core::{FileRules, GeneratedFile};

use super::TypeRef;
use crate::{CodeFile, Const, JsArray, TsStyle};

/// An empty migration registry: the contract and domain imports followed by
/// `export const <Name>: Contract<Domain>[] = [];`.
///
/// Written only when the registry does not exist yet. Entries are appended
/// afterwards by the registry patcher.
#[derive(Debug, Clone)]
pub struct RegistryTs {
    /// Exported array name, e.g. `RestoreFileMigrations`.
    pub name: String,
    /// Project-relative path of the registry file.
    pub path: PathBuf,
    pub contract: TypeRef,
    pub domain: TypeRef,
    pub style: TsStyle,
}

impl RegistryTs {
    /// Element type of the exported array, e.g. `Migration<RestoreFile>`.
    pub fn element_type(&self) -> String {
        format!("{}<{}>", self.contract.name, self.domain.name)
    }

    fn dir(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new(""))
    }
}

impl GeneratedFile for RegistryTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        CodeFile::new()
            .import(self.contract.import_from(self.dir(), &self.style))
            .import(self.domain.import_from(self.dir(), &self.style))
            .add(Const::array(&self.name, JsArray::new()).ty(format!("{}[]", self.element_type())))
            .render_with_indent(self.style.indent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> RegistryTs {
        RegistryTs {
            name: "AppStateMigrations".into(),
            path: PathBuf::from("src/app/migrations/state/app/index.ts"),
            contract: TypeRef::new("Migration", "src/app/migrations/migrator/migrator"),
            domain: TypeRef::new("AppStateModel", "src/app/state/app/app.state"),
            style: TsStyle::default(),
        }
    }

    #[test]
    fn test_render_skeleton() {
        assert_eq!(
            registry().render(),
            "import { Migration } from '../../migrator/migrator';\n\
             import { AppStateModel } from '../../../state/app/app.state';\n\
             \n\
             export const AppStateMigrations: Migration<AppStateModel>[] = [];\n"
        );
    }

    #[test]
    fn test_element_type() {
        assert_eq!(registry().element_type(), "Migration<AppStateModel>");
    }

    #[test]
    fn test_registry_at_root() {
        let mut reg = registry();
        reg.path = PathBuf::from("index.ts");
        assert!(reg.render().contains("from './src/app/state/app/app.state';"));
    }
}
