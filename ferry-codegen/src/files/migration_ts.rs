//! Migration stub generator.

use std::path::{Path, PathBuf};

use ferry_core::{FileRules, GeneratedFile, SchemaVersion};

use super::TypeRef;
use crate::{ArrowFn, CodeFile, Const, JsObject, TsStyle};

/// Comment left in the body of every untouched migration stub.
pub const STUB_MARKER: &str = "// TODO: migrate state";

/// A migration stub for one tracked model.
///
/// The stub exports a single `Migration<T>` object whose `migrate` function
/// returns its input unchanged.
#[derive(Debug, Clone)]
pub struct MigrationTs {
    /// Exported binding name, e.g. `testMigration`.
    pub identifier: String,
    /// Slug as given on the command line; embedded verbatim in the file name.
    pub slug: String,
    pub version: SchemaVersion,
    pub next_version: SchemaVersion,
    /// Project-relative directory the stub is written to.
    pub dir: PathBuf,
    pub extension: String,
    pub contract: TypeRef,
    pub domain: TypeRef,
    pub style: TsStyle,
}

impl MigrationTs {
    /// File name of the stub: `<next>.<slug>.<ext>`.
    pub fn file_name(&self) -> String {
        format!("{}.{}.{}", self.next_version, self.slug, self.extension)
    }

    /// Project-relative, extensionless module path registries import from.
    pub fn module_path(&self) -> PathBuf {
        self.dir.join(format!("{}.{}", self.next_version, self.slug))
    }

    fn build_migration(&self) -> Const {
        let ty = &self.domain.name;
        let migrate = ArrowFn::new(format!("state: {}", ty))
            .returns(ty.clone())
            .body_line(format!(
                "{} from version {} to {}",
                STUB_MARKER, self.version, self.next_version
            ))
            .body_line("return state;");

        let body = JsObject::new()
            .raw("version", self.version.to_string())
            .raw("nextVersion", self.next_version.to_string())
            .arrow_fn("migrate", migrate);

        Const::object(&self.identifier, body).ty(format!("{}<{}>", self.contract.name, ty))
    }
}

impl GeneratedFile for MigrationTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.dir).join(self.file_name())
    }

    fn rules(&self) -> FileRules {
        FileRules::create_new()
    }

    fn render(&self) -> String {
        CodeFile::new()
            .import(self.contract.import_from(&self.dir, &self.style))
            .import(self.domain.import_from(&self.dir, &self.style))
            .add(self.build_migration())
            .render_with_indent(self.style.indent)
    }
}
