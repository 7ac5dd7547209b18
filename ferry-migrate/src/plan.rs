//! Planned file-tree changes.

use std::{
    io,
    path::{Path, PathBuf},
};

use ferry_core::{FileTree, GeneratedFile, Overwrite, SchemaVersion};

use crate::{Error, MigrationName, Result};

/// One write the orchestrator intends to make.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileChange {
    /// A file that must not exist yet.
    Create { path: PathBuf, content: String },
    /// An existing file whose content is replaced.
    Overwrite { path: PathBuf, content: String },
}

impl FileChange {
    /// The change that writes a generated file according to its rules.
    pub fn generated(file: &dyn GeneratedFile, base: &Path) -> Self {
        let path = file.path(base);
        let content = file.render();
        match file.rules().overwrite {
            Overwrite::Always => FileChange::Overwrite { path, content },
            Overwrite::IfMissing | Overwrite::Never => FileChange::Create { path, content },
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            FileChange::Create { path, .. } | FileChange::Overwrite { path, .. } => path,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            FileChange::Create { content, .. } | FileChange::Overwrite { content, .. } => content,
        }
    }

    pub fn is_create(&self) -> bool {
        matches!(self, FileChange::Create { .. })
    }

    fn apply(&self, tree: &mut dyn FileTree) -> Result<()> {
        match self {
            FileChange::Create { path, content } => {
                tree.create(path, content).map_err(|e| match e.kind() {
                    io::ErrorKind::AlreadyExists => {
                        Box::new(Error::PathCollision { path: path.clone() })
                    }
                    _ => Error::io(path, e),
                })
            }
            FileChange::Overwrite { path, content } => {
                tree.overwrite(path, content).map_err(|e| Error::io(path, e))
            }
        }
    }
}

/// Everything one `new` invocation will write, computed before any write.
#[derive(Debug, Clone)]
pub struct Plan {
    pub version: SchemaVersion,
    pub next_version: SchemaVersion,
    pub name: MigrationName,
    changes: Vec<FileChange>,
}

impl Plan {
    pub(crate) fn new(version: SchemaVersion, next_version: SchemaVersion, name: MigrationName) -> Self {
        Self {
            version,
            next_version,
            name,
            changes: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, change: FileChange) {
        self.changes.push(change);
    }

    /// Changes in the order they are applied.
    pub fn changes(&self) -> &[FileChange] {
        &self.changes
    }

    /// Paths of files the plan creates.
    pub fn created(&self) -> impl Iterator<Item = &Path> {
        self.changes
            .iter()
            .filter(|c| c.is_create())
            .map(FileChange::path)
    }

    /// Paths of existing files the plan rewrites.
    pub fn mutated(&self) -> impl Iterator<Item = &Path> {
        self.changes
            .iter()
            .filter(|c| !c.is_create())
            .map(FileChange::path)
    }

    /// Write every change to `tree`, stopping at the first failure.
    ///
    /// Changes already written are not rolled back.
    pub fn apply(&self, tree: &mut dyn FileTree) -> Result<()> {
        for change in &self.changes {
            log::debug!(
                "{} {}",
                if change.is_create() { "create" } else { "update" },
                change.path().display()
            );
            change.apply(tree)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use ferry_core::{FileRules, MemoryTree};

    use super::*;

    fn plan() -> Plan {
        let name = MigrationName {
            slug: "test".to_string(),
            identifier: "testMigration".to_string(),
        };
        Plan::new(SchemaVersion::new(5), SchemaVersion::new(6), name)
    }

    #[test]
    fn test_created_and_mutated() {
        let mut plan = plan();
        plan.push(FileChange::Create {
            path: PathBuf::from("a/6.test.ts"),
            content: "a".to_string(),
        });
        plan.push(FileChange::Overwrite {
            path: PathBuf::from("state.ts"),
            content: "s".to_string(),
        });

        assert_eq!(plan.created().collect::<Vec<_>>(), [Path::new("a/6.test.ts")]);
        assert_eq!(plan.mutated().collect::<Vec<_>>(), [Path::new("state.ts")]);
    }

    #[test]
    fn test_apply_reports_collision() {
        let mut tree = MemoryTree::new().with_file("a/6.test.ts", "existing");
        let mut plan = plan();
        plan.push(FileChange::Create {
            path: PathBuf::from("a/6.test.ts"),
            content: "new".to_string(),
        });

        let err = plan.apply(&mut tree).unwrap_err();

        assert!(matches!(*err, Error::PathCollision { .. }));
        assert_eq!(tree.read(Path::new("a/6.test.ts")).unwrap(), "existing");
    }

    #[test]
    fn test_generated_change_follows_rules() {
        struct Config(Overwrite);
        impl GeneratedFile for Config {
            fn path(&self, base: &Path) -> PathBuf {
                base.join("ferry.toml")
            }
            fn rules(&self) -> FileRules {
                FileRules { overwrite: self.0 }
            }
            fn render(&self) -> String {
                "[project]\n".to_string()
            }
        }

        assert!(FileChange::generated(&Config(Overwrite::Never), Path::new("")).is_create());
        assert!(FileChange::generated(&Config(Overwrite::IfMissing), Path::new("")).is_create());
        assert!(!FileChange::generated(&Config(Overwrite::Always), Path::new("")).is_create());
    }
}
