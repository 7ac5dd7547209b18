use std::{
    io,
    path::{Path, PathBuf},
};

use crate::FileTree;

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file into a tree
    ///
    /// With [`Overwrite::Never`] an existing file is reported as an
    /// [`io::ErrorKind::AlreadyExists`] error instead of being replaced.
    fn write(&self, tree: &mut dyn FileTree, base: &Path) -> io::Result<WriteResult> {
        let path = self.path(base);

        match self.rules().overwrite {
            Overwrite::Always => {
                tree.overwrite(&path, &self.render())?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if tree.exists(&path) {
                    Ok(WriteResult::Skipped)
                } else {
                    tree.create(&path, &self.render())?;
                    Ok(WriteResult::Written)
                }
            }
            Overwrite::Never => {
                tree.create(&path, &self.render())?;
                Ok(WriteResult::Written)
            }
        }
    }
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    /// Rules for files that must not already exist (migration stubs).
    pub fn create_new() -> Self {
        Self {
            overwrite: Overwrite::Never,
        }
    }

    /// Rules for files that are only written when missing (config scaffolds).
    pub fn create_once() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
        }
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite
    Always,
    /// Only create if file doesn't exist, otherwise skip
    IfMissing,
    /// Only create if file doesn't exist, otherwise fail
    Never,
}

impl Default for FileRules {
    fn default() -> Self {
        Self {
            overwrite: Overwrite::Always,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryTree;

    struct Stub {
        rules: FileRules,
        content: &'static str,
    }

    impl GeneratedFile for Stub {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("stub.ts")
        }

        fn rules(&self) -> FileRules {
            self.rules.clone()
        }

        fn render(&self) -> String {
            self.content.to_string()
        }
    }

    #[test]
    fn test_write_always_overwrites() {
        let mut tree = MemoryTree::new().with_file("out/stub.ts", "original");
        let stub = Stub {
            rules: FileRules::default(),
            content: "updated",
        };

        let result = stub.write(&mut tree, Path::new("out")).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(tree.read(Path::new("out/stub.ts")).unwrap(), "updated");
    }

    #[test]
    fn test_write_if_missing_skips_existing() {
        let mut tree = MemoryTree::new().with_file("out/stub.ts", "original");
        let stub = Stub {
            rules: FileRules::create_once(),
            content: "should not write",
        };

        let result = stub.write(&mut tree, Path::new("out")).unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(tree.read(Path::new("out/stub.ts")).unwrap(), "original");
    }

    #[test]
    fn test_write_if_missing_creates_new() {
        let mut tree = MemoryTree::new();
        let stub = Stub {
            rules: FileRules::create_once(),
            content: "new content",
        };

        let result = stub.write(&mut tree, Path::new("out")).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(tree.read(Path::new("out/stub.ts")).unwrap(), "new content");
    }

    #[test]
    fn test_write_never_fails_on_existing() {
        let mut tree = MemoryTree::new().with_file("out/stub.ts", "original");
        let stub = Stub {
            rules: FileRules::create_new(),
            content: "clobber",
        };

        let err = stub.write(&mut tree, Path::new("out")).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(tree.read(Path::new("out/stub.ts")).unwrap(), "original");
    }
}
