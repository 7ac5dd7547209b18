//! Mutable file trees.
//!
//! Every path handed to a [`FileTree`] is relative to the tree's root.
//! [`DiskTree`] maps those paths onto a directory; [`MemoryTree`] keeps
//! everything in a map and is what the tests and dry runs use.

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use crate::normalize_path;

/// A mutable tree of text files.
pub trait FileTree {
    /// Whether a file exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Read the file at `path`.
    fn read(&self, path: &Path) -> io::Result<String>;

    /// Create a new file, failing with [`io::ErrorKind::AlreadyExists`] if
    /// something is already at `path`. Missing parent directories are created.
    fn create(&mut self, path: &Path, content: &str) -> io::Result<()>;

    /// Replace the file at `path`, creating it if needed.
    fn overwrite(&mut self, path: &Path, content: &str) -> io::Result<()>;
}

/// A file tree rooted at a directory on disk.
#[derive(Debug, Clone)]
pub struct DiskTree {
    root: PathBuf,
}

impl DiskTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory this tree is rooted at.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

fn create_parent(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

impl FileTree for DiskTree {
    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).is_file()
    }

    fn read(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(self.resolve(path))
    }

    fn create(&mut self, path: &Path, content: &str) -> io::Result<()> {
        use std::io::Write;

        let full = self.resolve(path);
        log::debug!("creating {}", full.display());
        create_parent(&full)?;
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&full)?;
        file.write_all(content.as_bytes())
    }

    fn overwrite(&mut self, path: &Path, content: &str) -> io::Result<()> {
        let full = self.resolve(path);
        log::debug!("overwriting {}", full.display());
        create_parent(&full)?;
        fs::write(full, content)
    }
}

/// An in-memory file tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryTree {
    files: BTreeMap<PathBuf, String>,
}

impl MemoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, replacing any previous content.
    pub fn with_file(mut self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        self.files
            .insert(normalize_path(path.as_ref()), content.into());
        self
    }

    /// Iterate over all files in path order.
    pub fn files(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.files.iter().map(|(p, c)| (p.as_path(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl FileTree for MemoryTree {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(&normalize_path(path))
    }

    fn read(&self, path: &Path) -> io::Result<String> {
        self.files.get(&normalize_path(path)).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", path.display()),
            )
        })
    }

    fn create(&mut self, path: &Path, content: &str) -> io::Result<()> {
        let key = normalize_path(path);
        if self.files.contains_key(&key) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", path.display()),
            ));
        }
        self.files.insert(key, content.to_string());
        Ok(())
    }

    fn overwrite(&mut self, path: &Path, content: &str) -> io::Result<()> {
        self.files.insert(normalize_path(path), content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_memory_tree_normalizes_paths() {
        let tree = MemoryTree::new().with_file("./src/app/index.ts", "x");

        assert!(tree.exists(Path::new("src/app/index.ts")));
        assert!(tree.exists(Path::new("./src/app/../app/index.ts")));
        assert_eq!(tree.read(Path::new("src/app/index.ts")).unwrap(), "x");
    }

    #[test]
    fn test_memory_tree_create_rejects_existing() {
        let mut tree = MemoryTree::new().with_file("a.ts", "original");

        let err = tree.create(Path::new("./a.ts"), "new").unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(tree.read(Path::new("a.ts")).unwrap(), "original");
    }

    #[test]
    fn test_memory_tree_read_missing() {
        let tree = MemoryTree::new();
        let err = tree.read(Path::new("missing.ts")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_disk_tree_create_makes_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let mut tree = DiskTree::new(temp.path());

        tree.create(Path::new("a/b/c.ts"), "nested").unwrap();

        assert!(tree.exists(Path::new("a/b/c.ts")));
        assert_eq!(
            fs::read_to_string(temp.path().join("a/b/c.ts")).unwrap(),
            "nested"
        );
    }

    #[test]
    fn test_disk_tree_create_rejects_existing() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.ts"), "original").unwrap();
        let mut tree = DiskTree::new(temp.path());

        let err = tree.create(Path::new("a.ts"), "new").unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(tree.read(Path::new("a.ts")).unwrap(), "original");
    }

    #[test]
    fn test_disk_tree_overwrite() {
        let temp = TempDir::new().unwrap();
        let mut tree = DiskTree::new(temp.path());

        tree.overwrite(Path::new("a.ts"), "first").unwrap();
        tree.overwrite(Path::new("a.ts"), "second").unwrap();

        assert_eq!(tree.read(Path::new("a.ts")).unwrap(), "second");
    }

    #[test]
    fn test_disk_tree_exists_ignores_directories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("dir")).unwrap();
        let tree = DiskTree::new(temp.path());

        assert!(!tree.exists(Path::new("dir")));
    }
}
