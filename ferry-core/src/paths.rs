//! Project-relative path helpers.

use std::path::{Component, Path, PathBuf};

/// Lexically normalize a relative path: drop `.` components and fold `..`
/// into the preceding component where one exists.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    parts.iter().collect()
}

/// Build an ES module specifier that imports `target` from a file living in
/// `from_dir`. Both paths are relative to the same project root, and
/// `target` should already be extensionless.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use ferry_core::module_specifier;
///
/// assert_eq!(
///     module_specifier(Path::new("src/migrations/restore-file"), Path::new("src/migrations/restore-file/6.test")),
///     "./6.test"
/// );
/// assert_eq!(
///     module_specifier(Path::new("src/migrations/state/app"), Path::new("src/state/app/app.state")),
///     "../../../state/app/app.state"
/// );
/// ```
pub fn module_specifier(from_dir: &Path, target: &Path) -> String {
    let from = normalize_path(from_dir);
    let target = normalize_path(target);
    let from: Vec<_> = from.components().collect();
    let target: Vec<_> = target.components().collect();

    let common = from
        .iter()
        .zip(target.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let rest = target[common..]
        .iter()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");

    let ups = from.len() - common;
    if ups == 0 {
        format!("./{}", rest)
    } else {
        format!("{}{}", "../".repeat(ups), rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(
            normalize_path(Path::new("./src/app/../app/index.ts")),
            PathBuf::from("src/app/index.ts")
        );
        assert_eq!(normalize_path(Path::new("../x")), PathBuf::from("../x"));
        assert_eq!(normalize_path(Path::new("./")), PathBuf::from(""));
    }

    #[test]
    fn test_module_specifier_same_dir() {
        assert_eq!(
            module_specifier(Path::new("src/m"), Path::new("src/m/6.test")),
            "./6.test"
        );
    }

    #[test]
    fn test_module_specifier_sibling_dir() {
        assert_eq!(
            module_specifier(
                Path::new("src/app/migrations/restore-file"),
                Path::new("src/app/migrations/migrator/migrator")
            ),
            "../migrator/migrator"
        );
    }

    #[test]
    fn test_module_specifier_distant_dir() {
        assert_eq!(
            module_specifier(
                Path::new("./src/app/migrations/restore-file"),
                Path::new("src/app/features/restore/owner/restore-file/restore-file.model")
            ),
            "../../features/restore/owner/restore-file/restore-file.model"
        );
    }

    #[test]
    fn test_module_specifier_from_root() {
        assert_eq!(module_specifier(Path::new(""), Path::new("a/b")), "./a/b");
    }
}
