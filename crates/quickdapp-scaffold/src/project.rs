//! Project target resolution and directory-state checks

use camino::{Utf8Path, Utf8PathBuf};

/// A resolved project destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTarget {
    /// Absolute path the project will be created in
    pub path: Utf8PathBuf,
    /// Name shown to the user (basename of the resolved path)
    pub display_name: String,
}

/// Check whether a raw project name refers to the current directory
pub fn is_current_dir(name: &str) -> bool {
    name == "." || name == "./"
}

/// Validate a project name
///
/// Accepts letters, digits, hyphens, and underscores. Empty names and
/// names containing whitespace or any other character are rejected.
pub fn validate_project_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Resolve a raw project name against the working directory
///
/// The sentinels `.` and `./` resolve to the working directory itself;
/// any other name resolves to `cwd/<name>`.
pub fn resolve_target(name: &str, cwd: &Utf8Path) -> ProjectTarget {
    let path = if is_current_dir(name) {
        cwd.to_path_buf()
    } else {
        cwd.join(name)
    };

    let display_name = path
        .file_name()
        .unwrap_or_else(|| path.as_str())
        .to_string();

    ProjectTarget { path, display_name }
}

/// Check whether a directory exists
pub fn directory_exists(path: &Utf8Path) -> bool {
    path.exists()
}

/// Check whether a directory is empty
///
/// A nonexistent path counts as empty.
pub fn is_directory_empty(path: &Utf8Path) -> bool {
    match std::fs::read_dir(path) {
        Ok(mut entries) => entries.next().is_none(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => true,
        Err(_) => false,
    }
}

/// Decide whether the user must confirm before the target is used
///
/// Working in the current directory is safe unless it already has
/// contents; creating a named directory is safe unless one already
/// occupies that name (empty or not).
pub fn confirmation_required(name: &str, path: &Utf8Path) -> bool {
    if is_current_dir(name) {
        !is_directory_empty(path)
    } else {
        directory_exists(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn utf8(dir: &TempDir) -> &Utf8Path {
        Utf8Path::from_path(dir.path()).unwrap()
    }

    #[test]
    fn test_current_dir_sentinels() {
        assert!(is_current_dir("."));
        assert!(is_current_dir("./"));
        assert!(!is_current_dir("./app"));
        assert!(!is_current_dir(".."));
        assert!(!is_current_dir("my-app"));
        assert!(!is_current_dir(""));
    }

    #[test]
    fn test_validate_project_name() {
        assert!(validate_project_name("my-app"));
        assert!(validate_project_name("my_app_2"));
        assert!(validate_project_name("APP"));
        assert!(validate_project_name("0xdapp"));

        assert!(!validate_project_name(""));
        assert!(!validate_project_name("my app"));
        assert!(!validate_project_name("my/app"));
        assert!(!validate_project_name("app!"));
        assert!(!validate_project_name("café"));
    }

    #[test]
    fn test_resolve_named_target() {
        let cwd = Utf8Path::new("/home/dev");
        let target = resolve_target("my-dapp", cwd);
        assert_eq!(target.path, Utf8PathBuf::from("/home/dev/my-dapp"));
        assert_eq!(target.display_name, "my-dapp");
    }

    #[test]
    fn test_resolve_sentinel_target() {
        let cwd = Utf8Path::new("/home/dev/existing");
        for name in [".", "./"] {
            let target = resolve_target(name, cwd);
            assert_eq!(target.path, cwd);
            assert_eq!(target.display_name, "existing");
        }
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let cwd = Utf8Path::new("/home/dev");
        assert_eq!(resolve_target("app", cwd), resolve_target("app", cwd));
        assert_eq!(resolve_target(".", cwd), resolve_target(".", cwd));
    }

    #[test]
    fn test_is_directory_empty() {
        let dir = TempDir::new().unwrap();
        let path = utf8(&dir);

        assert!(is_directory_empty(path));
        assert!(is_directory_empty(&path.join("does-not-exist")));

        std::fs::write(path.join("file.txt"), "contents").unwrap();
        assert!(!is_directory_empty(path));
    }

    #[test]
    fn test_confirmation_policy() {
        let dir = TempDir::new().unwrap();
        let path = utf8(&dir);

        // Sentinel: empty -> no confirmation, non-empty -> confirmation
        assert!(!confirmation_required(".", path));
        std::fs::write(path.join("file.txt"), "contents").unwrap();
        assert!(confirmation_required(".", path));

        // Named: nonexistent -> no confirmation
        assert!(!confirmation_required("my-app", &path.join("my-app")));

        // Named: existing -> confirmation, even when empty
        let empty = path.join("empty");
        std::fs::create_dir(&empty).unwrap();
        assert!(confirmation_required("empty", &empty));
    }
}
