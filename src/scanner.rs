//! Deterministic enumeration of C# source files.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::ExtractError;

/// Build-output directories whose contents duplicate or generate source.
const EXCLUDED_DIRS: &[&str] = &["obj", "bin"];

fn is_build_output(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && matches!(entry.file_name().to_str(), Some(name) if EXCLUDED_DIRS.contains(&name))
}

fn is_csharp_file(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("cs"))
}

/// Recursively list all `*.cs` files under `root`, sorted lexicographically
/// by path.
///
/// Files under build-output directories (`obj`, `bin`) are excluded at any
/// depth. Any unreadable directory aborts the enumeration; a partial file
/// list would silently drop translatable strings.
pub fn scan_files(root: &Path) -> Result<Vec<PathBuf>, ExtractError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !is_build_output(e))
    {
        let entry = entry.map_err(|err| ExtractError::Io {
            path: err.path().unwrap_or(root).to_path_buf(),
            source: err.into(),
        })?;

        if entry.file_type().is_file() && is_csharp_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "// empty\n").unwrap();
    }

    #[test]
    fn lists_sorted_and_skips_build_output() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "src/b.cs");
        touch(dir.path(), "src/a.cs");
        touch(dir.path(), "src/obj/generated.cs");
        touch(dir.path(), "bin/Debug/App.cs");
        touch(dir.path(), "src/readme.txt");

        let files = scan_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|f| f.strip_prefix(dir.path()).unwrap().to_string_lossy().replace('\\', "/"))
            .collect();

        assert_eq!(names, vec!["src/a.cs", "src/b.cs"]);
    }

    #[test]
    fn missing_root_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");

        let err = scan_files(&missing).unwrap_err();
        match err {
            ExtractError::Io { path, .. } => assert_eq!(path, missing),
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    #[cfg(unix)]
    fn io_error_under_a_subdirectory_names_that_path() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a.cs");
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let result = scan_files(dir.path());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        match result {
            Err(ExtractError::Io { path, .. }) => assert_eq!(path, locked),
            // Root bypasses permission checks, so the scan may succeed.
            Ok(_) => {}
            Err(other) => panic!("expected Io, got {other:?}"),
        }
    }
}
