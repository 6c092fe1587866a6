/// Filesystem primitives shared by the transfer worker and the display
/// collaborator's synchronous delete.
///
/// Everything here is blocking; callers that must stay responsive run it
/// on a worker thread.
use crate::error::Error;

use std::fs;
use std::path::Path;
use tracing::debug;

/// Copy one regular file, overwriting any existing destination file.
///
/// `fs::copy` carries the platform's file metadata along (permission bits
/// on Unix). Returns the number of bytes copied.
pub fn copy_file(from: &Path, to: &Path) -> Result<u64, Error> {
    fs::copy(from, to).map_err(|source| Error::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })
}

/// Recursively copy a directory tree.
///
/// Merges into an existing destination directory of the same name instead
/// of failing: destination files that collide are overwritten, everything
/// else already there is left in place. Symlinks and special files are not
/// copied.
pub fn copy_tree(from: &Path, to: &Path) -> Result<(), Error> {
    fs::create_dir_all(to).map_err(|source| Error::CreateDir {
        path: to.to_path_buf(),
        source,
    })?;

    let read_dir = fs::read_dir(from).map_err(|source| Error::ReadDir {
        path: from.to_path_buf(),
        source,
    })?;

    for entry in read_dir {
        let entry = entry.map_err(|source| Error::ReadDir {
            path: from.to_path_buf(),
            source,
        })?;
        let src = entry.path();
        let dest = to.join(entry.file_name());
        let file_type = entry.file_type().map_err(|source| Error::Stat {
            path: src.clone(),
            source,
        })?;

        if file_type.is_dir() {
            copy_tree(&src, &dest)?;
        } else if file_type.is_file() {
            copy_file(&src, &dest)?;
        } else {
            debug!("Not copying special entry {}", src.display());
        }
    }
    Ok(())
}

/// Remove a regular file, or a directory tree recursively.
///
/// This is the delete path of the display collaborator: called once per
/// selected item, with per-item failures reported by the caller and the
/// corresponding view entry kept when removal fails.
pub fn remove_path(path: &Path) -> Result<(), Error> {
    let meta = fs::symlink_metadata(path).map_err(|source| Error::Stat {
        path: path.to_path_buf(),
        source,
    })?;

    let result = if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    result.map_err(|source| Error::Remove {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_text(path: &Path, text: &str) {
        let mut f = fs::File::create(path).unwrap();
        f.write_all(text.as_bytes()).unwrap();
    }

    #[test]
    fn test_copy_file_overwrites_existing() {
        let tmp = TempDir::new().unwrap();
        let from = tmp.path().join("from.txt");
        let to = tmp.path().join("to.txt");
        write_text(&from, "new content");
        write_text(&to, "old");

        copy_file(&from, &to).unwrap();
        assert_eq!(fs::read_to_string(&to).unwrap(), "new content");
    }

    #[test]
    fn test_remove_path_handles_files_and_trees() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("f.txt");
        write_text(&file, "x");
        let dir = tmp.path().join("d");
        fs::create_dir(&dir).unwrap();
        write_text(&dir.join("inner.txt"), "y");

        remove_path(&file).unwrap();
        remove_path(&dir).unwrap();
        assert!(!file.exists());
        assert!(!dir.exists());
    }

    #[test]
    fn test_remove_missing_path_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = remove_path(&tmp.path().join("ghost")).unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }
}
