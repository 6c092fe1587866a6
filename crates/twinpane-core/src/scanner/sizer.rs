/// Recursive size computation - the sizing half of a directory scan.
///
/// Walks a subtree with `jwalk` and sums regular-file lengths. The whole
/// module upholds one contract: sizing never fails, it only under-counts.
use std::fs;
use std::path::Path;

/// Compute the total byte size of the tree rooted at `path`.
///
/// Regular files contribute their length; directories contribute the sum
/// of every regular file beneath them. Any per-node I/O error (permission
/// denied, entry deleted between listing and stat, broken symlink)
/// contributes 0 and aborts nothing, so an unreadable descendant never
/// poisons a sibling or ancestor total.
///
/// Symlinks are not followed, so a cyclic link cannot recurse and a
/// symlink entry sizes as 0. Hard links are counted once per path.
pub fn compute_size(path: &Path) -> u64 {
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        // Vanished between listing and sizing: contributes nothing.
        Err(_) => return 0,
    };

    if meta.is_file() {
        return meta.len();
    }
    if !meta.is_dir() {
        // Symlinks and special files.
        return 0;
    }

    let mut total: u64 = 0;
    for entry in jwalk::WalkDir::new(path)
        .skip_hidden(false)
        .follow_links(false)
    {
        let entry = match entry {
            Ok(entry) => entry,
            // Typically access-denied on a subdirectory; its contents
            // count as 0.
            Err(_) => continue,
        };
        if !entry.file_type().is_file() {
            continue;
        }
        // The stat can still fail if the file vanished after being listed.
        if let Ok(meta) = fs::symlink_metadata(entry.path()) {
            total += meta.len();
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_bytes(path: &Path, n: usize) {
        let mut f = File::create(path).unwrap();
        f.write_all(&vec![0u8; n]).unwrap();
    }

    #[test]
    fn test_empty_directory_is_zero() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(compute_size(tmp.path()), 0);
    }

    #[test]
    fn test_single_file_is_its_length() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("data.bin");
        write_bytes(&file, 1234);
        assert_eq!(compute_size(&file), 1234);
    }

    #[test]
    fn test_nested_tree_sums_regular_files() {
        let tmp = TempDir::new().unwrap();
        let deep = tmp.path().join("a").join("b").join("c");
        fs::create_dir_all(&deep).unwrap();
        write_bytes(&tmp.path().join("top.txt"), 100);
        write_bytes(&tmp.path().join("a").join("mid.txt"), 200);
        write_bytes(&deep.join("leaf.txt"), 300);
        assert_eq!(compute_size(tmp.path()), 600);
        assert_eq!(compute_size(&tmp.path().join("a")), 500);
    }

    #[test]
    fn test_missing_path_is_zero() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(compute_size(&tmp.path().join("no-such-entry")), 0);
    }

    /// An unreadable subtree contributes 0 instead of failing the total.
    #[cfg(unix)]
    #[test]
    fn test_unreadable_subtree_contributes_zero() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        write_bytes(&tmp.path().join("visible.txt"), 50);
        let locked = tmp.path().join("locked");
        fs::create_dir(&locked).unwrap();
        write_bytes(&locked.join("hidden.txt"), 100);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // A privileged process can read the directory anyway; the
        // permission barrier does not exist for it, so skip.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let total = compute_size(tmp.path());
        // Restore permissions so TempDir cleanup succeeds.
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        assert_eq!(total, 50);
    }
}
