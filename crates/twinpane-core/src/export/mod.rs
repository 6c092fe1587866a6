/// ASCII tree export.
///
/// Renders a selection of pane items as a text tree for sharing. Where the
/// string ends up (clipboard, file) is the display collaborator's choice;
/// the core only builds it.
use std::fs;
use std::path::Path;

/// Connector for the last entry at a level.
const LAST: &str = "└─ ";
/// Connector for every other entry.
const TEE: &str = "├─ ";
/// Child prefix below a non-last entry.
const PIPE: &str = "│  ";
/// Child prefix below a last entry.
const GAP: &str = "   ";

/// Render the selected `names` under `root` as an ASCII tree.
///
/// Selection order is preserved at the top level; every directory level
/// below lists its children lexicographically. An unreadable directory
/// renders a single `Error accessing ...` line at its position and the
/// rest of the tree is unaffected.
pub fn render_selection(root: &Path, names: &[String]) -> String {
    let mut lines: Vec<String> = Vec::new();
    for (idx, name) in names.iter().enumerate() {
        let last = idx + 1 == names.len();
        lines.push(format!("{}{name}", connector(last)));

        let path = root.join(name);
        if is_dir_no_follow(&path) {
            render_dir(&path, child_prefix(last), &mut lines);
        }
    }
    lines.join("\n")
}

/// Render one directory level at `prefix`, recursing into subdirectories.
fn render_dir(path: &Path, prefix: &str, lines: &mut Vec<String>) {
    let mut names: Vec<String> = match fs::read_dir(path) {
        Ok(read_dir) => read_dir
            .filter_map(Result::ok)
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect(),
        Err(err) => {
            lines.push(format!("{prefix}Error accessing {}: {err}", path.display()));
            return;
        }
    };
    names.sort();

    for (idx, name) in names.iter().enumerate() {
        let last = idx + 1 == names.len();
        lines.push(format!("{prefix}{}{name}", connector(last)));

        let child = path.join(name);
        if is_dir_no_follow(&child) {
            let deeper = format!("{prefix}{}", child_prefix(last));
            render_dir(&child, &deeper, lines);
        }
    }
}

fn connector(last: bool) -> &'static str {
    if last {
        LAST
    } else {
        TEE
    }
}

fn child_prefix(last: bool) -> &'static str {
    if last {
        GAP
    } else {
        PIPE
    }
}

/// Directory check that does not follow symlinks, consistent with the
/// scanner: a symlinked directory is rendered as a leaf.
fn is_dir_no_follow(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|meta| meta.is_dir())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        File::create(path).unwrap();
    }

    #[test]
    fn test_directory_children_render_sorted() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("stuff");
        fs::create_dir(&dir).unwrap();
        touch(&dir.join("b"));
        touch(&dir.join("a"));

        let rendered = render_selection(tmp.path(), &["stuff".to_string()]);
        assert_eq!(rendered, "└─ stuff\n   ├─ a\n   └─ b");
    }

    #[test]
    fn test_selection_order_is_preserved() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("zebra.txt"));
        touch(&tmp.path().join("apple.txt"));

        let rendered = render_selection(
            tmp.path(),
            &["zebra.txt".to_string(), "apple.txt".to_string()],
        );
        assert_eq!(rendered, "├─ zebra.txt\n└─ apple.txt");
    }

    #[test]
    fn test_nested_prefixes() {
        let tmp = TempDir::new().unwrap();
        let top = tmp.path().join("top");
        let sub = top.join("sub");
        fs::create_dir_all(&sub).unwrap();
        touch(&sub.join("x.txt"));
        touch(&top.join("z.txt"));

        let rendered = render_selection(tmp.path(), &["top".to_string()]);
        let expected = "\
└─ top
   ├─ sub
   │  └─ x.txt
   └─ z.txt";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_non_last_directory_uses_pipe_prefix() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("dir");
        fs::create_dir(&dir).unwrap();
        touch(&dir.join("inner.txt"));
        touch(&tmp.path().join("after.txt"));

        let rendered = render_selection(
            tmp.path(),
            &["dir".to_string(), "after.txt".to_string()],
        );
        let expected = "\
├─ dir
│  └─ inner.txt
└─ after.txt";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_empty_selection_renders_nothing() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(render_selection(tmp.path(), &[]), "");
    }
}
