/// One file-or-directory record shown in a pane.
///
/// Entries are produced by a scan and handed to the display collaborator
/// one at a time; the collaborator owns the copy it receives.
use compact_str::CompactString;
use std::path::PathBuf;

/// A single scanned child of a pane's current directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// File or directory name only (NOT the full path).
    pub name: CompactString,

    /// Absolute path of the entry.
    pub path: PathBuf,

    /// Size in bytes. For directories this is the sum of all regular-file
    /// sizes underneath, with unreadable descendants contributing 0.
    pub size: u64,

    /// `true` if this entry is a directory.
    pub is_dir: bool,
}

/// The orderings the browser surface offers via its column headers:
/// name ascending, or size descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    NameAscending,
    SizeDescending,
}

/// Sort entries in place by the given key.
///
/// Final display ordering is the collaborator's choice; the core only
/// supplies the comparators. Size ties fall back to name order so the
/// result is deterministic.
pub fn sort_entries(entries: &mut [Entry], key: SortKey) {
    match key {
        SortKey::NameAscending => entries.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::SizeDescending => {
            entries.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.name.cmp(&b.name)))
        }
    }
}
