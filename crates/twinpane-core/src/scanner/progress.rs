/// Scan event reporting - messages sent from the scan thread to the
/// presentation context via a crossbeam channel.

use crate::model::Entry;

/// Events emitted by one directory scan.
///
/// A scan emits zero or more `Entry` events followed by exactly one
/// terminal event, `Complete` or `Failed`, regardless of how many children
/// were produced. Per-child sizing failures never produce `Failed`; only a
/// failure to list the scan root itself does.
#[derive(Debug)]
pub enum ScanEvent {
    /// One immediate child of the scanned directory, fully sized.
    Entry(Entry),

    /// The root listing failed. Carries the underlying error text.
    /// Terminal; no further events follow.
    Failed { message: String },

    /// Every child was emitted. Terminal; no further events follow.
    Complete,
}

impl ScanEvent {
    /// `true` for the event that ends a scan's stream.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ScanEvent::Failed { .. } | ScanEvent::Complete)
    }
}
