/// Scanner module - background one-level directory scans.
///
/// A scan lists the immediate children of one directory, computes the
/// recursive size of each with [`sizer::compute_size`], and streams the
/// results back as [`ScanEvent`]s over a bounded channel so the calling
/// context stays responsive. The worker owns no shared state; it only
/// produces events, which the presentation context drains on its own
/// thread.
pub mod progress;
pub mod sizer;

use crate::model::Entry;
use progress::ScanEvent;

use compact_str::CompactString;
use crossbeam_channel::{Receiver, Sender};
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Instant;
use tracing::{debug, info};

/// Maximum number of events that may queue up in the scan channel.
///
/// The presentation context drains the channel once per frame. A directory
/// with more immediate children than this briefly blocks the worker between
/// drains rather than consuming unbounded heap; scanning is read-only, so
/// stalling the worker is harmless.
pub const EVENT_CHANNEL_CAPACITY: usize = 4_096;

/// Handle to a running or completed scan.
///
/// Dropping the handle abandons the scan: the worker keeps walking to
/// completion, but its sends fail silently and the results go nowhere.
/// There is no cancellation token; abandonment is the only retirement
/// mechanism, and it is safe because scanning never writes.
pub struct ScanHandle {
    /// Receiver for entry and terminal events from the scan thread.
    pub events: Receiver<ScanEvent>,
    /// Join handle for the worker thread.
    _thread: Option<thread::JoinHandle<()>>,
}

/// Start scanning the immediate children of `root` on a background thread.
pub fn start_scan(root: PathBuf) -> ScanHandle {
    let (events_tx, events_rx) = crossbeam_channel::bounded::<ScanEvent>(EVENT_CHANNEL_CAPACITY);

    let thread = thread::Builder::new()
        .name("twinpane-scan".into())
        .spawn(move || {
            info!("Starting scan of {}", root.display());
            scan_directory(&root, &events_tx);
        })
        .expect("failed to spawn scanner thread");

    ScanHandle {
        events: events_rx,
        _thread: Some(thread),
    }
}

/// List `root`, size each child, and emit one `Entry` event per child
/// followed by exactly one terminal event.
///
/// Emission order is listing order; sorting is the display collaborator's
/// concern. Sends are emit-and-forget so an abandoned scan (receiver
/// dropped) runs to completion without effect.
fn scan_directory(root: &Path, events_tx: &Sender<ScanEvent>) {
    let start = Instant::now();

    let read_dir = match fs::read_dir(root) {
        Ok(read_dir) => read_dir,
        Err(err) => {
            debug!("Listing {} failed: {err}", root.display());
            let _ = events_tx.send(ScanEvent::Failed {
                message: err.to_string(),
            });
            return;
        }
    };

    let mut emitted: usize = 0;
    for entry in read_dir {
        let entry = match entry {
            Ok(entry) => entry,
            // A child that cannot be listed is absorbed like any other
            // per-child failure; only whole-listing failure is terminal.
            Err(err) => {
                debug!("Skipping unreadable child of {}: {err}", root.display());
                continue;
            }
        };

        let path = entry.path();
        let is_dir = fs::symlink_metadata(&path)
            .map(|meta| meta.is_dir())
            .unwrap_or(false);
        let size = sizer::compute_size(&path);
        let name = CompactString::new(entry.file_name().to_string_lossy().as_ref());

        let _ = events_tx.send(ScanEvent::Entry(Entry {
            name,
            path,
            size,
            is_dir,
        }));
        emitted += 1;
    }

    debug!(
        "Scanned {} children of {} in {:?}",
        emitted,
        root.display(),
        start.elapsed()
    );
    let _ = events_tx.send(ScanEvent::Complete);
}
