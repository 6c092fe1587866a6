/// Transfer module - batch safe moves between panes.
///
/// A transfer relocates named items from a source directory into a
/// destination directory as copy-then-delete: the source is removed only
/// after its copy succeeded, so a failure mid-operation leaves at worst a
/// harmless duplicate, never a lost file. This is deliberately not an
/// atomic rename.
///
/// # Lifecycle
///
/// One worker thread per request. The worker emits exactly one terminal
/// [`TransferEvent`] and exits; transfers are not interruptible once
/// started.
use crate::fsops;
use crate::Error;

use crossbeam_channel::{Receiver, Sender};
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use tracing::{debug, info, warn};

/// A batch move request, consumed whole by one worker.
#[derive(Debug, Clone)]
pub struct TransferRequest {
    /// Item names (immediate children of `source_dir`), in move order.
    pub items: Vec<String>,
    /// Directory the items currently live in.
    pub source_dir: PathBuf,
    /// Directory the items are moved into.
    pub dest_dir: PathBuf,
}

/// Terminal event of a transfer. Exactly one is sent per transfer.
#[derive(Debug)]
pub enum TransferEvent {
    /// An item failed. Items moved before it stay moved; the failing item
    /// and everything after it are untouched at the source.
    Failed { message: String },
    /// Every item was moved.
    Complete,
}

/// A transfer emits exactly one event, so one slot suffices and the worker
/// never blocks on send.
const TRANSFER_CHANNEL_CAPACITY: usize = 1;

/// Handle to a running transfer.
///
/// Dropping the handle only discards the terminal event; the move itself
/// keeps running to its end.
pub struct TransferHandle {
    /// Receiver for the terminal event from the transfer thread.
    pub events: Receiver<TransferEvent>,
    /// Join handle for the worker thread.
    _thread: Option<thread::JoinHandle<()>>,
}

/// Start moving `request.items` on a background thread.
pub fn start_transfer(request: TransferRequest) -> TransferHandle {
    let (events_tx, events_rx) = crossbeam_channel::bounded(TRANSFER_CHANNEL_CAPACITY);

    let thread = thread::Builder::new()
        .name("twinpane-transfer".into())
        .spawn(move || {
            info!(
                "Moving {} item(s) from {} to {}",
                request.items.len(),
                request.source_dir.display(),
                request.dest_dir.display()
            );
            transfer_items(&request, &events_tx);
        })
        .expect("failed to spawn transfer thread");

    TransferHandle {
        events: events_rx,
        _thread: Some(thread),
    }
}

/// Move each item in request order, stopping at the first failure.
fn transfer_items(request: &TransferRequest, events_tx: &Sender<TransferEvent>) {
    // Copying a file onto itself truncates it before the source delete;
    // refuse the whole batch rather than risk that.
    if request.source_dir == request.dest_dir {
        let _ = events_tx.send(TransferEvent::Failed {
            message: format!(
                "source and destination are the same directory: {}",
                request.source_dir.display()
            ),
        });
        return;
    }

    for name in &request.items {
        let src = request.source_dir.join(name);
        let dest = request.dest_dir.join(name);
        if let Err(err) = move_item(&src, &dest) {
            warn!("Move of {} failed: {err}", src.display());
            let _ = events_tx.send(TransferEvent::Failed {
                message: err.to_string(),
            });
            return;
        }
    }
    let _ = events_tx.send(TransferEvent::Complete);
}

/// Copy one item to `dest`, then remove the source.
///
/// Directories merge into an existing destination directory of the same
/// name. Items that are neither regular files nor directories (vanished
/// entries, symlinks, special files) are skipped.
fn move_item(src: &Path, dest: &Path) -> Result<(), Error> {
    let meta = match fs::symlink_metadata(src) {
        Ok(meta) => meta,
        Err(_) => {
            debug!("Skipping vanished item {}", src.display());
            return Ok(());
        }
    };

    if meta.is_file() {
        fsops::copy_file(src, dest)?;
        fsops::remove_path(src)?;
    } else if meta.is_dir() {
        fsops::copy_tree(src, dest)?;
        fsops::remove_path(src)?;
    } else {
        debug!("Skipping special item {}", src.display());
    }
    Ok(())
}
