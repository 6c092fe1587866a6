/// Per-pane session coordination.
///
/// Owns both panes of the dual-pane surface and the lifecycle of their
/// background work: at most one scan and one transfer per pane, busy-state
/// toggling, and routing of worker events to the display collaborator.
/// Workers communicate via channels only; the collaborator calls
/// [`Session::process_events`] from its own context (typically once per
/// frame), so display state needs no locks.
use crate::model::Entry;
use crate::scanner::{self, progress::ScanEvent, ScanHandle};
use crate::transfer::{self, TransferEvent, TransferHandle, TransferRequest};

use crossbeam_channel::TryRecvError;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Identifies one half of the dual-pane surface.
///
/// Panes refer to each other through [`PaneId::counterpart`] and the
/// owning [`Session`], never through direct references to one another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaneId {
    Left,
    Right,
}

impl PaneId {
    /// The other pane. Transfer destinations are always the counterpart.
    pub fn counterpart(self) -> PaneId {
        match self {
            PaneId::Left => PaneId::Right,
            PaneId::Right => PaneId::Left,
        }
    }

    fn index(self) -> usize {
        match self {
            PaneId::Left => 0,
            PaneId::Right => 1,
        }
    }
}

/// The display collaborator's receiving surface.
///
/// Every method is invoked on the caller's own thread from inside
/// [`Session::request_scan`], [`Session::request_transfer`], or
/// [`Session::process_events`] - never from a worker thread.
pub trait DisplaySurface {
    /// One scanned child arrived for `pane`.
    fn entry_found(&mut self, pane: PaneId, entry: Entry);
    /// The scan of `pane` could not list its root. Terminal.
    fn scan_error(&mut self, pane: PaneId, message: &str);
    /// The scan of `pane` emitted every child. Terminal.
    fn scan_complete(&mut self, pane: PaneId);
    /// The transfer out of `pane` failed on an item. Terminal.
    fn transfer_error(&mut self, pane: PaneId, message: &str);
    /// The transfer out of `pane` moved every item. Terminal.
    fn transfer_complete(&mut self, pane: PaneId);
    /// `pane` entered or left the busy state. A busy pane must reject
    /// selection-driven commands until it is released.
    fn set_busy(&mut self, pane: PaneId, busy: bool);
}

/// Maximum events drained per pane per [`Session::process_events`] call.
///
/// Bounds the work done on the caller's thread in one frame when a scan of
/// a huge directory has backed up the channel.
const MAX_EVENTS_PER_DRAIN: usize = 300;

/// Mutable state of one pane.
#[derive(Default)]
pub struct PaneState {
    /// Directory currently shown, if any.
    pub current_path: Option<PathBuf>,
    /// `true` while a scan or transfer is in flight.
    pub busy: bool,
    /// Counts scans started on this pane; logged when a running scan is
    /// abandoned in favour of a new one.
    pub generation: u64,
    scan: Option<ScanHandle>,
    transfer: Option<TransferHandle>,
}

/// Coordinates the two panes and their background workers.
#[derive(Default)]
pub struct Session {
    panes: [PaneState; 2],
}

impl Session {
    /// Create a session with two idle, pathless panes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to a pane's state.
    pub fn pane(&self, id: PaneId) -> &PaneState {
        &self.panes[id.index()]
    }

    /// Start scanning `path` in `pane`, replacing any scan already running
    /// there.
    ///
    /// The replaced scan is abandoned, not cancelled: its walk keeps
    /// running, but its channel is dropped here, so whatever it still
    /// produces is inert. Rejected (returns `false`) while the pane is
    /// transferring.
    pub fn request_scan(
        &mut self,
        pane: PaneId,
        path: PathBuf,
        display: &mut dyn DisplaySurface,
    ) -> bool {
        let state = &mut self.panes[pane.index()];
        if state.transfer.is_some() {
            warn!(
                "Scan of {} rejected: {pane:?} pane is transferring",
                path.display()
            );
            return false;
        }

        state.generation += 1;
        if state.scan.take().is_some() {
            debug!(
                "{pane:?} pane abandons its scan; starting generation {}",
                state.generation
            );
        }

        state.current_path = Some(path.clone());
        if !state.busy {
            state.busy = true;
            display.set_busy(pane, true);
        }
        state.scan = Some(scanner::start_scan(path));
        true
    }

    /// Start moving `items` out of `source` into the counterpart pane.
    ///
    /// Both panes are disabled for the duration and rescanned once the
    /// terminal event arrives. Rejected (returns `false`) when `items` is
    /// empty, when either pane has no current path, or when either pane is
    /// already busy.
    pub fn request_transfer(
        &mut self,
        source: PaneId,
        items: Vec<String>,
        display: &mut dyn DisplaySurface,
    ) -> bool {
        let dest = source.counterpart();
        if items.is_empty() {
            return false;
        }
        if self.pane(source).busy || self.pane(dest).busy {
            warn!("Transfer out of {source:?} pane rejected: a pane is busy");
            return false;
        }
        let (source_dir, dest_dir) = match (
            self.pane(source).current_path.clone(),
            self.pane(dest).current_path.clone(),
        ) {
            (Some(source_dir), Some(dest_dir)) => (source_dir, dest_dir),
            _ => {
                warn!("Transfer out of {source:?} pane rejected: both panes need a path");
                return false;
            }
        };

        for id in [source, dest] {
            self.panes[id.index()].busy = true;
            display.set_busy(id, true);
        }

        self.panes[source.index()].transfer = Some(transfer::start_transfer(TransferRequest {
            items,
            source_dir,
            dest_dir,
        }));
        true
    }

    /// Drain pending worker events and forward them to `display`.
    ///
    /// Call from the presentation context, typically once per frame.
    /// Returns `true` if any event was processed (a repaint is warranted).
    pub fn process_events(&mut self, display: &mut dyn DisplaySurface) -> bool {
        let mut processed = false;
        for pane in [PaneId::Left, PaneId::Right] {
            processed |= self.drain_scan(pane, display);
            processed |= self.drain_transfer(pane, display);
        }
        processed
    }

    /// Drain up to [`MAX_EVENTS_PER_DRAIN`] scan events for one pane.
    fn drain_scan(&mut self, pane: PaneId, display: &mut dyn DisplaySurface) -> bool {
        let state = &mut self.panes[pane.index()];
        let mut processed = false;
        let mut drained = 0usize;

        while drained < MAX_EVENTS_PER_DRAIN {
            let received = match state.scan.as_ref() {
                Some(handle) => handle.events.try_recv(),
                None => break,
            };
            match received {
                Ok(ScanEvent::Entry(entry)) => {
                    drained += 1;
                    processed = true;
                    display.entry_found(pane, entry);
                }
                Ok(ScanEvent::Failed { message }) => {
                    display.scan_error(pane, &message);
                    finish_scan(state, pane, display);
                    return true;
                }
                Ok(ScanEvent::Complete) => {
                    display.scan_complete(pane);
                    finish_scan(state, pane, display);
                    return true;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    // The terminal event never arrived. Surface it as a
                    // failure so the busy state cannot leak.
                    display.scan_error(pane, "scan worker stopped unexpectedly");
                    finish_scan(state, pane, display);
                    return true;
                }
            }
        }
        processed
    }

    /// Forward a transfer's terminal event for one pane, if it arrived.
    fn drain_transfer(&mut self, pane: PaneId, display: &mut dyn DisplaySurface) -> bool {
        let received = match self.panes[pane.index()].transfer.as_ref() {
            Some(handle) => handle.events.try_recv(),
            None => return false,
        };
        match received {
            Ok(TransferEvent::Complete) => display.transfer_complete(pane),
            Ok(TransferEvent::Failed { message }) => display.transfer_error(pane, &message),
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => {
                display.transfer_error(pane, "transfer worker stopped unexpectedly");
            }
        }
        self.finish_transfer(pane, display);
        true
    }

    /// Return both panes to idle after a transfer terminal event, then
    /// refresh their contents.
    ///
    /// The refresh scans mark the panes busy again immediately; the
    /// release-then-rescan order keeps the busy transitions paired.
    fn finish_transfer(&mut self, source: PaneId, display: &mut dyn DisplaySurface) {
        self.panes[source.index()].transfer = None;
        for id in [source, source.counterpart()] {
            self.panes[id.index()].busy = false;
            display.set_busy(id, false);
        }
        for id in [source, source.counterpart()] {
            if let Some(path) = self.panes[id.index()].current_path.clone() {
                self.request_scan(id, path, display);
            }
        }
    }
}

/// Return a pane to idle after a scan terminal event.
///
/// Free function so the drain loop's `&mut PaneState` borrow suffices.
fn finish_scan(state: &mut PaneState, pane: PaneId, display: &mut dyn DisplaySurface) {
    state.scan = None;
    state.busy = false;
    display.set_busy(pane, false);
}
