/// TwinPane Core - scanning, transfer, and pane-session coordination for a
/// dual-pane folder browser.
///
/// This crate contains all business logic with zero UI dependencies.
/// A frontend implements [`session::DisplaySurface`], drives a
/// [`session::Session`], and drains worker events from its own context;
/// nothing in here touches display state directly.
///
/// # Modules
///
/// - [`model`] - entry records, sort orders, human-readable sizes.
/// - [`scanner`] - background one-level directory scans with recursive sizing.
/// - [`transfer`] - background copy-then-delete moves between panes.
/// - [`session`] - per-pane lifecycle: busy state, abandonment, event routing.
/// - [`fsops`] - copy/remove primitives shared by transfer and delete.
/// - [`export`] - ASCII tree rendering of a selection.
pub mod error;
pub mod export;
pub mod fsops;
pub mod model;
pub mod scanner;
pub mod session;
pub mod transfer;

pub use error::Error;
