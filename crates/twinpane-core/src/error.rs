use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the synchronous filesystem primitives in
/// [`crate::fsops`].
///
/// Background workers never surface this type across the channel boundary;
/// they reduce it to the message of a terminal `Failed` event. The `Result`
/// form is for direct callers, such as the display collaborator performing
/// a delete.
#[derive(Debug, Error)]
pub enum Error {
    /// Listing a directory failed.
    #[error("cannot read directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Copying a regular file failed.
    #[error("cannot copy {} to {}: {source}", .from.display(), .to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Creating a destination directory failed.
    #[error("cannot create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Removing a file or directory tree failed.
    #[error("cannot remove {}: {source}", .path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading metadata for a path failed.
    #[error("cannot stat {}: {source}", .path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
