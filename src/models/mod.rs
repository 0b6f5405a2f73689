//! Domain models for the media file server.

pub mod file_transfer;
pub mod media_file;

// Re-export commonly used types
pub use file_transfer::FileTransfer;
pub use media_file::{MediaFile, PageParams, SortDirection, SortField};
