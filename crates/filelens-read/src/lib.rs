//! Asynchronous file reading engine for filelens.
//!
//! This crate is the orchestration layer between user-selected files and
//! the host filesystem: it probes metadata, projects display rows, renders
//! image thumbnails as data URLs, and drives cancellable reads with
//! progress reporting.
//!
//! # Overview
//!
//! Reads are asynchronous operations dispatched onto tokio tasks; the
//! caller never blocks. Each read reports its lifecycle over a channel:
//! a start event, zero or more progress events, and exactly one terminal
//! event (complete, failed, or aborted).
//!
//! # Example
//!
//! ```rust,no_run
//! use filelens_core::{ReadConfig, ReadRequest};
//! use filelens_read::{probe, start_read, ReadEvent};
//!
//! # async fn demo() -> Result<(), filelens_core::ReadError> {
//! let file = probe("big.iso").await?;
//! let mut task = start_read(&file, ReadRequest::Full, &ReadConfig::default());
//!
//! while let Some(event) = task.events.recv().await {
//!     match event {
//!         ReadEvent::Progress(p) => println!("{} bytes", p.bytes_loaded),
//!         ReadEvent::Complete(_) => println!("done"),
//!         _ => {}
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Cancellation
//!
//! [`ReadTask::cancel`] requests cooperative cancellation; the read loop
//! observes it between chunks. After the abort event no further event
//! fires for that session.

mod listing;
mod probe;
mod reader;
mod thumbs;

pub use listing::{MetadataRow, PLACEHOLDER, list_metadata};
pub use probe::{probe, probe_all};
pub use reader::{ReadEvent, ReadOutput, ReadTask, start_read};
pub use thumbs::{Thumbnail, render_thumbnails};

// Re-export core types for convenience
pub use filelens_core::{
    ByteRange, FileHandle, ReadConfig, ReadError, ReadProgress, ReadRequest, ReadSession,
    ReadStatus,
};

/// Default channel buffer size for read lifecycle events.
pub const READ_CHANNEL_SIZE: usize = 100;
