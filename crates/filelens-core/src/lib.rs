//! Core types for filelens.
//!
//! This crate provides the fundamental data structures used throughout
//! the filelens ecosystem: file handles, read requests, session state,
//! and the read error taxonomy.

mod config;
mod error;
mod handle;
mod request;
mod session;

pub use config::{ReadConfig, ReadConfigBuilder};
pub use error::ReadError;
pub use handle::FileHandle;
pub use request::{ByteRange, ReadRequest};
pub use session::{ReadProgress, ReadSession, ReadStatus};
