//! Cancellable read orchestration with progress events.

use std::io::SeekFrom;

use base64::Engine;
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use filelens_core::{FileHandle, ReadConfig, ReadError, ReadProgress, ReadRequest};

use crate::READ_CHANNEL_SIZE;

/// Lifecycle event emitted during a read session.
#[derive(Debug)]
pub enum ReadEvent {
    /// The read began; the progress total is fixed for the session.
    /// `bytes_total` is `None` when the length is not computable.
    Started { bytes_total: Option<u64> },
    /// Bytes were delivered.
    Progress(ReadProgress),
    /// The read finished with decoded content.
    Complete(ReadOutput),
    /// The read terminated with an error.
    Failed(ReadError),
    /// The read was cancelled; nothing further will be sent.
    Aborted,
}

/// Decoded content of a completed read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutput {
    /// Raw bytes (full and ranged reads).
    Bytes(Vec<u8>),
    /// Base64 data URL, renderable directly as an image source.
    DataUrl(String),
}

/// Handle to an in-flight read: its event stream plus cancel control.
#[derive(Debug)]
pub struct ReadTask {
    /// Lifecycle events, ending with exactly one terminal event.
    pub events: mpsc::Receiver<ReadEvent>,
    cancel: CancellationToken,
}

impl ReadTask {
    /// Request cooperative cancellation.
    ///
    /// Idempotent; calling it once the session reached a terminal state
    /// has no visible effect.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Token that trips when this task is cancelled.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }
}

/// Start an asynchronous, cancellable read of `file`.
///
/// Returns immediately; the read runs on its own task and reports through
/// the returned channel. A new call creates a fresh session rather than
/// reusing a finished one.
pub fn start_read(file: &FileHandle, request: ReadRequest, config: &ReadConfig) -> ReadTask {
    let (tx, rx) = mpsc::channel(READ_CHANNEL_SIZE);
    let cancel = CancellationToken::new();

    let task_file = file.clone();
    let task_config = config.clone();
    let token = cancel.clone();
    tokio::spawn(async move {
        read_impl(task_file, request, task_config, tx, token).await;
    });

    ReadTask { events: rx, cancel }
}

/// Internal implementation of a read session.
async fn read_impl(
    file: FileHandle,
    request: ReadRequest,
    config: ReadConfig,
    tx: mpsc::Sender<ReadEvent>,
    cancel: CancellationToken,
) {
    // Fix the byte window for this session from the probed length.
    let size = file.known_length();
    let (offset, bytes_total) = match request {
        ReadRequest::Range(range) => (range.start, size.map(|s| range.len_within(s))),
        ReadRequest::Full | ReadRequest::DataUrl => (0, size),
    };

    let _ = tx.send(ReadEvent::Started { bytes_total }).await;

    let mut handle = match tokio::fs::File::open(&file.path).await {
        Ok(handle) => handle,
        Err(e) => {
            let _ = tx
                .send(ReadEvent::Failed(ReadError::io(&file.path, e)))
                .await;
            return;
        }
    };

    if offset > 0 {
        if let Err(e) = handle.seek(SeekFrom::Start(offset)).await {
            let _ = tx
                .send(ReadEvent::Failed(ReadError::io(&file.path, e)))
                .await;
            return;
        }
    }

    let mut progress = ReadProgress::new(bytes_total);
    let mut content: Vec<u8> = Vec::with_capacity(bytes_total.unwrap_or(0) as usize);
    let mut buf = vec![0u8; config.chunk_size];

    loop {
        // Stop exactly at a known total; otherwise read until EOF.
        let want = match bytes_total {
            Some(total) => {
                let remaining = total.saturating_sub(progress.bytes_loaded);
                if remaining == 0 {
                    break;
                }
                remaining.min(config.chunk_size as u64) as usize
            }
            None => config.chunk_size,
        };

        let read = tokio::select! {
            biased;

            _ = cancel.cancelled() => {
                let _ = tx.send(ReadEvent::Aborted).await;
                return;
            }

            read = handle.read(&mut buf[..want]) => read,
        };

        match read {
            Ok(0) => break,
            Ok(n) => {
                content.extend_from_slice(&buf[..n]);
                progress.bytes_loaded += n as u64;
                let _ = tx.send(ReadEvent::Progress(progress)).await;
            }
            Err(e) => {
                let _ = tx
                    .send(ReadEvent::Failed(ReadError::io(&file.path, e)))
                    .await;
                return;
            }
        }
    }

    let output = match request {
        ReadRequest::DataUrl => ReadOutput::DataUrl(to_data_url(&file, &content)),
        ReadRequest::Full | ReadRequest::Range(_) => ReadOutput::Bytes(content),
    };
    let _ = tx.send(ReadEvent::Complete(output)).await;
}

/// Encode content as a base64 data URL.
fn to_data_url(file: &FileHandle, content: &[u8]) -> String {
    let mime = file
        .media_type
        .as_deref()
        .unwrap_or("application/octet-stream");
    let payload = base64::engine::general_purpose::STANDARD.encode(content);
    format!("data:{mime};base64,{payload}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url_encoding() {
        let file = FileHandle::new("/p/dot.png", 3).with_media_type("image/png");
        let url = to_data_url(&file, b"abc");
        assert_eq!(url, "data:image/png;base64,YWJj");
    }

    #[test]
    fn test_data_url_unknown_type_falls_back() {
        let file = FileHandle::new("/p/blob", 3);
        let url = to_data_url(&file, b"abc");
        assert!(url.starts_with("data:application/octet-stream;base64,"));
    }
}
