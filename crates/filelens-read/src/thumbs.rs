//! Concurrent thumbnail rendering.

use compact_str::CompactString;
use tokio::sync::mpsc;
use tracing::warn;

use filelens_core::{FileHandle, ReadConfig, ReadRequest};

use crate::READ_CHANNEL_SIZE;
use crate::reader::{ReadEvent, ReadOutput, start_read};

/// A rendered image preview.
#[derive(Debug, Clone)]
pub struct Thumbnail {
    /// Source file name.
    pub name: CompactString,
    /// Image content as a base64 data URL.
    pub data_url: String,
}

/// Render thumbnails for every image file in `files`.
///
/// Each image gets its own independent data-URL read carrying its own
/// immutable handle; thumbnails arrive in whatever order their reads
/// complete. The channel closes once every read has finished. Non-image
/// files are ignored; oversized sources and failed reads are skipped
/// with a warning and never affect sibling reads.
pub fn render_thumbnails(files: &[FileHandle], config: &ReadConfig) -> mpsc::Receiver<Thumbnail> {
    let (tx, rx) = mpsc::channel(READ_CHANNEL_SIZE);

    for file in files.iter().filter(|f| f.is_image()) {
        if file.size > config.max_thumbnail_bytes {
            warn!(
                name = %file.name,
                size = file.size,
                "skipping oversized thumbnail source"
            );
            continue;
        }

        let file = file.clone();
        let mut task = start_read(&file, ReadRequest::DataUrl, config);
        let tx = tx.clone();
        tokio::spawn(async move {
            while let Some(event) = task.events.recv().await {
                match event {
                    ReadEvent::Complete(ReadOutput::DataUrl(data_url)) => {
                        let thumbnail = Thumbnail {
                            name: file.name.clone(),
                            data_url,
                        };
                        if tx.send(thumbnail).await.is_err() {
                            break;
                        }
                    }
                    ReadEvent::Failed(err) => {
                        warn!(name = %file.name, error = %err, "thumbnail read failed");
                    }
                    _ => {}
                }
            }
        });
    }

    rx
}
