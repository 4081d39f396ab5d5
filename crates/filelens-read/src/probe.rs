//! File metadata probing and media type detection.

use std::path::Path;

use compact_str::CompactString;
use tokio::io::AsyncReadExt;

use filelens_core::{FileHandle, ReadError};

/// Bytes inspected for magic-byte media detection.
const SNIFF_BYTES: usize = 512;

/// Probe a path into an immutable [`FileHandle`].
///
/// Stats the file, detects its media type, and records whether the length
/// is meaningful for progress computation (regular files only).
pub async fn probe(path: impl AsRef<Path>) -> Result<FileHandle, ReadError> {
    let path = path.as_ref();
    let meta = tokio::fs::metadata(path)
        .await
        .map_err(|e| ReadError::io(path, e))?;

    let mut handle = FileHandle::new(path, meta.len());
    if !meta.is_file() {
        handle = handle.non_regular();
    }
    if let Ok(modified) = meta.modified() {
        handle = handle.with_modified(modified);
    }
    // Sniffing a non-regular file (fifo, device) could block forever
    if meta.is_file() {
        if let Some(media_type) = detect_media_type(path).await {
            handle = handle.with_media_type(media_type);
        }
    }

    Ok(handle)
}

/// Probe a sequence of paths, preserving input order.
pub async fn probe_all(
    paths: impl IntoIterator<Item = impl AsRef<Path>>,
) -> Result<Vec<FileHandle>, ReadError> {
    let mut handles = Vec::new();
    for path in paths {
        handles.push(probe(path).await?);
    }
    Ok(handles)
}

/// Detect a MIME type from magic bytes, falling back to the extension.
///
/// Magic bytes win; the fallback covers text formats that have none.
async fn detect_media_type(path: &Path) -> Option<CompactString> {
    let head = read_head(path).await.unwrap_or_default();
    if let Some(kind) = infer::get(&head) {
        return Some(CompactString::from(kind.mime_type()));
    }
    extension_media_type(path)
}

async fn read_head(path: &Path) -> std::io::Result<Vec<u8>> {
    let mut file = tokio::fs::File::open(path).await?;
    let mut buf = vec![0u8; SNIFF_BYTES];
    let n = file.read(&mut buf).await?;
    buf.truncate(n);
    Ok(buf)
}

fn extension_media_type(path: &Path) -> Option<CompactString> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    let mime = match ext.as_str() {
        "svg" => "image/svg+xml",
        "txt" | "log" => "text/plain",
        "md" => "text/markdown",
        "csv" => "text/csv",
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" => "text/javascript",
        "json" => "application/json",
        "xml" => "application/xml",
        "pdf" => "application/pdf",
        _ => return None,
    };
    Some(CompactString::from(mime))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_extension_fallback() {
        assert_eq!(
            extension_media_type(&PathBuf::from("notes.txt")).as_deref(),
            Some("text/plain")
        );
        assert_eq!(
            extension_media_type(&PathBuf::from("logo.svg")).as_deref(),
            Some("image/svg+xml")
        );
        assert_eq!(extension_media_type(&PathBuf::from("mystery.bin")), None);
        assert_eq!(extension_media_type(&PathBuf::from("no_extension")), None);
    }

    #[tokio::test]
    async fn test_probe_detects_png_magic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.png");
        // PNG signature followed by filler
        let mut content = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        content.extend_from_slice(&[0u8; 64]);
        tokio::fs::write(&path, &content).await.unwrap();

        let handle = probe(&path).await.unwrap();
        assert_eq!(handle.media_type.as_deref(), Some("image/png"));
        assert!(handle.is_image());
        assert_eq!(handle.size, content.len() as u64);
        assert!(handle.regular);
    }

    #[tokio::test]
    async fn test_probe_missing_file() {
        let err = probe("/definitely/not/here.txt").await.unwrap_err();
        assert!(matches!(err, ReadError::NotFound { .. }));
    }
}
