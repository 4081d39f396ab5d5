//! Metadata listing projection.

use chrono::{DateTime, Local};
use compact_str::CompactString;
use serde::Serialize;

use filelens_core::FileHandle;

/// Placeholder shown when a file attribute is unavailable.
pub const PLACEHOLDER: &str = "n/a";

/// One display row of file metadata.
#[derive(Debug, Clone, Serialize)]
pub struct MetadataRow {
    /// File name.
    pub name: CompactString,
    /// MIME type, or the placeholder when unknown.
    pub media_type: CompactString,
    /// Size in bytes.
    pub size: u64,
    /// Last-modified date, or the placeholder when unavailable.
    pub modified: CompactString,
}

impl MetadataRow {
    fn from_handle(file: &FileHandle) -> Self {
        let media_type = file
            .media_type
            .clone()
            .unwrap_or_else(|| CompactString::from(PLACEHOLDER));
        let modified = file
            .modified
            .map(|t| CompactString::from(DateTime::<Local>::from(t).format("%Y-%m-%d").to_string()))
            .unwrap_or_else(|| CompactString::from(PLACEHOLDER));
        Self {
            name: file.name.clone(),
            media_type,
            size: file.size,
            modified,
        }
    }
}

impl std::fmt::Display for MetadataRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) - {} bytes, last modified: {}",
            self.name, self.media_type, self.size, self.modified
        )
    }
}

/// Project handles into display rows.
///
/// Pure projection, no I/O; the input order is preserved.
pub fn list_metadata(files: &[FileHandle]) -> Vec<MetadataRow> {
    files.iter().map(MetadataRow::from_handle).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::SystemTime;

    #[test]
    fn test_placeholders_for_missing_attributes() {
        let handle = FileHandle::new("/p/mystery.bin", 340);
        let rows = list_metadata(&[handle]);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].media_type, PLACEHOLDER);
        assert_eq!(rows[0].modified, PLACEHOLDER);
        // Never an empty string
        assert!(!rows[0].media_type.is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let files = vec![
            FileHandle::new("/p/photo.png", 1200).with_media_type("image/png"),
            FileHandle::new("/p/notes.txt", 340).with_media_type("text/plain"),
        ];
        let rows = list_metadata(&files);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "photo.png");
        assert_eq!(rows[1].name, "notes.txt");
    }

    #[test]
    fn test_display_line() {
        let handle = FileHandle::new("/p/photo.png", 1200)
            .with_media_type("image/png")
            .with_modified(SystemTime::now());
        let row = &list_metadata(&[handle])[0];
        let line = row.to_string();

        assert!(line.starts_with("photo.png (image/png) - 1200 bytes, last modified: "));
        assert!(!line.ends_with("n/a"));
    }
}
