//! File handle types.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// An immutable reference to a user-selected file.
///
/// A handle is produced by probing the host filesystem once and is never
/// refreshed afterwards; the file it names stays owned by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileHandle {
    /// Full path to the file.
    pub path: PathBuf,

    /// File name (not full path).
    pub name: CompactString,

    /// Detected MIME type, when one could be determined.
    pub media_type: Option<CompactString>,

    /// Size in bytes.
    pub size: u64,

    /// Last modification time (if available).
    pub modified: Option<SystemTime>,

    /// Whether this is a regular file with a meaningful length.
    pub regular: bool,
}

impl FileHandle {
    /// Create a handle for a regular file, deriving the name from the path.
    pub fn new(path: impl Into<PathBuf>, size: u64) -> Self {
        let path = path.into();
        let name = file_name(&path);
        Self {
            path,
            name,
            media_type: None,
            size,
            modified: None,
            regular: true,
        }
    }

    /// Set the detected media type.
    pub fn with_media_type(mut self, media_type: impl Into<CompactString>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    /// Set the last modification time.
    pub fn with_modified(mut self, modified: SystemTime) -> Self {
        self.modified = Some(modified);
        self
    }

    /// Mark the handle as referring to a non-regular file (pipe, device).
    pub fn non_regular(mut self) -> Self {
        self.regular = false;
        self
    }

    /// Byte length, when it is meaningful for progress computation.
    pub fn known_length(&self) -> Option<u64> {
        self.regular.then_some(self.size)
    }

    /// Whether the detected media type is an image type.
    pub fn is_image(&self) -> bool {
        self.media_type
            .as_deref()
            .is_some_and(|mime| mime.starts_with("image/"))
    }
}

fn file_name(path: &Path) -> CompactString {
    path.file_name()
        .map(|n| CompactString::from(n.to_string_lossy()))
        .unwrap_or_else(|| CompactString::from(path.to_string_lossy()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_derived_from_path() {
        let handle = FileHandle::new("/some/dir/photo.png", 1200);
        assert_eq!(handle.name, "photo.png");
        assert_eq!(handle.size, 1200);
        assert!(handle.regular);
    }

    #[test]
    fn test_is_image() {
        let image = FileHandle::new("/p/a.png", 10).with_media_type("image/png");
        let text = FileHandle::new("/p/b.txt", 10).with_media_type("text/plain");
        let unknown = FileHandle::new("/p/c.bin", 10);

        assert!(image.is_image());
        assert!(!text.is_image());
        assert!(!unknown.is_image());
    }

    #[test]
    fn test_known_length() {
        let regular = FileHandle::new("/p/a.txt", 42);
        assert_eq!(regular.known_length(), Some(42));

        let pipe = FileHandle::new("/p/fifo", 0).non_regular();
        assert_eq!(pipe.known_length(), None);
    }
}
