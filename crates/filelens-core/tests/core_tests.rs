use std::time::SystemTime;

use filelens_core::{ByteRange, FileHandle, ReadError, ReadSession, ReadStatus};

#[test]
fn test_handle_construction() {
    let handle = FileHandle::new("/data/photo.png", 1200)
        .with_media_type("image/png")
        .with_modified(SystemTime::now());

    assert_eq!(handle.name, "photo.png");
    assert_eq!(handle.size, 1200);
    assert!(handle.is_image());
    assert!(handle.modified.is_some());
    assert_eq!(handle.known_length(), Some(1200));
}

#[test]
fn test_range_sanitization_from_button_metadata() {
    // Offsets arrive as strings attached to UI buttons; anything that
    // fails to parse falls back to the whole file.
    let size = 1000;

    let explicit = ByteRange::parse("10", "19", size);
    assert_eq!(explicit, ByteRange { start: 10, stop: 19 });

    let whole = ByteRange::parse("", "", size);
    assert_eq!(whole, ByteRange { start: 0, stop: 999 });

    let mixed = ByteRange::parse("5", "not-a-number", size);
    assert_eq!(mixed, ByteRange { start: 5, stop: 999 });
}

#[test]
fn test_range_summary_text() {
    let range = ByteRange::parse("10", "19", 1000);
    assert_eq!(range.summary(1000), "Read bytes: 11 - 20 of 1000 byte file.");

    let first_bytes = ByteRange::parse("0", "4", 1000);
    assert_eq!(first_bytes.summary(1000), "Read bytes: 1 - 5 of 1000 byte file.");
}

#[test]
fn test_session_lifecycle() {
    let mut session = ReadSession::new();
    assert_eq!(session.status(), ReadStatus::Idle);

    assert!(session.start(Some(200)));
    assert_eq!(session.status(), ReadStatus::Loading);

    session.record(50);
    assert_eq!(session.display_percent(), Some(25));

    assert!(session.complete());
    assert_eq!(session.status(), ReadStatus::Done);
    assert_eq!(session.progress().bytes_loaded, 200);
}

#[test]
fn test_session_percent_never_renders_100_while_loading() {
    let mut session = ReadSession::new();
    session.start(Some(10));

    let mut rendered = Vec::new();
    for loaded in [2, 5, 9, 10] {
        session.record(loaded);
        if let Some(pct) = session.display_percent() {
            rendered.push(pct);
        }
    }
    session.complete();
    rendered.push(session.display_percent().unwrap());

    assert_eq!(rendered, vec![20, 50, 90, 100]);
    // Monotonically non-decreasing
    assert!(rendered.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_session_unknown_total_renders_nothing_until_done() {
    let mut session = ReadSession::new();
    session.start(None);
    session.record(4096);
    assert_eq!(session.display_percent(), None);
    session.complete();
    // The final 100 is set explicitly on completion
    assert_eq!(session.display_percent(), Some(100));
}

#[test]
fn test_error_taxonomy_is_closed() {
    let kinds = [
        std::io::ErrorKind::NotFound,
        std::io::ErrorKind::PermissionDenied,
        std::io::ErrorKind::BrokenPipe,
        std::io::ErrorKind::UnexpectedEof,
    ];

    for kind in kinds {
        let err = ReadError::io("/p", std::io::Error::new(kind, "boom"));
        // Every host failure lands in exactly one variant
        assert!(matches!(
            err,
            ReadError::NotFound { .. } | ReadError::NotReadable { .. } | ReadError::Unknown { .. }
        ));
    }
}
