use std::path::Path;

use faultline_core::errors::SnapshotError;
use faultline_core::snapshot::DataSnapshot;

#[test]
fn from_json_file_reads_written_snapshot() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("snapshot.json");
    std::fs::write(
        &path,
        r#"{ "militaryVessels": [{ "id": "v1", "lat": 1.0, "lon": 2.0 }], "alertCounts": { "conflict": 4 } }"#,
    )
    .unwrap();

    let snapshot = DataSnapshot::from_json_file(&path).unwrap();
    assert_eq!(snapshot.military_vessels.len(), 1);
    assert_eq!(snapshot.alert_counts.get("conflict"), Some(&4));
    assert_eq!(snapshot.record_count(), 1);
}

#[test]
fn from_json_file_missing_path_is_io_error() {
    let err = DataSnapshot::from_json_file(Path::new("/nonexistent/snapshot.json")).unwrap_err();
    match err {
        SnapshotError::Io { path, .. } => assert!(path.ends_with("snapshot.json")),
        other => panic!("expected Io, got {other:?}"),
    }
}

#[test]
fn from_json_file_malformed_content_is_decode_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ \"markets\": [").unwrap();
    assert!(matches!(
        DataSnapshot::from_json_file(&path).unwrap_err(),
        SnapshotError::Decode(_)
    ));
}
