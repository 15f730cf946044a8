/// Snapshot decoding errors.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed snapshot JSON: {0}")]
    Decode(#[from] serde_json::Error),
}
