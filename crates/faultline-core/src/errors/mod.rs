//! Error handling for Faultline.
//! One error enum per subsystem, `thiserror` only.
//!
//! The analysis path never fails; errors only surface at the boundaries
//! (config loading, rule registration and snapshot decoding).

pub mod config_error;
pub mod registry_error;
pub mod snapshot_error;

pub use config_error::ConfigError;
pub use registry_error::RegistryError;
pub use snapshot_error::SnapshotError;

/// Top-level error aggregating subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum FaultlineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}

pub type FaultlineResult<T> = Result<T, FaultlineError>;
