//! Configuration system for Faultline.
//! TOML-based, 3-layer resolution: env > file > compiled defaults.

pub mod centrality_config;
pub mod clustering_config;
pub mod correlation_config;
pub mod defaults;
pub mod extraction_config;
pub mod faultline_config;
pub mod martingale_config;
pub mod sourcing_config;

pub use centrality_config::CentralityConfig;
pub use clustering_config::{ClusteringConfig, ClusteringStrategy};
pub use correlation_config::CorrelationConfig;
pub use extraction_config::ExtractionConfig;
pub use faultline_config::FaultlineConfig;
pub use martingale_config::MartingaleConfig;
pub use sourcing_config::SourcingConfig;
