//! Layered configuration: defaults < TOML file < FAULTLINE_* env vars.

use std::sync::Mutex;

use faultline_core::config::{ClusteringStrategy, FaultlineConfig};
use faultline_core::errors::ConfigError;

/// Serializes tests that touch process env vars.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

const ENV_KEYS: [&str; 8] = [
    "FAULTLINE_CENTRALITY_ITERATIONS",
    "FAULTLINE_CENTRALITY_DAMPING",
    "FAULTLINE_MARTINGALE_DECAY",
    "FAULTLINE_CLUSTERING_WINDOW_SECS",
    "FAULTLINE_CLUSTERING_STRATEGY",
    "FAULTLINE_CORRELATION_SEED",
    "FAULTLINE_EXTRACTION_PARALLEL",
    "FAULTLINE_SANITIZE_INPUTS",
];

fn clear_faultline_env_vars() {
    for key in ENV_KEYS {
        std::env::remove_var(key);
    }
}

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

#[test]
fn load_without_file_or_env_is_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_faultline_env_vars();

    let config = FaultlineConfig::load(None).unwrap();
    assert_eq!(config.centrality.iterations, 5);
    assert_eq!(config.centrality.damping, 0.85);
    assert_eq!(config.clustering.strategy, ClusteringStrategy::Greedy);
    assert_eq!(config.correlation.seed, None);
    assert!(config.sanitize_inputs);
}

#[test]
fn env_vars_override_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_faultline_env_vars();

    std::env::set_var("FAULTLINE_CENTRALITY_ITERATIONS", "8");
    std::env::set_var("FAULTLINE_CENTRALITY_DAMPING", "0.5");
    std::env::set_var("FAULTLINE_MARTINGALE_DECAY", "0.9");
    std::env::set_var("FAULTLINE_CLUSTERING_WINDOW_SECS", "7200");
    std::env::set_var("FAULTLINE_CLUSTERING_STRATEGY", "union-find");
    std::env::set_var("FAULTLINE_CORRELATION_SEED", "99");
    std::env::set_var("FAULTLINE_EXTRACTION_PARALLEL", "true");
    std::env::set_var("FAULTLINE_SANITIZE_INPUTS", "false");

    let config = FaultlineConfig::load(None).unwrap();
    clear_faultline_env_vars();

    assert_eq!(config.centrality.iterations, 8);
    assert_eq!(config.centrality.damping, 0.5);
    assert_eq!(config.martingale.decay, 0.9);
    assert_eq!(config.clustering.temporal_window_secs, 7200);
    assert_eq!(config.clustering.strategy, ClusteringStrategy::UnionFind);
    assert_eq!(config.correlation.seed, Some(99));
    assert!(config.extraction.parallel);
    assert!(!config.sanitize_inputs);
}

#[test]
fn env_overrides_toml_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_faultline_env_vars();

    let dir = tempdir();
    let path = dir.path().join("faultline.toml");
    std::fs::write(
        &path,
        r#"
[centrality]
iterations = 3
damping = 0.7

[correlation]
seed = 1
"#,
    )
    .unwrap();

    std::env::set_var("FAULTLINE_CORRELATION_SEED", "2");
    let config = FaultlineConfig::load(Some(&path)).unwrap();
    clear_faultline_env_vars();

    // File beats defaults.
    assert_eq!(config.centrality.iterations, 3);
    assert_eq!(config.centrality.damping, 0.7);
    // Env beats file.
    assert_eq!(config.correlation.seed, Some(2));
}

#[test]
fn unparseable_env_values_are_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_faultline_env_vars();

    std::env::set_var("FAULTLINE_CENTRALITY_ITERATIONS", "many");
    std::env::set_var("FAULTLINE_CLUSTERING_STRATEGY", "k-means");
    std::env::set_var("FAULTLINE_EXTRACTION_PARALLEL", "yes please");

    let config = FaultlineConfig::load(None).unwrap();
    clear_faultline_env_vars();

    assert_eq!(config.centrality.iterations, 5);
    assert_eq!(config.clustering.strategy, ClusteringStrategy::Greedy);
    assert!(!config.extraction.parallel);
}

#[test]
fn out_of_range_env_value_fails_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_faultline_env_vars();

    std::env::set_var("FAULTLINE_CENTRALITY_DAMPING", "3.0");
    let err = FaultlineConfig::load(None).unwrap_err();
    clear_faultline_env_vars();

    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "centrality.damping"));
}

#[test]
fn invalid_toml_file_is_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_faultline_env_vars();

    let dir = tempdir();
    let path = dir.path().join("faultline.toml");
    std::fs::write(&path, "this is not valid toml {{{{").unwrap();

    let err = FaultlineConfig::load(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}
