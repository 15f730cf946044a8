// Single source of truth for all default values.

// --- Candidate sourcing ---
pub const DEFAULT_MIN_MARKET_MOVE_PCT: f64 = 0.5;
pub const DEFAULT_MIN_QUAKE_MAGNITUDE: f64 = 3.0;
pub const DEFAULT_PREDICTION_PRICE_FLOOR: f64 = 0.05;
pub const DEFAULT_PREDICTION_PRICE_CEILING: f64 = 0.95;
pub const DEFAULT_PROTEST_KEYWORD: &str = "violence";

// --- Martingale accumulation ---
pub const DEFAULT_MARTINGALE_DECAY: f64 = 0.95;
pub const DEFAULT_SHOCK_THRESHOLD: f64 = 50.0;
pub const DEFAULT_SHOCK_MULTIPLIER: f64 = 1.2;

// --- Bayesian update ---
pub const EVIDENCE_FLOOR: f64 = 0.001;

// --- Clustering ---
pub const DEFAULT_TEMPORAL_WINDOW_SECS: i64 = 3_600; // 1 hour
pub const MAX_TEMPORAL_WINDOW_SECS: i64 = 30 * 24 * 3_600; // 30 days

// --- Centrality ---
pub const DEFAULT_CENTRALITY_ITERATIONS: usize = 5;
pub const DEFAULT_CENTRALITY_DAMPING: f64 = 0.85;

// --- Aggregation ---
pub const ESCALATION_THRESHOLD: f64 = 40.0;
pub const COLLAPSE_THRESHOLD: f64 = 75.0;
pub const BASE_CONFIDENCE: f64 = 0.4;
pub const CONFIDENCE_DIVISOR: f64 = 150.0;
pub const MAX_CONFIDENCE: f64 = 0.95;
pub const IMPACT_FLOOR: f64 = 50.0;
pub const HOTSPOT_MIN_SEVERITY: f64 = 30.0;
pub const ACCUMULATION_STEP: f64 = 0.1;
pub const REPORTED_DECAY_FACTOR: f64 = 0.95;
pub const CORRELATION_LABELS: [&str; 6] = ["Econ", "Seis", "Soc", "Cyber", "Geo", "Mil"];

// --- Extraction ---
pub const DEFAULT_PARALLEL_EXTRACTION: bool = false;

// --- Boundary hardening ---
pub const DEFAULT_SANITIZE_INPUTS: bool = true;

// --- Observability ---
pub const DEFAULT_LOG_FILTER: &str = "faultline=info";
pub const LOG_ENV_VAR: &str = "FAULTLINE_LOG";
