//! Span definitions per pipeline stage: sourcing, extraction, clustering,
//! centrality, aggregation.

/// Create a candidate-sourcing span.
#[macro_export]
macro_rules! sourcing_span {
    ($record_count:expr) => {
        tracing::info_span!("faultline.sourcing", record_count = $record_count)
    };
}

/// Create a signal-extraction span.
#[macro_export]
macro_rules! extraction_span {
    ($rule_count:expr, $parallel:expr) => {
        tracing::info_span!("faultline.extraction", rule_count = $rule_count, parallel = $parallel)
    };
}

/// Create a narrative-clustering span.
#[macro_export]
macro_rules! clustering_span {
    ($signal_count:expr, $strategy:expr) => {
        tracing::info_span!("faultline.clustering", signal_count = $signal_count, strategy = ?$strategy)
    };
}

/// Create a centrality span.
#[macro_export]
macro_rules! centrality_span {
    ($signal_count:expr, $iterations:expr) => {
        tracing::info_span!("faultline.centrality", signal_count = $signal_count, iterations = $iterations)
    };
}

/// Create an aggregation span.
#[macro_export]
macro_rules! aggregation_span {
    ($narrative_count:expr) => {
        tracing::info_span!("faultline.aggregation", narrative_count = $narrative_count)
    };
}

