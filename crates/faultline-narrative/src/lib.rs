//! # faultline-narrative
//!
//! Stages 3 and 4 of the pipeline.
//!
//! Clustering groups signals that share a type, a named location, or fall
//! within one hour of each other into narratives. Centrality then runs a
//! fixed number of damped propagation rounds over the "same type or same
//! narrative" relation and assigns each signal its share of the weight.

pub mod centrality;
pub mod clustering;
pub mod titles;

pub use centrality::CentralityEngine;
pub use clustering::{cluster_signals, group_signals};
