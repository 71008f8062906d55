//! Deterministic propensity scoring and ranking for biotech/pharma sales
//! leads.
//!
//! The core is the [`scoring`] module: a pure, explainable six-signal scorer
//! and a batch ranker. [`sources`] holds the collaborators that produce lead
//! records (Apollo CSV exports, the demo catalog, publication lookup) and
//! [`export`] writes ranked batches back out as CSV.

pub mod config;
pub mod error;
pub mod export;
pub mod scoring;
pub mod sources;
pub mod telemetry;
