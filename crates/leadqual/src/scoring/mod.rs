//! Propensity scoring and ranking for biotech/pharma sales leads.
//!
//! Six independent binary signals per lead (role fit, recent funding,
//! technographic fit, NAMs openness, biotech-hub location, recent relevant
//! publication), each contributing its configured weight or nothing. Batch
//! ranking is a stable descending sort with dense 1-based ranks.

pub mod domain;
pub mod engine;
pub mod priority;
pub mod report;
pub mod result;
pub mod router;
pub mod vocabulary;
pub mod weights;

#[cfg(test)]
mod tests;

pub use domain::{Company, FundingRound, HiringTier, Lead, LeadId, Publication};
pub use engine::LeadScorer;
pub use priority::PriorityBand;
pub use report::{BandCountEntry, ScoreReport, ScoreReportSummary};
pub use result::{ComponentScores, LeadScoreRow, ScoringResult};
pub use router::{scoring_router, ScoreBatchRequest, ScoreBatchResponse};
pub use weights::{ScoringWeights, WeightConfigError, WeightOverrides};
