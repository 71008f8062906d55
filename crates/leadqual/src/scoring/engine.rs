use std::cmp::Ordering;

use chrono::NaiveDate;

use super::domain::Lead;
use super::result::{ComponentScores, ScoringResult};
use super::weights::{ScoringWeights, WeightConfigError};

/// Stateless propensity scorer. The weight table is validated and frozen at
/// construction; every lead scored by one instance sees the same table.
#[derive(Debug, Clone)]
pub struct LeadScorer {
    weights: ScoringWeights,
}

impl Default for LeadScorer {
    fn default() -> Self {
        // The default table is non-zero by construction.
        Self {
            weights: ScoringWeights::default(),
        }
    }
}

impl LeadScorer {
    pub fn new(weights: ScoringWeights) -> Result<Self, WeightConfigError> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn max_raw_score(&self) -> u32 {
        self.weights.max_raw_score()
    }

    /// Score one lead as of the given evaluation date. Each signal is a
    /// binary gate: it contributes its full weight or nothing. A lead with no
    /// company and no publications simply scores zero on the dependent
    /// signals.
    pub fn evaluate(&self, lead: Lead, as_of: NaiveDate) -> ScoringResult {
        let company = lead.company.as_ref();

        let components = ComponentScores {
            role_fit: gate(lead.has_relevant_title(), self.weights.role_fit),
            company_intent: gate(
                company.is_some_and(|company| company.recently_funded(as_of)),
                self.weights.company_intent,
            ),
            tech_fit: gate(
                company.is_some_and(|company| company.uses_invitro_models),
                self.weights.tech_fit,
            ),
            nams: gate(
                company.is_some_and(|company| company.open_to_nams),
                self.weights.nams,
            ),
            location: gate(
                company.is_some_and(|company| company.in_biotech_hub()),
                self.weights.location,
            ),
            publication: gate(
                lead.has_recent_relevant_publication(as_of),
                self.weights.publication,
            ),
        };

        let raw_score = components.raw_total();
        let total_score = f64::from(raw_score) / f64::from(self.max_raw_score()) * 100.0;

        ScoringResult {
            lead,
            total_score,
            raw_score,
            components,
            rank: 0,
        }
    }

    /// Score a batch and establish the total order: descending total score,
    /// ties keeping their input order, dense 1-based ranks by output
    /// position. Ranks are relative to this batch only; ranking a filtered
    /// subset re-derives them from scratch.
    pub fn score_and_rank(&self, leads: Vec<Lead>, as_of: NaiveDate) -> Vec<ScoringResult> {
        let mut results: Vec<ScoringResult> = leads
            .into_iter()
            .map(|lead| self.evaluate(lead, as_of))
            .collect();

        // Vec::sort_by is stable: ties keep their input order. total_score
        // is finite (max_raw_score > 0), so the comparison never sees NaN.
        results.sort_by(|a, b| {
            b.total_score
                .partial_cmp(&a.total_score)
                .unwrap_or(Ordering::Equal)
        });

        for (position, result) in results.iter_mut().enumerate() {
            result.rank = position as u32 + 1;
        }

        results
    }
}

fn gate(fired: bool, weight: u32) -> u32 {
    if fired {
        weight
    } else {
        0
    }
}
