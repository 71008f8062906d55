use serde::Serialize;

use super::priority::PriorityBand;
use super::result::{LeadScoreRow, ScoringResult};

/// Per-band slice of a ranked batch.
#[derive(Debug, Clone, Serialize)]
pub struct BandCountEntry {
    pub band: PriorityBand,
    pub band_label: &'static str,
    pub count: usize,
}

/// Aggregate view over one ranked batch, for dashboards and CLI rendering.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReportSummary {
    pub lead_count: usize,
    pub mean_total_score: f64,
    pub band_counts: Vec<BandCountEntry>,
    pub top_leads: Vec<LeadScoreRow>,
}

#[derive(Debug, Default)]
pub struct ScoreReport {
    band_counts: [usize; 5],
    lead_count: usize,
    score_sum: f64,
    top_leads: Vec<LeadScoreRow>,
}

impl ScoreReport {
    /// Build the report over an already-ranked batch, keeping the first
    /// `top` rows (the batch is sorted best-first).
    pub fn from_results(results: &[ScoringResult], top: usize) -> Self {
        let mut band_counts = [0usize; 5];
        let mut score_sum = 0.0;

        for result in results {
            let band = result.priority();
            let slot = PriorityBand::ordered()
                .into_iter()
                .position(|candidate| candidate == band)
                .unwrap_or(4);
            band_counts[slot] += 1;
            score_sum += result.total_score;
        }

        let top_leads = results
            .iter()
            .take(top)
            .map(ScoringResult::to_row)
            .collect();

        Self {
            band_counts,
            lead_count: results.len(),
            score_sum,
            top_leads,
        }
    }

    pub fn summary(&self) -> ScoreReportSummary {
        let mean_total_score = if self.lead_count == 0 {
            0.0
        } else {
            self.score_sum / self.lead_count as f64
        };

        let band_counts = PriorityBand::ordered()
            .into_iter()
            .zip(self.band_counts)
            .map(|(band, count)| BandCountEntry {
                band,
                band_label: band.label(),
                count,
            })
            .collect();

        ScoreReportSummary {
            lead_count: self.lead_count,
            mean_total_score,
            band_counts,
            top_leads: self.top_leads.clone(),
        }
    }
}
