use serde::{Deserialize, Serialize};

/// Priority band for a normalized score. The five bands partition [0, 100]
/// with half-open intervals, inclusive on the lower bound, so every score
/// lands in exactly one band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityBand {
    VeryHigh,
    High,
    Medium,
    Low,
    VeryLow,
}

impl PriorityBand {
    pub fn for_score(total_score: f64) -> Self {
        if total_score >= 80.0 {
            Self::VeryHigh
        } else if total_score >= 60.0 {
            Self::High
        } else if total_score >= 40.0 {
            Self::Medium
        } else if total_score >= 20.0 {
            Self::Low
        } else {
            Self::VeryLow
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryHigh => "Very High Priority",
            Self::High => "High Priority",
            Self::Medium => "Medium Priority",
            Self::Low => "Low Priority",
            Self::VeryLow => "Very Low Priority",
        }
    }

    /// Bands from best to worst, for ordered reporting.
    pub const fn ordered() -> [Self; 5] {
        [
            Self::VeryHigh,
            Self::High,
            Self::Medium,
            Self::Low,
            Self::VeryLow,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_inclusive_on_the_lower_bound() {
        assert_eq!(PriorityBand::for_score(100.0), PriorityBand::VeryHigh);
        assert_eq!(PriorityBand::for_score(80.0), PriorityBand::VeryHigh);
        assert_eq!(PriorityBand::for_score(79.9), PriorityBand::High);
        assert_eq!(PriorityBand::for_score(60.0), PriorityBand::High);
        assert_eq!(PriorityBand::for_score(40.0), PriorityBand::Medium);
        assert_eq!(PriorityBand::for_score(20.0), PriorityBand::Low);
        assert_eq!(PriorityBand::for_score(19.999), PriorityBand::VeryLow);
        assert_eq!(PriorityBand::for_score(0.0), PriorityBand::VeryLow);
    }

    #[test]
    fn every_score_maps_to_exactly_one_band() {
        let mut score = 0.0;
        while score <= 100.0 {
            let band = PriorityBand::for_score(score);
            let matches = PriorityBand::ordered()
                .into_iter()
                .filter(|candidate| *candidate == band)
                .count();
            assert_eq!(matches, 1, "score {score} mapped ambiguously");
            score += 0.25;
        }
    }
}
