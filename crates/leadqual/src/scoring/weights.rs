use serde::{Deserialize, Serialize};

/// Point weight carried by each of the six signals. Fixed at scorer
/// construction; hosts that want different weights build a new scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub role_fit: u32,
    pub company_intent: u32,
    pub tech_fit: u32,
    pub nams: u32,
    pub location: u32,
    pub publication: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            role_fit: 30,
            company_intent: 20,
            tech_fit: 15,
            nams: 10,
            location: 10,
            publication: 40,
        }
    }
}

impl ScoringWeights {
    /// Denominator for normalization; 125 with the default table.
    pub fn max_raw_score(&self) -> u32 {
        self.role_fit
            + self.company_intent
            + self.tech_fit
            + self.nams
            + self.location
            + self.publication
    }

    /// Apply a partial override on top of the defaults.
    pub fn with_overrides(overrides: &WeightOverrides) -> Self {
        let defaults = Self::default();
        Self {
            role_fit: overrides.role_fit.unwrap_or(defaults.role_fit),
            company_intent: overrides.company_intent.unwrap_or(defaults.company_intent),
            tech_fit: overrides.tech_fit.unwrap_or(defaults.tech_fit),
            nams: overrides.nams.unwrap_or(defaults.nams),
            location: overrides.location.unwrap_or(defaults.location),
            publication: overrides.publication.unwrap_or(defaults.publication),
        }
    }

    pub fn validate(&self) -> Result<(), WeightConfigError> {
        if self.max_raw_score() == 0 {
            return Err(WeightConfigError::AllZero);
        }
        Ok(())
    }
}

/// Partial weight override mapping; any field left unset keeps its default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightOverrides {
    #[serde(default)]
    pub role_fit: Option<u32>,
    #[serde(default)]
    pub company_intent: Option<u32>,
    #[serde(default)]
    pub tech_fit: Option<u32>,
    #[serde(default)]
    pub nams: Option<u32>,
    #[serde(default)]
    pub location: Option<u32>,
    #[serde(default)]
    pub publication: Option<u32>,
}

/// Rejected weight configurations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WeightConfigError {
    #[error("all six signal weights are zero; the normalized score would be undefined")]
    AllZero,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_sums_to_125() {
        assert_eq!(ScoringWeights::default().max_raw_score(), 125);
    }

    #[test]
    fn overrides_keep_unset_defaults() {
        let overrides = WeightOverrides {
            publication: Some(50),
            ..WeightOverrides::default()
        };
        let weights = ScoringWeights::with_overrides(&overrides);
        assert_eq!(weights.publication, 50);
        assert_eq!(weights.role_fit, 30);
        assert_eq!(weights.max_raw_score(), 135);
    }

    #[test]
    fn all_zero_table_is_rejected() {
        let weights = ScoringWeights {
            role_fit: 0,
            company_intent: 0,
            tech_fit: 0,
            nams: 0,
            location: 0,
            publication: 0,
        };
        assert_eq!(weights.validate(), Err(WeightConfigError::AllZero));
    }
}
