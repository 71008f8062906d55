use serde::{Deserialize, Serialize};

use super::domain::Lead;
use super::priority::PriorityBand;

/// Itemized contribution per signal. Each value is either zero or exactly the
/// configured weight; there is no partial credit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub role_fit: u32,
    pub company_intent: u32,
    pub tech_fit: u32,
    pub nams: u32,
    pub location: u32,
    pub publication: u32,
}

impl ComponentScores {
    pub fn raw_total(&self) -> u32 {
        self.role_fit
            + self.company_intent
            + self.tech_fit
            + self.nams
            + self.location
            + self.publication
    }
}

/// Scored lead. Built once per lead per scoring run; `rank` stays 0 until the
/// batch ranking pass assigns the 1-based output position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    pub lead: Lead,
    pub total_score: f64,
    pub raw_score: u32,
    pub components: ComponentScores,
    pub rank: u32,
}

impl ScoringResult {
    pub fn priority(&self) -> PriorityBand {
        PriorityBand::for_score(self.total_score)
    }

    /// Human-readable summary of the non-zero components in the fixed order
    /// Role, Funding, Tech, NAMs, Location, Pub.
    pub fn breakdown(&self) -> String {
        let labeled = [
            ("Role", self.components.role_fit),
            ("Funding", self.components.company_intent),
            ("Tech", self.components.tech_fit),
            ("NAMs", self.components.nams),
            ("Location", self.components.location),
            ("Pub", self.components.publication),
        ];

        let parts: Vec<String> = labeled
            .iter()
            .filter(|(_, points)| *points > 0)
            .map(|(label, points)| format!("{label}:+{points}"))
            .collect();

        if parts.is_empty() {
            "No signals".to_string()
        } else {
            parts.join(", ")
        }
    }

    pub fn to_row(&self) -> LeadScoreRow {
        let (company, hq_location) = match &self.lead.company {
            Some(company) => (company.name.clone(), company.hq_location.clone()),
            None => (String::new(), String::new()),
        };

        LeadScoreRow {
            rank: self.rank,
            total_score: (self.total_score * 10.0).round() / 10.0,
            name: self.lead.name.clone(),
            title: self.lead.title.clone(),
            company,
            location: self.lead.location.clone(),
            hq_location,
            email: self.lead.email.clone().unwrap_or_default(),
            linkedin_url: self.lead.linkedin_url.clone().unwrap_or_default(),
            phone: self.lead.phone.clone().unwrap_or_default(),
            breakdown: self.breakdown(),
            raw_score: self.raw_score,
            role_fit_score: self.components.role_fit,
            company_intent_score: self.components.company_intent,
            tech_fit_score: self.components.tech_fit,
            nams_score: self.components.nams,
            location_score: self.components.location,
            publication_score: self.components.publication,
        }
    }
}

/// Flat, serializable view of one ranked lead for tabular export and API
/// responses. Optional contact fields collapse to empty strings so CSV rows
/// stay rectangular.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadScoreRow {
    pub rank: u32,
    pub total_score: f64,
    pub name: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub hq_location: String,
    pub email: String,
    pub linkedin_url: String,
    pub phone: String,
    pub breakdown: String,
    pub raw_score: u32,
    pub role_fit_score: u32,
    pub company_intent_score: u32,
    pub tech_fit_score: u32,
    pub nams_score: u32,
    pub location_score: u32,
    pub publication_score: u32,
}
