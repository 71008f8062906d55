use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::vocabulary::{
    matches_any, BIOTECH_HUBS, PUBLICATION_TERMS, RECENCY_WINDOW_DAYS, SENIORITY_TOKENS,
    TITLE_KEYWORDS,
};

/// Identifier wrapper for individual leads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeadId(pub String);

/// Funding stage reported for a company. Free-text rounds from upstream
/// exports are normalized through [`FundingRound::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FundingRound {
    Seed,
    SeriesA,
    SeriesB,
    SeriesC,
    SeriesD,
    Public,
}

impl FundingRound {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "seed" => Some(Self::Seed),
            "series a" => Some(Self::SeriesA),
            "series b" => Some(Self::SeriesB),
            "series c" => Some(Self::SeriesC),
            "series d" => Some(Self::SeriesD),
            "public" | "ipo" => Some(Self::Public),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Seed => "Seed",
            Self::SeriesA => "Series A",
            Self::SeriesB => "Series B",
            Self::SeriesC => "Series C",
            Self::SeriesD => "Series D",
            Self::Public => "Public",
        }
    }

    /// Rounds that count toward the company-intent signal.
    pub const fn is_early_stage(self) -> bool {
        matches!(self, Self::Seed | Self::SeriesA | Self::SeriesB)
    }
}

/// Hiring activity classification supplied by the lead source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HiringTier {
    A,
    B,
    C,
}

impl Default for HiringTier {
    fn default() -> Self {
        Self::C
    }
}

/// Firm employing a lead, with the funding and technographic profile the
/// company-level signals read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub domain: String,
    pub hq_location: String,
    pub country: String,
    #[serde(default)]
    pub funding_round: Option<FundingRound>,
    #[serde(default)]
    pub funding_amount_usd: Option<u64>,
    #[serde(default)]
    pub funding_date: Option<NaiveDate>,
    #[serde(default)]
    pub investors: Vec<String>,
    #[serde(default)]
    pub lead_investor: Option<String>,
    #[serde(default)]
    pub uses_invitro_models: bool,
    #[serde(default)]
    pub open_to_nams: bool,
    #[serde(default)]
    pub hiring_tier: HiringTier,
    #[serde(default)]
    pub tech_roles_count: u32,
}

impl Company {
    /// Early-stage round closed within the recency window. A missing funding
    /// date or a later-stage round never counts.
    pub fn recently_funded(&self, as_of: NaiveDate) -> bool {
        if !self.funding_round.is_some_and(FundingRound::is_early_stage) {
            return false;
        }
        match self.funding_date {
            Some(date) => (as_of - date).num_days() <= RECENCY_WINDOW_DAYS,
            None => false,
        }
    }

    pub fn in_biotech_hub(&self) -> bool {
        matches_any(&self.hq_location, BIOTECH_HUBS)
    }
}

/// One scientific paper attributed to a lead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    pub journal: String,
    pub published: NaiveDate,
    pub pmid: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub corresponding_author: bool,
}

impl Publication {
    /// Title or keywords mention any of the relevance terms.
    pub fn is_relevant(&self) -> bool {
        if matches_any(&self.title, PUBLICATION_TERMS) {
            return true;
        }
        self.keywords
            .iter()
            .any(|keyword| matches_any(keyword, PUBLICATION_TERMS))
    }

    pub fn is_recent(&self, as_of: NaiveDate) -> bool {
        (as_of - self.published).num_days() <= RECENCY_WINDOW_DAYS
    }
}

/// A person to be scored. Company and publications are optional; their
/// absence is a legitimate zero-signal state, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: LeadId,
    pub name: String,
    pub title: String,
    pub location: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<Company>,
    #[serde(default)]
    pub publications: Vec<Publication>,
    #[serde(default)]
    pub years_in_role: u32,
}

impl Lead {
    /// Decision-maker check: the title must carry both a domain keyword and a
    /// seniority token. Either one alone does not count.
    pub fn has_relevant_title(&self) -> bool {
        matches_any(&self.title, TITLE_KEYWORDS) && matches_any(&self.title, SENIORITY_TOKENS)
    }

    pub fn has_recent_relevant_publication(&self, as_of: NaiveDate) -> bool {
        self.publications
            .iter()
            .any(|publication| publication.is_relevant() && publication.is_recent(as_of))
    }
}
