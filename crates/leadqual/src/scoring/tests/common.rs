use chrono::{Duration, NaiveDate};

use crate::scoring::domain::{Company, FundingRound, HiringTier, Lead, LeadId, Publication};

/// Fixed evaluation date so recency windows are deterministic in tests.
pub(super) fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 15).expect("valid date")
}

pub(super) fn days_before(date: NaiveDate, days: i64) -> NaiveDate {
    date - Duration::days(days)
}

pub(super) fn hub_company() -> Company {
    Company {
        name: "BioNova Therapeutics".to_string(),
        domain: "bionovathx.com".to_string(),
        hq_location: "Boston, MA".to_string(),
        country: "USA".to_string(),
        funding_round: Some(FundingRound::SeriesA),
        funding_amount_usd: Some(35_000_000),
        funding_date: Some(days_before(as_of(), 100)),
        investors: vec!["Atlas Venture".to_string(), "Flagship Pioneering".to_string()],
        lead_investor: Some("Atlas Venture".to_string()),
        uses_invitro_models: true,
        open_to_nams: true,
        hiring_tier: HiringTier::B,
        tech_roles_count: 12,
    }
}

pub(super) fn quiet_company() -> Company {
    Company {
        name: "Generic Biotech".to_string(),
        domain: "genericbio.com".to_string(),
        hq_location: "Austin, TX".to_string(),
        country: "USA".to_string(),
        funding_round: None,
        funding_amount_usd: None,
        funding_date: None,
        investors: Vec::new(),
        lead_investor: None,
        uses_invitro_models: false,
        open_to_nams: false,
        hiring_tier: HiringTier::C,
        tech_roles_count: 2,
    }
}

pub(super) fn relevant_publication(days_ago: i64) -> Publication {
    Publication {
        title: "Drug-Induced Liver Injury Assessment Using 3D Hepatic Spheroids".to_string(),
        authors: vec!["Sarah Chen".to_string(), "Hans Müller".to_string()],
        journal: "Toxicological Sciences".to_string(),
        published: days_before(as_of(), days_ago),
        pmid: "PMID34567890".to_string(),
        keywords: vec!["hepatotoxicity".to_string(), "in vitro".to_string()],
        corresponding_author: true,
    }
}

pub(super) fn irrelevant_publication(days_ago: i64) -> Publication {
    Publication {
        title: "Supply Chain Optimization for Drug Manufacturing".to_string(),
        authors: vec!["James White".to_string()],
        journal: "Journal of Operations".to_string(),
        published: days_before(as_of(), days_ago),
        pmid: "PMID31111111".to_string(),
        keywords: vec!["logistics".to_string()],
        corresponding_author: false,
    }
}

pub(super) fn lead(suffix: &str, title: &str) -> Lead {
    Lead {
        id: LeadId(format!("lead-{suffix}")),
        name: "Sarah Chen".to_string(),
        title: title.to_string(),
        location: "Cambridge, MA".to_string(),
        email: Some("sarah.chen@bionovathx.com".to_string()),
        linkedin_url: Some("https://linkedin.com/in/sarah-chen-1234".to_string()),
        phone: None,
        company: None,
        publications: Vec::new(),
        years_in_role: 4,
    }
}

/// All six signals fire for this lead at `as_of()`.
pub(super) fn full_signal_lead() -> Lead {
    let mut lead = lead("full", "Director of Toxicology");
    lead.company = Some(hub_company());
    lead.publications = vec![relevant_publication(60)];
    lead
}

/// No signal fires: junior title, no company, no publications.
pub(super) fn bare_lead() -> Lead {
    lead("bare", "Lab Technician")
}
