//! Importer for Apollo people-export CSVs.
//!
//! The export carries person, company, and funding columns; technographic
//! flags arrive from the enrichment pipeline when present. Rows without a
//! name or title are skipped, and duplicate people (same e-mail, or same
//! name + company when the e-mail is missing) collapse to the first row.

mod normalizer;
mod parser;

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use crate::scoring::domain::{Company, FundingRound, HiringTier, Lead, LeadId};

use normalizer::dedupe_key;
use parser::ApolloRow;

#[derive(Debug)]
pub enum ApolloImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for ApolloImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApolloImportError::Io(err) => write!(f, "failed to read Apollo export: {}", err),
            ApolloImportError::Csv(err) => write!(f, "invalid Apollo CSV data: {}", err),
        }
    }
}

impl std::error::Error for ApolloImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApolloImportError::Io(err) => Some(err),
            ApolloImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ApolloImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ApolloImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct ApolloLeadImporter;

impl ApolloLeadImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Lead>, ApolloImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Lead>, ApolloImportError> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut leads = Vec::new();

        for row in parser::parse_rows(reader)? {
            if row.name.trim().is_empty() || row.title.trim().is_empty() {
                continue;
            }

            let key = dedupe_key(row.email.as_deref(), &row.name, &row.company);
            if !seen.insert(key) {
                continue;
            }

            leads.push(lead_from_row(row, leads.len() + 1));
        }

        Ok(leads)
    }
}

fn lead_from_row(row: ApolloRow, sequence: usize) -> Lead {
    let company = if row.company.trim().is_empty() {
        None
    } else {
        Some(Company {
            name: row.company.clone(),
            domain: row.company_domain.clone(),
            hq_location: row.company_hq.clone(),
            country: row.company_country.clone(),
            funding_round: row
                .funding_round
                .as_deref()
                .and_then(FundingRound::parse),
            funding_amount_usd: row.funding_amount_parsed(),
            funding_date: row.funding_date_parsed(),
            investors: Vec::new(),
            lead_investor: None,
            uses_invitro_models: row.uses_invitro_models_flag(),
            open_to_nams: row.open_to_nams_flag(),
            hiring_tier: HiringTier::default(),
            tech_roles_count: 0,
        })
    };

    Lead {
        id: LeadId(format!("apollo-{sequence:06}")),
        name: row.name,
        title: row.title,
        location: row.location,
        email: row.email,
        linkedin_url: row.linkedin_url,
        phone: row.phone,
        company,
        publications: Vec::new(),
        years_in_role: 0,
    }
}
