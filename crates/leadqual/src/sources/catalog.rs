//! Built-in demo catalog: a fixed roster of biotech companies and lead
//! profiles whose recency-sensitive fields are anchored to the caller's
//! evaluation date, so demos and tests produce the same ranking every run.

use chrono::{Duration, NaiveDate};

use crate::scoring::domain::{Company, FundingRound, HiringTier, Lead, LeadId, Publication};

fn days_before(as_of: NaiveDate, days: i64) -> NaiveDate {
    as_of - Duration::days(days)
}

fn company(
    name: &str,
    domain: &str,
    hq_location: &str,
    country: &str,
    funding: Option<(FundingRound, u64, NaiveDate)>,
    uses_invitro_models: bool,
    open_to_nams: bool,
    hiring_tier: HiringTier,
    tech_roles_count: u32,
) -> Company {
    let (funding_round, funding_amount_usd, funding_date) = match funding {
        Some((round, amount, date)) => (Some(round), Some(amount), Some(date)),
        None => (None, None, None),
    };

    Company {
        name: name.to_string(),
        domain: domain.to_string(),
        hq_location: hq_location.to_string(),
        country: country.to_string(),
        funding_round,
        funding_amount_usd,
        funding_date,
        investors: Vec::new(),
        lead_investor: None,
        uses_invitro_models,
        open_to_nams,
        hiring_tier,
        tech_roles_count,
    }
}

/// Demo companies, spanning recently funded hub startups, public pharma, and
/// a deliberately signal-free control.
pub fn sample_companies(as_of: NaiveDate) -> Vec<Company> {
    vec![
        company(
            "BioNova Therapeutics",
            "bionovathx.com",
            "Boston, MA",
            "USA",
            Some((FundingRound::SeriesA, 35_000_000, days_before(as_of, 120))),
            true,
            true,
            HiringTier::B,
            12,
        ),
        company(
            "HepatoCell Inc",
            "hepatocell.com",
            "San Diego, CA",
            "USA",
            Some((FundingRound::SeriesB, 45_000_000, days_before(as_of, 300))),
            true,
            true,
            HiringTier::A,
            18,
        ),
        company(
            "ToxSafe Labs",
            "toxsafelabs.com",
            "Cambridge, UK",
            "UK",
            Some((FundingRound::Seed, 5_000_000, days_before(as_of, 90))),
            true,
            true,
            HiringTier::C,
            4,
        ),
        company(
            "Roche",
            "roche.com",
            "Basel, Switzerland",
            "Switzerland",
            None,
            true,
            true,
            HiringTier::A,
            150,
        ),
        company(
            "Recursion Pharmaceuticals",
            "recursion.com",
            "Salt Lake City, UT",
            "USA",
            Some((FundingRound::SeriesD, 239_000_000, days_before(as_of, 400))),
            true,
            true,
            HiringTier::A,
            30,
        ),
        company(
            "Generic Biotech",
            "genericbio.com",
            "Austin, TX",
            "USA",
            None,
            false,
            false,
            HiringTier::C,
            2,
        ),
    ]
}

fn publication(title: &str, journal: &str, pmid: &str, published: NaiveDate) -> Publication {
    Publication {
        title: title.to_string(),
        authors: Vec::new(),
        journal: journal.to_string(),
        published,
        pmid: pmid.to_string(),
        keywords: Vec::new(),
        corresponding_author: false,
    }
}

struct LeadSeed {
    name: &'static str,
    title: &'static str,
    location: &'static str,
    company_index: Option<usize>,
    publication: Option<(&'static str, &'static str, i64)>,
    years_in_role: u32,
}

const LEAD_SEEDS: &[LeadSeed] = &[
    LeadSeed {
        name: "Sarah Chen",
        title: "Director of Toxicology",
        location: "Cambridge, MA",
        company_index: Some(0),
        publication: Some((
            "Drug-Induced Liver Injury Assessment Using 3D Hepatic Spheroids",
            "Toxicological Sciences",
            60,
        )),
        years_in_role: 5,
    },
    LeadSeed {
        name: "Hans Müller",
        title: "Head of In Vitro Sciences",
        location: "Basel, Switzerland",
        company_index: Some(3),
        publication: Some((
            "Organ-on-Chip Technology for Predictive Toxicology",
            "Lab on a Chip",
            200,
        )),
        years_in_role: 9,
    },
    LeadSeed {
        name: "Priya Patel",
        title: "VP of Preclinical Development",
        location: "San Diego, CA",
        company_index: Some(1),
        publication: None,
        years_in_role: 7,
    },
    LeadSeed {
        name: "Emily Johnson",
        title: "Principal Scientist, Toxicology",
        location: "Oxford, UK",
        company_index: Some(2),
        publication: Some((
            "Hepatic Organoids for Drug Safety Evaluation",
            "ALTEX",
            400,
        )),
        years_in_role: 3,
    },
    LeadSeed {
        name: "Wei Wang",
        title: "Director of ADME-Tox",
        location: "Salt Lake City, UT",
        company_index: Some(4),
        publication: None,
        years_in_role: 6,
    },
    LeadSeed {
        name: "Carlos Garcia",
        title: "Research Associate",
        location: "Austin, TX",
        company_index: Some(5),
        publication: None,
        years_in_role: 2,
    },
    LeadSeed {
        name: "Yuki Tanaka",
        title: "Postdoctoral Fellow",
        location: "Boston, MA",
        company_index: Some(0),
        publication: Some((
            "Microphysiological Systems for ADME-Tox Assessment",
            "Toxicology In Vitro",
            150,
        )),
        years_in_role: 1,
    },
    LeadSeed {
        name: "Maria Schmidt",
        title: "Head of New Approach Methodologies",
        location: "Cambridge, UK",
        company_index: Some(2),
        publication: None,
        years_in_role: 4,
    },
    LeadSeed {
        name: "David Kim",
        title: "Chief Scientific Officer",
        location: "Remote - Colorado",
        company_index: None,
        publication: Some((
            "3D Liver Models for DILI Risk Assessment",
            "Archives of Toxicology",
            30,
        )),
        years_in_role: 11,
    },
    LeadSeed {
        name: "Anna Kumar",
        title: "Lab Technician",
        location: "Chicago, IL",
        company_index: None,
        publication: None,
        years_in_role: 2,
    },
];

/// Deterministic demo batch covering strong, partial, and zero-signal
/// profiles. The same `as_of` always produces the same leads.
pub fn sample_leads(as_of: NaiveDate) -> Vec<Lead> {
    let companies = sample_companies(as_of);

    LEAD_SEEDS
        .iter()
        .enumerate()
        .map(|(index, seed)| {
            let company = seed.company_index.map(|i| companies[i].clone());
            let publications = seed
                .publication
                .map(|(title, journal, days_ago)| {
                    vec![publication(
                        title,
                        journal,
                        &format!("PMID3{:07}", index + 1),
                        days_before(as_of, days_ago),
                    )]
                })
                .unwrap_or_default();

            let slug = seed.name.to_lowercase().replace(' ', "-");
            let email = company.as_ref().map(|company| {
                format!(
                    "{}@{}",
                    seed.name.to_lowercase().replace(' ', "."),
                    company.domain
                )
            });

            Lead {
                id: LeadId(format!("demo-{:03}", index + 1)),
                name: seed.name.to_string(),
                title: seed.title.to_string(),
                location: seed.location.to_string(),
                email,
                linkedin_url: Some(format!("https://linkedin.com/in/{slug}")),
                phone: None,
                company,
                publications,
                years_in_role: seed.years_in_role,
            }
        })
        .collect()
}
