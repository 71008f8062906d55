//! Versioned keyword vocabularies backing the derived predicates.
//!
//! The lists are deliberately plain constants rather than logic embedded in
//! the predicates so they can be reviewed and extended without touching the
//! scoring arithmetic.

/// Recency window shared by the funding and publication signals.
pub const RECENCY_WINDOW_DAYS: i64 = 730;

/// Title tokens indicating toxicology / safety / in-vitro domain relevance.
pub const TITLE_KEYWORDS: &[&str] = &[
    "toxicology",
    "toxicologist",
    "safety",
    "preclinical",
    "hepatic",
    "3d",
    "in vitro",
    "invitro",
    "adme",
    "pharmacology",
    "drug safety",
    "nonclinical",
];

/// Seniority tokens; a title must carry one of these in addition to a domain
/// keyword to count as a role fit.
pub const SENIORITY_TOKENS: &[&str] = &[
    "director",
    "head",
    "vp",
    "vice president",
    "chief",
    "principal",
    "senior",
    "lead",
    "manager",
];

/// Terms marking a publication as relevant to 3D in-vitro model work.
pub const PUBLICATION_TERMS: &[&str] = &[
    "dili",
    "drug-induced liver injury",
    "hepatotoxicity",
    "3d cell culture",
    "organ-on-chip",
    "hepatic spheroid",
    "in vitro",
    "investigative toxicology",
    "microphysiological",
    "organoid",
    "liver model",
    "toxicity screening",
];

/// Location tokens for the major biotech hubs.
pub const BIOTECH_HUBS: &[&str] = &[
    "boston",
    "cambridge",
    "ma",
    "massachusetts",
    "san francisco",
    "bay area",
    "south san francisco",
    "ca",
    "basel",
    "switzerland",
    "oxford",
    "cambridge uk",
    "london",
    "uk golden triangle",
    "san diego",
    "new jersey",
    "nj",
];

/// Case-insensitive any-substring match. The needle lists above are already
/// lowercase; only the haystack is folded here.
pub(crate) fn matches_any(haystack: &str, needles: &[&str]) -> bool {
    let folded = haystack.to_lowercase();
    needles.iter().any(|needle| folded.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matcher_is_case_insensitive() {
        assert!(matches_any("Director of Toxicology", TITLE_KEYWORDS));
        assert!(matches_any("DIRECTOR of toxicology", SENIORITY_TOKENS));
        assert!(!matches_any("Accountant", TITLE_KEYWORDS));
    }

    #[test]
    fn hub_tokens_cover_expected_regions() {
        assert!(matches_any("Boston, MA", BIOTECH_HUBS));
        assert!(matches_any("Basel, Switzerland", BIOTECH_HUBS));
        assert!(matches_any("Cambridge, UK", BIOTECH_HUBS));
        assert!(!matches_any("Salt Lake City, UT", BIOTECH_HUBS));
    }

    #[test]
    fn publication_terms_match_inside_titles() {
        assert!(matches_any(
            "Organ-on-Chip Technology for Predictive Toxicology",
            PUBLICATION_TERMS
        ));
        assert!(!matches_any(
            "Marketing Strategies in Pharmaceutical Industry",
            PUBLICATION_TERMS
        ));
    }
}
