use super::common::*;
use crate::scoring::engine::LeadScorer;
use crate::scoring::priority::PriorityBand;
use crate::scoring::weights::{ScoringWeights, WeightOverrides};

#[test]
fn breakdown_lists_non_zero_components_in_fixed_order() {
    let scorer = LeadScorer::default();

    let full = scorer.evaluate(full_signal_lead(), as_of());
    assert_eq!(
        full.breakdown(),
        "Role:+30, Funding:+20, Tech:+15, NAMs:+10, Location:+10, Pub:+40"
    );

    let mut partial = lead("partial", "Director of Toxicology");
    partial.publications = vec![relevant_publication(60)];
    let partial = scorer.evaluate(partial, as_of());
    assert_eq!(partial.breakdown(), "Role:+30, Pub:+40");

    let none = scorer.evaluate(bare_lead(), as_of());
    assert_eq!(none.breakdown(), "No signals");
}

#[test]
fn row_carries_contact_and_company_fields() {
    let scorer = LeadScorer::default();
    let row = scorer.evaluate(full_signal_lead(), as_of()).to_row();

    assert_eq!(row.name, "Sarah Chen");
    assert_eq!(row.title, "Director of Toxicology");
    assert_eq!(row.company, "BioNova Therapeutics");
    assert_eq!(row.hq_location, "Boston, MA");
    assert_eq!(row.email, "sarah.chen@bionovathx.com");
    assert_eq!(row.phone, "");
    assert_eq!(row.total_score, 100.0);
    assert_eq!(row.raw_score, 125);
    assert_eq!(row.publication_score, 40);
}

#[test]
fn row_collapses_missing_company_to_empty_strings() {
    let scorer = LeadScorer::default();
    let row = scorer.evaluate(bare_lead(), as_of()).to_row();

    assert_eq!(row.company, "");
    assert_eq!(row.hq_location, "");
    assert_eq!(row.breakdown, "No signals");
}

#[test]
fn row_rounds_total_score_to_one_decimal() {
    let overrides = WeightOverrides {
        publication: Some(50),
        ..WeightOverrides::default()
    };
    let scorer =
        LeadScorer::new(ScoringWeights::with_overrides(&overrides)).expect("non-zero table");
    let mut published = bare_lead();
    published.publications = vec![relevant_publication(60)];
    let result = scorer.evaluate(published, as_of());

    // 50 / 135 * 100 = 37.037...
    assert!((result.total_score - 37.037).abs() < 0.001);
    assert_eq!(result.to_row().total_score, 37.0);
}

#[test]
fn priority_follows_the_normalized_score() {
    let scorer = LeadScorer::default();
    let full = scorer.evaluate(full_signal_lead(), as_of());
    assert_eq!(full.priority(), PriorityBand::VeryHigh);

    let none = scorer.evaluate(bare_lead(), as_of());
    assert_eq!(none.priority(), PriorityBand::VeryLow);
}
