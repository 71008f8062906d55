//! End-to-end import of an Apollo people export into a ranked batch.

use std::io::Cursor;

use chrono::NaiveDate;
use leadqual::scoring::LeadScorer;
use leadqual::sources::{ApolloImportError, ApolloLeadImporter};

const HEADER: &str = "Name,Title,Email,Person Linkedin Url,Phone,Location,Company,Company Domain,Company HQ,Company Country,Last Funding Round,Last Funding Date,Last Funding Amount,Uses In Vitro Models,Open To NAMs\n";

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 15).expect("valid date")
}

#[test]
fn export_rows_become_ranked_leads() {
    let csv = format!(
        "{HEADER}\
Sarah Chen,Director of Toxicology,sarah.chen@bionovathx.com,https://linkedin.com/in/sarah-chen,+1-617-555-0100,\"Cambridge, MA\",BioNova Therapeutics,bionovathx.com,\"Boston, MA\",USA,Series A,2025-12-01,\"$35,000,000\",true,yes\n\
Carlos Garcia,Research Associate,carlos.garcia@genericbio.com,,,\"Austin, TX\",Generic Biotech,genericbio.com,\"Austin, TX\",USA,,,,false,no\n"
    );

    let leads = ApolloLeadImporter::from_reader(Cursor::new(csv)).expect("import succeeds");
    assert_eq!(leads.len(), 2);

    let scorer = LeadScorer::default();
    let results = scorer.score_and_rank(leads, as_of());

    let top = &results[0];
    assert_eq!(top.lead.name, "Sarah Chen");
    assert_eq!(top.rank, 1);
    // Role + Funding + Tech + NAMs + Location; no publications in the export.
    assert_eq!(top.raw_score, 85);
    assert_eq!(top.breakdown(), "Role:+30, Funding:+20, Tech:+15, NAMs:+10, Location:+10");

    let bottom = &results[1];
    assert_eq!(bottom.lead.name, "Carlos Garcia");
    assert_eq!(bottom.raw_score, 0);
    assert_eq!(bottom.rank, 2);
}

#[test]
fn funding_outside_the_window_does_not_fire_company_intent() {
    let csv = format!(
        "{HEADER}\
Jane Roe,Head of Preclinical Safety,jane.roe@oldfund.com,,,\"Boston, MA\",OldFund Bio,oldfund.com,\"Boston, MA\",USA,Series B,2020-01-15,\"$20,000,000\",false,no\n"
    );

    let leads = ApolloLeadImporter::from_reader(Cursor::new(csv)).expect("import succeeds");
    let scorer = LeadScorer::default();
    let results = scorer.score_and_rank(leads, as_of());

    assert_eq!(results[0].components.company_intent, 0);
    // Role fit and hub location still hold.
    assert_eq!(results[0].raw_score, 40);
}

#[test]
fn malformed_csv_surfaces_a_csv_error() {
    let csv = "Name,Title\n\"unterminated,Director of Toxicology\n";
    let error =
        ApolloLeadImporter::from_reader(Cursor::new(csv)).expect_err("expected csv failure");
    match error {
        ApolloImportError::Csv(_) => {}
        other => panic!("expected csv error, got {other:?}"),
    }
}

#[test]
fn missing_file_surfaces_an_io_error() {
    let error = ApolloLeadImporter::from_path("./no-such-export.csv")
        .expect_err("expected io error");
    match error {
        ApolloImportError::Io(_) => {}
        other => panic!("expected io error, got {other:?}"),
    }
}
