//! CSV export of ranked scoring results for spreadsheet hand-off.

use std::io::Write;
use std::path::Path;

use crate::scoring::result::ScoringResult;

/// Write one row per result, in batch order, with the flat `LeadScoreRow`
/// columns as the header.
pub fn write_csv<W: Write>(writer: W, results: &[ScoringResult]) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for result in results {
        csv_writer.serialize(result.to_row())?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_csv_to_path<P: AsRef<Path>>(
    path: P,
    results: &[ScoringResult],
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_path(path)?;
    for result in results {
        csv_writer.serialize(result.to_row())?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::engine::LeadScorer;
    use crate::sources::catalog::sample_leads;
    use chrono::NaiveDate;

    #[test]
    fn export_emits_header_and_one_row_per_result() {
        let as_of = NaiveDate::from_ymd_opt(2026, 3, 15).expect("valid date");
        let scorer = LeadScorer::default();
        let results = scorer.score_and_rank(sample_leads(as_of), as_of);

        let mut buffer = Vec::new();
        write_csv(&mut buffer, &results).expect("export succeeds");

        let text = String::from_utf8(buffer).expect("utf-8 output");
        let mut lines = text.lines();
        let header = lines.next().expect("header row");
        assert!(header.starts_with("rank,total_score,name,title,company"));
        assert_eq!(lines.count(), results.len());
    }

    #[test]
    fn export_rows_follow_batch_order() {
        let as_of = NaiveDate::from_ymd_opt(2026, 3, 15).expect("valid date");
        let scorer = LeadScorer::default();
        let results = scorer.score_and_rank(sample_leads(as_of), as_of);

        let mut buffer = Vec::new();
        write_csv(&mut buffer, &results).expect("export succeeds");

        let text = String::from_utf8(buffer).expect("utf-8 output");
        let first_row = text.lines().nth(1).expect("first data row");
        assert!(first_row.starts_with("1,100"));
    }
}
