use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;

use crate::infra::{parse_date, WeightArgs};
use leadqual::config::AppConfig;
use leadqual::error::AppError;
use leadqual::export::write_csv_to_path;
use leadqual::scoring::{
    LeadScorer, PriorityBand, ScoreReport, ScoringResult, ScoringWeights,
};
use leadqual::sources::catalog::sample_leads;
use leadqual::sources::ApolloLeadImporter;

#[derive(Args, Debug)]
pub(crate) struct RankArgs {
    /// Apollo people export (CSV) to score
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Evaluation date for the recency signals (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    /// Number of leads to print (the export file always carries all of them)
    #[arg(long, default_value_t = 20)]
    pub(crate) top: usize,
    /// Optional path for a CSV export of the full ranked batch
    #[arg(long)]
    pub(crate) export: Option<PathBuf>,
    #[command(flatten)]
    pub(crate) weights: WeightArgs,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Evaluation date for the recency signals (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    #[command(flatten)]
    pub(crate) weights: WeightArgs,
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), AppError> {
    let RankArgs {
        input,
        as_of,
        top,
        export,
        weights,
    } = args;

    let config = AppConfig::load()?;
    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());
    let scorer = build_scorer(&weights, &config)?;

    let leads = ApolloLeadImporter::from_path(&input)?;
    let results = scorer.score_and_rank(leads, as_of);

    println!("Scored {} leads from {}", results.len(), input.display());
    render_ranking(&scorer, &results, as_of, top);

    if let Some(path) = export {
        write_csv_to_path(&path, &results)?;
        println!("\nFull ranked batch written to {}", path.display());
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { as_of, weights } = args;

    let config = AppConfig::load()?;
    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());
    let scorer = build_scorer(&weights, &config)?;

    println!("Lead qualification demo (built-in catalog)");
    let results = scorer.score_and_rank(sample_leads(as_of), as_of);
    render_ranking(&scorer, &results, as_of, results.len());

    Ok(())
}

fn build_scorer(flags: &WeightArgs, config: &AppConfig) -> Result<LeadScorer, AppError> {
    let overrides = flags.merged_with(config.scoring);
    let scorer = LeadScorer::new(ScoringWeights::with_overrides(&overrides))?;
    Ok(scorer)
}

fn render_ranking(
    scorer: &LeadScorer,
    results: &[ScoringResult],
    as_of: NaiveDate,
    top: usize,
) {
    println!(
        "Evaluated {} (max raw score {})",
        as_of,
        scorer.max_raw_score()
    );

    let report = ScoreReport::from_results(results, top);
    let summary = report.summary();

    println!("\nPriority mix");
    for entry in &summary.band_counts {
        println!("- {}: {}", entry.band_label, entry.count);
    }
    println!("Mean propensity: {:.1}", summary.mean_total_score);

    println!("\nTop {} of {}", summary.top_leads.len(), summary.lead_count);
    for row in &summary.top_leads {
        let band = PriorityBand::for_score(row.total_score);
        let company_note = if row.company.is_empty() {
            String::new()
        } else {
            format!(" | {}", row.company)
        };
        println!(
            "{:>3}. {:<5.1} {} | {}{} | {} | {}",
            row.rank,
            row.total_score,
            band.label(),
            row.name,
            company_note,
            row.title,
            row.breakdown
        );
    }
}
