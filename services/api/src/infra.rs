use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use leadqual::scoring::WeightOverrides;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Weight flags shared by the CLI commands; unset flags keep the defaults.
#[derive(clap::Args, Debug, Default, Clone, Copy)]
pub(crate) struct WeightArgs {
    /// Points for the role-fit signal
    #[arg(long)]
    pub(crate) weight_role_fit: Option<u32>,
    /// Points for the recent-funding signal
    #[arg(long)]
    pub(crate) weight_company_intent: Option<u32>,
    /// Points for the technographic-fit signal
    #[arg(long)]
    pub(crate) weight_tech_fit: Option<u32>,
    /// Points for the NAMs-openness signal
    #[arg(long)]
    pub(crate) weight_nams: Option<u32>,
    /// Points for the biotech-hub location signal
    #[arg(long)]
    pub(crate) weight_location: Option<u32>,
    /// Points for the recent-publication signal
    #[arg(long)]
    pub(crate) weight_publication: Option<u32>,
}

impl WeightArgs {
    /// Merge CLI flags over environment-provided overrides; flags win.
    pub(crate) fn merged_with(&self, base: WeightOverrides) -> WeightOverrides {
        WeightOverrides {
            role_fit: self.weight_role_fit.or(base.role_fit),
            company_intent: self.weight_company_intent.or(base.company_intent),
            tech_fit: self.weight_tech_fit.or(base.tech_fit),
            nams: self.weight_nams.or(base.nams),
            location: self.weight_location.or(base.location),
            publication: self.weight_publication.or(base.publication),
        }
    }
}
