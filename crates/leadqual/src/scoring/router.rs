use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::Lead;
use super::engine::LeadScorer;
use super::report::{ScoreReport, ScoreReportSummary};
use super::result::LeadScoreRow;
use super::weights::{ScoringWeights, WeightOverrides};

const DEFAULT_TOP: usize = 10;

/// Router builder exposing the batch scoring endpoint and the default weight
/// table. Weights arrive per request, so the handlers carry no shared state.
pub fn scoring_router() -> Router {
    Router::new()
        .route("/api/v1/leads/score", post(score_handler))
        .route("/api/v1/scoring/weights", get(weights_handler))
}

#[derive(Debug, Deserialize)]
pub struct ScoreBatchRequest {
    pub leads: Vec<Lead>,
    #[serde(default)]
    pub weights: Option<WeightOverrides>,
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
    #[serde(default)]
    pub top: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ScoreBatchResponse {
    pub as_of: NaiveDate,
    pub max_raw_score: u32,
    pub summary: ScoreReportSummary,
    pub results: Vec<LeadScoreRow>,
}

pub(crate) async fn score_handler(Json(payload): Json<ScoreBatchRequest>) -> Response {
    let ScoreBatchRequest {
        leads,
        weights,
        as_of,
        top,
    } = payload;

    let weights = match weights {
        Some(overrides) => ScoringWeights::with_overrides(&overrides),
        None => ScoringWeights::default(),
    };

    let scorer = match LeadScorer::new(weights) {
        Ok(scorer) => scorer,
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
        }
    };

    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());
    let results = scorer.score_and_rank(leads, as_of);
    let report = ScoreReport::from_results(&results, top.unwrap_or(DEFAULT_TOP));

    let response = ScoreBatchResponse {
        as_of,
        max_raw_score: scorer.max_raw_score(),
        summary: report.summary(),
        results: results.iter().map(|result| result.to_row()).collect(),
    };

    (StatusCode::OK, Json(response)).into_response()
}

pub(crate) async fn weights_handler() -> Json<ScoringWeights> {
    Json(ScoringWeights::default())
}
