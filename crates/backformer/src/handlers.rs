use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use backform_rules::{CandidateSet, RuleSet, Suffix, backform};
use backform_types::{DerivationRecord, Pos, UniqueCandidate};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tracing::info;

use crate::normalize::NormalizeMode;
use crate::pipeline::Backformer;
use crate::query::{QueryRequest, to_query};

#[derive(Clone)]
pub struct AppState {
    pub rule_set: RuleSet,
    pub max_records: usize,
    pub disable_cache: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            rule_set: RuleSet::default(),
            max_records: 10_000,
            disable_cache: false,
        }
    }
}

#[derive(Deserialize)]
pub struct CandidatesQuery {
    pub suffix: String,
    pub lemma: String,
    pub ruleset: Option<String>,
}

#[derive(Deserialize)]
pub struct BackformRequest {
    pub suffix: String,
    pub ruleset: Option<String>,
    pub mode: Option<String>,
    pub records: Vec<DerivationRecord>,
}

#[derive(Serialize)]
struct SuffixInfo {
    suffix: Suffix,
    strip: usize,
}

#[derive(Serialize)]
struct RuleSetInfo {
    rule_set: RuleSet,
    suffixes: Vec<SuffixInfo>,
}

#[derive(Serialize)]
struct SuffixesResponse {
    default: RuleSet,
    rule_sets: Vec<RuleSetInfo>,
}

#[derive(Serialize)]
struct SlotResponse {
    slot: String,
    pos: Pos,
    form: String,
}

#[derive(Serialize)]
pub struct CandidatesResponse {
    suffix: Suffix,
    lemma: String,
    rule_set: RuleSet,
    rejected: bool,
    slots: Vec<SlotResponse>,
    queries: Vec<String>,
}

#[derive(Serialize)]
pub struct BackformResponse {
    suffix: Suffix,
    rule_set: RuleSet,
    mode: NormalizeMode,
    rows: usize,
    candidates: Vec<QueryRequest>,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/v1/suffixes", get(suffixes))
        .route("/v1/candidates", get(candidates))
        .route("/v1/backform", post(backform_batch))
        .with_state(state)
}

async fn healthz() -> impl IntoResponse {
    "ok"
}

async fn suffixes(State(state): State<AppState>) -> Response {
    let rule_sets = RuleSet::ALL
        .into_iter()
        .map(|rule_set| RuleSetInfo {
            rule_set,
            suffixes: rule_set
                .rules()
                .iter()
                .map(|rule| SuffixInfo {
                    suffix: rule.suffix,
                    strip: rule.strip,
                })
                .collect(),
        })
        .collect();
    let response = SuffixesResponse {
        default: state.rule_set,
        rule_sets,
    };
    cached(&state, "public, max-age=86400, immutable", Json(response))
}

async fn candidates(
    State(state): State<AppState>,
    params: Result<Query<CandidatesQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    let suffix: Suffix = params.suffix.parse()?;
    let rule_set = parse_rule_set(params.ruleset.as_deref(), state.rule_set)?;
    let lemma = params.lemma.trim();
    if lemma.is_empty() {
        return Err(ApiError::bad_request("lemma is required"));
    }

    let slots = backform(rule_set, suffix, lemma);
    let rejected = slots.is_none();
    let slots = slots.unwrap_or_default();
    let response = CandidatesResponse {
        suffix,
        lemma: lemma.to_string(),
        rule_set,
        rejected,
        queries: slot_queries(&slots),
        slots: slots
            .iter()
            .map(|c| SlotResponse {
                slot: c.slot.name(),
                pos: c.slot.pos,
                form: c.form.clone(),
            })
            .collect(),
    };
    Ok(cached(&state, "public, max-age=3600", Json(response)))
}

async fn backform_batch(
    State(state): State<AppState>,
    request: Result<Json<BackformRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = request.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    let suffix: Suffix = request.suffix.parse()?;
    let rule_set = parse_rule_set(request.ruleset.as_deref(), state.rule_set)?;
    let mode = match request.mode.as_deref() {
        Some(raw) => raw
            .parse::<NormalizeMode>()
            .map_err(|e| ApiError::bad_request(e.to_string()))?,
        None => NormalizeMode::default(),
    };
    if request.records.is_empty() {
        return Err(ApiError::bad_request("records must not be empty"));
    }
    if request.records.len() > state.max_records {
        return Err(ApiError::bad_request(format!(
            "records must be at most {}",
            state.max_records
        )));
    }

    let out = Backformer::new(rule_set)
        .with_mode(mode)
        .run(&request.records, suffix);
    info!(%suffix, records = request.records.len(), "served backform batch");
    let response = BackformResponse {
        suffix,
        rule_set,
        mode,
        rows: out.rows.len(),
        candidates: out.queries(),
    };
    Ok(Json(response).into_response())
}

fn parse_rule_set(raw: Option<&str>, default: RuleSet) -> Result<RuleSet, ApiError> {
    match raw {
        Some(raw) => raw
            .parse()
            .map_err(|e: backform_rules::InvalidRuleSetError| ApiError::bad_request(e.to_string())),
        None => Ok(default),
    }
}

fn slot_queries(slots: &CandidateSet) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for candidate in slots.applicable() {
        let query = to_query(&UniqueCandidate {
            form: candidate.form.clone(),
            pos: candidate.slot.pos,
        });
        if !out.contains(&query) {
            out.push(query);
        }
    }
    out
}

fn cached(state: &AppState, policy: &'static str, body: impl IntoResponse) -> Response {
    if state.disable_cache {
        return body.into_response();
    }
    (
        [(header::CACHE_CONTROL, HeaderValue::from_static(policy))],
        body,
    )
        .into_response()
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    Suffix(#[from] backform_rules::InvalidSuffixError),
}

impl ApiError {
    fn bad_request<T: Into<String>>(msg: T) -> Self {
        ApiError::BadRequest(msg.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => {
                let body = Json(ErrorResponse { error: msg });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            ApiError::Suffix(err) => {
                let body = Json(json!({
                    "error": err.to_string(),
                    "recognized": err.recognized,
                }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
        }
    }
}
