use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use parking_lot::RwLock;
use polars::prelude::{PolarsError, PolarsResult};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info};

use crate::{
    InputError, PlannerConfig, ScheduleResult, TripLabels, TripRequest, compute,
    render::{format_clock, format_day_label, render_plan},
};

#[derive(Clone)]
pub struct AppState {
    config: Arc<RwLock<PlannerConfig>>,
}

impl AppState {
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
        }
    }

    fn config(&self) -> Arc<RwLock<PlannerConfig>> {
        self.config.clone()
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

#[derive(Debug)]
enum ApiError {
    NotFound(String),
    Invalid(String),
    Internal(String),
}

impl ApiError {
    fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    fn invalid(message: impl Into<String>) -> Self {
        ApiError::Invalid(message.into())
    }
}

impl From<InputError> for ApiError {
    fn from(value: InputError) -> Self {
        ApiError::Invalid(value.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        ApiError::Invalid(value.body_text())
    }
}

impl From<PolarsError> for ApiError {
    fn from(value: PolarsError) -> Self {
        ApiError::Internal(value.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(message) => {
                let body = Json(ErrorBody {
                    error: "not_found",
                    message,
                });
                (StatusCode::NOT_FOUND, body).into_response()
            }
            ApiError::Invalid(message) => {
                let body = Json(ErrorBody {
                    error: "invalid_request",
                    message,
                });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            ApiError::Internal(message) => {
                let body = Json(ErrorBody {
                    error: "internal_error",
                    message,
                });
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

/// One formatted table row, ready for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRow {
    pub day: String,
    pub date: String,
    pub bedtime: String,
    pub wake_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResponse {
    pub labels: TripLabels,
    pub summary: String,
    pub result: ScheduleResult,
    pub rows: Vec<PlanRow>,
    /// Plain-text table, as printed by the CLI.
    pub table: String,
}

impl PlanResponse {
    pub fn new(labels: TripLabels, result: ScheduleResult) -> PolarsResult<Self> {
        let table = render_plan(&result, &labels)?;
        let rows = result
            .days
            .iter()
            .map(|day| PlanRow {
                day: format_day_label(day.date),
                date: day.date.to_string(),
                bedtime: format_clock(day.bedtime),
                wake_time: format_clock(day.wake_time),
            })
            .collect();
        Ok(Self {
            labels,
            summary: result.difference_label(),
            result,
            rows,
            table,
        })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/schedule", post(plan_schedule))
        .route("/config", get(get_config).put(update_config))
        .fallback(unknown_route)
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, config: PlannerConfig) -> std::io::Result<()> {
    let state = AppState::new(config);
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "http api listening");
    axum::serve(listener, app).await
}

async fn unknown_route(uri: Uri) -> ApiError {
    ApiError::not_found(format!("no route for {}", uri.path()))
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn plan_schedule(
    State(state): State<AppState>,
    payload: Result<Json<TripRequest>, JsonRejection>,
) -> Result<Json<PlanResponse>, ApiError> {
    let Json(request) = payload?;
    let config = state.config();
    let (input, labels) = {
        let guard = config.read();
        request.parse_with_defaults(&guard)?
    };
    let result = compute(&input);
    debug!(summary = %result.to_cli_summary(), "schedule served");
    Ok(Json(PlanResponse::new(labels, result)?))
}

async fn get_config(State(state): State<AppState>) -> Json<PlannerConfig> {
    let config = state.config();
    let current = {
        let guard = config.read();
        guard.clone()
    };
    Json(current)
}

async fn update_config(
    State(state): State<AppState>,
    payload: Result<Json<PlannerConfig>, JsonRejection>,
) -> Result<Json<PlannerConfig>, ApiError> {
    let Json(update) = payload?;
    update
        .validate()
        .map_err(|err| ApiError::invalid(err.to_string()))?;
    let config = state.config();
    {
        let mut guard = config.write();
        *guard = update.clone();
    }
    info!("planner config replaced");
    Ok(Json(update))
}
