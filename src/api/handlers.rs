//! HTTP request handlers for the record store API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{EmployeePatch, EmployeeRecord, NewEmployee};
use crate::query::summary;
use crate::store::{DeleteOutcome, RECORD_ADDED, RECORD_DELETED, RECORD_UPDATED};

use super::request::{DeleteParams, SearchParams};
use super::response::{ApiError, ApiErrorResponse, EmployeeView, ListResponse, MutationResponse};
use super::state::AppState;

type ApiResult<T> = Result<(StatusCode, Json<T>), ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", get(list_handler).post(create_handler))
        .route(
            "/employees/:id",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .with_state(state)
}

/// Maps a body extraction failure to a 400 response.
fn reject_body(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::malformed_json(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::new(StatusCode::BAD_REQUEST, error)
}

/// Handler for GET /employees.
///
/// Returns the records matching `q` on `field`, newest first.
async fn list_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<ListResponse> {
    let field = params.search_field()?;
    let store = state.store().await;
    let projection = store.search(&params.q, field);
    let records: Vec<EmployeeView> = projection.iter().map(EmployeeView::from).collect();

    Ok((
        StatusCode::OK,
        Json(ListResponse {
            summary: summary(records.len()),
            total: store.len(),
            field,
            records,
        }),
    ))
}

/// Handler for GET /employees/:id.
async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<EmployeeRecord> {
    let store = state.store().await;
    let record = store.get(&id)?.clone();
    Ok((StatusCode::OK, Json(record)))
}

/// Handler for POST /employees.
async fn create_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewEmployee>, JsonRejection>,
) -> ApiResult<MutationResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing create request");

    let Json(input) = payload.map_err(|rejection| reject_body(correlation_id, rejection))?;

    let record = state.store().await.create(input).inspect_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Create failed");
    })?;

    info!(correlation_id = %correlation_id, record_id = %record.id, "Create completed");
    Ok((
        StatusCode::CREATED,
        Json(MutationResponse {
            message: RECORD_ADDED.to_string(),
            record,
        }),
    ))
}

/// Handler for PUT /employees/:id.
async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EmployeePatch>, JsonRejection>,
) -> ApiResult<MutationResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, record_id = %id, "Processing update request");

    let Json(patch) = payload.map_err(|rejection| reject_body(correlation_id, rejection))?;

    let record = state.store().await.update(&id, &patch).inspect_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Update failed");
    })?;

    Ok((
        StatusCode::OK,
        Json(MutationResponse {
            message: RECORD_UPDATED.to_string(),
            record,
        }),
    ))
}

/// Handler for DELETE /employees/:id.
///
/// The `confirm` query flag stands in for the confirmation prompt.
async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<DeleteParams>,
) -> ApiResult<MutationResponse> {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        record_id = %id,
        confirmed = params.confirm,
        "Processing delete request"
    );

    let confirmed = |_: &str| params.confirm;
    let outcome = state.store().await.delete(&id, &confirmed).inspect_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Delete failed");
    })?;

    match outcome {
        DeleteOutcome::Deleted(record) => Ok((
            StatusCode::OK,
            Json(MutationResponse {
                message: RECORD_DELETED.to_string(),
                record,
            }),
        )),
        DeleteOutcome::Declined => Err(ApiErrorResponse::new(
            StatusCode::CONFLICT,
            ApiError::delete_not_confirmed(&id),
        )),
    }
}
