//! Route handlers for the strings API.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use stringscope_core::{translate, PredicateSet, StoreError, StringRecord, StringStore};

use crate::dto::{
    FilterParams, InterpretedQuery, ListResponse, NaturalLanguageParams, NaturalLanguageResponse,
};
use crate::error::ApiError;
use crate::AppState;

/// Run a store call on the blocking pool; snapshot writes hit the filesystem.
async fn with_store<T, F>(state: &AppState, op: F) -> Result<T, ApiError>
where
    F: FnOnce(&dyn StringStore) -> Result<T, StoreError> + Send + 'static,
    T: Send + 'static,
{
    let store = state.store.clone();
    let result = tokio::task::spawn_blocking(move || op(store.as_ref()))
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "store task failed");
            ApiError::Internal
        })?;
    Ok(result?)
}

/// GET /
pub(crate) async fn root() -> Json<Value> {
    Json(json!({
        "message": "stringscope string analysis API",
        "endpoints": {
            "POST /strings": "Analyze and store a string",
            "GET /strings/{id_or_value}": "Retrieve the analysis of a stored string",
            "GET /strings": "List stored strings, optionally filtered by is_palindrome, min_length, max_length, word_count, contains_character",
            "GET /strings/filter-by-natural-language?query=...": "Filter with a plain-English query such as 'all single word palindromic strings'",
            "DELETE /strings/{id_or_value}": "Delete a stored string",
            "GET /health": "Liveness probe"
        }
    }))
}

/// GET /health
pub(crate) async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// POST /strings
///
/// Returns 201 for a newly analysed string and 200 with the stored record when
/// the same value was analysed before.
pub(crate) async fn create_string(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<StringRecord>), ApiError> {
    let Json(body) = payload.map_err(|rej| ApiError::bad_request(rej.body_text()))?;
    let value = match body.get("value") {
        None | Some(Value::Null) => return Err(ApiError::bad_request("Missing \"value\" field.")),
        Some(Value::String(s)) => s.clone(),
        Some(_) => return Err(ApiError::bad_request("\"value\" must be a string.")),
    };
    if value.trim().is_empty() {
        return Err(ApiError::bad_request("Invalid string input."));
    }

    let outcome = with_store(&state, move |store| store.create(&value)).await?;
    let status = if outcome.is_created() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(outcome.into_record())))
}

/// GET /strings
pub(crate) async fn list_strings(
    State(state): State<AppState>,
    params: Result<Query<FilterParams>, QueryRejection>,
) -> Result<Json<ListResponse>, ApiError> {
    let Query(params) = params.map_err(|rej| ApiError::bad_request(rej.body_text()))?;
    let predicate = PredicateSet::try_from(params)?;
    let filters_applied = predicate.clone();
    let data = with_store(&state, move |store| store.query(&predicate)).await?;
    Ok(Json(ListResponse {
        count: data.len(),
        data,
        filters_applied,
    }))
}

/// GET /strings/filter-by-natural-language
pub(crate) async fn filter_by_natural_language(
    State(state): State<AppState>,
    params: Result<Query<NaturalLanguageParams>, QueryRejection>,
) -> Result<Json<NaturalLanguageResponse>, ApiError> {
    let Query(params) = params.map_err(|rej| ApiError::bad_request(rej.body_text()))?;
    let query = params
        .query
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("Missing \"query\" parameter."))?;

    let parsed_filters = translate(&query);
    if parsed_filters.is_empty() {
        tracing::info!(%query, "natural-language query produced no filters");
    }
    let predicate = parsed_filters.clone();
    let data = with_store(&state, move |store| store.query(&predicate)).await?;

    Ok(Json(NaturalLanguageResponse {
        count: data.len(),
        data,
        interpreted_query: InterpretedQuery {
            original: query,
            parsed_filters,
        },
    }))
}

/// GET /strings/{id_or_value}
pub(crate) async fn get_string(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<StringRecord>, ApiError> {
    Ok(Json(with_store(&state, move |store| store.get(&key)).await?))
}

/// DELETE /strings/{id_or_value}
pub(crate) async fn delete_string(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<StatusCode, ApiError> {
    with_store(&state, move |store| store.delete(&key)).await?;
    Ok(StatusCode::NO_CONTENT)
}
