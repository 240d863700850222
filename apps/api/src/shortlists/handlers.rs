use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::client::MatchResult;
use crate::errors::AppError;
use crate::models::shortlist::Shortlist;
use crate::routes::JobCodeQuery;
use crate::shortlists::registry::{create_shortlist, list_shortlists, ShortlistSubmission};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ShortlistSavedResponse {
    pub message: &'static str,
    pub data: Shortlist,
}

/// POST /api/shortlists
pub async fn handle_create_shortlist(
    State(state): State<AppState>,
    payload: Result<Json<ShortlistSubmission>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortlistSavedResponse>), AppError> {
    let Json(submission) = payload?;
    let data = create_shortlist(state.store.as_ref(), submission).await?;
    Ok((
        StatusCode::CREATED,
        Json(ShortlistSavedResponse {
            message: "Shortlist saved",
            data,
        }),
    ))
}

/// GET /api/shortlists?code=X
pub async fn handle_list_shortlists(
    State(state): State<AppState>,
    Query(params): Query<JobCodeQuery>,
) -> Result<Json<Vec<Shortlist>>, AppError> {
    Ok(Json(
        list_shortlists(state.store.as_ref(), params.code.as_deref()).await?,
    ))
}

/// POST /api/match/:code
///
/// Relays a match run to the external matcher and returns its shortlist for the
/// code. The matcher writes its own shortlist records; nothing is stored here.
pub async fn handle_smart_match(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Vec<MatchResult>>, AppError> {
    Ok(Json(state.matcher.smart_match(&code).await?))
}
