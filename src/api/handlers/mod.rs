use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use indexmap::IndexMap;

use crate::models::*;
use crate::store::{Directory, SignupError};

// ============================================================
// Error Handling
// ============================================================

/// Map a directory error onto its HTTP rejection.
///
/// Missing things (the activity, or the roster entry being removed) are
/// 404s; signing up an email that is already on the roster is a 400.
fn signup_error(e: SignupError) -> (StatusCode, String) {
    let status = match e {
        SignupError::ActivityNotFound | SignupError::NotRegistered => StatusCode::NOT_FOUND,
        SignupError::AlreadySignedUp => StatusCode::BAD_REQUEST,
    };
    tracing::warn!("Rejected request: {}", e);
    (status, e.to_string())
}

/// Shape check applied before the store is reached: one `@` separating two
/// non-empty halves. Anything stricter belongs to a mail server, not here.
fn validate_email(email: &str) -> Result<(), (StatusCode, String)> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err((
            StatusCode::BAD_REQUEST,
            format!("Invalid email address: {}", email),
        )),
    }
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Activities
// ============================================================

pub async fn list_activities(
    State(directory): State<Directory>,
) -> Json<IndexMap<String, Activity>> {
    Json(directory.list_activities())
}

pub async fn signup(
    State(directory): State<Directory>,
    Path(name): Path<String>,
    Query(query): Query<ParticipantQuery>,
) -> Result<Json<MessageResponse>, (StatusCode, String)> {
    validate_email(&query.email)?;

    directory.signup(&name, &query.email).map_err(signup_error)?;

    Ok(Json(MessageResponse {
        message: format!("Signed up {} for {}", query.email, name),
    }))
}

pub async fn unregister(
    State(directory): State<Directory>,
    Path(name): Path<String>,
    Query(query): Query<ParticipantQuery>,
) -> Result<Json<MessageResponse>, (StatusCode, String)> {
    directory
        .unregister(&name, &query.email)
        .map_err(signup_error)?;

    Ok(Json(MessageResponse {
        message: format!("Unregistered {} from {}", query.email, name),
    }))
}
