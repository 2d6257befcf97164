//! Mocked authentication route handlers.
//!
//! Any submitted credentials are accepted; nothing is verified or stored
//! beyond the session identity.

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::models::CurrentUser;
use crate::models::session::keys;
use crate::state::AppState;

/// Sign-in request body.
#[derive(Debug, Deserialize)]
pub struct SigninRequest {
    pub name: Option<String>,
    pub email: String,
    pub password: String,
}

/// Register request body.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Sign in. Email and password must be non-empty; the display name falls
/// back to a default when absent.
#[instrument(skip_all)]
pub async fn signin(
    State(_state): State<AppState>,
    session: Session,
    Json(request): Json<SigninRequest>,
) -> Result<Json<CurrentUser>> {
    if request.email.trim().is_empty() || request.password.is_empty() {
        return Err(AppError::BadRequest(
            "email and password are required".to_string(),
        ));
    }

    let user = CurrentUser::new(request.name, request.email.trim().to_string());
    session.insert(keys::CURRENT_USER, &user).await?;

    Ok(Json(user))
}

/// Register. Name, email and password must all be non-empty.
#[instrument(skip_all)]
pub async fn register(
    State(_state): State<AppState>,
    session: Session,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<CurrentUser>> {
    if request.name.trim().is_empty()
        || request.email.trim().is_empty()
        || request.password.is_empty()
    {
        return Err(AppError::BadRequest(
            "name, email and password are required".to_string(),
        ));
    }

    let user = CurrentUser::new(Some(request.name), request.email.trim().to_string());
    session.insert(keys::CURRENT_USER, &user).await?;

    Ok(Json(user))
}

/// Sign out, removing the session identity.
#[instrument(skip_all)]
pub async fn logout(session: Session) -> Result<StatusCode> {
    session.remove::<CurrentUser>(keys::CURRENT_USER).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// The current signed-in user.
#[instrument(skip_all)]
pub async fn me(session: Session) -> Result<Json<CurrentUser>> {
    session
        .get::<CurrentUser>(keys::CURRENT_USER)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::Unauthorized("not signed in".to_string()))
}
