//! Visual search route handlers.
//!
//! Accepts one uploaded image, runs the visual match, and stores the
//! search lifecycle in the session. Upstream or parse failures surface as
//! the generic retry message rather than an error status.

use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
};
use base64::Engine as _;
use serde::Serialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::catalog::Product;
use crate::error::{AppError, Result};
use crate::models::session::keys;
use crate::state::AppState;
use crate::vision::{self, SearchState};

/// Search outcome display data.
#[derive(Debug, Serialize)]
pub struct SearchView {
    /// Matched products, best first. Empty unless the search produced
    /// results.
    pub products: Vec<Product>,
    /// User-facing message when the search ended without results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SearchView {
    fn build(state: &SearchState, app: &AppState) -> Self {
        match state {
            SearchState::Results { product_ids } => {
                let ids: Vec<i32> = product_ids.iter().map(|id| id.as_i32()).collect();
                Self {
                    products: app
                        .catalog()
                        .resolve_ids(&ids)
                        .into_iter()
                        .cloned()
                        .collect(),
                    message: None,
                }
            }
            SearchState::Error { message } => Self {
                products: Vec::new(),
                message: Some(message.clone()),
            },
            _ => Self {
                products: Vec::new(),
                message: None,
            },
        }
    }
}

async fn save_search(session: &Session, state: &SearchState) -> Result<()> {
    session.insert(keys::VISION, state).await?;
    Ok(())
}

/// Extract the first image field from the multipart body.
async fn read_image(multipart: &mut Multipart) -> Result<(String, Vec<u8>)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("invalid multipart body: {e}")))?
    {
        let Some(mime_type) = field.content_type().map(str::to_string) else {
            continue;
        };
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("failed to read upload: {e}")))?;
        return Ok((mime_type, bytes.to_vec()));
    }

    Err(AppError::BadRequest("no file uploaded".to_string()))
}

/// Find visually similar products for an uploaded image.
#[instrument(skip_all)]
pub async fn search(
    State(state): State<AppState>,
    session: Session,
    mut multipart: Multipart,
) -> Result<Json<SearchView>> {
    let (mime_type, bytes) = read_image(&mut multipart).await?;

    let mut search = SearchState::default();
    search.select_image(
        &mime_type,
        base64::engine::general_purpose::STANDARD.encode(&bytes),
    );

    let Some((mime_type, data)) = search.begin_search() else {
        // A non-image MIME type never entered the selected state.
        return Err(AppError::BadRequest(
            "uploaded file must be an image".to_string(),
        ));
    };

    let request = vision::build_request(state.catalog(), &mime_type, data);
    match state.gemini().generate(&request).await {
        Ok(response) => match response.first_text().as_deref().map(vision::parse_matches) {
            Some(Ok(ids)) => {
                let matched = state
                    .catalog()
                    .resolve_ids(&ids)
                    .iter()
                    .map(|p| p.id)
                    .collect();
                search.complete(matched);
            }
            Some(Err(e)) => {
                tracing::warn!("Visual match response violated the schema: {e}");
                search.fail();
            }
            None => {
                tracing::warn!("Visual match response had no text candidate");
                search.fail();
            }
        },
        Err(e) => {
            tracing::warn!("Visual match call failed: {e}");
            search.fail();
        }
    }

    save_search(&session, &search).await?;
    Ok(Json(SearchView::build(&search, &state)))
}

/// Close the search, resetting to idle.
#[instrument(skip_all)]
pub async fn close(session: Session) -> Result<StatusCode> {
    save_search(&session, &SearchState::Idle).await?;
    Ok(StatusCode::NO_CONTENT)
}
