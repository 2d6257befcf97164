//! Assistant route handlers.
//!
//! The conversation lives in the session. A failed upstream call never
//! fails the request; the fixed apology is appended to the transcript and
//! the handler responds normally.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use crate::assistant::{self, AssistantSession, ChatMessage};
use crate::error::{AppError, Result};
use crate::gemini::{Content, GenerateRequest};
use crate::models::session::keys;
use crate::state::AppState;

/// Conversation display data.
#[derive(Debug, Serialize)]
pub struct ChatView {
    pub messages: Vec<ChatMessage>,
    pub busy: bool,
}

impl ChatView {
    fn build(chat: &AssistantSession) -> Self {
        Self {
            messages: chat.transcript().to_vec(),
            busy: chat.is_busy(),
        }
    }
}

/// Send message request body.
#[derive(Debug, Deserialize)]
pub struct SendRequest {
    pub message: String,
}

async fn get_chat(session: &Session) -> Result<AssistantSession> {
    Ok(session
        .get::<AssistantSession>(keys::CHAT)
        .await?
        .unwrap_or_else(AssistantSession::open))
}

async fn save_chat(session: &Session, chat: &AssistantSession) -> Result<()> {
    session.insert(keys::CHAT, chat).await?;
    Ok(())
}

/// Open the chat, resetting the conversation to the greeting.
#[instrument(skip_all)]
pub async fn open(session: Session) -> Result<Json<ChatView>> {
    let chat = AssistantSession::open();
    save_chat(&session, &chat).await?;
    Ok(Json(ChatView::build(&chat)))
}

/// The current transcript.
#[instrument(skip_all)]
pub async fn show(session: Session) -> Result<Json<ChatView>> {
    let chat = get_chat(&session).await?;
    Ok(Json(ChatView::build(&chat)))
}

/// Send a message to the assistant.
///
/// The full accumulated history plus the catalog-embedding system
/// instruction is transmitted upstream. Upstream failure appends the
/// apology to the transcript; the response is still 200.
#[instrument(skip(state, session, request))]
pub async fn send(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<SendRequest>,
) -> Result<Json<ChatView>> {
    let mut chat = get_chat(&session).await?;
    if !chat.begin_send(&request.message) {
        return Err(AppError::BadRequest("message must not be blank".to_string()));
    }

    let upstream = GenerateRequest {
        contents: chat.request_contents(),
        system_instruction: Some(Content::system_text(assistant::system_instruction(
            state.catalog(),
        ))),
        generation_config: None,
    };

    match state.gemini().generate(&upstream).await {
        Ok(response) => match response.first_text() {
            Some(reply) => chat.record_reply(reply),
            None => {
                tracing::warn!("Assistant response had no text candidate");
                chat.record_failure();
            }
        },
        Err(e) => {
            tracing::warn!("Assistant call failed: {e}");
            chat.record_failure();
        }
    }

    save_chat(&session, &chat).await?;
    Ok(Json(ChatView::build(&chat)))
}
