//! Pass-through inference proxy.
//!
//! Forwards client generation requests to the upstream provider using the
//! server-held credential. The credential never appears in any response;
//! the provider JSON comes back unmodified.

use axum::{Json, extract::State};
use serde_json::{Value, json};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Build the provider wire body from client `contents` and an optional
/// `config` object: `systemInstruction` is lifted to the top level and the
/// remainder becomes `generationConfig`.
fn provider_body(contents: &Value, config: Option<Value>) -> Value {
    let mut body = json!({ "contents": contents });

    if let Some(mut config) = config
        && let Some(object) = config.as_object_mut()
    {
        if let Some(instruction) = object.remove("systemInstruction") {
            // Accept a bare string as shorthand for a single text part.
            body["systemInstruction"] = if let Value::String(text) = instruction {
                json!({ "parts": [{ "text": text }] })
            } else {
                instruction
            };
        }
        if !object.is_empty() {
            body["generationConfig"] = config;
        }
    }

    body
}

/// Forward a generation request to the provider.
///
/// The body must carry a `model` string and a `contents` value; anything
/// else is a 400. An upstream failure of any kind is a 500.
#[instrument(skip_all)]
pub async fn generate(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>> {
    let model = payload
        .get("model")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty());
    let contents = payload.get("contents");

    let (Some(model), Some(contents)) = (model, contents) else {
        return Err(AppError::BadRequest(
            "Missing required fields: model and contents".to_string(),
        ));
    };

    let body = provider_body(contents, payload.get("config").cloned());

    let response = state
        .gemini()
        .generate_raw(model, &body)
        .await
        .map_err(|e| {
            tracing::error!("Proxy call failed: {e}");
            AppError::Internal(format!("Internal Server Error: {e}"))
        })?;

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_body_without_config() {
        let contents = json!([{ "parts": [{ "text": "hi" }] }]);
        let body = provider_body(&contents, None);

        assert_eq!(body["contents"], contents);
        assert!(body.get("systemInstruction").is_none());
        assert!(body.get("generationConfig").is_none());
    }

    #[test]
    fn test_provider_body_splits_config() {
        let contents = json!([{ "parts": [{ "text": "hi" }] }]);
        let config = json!({
            "systemInstruction": "be brief",
            "responseMimeType": "application/json"
        });
        let body = provider_body(&contents, Some(config));

        assert_eq!(
            body.pointer("/systemInstruction/parts/0/text"),
            Some(&json!("be brief"))
        );
        assert_eq!(
            body.pointer("/generationConfig/responseMimeType"),
            Some(&json!("application/json"))
        );
        assert!(
            body.pointer("/generationConfig/systemInstruction")
                .is_none()
        );
    }

    #[test]
    fn test_provider_body_keeps_structured_instruction() {
        let contents = json!([]);
        let config = json!({
            "systemInstruction": { "parts": [{ "text": "be brief" }] }
        });
        let body = provider_body(&contents, Some(config));

        assert_eq!(
            body.pointer("/systemInstruction/parts/0/text"),
            Some(&json!("be brief"))
        );
        assert!(body.get("generationConfig").is_none());
    }
}
