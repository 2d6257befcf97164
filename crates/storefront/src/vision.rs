//! Visual matcher.
//!
//! Takes an uploaded image, pairs it with a compact catalog manifest, and
//! asks the model for the top three visually similar products as strictly
//! structured JSON. Returned ids are mapped back through the catalog;
//! unknown ids are silently dropped.

use serde::{Deserialize, Serialize};

use zephyra_core::ProductId;

use crate::catalog::Catalog;
use crate::gemini::{Content, GenerateRequest, GenerationConfig, Part};

/// Message shown when the model returns no usable matches.
pub const NO_MATCHES_MESSAGE: &str = "No similar products found in our collection.";

/// Message shown when the search fails outright.
pub const RETRY_MESSAGE: &str = "Sorry, we couldn't process your image. Please try again.";

/// Search lifecycle for the image-search modal.
///
/// Selecting a new image from any state returns to `ImageSelected`;
/// closing resets to `Idle`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SearchState {
    /// No image chosen yet.
    #[default]
    Idle,
    /// An image is selected and ready to search.
    ImageSelected {
        /// Image MIME type.
        mime_type: String,
        /// Base64-encoded image bytes.
        data: String,
    },
    /// A search request is in flight.
    Searching {
        mime_type: String,
        data: String,
    },
    /// The search produced matches.
    Results {
        product_ids: Vec<ProductId>,
    },
    /// The search ended with a user-facing message.
    Error {
        message: String,
    },
}

impl SearchState {
    /// Select an image. Non-image MIME types are silently ignored and the
    /// state is left unchanged.
    pub fn select_image(&mut self, mime_type: &str, data: String) {
        if !mime_type.starts_with("image/") {
            return;
        }
        *self = Self::ImageSelected {
            mime_type: mime_type.to_string(),
            data,
        };
    }

    /// Move a selected image into the searching state. Returns the image
    /// payload, or `None` when there is nothing to search.
    pub fn begin_search(&mut self) -> Option<(String, String)> {
        let (mime_type, data) = match self {
            Self::ImageSelected { mime_type, data } => (mime_type.clone(), data.clone()),
            _ => return None,
        };
        *self = Self::Searching {
            mime_type: mime_type.clone(),
            data: data.clone(),
        };
        Some((mime_type, data))
    }

    /// Record resolved matches, or the no-matches message when empty.
    pub fn complete(&mut self, product_ids: Vec<ProductId>) {
        *self = if product_ids.is_empty() {
            Self::Error {
                message: NO_MATCHES_MESSAGE.to_string(),
            }
        } else {
            Self::Results { product_ids }
        };
    }

    /// Record an outright failure with the generic retry message.
    pub fn fail(&mut self) {
        *self = Self::Error {
            message: RETRY_MESSAGE.to_string(),
        };
    }

    /// Close the modal, resetting to idle.
    pub fn close(&mut self) {
        *self = Self::Idle;
    }
}

/// Structured response contract: `{ "productIds": [int] }`.
#[derive(Debug, Deserialize)]
struct MatchResponse {
    #[serde(rename = "productIds")]
    product_ids: Vec<i32>,
}

/// JSON schema constraining the model response to the match contract.
#[must_use]
pub fn response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "productIds": {
                "type": "ARRAY",
                "items": { "type": "INTEGER" }
            }
        }
    })
}

/// The matching prompt, embedding the serialized catalog manifest.
#[must_use]
pub fn match_prompt(catalog: &Catalog) -> String {
    format!(
        "Analyze the product in this image. Compare it to the following list of \
         products and identify the top 3 most similar items based on appearance, \
         product type, and potential use. Respond ONLY with a JSON object containing \
         a single key 'productIds' which is an array of the matching product IDs \
         (as numbers). If no relevant products are found, return an empty array. \
         Product List: {}",
        catalog.vision_manifest()
    )
}

/// Build the multimodal match request for an encoded image.
#[must_use]
pub fn build_request(catalog: &Catalog, mime_type: &str, data: String) -> GenerateRequest {
    GenerateRequest {
        contents: vec![Content {
            role: Some("user".to_string()),
            parts: vec![
                Part::inline_data(mime_type, data),
                Part::text(match_prompt(catalog)),
            ],
        }],
        system_instruction: None,
        generation_config: Some(GenerationConfig {
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(response_schema()),
        }),
    }
}

/// Parse the model's structured reply into raw product ids.
///
/// # Errors
///
/// Any text not matching the `{ "productIds": [int] }` contract is a parse
/// failure.
pub fn parse_matches(text: &str) -> Result<Vec<i32>, serde_json::Error> {
    let response: MatchResponse = serde_json::from_str(text.trim())?;
    Ok(response.product_ids)
}
