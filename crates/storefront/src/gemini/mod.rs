//! Client for the generative-language API.
//!
//! The credential lives exclusively in server configuration; the browser
//! never sees it. Route handlers call [`GeminiClient`] directly, and the
//! `/api/generate` proxy route forwards client payloads through the same
//! client.

mod client;
mod error;
mod types;

pub use client::GeminiClient;
pub use error::GeminiError;
pub use types::{
    Candidate, Content, GenerateRequest, GenerateResponse, GenerationConfig, InlineData, Part,
};
