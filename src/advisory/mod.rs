//! AI advisory flows — first-aid guidance and symptom assessment.
//!
//! Both flows are thin wrappers over a narrow `LlmClient` boundary: build a
//! prompt, call the model, validate the completion. Generation quality is
//! the model's problem; this module only enforces the response contract
//! (non-empty advice with a disclaimer, parseable assessment JSON) and
//! turns anything else into a hard failure. No advice is ever fabricated
//! on failure.

pub mod flows;
pub mod ollama;
pub mod parser;
pub mod prompt;
pub mod types;

pub use flows::*;
pub use ollama::*;
pub use parser::*;
pub use prompt::*;
pub use types::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisoryError {
    #[error("Ollama is not running at {0}")]
    OllamaConnection(String),

    #[error("Ollama returned error (status {status}): {body}")]
    OllamaError { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Model returned an empty completion")]
    EmptyCompletion,

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),
}
