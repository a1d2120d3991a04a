use serde::{Deserialize, Serialize};

use super::AdvisoryError;

/// Narrow boundary to a text-generation backend.
///
/// Synchronous by design — call sites on the async runtime wrap invocations
/// in `tokio::task::spawn_blocking`. Implemented by `OllamaClient` for
/// production and `MockLlmClient` for deterministic tests.
pub trait LlmClient: Send + Sync {
    /// Generate a completion for `prompt` under `system` using `model`.
    fn generate(&self, model: &str, prompt: &str, system: &str)
        -> Result<String, AdvisoryError>;

    /// Whether `model` is installed on the backend.
    fn is_model_available(&self, model: &str) -> Result<bool, AdvisoryError>;

    /// Names of all installed models.
    fn list_models(&self) -> Result<Vec<String>, AdvisoryError>;
}

/// First-aid guidance for a user-described situation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirstAidAdvice {
    /// Step-by-step instructions, ending with the fixed disclaimer sentence.
    pub advice: String,
}

/// Possible diagnoses and over-the-counter suggestions for reported symptoms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomAssessment {
    pub possible_diagnoses: String,
    pub suggested_medicines: String,
}
