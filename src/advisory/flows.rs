//! The two advisory operations: first-aid guidance and symptom assessment.

use super::parser::parse_assessment_response;
use super::prompt::{
    build_first_aid_prompt, build_symptom_prompt, FIRST_AID_DISCLAIMER, FIRST_AID_SYSTEM_PROMPT,
    SYMPTOM_SYSTEM_PROMPT,
};
use super::types::{FirstAidAdvice, LlmClient, SymptomAssessment};
use super::AdvisoryError;

/// Generate first-aid guidance for a user-described situation.
///
/// The prompt asks the model to close with `FIRST_AID_DISCLAIMER`; if the
/// model drops it, it is appended here so callers can rely on its presence.
/// A blank completion is a hard failure — the caller gets an error to show
/// a retry message with, never fabricated advice.
pub fn first_aid_advice(
    client: &dyn LlmClient,
    model: &str,
    query: &str,
) -> Result<FirstAidAdvice, AdvisoryError> {
    let completion =
        client.generate(model, &build_first_aid_prompt(query), FIRST_AID_SYSTEM_PROMPT)?;

    let advice = completion.trim();
    if advice.is_empty() {
        return Err(AdvisoryError::EmptyCompletion);
    }

    let advice = if advice.contains(FIRST_AID_DISCLAIMER) {
        advice.to_string()
    } else {
        tracing::debug!("model omitted the disclaimer, appending");
        format!("{advice}\n\n{FIRST_AID_DISCLAIMER}")
    };

    Ok(FirstAidAdvice { advice })
}

/// Suggest possible diagnoses and over-the-counter medicines for symptoms.
///
/// The completion must parse into both fields; anything else propagates as
/// a hard failure.
pub fn symptom_assessment(
    client: &dyn LlmClient,
    model: &str,
    symptoms: &str,
) -> Result<SymptomAssessment, AdvisoryError> {
    let completion =
        client.generate(model, &build_symptom_prompt(symptoms), SYMPTOM_SYSTEM_PROMPT)?;

    if completion.trim().is_empty() {
        return Err(AdvisoryError::EmptyCompletion);
    }

    parse_assessment_response(&completion)
}
