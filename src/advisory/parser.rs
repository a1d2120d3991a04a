use serde::Deserialize;

use super::types::SymptomAssessment;
use super::AdvisoryError;

/// Parse the model's symptom-assessment completion.
///
/// Accepts the ```json``` fenced block the prompt asks for, or a bare JSON
/// object when the model skips the fences. Both fields must be present and
/// non-blank — a structurally valid but empty answer is still a failure,
/// never something to paper over.
pub fn parse_assessment_response(response: &str) -> Result<SymptomAssessment, AdvisoryError> {
    let json_str = extract_json_block(response)?;

    #[derive(Deserialize)]
    struct RawAssessment {
        possible_diagnoses: Option<String>,
        suggested_medicines: Option<String>,
    }

    let raw: RawAssessment = serde_json::from_str(&json_str)
        .map_err(|e| AdvisoryError::ResponseParsing(e.to_string()))?;

    let possible_diagnoses = non_blank(raw.possible_diagnoses)
        .ok_or_else(|| AdvisoryError::MalformedResponse("possible_diagnoses missing".into()))?;
    let suggested_medicines = non_blank(raw.suggested_medicines)
        .ok_or_else(|| AdvisoryError::MalformedResponse("suggested_medicines missing".into()))?;

    Ok(SymptomAssessment {
        possible_diagnoses,
        suggested_medicines,
    })
}

/// Extract the JSON payload from a completion.
fn extract_json_block(response: &str) -> Result<String, AdvisoryError> {
    if let Some(fence_start) = response.find("```json") {
        let content_start = fence_start + 7;
        let fence_end = response[content_start..]
            .find("```")
            .ok_or_else(|| AdvisoryError::MalformedResponse("Unclosed JSON block".into()))?;
        return Ok(response[content_start..content_start + fence_end]
            .trim()
            .to_string());
    }

    // No fences — take the outermost braces.
    let start = response
        .find('{')
        .ok_or_else(|| AdvisoryError::MalformedResponse("No JSON object found".into()))?;
    let end = response
        .rfind('}')
        .filter(|&end| end > start)
        .ok_or_else(|| AdvisoryError::MalformedResponse("No JSON object found".into()))?;
    Ok(response[start..=end].to_string())
}

fn non_blank(field: Option<String>) -> Option<String> {
    field
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
