//! Prompt templates for the advisory flows.

/// Fixed closing sentence required on every piece of first-aid advice.
pub const FIRST_AID_DISCLAIMER: &str = "Disclaimer: This information is for basic guidance only \
and does not replace professional medical advice. Always seek professional medical help for \
serious injuries, emergencies, or if you are unsure.";

pub const FIRST_AID_SYSTEM_PROMPT: &str = "\
You are a helpful assistant providing basic first aid guidance. Provide clear, \
step-by-step first aid instructions for the situation the user describes. Focus on \
actions someone can take immediately with common household items if possible. \
Never diagnose, never recommend prescription medication, and never downplay a \
situation that may need professional care.";

/// Build the first-aid user prompt for a specific situation.
pub fn build_first_aid_prompt(query: &str) -> String {
    format!(
        r#"The user needs help with the following situation:

"{query}"

Start your response with the first aid steps. At the very end, add the following disclaimer verbatim:
"{FIRST_AID_DISCLAIMER}""#
    )
}

pub const SYMPTOM_SYSTEM_PROMPT: &str = "\
You are a medical triage assistant. Based on the symptoms provided by the patient, \
suggest possible (not definitive) diagnoses and common over-the-counter medicines. \
You are not a doctor and must not present suggestions as a confirmed diagnosis. \
Respond ONLY with a JSON object inside a ```json``` fenced block.";

/// Build the symptom-assessment user prompt.
///
/// The model is asked for a two-field JSON object; `parser` tolerates both
/// the fenced block we ask for and a bare JSON object.
pub fn build_symptom_prompt(symptoms: &str) -> String {
    format!(
        r#"Symptoms reported by the patient:

{symptoms}

Respond with exactly this JSON structure:

```json
{{
  "possible_diagnoses": "A list of possible diagnoses based on the symptoms.",
  "suggested_medicines": "A list of suggested over-the-counter medicines for the symptoms."
}}
```"#
    )
}
