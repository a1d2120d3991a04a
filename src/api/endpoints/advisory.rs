//! Advisory endpoints — first-aid guidance and symptom assessment.
//!
//! The generation client is blocking, so each call runs under
//! `spawn_blocking` to keep the runtime responsive. Any upstream failure
//! maps to 502; no advice is ever fabricated on the error path.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::advisory::{self, FirstAidAdvice, SymptomAssessment};
use crate::api::error::ApiError;
use crate::api::types::ApiContext;

const MAX_QUERY_CHARS: usize = 2000;

#[derive(Deserialize)]
pub struct FirstAidRequest {
    pub query: String,
}

#[derive(Serialize)]
pub struct FirstAidResponse {
    pub advice: String,
}

/// `POST /api/first-aid` — step-by-step first-aid guidance.
pub async fn first_aid(
    State(ctx): State<ApiContext>,
    Json(req): Json<FirstAidRequest>,
) -> Result<Json<FirstAidResponse>, ApiError> {
    let query = validated_text(&req.query, "Query")?;

    let llm = ctx.llm.clone();
    let model = ctx.model.clone();
    let FirstAidAdvice { advice } =
        tokio::task::spawn_blocking(move || advisory::first_aid_advice(&*llm, &model, &query))
            .await
            .map_err(|e| ApiError::Internal(format!("generation task failed: {e}")))??;

    Ok(Json(FirstAidResponse { advice }))
}

#[derive(Deserialize)]
pub struct SymptomRequest {
    pub symptoms: String,
}

#[derive(Serialize)]
pub struct SymptomResponse {
    pub possible_diagnoses: String,
    pub suggested_medicines: String,
}

/// `POST /api/symptom-assessment` — possible diagnoses plus OTC suggestions.
pub async fn symptom_assessment(
    State(ctx): State<ApiContext>,
    Json(req): Json<SymptomRequest>,
) -> Result<Json<SymptomResponse>, ApiError> {
    let symptoms = validated_text(&req.symptoms, "Symptoms")?;

    let llm = ctx.llm.clone();
    let model = ctx.model.clone();
    let SymptomAssessment {
        possible_diagnoses,
        suggested_medicines,
    } = tokio::task::spawn_blocking(move || {
        advisory::symptom_assessment(&*llm, &model, &symptoms)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("generation task failed: {e}")))??;

    Ok(Json(SymptomResponse {
        possible_diagnoses,
        suggested_medicines,
    }))
}

/// Trimmed, non-empty, bounded input text.
fn validated_text(raw: &str, field: &str) -> Result<String, ApiError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(ApiError::BadRequest(format!("{field} cannot be empty")));
    }
    if text.len() > MAX_QUERY_CHARS {
        return Err(ApiError::BadRequest(format!(
            "{field} too long (max {MAX_QUERY_CHARS} chars)"
        )));
    }
    Ok(text.to_string())
}
