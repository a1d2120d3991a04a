//! Directory endpoints — doctor search, hospitals, emergency contacts.
//!
//! Coordinates are validated here, at the boundary, so the filter pipeline
//! underneath stays a total function. A search with no matches is a 200
//! with an empty list — only malformed input produces an error.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::directory::{Doctor, EmergencyContact, Hospital, EMERGENCY_CONTACTS};
use crate::geo::Location;

#[derive(Deserialize)]
pub struct DoctorSearchParams {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub specialization: Option<String>,
}

#[derive(Serialize)]
pub struct DoctorSearchResponse {
    pub doctors: Vec<Doctor>,
}

/// `GET /api/doctors?lat=..&lng=..&specialization=..` — proximity search.
pub async fn search_doctors(
    State(ctx): State<ApiContext>,
    Query(params): Query<DoctorSearchParams>,
) -> Result<Json<DoctorSearchResponse>, ApiError> {
    let specialization = params
        .specialization
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Specialization cannot be empty".into()))?;

    let location = require_location(params.lat, params.lng)?;

    let doctors = ctx.roster.find_specialists(location, specialization);
    tracing::info!(
        specialization,
        matches = doctors.len(),
        "doctor search completed"
    );

    Ok(Json(DoctorSearchResponse { doctors }))
}

#[derive(Deserialize)]
pub struct HospitalParams {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[derive(Serialize)]
pub struct HospitalListResponse {
    pub hospitals: Vec<Hospital>,
}

/// `GET /api/hospitals?lat=..&lng=..` — nearby hospitals.
///
/// The backing lookup currently ignores the location, but the coordinate
/// contract is enforced now so a real lookup can slot in unchanged.
pub async fn list_hospitals(
    State(ctx): State<ApiContext>,
    Query(params): Query<HospitalParams>,
) -> Result<Json<HospitalListResponse>, ApiError> {
    let location = require_location(params.lat, params.lng)?;
    Ok(Json(HospitalListResponse {
        hospitals: ctx.roster.list_hospitals(location),
    }))
}

#[derive(Serialize)]
pub struct EmergencyContactsResponse {
    pub contacts: &'static [EmergencyContact],
}

/// `GET /api/emergency-contacts` — national emergency numbers.
pub async fn emergency_contacts() -> Json<EmergencyContactsResponse> {
    Json(EmergencyContactsResponse {
        contacts: EMERGENCY_CONTACTS,
    })
}

/// Both coordinates present, finite, and within geographic range.
fn require_location(lat: Option<f64>, lng: Option<f64>) -> Result<Location, ApiError> {
    let (lat, lng) = match (lat, lng) {
        (Some(lat), Some(lng)) => (lat, lng),
        _ => {
            return Err(ApiError::BadRequest(
                "Both lat and lng query parameters are required".into(),
            ))
        }
    };
    let location = Location::new(lat, lng);
    if !location.is_valid() {
        return Err(ApiError::BadRequest(format!(
            "Coordinates out of range: lat={lat}, lng={lng}"
        )));
    }
    Ok(location)
}
