//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`. CORS is permissive — the API serves a
//! public-information frontend and carries no credentials.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the API router.
pub fn api_router(ctx: ApiContext) -> Router {
    let routes = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/doctors", get(endpoints::directory::search_doctors))
        .route("/hospitals", get(endpoints::directory::list_hospitals))
        .route(
            "/emergency-contacts",
            get(endpoints::directory::emergency_contacts),
        )
        .route("/first-aid", post(endpoints::advisory::first_aid))
        .route(
            "/symptom-assessment",
            post(endpoints::advisory::symptom_assessment),
        )
        .with_state(ctx);

    Router::new()
        .nest("/api", routes)
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;
    use crate::advisory::{LlmClient, MockLlmClient, FIRST_AID_DISCLAIMER};
    use crate::directory::Roster;

    fn test_router_with(llm: impl LlmClient + 'static) -> Router {
        let ctx = ApiContext::new(
            Arc::new(Roster::aligarh_sample()),
            Arc::new(llm),
            "llama3:8b".to_string(),
        );
        api_router(ctx)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let app = test_router_with(MockLlmClient::new(""));
        let response = app.oneshot(get_request("/api/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn doctor_search_returns_matching_cardiologists() {
        let app = test_router_with(MockLlmClient::new(""));
        let response = app
            .oneshot(get_request(
                "/api/doctors?lat=27.9045&lng=78.0852&specialization=Cardiologist",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let names: Vec<&str> = json["doctors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Dr. Anika Verma", "Dr. Vikram Singh"]);
    }

    #[tokio::test]
    async fn doctor_search_is_case_insensitive() {
        let app = test_router_with(MockLlmClient::new(""));
        let response = app
            .oneshot(get_request(
                "/api/doctors?lat=27.9045&lng=78.0852&specialization=cardiologist",
            ))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["doctors"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn doctor_search_far_away_is_empty_200() {
        let app = test_router_with(MockLlmClient::new(""));
        let response = app
            .oneshot(get_request(
                "/api/doctors?lat=0.0&lng=0.0&specialization=Cardiologist",
            ))
            .await
            .unwrap();
        // Zero matches is a success outcome, not an error.
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["doctors"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn doctor_search_blank_specialization_is_400() {
        let app = test_router_with(MockLlmClient::new(""));
        let response = app
            .oneshot(get_request("/api/doctors?lat=27.9&lng=78.08&specialization=+"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn doctor_search_invalid_coordinates_is_400() {
        let app = test_router_with(MockLlmClient::new(""));
        let response = app
            .oneshot(get_request(
                "/api/doctors?lat=120.0&lng=78.08&specialization=Cardiologist",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn hospitals_listed_with_valid_coordinates() {
        let app = test_router_with(MockLlmClient::new(""));
        let response = app
            .oneshot(get_request("/api/hospitals?lat=27.9&lng=78.08"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["hospitals"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn emergency_contacts_listed() {
        let app = test_router_with(MockLlmClient::new(""));
        let response = app
            .oneshot(get_request("/api/emergency-contacts"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["contacts"][0]["number"], "112");
        assert_eq!(json["contacts"][1]["number"], "108");
    }

    #[tokio::test]
    async fn first_aid_round_trip_with_mock_model() {
        let app = test_router_with(MockLlmClient::new("1. Rinse under cool water."));
        let response = app
            .oneshot(post_json(
                "/api/first-aid",
                serde_json::json!({ "query": "minor burn" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let advice = json["advice"].as_str().unwrap();
        assert!(advice.starts_with("1. Rinse"));
        assert!(advice.ends_with(FIRST_AID_DISCLAIMER));
    }

    #[tokio::test]
    async fn first_aid_empty_query_is_400() {
        let app = test_router_with(MockLlmClient::new("unused"));
        let response = app
            .oneshot(post_json("/api/first-aid", serde_json::json!({ "query": "  " })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn first_aid_upstream_failure_is_502() {
        let app = test_router_with(MockLlmClient::failing());
        let response = app
            .oneshot(post_json(
                "/api/first-aid",
                serde_json::json!({ "query": "bee sting" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "UPSTREAM_FAILURE");
    }

    #[tokio::test]
    async fn symptom_assessment_round_trip_with_mock_model() {
        let app = test_router_with(MockLlmClient::new(
            "```json\n{\"possible_diagnoses\": \"Common cold\", \
             \"suggested_medicines\": \"Paracetamol\"}\n```",
        ));
        let response = app
            .oneshot(post_json(
                "/api/symptom-assessment",
                serde_json::json!({ "symptoms": "runny nose and sneezing" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["possible_diagnoses"], "Common cold");
        assert_eq!(json["suggested_medicines"], "Paracetamol");
    }

    #[tokio::test]
    async fn symptom_assessment_unparseable_completion_is_502() {
        let app = test_router_with(MockLlmClient::new("probably a cold"));
        let response = app
            .oneshot(post_json(
                "/api/symptom-assessment",
                serde_json::json!({ "symptoms": "fever" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
