use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use patient_cell::{create_patient_router, mock_patients, PatientRegistry};
use shared_utils::test_utils::fixed_clock;

fn create_test_app() -> Router {
    let mut registry = PatientRegistry::new(fixed_clock());
    registry.seed(mock_patients()).unwrap();
    create_patient_router(registry.into_shared())
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn new_patient_body() -> Value {
    json!({
        "name": "Beatriz Rocha",
        "email": "beatriz.rocha@email.com",
        "phone": "(85) 93333-4444",
        "cpf": "222.333.444-55",
        "birth_date": "2010-12-01",
        "address": "Rua B, 20 - Benfica, Fortaleza/CE",
        "blood_type": "AB-"
    })
}

#[tokio::test]
async fn test_search_patients_by_email() {
    let app = create_test_app();

    let response = app.oneshot(get("/?search=MARIA@")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["patients"][0]["name"], "Lívia Acácio");
}

#[tokio::test]
async fn test_patient_stats_reflect_new_minor() {
    let app = create_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(new_patient_body().to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["blood_type"], "AB-");

    let response = app.oneshot(get("/stats")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "total": 4, "adults": 2, "minors": 2 })
    );
}

#[tokio::test]
async fn test_get_unknown_patient_is_not_found() {
    let app = create_test_app();

    let response = app.oneshot(get("/does-not-exist")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        "Patient does-not-exist not found"
    );
}

#[tokio::test]
async fn test_update_patient_with_blank_address_is_rejected() {
    let app = create_test_app();
    let mut body = new_patient_body();
    body["address"] = json!("   ");

    let request = Request::builder()
        .method("PUT")
        .uri("/1")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.oneshot(get("/1")).await.unwrap();
    assert_eq!(body_json(response).await["name"], "Uendel Martins");
}

#[tokio::test]
async fn test_unknown_blood_type_gets_error_envelope() {
    let app = create_test_app();
    let mut body = new_patient_body();
    body["blood_type"] = json!("C+");

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"].is_string());

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(body_json(response).await["total"], 3);
}
