use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use bbcars_backend::{build_router, config::Config, AppState};
use governor::Quota;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "FRONTEND_DIST" => Some("/nonexistent/bbcars-dist".to_string()),
        _ => None,
    })
    .unwrap()
}

fn app() -> Router {
    build_router(Arc::new(AppState::new(test_config()))).unwrap()
}

async fn get(app: &Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, String::from_utf8(body.to_vec()).unwrap())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, _, body) = get(app, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}

async fn post_lead(app: &Router, lead: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/leads")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(lead.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

fn ids(cars: &Value) -> Vec<&str> {
    cars.as_array().unwrap().iter().map(|car| car["id"].as_str().unwrap()).collect()
}

#[tokio::test]
async fn health_check_answers_ok() {
    let (status, _, body) = get(&app(), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn filters_cars_by_brand() {
    let (status, cars) = get_json(&app(), "/api/cars?brand=Porsche").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&cars), ["porsche-911-gt3"]);
    assert_eq!(cars[0]["price_czk"], 6_490_000);
}

#[tokio::test]
async fn price_window_keeps_showroom_order() {
    let (_, cars) = get_json(&app(), "/api/cars?price_from=5000000&price_to=7000000").await;
    assert_eq!(ids(&cars), ["porsche-911-gt3", "mercedes-g63-amg"]);
}

#[tokio::test]
async fn sorts_cars_by_price() {
    let app = app();
    let (_, ascending) = get_json(&app, "/api/cars?sort=price_asc").await;
    let ascending = ids(&ascending);
    assert_eq!(ascending.first(), Some(&"bmw-m4-comp"));
    assert_eq!(ascending.last(), Some(&"ferrari-296-gtb"));

    let (_, descending) = get_json(&app, "/api/cars?sort=price_desc&lang=en").await;
    assert_eq!(ids(&descending).first(), Some(&"ferrari-296-gtb"));
}

#[tokio::test]
async fn car_detail_and_missing_car() {
    let app = app();
    let (status, car) = get_json(&app, "/api/cars/porsche-911-gt3?lang=en").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(car["brand"], "Porsche");
    assert_eq!(car["related"].as_array().unwrap().len(), 4);

    let (status, error) = get_json(&app, "/api/cars/trabant-601").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(error["error"].is_string());
}

#[tokio::test]
async fn lists_and_reads_articles() {
    let app = app();
    let (_, articles) = get_json(&app, "/api/articles?lang=en").await;
    assert_eq!(articles.as_array().unwrap().len(), 3);

    let (status, article) = get_json(&app, "/api/articles/vykup-bez-starosti?lang=en").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!article["body"].as_array().unwrap().is_empty());

    let (status, _) = get_json(&app, "/api/articles/nothing-here").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_api_path_is_json_404() {
    let (status, error) = get_json(&app(), "/api/garage").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(error["error"].is_string());
}

#[tokio::test]
async fn accepts_valid_lead() {
    let (status, receipt) = post_lead(
        &app(),
        json!({"kind": "contact", "name": "Jana", "email": "jana@example.com", "message": "Dobrý den"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(receipt["reference"].as_str().unwrap().len(), 36);
}

#[tokio::test]
async fn rejects_invalid_lead_with_field() {
    let (status, error) = post_lead(
        &app(),
        json!({"kind": "car_inquiry", "car_id": "bmw-m4-comp", "email": "not-an-email", "phone": "605034911"}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error["field"], "email");
}

#[tokio::test]
async fn rate_limits_repeated_leads() {
    let app = app();
    let lead = json!({
        "kind": "buyout",
        "brand_model": "Audi RS6",
        "year": "2021",
        "mileage": "40 000 km",
        "phone": "+420 777 123 456"
    });
    for _ in 0..5 {
        let (status, _) = post_lead(&app, lead.clone()).await;
        assert_eq!(status, StatusCode::OK);
    }
    let (status, _) = post_lead(&app, lead).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn pruning_forgets_senders_once_their_quota_refills() {
    let quota = Quota::with_period(Duration::from_millis(20)).unwrap();
    let state = Arc::new(AppState::with_lead_quota(test_config(), quota));
    let app = build_router(state.clone()).unwrap();
    for i in 0..50 {
        let (status, _) = post_lead(&app, json!({
            "kind": "contact",
            "name": "Jan",
            "email": format!("sender{i}@example.cz"),
            "message": "Dobrý den"
        }))
        .await;
        assert_eq!(status, StatusCode::OK);
    }
    assert_eq!(state.lead_limiter.get("contact").unwrap().len(), 50);

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(state.prune_lead_limiters(), 0);
    assert_eq!(state.lead_limiter.get("contact").unwrap().len(), 0);
}

#[tokio::test]
async fn renders_vehicle_page_head() {
    let (status, _, html) = get(&app(), "/cs/auto/porsche-911-gt3").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<html lang=\"cs\""));
    assert!(html.contains("<title>Porsche 911 GT3 (992) (2023) | BBCars</title>"));
    assert!(html.contains("<link rel=\"canonical\" href=\"https://bbcars.eu/cs/auto/porsche-911-gt3\">"));
    assert_eq!(html.matches("id=\"json-ld-schema\"").count(), 1);
}

#[tokio::test]
async fn redirects_unknown_pages() {
    let app = app();
    let (status, headers, _) = get(&app, "/cs/auto/trabant-601").await;
    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(headers[header::LOCATION], "/cs");

    let (status, headers, _) = get(&app, "/inventory").await;
    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(headers[header::LOCATION], "/cs/inventory");

    let (_, headers, _) = get(&app, "/").await;
    assert_eq!(headers[header::LOCATION], "/cs");
}

#[tokio::test]
async fn sitemap_and_robots() {
    let app = app();
    let (status, headers, xml) = get(&app, "/sitemap.xml").await;
    assert_eq!(status, StatusCode::OK);
    assert!(headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("application/xml"));
    assert!(xml.contains("<loc>https://bbcars.eu/en/journal/gt3-na-okruhu</loc>"));
    assert!(xml.contains("<loc>https://bbcars.eu/cs/custom-order</loc>"));

    let (_, _, robots) = get(&app, "/robots.txt").await;
    assert!(robots.contains("Sitemap: https://bbcars.eu/sitemap.xml"));
}
