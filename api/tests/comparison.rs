use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use clap::Parser;
use drfoodie_api::{application::http::server::http_server, args::Args};
use serde_json::{Value, json};

fn test_server() -> TestServer {
    let args = Arc::new(Args::parse_from([
        "drfoodie-api",
        "--gemini-api-key",
        "test-key",
    ]));
    let state = http_server::state(args).expect("state should build");
    let router = http_server::router(state).expect("router should build");

    TestServer::new(router)
}

fn food(name: &str, calories: f64, protein: f64) -> Value {
    json!({
        "foodName": name,
        "description": format!("{name} description"),
        "imageQuery": format!("fresh {name}"),
        "nutritionFacts": {
            "calories": calories,
            "protein": protein,
            "carbohydrates": 9.0,
            "fat": 15.0,
            "fiber": 7.0,
            "sugar": 0.7,
            "sodium": 7.0,
            "cholesterol": 0.0
        },
        "vitaminsAndMinerals": [
            { "name": "Potassium", "amount": "485mg", "percentDV": "10%" }
        ],
        "healthBenefits": ["Supports heart health"],
        "overuseWarnings": [],
        "healthierAlternatives": []
    })
}

#[tokio::test]
async fn health_endpoint_is_up() {
    let server = test_server();

    let res = server.get("/health").await;
    res.assert_status_ok();
    res.assert_json(&json!({ "status": "ok" }));
}

#[tokio::test]
async fn adding_a_food_projects_it_into_the_selection() {
    let server = test_server();

    let res = server
        .post("/comparison")
        .json(&food("Avocado", 160.0, 2.0))
        .await;
    res.assert_status(StatusCode::CREATED);

    let body: Value = res.json();
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["foodName"], "Avocado");
    assert_eq!(items[0]["imageQuery"], "fresh Avocado");
    // Only the four comparison nutrients survive the projection
    assert_eq!(
        items[0]["nutritionFacts"],
        json!({ "calories": 160.0, "protein": 2.0, "carbohydrates": 9.0, "fat": 15.0 })
    );
    assert!(items[0].get("healthBenefits").is_none());
}

#[tokio::test]
async fn duplicate_names_are_deduplicated_case_insensitively() {
    let server = test_server();

    server
        .post("/comparison")
        .json(&food("Avocado", 160.0, 2.0))
        .await
        .assert_status(StatusCode::CREATED);

    let res = server
        .post("/comparison")
        .json(&food("AVOCADO", 999.0, 9.0))
        .await;
    res.assert_status_ok();

    let body: Value = res.json();
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["nutritionFacts"]["calories"], 160.0);
}

#[tokio::test]
async fn removal_is_exact_match_and_clearing_empties_the_selection() {
    let server = test_server();

    server
        .post("/comparison")
        .json(&food("Avocado", 160.0, 2.0))
        .await
        .assert_status(StatusCode::CREATED);
    server
        .post("/comparison")
        .json(&food("Kale", 49.0, 4.3))
        .await
        .assert_status(StatusCode::CREATED);

    // Wrong casing does not match
    let res = server.delete("/comparison/avocado").await;
    res.assert_status_ok();
    let body: Value = res.json();
    assert_eq!(body["items"].as_array().unwrap().len(), 2);

    let res = server.delete("/comparison/Avocado").await;
    res.assert_status_ok();
    let body: Value = res.json();
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["foodName"], "Kale");

    let res = server.delete("/comparison").await;
    res.assert_status_ok();
    let body: Value = res.json();
    assert!(body["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn tied_column_maxima_are_all_highlighted() {
    let server = test_server();

    server
        .post("/comparison")
        .json(&food("Toast", 100.0, 3.0))
        .await
        .assert_status(StatusCode::CREATED);
    server
        .post("/comparison")
        .json(&food("Granola", 250.0, 8.0))
        .await
        .assert_status(StatusCode::CREATED);
    server
        .post("/comparison")
        .json(&food("Muesli", 250.0, 10.0))
        .await
        .assert_status(StatusCode::CREATED);

    let res = server.get("/comparison").await;
    res.assert_status_ok();

    let body: Value = res.json();
    assert_eq!(body["maxima"]["calories"], 250.0);
    assert_eq!(body["maxima"]["protein"], 10.0);

    let items = body["items"].as_array().unwrap();
    let calorie_flags: Vec<bool> = items
        .iter()
        .map(|item| item["highlights"]["calories"].as_bool().unwrap())
        .collect();
    assert_eq!(calorie_flags, vec![false, true, true]);

    let protein_flags: Vec<bool> = items
        .iter()
        .map(|item| item["highlights"]["protein"].as_bool().unwrap())
        .collect();
    assert_eq!(protein_flags, vec![false, false, true]);
}

#[tokio::test]
async fn comparing_fewer_than_two_foods_is_rejected_before_any_remote_call() {
    let server = test_server();

    let res = server
        .post("/food/compare")
        .json(&json!({ "foodNames": ["kale"] }))
        .await;
    res.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = res.json();
    assert_eq!(
        body["error"],
        "At least two foods are required for comparison."
    );
}
