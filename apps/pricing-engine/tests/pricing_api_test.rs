//! End-to-end API tests.
//!
//! Drives the full HTTP surface through the router: replace the
//! configuration over PUT, then price products over POST exactly as the
//! storefront and admin UI would.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use pricing_engine::application::dto::PriceBreakdownDto;
use pricing_engine::application::use_cases::{
    CalculatePriceUseCase, GetConfigurationUseCase, UpdateConfigurationUseCase,
};
use pricing_engine::domain::pricing_config::{ConfigurationRepository, PricingConfiguration};
use pricing_engine::infrastructure::http::{AppState, create_router};
use pricing_engine::infrastructure::persistence::InMemoryConfigurationRepository;
use rust_decimal_macros::dec;
use tower::ServiceExt;

fn build_app(repo: Arc<InMemoryConfigurationRepository>) -> Router {
    let state = AppState {
        get_configuration: Arc::new(GetConfigurationUseCase::new(Arc::clone(&repo))),
        update_configuration: Arc::new(UpdateConfigurationUseCase::new(Arc::clone(&repo))),
        calculate_price: Arc::new(CalculatePriceUseCase::new(repo)),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    create_router(state)
}

async fn seeded_app() -> (Router, Arc<InMemoryConfigurationRepository>) {
    let repo = Arc::new(InMemoryConfigurationRepository::new());
    repo.replace(&PricingConfiguration::default_configuration())
        .await
        .unwrap();
    (build_app(Arc::clone(&repo)), repo)
}

fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// The wire form of a full catalog: 14K white gold with a natural
/// per-carat diamond, every cost dial engaged, a size-8 surcharge, a
/// 30% margin, and no price floor.
fn catalog_ruleset() -> serde_json::Value {
    serde_json::json!({
        "compositionRates": [
            {
                "composition": "14K",
                "pricePerGram": 50,
                "enabled": true,
                "materialMultipliers": [
                    { "material": "yellow-gold", "priceMultiplier": 1.0 },
                    { "material": "white-gold", "priceMultiplier": 1.1 }
                ]
            },
            {
                "composition": "18K",
                "pricePerGram": 65,
                "enabled": false,
                "materialMultipliers": [
                    { "material": "yellow-gold", "priceMultiplier": 1.0 }
                ]
            }
        ],
        "diamondPricing": [
            { "diamondType": "none", "enabled": true, "pricingMethod": "fixed", "basePrice": 0 },
            {
                "diamondType": "natural",
                "enabled": true,
                "pricingMethod": "per-carat",
                "basePrice": 100,
                "pricePerCarat": 200
            },
            {
                "diamondType": "lab-grown",
                "enabled": false,
                "pricingMethod": "per-carat",
                "basePrice": 50,
                "pricePerCarat": 120
            }
        ],
        "ringSizeAdjustments": { "8": 5 },
        "additionalCosts": {
            "laborCost": 50,
            "makingCharges": 30,
            "otherCharges": 10,
            "profitMarginPercentage": 30,
            "minimumPrice": 0
        }
    })
}

#[tokio::test]
async fn full_catalog_breakdown_over_http() {
    let (app, _repo) = seeded_app().await;

    let put = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/v1/configuration",
            &catalog_ruleset(),
        ))
        .await
        .unwrap();
    assert_eq!(put.status(), StatusCode::OK);

    let body = serde_json::json!({
        "weight": 5,
        "composition": "14K",
        "material": "white-gold",
        "diamondType": "natural",
        "diamondCarat": 0.5,
        "ringSize": "8"
    });
    let response = app
        .oneshot(json_request("POST", "/api/v1/calculate", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let breakdown: PriceBreakdownDto = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(breakdown.metal_cost, dec!(275.00));
    assert_eq!(breakdown.diamond_cost, dec!(200.00));
    assert_eq!(breakdown.labor_and_making_cost, dec!(90.00));
    assert_eq!(breakdown.pre_adjustment_subtotal, dec!(565.00));
    assert_eq!(breakdown.ring_size_adjustment_amount, dec!(28.25));
    assert_eq!(breakdown.subtotal, dec!(593.25));
    assert_eq!(breakdown.profit_amount, dec!(177.975));
    assert_eq!(breakdown.final_price, dec!(771.23));
}

#[tokio::test]
async fn disabled_composition_is_rejected_without_partial_price() {
    let (app, _repo) = seeded_app().await;

    app.clone()
        .oneshot(json_request(
            "PUT",
            "/api/v1/configuration",
            &catalog_ruleset(),
        ))
        .await
        .unwrap();

    let body = serde_json::json!({
        "weight": 5,
        "composition": "18K",
        "material": "yellow-gold"
    });
    let response = app
        .oneshot(json_request("POST", "/api/v1/calculate", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "COMPOSITION_DISABLED");
    assert!(json.get("finalPrice").is_none());
}

#[tokio::test]
async fn none_diamond_ignores_supplied_carat() {
    let (app, _repo) = seeded_app().await;

    app.clone()
        .oneshot(json_request(
            "PUT",
            "/api/v1/configuration",
            &catalog_ruleset(),
        ))
        .await
        .unwrap();

    let body = serde_json::json!({
        "weight": 5,
        "composition": "14K",
        "material": "yellow-gold",
        "diamondType": "none",
        "diamondCarat": 2.0
    });
    let response = app
        .oneshot(json_request("POST", "/api/v1/calculate", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let breakdown: PriceBreakdownDto = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(breakdown.diamond_cost, dec!(0));
}

#[tokio::test]
async fn put_of_current_document_is_a_noop_replace() {
    let (app, _repo) = seeded_app().await;

    let current = app
        .clone()
        .oneshot(get_request("/api/v1/configuration"))
        .await
        .unwrap();
    assert_eq!(current.status(), StatusCode::OK);
    let current = body_json(current).await;

    // The full document round-trips as a PUT body; the server-managed
    // version and timestamps are ignored on write.
    let response = app
        .clone()
        .oneshot(json_request("PUT", "/api/v1/configuration", &current))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let replaced = body_json(response).await;
    assert_eq!(replaced["version"], 2);
    assert_eq!(replaced["compositionRates"], current["compositionRates"]);
    assert_eq!(replaced["diamondPricing"], current["diamondPricing"]);
    assert_eq!(replaced["additionalCosts"], current["additionalCosts"]);
}

#[tokio::test]
async fn rejected_put_keeps_prices_stable() {
    let (app, _repo) = seeded_app().await;

    let body = serde_json::json!({
        "weight": 5,
        "composition": "14K",
        "material": "yellow-gold"
    });
    let before = app
        .clone()
        .oneshot(json_request("POST", "/api/v1/calculate", &body))
        .await
        .unwrap();
    let before = body_json(before).await;

    let mut bad = catalog_ruleset();
    bad["compositionRates"][0]["pricePerGram"] = serde_json::json!(-1);
    let put = app
        .clone()
        .oneshot(json_request("PUT", "/api/v1/configuration", &bad))
        .await
        .unwrap();
    assert_eq!(put.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let err = body_json(put).await;
    assert_eq!(err["code"], "VALIDATION_ERROR");
    assert_eq!(err["fieldPath"], "compositionRates[0].pricePerGram");

    let after = app
        .oneshot(json_request("POST", "/api/v1/calculate", &body))
        .await
        .unwrap();
    let after = body_json(after).await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn options_reflect_enabled_flags() {
    let (app, _repo) = seeded_app().await;

    app.clone()
        .oneshot(json_request(
            "PUT",
            "/api/v1/configuration",
            &catalog_ruleset(),
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(get_request("/api/v1/configuration/options"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let compositions: Vec<&str> = json["compositions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["composition"].as_str().unwrap())
        .collect();
    assert_eq!(compositions, ["14K"]);

    let diamond_types: Vec<&str> = json["diamondTypes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["diamondType"].as_str().unwrap())
        .collect();
    assert_eq!(diamond_types, ["none", "natural"]);
}
