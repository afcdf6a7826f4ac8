//! End-to-end checks of `Cashier` over HTTP against a mocked Stripe API.

use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cashier::{Cashier, CashierConfig, CashierError, PlanCriteria, ProductId};

fn plan_json(id: &str, amount: i64, interval: &str) -> serde_json::Value {
    json!({
        "id": id,
        "object": "plan",
        "active": true,
        "amount": amount,
        "currency": "usd",
        "interval": interval,
        "interval_count": 1,
        "product": "prod_1"
    })
}

fn cashier_for(server: &MockServer) -> Cashier {
    let config =
        CashierConfig::new("sk_test_123").with_api_base(format!("{}/v1", server.uri()));
    Cashier::from_config(&config).expect("Failed to create cashier")
}

#[tokio::test]
async fn find_plan_follows_cursor_over_http() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/plans"))
        .and(query_param("product", "prod_1"))
        .and(query_param_is_missing("starting_after"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "has_more": true,
            "data": [plan_json("plan_a", 500, "month"), plan_json("plan_b", 1000, "year")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/plans"))
        .and(query_param("starting_after", "plan_b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "has_more": false,
            "data": [plan_json("plan_c", 1000, "month")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let product: ProductId = "prod_1".parse().unwrap();
    let found = cashier_for(&server)
        .find_plan(&product, &PlanCriteria::new(1000, "month"))
        .await
        .unwrap();

    assert_eq!(found.unwrap().id.as_str(), "plan_c");
}

#[tokio::test]
async fn rate_limit_is_passed_through_without_retry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/plans"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {
                "type": "invalid_request_error",
                "code": "rate_limit",
                "message": "Too many requests"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let product: ProductId = "prod_1".parse().unwrap();
    let err = cashier_for(&server)
        .find_plan(&product, &PlanCriteria::new(1000, "month"))
        .await
        .unwrap_err();

    match err {
        CashierError::Stripe(stripe) => {
            assert_eq!(stripe.status(), Some(429));
            assert_eq!(stripe.code(), Some("rate_limit"));
        }
        other => panic!("expected Stripe error, got {other:?}"),
    }
}
