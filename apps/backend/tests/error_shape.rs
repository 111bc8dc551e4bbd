//! Stable error contract: RFC7807 bodies with trace id parity.

use actix_web::http::StatusCode;
use actix_web::test;
use backend::test_support::{build_test_state, create_test_app_builder};
use serde_json::Value;

#[actix_web::test]
async fn not_found_responses_use_problem_details_contract() {
    let state = build_test_state().await.expect("build test state");
    let app = create_test_app_builder(state)
        .with_prod_routes()
        .build()
        .await
        .expect("build test app");

    let req = test::TestRequest::get().uri("/consoles/0").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        resp.headers()
            .get("content-type")
            .expect("content-type header")
            .to_str()
            .unwrap(),
        "application/problem+json"
    );

    let request_id = resp
        .headers()
        .get("x-request-id")
        .expect("x-request-id header")
        .to_str()
        .unwrap()
        .to_string();
    let trace_id_header = resp
        .headers()
        .get("x-trace-id")
        .expect("x-trace-id header")
        .to_str()
        .unwrap()
        .to_string();

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "CONSOLE_NOT_FOUND");
    assert_eq!(body["status"], 404);
    assert_eq!(body["title"], "Console Not Found");
    assert_eq!(
        body["type"],
        "https://gameshelf.app/errors/CONSOLE_NOT_FOUND"
    );

    // The id minted by the middleware flows through header and body alike
    assert_eq!(body["trace_id"], trace_id_header.as_str());
    assert_eq!(trace_id_header, request_id);
}

#[actix_web::test]
async fn validation_responses_carry_a_trace_id() {
    let state = build_test_state().await.expect("build test state");
    let app = create_test_app_builder(state)
        .with_prod_routes()
        .build()
        .await
        .expect("build test app");

    let req = test::TestRequest::post().uri("/consoles").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_ne!(body["trace_id"], "unknown");
}
