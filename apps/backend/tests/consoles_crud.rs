mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use backend::repos::consoles as console_repo;
use backend::test_support::{build_test_state, create_test_app_builder};
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use backend_test_support::unique_helpers::unique_str;
use serde_json::{json, Value};

use crate::support::factory;

#[actix_web::test]
async fn get_consoles_responds_with_empty_array_when_no_rows() {
    let state = build_test_state().await.expect("build test state");
    let app = create_test_app_builder(state)
        .with_prod_routes()
        .build()
        .await
        .expect("build test app");

    let req = test::TestRequest::get().uri("/consoles").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn get_consoles_includes_created_console() {
    let state = build_test_state().await.expect("build test state");
    let console = factory::create_console(&state.db, None)
        .await
        .expect("seed console");
    let app = create_test_app_builder(state)
        .with_prod_routes()
        .build()
        .await
        .expect("build test app");

    let req = test::TestRequest::get().uri("/consoles").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let listed = body
        .as_array()
        .expect("array body")
        .iter()
        .any(|c| c["id"] == json!(console.id) && c["name"] == json!(console.name));
    assert!(listed, "created console should appear in listing: {body}");
}

#[actix_web::test]
async fn get_console_by_id_zero_responds_404() {
    let state = build_test_state().await.expect("build test state");
    let app = create_test_app_builder(state)
        .with_prod_routes()
        .build()
        .await
        .expect("build test app");

    let req = test::TestRequest::get().uri("/consoles/0").to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "CONSOLE_NOT_FOUND",
        StatusCode::NOT_FOUND,
        Some("not found"),
    )
    .await;
}

#[actix_web::test]
async fn get_console_by_inexistent_id_responds_404() {
    let state = build_test_state().await.expect("build test state");
    let console = factory::create_console(&state.db, None)
        .await
        .expect("seed console");
    let app = create_test_app_builder(state)
        .with_prod_routes()
        .build()
        .await
        .expect("build test app");

    let req = test::TestRequest::get()
        .uri(&format!("/consoles/{}", console.id + 1))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn get_console_by_id_responds_with_console() {
    let state = build_test_state().await.expect("build test state");
    let console = factory::create_console(&state.db, None)
        .await
        .expect("seed console");
    let app = create_test_app_builder(state)
        .with_prod_routes()
        .build()
        .await
        .expect("build test app");

    let req = test::TestRequest::get()
        .uri(&format!("/consoles/{}", console.id))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], json!(console.id));
    assert_eq!(body["name"], json!(console.name));
}

#[actix_web::test]
async fn post_console_without_body_responds_422() {
    let state = build_test_state().await.expect("build test state");
    let app = create_test_app_builder(state)
        .with_prod_routes()
        .build()
        .await
        .expect("build test app");

    let req = test::TestRequest::post().uri("/consoles").to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "VALIDATION_ERROR",
        StatusCode::UNPROCESSABLE_ENTITY,
        Some("Invalid JSON"),
    )
    .await;
}

#[actix_web::test]
async fn post_console_with_invalid_body_responds_422() {
    let state = build_test_state().await.expect("build test state");
    let app = create_test_app_builder(state)
        .with_prod_routes()
        .build()
        .await
        .expect("build test app");

    let req = test::TestRequest::post()
        .uri("/consoles")
        .set_json(json!({ "model": "PS5" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn post_console_with_empty_name_responds_422() {
    let state = build_test_state().await.expect("build test state");
    let app = create_test_app_builder(state)
        .with_prod_routes()
        .build()
        .await
        .expect("build test app");

    let req = test::TestRequest::post()
        .uri("/consoles")
        .set_json(json!({ "name": "  " }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn post_console_with_duplicate_name_responds_409() {
    let state = build_test_state().await.expect("build test state");
    let console = factory::create_console(&state.db, None)
        .await
        .expect("seed console");
    let app = create_test_app_builder(state)
        .with_prod_routes()
        .build()
        .await
        .expect("build test app");

    let req = test::TestRequest::post()
        .uri("/consoles")
        .set_json(json!({ "name": console.name }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "CONSOLE_NAME_TAKEN",
        StatusCode::CONFLICT,
        Some("already exists"),
    )
    .await;
}

#[actix_web::test]
async fn post_console_responds_201_and_persists_row() {
    let state = build_test_state().await.expect("build test state");
    let app = create_test_app_builder(state.clone())
        .with_prod_routes()
        .build()
        .await
        .expect("build test app");

    let name = unique_str("console");
    let req = test::TestRequest::post()
        .uri("/consoles")
        .set_json(json!({ "name": name }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["id"].as_i64().expect("numeric id") > 0);
    assert_eq!(body["name"], json!(name));

    // Retrievable by its unique field
    let persisted = console_repo::find_by_name(&state.db, &name)
        .await
        .expect("query persisted console")
        .expect("console should be persisted");
    assert_eq!(persisted.name, name);
    assert_eq!(json!(persisted.id), body["id"]);
}
