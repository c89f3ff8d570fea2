use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use httpmock::prelude::*;
use serde_json::{json, Value};
use tower::ServiceExt;

use backend::config::env_config::Config;
use backend::{app, AppState};

fn config_for(telegram: Option<&MockServer>) -> Config {
    Config {
        telegram_bot_token: telegram.map(|_| "123:abc".to_string()).unwrap_or_default(),
        telegram_chat_id: telegram.map(|_| "42".to_string()).unwrap_or_default(),
        telegram_api_base: telegram
            .map(|server| server.base_url())
            .unwrap_or_else(|| "http://127.0.0.1:9".to_string()),
        bind_addr: "127.0.0.1".to_string(),
        port: 5000,
        static_dir: None,
        sentry_dsn: None,
    }
}

fn router(config: Config) -> Router {
    app(Arc::new(AppState::new(config).unwrap()))
}

async fn post_json(router: Router, body: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/submit")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn forwarded_lead_reports_success() {
    let telegram = MockServer::start();
    let send = telegram.mock(|when, then| {
        when.method(POST)
            .path("/bot123:abc/sendMessage")
            .body_contains("Иван")
            .body_contains("+7 (999) 123-45-67")
            .body_contains("\"parse_mode\":\"HTML\"");
        then.status(200).json_body(json!({"ok": true, "result": {"message_id": 1}}));
    });

    let (status, body) = post_json(
        router(config_for(Some(&telegram))),
        r#"{"name": "  Иван ", "phone": "+7 (999) 123-45-67"}"#,
    )
    .await;

    send.assert();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "message": "Заявка успешно отправлена!"}));
}

#[tokio::test]
async fn telegram_rejection_is_hidden_from_visitor() {
    let telegram = MockServer::start();
    let send = telegram.mock(|when, then| {
        when.method(POST).path("/bot123:abc/sendMessage");
        then.status(400)
            .json_body(json!({"ok": false, "error_code": 400, "description": "chat not found"}));
    });

    let (status, body) = post_json(
        router(config_for(Some(&telegram))),
        r#"{"name": "Иван", "phone": "123"}"#,
    )
    .await;

    send.assert();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "message": "Заявка получена!"}));
}

#[tokio::test]
async fn unreachable_telegram_still_accepts_lead() {
    let mut config = config_for(None);
    config.telegram_bot_token = "123:abc".to_string();
    config.telegram_chat_id = "42".to_string();

    let (status, body) = post_json(router(config), r#"{"name": "Иван", "phone": "123"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
}

#[tokio::test]
async fn empty_fields_are_rejected_without_forwarding() {
    let telegram = MockServer::start();
    let send = telegram.mock(|when, then| {
        when.method(POST);
        then.status(200).json_body(json!({"ok": true}));
    });

    let (status, body) = post_json(
        router(config_for(Some(&telegram))),
        r#"{"name": "   ", "phone": "123"}"#,
    )
    .await;

    send.assert_hits(0);
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"success": false, "error": "Имя и телефон обязательны для заполнения"})
    );
}

#[tokio::test]
async fn absent_fields_count_as_empty() {
    let (status, body) = post_json(router(config_for(None)), r#"{"name": "Иван"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn malformed_phone_is_rejected() {
    let (status, body) = post_json(
        router(config_for(None)),
        r#"{"name": "Иван", "phone": "call me"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"success": false, "error": "Некорректный номер телефона"}));
}

#[tokio::test]
async fn unparseable_body_is_a_processing_error() {
    let (status, body) = post_json(router(config_for(None)), "not json").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"success": false, "error": "Произошла ошибка при обработке заявки"})
    );
}

#[tokio::test]
async fn unconfigured_bot_accepts_lead_without_forwarding() {
    let (status, body) = post_json(
        router(config_for(None)),
        r#"{"name": "Иван", "phone": "123"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "message": "Заявка получена!"}));
}

#[tokio::test]
async fn health_reports_bot_configuration() {
    let telegram = MockServer::start();
    for (config, expected) in [(config_for(None), false), (config_for(Some(&telegram)), true)] {
        let response = router(config)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({"status": "ok", "bot_configured": expected}));
    }
}

#[tokio::test]
async fn cors_preflight_allows_any_origin() {
    let response = router(config_for(None))
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/submit")
                .header(header::ORIGIN, "https://pybot.example")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn static_site_is_served_without_caching() {
    let dir: PathBuf = std::env::temp_dir().join("lead-relay-static-site-test");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("index.html"), "<h1>PyBot AI</h1>").unwrap();

    let mut config = config_for(None);
    config.static_dir = Some(dir);

    let response = router(config)
        .oneshot(Request::builder().uri("/index.html").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "no-cache, no-store, must-revalidate"
    );
    assert_eq!(response.headers().get(header::PRAGMA).unwrap(), "no-cache");
    assert_eq!(response.headers().get(header::EXPIRES).unwrap(), "0");
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"<h1>PyBot AI</h1>");
}
