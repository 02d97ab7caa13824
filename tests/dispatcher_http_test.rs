use httpmock::prelude::*;
use logging_middleware::{ConfigOverrides, DispatcherConfig, LogDispatcher};
use std::time::{Duration, Instant};

fn dispatcher_for(url: String, overrides: ConfigOverrides) -> LogDispatcher {
    LogDispatcher::new(
        DispatcherConfig::default()
            .merged(ConfigOverrides::default().api_url(url))
            .merged(overrides),
    )
}

#[tokio::test]
async fn test_posts_lowercased_record_and_parses_response() {
    let server = MockServer::start();

    let log_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/logs")
            .header("content-type", "application/json")
            .json_body(serde_json::json!({
                "stack": "backend",
                "level": "error",
                "package": "handler",
                "message": "received string, expected bool"
            }));
        then.status(201)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "logID": "a4aad02e-19d0-4153-86b9-fd9ef4a2e2c1",
                "message": "log created successfully"
            }));
    });

    let dispatcher = dispatcher_for(server.url("/logs"), ConfigOverrides::default());
    let outcome = dispatcher
        .log("Backend", "ERROR", "Handler", "received string, expected bool")
        .await;

    log_mock.assert();
    let response = outcome.expect("delivery should succeed");
    assert_eq!(response.log_id, "a4aad02e-19d0-4153-86b9-fd9ef4a2e2c1");
    assert_eq!(response.message, "log created successfully");
}

#[tokio::test]
async fn test_invalid_record_sends_nothing() {
    let server = MockServer::start();
    let log_mock = server.mock(|when, then| {
        when.method(POST).path("/logs");
        then.status(200).json_body(serde_json::json!({"logID": "x", "message": "ok"}));
    });

    let dispatcher = dispatcher_for(server.url("/logs"), ConfigOverrides::default());
    let outcome = dispatcher.error("frontend", "db", "x").await;

    assert!(outcome.is_none());
    log_mock.assert_hits(0);
}

#[tokio::test]
async fn test_server_error_exhausts_retries() {
    let server = MockServer::start();
    let log_mock = server.mock(|when, then| {
        when.method(POST).path("/logs");
        then.status(500);
    });

    let dispatcher = dispatcher_for(
        server.url("/logs"),
        ConfigOverrides::default().retries(2).enable_console_logging(false),
    );

    let started = Instant::now();
    let outcome = dispatcher.info("backend", "service", "retry me").await;

    assert!(outcome.is_none());
    log_mock.assert_hits(2);
    assert!(started.elapsed() >= Duration::from_secs(1));
}

#[tokio::test]
async fn test_malformed_response_counts_as_failed_attempt() {
    let server = MockServer::start();
    let log_mock = server.mock(|when, then| {
        when.method(POST).path("/logs");
        then.status(200).body("not json");
    });

    let dispatcher = dispatcher_for(server.url("/logs"), ConfigOverrides::default().retries(1));
    let outcome = dispatcher.warn("frontend", "api", "bad body").await;

    assert!(outcome.is_none());
    log_mock.assert_hits(1);
}

#[tokio::test]
async fn test_slow_endpoint_is_aborted_at_timeout() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/logs");
        then.status(200)
            .delay(Duration::from_secs(3))
            .json_body(serde_json::json!({"logID": "late", "message": "too late"}));
    });

    let dispatcher = dispatcher_for(
        server.url("/logs"),
        ConfigOverrides::default().timeout_ms(100).retries(1),
    );

    let started = Instant::now();
    let outcome = dispatcher.debug("backend", "cache", "slow").await;

    assert!(outcome.is_none());
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn test_default_dispatcher_follows_config_updates() {
    let server = MockServer::start();
    let log_mock = server.mock(|when, then| {
        when.method(POST).path("/default");
        then.status(200)
            .json_body(serde_json::json!({
                "logID": "default-1",
                "message": "log created successfully"
            }));
    });

    logging_middleware::update_dispatcher_config(
        ConfigOverrides::default()
            .api_url(server.url("/default"))
            .retries(1),
    );

    let config = logging_middleware::default_dispatcher().config();
    assert_eq!(config.api_url, server.url("/default"));
    assert_eq!(config.timeout_ms, 5000);

    let outcome = logging_middleware::log_fatal("frontend", "state", "store corrupted").await;
    assert_eq!(outcome.map(|r| r.log_id), Some("default-1".to_string()));

    let rejected = logging_middleware::log("backend", "verbose", "db", "x").await;
    assert!(rejected.is_none());

    log_mock.assert_hits(1);
}
