//! Integration tests for the HTTP metrics surface: route dispatch, body
//! rendering, and failure collapsing, using stub reading sources.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use echonet_rs::exporter::{router, AppState, MetricsSource, METRICS_FAILURE_BODY};
use echonet_rs::{BatteryMetrics, EchonetError, PvMetrics};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Source whose devices always answer.
struct HealthySource;

#[async_trait]
impl MetricsSource for HealthySource {
    async fn battery(&self) -> Result<BatteryMetrics, EchonetError> {
        Ok(BatteryMetrics {
            electricity_flow: -100,
            state_of_charge: 80,
        })
    }

    async fn photovoltaic(&self) -> Result<PvMetrics, EchonetError> {
        Ok(PvMetrics {
            generated_electricity: 1000,
        })
    }
}

/// Source whose battery never replies (receive timeout). The photovoltaic
/// query must not run after the battery has already failed.
struct UnreachableSource;

#[async_trait]
impl MetricsSource for UnreachableSource {
    async fn battery(&self) -> Result<BatteryMetrics, EchonetError> {
        Err(EchonetError::Transport("no reply within 5s".to_string()))
    }

    async fn photovoltaic(&self) -> Result<PvMetrics, EchonetError> {
        unreachable!("photovoltaic must not be queried after a battery failure")
    }
}

/// Source whose inverter answers with the wrong property count.
struct MismatchSource;

#[async_trait]
impl MetricsSource for MismatchSource {
    async fn battery(&self) -> Result<BatteryMetrics, EchonetError> {
        Ok(BatteryMetrics {
            electricity_flow: 100,
            state_of_charge: 80,
        })
    }

    async fn photovoltaic(&self) -> Result<PvMetrics, EchonetError> {
        Err(EchonetError::PropertyCountMismatch {
            expected: 1,
            observed: 0,
        })
    }
}

async fn get(source: impl MetricsSource + 'static, uri: &str) -> (StatusCode, String) {
    let response = router(AppState::new(source))
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

/// Tests that `/healthcheck` answers `200 ok` without touching any device.
#[tokio::test]
async fn test_healthcheck() {
    let (status, body) = get(HealthySource, "/healthcheck").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

/// Tests that `/healthcheck` stays healthy while every device is unreachable.
#[tokio::test]
async fn test_healthcheck_with_unreachable_devices() {
    let (status, body) = get(UnreachableSource, "/healthcheck").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

/// Tests that `/metrics` renders the three plain-text metric lines.
#[tokio::test]
async fn test_metrics_success() {
    let (status, body) = get(HealthySource, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        "battery_state_of_charge 80\nbattery_electricity_flow -100\npv_generated_electricity 1000\n"
    );
}

/// Tests that a transport failure collapses into a 500 with the fixed body.
#[tokio::test]
async fn test_metrics_transport_failure() {
    let (status, body) = get(UnreachableSource, "/metrics").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, METRICS_FAILURE_BODY);
}

/// Tests that a protocol mismatch collapses into the same generic 500.
#[tokio::test]
async fn test_metrics_protocol_mismatch() {
    let (status, body) = get(MismatchSource, "/metrics").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, METRICS_FAILURE_BODY);
}

/// Tests that unknown paths answer `404` with the body `404`.
#[tokio::test]
async fn test_unknown_path() {
    let (status, body) = get(HealthySource, "/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "404");
}
