//! Probe classification and cycle aggregation against live local servers.

use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use availability_monitor::config::EndpointDefinition;
use availability_monitor::cycle::CycleRunner;
use availability_monitor::probe::ProbeOutcome;
use availability_monitor::store::{DomainStatus, DomainStatusStore};

mod common;

fn runner(endpoints: Vec<EndpointDefinition>, timeout_ms: u64) -> CycleRunner {
    CycleRunner::new(
        endpoints,
        common::test_prober(timeout_ms),
        Arc::new(DomainStatusStore::new()),
    )
}

#[tokio::test]
async fn test_fast_200_is_up() {
    let backend = common::start_mock_backend(200, Duration::from_millis(100)).await;
    let runner = runner(vec![backend.endpoint("pass-200")], 5000);

    let summary = runner.run_cycle().await;

    assert_eq!(summary.up, 1);
    assert_eq!(
        runner.store().get("127.0.0.1"),
        Some(DomainStatus { requests: 1, up_count: 1 })
    );
    assert_eq!(backend.hits(), 1);
}

#[tokio::test]
async fn test_slow_200_is_down() {
    let backend = common::start_mock_backend(200, Duration::from_millis(600)).await;
    let runner = runner(vec![backend.endpoint("slow-200")], 5000);

    let summary = runner.run_cycle().await;

    assert_eq!(summary.down, 1);
    assert_eq!(
        runner.store().get("127.0.0.1"),
        Some(DomainStatus { requests: 1, up_count: 0 })
    );
}

#[tokio::test]
async fn test_error_statuses_are_down() {
    for status in [500u16, 404, 418, 503] {
        let backend = common::start_mock_backend(status, Duration::ZERO).await;
        let runner = runner(vec![backend.endpoint("error")], 5000);

        runner.run_cycle().await;

        assert_eq!(
            runner.store().get("127.0.0.1"),
            Some(DomainStatus { requests: 1, up_count: 0 }),
            "status {} should be down",
            status
        );
    }
}

#[tokio::test]
async fn test_connection_refused_is_down_and_cycle_continues() {
    let dead = common::unused_addr().await;
    let alive = common::start_mock_backend(200, Duration::ZERO).await;

    let runner = runner(
        vec![
            EndpointDefinition::new("refused", format!("http://localhost:{}/", dead.port())),
            alive.endpoint("alive"),
        ],
        5000,
    );

    let summary = runner.run_cycle().await;

    assert_eq!(summary.probed, 2);
    assert_eq!(
        runner.store().get("localhost"),
        Some(DomainStatus { requests: 1, up_count: 0 })
    );
    assert_eq!(
        runner.store().get("127.0.0.1"),
        Some(DomainStatus { requests: 1, up_count: 1 })
    );
}

#[tokio::test]
async fn test_timeout_bounds_the_cycle() {
    let backend = common::start_mock_backend(200, Duration::from_secs(5)).await;
    let runner = runner(vec![backend.endpoint("hangs")], 600);

    let summary = runner.run_cycle().await;

    assert_eq!(summary.down, 1);
    assert!(summary.elapsed < Duration::from_secs(3), "cycle took {:?}", summary.elapsed);
    assert_eq!(
        runner.store().get("127.0.0.1"),
        Some(DomainStatus { requests: 1, up_count: 0 })
    );
}

#[tokio::test]
async fn test_shared_hostname_accumulates() {
    let up = common::start_mock_backend(200, Duration::ZERO).await;
    let down = common::start_mock_backend(500, Duration::ZERO).await;

    let runner = runner(
        vec![
            EndpointDefinition::new("up", up.url("/health")),
            EndpointDefinition::new("down", down.url("/health")),
        ],
        5000,
    );

    runner.run_cycle().await;
    runner.run_cycle().await;

    assert_eq!(runner.store().len(), 1);
    assert_eq!(
        runner.store().get("127.0.0.1"),
        Some(DomainStatus { requests: 4, up_count: 2 })
    );
}

#[tokio::test]
async fn test_invariant_holds_across_cycles() {
    let flaky_state = Arc::new(std::sync::atomic::AtomicUsize::new(0));
    let state = flaky_state.clone();
    let flaky = common::start_programmable_backend(move || {
        let state = state.clone();
        async move {
            let n = state.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            if n % 3 == 0 {
                (503, "busy".to_string())
            } else {
                (200, "ok".to_string())
            }
        }
    })
    .await;

    let runner = runner(
        vec![
            flaky.endpoint("flaky"),
            EndpointDefinition::new("hostless", "mailto:nobody@example.com"),
        ],
        5000,
    );

    for _ in 0..6 {
        runner.run_cycle().await;
        for (_, status) in runner.store().snapshot() {
            assert!(status.up_count <= status.requests);
        }
    }

    assert_eq!(
        runner.store().get("127.0.0.1"),
        Some(DomainStatus { requests: 6, up_count: 4 })
    );
    assert_eq!(runner.store().skipped(), 6);
}

#[tokio::test]
async fn test_request_is_sent_as_configured() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/some/post/endpoint"))
        .and(header("content-type", "application/json"))
        .and(header("user-agent", "fetch-synthetic-monitor"))
        .and(body_string(r#"{"foo":"bar"}"#))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let mut endpoint =
        EndpointDefinition::new("post", format!("{}/some/post/endpoint", server.uri()));
    endpoint.method = Some("POST".to_string());
    endpoint.body = Some(r#"{"foo":"bar"}"#.to_string());
    endpoint
        .headers
        .insert("content-type".to_string(), "application/json".to_string());
    endpoint
        .headers
        .insert("user-agent".to_string(), "fetch-synthetic-monitor".to_string());

    let result = common::test_prober(5000).probe(&endpoint).await;

    assert_eq!(result.outcome, ProbeOutcome::Up);
    assert_eq!(result.status, Some(201));
}

#[tokio::test]
async fn test_default_method_is_get_with_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(body_string(""))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let endpoint = EndpointDefinition::new("index", format!("{}/", server.uri()));
    let result = common::test_prober(5000).probe(&endpoint).await;
    assert_eq!(result.outcome, ProbeOutcome::Up);
}

#[tokio::test]
async fn test_delayed_wiremock_response_is_down() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(650)))
        .mount(&server)
        .await;

    let endpoint = EndpointDefinition::new("slow", server.uri());
    let result = common::test_prober(5000).probe(&endpoint).await;

    assert_eq!(result.outcome, ProbeOutcome::Down);
    assert_eq!(result.status, Some(200));
    assert!(result.elapsed_ms >= 500);
}

#[tokio::test]
async fn test_bounded_concurrency_overlaps_probes() {
    let backend = common::start_mock_backend(200, Duration::from_millis(250)).await;
    let endpoints = (0..4).map(|i| backend.endpoint(&format!("e{}", i))).collect();
    let runner = runner(endpoints, 5000).with_concurrency(4);

    let summary = runner.run_cycle().await;

    assert_eq!(summary.probed, 4);
    assert_eq!(backend.hits(), 4);
    assert!(summary.elapsed < Duration::from_millis(900), "cycle took {:?}", summary.elapsed);
    assert_eq!(runner.store().get("127.0.0.1").unwrap().requests, 4);
}

#[tokio::test]
async fn test_large_body_is_drained_and_classified() {
    let body = "x".repeat(4 * 1024 * 1024);
    let ok_body = body.clone();
    let ok = common::start_programmable_backend(move || {
        let body = ok_body.clone();
        async move { (200, body) }
    })
    .await;
    let failing = common::start_programmable_backend(move || {
        let body = body.clone();
        async move { (503, body) }
    })
    .await;

    let runner = runner(vec![ok.endpoint("large ok"), failing.endpoint("large failure")], 5000);
    let summary = runner.run_cycle().await;

    assert_eq!(summary.probed, 2);
    assert_eq!(summary.up, 1);
    assert_eq!(summary.down, 1);
    assert_eq!(
        runner.store().get("127.0.0.1"),
        Some(DomainStatus { requests: 2, up_count: 1 })
    );
}
