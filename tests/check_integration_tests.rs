use std::io;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::Event;
use futures::stream;
use statuscheck::check::{HttpProbe, ProbeError, StatusProbe};
use statuscheck::core::state::{Phase, Session};
use statuscheck::core::view::view;
use statuscheck::tui::event_loop;
use tokio_test::{assert_err, assert_ok};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

// ============================================================================
// Helper Functions
// ============================================================================

/// Starts a mock server answering `GET <route>` with `status`, exactly once.
async fn server_with(route: &str, status: u16) -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string("ignored body"))
        .expect(1)
        .mount(&mock_server)
        .await;
    mock_server
}

/// A local address nothing is listening on.
fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/")
}

/// Runs the display loop with no terminal input and collects every frame.
async fn run_to_completion(url: String, probe: HttpProbe) -> (Session, Vec<String>) {
    let mut session = Session::new(url);
    let mut frames = Vec::new();
    let result = event_loop(
        &mut session,
        Arc::new(probe),
        stream::pending::<io::Result<Event>>(),
        |s| {
            frames.push(view(s));
            Ok(())
        },
    )
    .await;
    assert_ok!(result);
    (session, frames)
}

// ============================================================================
// HttpProbe Tests
// ============================================================================

#[tokio::test]
async fn test_probe_reports_success_status() {
    let mock_server = server_with("/ok", 200).await;
    let probe = HttpProbe::new(Duration::from_secs(5)).unwrap();

    let status = assert_ok!(probe.check(&format!("{}/ok", mock_server.uri())).await);
    assert_eq!(status, 200);
}

#[tokio::test]
async fn test_probe_treats_error_statuses_as_results() {
    let mock_server = MockServer::start().await;
    for code in [404u16, 500] {
        Mock::given(method("GET"))
            .and(path(format!("/{code}")))
            .respond_with(ResponseTemplate::new(code))
            .expect(1)
            .mount(&mock_server)
            .await;
    }
    let probe = HttpProbe::new(Duration::from_secs(5)).unwrap();

    let not_found = probe.check(&format!("{}/404", mock_server.uri())).await;
    let server_error = probe.check(&format!("{}/500", mock_server.uri())).await;

    assert_eq!(not_found, Ok(404));
    assert_eq!(server_error, Ok(500));
}

#[tokio::test]
async fn test_probe_times_out() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&mock_server)
        .await;
    let timeout = Duration::from_millis(200);
    let probe = HttpProbe::new(timeout).unwrap();

    let err = assert_err!(probe.check(&format!("{}/slow", mock_server.uri())).await);
    assert_eq!(err, ProbeError::Timeout(timeout));
}

#[tokio::test]
async fn test_probe_connection_refused() {
    let probe = HttpProbe::new(Duration::from_secs(5)).unwrap();

    let err = assert_err!(probe.check(&closed_port_url()).await);
    assert!(matches!(err, ProbeError::Connect(_)), "got {err:?}");
}

#[tokio::test]
async fn test_probe_rejects_malformed_url() {
    let probe = HttpProbe::new(Duration::from_secs(5)).unwrap();

    let err = assert_err!(probe.check("http://").await);
    assert!(matches!(err, ProbeError::InvalidUrl(_)), "got {err:?}");
}

// ============================================================================
// Display Loop Tests
// ============================================================================

#[tokio::test]
async fn test_loop_shows_status_and_reason() {
    let mock_server = server_with("/404", 404).await;
    let url = format!("{}/404", mock_server.uri());

    let (session, frames) =
        run_to_completion(url.clone(), HttpProbe::new(Duration::from_secs(5)).unwrap()).await;

    assert_eq!(session.phase(), Phase::Terminal);
    assert_eq!(session.status(), Some(404));
    assert_eq!(frames.first(), Some(&format!("\nChecking {url} ...\n")));
    assert_eq!(
        frames.last(),
        Some(&format!("\nChecking {url} ...404 Not Found!\n"))
    );
}

#[tokio::test]
async fn test_loop_shows_trouble_for_unreachable_host() {
    let (session, frames) =
        run_to_completion(closed_port_url(), HttpProbe::new(Duration::from_secs(5)).unwrap())
            .await;

    assert!(session.error().is_some());
    assert_eq!(session.status(), None);
    let last = frames.last().unwrap();
    assert!(last.starts_with("\nWe had some trouble: "), "got {last:?}");
    assert!(last.ends_with('\n'));
}

#[tokio::test]
async fn test_loop_timeout_is_a_failure_not_a_hang() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&mock_server)
        .await;

    let (session, frames) = run_to_completion(
        mock_server.uri(),
        HttpProbe::new(Duration::from_millis(200)).unwrap(),
    )
    .await;

    assert_eq!(
        session.error(),
        Some(&ProbeError::Timeout(Duration::from_millis(200)))
    );
    assert_eq!(
        frames.last().map(String::as_str),
        Some("\nWe had some trouble: no response within 0.2s\n")
    );
}
