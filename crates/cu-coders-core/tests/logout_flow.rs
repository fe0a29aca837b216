//! Integration tests for the header's logout flow.
//!
//! These tests drive `logout` end to end against a scripted endpoint and a
//! browser that records every console line and navigation.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::cell::{Cell, RefCell};

use cu_coders_core::{
    Browser, Error, FAILURE_MESSAGE, HeaderConfig, HeaderProps, LinkAction, LogoutClient,
    LogoutOutcome, LogoutResponse, Result, SUCCESS_MESSAGE, logout,
};

/// Scripted answer for the fake endpoint.
#[derive(Clone, Copy)]
enum Reply {
    Confirm,
    Refuse,
    PlainText,
    Status(u16),
    Offline,
}

struct ScriptedEndpoint {
    reply: Reply,
    calls: Cell<usize>,
}

impl ScriptedEndpoint {
    const fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: Cell::new(0),
        }
    }
}

impl LogoutClient for ScriptedEndpoint {
    async fn request_logout(&self, _endpoint: &str) -> Result<LogoutResponse> {
        self.calls.set(self.calls.get() + 1);
        match self.reply {
            Reply::Confirm => Ok(LogoutResponse::new(true)),
            Reply::Refuse => Ok(LogoutResponse::new(false)),
            Reply::PlainText => LogoutResponse::from_body(None),
            Reply::Status(status) => Err(Error::Http { status }),
            Reply::Offline => Err(Error::Network("Failed to fetch".to_string())),
        }
    }
}

#[derive(Default)]
struct RecordingBrowser {
    logs: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
    visits: RefCell<Vec<String>>,
}

impl Browser for RecordingBrowser {
    fn log(&self, message: &str) {
        self.logs.borrow_mut().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }

    fn navigate(&self, href: &str) -> Result<()> {
        self.visits.borrow_mut().push(href.to_string());
        Ok(())
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("cu_coders_core=debug")
        .try_init();
}

#[tokio::test]
async fn test_confirmed_logout_navigates_home() {
    init_tracing();
    let endpoint = ScriptedEndpoint::new(Reply::Confirm);
    let browser = RecordingBrowser::default();

    let outcome = logout(&endpoint, &browser, &HeaderConfig::default()).await;

    assert_eq!(outcome, LogoutOutcome::LoggedOut);
    assert_eq!(*browser.logs.borrow(), [SUCCESS_MESSAGE]);
    assert_eq!(*browser.visits.borrow(), ["/"]);
    assert!(browser.errors.borrow().is_empty());
}

#[tokio::test]
async fn test_refused_logout_still_navigates_home() {
    init_tracing();
    let endpoint = ScriptedEndpoint::new(Reply::Refuse);
    let browser = RecordingBrowser::default();

    let outcome = logout(&endpoint, &browser, &HeaderConfig::default()).await;

    assert_eq!(outcome, LogoutOutcome::Rejected);
    assert_eq!(*browser.logs.borrow(), [FAILURE_MESSAGE]);
    assert_eq!(*browser.visits.borrow(), ["/"]);
}

/// A success status with a body that is not JSON still lands on the home page.
#[tokio::test]
async fn test_plain_text_answer_navigates_home() {
    init_tracing();
    let endpoint = ScriptedEndpoint::new(Reply::PlainText);
    let browser = RecordingBrowser::default();

    let outcome = logout(&endpoint, &browser, &HeaderConfig::default()).await;

    assert_eq!(outcome, LogoutOutcome::Rejected);
    assert_eq!(*browser.logs.borrow(), [FAILURE_MESSAGE]);
    assert_eq!(*browser.visits.borrow(), ["/"]);
}

#[tokio::test]
async fn test_offline_logout_stays_put() {
    init_tracing();
    let endpoint = ScriptedEndpoint::new(Reply::Offline);
    let browser = RecordingBrowser::default();

    let outcome = logout(&endpoint, &browser, &HeaderConfig::default()).await;

    assert!(!outcome.redirected());
    assert_eq!(*browser.errors.borrow(), ["Network Error: Failed to fetch"]);
    assert!(browser.logs.borrow().is_empty());
    assert!(browser.visits.borrow().is_empty());
}

#[tokio::test]
async fn test_server_error_stays_put() {
    init_tracing();
    let endpoint = ScriptedEndpoint::new(Reply::Status(503));
    let browser = RecordingBrowser::default();

    let outcome = logout(&endpoint, &browser, &HeaderConfig::default()).await;

    assert_eq!(
        outcome,
        LogoutOutcome::Failed("Request failed with status code 503".to_string())
    );
    assert!(browser.visits.borrow().is_empty());
}

/// Rapid double clicks are not de-duplicated: each one reaches the server.
#[tokio::test]
async fn test_repeated_clicks_each_send_a_request() {
    init_tracing();
    let endpoint = ScriptedEndpoint::new(Reply::Confirm);
    let browser = RecordingBrowser::default();
    let config = HeaderConfig::default();

    let (first, second) = tokio::join!(
        logout(&endpoint, &browser, &config),
        logout(&endpoint, &browser, &config)
    );

    assert_eq!(first, LogoutOutcome::LoggedOut);
    assert_eq!(second, LogoutOutcome::LoggedOut);
    assert_eq!(endpoint.calls.get(), 2);
    assert_eq!(browser.visits.borrow().len(), 2);
}

/// The logout action only appears once the header knows the visitor is logged in.
#[tokio::test]
async fn test_logout_link_wires_to_flow() {
    let header = HeaderProps {
        is_logged_in: true,
        ..HeaderProps::default()
    }
    .resolve();

    let action_links: Vec<_> = header
        .links
        .iter()
        .flat_map(|group| &group.links)
        .filter(|link| link.action == LinkAction::Logout)
        .collect();
    assert_eq!(action_links.len(), 1);

    let endpoint = ScriptedEndpoint::new(Reply::Confirm);
    let browser = RecordingBrowser::default();
    let outcome = logout(&endpoint, &browser, &HeaderConfig::default()).await;
    assert!(outcome.redirected());
}
