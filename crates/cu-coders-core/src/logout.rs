//! Logout flow.
//!
//! The header's logout link asks the backend to drop the session, logs the
//! result to the console and sends the browser back to the home page.
//!
//! Any answer from the server redirects, whether or not it confirms the
//! logout. A request that never gets an answer only logs the error and leaves
//! the visitor on the current page.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info, warn};

use crate::config::HeaderConfig;
use crate::error::{Error, Result};

/// Console line written when the server confirms the logout.
pub const SUCCESS_MESSAGE: &str = "Logged out successfully";

/// Console line written when the server answers without confirming.
pub const FAILURE_MESSAGE: &str = "Error logging out";

/// Body returned by the logout endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogoutResponse {
    /// `true` when the session was dropped. Anything else counts as a refusal.
    #[serde(default)]
    pub logout: Value,
}

impl LogoutResponse {
    /// Response carrying a boolean `logout` field.
    pub const fn new(logout: bool) -> Self {
        Self {
            logout: Value::Bool(logout),
        }
    }

    /// Interpret the body of a successful response.
    ///
    /// `None` stands for a body that is empty or not JSON. Such bodies, like
    /// arrays, strings and numbers, carry no `logout` field and count as a
    /// refusal. Only a JSON `null` is unreadable.
    pub fn from_body(body: Option<Value>) -> Result<Self> {
        match body {
            Some(Value::Null) => Err(Error::Decode(
                "Cannot read properties of null (reading 'logout')".to_string(),
            )),
            Some(Value::Object(mut fields)) => Ok(Self {
                logout: fields.remove("logout").unwrap_or(Value::Null),
            }),
            Some(_) | None => Ok(Self::default()),
        }
    }

    /// Whether the server confirmed the logout.
    pub fn is_confirmed(&self) -> bool {
        self.logout == Value::Bool(true)
    }
}

/// How a logout attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoutOutcome {
    /// Server confirmed; browser redirected.
    LoggedOut,
    /// Server answered without confirming; browser redirected anyway.
    Rejected,
    /// No usable answer; browser left in place.
    Failed(String),
}

impl LogoutOutcome {
    /// Whether the browser was sent to the redirect target.
    pub const fn redirected(&self) -> bool {
        matches!(self, Self::LoggedOut | Self::Rejected)
    }
}

/// Transport used to reach the logout endpoint.
///
/// Implementations must send the visitor's credentials (cookies) with the
/// request and report non-success statuses as errors.
pub trait LogoutClient {
    /// Send the logout request to `endpoint` and decode the body.
    fn request_logout(&self, endpoint: &str) -> impl Future<Output = Result<LogoutResponse>>;
}

/// Browser side effects the logout flow needs.
#[cfg_attr(test, mockall::automock)]
pub trait Browser {
    /// Write an informational console line.
    fn log(&self, message: &str);

    /// Write an error console line.
    fn error(&self, message: &str);

    /// Load `href` in the current window.
    fn navigate(&self, href: &str) -> Result<()>;
}

/// Run a full logout: request, log, redirect.
///
/// There is no in-flight guard; calling this twice sends two requests.
pub async fn logout<C, B>(client: &C, browser: &B, config: &HeaderConfig) -> LogoutOutcome
where
    C: LogoutClient + ?Sized,
    B: Browser + ?Sized,
{
    info!(endpoint = %config.logout_endpoint, "Requesting logout");
    let result = client.request_logout(&config.logout_endpoint).await;
    complete_logout(result, browser, &config.redirect_to)
}

/// Act on the result of a logout request.
pub fn complete_logout<B>(
    result: Result<LogoutResponse>,
    browser: &B,
    redirect_to: &str,
) -> LogoutOutcome
where
    B: Browser + ?Sized,
{
    match result {
        Ok(response) => {
            let outcome = if response.is_confirmed() {
                info!("Logout confirmed by server");
                browser.log(SUCCESS_MESSAGE);
                LogoutOutcome::LoggedOut
            } else {
                warn!(logout = %response.logout, "Logout not confirmed by server");
                browser.log(FAILURE_MESSAGE);
                LogoutOutcome::Rejected
            };

            if let Err(e) = browser.navigate(redirect_to) {
                error!(error = %e, redirect_to, "Redirect after logout failed");
                browser.error(&e.to_string());
            }

            outcome
        }
        Err(e) => {
            let message = e.to_string();
            error!(error = %message, "Logout request failed");
            browser.error(&message);
            LogoutOutcome::Failed(message)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[test]
    fn test_confirmed_logout_logs_and_redirects() {
        let mut browser = MockBrowser::new();
        browser
            .expect_log()
            .with(eq(SUCCESS_MESSAGE))
            .times(1)
            .return_const(());
        browser
            .expect_navigate()
            .with(eq("/"))
            .times(1)
            .returning(|_| Ok(()));
        browser.expect_error().never();

        let outcome = complete_logout(Ok(LogoutResponse::new(true)), &browser, "/");
        assert_eq!(outcome, LogoutOutcome::LoggedOut);
        assert!(outcome.redirected());
    }

    #[test]
    fn test_refused_logout_still_redirects() {
        let mut browser = MockBrowser::new();
        browser
            .expect_log()
            .with(eq(FAILURE_MESSAGE))
            .times(1)
            .return_const(());
        browser
            .expect_navigate()
            .with(eq("/"))
            .times(1)
            .returning(|_| Ok(()));
        browser.expect_error().never();

        let outcome = complete_logout(Ok(LogoutResponse::new(false)), &browser, "/");
        assert_eq!(outcome, LogoutOutcome::Rejected);
        assert!(outcome.redirected());
    }

    #[test]
    fn test_transport_failure_does_not_redirect() {
        let mut browser = MockBrowser::new();
        browser
            .expect_error()
            .with(eq("Network Error: offline"))
            .times(1)
            .return_const(());
        browser.expect_log().never();
        browser.expect_navigate().never();

        let outcome = complete_logout(
            Err(Error::Network("offline".to_string())),
            &browser,
            "/",
        );
        assert_eq!(
            outcome,
            LogoutOutcome::Failed("Network Error: offline".to_string())
        );
        assert!(!outcome.redirected());
    }

    #[test]
    fn test_http_error_status_is_a_failure() {
        let mut browser = MockBrowser::new();
        browser
            .expect_error()
            .with(eq("Request failed with status code 401"))
            .times(1)
            .return_const(());
        browser.expect_navigate().never();

        let outcome = complete_logout(Err(Error::Http { status: 401 }), &browser, "/");
        assert!(matches!(outcome, LogoutOutcome::Failed(_)));
    }

    #[test]
    fn test_failed_redirect_is_logged() {
        let mut browser = MockBrowser::new();
        browser.expect_log().return_const(());
        browser
            .expect_navigate()
            .returning(|_| Err(Error::Navigation("blocked".to_string())));
        browser
            .expect_error()
            .with(eq("Navigation failed: blocked"))
            .times(1)
            .return_const(());

        let outcome = complete_logout(Ok(LogoutResponse::new(true)), &browser, "/");
        assert_eq!(outcome, LogoutOutcome::LoggedOut);
    }

    #[test]
    fn test_only_literal_true_confirms() {
        let missing: LogoutResponse = serde_json::from_str("{}").unwrap();
        assert!(!missing.is_confirmed());

        let stringly: LogoutResponse = serde_json::from_str(r#"{"logout":"true"}"#).unwrap();
        assert!(!stringly.is_confirmed());

        let confirmed: LogoutResponse = serde_json::from_str(r#"{"logout":true}"#).unwrap();
        assert!(confirmed.is_confirmed());
    }

    #[test]
    fn test_body_without_logout_field_is_a_refusal() {
        for body in [
            None,
            Some(Value::String("ok".to_string())),
            Some(serde_json::json!([])),
            Some(serde_json::json!(1)),
            Some(serde_json::json!({"status": "done"})),
        ] {
            let response = LogoutResponse::from_body(body.clone()).unwrap();
            assert_eq!(response, LogoutResponse::default(), "{body:?}");
            assert!(!response.is_confirmed());
        }
    }

    #[test]
    fn test_body_with_logout_field() {
        let confirmed = LogoutResponse::from_body(Some(serde_json::json!({"logout": true})));
        assert!(confirmed.unwrap().is_confirmed());

        let refused = LogoutResponse::from_body(Some(serde_json::json!({"logout": false})));
        assert_eq!(refused.unwrap(), LogoutResponse::new(false));
    }

    #[test]
    fn test_null_body_is_unreadable() {
        let err = LogoutResponse::from_body(Some(Value::Null)).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_non_json_success_still_redirects() {
        let mut browser = MockBrowser::new();
        browser
            .expect_log()
            .with(eq(FAILURE_MESSAGE))
            .times(1)
            .return_const(());
        browser
            .expect_navigate()
            .with(eq("/"))
            .times(1)
            .returning(|_| Ok(()));
        browser.expect_error().never();

        let outcome = complete_logout(LogoutResponse::from_body(None), &browser, "/");
        assert_eq!(outcome, LogoutOutcome::Rejected);
    }

    struct FixedClient(bool);

    impl LogoutClient for FixedClient {
        async fn request_logout(&self, endpoint: &str) -> Result<LogoutResponse> {
            assert_eq!(endpoint, crate::config::DEFAULT_LOGOUT_ENDPOINT);
            Ok(LogoutResponse::new(self.0))
        }
    }

    #[tokio::test]
    async fn test_logout_uses_configured_redirect() {
        let config = HeaderConfig {
            redirect_to: "/goodbye".to_string(),
            ..HeaderConfig::default()
        };

        let mut browser = MockBrowser::new();
        browser.expect_log().return_const(());
        browser
            .expect_navigate()
            .with(eq("/goodbye"))
            .times(1)
            .returning(|_| Ok(()));

        let outcome = logout(&FixedClient(true), &browser, &config).await;
        assert_eq!(outcome, LogoutOutcome::LoggedOut);
    }
}
