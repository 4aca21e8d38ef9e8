//! Live adapter for the `Reporter` port using `reqwest`.

use std::time::Duration;

use reqwest::Client;

use crate::ports::{PortError, RegistrationPayload, ReportFuture, Reporter};

/// Live reporter that posts registration payloads over HTTP.
///
/// The HTTP client is built per report, so contexts that never report
/// (such as `show`) never initialize TLS.
pub struct LiveReporter {
    timeout: Duration,
}

impl LiveReporter {
    /// Creates a reporter whose requests give up after `timeout`.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Reporter for LiveReporter {
    fn report<'a>(&'a self, url: &'a str, payload: &'a RegistrationPayload) -> ReportFuture<'a> {
        Box::pin(async move {
            let client = Client::builder()
                .timeout(self.timeout)
                .build()
                .map_err(|e| -> PortError { format!("Failed to build HTTP client: {e}").into() })?;

            // `.json()` sets `content-type: application/json`.
            let response = client
                .post(url)
                .json(payload)
                .send()
                .await
                .map_err(|e| -> PortError { format!("POST {url} failed: {e}").into() })?;

            Ok(response.status().as_u16())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn payload() -> RegistrationPayload {
        RegistrationPayload { app_name: "myapp".into(), uuid: "uuid-001".into() }
    }

    #[tokio::test]
    async fn posts_json_and_returns_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/uuid"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({"app_name": "myapp", "uuid": "uuid-001"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let reporter = LiveReporter::new(Duration::from_secs(5));
        let url = format!("{}/uuid", server.uri());
        let status = reporter.report(&url, &payload()).await.unwrap();

        assert_eq!(status, 200);
    }

    #[tokio::test]
    async fn non_success_status_is_not_a_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let reporter = LiveReporter::new(Duration::from_secs(5));
        let url = format!("{}/uuid", server.uri());
        let status = reporter.report(&url, &payload()).await.unwrap();

        assert_eq!(status, 503);
    }

    #[tokio::test]
    async fn slow_endpoint_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let reporter = LiveReporter::new(Duration::from_millis(100));
        let url = format!("{}/uuid", server.uri());
        let result = reporter.report(&url, &payload()).await;

        assert!(result.is_err());
    }
}
