//! Prometheus push gateway client

use super::MetricsSink;
use crate::config::PushConfig;
use crate::error::PushError;
use async_trait::async_trait;
use reqwest::{header, Client};

/// Delivers to one `job`/`instance` grouping key on a push gateway.
///
/// Each push deletes the group first so series that disappeared from the
/// exposition do not linger, then posts the full text.
#[derive(Debug, Clone)]
pub struct PushGateway {
    client: Client,
    url: String,
}

impl PushGateway {
    pub fn new(config: &PushConfig) -> Result<Self, PushError> {
        let client = Client::builder().timeout(config.request_timeout()).build()?;
        Ok(Self {
            client,
            url: config.grouping_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl MetricsSink for PushGateway {
    async fn push(&self, body: String) -> Result<(), PushError> {
        // The POST still replaces the group, so a failed DELETE only warns.
        let deleted = self.client.delete(&self.url).send().await?.status();
        if deleted.is_success() {
            tracing::debug!(status = deleted.as_u16(), url = %self.url, "Deleted existing metrics");
        } else {
            tracing::warn!(
                status = deleted.as_u16(),
                url = %self.url,
                "Deleting existing metrics returned a non-success status"
            );
        }

        let response = self
            .client
            .post(&self.url)
            .header(header::CONTENT_TYPE, "text/plain")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PushError::Status {
                method: "POST",
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }
        Ok(())
    }

    fn target(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::State, http::StatusCode, routing::delete, Router};
    use std::sync::{Arc, Mutex};
    use tokio::net::TcpListener;

    type Calls = Arc<Mutex<Vec<&'static str>>>;

    /// Serve a gateway stub on loopback and return a config pointing at it
    async fn stub_gateway(delete_status: StatusCode, post_status: StatusCode) -> (PushConfig, Calls) {
        let calls: Calls = Arc::default();
        let app = Router::new()
            .route(
                "/metrics/job/fleet/instance/lab",
                delete(move |State(calls): State<Calls>| async move {
                    calls.lock().unwrap().push("DELETE");
                    delete_status
                })
                .post(move |State(calls): State<Calls>, body: String| async move {
                    assert!(body.starts_with("up 1"));
                    calls.lock().unwrap().push("POST");
                    post_status
                }),
            )
            .with_state(calls.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let config = PushConfig {
            gateway_url: format!("http://{}", addr),
            job: "fleet".to_string(),
            instance: "lab".to_string(),
            request_timeout_secs: 5,
            ..Default::default()
        };
        (config, calls)
    }

    #[test]
    fn test_gateway_url_from_config() {
        let config = PushConfig {
            gateway_url: "http://pushgateway:9091".to_string(),
            job: "fleet".to_string(),
            instance: "lab".to_string(),
            ..Default::default()
        };
        let gateway = PushGateway::new(&config).unwrap();
        assert_eq!(gateway.url(), "http://pushgateway:9091/metrics/job/fleet/instance/lab");
        assert_eq!(gateway.target(), gateway.url());
    }

    #[tokio::test]
    async fn test_unreachable_gateway_fails() {
        let config = PushConfig {
            // Port 9 (discard) on loopback is closed in test environments.
            gateway_url: "http://127.0.0.1:9".to_string(),
            request_timeout_secs: 2,
            ..Default::default()
        };
        let gateway = PushGateway::new(&config).unwrap();
        assert!(gateway.push("up 1\n".to_string()).await.is_err());
    }

    #[tokio::test]
    async fn test_failed_delete_still_posts() {
        let (config, calls) =
            stub_gateway(StatusCode::INTERNAL_SERVER_ERROR, StatusCode::OK).await;
        let gateway = PushGateway::new(&config).unwrap();

        gateway.push("up 1\n".to_string()).await.unwrap();
        assert_eq!(*calls.lock().unwrap(), vec!["DELETE", "POST"]);
    }

    #[tokio::test]
    async fn test_rejected_post_reports_status() {
        let (config, calls) = stub_gateway(StatusCode::ACCEPTED, StatusCode::SERVICE_UNAVAILABLE).await;
        let gateway = PushGateway::new(&config).unwrap();

        let err = gateway.push("up 1\n".to_string()).await.unwrap_err();
        match err {
            PushError::Status { method, url, status } => {
                assert_eq!(method, "POST");
                assert_eq!(url, gateway.url());
                assert_eq!(status, 503);
            }
            other => panic!("expected status error, got {other:?}"),
        }
        assert_eq!(*calls.lock().unwrap(), vec!["DELETE", "POST"]);
    }
}
