//! HTTP client for the proxied app-list API.
//! Used by: handlers::apps, state.

use std::time::Instant;

use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::error::{Error, Result};

/// Issues a single GET per call. No retries, no timeout, no caching.
#[derive(Clone)]
pub struct UpstreamClient {
    client: Client,
    url: Url,
}

impl UpstreamClient {
    pub fn new(url: Url) -> Self {
        Self { client: Client::new(), url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub async fn fetch(&self) -> Result<Value> {
        let start = Instant::now();
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|source| Error::Transport { url: self.url.to_string(), source })?;

        let status = response.status();
        tracing::debug!(
            url = %self.url,
            status = status.as_u16(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "upstream responded"
        );

        if !status.is_success() {
            return Err(Error::Upstream { status: status.as_u16(), url: self.url.to_string() });
        }

        response
            .json::<Value>()
            .await
            .map_err(|source| Error::InvalidBody { url: self.url.to_string(), source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{spawn_upstream, unreachable_url};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn success_returns_parsed_body() -> Result<()> {
        let mock = spawn_upstream(StatusCode::OK, r#"{"apps":[{"id":7}]}"#).await;
        let body = UpstreamClient::new(mock.url.clone()).fetch().await?;
        assert_eq!(body, json!({"apps": [{"id": 7}]}));
        assert_eq!(mock.hits(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn non_ok_status_carries_status_and_url() {
        let mock = spawn_upstream(StatusCode::FORBIDDEN, "nope").await;
        let err = UpstreamClient::new(mock.url.clone()).fetch().await.unwrap_err();
        match err {
            Error::Upstream { status, url } => {
                assert_eq!(status, 403);
                assert_eq!(url, mock.url.to_string());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn non_json_body_is_invalid_body() {
        let mock = spawn_upstream(StatusCode::OK, "<html>").await;
        let err = UpstreamClient::new(mock.url.clone()).fetch().await.unwrap_err();
        assert!(matches!(err, Error::InvalidBody { .. }));
    }

    #[tokio::test]
    async fn refused_connection_is_transport_error() {
        let url = unreachable_url().await;
        let err = UpstreamClient::new(url).fetch().await.unwrap_err();
        assert!(matches!(err, Error::Transport { .. }));
    }
}
