//! Unified error types for the dashboard backend.
//! Used by: config, upstream, charts, handlers.

use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not load {url}")]
    Upstream { status: u16, url: String },

    #[error("could not reach {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid JSON from {url}: {source}")]
    InvalidBody {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unknown chart: {0}")]
    UnknownChart(String),

    #[error("invalid chart file {}: {source}", path.display())]
    ChartFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot read chart file {}: {source}", path.display())]
    ChartRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Error::Transport { .. } | Error::InvalidBody { .. } => StatusCode::BAD_GATEWAY,
            Error::UnknownChart(_) => StatusCode::NOT_FOUND,
            Error::ChartFile { .. }
            | Error::ChartRead { .. }
            | Error::Config(_)
            | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub error: String,
    pub request_id: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        let request_id = uuid::Uuid::new_v4().to_string();

        if status.is_server_error() {
            tracing::error!(request_id = %request_id, status = status.as_u16(), error = %self, "request failed");
        } else {
            tracing::warn!(request_id = %request_id, status = status.as_u16(), error = %self, "request rejected");
        }

        let body = ErrorBody {
            status: status.as_u16(),
            error: self.to_string(),
            request_id,
        };
        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn upstream(status: u16) -> Error {
        Error::Upstream { status, url: "https://example.test/api/apps".into() }
    }

    #[test]
    fn upstream_status_is_forwarded() {
        assert_eq!(upstream(404).into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(upstream(500).into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(upstream(503).into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn out_of_range_upstream_status_becomes_502() {
        assert_eq!(upstream(1000).status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn unknown_chart_returns_404() {
        let response = Error::UnknownChart("radar".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn config_error_returns_500() {
        let response = Error::Config("bad url".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_messages_are_descriptive() {
        assert_eq!(upstream(404).to_string(), "could not load https://example.test/api/apps");
        assert_eq!(Error::UnknownChart("radar".into()).to_string(), "unknown chart: radar");
    }
}
