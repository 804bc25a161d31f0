//! App-list endpoint: passes the upstream JSON through unchanged.
//! Used by: server.

use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Value>> {
    state.metrics.record_upstream_request();
    match state.upstream.fetch().await {
        Ok(body) => Ok(Json(body)),
        Err(err) => {
            match &err {
                Error::Upstream { .. } => state.metrics.record_upstream_error(),
                _ => state.metrics.record_transport_failure(),
            }
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use serde_json::{json, Value};
    use tower::util::ServiceExt;
    use url::Url;

    use crate::server::build_router;
    use crate::state::{build_test_state, AppState};
    use crate::testing::{spawn_upstream, unreachable_url};

    async fn get_apps(state: AppState) -> Response {
        build_router(state)
            .oneshot(Request::builder().uri("/api/apps").body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn ok_upstream_body_is_passed_through() {
        let mock = spawn_upstream(StatusCode::OK, r#"[{"id":1}]"#).await;
        let response = get_apps(build_test_state(mock.url.clone())).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!([{"id": 1}]));
    }

    #[tokio::test]
    async fn not_found_upstream_keeps_status_and_names_url() {
        let mock = spawn_upstream(StatusCode::NOT_FOUND, "{}").await;
        let response = get_apps(build_test_state(mock.url.clone())).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_body(response).await;
        assert_eq!(body["status"], json!(404));
        assert_eq!(body["error"], json!(format!("could not load {}", mock.url)));
    }

    #[tokio::test]
    async fn server_error_upstream_is_returned_not_raised() {
        let mock = spawn_upstream(StatusCode::INTERNAL_SERVER_ERROR, "boom").await;
        let response = get_apps(build_test_state(mock.url.clone())).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert_eq!(body["status"], json!(500));
        assert!(body["request_id"].as_str().is_some_and(|id| !id.is_empty()));
    }

    #[tokio::test]
    async fn one_inbound_request_makes_one_upstream_call() {
        let mock = spawn_upstream(StatusCode::SERVICE_UNAVAILABLE, "{}").await;
        let state = build_test_state(mock.url.clone());

        get_apps(state.clone()).await;
        assert_eq!(mock.hits(), 1);
        get_apps(state.clone()).await;
        assert_eq!(mock.hits(), 2);

        let snapshot = state.metrics.snapshot();
        assert_eq!(snapshot.upstream_requests, 2);
        assert_eq!(snapshot.upstream_errors, 2);
    }

    #[tokio::test]
    async fn unreachable_upstream_is_bad_gateway() {
        let url: Url = unreachable_url().await;
        let state = build_test_state(url.clone());
        let response = get_apps(state.clone()).await;

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = json_body(response).await;
        assert!(body["error"].as_str().is_some_and(|msg| msg.contains(url.as_str())));
        assert_eq!(state.metrics.snapshot().transport_failures, 1);
    }

    #[tokio::test]
    async fn non_json_upstream_is_bad_gateway() {
        let mock = spawn_upstream(StatusCode::OK, "not json").await;
        let response = get_apps(build_test_state(mock.url.clone())).await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
