//! Test helpers: an in-process upstream that serves one canned response.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::http::{header, StatusCode};
use axum::Router;
use tokio::net::TcpListener;
use url::Url;

pub struct MockUpstream {
    pub url: Url,
    hits: Arc<AtomicUsize>,
}

impl MockUpstream {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

pub async fn spawn_upstream(status: StatusCode, body: &'static str) -> MockUpstream {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let app = Router::new().fallback(move || {
        let counter = Arc::clone(&counter);
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            (status, [(header::CONTENT_TYPE, "application/json")], body)
        }
    });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockUpstream {
        url: Url::parse(&format!("http://{addr}/api/apps")).unwrap(),
        hits,
    }
}

/// A URL on a port nothing listens on.
pub async fn unreachable_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{addr}/api/apps")).unwrap()
}
