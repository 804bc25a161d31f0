//! Shared application state.

use std::sync::Arc;

use url::Url;

use crate::charts::catalog::ChartCatalog;
use crate::config::Config;
use crate::error::Result;
use crate::telemetry::Metrics;
use crate::upstream::UpstreamClient;

pub struct AppStateInner {
    pub upstream: UpstreamClient,
    pub charts: ChartCatalog,
    pub metrics: Metrics,
}

pub type AppState = Arc<AppStateInner>;

struct StateBuilder {
    upstream_url: Url,
    charts: ChartCatalog,
}

impl StateBuilder {
    fn build(self) -> AppState {
        Arc::new(AppStateInner {
            upstream: UpstreamClient::new(self.upstream_url),
            charts: self.charts,
            metrics: Metrics::new(),
        })
    }
}

pub fn build_state(config: &Config) -> Result<AppState> {
    Ok(StateBuilder {
        upstream_url: config.upstream_url.clone(),
        charts: ChartCatalog::load(config.charts_dir.as_deref())?,
    }
    .build())
}

#[cfg(test)]
pub fn build_test_state(upstream_url: Url) -> AppState {
    StateBuilder {
        upstream_url,
        charts: ChartCatalog::bundled(),
    }
    .build()
}
