//! The set of charts served, with optional per-kind overrides from disk.
//! Used by: state, handlers::charts.

use std::collections::BTreeMap;
use std::path::Path;

use crate::charts::{samples, ChartConfig, ChartKind};
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct ChartCatalog {
    charts: BTreeMap<ChartKind, ChartConfig>,
}

impl ChartCatalog {
    pub fn bundled() -> Self {
        let charts = ChartKind::ALL
            .into_iter()
            .map(|kind| (kind, samples::sample(kind)))
            .collect();
        Self { charts }
    }

    /// Replaces bundled charts with `<kind>.json` files found in `dir`.
    /// Any file that does not match its kind's schema fails the whole load.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let mut catalog = Self::bundled();
        if dir.exists() && !dir.is_dir() {
            return Err(Error::Config(format!(
                "CHARTS_DIR {} is not a directory",
                dir.display()
            )));
        }
        if !dir.is_dir() {
            tracing::warn!(dir = %dir.display(), "charts directory not found, using bundled charts");
            return Ok(catalog);
        }

        for kind in ChartKind::ALL {
            let path = dir.join(format!("{}.json", kind.name()));
            if !path.is_file() {
                continue;
            }
            let content = std::fs::read_to_string(&path)
                .map_err(|source| Error::ChartRead { path: path.clone(), source })?;
            let config = ChartConfig::from_json(kind, &content)
                .map_err(|source| Error::ChartFile { path: path.clone(), source })?;
            tracing::info!(chart = %kind, path = %path.display(), "loaded chart override");
            catalog.charts.insert(kind, config);
        }
        Ok(catalog)
    }

    pub fn load(dir: Option<&Path>) -> Result<Self> {
        match dir {
            Some(dir) => Self::from_dir(dir),
            None => Ok(Self::bundled()),
        }
    }

    pub fn get(&self, kind: ChartKind) -> Option<&ChartConfig> {
        self.charts.get(&kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ChartKind, &ChartConfig)> {
        self.charts.iter().map(|(kind, config)| (*kind, config))
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }
}
