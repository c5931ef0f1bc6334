// Dashboard service - Use case for loading and rendering the dashboard
use crate::application::document_source::{DocumentSource, LoadError};
use crate::application::format::{latest_timestamp, local_datetime};
use crate::application::renderers::render_domain;
use crate::application::view::{DashboardView, Region};
use crate::domain::dashboard::Domain;
use crate::domain::documents::generated_at;
use chrono::{DateTime, FixedOffset, Local};
use futures::future::try_join_all;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load dashboard data";

/// Result of one load-and-render pass.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded {
        generated_at: Option<DateTime<FixedOffset>>,
    },
    Failed(LoadError),
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded { .. })
    }
}

#[derive(Clone)]
pub struct DashboardService {
    source: Arc<dyn DocumentSource>,
    paths: BTreeMap<Domain, String>,
}

impl DashboardService {
    pub fn new(source: Arc<dyn DocumentSource>, paths: BTreeMap<Domain, String>) -> Self {
        Self { source, paths }
    }

    pub fn domains(&self) -> impl Iterator<Item = Domain> + '_ {
        self.paths.keys().copied()
    }

    /// Fetch every document concurrently. The first failure fails the whole set.
    pub async fn fetch_all(&self) -> Result<BTreeMap<Domain, Value>, LoadError> {
        let fetches = self.paths.iter().map(|(domain, path)| {
            let source = self.source.clone();
            async move {
                tracing::debug!("Fetching {} document from {}", domain, path);
                source.fetch_json(path).await.map(|doc| (*domain, doc))
            }
        });

        Ok(try_join_all(fetches).await?.into_iter().collect())
    }

    /// Load all documents and render them into `view`.
    ///
    /// Nothing is rendered unless every fetch succeeds. On failure only the
    /// timestamp region is written.
    pub async fn load(&self, view: &mut dyn DashboardView) -> LoadOutcome {
        let documents = match self.fetch_all().await {
            Ok(documents) => documents,
            Err(e) => {
                tracing::error!("Dashboard load failed: {}", e);
                view.set_text(Region::GeneratedAt, LOAD_FAILED_MESSAGE);
                return LoadOutcome::Failed(e);
            }
        };

        for (domain, document) in &documents {
            render_domain(*domain, document, view);
        }

        let latest = latest_timestamp(documents.values().filter_map(generated_at));
        let label = match &latest {
            Some(ts) => format!("Data: {}", local_datetime(ts, &Local)),
            None => "Data: unavailable".to_string(),
        };
        view.set_text(Region::GeneratedAt, &label);

        tracing::info!(
            "Rendered {} dashboard documents (latest data: {})",
            documents.len(),
            latest.map(|ts| ts.to_rfc3339()).unwrap_or_else(|| "none".to_string())
        );

        LoadOutcome::Loaded {
            generated_at: latest,
        }
    }
}
