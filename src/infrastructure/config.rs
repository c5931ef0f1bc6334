use serde::Deserialize;
use std::collections::BTreeMap;

use crate::domain::dashboard::Domain;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct DashboardConfig {
    pub server: ServerSettings,
    pub source: SourceSettings,
    pub paths: PathSettings,
    pub tabs: TabSettings,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    File,
    Http,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SourceSettings {
    pub kind: SourceKind,
    /// Directory the document paths resolve against for `file` sources.
    pub base_dir: String,
    /// Origin the document paths resolve against for `http` sources.
    pub base_url: String,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            kind: SourceKind::File,
            base_dir: ".".to_string(),
            base_url: String::new(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PathSettings {
    pub system: String,
    pub pipeline: String,
    pub ventures: String,
    pub activity: String,
    pub progress: String,
    pub finance: String,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            system: "./data/system-health.json".to_string(),
            pipeline: "./data/skyhawk-pipeline.json".to_string(),
            ventures: "./data/ventures.json".to_string(),
            activity: "./data/activity-feed.json".to_string(),
            progress: "./data/implementation-progress.json".to_string(),
            finance: "./data/finance.json".to_string(),
        }
    }
}

impl PathSettings {
    pub fn to_map(&self) -> BTreeMap<Domain, String> {
        Domain::ALL
            .into_iter()
            .map(|domain| {
                let path = match domain {
                    Domain::System => &self.system,
                    Domain::Pipeline => &self.pipeline,
                    Domain::Ventures => &self.ventures,
                    Domain::Activity => &self.activity,
                    Domain::Progress => &self.progress,
                    Domain::Finance => &self.finance,
                };
                (domain, path.clone())
            })
            .collect()
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct TabSettings {
    pub default: String,
}

impl Default for TabSettings {
    fn default() -> Self {
        Self {
            default: Domain::System.key().to_string(),
        }
    }
}

fn build(builder: config::ConfigBuilder<config::builder::DefaultState>) -> anyhow::Result<DashboardConfig> {
    let settings = builder
        .add_source(
            config::Environment::with_prefix("DASHBOARD")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Load `config/dashboard.*` if present, overridden by `DASHBOARD_*` variables.
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    build(
        config::Config::builder()
            .add_source(config::File::with_name("config/dashboard").required(false)),
    )
}
