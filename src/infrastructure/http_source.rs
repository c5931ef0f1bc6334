// HTTP document source
use crate::application::document_source::{parse_body, DocumentSource, LoadError};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CACHE_CONTROL, PRAGMA};
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct HttpDocumentSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDocumentSource {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn build_url(&self, path: &str) -> String {
        let path = path.trim_start_matches("./").trim_start_matches('/');
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl DocumentSource for HttpDocumentSource {
    async fn fetch_json(&self, path: &str) -> Result<Value, LoadError> {
        let url = self.build_url(path);
        let transport = |source: reqwest::Error| LoadError::Transport {
            path: path.to_string(),
            source: Box::new(source),
        };

        let response = self
            .client
            .get(&url)
            .header(CACHE_CONTROL, "no-store")
            .header(PRAGMA, "no-cache")
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(LoadError::Status {
                path: path.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response.bytes().await.map_err(transport)?;
        tracing::debug!("Fetched {} ({} bytes)", url, body.len());
        parse_body(path, &body)
    }
}
