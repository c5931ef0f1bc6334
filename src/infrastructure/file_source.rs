// Local file document source
use crate::application::document_source::{parse_body, DocumentSource, LoadError};
use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileDocumentSource {
    base_dir: PathBuf,
}

impl FileDocumentSource {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

#[async_trait]
impl DocumentSource for FileDocumentSource {
    async fn fetch_json(&self, path: &str) -> Result<Value, LoadError> {
        let full_path = self.base_dir.join(path);
        let body = tokio::fs::read(&full_path)
            .await
            .map_err(|source| LoadError::Io {
                path: path.to_string(),
                source,
            })?;

        tracing::debug!("Read {} ({} bytes)", full_path.display(), body.len());
        parse_body(path, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::PathSettings;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_bundled_documents_parse() {
        let source = FileDocumentSource::new(env!("CARGO_MANIFEST_DIR"));
        for (domain, path) in PathSettings::default().to_map() {
            let doc = source.fetch_json(&path).await.unwrap();
            assert!(doc.get("generated_at").is_some(), "{} has no generated_at", domain);
        }
    }

    #[tokio::test]
    async fn test_reads_relative_to_base_dir() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("data")).unwrap();
        std::fs::write(
            dir.path().join("data/activity-feed.json"),
            r#"{"events": [{"title": "Deploy"}]}"#,
        )
        .unwrap();

        let source = FileDocumentSource::new(dir.path());
        let doc = source.fetch_json("./data/activity-feed.json").await.unwrap();
        assert_eq!(doc["events"][0]["title"], "Deploy");
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempdir().unwrap();
        let source = FileDocumentSource::new(dir.path());
        let err = source.fetch_json("./data/finance.json").await.unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert_eq!(err.path(), "./data/finance.json");
    }

    #[tokio::test]
    async fn test_malformed_file() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("broken.json"), "[1, 2").unwrap();
        let source = FileDocumentSource::new(dir.path());
        let err = source.fetch_json("broken.json").await.unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }
}
