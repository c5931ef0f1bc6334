// Source trait for dashboard document access
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Why a document could not be produced. Every variant names the path.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to load {path}: status {status}")]
    Status { path: String, status: u16 },

    #[error("Failed to load {path}: {source}")]
    Transport {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to load {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    pub fn path(&self) -> &str {
        match self {
            LoadError::Status { path, .. }
            | LoadError::Transport { path, .. }
            | LoadError::Io { path, .. }
            | LoadError::Parse { path, .. } => path,
        }
    }
}

#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Retrieve and parse one document in a single uncached attempt.
    async fn fetch_json(&self, path: &str) -> Result<Value, LoadError>;
}

/// Parse a fetched body, attributing failures to `path`.
pub fn parse_body(path: &str, body: &[u8]) -> Result<Value, LoadError> {
    serde_json::from_slice(body).map_err(|source| LoadError::Parse {
        path: path.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_body() {
        let value = parse_body("./data/ventures.json", br#"{"ventures": []}"#).unwrap();
        assert!(value["ventures"].is_array());

        let err = parse_body("./data/ventures.json", b"{not json").unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
        assert_eq!(err.path(), "./data/ventures.json");
        assert!(err.to_string().starts_with("Failed to parse ./data/ventures.json"));
    }

    #[test]
    fn test_transport_error_names_path() {
        let cause = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let err = LoadError::Transport {
            path: "./data/system-health.json".to_string(),
            source: Box::new(cause),
        };
        assert_eq!(err.path(), "./data/system-health.json");
        assert_eq!(
            err.to_string(),
            "Failed to load ./data/system-health.json: connection refused"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_status_error_names_path() {
        let err = LoadError::Status {
            path: "./data/finance.json".to_string(),
            status: 404,
        };
        assert_eq!(err.to_string(), "Failed to load ./data/finance.json: status 404");
    }
}
