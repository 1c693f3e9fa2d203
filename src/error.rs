//! Error types for swagger-ui-export

use thiserror::Error;

/// Result type alias for swagger-ui-export operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Stack(#[from] StackError),

    #[error(transparent)]
    Documentation(#[from] DocumentationError),

    #[error(transparent)]
    Bundle(#[from] BundleError),

    #[error(transparent)]
    Publish(#[from] PublishError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Failures reported by a remote AWS service call
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{service} request failed: {message}")]
    Service {
        service: &'static str,
        message: String,
    },
}

impl ApiError {
    /// Wrap a service error, keeping the full source chain in the message.
    pub fn service(service: &'static str, err: impl std::error::Error) -> Self {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        ApiError::Service { service, message }
    }
}

/// Errors raised while resolving the API id from a deployed stack
#[derive(Debug, Error)]
pub enum StackError {
    #[error("Stack: {stack} does not have any stacks")]
    NotFound { stack: String },

    #[error("Stack: {stack} does not have any Outputs")]
    MissingOutputs { stack: String },

    #[error("Stack: {stack} does not have Output: {key}")]
    MissingOutput { stack: String, key: String },

    #[error("Stack: {stack} does not have OutputValue: {key}")]
    MissingOutputValue { stack: String, key: String },

    #[error("Stack: {stack} has a malformed {key} value: {value}")]
    MalformedEndpoint {
        stack: String,
        key: String,
        value: String,
    },
}

/// Errors raised by the documentation export
#[derive(Debug, Error)]
pub enum DocumentationError {
    #[error("Documentation body for API {rest_api_id} (stage {stage}) is empty")]
    Empty { rest_api_id: String, stage: String },
}

/// Errors raised while assembling the bundle directory
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("Swagger UI distribution not found at {0}")]
    MissingDist(String),

    #[error("Output directory has no parent: {0}")]
    InvalidOutputDir(String),

    #[error("Failed to replace {path}: {source}")]
    Commit {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to replace {path}: {source}; previous bundle kept at {retained}")]
    CommitUnrestored {
        path: String,
        retained: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while uploading the bundle
#[derive(Debug, Error)]
pub enum PublishError {
    #[error(
        "Upload to s3://{bucket} incomplete: {uploaded} uploaded, {} failed ({})",
        .failures.len(),
        format_failures(.failures)
    )]
    Incomplete {
        bucket: String,
        uploaded: usize,
        failures: Vec<(String, String)>,
    },
}

fn format_failures(failures: &[(String, String)]) -> String {
    failures
        .iter()
        .map(|(key, cause)| format!("{}: {}", key, cause))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Deployment descriptor not found: {0}")]
    NotFound(String),

    #[error("Failed to parse deployment descriptor: {0}")]
    ParseError(String),

    #[error(
        "Stack name could not be determined. Set `service` in the descriptor or pass --stack-name."
    )]
    MissingStackName,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_not_found_names_stack() {
        let err = StackError::NotFound {
            stack: "orders-dev".to_string(),
        };
        assert!(err.to_string().contains("orders-dev"));
    }

    #[test]
    fn test_missing_output_names_key() {
        let err = StackError::MissingOutput {
            stack: "orders-dev".to_string(),
            key: "ServiceEndpoint".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("orders-dev"));
        assert!(msg.contains("Output: ServiceEndpoint"));
    }

    #[test]
    fn test_missing_output_value_message() {
        let err = StackError::MissingOutputValue {
            stack: "orders-dev".to_string(),
            key: "ServiceEndpoint".to_string(),
        };
        assert!(err.to_string().contains("OutputValue: ServiceEndpoint"));
    }

    #[test]
    fn test_documentation_empty_message() {
        let err = DocumentationError::Empty {
            rest_api_id: "abc123".to_string(),
            stage: "prod".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("abc123"));
        assert!(msg.contains("prod"));
    }

    #[test]
    fn test_publish_incomplete_lists_failures() {
        let err = PublishError::Incomplete {
            bucket: "docs".to_string(),
            uploaded: 3,
            failures: vec![
                ("index.html".to_string(), "AccessDenied".to_string()),
                ("config.yaml".to_string(), "timeout".to_string()),
            ],
        };
        let msg = err.to_string();
        assert!(msg.contains("s3://docs"));
        assert!(msg.contains("3 uploaded, 2 failed"));
        assert!(msg.contains("index.html: AccessDenied"));
        assert!(msg.contains("config.yaml: timeout"));
    }

    #[test]
    fn test_api_error_service_includes_sources() {
        let io = std::io::Error::other("connection reset");
        let err = ApiError::service("S3", io);
        let msg = err.to_string();
        assert!(msg.starts_with("S3 request failed"));
        assert!(msg.contains("connection reset"));
    }

    #[test]
    fn test_error_from_stack_error() {
        let err: Error = StackError::MissingOutputs {
            stack: "s".to_string(),
        }
        .into();

        match err {
            Error::Stack(StackError::MissingOutputs { .. }) => (),
            _ => panic!("Expected Error::Stack(StackError::MissingOutputs)"),
        }
    }

    #[test]
    fn test_config_error_from_yaml_error() {
        let yaml_str = "invalid: [yaml: content";
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let config_err: ConfigError = yaml_err.into();

        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }

    #[test]
    fn test_config_error_missing_stack_name() {
        let err = ConfigError::MissingStackName;
        assert!(err.to_string().contains("--stack-name"));
    }
}
