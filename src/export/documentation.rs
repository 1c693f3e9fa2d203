//! Documentation export

use log::{debug, info};

use crate::LOG_TARGET;
use crate::client::ExportApi;
use crate::client::models::ExportRequest;
use crate::error::{DocumentationError, Result};

/// Request the documentation body; an absent or empty body is an error.
pub async fn export_documentation(api: &dyn ExportApi, request: &ExportRequest) -> Result<Vec<u8>> {
    info!(target: LOG_TARGET, "Exporting documentation...");
    debug!(
        "Export {} as {} (extensions={}) for {}/{}",
        request.export_type,
        request.accepts,
        request.extensions,
        request.rest_api_id,
        request.stage_name
    );

    match api.get_export(request).await? {
        Some(body) if !body.is_empty() => Ok(body),
        _ => Err(DocumentationError::Empty {
            rest_api_id: request.rest_api_id.clone(),
            stage: request.stage_name.clone(),
        }
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockAwsClient;
    use crate::config::{Accepts, ExportType, Extensions};
    use crate::error::Error;

    fn request() -> ExportRequest {
        ExportRequest {
            rest_api_id: "abc123".to_string(),
            stage_name: "dev".to_string(),
            export_type: ExportType::Swagger,
            accepts: Accepts::Json,
            extensions: Extensions::Authorizers,
        }
    }

    #[tokio::test]
    async fn test_returns_body() {
        let mock = MockAwsClient::new()
            .with_export_body(r#"{"swagger":"2.0"}"#)
            .await;

        let body = export_documentation(&mock, &request()).await.unwrap();

        assert_eq!(body, br#"{"swagger":"2.0"}"#);
        assert_eq!(mock.export_requests().await, vec![request()]);
    }

    #[tokio::test]
    async fn test_absent_body() {
        let mock = MockAwsClient::new();

        let err = export_documentation(&mock, &request()).await.unwrap_err();

        assert!(matches!(
            err,
            Error::Documentation(DocumentationError::Empty { .. })
        ));
    }

    #[tokio::test]
    async fn test_empty_body() {
        let mock = MockAwsClient::new().with_export_body(Vec::new()).await;

        let err = export_documentation(&mock, &request()).await.unwrap_err();

        assert!(matches!(
            err,
            Error::Documentation(DocumentationError::Empty { .. })
        ));
    }
}
