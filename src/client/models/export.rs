//! Documentation export request

use serde::Serialize;

use crate::config::{Accepts, ExportType, Extensions, ProviderSettings, SwaggerUiSettings};

/// Parameters of a single documentation export
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub rest_api_id: String,
    pub stage_name: String,
    pub export_type: ExportType,
    pub accepts: Accepts,
    pub extensions: Extensions,
}

impl ExportRequest {
    /// Build the request for a resolved API id
    pub fn new(
        rest_api_id: impl Into<String>,
        provider: &ProviderSettings,
        settings: &SwaggerUiSettings,
    ) -> Self {
        Self {
            rest_api_id: rest_api_id.into(),
            stage_name: provider.stage.clone(),
            export_type: settings.export_type,
            accepts: settings.accepts,
            extensions: settings.extensions,
        }
    }
}
