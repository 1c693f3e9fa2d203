//! Swagger UI plugin settings
//!
//! Resolution never fails: anything unrecognized falls back to a default.

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::fmt;

/// Default output directory name, relative to the service path
pub const DEFAULT_DIRECTORY_NAME: &str = ".swagger-ui";

/// An enumerated setting with a fixed set of wire values and a default
pub trait Choice: Copy + Default + 'static {
    /// Every accepted value
    const ALL: &'static [Self];

    /// Wire representation
    fn as_str(self) -> &'static str;

    /// Parse a loosely-typed value, falling back to the default.
    fn resolve(value: Option<&Value>) -> Self {
        value
            .and_then(Value::as_str)
            .and_then(|raw| Self::ALL.iter().copied().find(|c| c.as_str() == raw))
            .unwrap_or_default()
    }
}

/// Specification flavor requested from the export service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ExportType {
    #[default]
    #[serde(rename = "oas30")]
    Oas30,
    #[serde(rename = "swagger")]
    Swagger,
}

impl Choice for ExportType {
    const ALL: &'static [Self] = &[ExportType::Oas30, ExportType::Swagger];

    fn as_str(self) -> &'static str {
        match self {
            ExportType::Oas30 => "oas30",
            ExportType::Swagger => "swagger",
        }
    }
}

/// Media type of the exported documentation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Accepts {
    #[serde(rename = "application/json")]
    Json,
    #[default]
    #[serde(rename = "application/yaml")]
    Yaml,
}

impl Choice for Accepts {
    const ALL: &'static [Self] = &[Accepts::Json, Accepts::Yaml];

    fn as_str(self) -> &'static str {
        match self {
            Accepts::Json => "application/json",
            Accepts::Yaml => "application/yaml",
        }
    }
}

impl Accepts {
    /// File extension of the generated documentation file
    pub fn file_extension(self) -> &'static str {
        match self {
            Accepts::Json => "json",
            Accepts::Yaml => "yaml",
        }
    }
}

/// Which vendor extensions the export includes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Extensions {
    #[default]
    #[serde(rename = "integrations")]
    Integrations,
    #[serde(rename = "apigateway")]
    ApiGateway,
    #[serde(rename = "authorizers")]
    Authorizers,
}

impl Choice for Extensions {
    const ALL: &'static [Self] = &[
        Extensions::Integrations,
        Extensions::ApiGateway,
        Extensions::Authorizers,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Extensions::Integrations => "integrations",
            Extensions::ApiGateway => "apigateway",
            Extensions::Authorizers => "authorizers",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(ExportType, Accepts, Extensions);

/// Plugin settings exactly as written under `custom.swaggerUi`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSwaggerUiConfig {
    #[serde(default)]
    pub export_type: Option<Value>,
    #[serde(default)]
    pub accepts: Option<Value>,
    #[serde(default)]
    pub extensions: Option<Value>,
    #[serde(default)]
    pub s3_bucket: Option<Value>,
    #[serde(default)]
    pub swagger_ui_directory_name: Option<Value>,
    #[serde(default)]
    pub swagger_ui_config: Option<Value>,
}

impl RawSwaggerUiConfig {
    /// Read raw settings from an untyped value; non-mappings yield empty settings.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(value @ Value::Mapping(_)) => {
                serde_yaml::from_value(value.clone()).unwrap_or_default()
            }
            _ => Self::default(),
        }
    }
}

/// Fully resolved plugin settings
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwaggerUiSettings {
    pub export_type: ExportType,
    pub accepts: Accepts,
    pub extensions: Extensions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_bucket: Option<String>,
    #[serde(rename = "swaggerUiDirectoryName")]
    pub directory_name: String,
    #[serde(rename = "swaggerUiConfig", skip_serializing_if = "Option::is_none")]
    pub viewer_config: Option<Mapping>,
}

impl Default for SwaggerUiSettings {
    fn default() -> Self {
        Self {
            export_type: ExportType::default(),
            accepts: Accepts::default(),
            extensions: Extensions::default(),
            s3_bucket: None,
            directory_name: DEFAULT_DIRECTORY_NAME.to_string(),
            viewer_config: None,
        }
    }
}

impl SwaggerUiSettings {
    /// Apply defaults to raw settings.
    pub fn resolve(raw: &RawSwaggerUiConfig) -> Self {
        let directory_name = non_empty_str(raw.swagger_ui_directory_name.as_ref())
            .unwrap_or(DEFAULT_DIRECTORY_NAME)
            .to_string();

        let viewer_config = match &raw.swagger_ui_config {
            Some(Value::Mapping(mapping)) => Some(mapping.clone()),
            _ => None,
        };

        Self {
            export_type: ExportType::resolve(raw.export_type.as_ref()),
            accepts: Accepts::resolve(raw.accepts.as_ref()),
            extensions: Extensions::resolve(raw.extensions.as_ref()),
            s3_bucket: non_empty_str(raw.s3_bucket.as_ref()).map(str::to_string),
            directory_name,
            viewer_config,
        }
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(yaml: &str) -> RawSwaggerUiConfig {
        let value: Value = serde_yaml::from_str(yaml).unwrap();
        RawSwaggerUiConfig::from_value(Some(&value))
    }

    #[test]
    fn test_resolve_empty_uses_defaults() {
        let settings = SwaggerUiSettings::resolve(&RawSwaggerUiConfig::default());

        assert_eq!(settings.export_type, ExportType::Oas30);
        assert_eq!(settings.accepts, Accepts::Yaml);
        assert_eq!(settings.extensions, Extensions::Integrations);
        assert_eq!(settings.directory_name, ".swagger-ui");
        assert!(settings.s3_bucket.is_none());
        assert!(settings.viewer_config.is_none());
    }

    #[test]
    fn test_resolve_invalid_enums_fall_back() {
        let settings = SwaggerUiSettings::resolve(&raw(
            "exportType: openapi31\naccepts: text/plain\nextensions: everything\n",
        ));

        assert_eq!(settings.export_type, ExportType::Oas30);
        assert_eq!(settings.accepts, Accepts::Yaml);
        assert_eq!(settings.extensions, Extensions::Integrations);
    }

    #[test]
    fn test_resolve_wrong_types_fall_back() {
        let settings = SwaggerUiSettings::resolve(&raw(
            "exportType: 3\naccepts: [application/json]\nswaggerUiDirectoryName: 7\ns3Bucket: true\n",
        ));

        assert_eq!(settings.export_type, ExportType::Oas30);
        assert_eq!(settings.accepts, Accepts::Yaml);
        assert_eq!(settings.directory_name, ".swagger-ui");
        assert!(settings.s3_bucket.is_none());
    }

    #[test]
    fn test_resolve_valid_values_pass_through() {
        let settings = SwaggerUiSettings::resolve(&raw(
            r#"
exportType: swagger
accepts: application/json
extensions: authorizers
s3Bucket: docs-bucket
swaggerUiDirectoryName: public-docs
swaggerUiConfig:
  docExpansion: none
  deepLinking: false
"#,
        ));

        assert_eq!(settings.export_type, ExportType::Swagger);
        assert_eq!(settings.accepts, Accepts::Json);
        assert_eq!(settings.extensions, Extensions::Authorizers);
        assert_eq!(settings.s3_bucket.as_deref(), Some("docs-bucket"));
        assert_eq!(settings.directory_name, "public-docs");

        let viewer = settings.viewer_config.unwrap();
        assert_eq!(viewer.get("docExpansion"), Some(&Value::from("none")));
        assert_eq!(viewer.get("deepLinking"), Some(&Value::from(false)));
    }

    #[test]
    fn test_resolve_empty_strings_fall_back() {
        let settings =
            SwaggerUiSettings::resolve(&raw("s3Bucket: ''\nswaggerUiDirectoryName: ''\n"));

        assert!(settings.s3_bucket.is_none());
        assert_eq!(settings.directory_name, ".swagger-ui");
    }

    #[test]
    fn test_non_mapping_section_is_ignored() {
        let value = Value::from("not a mapping");
        let settings = SwaggerUiSettings::resolve(&RawSwaggerUiConfig::from_value(Some(&value)));
        assert_eq!(settings, SwaggerUiSettings::default());
    }

    #[test]
    fn test_non_mapping_viewer_config_is_ignored() {
        let settings = SwaggerUiSettings::resolve(&raw("swaggerUiConfig: [1, 2]\n"));
        assert!(settings.viewer_config.is_none());
    }

    #[test]
    fn test_accepts_file_extension() {
        assert_eq!(Accepts::Json.file_extension(), "json");
        assert_eq!(Accepts::Yaml.file_extension(), "yaml");
    }

    #[test]
    fn test_choice_display_uses_wire_value() {
        assert_eq!(ExportType::Swagger.to_string(), "swagger");
        assert_eq!(Accepts::Json.to_string(), "application/json");
        assert_eq!(Extensions::ApiGateway.to_string(), "apigateway");
    }
}
