//! Resolved configuration display model

use std::path::PathBuf;

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use super::NONE;
use crate::cli::{CommandContext, OutputFormat};
use crate::config::{Choice, ProviderSettings, SwaggerUiSettings};
use crate::error::Result;
use crate::output::Formattable;
use crate::output::json::format_json;
use crate::output::table::format_table;

/// Everything a build would use, as resolved from flags and descriptor
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedConfig {
    pub descriptor: PathBuf,
    pub output_dir: PathBuf,
    pub swagger_ui_dist: PathBuf,
    pub provider: ProviderSettings,
    pub swagger_ui: SwaggerUiSettings,
}

impl From<&CommandContext> for ResolvedConfig {
    fn from(ctx: &CommandContext) -> Self {
        Self {
            descriptor: ctx.descriptor_path.clone(),
            output_dir: ctx.output_dir.clone(),
            swagger_ui_dist: ctx.dist.clone(),
            provider: ctx.provider.clone(),
            swagger_ui: ctx.settings.clone(),
        }
    }
}

/// One key/value row of the resolved configuration
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct SettingDisplay {
    #[tabled(rename = "SETTING")]
    pub key: &'static str,

    #[tabled(rename = "VALUE")]
    pub value: String,
}

impl ResolvedConfig {
    /// Flatten into display rows
    pub fn rows(&self) -> Vec<SettingDisplay> {
        let row = |key, value: String| SettingDisplay { key, value };
        let optional = |value: &Option<String>| value.clone().unwrap_or_else(|| NONE.to_string());
        let overrides = self
            .swagger_ui
            .viewer_config
            .as_ref()
            .map(|m| m.len().to_string())
            .unwrap_or_else(|| NONE.to_string());

        vec![
            row("descriptor", self.descriptor.display().to_string()),
            row("stackName", self.provider.stack_name.clone()),
            row("stage", self.provider.stage.clone()),
            row("region", self.provider.region.clone()),
            row("profile", optional(&self.provider.profile)),
            row("exportType", self.swagger_ui.export_type.as_str().to_string()),
            row("accepts", self.swagger_ui.accepts.as_str().to_string()),
            row("extensions", self.swagger_ui.extensions.as_str().to_string()),
            row("s3Bucket", optional(&self.swagger_ui.s3_bucket)),
            row("outputDirectory", self.output_dir.display().to_string()),
            row("swaggerUiDist", self.swagger_ui_dist.display().to_string()),
            row("swaggerUiConfig keys", overrides),
        ]
    }
}

impl Formattable for ResolvedConfig {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(format_json(self)?),
            OutputFormat::Table => Ok(format_table(&self.rows())),
            OutputFormat::Pretty => {
                let rows = self.rows();
                let width = rows.iter().map(|r| r.key.len()).max().unwrap_or(0);
                let lines: Vec<String> = rows
                    .iter()
                    .map(|r| format!("{}  {}", format!("{:width$}", r.key).bold(), r.value))
                    .collect();
                Ok(lines.join("\n"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Accepts;

    fn resolved() -> ResolvedConfig {
        ResolvedConfig {
            descriptor: PathBuf::from("serverless.yml"),
            output_dir: PathBuf::from(".swagger-ui"),
            swagger_ui_dist: PathBuf::from("node_modules/swagger-ui-dist"),
            provider: ProviderSettings {
                stack_name: "orders-dev".to_string(),
                region: "us-east-1".to_string(),
                stage: "dev".to_string(),
                profile: None,
                endpoint_url: None,
            },
            swagger_ui: SwaggerUiSettings {
                accepts: Accepts::Json,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_rows() {
        let rows = resolved().rows();
        let get = |key: &str| rows.iter().find(|r| r.key == key).unwrap().value.clone();

        assert_eq!(get("stackName"), "orders-dev");
        assert_eq!(get("accepts"), "application/json");
        assert_eq!(get("exportType"), "oas30");
        assert_eq!(get("s3Bucket"), "--");
        assert_eq!(get("profile"), "--");
    }

    #[test]
    fn test_json_uses_descriptor_field_names() {
        let out = resolved().format(OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(parsed["data"]["swagger_ui"]["accepts"], "application/json");
        assert_eq!(parsed["data"]["swagger_ui"]["swaggerUiDirectoryName"], ".swagger-ui");
        assert!(parsed["data"]["swagger_ui"].get("s3Bucket").is_none());
        assert_eq!(parsed["data"]["provider"]["stack_name"], "orders-dev");
    }

    #[test]
    fn test_pretty_output() {
        colored::control::set_override(false);
        let out = resolved().format(OutputFormat::Pretty).unwrap();
        assert!(out.contains("orders-dev"));
        assert!(out.contains("application/json"));
    }
}
