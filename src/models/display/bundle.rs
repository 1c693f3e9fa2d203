//! Build summary display model

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use super::{NONE, format_size};
use crate::bundle::BundleFile;
use crate::cli::OutputFormat;
use crate::cli::swagger_ui::BuildSummary;
use crate::error::Result;
use crate::output::Formattable;
use crate::output::json::format_json;
use crate::output::table::format_table;
use crate::publish::content_type_for;

/// Bundle file display model for table output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct BundleFileDisplay {
    #[tabled(rename = "FILE")]
    pub name: String,

    #[tabled(rename = "SIZE")]
    pub size: String,

    #[tabled(rename = "CONTENT TYPE")]
    pub content_type: String,
}

impl From<&BundleFile> for BundleFileDisplay {
    fn from(file: &BundleFile) -> Self {
        Self {
            name: file.name.clone(),
            size: format_size(file.size),
            content_type: content_type_for(&file.name).unwrap_or(NONE).to_string(),
        }
    }
}

impl Formattable for BuildSummary {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(format_json(self)?),
            OutputFormat::Table => {
                let rows: Vec<BundleFileDisplay> = self.files.iter().map(Into::into).collect();
                Ok(format_table(&rows))
            }
            OutputFormat::Pretty => Ok(self.pretty()),
        }
    }
}

impl BuildSummary {
    fn pretty(&self) -> String {
        let mut lines = vec![
            format!(
                "{} Swagger UI written to {} ({} files)",
                "✓".green(),
                self.output_dir.display().to_string().cyan(),
                self.files.len()
            ),
            format!(
                "  Documentation: {} (API {}, stage {})",
                self.documentation_file.bold(),
                self.api_id,
                self.stage
            ),
        ];

        if let Some(bucket) = &self.bucket {
            lines.push(format!(
                "{} Uploaded {} files to {}",
                "✓".green(),
                self.uploaded,
                format!("s3://{}", bucket).cyan()
            ));
        }

        lines.join("\n")
    }
}
