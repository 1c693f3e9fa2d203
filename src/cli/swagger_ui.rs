//! Swagger UI build command
//!
//! Stages the viewer, exports the documentation into the stage, swaps the
//! stage into the output directory and publishes it when a bucket is set.

use std::path::PathBuf;

use log::debug;
use serde::Serialize;

use crate::bundle::{self, BundleFile};
use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::CloudApi;
use crate::client::models::ExportRequest;
use crate::error::Result;
use crate::export::{export_documentation, resolve_api_gateway_id};
use crate::output;
use crate::publish::publish_directory;

/// Outcome of a successful build
#[derive(Debug, Clone, Serialize)]
pub struct BuildSummary {
    pub output_dir: PathBuf,
    pub api_id: String,
    pub stage: String,
    pub documentation_file: String,
    pub files: Vec<BundleFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
    pub uploaded: usize,
}

/// Run the swagger-ui command
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = ctx.aws_client().await;

    let summary = build(&client, &ctx).await?;
    output::print(&summary, ctx.format)
}

/// Build the bundle against any implementation of the remote APIs.
pub async fn build<A: CloudApi>(api: &A, ctx: &CommandContext) -> Result<BuildSummary> {
    let settings = &ctx.settings;

    let (staged, documentation_file) =
        bundle::stage_viewer(settings, &ctx.dist, &ctx.output_dir)?;

    let api_id = resolve_api_gateway_id(api, &ctx.provider.stack_name).await?;
    let request = ExportRequest::new(&api_id, &ctx.provider, settings);
    let body = export_documentation(api, &request).await?;
    bundle::write_documentation_file(staged.path(), &documentation_file, &body)?;

    let output_dir = staged.commit()?;
    let files = bundle::list_files(&output_dir)?;
    debug!("Bundle at {} holds {} files", output_dir.display(), files.len());

    let uploaded = match &settings.s3_bucket {
        Some(bucket) => publish_directory(api, &output_dir, bucket).await?.len(),
        None => 0,
    };

    Ok(BuildSummary {
        output_dir,
        api_id,
        stage: ctx.provider.stage.clone(),
        documentation_file,
        files,
        bucket: settings.s3_bucket.clone(),
        uploaded,
    })
}
