//! Publishing a bundle to S3
//!
//! Every file is uploaded concurrently with no limit. All uploads are driven
//! to completion; failures are collected and reported together, so a failed
//! publish names exactly which keys are stale in the bucket.

use std::path::Path;

use futures::stream::{FuturesUnordered, StreamExt};
use log::{debug, info};

use crate::LOG_TARGET;
use crate::bundle::{self, BundleFile};
use crate::client::ObjectStoreApi;
use crate::client::models::PutObjectRequest;
use crate::error::{PublishError, Result};

/// Content type for a bundle file, by extension
pub fn content_type_for(file_name: &str) -> Option<&'static str> {
    let extension = Path::new(file_name).extension()?.to_str()?;
    match extension {
        "css" => Some("text/css"),
        "html" => Some("text/html; charset=utf-8"),
        "js" => Some("text/javascript"),
        "json" | "map" => Some("application/json"),
        "png" => Some("image/png"),
        "yaml" => Some("text/yaml"),
        _ => None,
    }
}

/// Upload every top-level file of `dir` to `bucket`, keyed by file name.
///
/// Returns the uploaded files.
pub async fn publish_directory(
    api: &dyn ObjectStoreApi,
    dir: &Path,
    bucket: &str,
) -> Result<Vec<BundleFile>> {
    info!(target: LOG_TARGET, "Uploading Swagger UI files to S3...");

    let files = bundle::list_files(dir)?;
    debug!("Uploading {} files to s3://{}", files.len(), bucket);

    let mut uploads = FuturesUnordered::new();
    for file in files {
        uploads.push(async move {
            let result = upload_file(api, bucket, &file).await;
            (file, result)
        });
    }

    let mut uploaded = Vec::new();
    let mut failures = Vec::new();
    while let Some((file, result)) = uploads.next().await {
        match result {
            Ok(()) => {
                debug!("Uploaded {}", file.name);
                uploaded.push(file);
            }
            Err(err) => {
                debug!("Upload of {} failed: {}", file.name, err);
                failures.push((file.name, err.to_string()));
            }
        }
    }

    if !failures.is_empty() {
        failures.sort();
        return Err(PublishError::Incomplete {
            bucket: bucket.to_string(),
            uploaded: uploaded.len(),
            failures,
        }
        .into());
    }

    uploaded.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(uploaded)
}

async fn upload_file(api: &dyn ObjectStoreApi, bucket: &str, file: &BundleFile) -> Result<()> {
    let body = tokio::fs::read(&file.path).await?;
    api.put_object(PutObjectRequest {
        bucket: bucket.to_string(),
        key: file.name.clone(),
        body,
        content_type: content_type_for(&file.name),
    })
    .await
}
