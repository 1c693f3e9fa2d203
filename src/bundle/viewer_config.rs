//! Generated `config.yaml` for the Swagger UI loader

use std::fs;
use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::error::Result;

/// Name of the generated viewer configuration file
pub const CONFIG_FILE: &str = "config.yaml";

/// Key always removed from the generated configuration
const CONFIG_URL_KEY: &str = "configUrl";

/// Baseline viewer configuration
pub fn baseline() -> Mapping {
    let mut config = Mapping::new();
    config.insert("dom_id".into(), "#swagger-ui".into());
    config.insert("deepLinking".into(), true.into());
    config.insert(
        "presets".into(),
        Value::Sequence(vec![
            "SwaggerUIBundle.presets.apis".into(),
            "SwaggerUIStandalonePreset".into(),
        ]),
    );
    config.insert(
        "plugins".into(),
        Value::Sequence(vec!["SwaggerUIBundle.plugins.DownloadUrl".into()]),
    );
    config.insert("layout".into(), "StandaloneLayout".into());
    config
}

/// Shallow-merge overrides over the baseline, point `url` at the documentation
/// file and drop `configUrl`.
pub fn merge_viewer_config(overrides: Option<&Mapping>, documentation_file: &str) -> Mapping {
    let mut config = baseline();
    for (key, value) in overrides.into_iter().flatten() {
        config.insert(key.clone(), value.clone());
    }

    config.insert("url".into(), format!("./{}", documentation_file).into());

    config
        .into_iter()
        .filter(|(key, _)| key.as_str() != Some(CONFIG_URL_KEY))
        .collect()
}

/// Render the merged configuration as YAML
pub fn render_viewer_config(overrides: Option<&Mapping>, documentation_file: &str) -> Result<String> {
    let config = merge_viewer_config(overrides, documentation_file);
    Ok(serde_yaml::to_string(&config)?)
}

/// Write `config.yaml` into `target`
pub fn write_config_file(
    target: &Path,
    overrides: Option<&Mapping>,
    documentation_file: &str,
) -> Result<()> {
    let rendered = render_viewer_config(overrides, documentation_file)?;
    fs::write(target.join(CONFIG_FILE), rendered)?;
    Ok(())
}
