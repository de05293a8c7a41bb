//! `render`: render one template to stdout.

use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context as _};
use plotembed_templates::{RegistryConfig, TemplateName, TemplateRegistry};
use serde_json::{Map, Value};

pub(crate) fn handle_render_command(
    config: &RegistryConfig,
    name: TemplateName,
    context_file: Option<&Path>,
    sets: &[String],
) -> anyhow::Result<()> {
    let mut context = match context_file {
        Some(path) => read_context_file(path)?,
        None => Map::new(),
    };
    apply_sets(&mut context, sets)?;

    let registry = TemplateRegistry::load(config).context("template registry failed to initialize")?;
    let rendered = registry
        .template(name)?
        .render_json(&Value::Object(context))?;

    tracing::debug!(template = %name, bytes = rendered.len(), "Rendered template");

    let mut out = std::io::stdout().lock();
    out.write_all(rendered.as_bytes())
        .and_then(|()| out.flush())
        .context("failed to write rendered output")?;
    Ok(())
}

fn read_context_file(path: &Path) -> anyhow::Result<Map<String, Value>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read context file {}", path.display()))?;
    let value: Value = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse context file {}", path.display()))?;
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        _ => bail!("context file {} must contain a JSON object", path.display()),
    }
}

/// Apply `key=value` overrides. Values that parse as JSON keep their type,
/// anything else is taken as a string.
fn apply_sets(context: &mut Map<String, Value>, sets: &[String]) -> anyhow::Result<()> {
    for set in sets {
        let (key, raw) = set
            .split_once('=')
            .with_context(|| format!("invalid --set format: '{set}'. Expected key=value"))?;
        let key = key.trim();
        if key.is_empty() {
            bail!("invalid --set format: '{set}'. Key must not be empty");
        }
        let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        context.insert(key.to_string(), value);
    }
    Ok(())
}
