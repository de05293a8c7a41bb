//! `check`: initialize the registry and report the outcome.

use anyhow::Context as _;
use plotembed_templates::{RegistryConfig, TemplateRegistry};

use crate::output;

pub(crate) fn handle_check_command(config: &RegistryConfig) -> anyhow::Result<()> {
    let registry = TemplateRegistry::load(config).context("template registry failed to initialize")?;

    for template in registry.templates() {
        output::template_row(true, template.name(), "");
    }
    output::summary(format!(
        "Loaded {} template(s) from {}.",
        registry.templates().count(),
        registry.templates_dir().display()
    ));

    Ok(())
}
