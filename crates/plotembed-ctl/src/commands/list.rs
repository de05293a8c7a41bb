//! `list`: show every embedding template and whether its file is present.

use plotembed_templates::{RegistryConfig, TemplateName};

use crate::output;

pub(crate) fn handle_list_command(config: &RegistryConfig) -> anyhow::Result<()> {
    let (base_dir, source) = config.resolve_base_dir()?;
    let templates_dir = config.templates_dir_under(&base_dir);

    output::templates_dir_banner(&templates_dir, source);

    if !templates_dir.is_dir() {
        output::warning(format!(
            "Template directory {} does not exist.",
            templates_dir.display()
        ));
    }

    for name in TemplateName::ALL {
        let required = config.templates.contains(&name);
        let present = templates_dir.join(name.file_name()).is_file();
        let note = match (required, present) {
            (true, true) => "",
            (true, false) => "  (missing)",
            (false, true) => "  (not required)",
            (false, false) => "  (not required, missing)",
        };
        output::template_row(present || !required, name, note);
    }

    Ok(())
}
