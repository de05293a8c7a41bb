//! The template registry: one Tera environment holding every embedding template.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tera::{Context, Tera};
use tracing::{debug, info};

use crate::config::RegistryConfig;
use crate::error::{describe_tera_error, RegistryError, Result};
use crate::filters;
use crate::names::TemplateName;

const AUTOESCAPE_SUFFIXES: [&str; 3] = [".html", ".htm", ".xml"];

/// Pre-parsed embedding templates, ready to render.
///
/// Built once at startup with [`TemplateRegistry::load`]; construction either
/// parses every required template or fails. The registry is immutable
/// afterwards and can be shared across threads.
#[derive(Debug)]
pub struct TemplateRegistry {
    tera: Tera,
    templates_dir: PathBuf,
    loaded: Vec<TemplateName>,
}

impl TemplateRegistry {
    /// Build a registry according to `config`.
    pub fn load(config: &RegistryConfig) -> Result<Self> {
        let mut loaded = config.templates.clone();
        loaded.sort();
        loaded.dedup();
        if loaded.is_empty() {
            return Err(RegistryError::InvalidConfig(
                "`templates` must name at least one template".to_string(),
            ));
        }

        let (base_dir, source) = config.resolve_base_dir()?;
        debug!(base_dir = %base_dir.display(), ?source, "Resolved template base directory");

        let templates_dir = config.templates_dir_under(&base_dir);

        let mut tera = Tera::default();
        if config.autoescape {
            tera.autoescape_on(AUTOESCAPE_SUFFIXES.to_vec());
        } else {
            tera.autoescape_on(Vec::new());
        }
        filters::register(&mut tera);

        for name in &loaded {
            let path = templates_dir.join(name.file_name());
            let content = read_template(*name, &path)?;
            tera.add_raw_template(name.file_name(), &content)
                .map_err(|e| RegistryError::TemplateSyntax {
                    file: name.file_name(),
                    detail: describe_tera_error(&e),
                })?;
            debug!(template = %name, path = %path.display(), "Parsed template");
        }

        info!(
            templates_dir = %templates_dir.display(),
            count = loaded.len(),
            "Template registry initialized"
        );

        Ok(Self {
            tera,
            templates_dir,
            loaded,
        })
    }

    /// Build a registry requiring every template under `<base_dir>/_templates`.
    pub fn from_base_dir(base_dir: impl Into<PathBuf>) -> Result<Self> {
        Self::load(&RegistryConfig::with_base_dir(base_dir))
    }

    /// Directory the templates were read from.
    pub fn templates_dir(&self) -> &Path {
        &self.templates_dir
    }

    /// Whether `name` was loaded by this registry.
    pub fn contains(&self, name: TemplateName) -> bool {
        self.loaded.binary_search(&name).is_ok()
    }

    /// Handle for one template.
    pub fn template(&self, name: TemplateName) -> Result<Template<'_>> {
        if !self.contains(name) {
            return Err(RegistryError::NotLoaded(name));
        }
        Ok(Template {
            tera: &self.tera,
            name,
        })
    }

    /// Handles for every loaded template, in declaration order.
    pub fn templates(&self) -> impl Iterator<Item = Template<'_>> + '_ {
        self.loaded.iter().map(move |&name| Template {
            tera: &self.tera,
            name,
        })
    }

    /// Shorthand for `self.template(name)?.render(context)`.
    pub fn render(&self, name: TemplateName, context: &Context) -> Result<String> {
        self.template(name)?.render(context)
    }
}

fn read_template(name: TemplateName, path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RegistryError::TemplateNotFound {
                file: name.file_name(),
                path: path.to_path_buf(),
            }
        } else {
            RegistryError::TemplateRead {
                file: name.file_name(),
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// A parsed template borrowed from a [`TemplateRegistry`].
///
/// Rendering takes `&self` and touches no shared mutable state, so one handle
/// can render from many threads at once.
#[derive(Debug, Clone, Copy)]
pub struct Template<'a> {
    tera: &'a Tera,
    name: TemplateName,
}

impl Template<'_> {
    /// Which template this handle renders.
    pub fn name(&self) -> TemplateName {
        self.name
    }

    /// File name the template was parsed from.
    pub fn file_name(&self) -> &'static str {
        self.name.file_name()
    }

    /// Render with a Tera context.
    pub fn render(&self, context: &Context) -> Result<String> {
        self.tera
            .render(self.name.file_name(), context)
            .map_err(|e| RegistryError::Render {
                template: self.name.file_name(),
                detail: describe_tera_error(&e),
            })
    }

    /// Render with a JSON object as context. `null` renders with an empty context.
    pub fn render_json(&self, context: &serde_json::Value) -> Result<String> {
        let context = match context {
            serde_json::Value::Null => Context::new(),
            other => Context::from_value(other.clone())
                .map_err(|e| RegistryError::InvalidContext(describe_tera_error(&e)))?,
        };
        self.render(&context)
    }

    /// Render with any serializable struct or map as context.
    pub fn render_serialize<T: Serialize + ?Sized>(&self, context: &T) -> Result<String> {
        let context = Context::from_serialize(context)
            .map_err(|e| RegistryError::InvalidContext(describe_tera_error(&e)))?;
        self.render(&context)
    }
}
