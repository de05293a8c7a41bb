//! Error types for registry initialization and rendering.

use std::path::PathBuf;

use crate::names::TemplateName;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RegistryError>;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("could not determine template base directory: {0}")]
    PathResolution(String),

    #[error("invalid registry configuration: {0}")]
    InvalidConfig(String),

    #[error("template '{file}' not found at {}", path.display())]
    TemplateNotFound { file: &'static str, path: PathBuf },

    #[error("failed to read template '{file}' at {}: {source}", path.display())]
    TemplateRead {
        file: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse template '{file}': {detail}")]
    TemplateSyntax { file: &'static str, detail: String },

    #[error("render error for '{template}': {detail}")]
    Render {
        template: &'static str,
        detail: String,
    },

    #[error("invalid render context: {0}")]
    InvalidContext(String),

    #[error("template {0} was not loaded by this registry")]
    NotLoaded(TemplateName),

    #[error("unknown template name: {0}")]
    UnknownTemplate(String),
}

impl RegistryError {
    /// File name of the template involved, if any.
    pub fn file(&self) -> Option<&'static str> {
        match self {
            Self::TemplateNotFound { file, .. }
            | Self::TemplateRead { file, .. }
            | Self::TemplateSyntax { file, .. } => Some(file),
            Self::Render { template, .. } => Some(template),
            Self::NotLoaded(name) => Some(name.file_name()),
            Self::PathResolution(_)
            | Self::InvalidConfig(_)
            | Self::InvalidContext(_)
            | Self::UnknownTemplate(_) => None,
        }
    }
}

/// Flatten a tera error and its sources into one line.
///
/// Tera's top-level message for parse failures only names the template; the
/// line/column detail lives in the source chain.
pub(crate) fn describe_tera_error(err: &tera::Error) -> String {
    use std::error::Error as _;

    let mut detail = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        detail.push_str(": ");
        detail.push_str(&cause.to_string());
        source = cause.source();
    }
    detail
}
