//! Pre-parsed HTML/JS templates for embedding plots and documents.
//!
//! A [`TemplateRegistry`] loads the fixed set of embedding templates from
//! `<base>/_templates`, registers the `json` filter, and hands out
//! [`Template`] handles that render with a context.
//!
//! ```no_run
//! use plotembed_templates::{RegistryConfig, TemplateName, TemplateRegistry};
//! use serde_json::json;
//!
//! let registry = TemplateRegistry::load(&RegistryConfig::with_base_dir("/opt/plotembed"))?;
//! let div = registry
//!     .template(TemplateName::PlotDiv)?
//!     .render_json(&json!({ "elementid": "a1b2" }))?;
//! # Ok::<(), plotembed_templates::RegistryError>(())
//! ```
//!
//! # Modules
//!
//! - [`config`]: registry configuration and base directory resolution
//! - [`filters`]: custom filters (`json`)
//! - [`names`]: the template set and file names
//! - [`registry`]: loading and rendering

pub mod config;
pub mod error;
pub mod filters;
pub mod names;
pub mod registry;

pub use config::{BaseDirSource, RegistryConfig, BASE_DIR_ENV, DEFAULT_TEMPLATES_SUBDIR};
pub use error::{RegistryError, Result};
pub use filters::{JsonFilter, JSON_FILTER};
pub use names::TemplateName;
pub use registry::{Template, TemplateRegistry};

pub use tera::Context;

/// Base directory of the templates shipped with this crate.
///
/// Points into the source tree, so it is only meaningful where the crate was
/// built (tests, local tooling).
pub fn bundled_base_dir() -> &'static std::path::Path {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
}
