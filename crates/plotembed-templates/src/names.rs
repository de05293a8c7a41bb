//! The fixed set of embedding templates and their on-disk file names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::error::RegistryError;

/// One of the embedding templates shipped in `_templates/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemplateName {
    /// `<script>` tags for JS resource files and inline JS.
    JsResources,
    /// `<link>`/`<style>` tags for CSS resources.
    CssResources,
    /// A `<script>` tag wrapping generated JS.
    ScriptTag,
    /// The placeholder `<div>` a plot renders into.
    PlotDiv,
    /// Document bootstrap script for standalone pages.
    DocJs,
    /// Document bootstrap script for notebooks.
    DocNbJs,
    /// A complete standalone HTML file.
    File,
    /// Notebook banner shown while the JS library loads.
    NotebookLoad,
    /// Self-loading script served as `autoload.js`.
    AutoloadJs,
    /// Self-loading script for notebooks.
    AutoloadNbJs,
    /// The `<script>` tag that pulls in an autoload script.
    AutoloadTag,
}

impl TemplateName {
    /// All templates, in registration order.
    pub const ALL: [TemplateName; 11] = [
        Self::JsResources,
        Self::CssResources,
        Self::ScriptTag,
        Self::PlotDiv,
        Self::DocJs,
        Self::DocNbJs,
        Self::File,
        Self::NotebookLoad,
        Self::AutoloadJs,
        Self::AutoloadNbJs,
        Self::AutoloadTag,
    ];

    /// Exported symbol name, e.g. `PLOT_DIV`.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::JsResources => "JS_RESOURCES",
            Self::CssResources => "CSS_RESOURCES",
            Self::ScriptTag => "SCRIPT_TAG",
            Self::PlotDiv => "PLOT_DIV",
            Self::DocJs => "DOC_JS",
            Self::DocNbJs => "DOC_NB_JS",
            Self::File => "FILE",
            Self::NotebookLoad => "NOTEBOOK_LOAD",
            Self::AutoloadJs => "AUTOLOAD_JS",
            Self::AutoloadNbJs => "AUTOLOAD_NB_JS",
            Self::AutoloadTag => "AUTOLOAD_TAG",
        }
    }

    /// File name inside the templates directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::JsResources => "js_resources.html",
            Self::CssResources => "css_resources.html",
            Self::ScriptTag => "script_tag.html",
            Self::PlotDiv => "plot_div.html",
            Self::DocJs => "doc_js.js",
            Self::DocNbJs => "doc_nb_js.js",
            Self::File => "file.html",
            Self::NotebookLoad => "notebook_load.html",
            Self::AutoloadJs => "autoload_js.js",
            Self::AutoloadNbJs => "autoload_nb_js.js",
            Self::AutoloadTag => "autoload_tag.html",
        }
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.symbol())
    }
}

/// Accepts the symbol (`PLOT_DIV`, case-insensitive) or the file name (`plot_div.html`).
impl FromStr for TemplateName {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|name| name.symbol().eq_ignore_ascii_case(s) || name.file_name() == s)
            .ok_or_else(|| RegistryError::UnknownTemplate(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for TemplateName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
