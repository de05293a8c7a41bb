//! Styled terminal output for `plotembed-ctl`.
//!
//! Status lines go through `anstream`, which strips ANSI codes when the
//! stream is not a terminal. Rendered template text is written by the render
//! command directly and never styled.

mod styles;

use std::fmt::Display;
use std::io::Write;
use std::path::Path;

use plotembed_templates::{BaseDirSource, TemplateName};

pub(crate) use styles::clap_styles;

use styles::{DIM, ERROR, HEADER, LABEL, SUCCESS, WARNING};

/// Heading block naming the templates directory and where its base came from.
pub(crate) fn templates_dir_banner(templates_dir: &Path, source: BaseDirSource) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "{HEADER}Embedding templates:{HEADER:#}").ok();
    writeln!(out, "  {LABEL}Directory:{LABEL:#} {}", templates_dir.display()).ok();
    writeln!(out, "{DIM}  (base directory from {source:?}){DIM:#}").ok();
    writeln!(out).ok();
}

/// One template per line: symbol, file name, optional note.
pub(crate) fn template_row(ok: bool, name: TemplateName, note: &str) {
    let mark = if ok { SUCCESS } else { ERROR };
    let icon = if ok { '✓' } else { '✗' };
    let mut out = anstream::stdout().lock();
    writeln!(out, "  {mark}{icon}{mark:#} {name:<16} {}{note}", name.file_name()).ok();
}

/// Closing line after a block of rows; a blank line separates them.
pub(crate) fn summary(msg: impl Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out).ok();
    writeln!(out, "{SUCCESS}✓ {msg}{SUCCESS:#}").ok();
}

pub(crate) fn warning(msg: impl Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "{WARNING}! {msg}{WARNING:#}").ok();
}

/// Print an error message to stderr.
pub(crate) fn error(msg: impl Display) {
    let mut out = anstream::stderr().lock();
    writeln!(out, "{ERROR}✗ {msg}{ERROR:#}").ok();
}
