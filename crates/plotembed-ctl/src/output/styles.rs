//! Style constants and clap help styling.

use anstyle::{AnsiColor, Color, Effects, Style};

pub(crate) const SUCCESS: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green)));

pub(crate) const ERROR: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red)));

pub(crate) const WARNING: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow)));

/// Bold: section headers and label names.
pub(crate) const HEADER: Style = Style::new().effects(Effects::BOLD);

pub(crate) const LABEL: Style = Style::new().effects(Effects::BOLD);

/// Dimmed: secondary information.
pub(crate) const DIM: Style = Style::new().effects(Effects::DIMMED);

/// Help output styles matching the output palette.
pub(crate) fn clap_styles() -> clap::builder::Styles {
    let accent = Style::new()
        .fg_color(Some(Color::Ansi(AnsiColor::Green)))
        .effects(Effects::BOLD);
    clap::builder::Styles::styled()
        .header(accent)
        .usage(accent)
        .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
        .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
        .error(
            Style::new()
                .fg_color(Some(Color::Ansi(AnsiColor::Red)))
                .effects(Effects::BOLD),
        )
        .valid(SUCCESS)
        .invalid(WARNING)
}
