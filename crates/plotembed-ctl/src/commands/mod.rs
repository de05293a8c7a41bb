//! Command handlers for `plotembed-ctl`.

pub(crate) mod check;
pub(crate) mod list;
pub(crate) mod render;

pub(crate) use check::handle_check_command;
pub(crate) use list::handle_list_command;
pub(crate) use render::handle_render_command;
