pub mod list_renderer;
pub mod page_shell;
pub mod sort_control;
