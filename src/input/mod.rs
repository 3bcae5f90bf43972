mod command_mode;
mod editor_mode;
mod event_loop;
mod mouse;
mod normal_mode;

pub use command_mode::handle_command_mode;
pub use editor_mode::handle_editor_keyboard;
pub use event_loop::run_app;
pub use mouse::handle_mouse_event;
pub use normal_mode::handle_normal_mode;
