pub mod gui_app;
pub mod ports;
pub mod save_prompt;
