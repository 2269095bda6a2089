//! Windowed explorer: winit for the window and events, pixels for the
//! framebuffer, egui for the overlay text and the save prompt.

pub mod app;
pub mod commands;
pub mod errors;
