pub mod interaction_controller;
pub mod session;
