pub mod actions;
pub mod data;
pub mod fractals;
pub mod options;
pub mod util;
pub mod viewport;
