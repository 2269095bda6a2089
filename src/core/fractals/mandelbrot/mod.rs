pub mod algorithm;
pub mod colour_mapping;
pub mod kernel;
pub mod program;
