pub mod errors;
pub mod factory;
pub mod map;
pub mod maps;
