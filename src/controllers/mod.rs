pub mod interactive;
pub mod overlay;
pub mod ports;
pub mod snapshot;
