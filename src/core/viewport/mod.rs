//! The exploration record and its fixed value sets.

pub mod limits;
pub mod palette;
pub mod precision;
pub mod state;
