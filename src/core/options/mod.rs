//! Command line option parsing and validation.

pub mod errors;
pub mod flag;
pub mod pair;
pub mod ports;
pub mod validator;

pub use pair::OptionPair;
