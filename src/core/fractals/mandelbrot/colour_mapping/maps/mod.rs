pub mod abyss;
pub mod greyscale;
pub mod spectrum;
pub mod woodstock;
