pub mod frame;
pub mod preset;
pub mod converter;
