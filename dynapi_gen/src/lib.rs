pub mod header;
pub mod extract;
pub mod emit;
pub mod generator;
