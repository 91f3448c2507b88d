pub mod core;
pub mod fixture;
