/// Module containing environment variable helpers
pub mod config;
/// Module containing transaction hash utilities
pub mod hash;
/// Module containing utilities for generating references
pub mod id;
/// Module containing logging utilities
pub mod logger;

pub use hash::*;
pub use id::*;
pub use logger::*;
