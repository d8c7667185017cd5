// Utilities for storage module
pub mod error;
pub mod path;
