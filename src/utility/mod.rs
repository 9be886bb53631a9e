//! Utility module: option resolution and .env handling.
mod utility;

pub use utility::*;
