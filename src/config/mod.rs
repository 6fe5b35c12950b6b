//! Application configuration module
//!
//! Environment-driven settings plus the constants shared across layers
//! (defaults, response messages).

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
