//! `texstyle-config` — document setup files for texstyle.
//!
//! Reads `textwidth_inches`, `texengine` and optional font sizes / overrides
//! from a TOML or JSON file and hands them to the settings builder.

pub mod error;
pub mod loader;

pub use error::ConfigError;
pub use loader::{load, load_default, LatexConfig};
