//! `texstyle-style` — plot style settings that match a LaTeX document.
//!
//! Computes rc params (fonts, sizes, figure size, pgf texsystem) from the
//! document's text width and font sizes and writes them into a [`StyleSink`].

pub mod engine;
pub mod error;
pub mod global;
pub mod presets;
pub mod settings;
pub mod sink;
pub mod value;

pub use engine::TexEngine;
pub use error::StyleError;
pub use settings::{FigSize, Settings, SettingsBuilder, GOLDEN_RATIO};
pub use sink::{StyleRegistry, StyleSink};
pub use value::{RcParams, Value};
