//! Process-wide style registry.
//!
//! Stands in for the plotting library's global rc state. One registry per
//! process, created on first use. Every apply overwrites what earlier ones
//! wrote; there is no versioning or rollback.

use std::sync::Mutex;

use crate::error::StyleError;
use crate::settings::{Settings, SettingsBuilder};
use crate::sink::StyleRegistry;

static REGISTRY: Mutex<Option<StyleRegistry>> = Mutex::new(None);

/// Run `f` with the global registry locked
pub fn with_registry<F, R>(f: F) -> R
where
    F: FnOnce(&mut StyleRegistry) -> R,
{
    let mut guard = REGISTRY.lock().unwrap_or_else(|e| e.into_inner());
    let registry = guard.get_or_insert_with(StyleRegistry::new);
    f(registry)
}

/// Apply a builder to the global registry
pub fn apply(builder: SettingsBuilder) -> Result<Settings, StyleError> {
    with_registry(|registry| builder.apply(registry))
}

/// Copy of the global registry's current state
pub fn snapshot() -> StyleRegistry {
    with_registry(|registry| registry.clone())
}
