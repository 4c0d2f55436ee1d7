//! Cubit Services Layer
//!
//! Settings loading and process-wide setup of the ambient random provider.

pub mod settings;

pub use settings::{RandomSettings, RandomSource, Settings, SettingsError};

/// Install the ambient random factory described by `settings`.
///
/// Call once at startup, before any thread draws from the ambient provider.
pub fn init_services(settings: &Settings) -> Result<(), SettingsError> {
    tracing::info!(source = ?settings.random.source, "configuring ambient random source");
    cubit_core::set_factory(settings.random.source.factory())?;
    Ok(())
}
