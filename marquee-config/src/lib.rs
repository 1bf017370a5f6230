//! Configuration for the Marquee carousel.
//!
//! Resolves a [`Config`] from an explicit file, inline JSON, well-known file
//! names or built-in defaults, layers `MARQUEE_*` environment overrides on
//! top, and guard-rails the result into the types `marquee-core` consumes.

pub mod error;
pub mod loader;
pub mod models;
pub mod validation;

pub use error::ConfigLoadError;
pub use loader::{ConfigLoad, ConfigLoader, ConfigSource};
pub use models::{Appearance, AppearanceSection, CarouselSection, Config};
pub use validation::{
    ConfigGuardRailError, ConfigWarning, ConfigWarnings, ValidatedConfig,
    apply_guard_rails,
};
