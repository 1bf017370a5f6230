use iced::Task;
use marquee_config::{Appearance, ConfigLoader, ConfigSource};
use marquee_core::CarouselSettings;
use marquee_model::Catalog;

use crate::messages::Message;
use crate::state::State;

/// Everything the player needs to boot, resolved before the window opens.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub settings: CarouselSettings,
    pub appearance: Appearance,
    pub catalog: Catalog,
    pub source: ConfigSource,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            settings: CarouselSettings::default(),
            appearance: Appearance::default(),
            catalog: Catalog::builtin(),
            source: ConfigSource::Default,
        }
    }
}

impl AppConfig {
    /// Resolve configuration from `MARQUEE_*` variables, `.env` and the
    /// well-known config files. Falls back to built-in defaults when
    /// anything is unreadable or out of bounds.
    pub fn from_environment() -> Self {
        Self::from_loader(&ConfigLoader::from_process())
    }

    pub fn from_loader(loader: &ConfigLoader) -> Self {
        match loader.load() {
            Ok(load) => {
                log::info!("Using carousel config from {:?}", load.source);
                Self {
                    settings: load.config.settings,
                    appearance: load.config.appearance,
                    catalog: Catalog::builtin(),
                    source: load.source,
                }
            }
            Err(err) => {
                log::warn!("Falling back to default carousel config: {err:#}");
                Self::default()
            }
        }
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }
}

/// Initial state for a config.
pub fn base_state(config: &AppConfig) -> State {
    State::new(config.catalog.clone(), config.settings, config.appearance)
}

/// Boot logic for the running application.
pub fn runtime_boot(config: &AppConfig) -> (State, Task<Message>) {
    let state = base_state(config);
    log::debug!(
        "Booted carousel with {} testimonials, theme {}, reduced motion {}",
        state.catalog.len(),
        state.theme,
        state.carousel.reduced_motion()
    );
    (state, Task::none())
}
