use std::sync::Arc;

use iced::{Application, Font, Program as IcedProgram, Settings, Theme};

use crate::constants::window;
use crate::messages::Message;
use crate::state::State;
use crate::{subscriptions, theme, update, view};

pub mod bootstrap;

pub use bootstrap::AppConfig;

/// Build the Marquee application using the provided configuration.
pub fn application(
    config: AppConfig,
) -> Application<impl IcedProgram<State = State, Message = Message, Theme = Theme>>
{
    let config = Arc::new(config);

    let boot_config = Arc::clone(&config);
    iced::application(
        move || bootstrap::runtime_boot(&boot_config),
        update::update,
        view::view,
    )
    .settings(default_settings())
    .title("Marquee")
    .subscription(subscriptions::subscription)
    .theme(app_theme)
    .window(iced::window::Settings {
        size: iced::Size::new(window::DEFAULT_WIDTH, window::DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(window::MIN_WIDTH, window::MIN_HEIGHT)),
        resizable: true,
        decorations: true,
        ..Default::default()
    })
}

fn default_settings() -> Settings {
    let mut settings = Settings::default();
    settings.id = Some("marquee-player".to_string());
    settings.antialiasing = true;
    settings.default_font = Font::DEFAULT;
    settings
}

fn app_theme(state: &State) -> Theme {
    theme::Palette::for_mode(state.theme).iced_theme()
}
