//! Serializable configuration surface.

use marquee_core::CarouselSettings;
use marquee_model::ThemeMode;
use serde::{Deserialize, Serialize};

/// Root of a `marquee.toml` / `marquee.json` document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub carousel: CarouselSection,
    pub appearance: AppearanceSection,
}

/// `[carousel]`: layout and motion tuning. Every field is optional in the
/// file; missing ones keep the built-in value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselSection {
    pub gap: f32,
    pub card_height: f32,
    pub min_card_width: f32,
    pub max_card_width: f32,
    pub fallback_card_width: f32,
    pub visible_cards: u16,
    /// Auto-advance speed in px/s.
    pub speed: f32,
    pub step_buttons_min_width: f32,
}

impl Default for CarouselSection {
    fn default() -> Self {
        CarouselSettings::default().into()
    }
}

impl From<CarouselSettings> for CarouselSection {
    fn from(s: CarouselSettings) -> Self {
        Self {
            gap: s.gap,
            card_height: s.card_height,
            min_card_width: s.min_card_width,
            max_card_width: s.max_card_width,
            fallback_card_width: s.fallback_card_width,
            visible_cards: s.visible_cards,
            speed: s.speed,
            step_buttons_min_width: s.step_buttons_min_width,
        }
    }
}

impl CarouselSection {
    /// Unchecked conversion; use
    /// [`apply_guard_rails`](crate::apply_guard_rails) for user input.
    pub fn to_settings(&self) -> CarouselSettings {
        CarouselSettings {
            gap: self.gap,
            card_height: self.card_height,
            min_card_width: self.min_card_width,
            max_card_width: self.max_card_width,
            fallback_card_width: self.fallback_card_width,
            visible_cards: self.visible_cards,
            speed: self.speed,
            step_buttons_min_width: self.step_buttons_min_width,
        }
    }
}

/// `[appearance]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppearanceSection {
    pub theme: ThemeMode,
    pub reduced_motion: bool,
}

/// Resolved appearance handed to the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Appearance {
    pub theme: ThemeMode,
    pub reduced_motion: bool,
}

impl From<&AppearanceSection> for Appearance {
    fn from(section: &AppearanceSection) -> Self {
        Self {
            theme: section.theme,
            reduced_motion: section.reduced_motion,
        }
    }
}
