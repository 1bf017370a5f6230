use marquee_core::CarouselSettings;
use thiserror::Error;

use crate::models::{Appearance, CarouselSection, Config};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigGuardRailError {
    #[error("carousel.{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("carousel.{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },
    #[error("carousel.{field} must be greater than zero (got {value})")]
    NonPositive { field: &'static str, value: f32 },
    #[error(
        "carousel.min_card_width ({min}) is larger than carousel.max_card_width ({max})"
    )]
    InvertedWidthRange { min: f32, max: f32 },
    #[error("carousel.visible_cards must be at least 1")]
    ZeroVisibleCards,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Config that passed [`apply_guard_rails`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedConfig {
    pub settings: CarouselSettings,
    pub appearance: Appearance,
    pub warnings: ConfigWarnings,
}

pub fn apply_guard_rails(
    config: &Config,
) -> Result<ValidatedConfig, ConfigGuardRailError> {
    let carousel = &config.carousel;
    let mut warnings = ConfigWarnings::default();

    check_numbers(carousel)?;

    if carousel.visible_cards == 0 {
        return Err(ConfigGuardRailError::ZeroVisibleCards);
    }
    if carousel.min_card_width > carousel.max_card_width {
        return Err(ConfigGuardRailError::InvertedWidthRange {
            min: carousel.min_card_width,
            max: carousel.max_card_width,
        });
    }

    if carousel.fallback_card_width < carousel.min_card_width
        || carousel.fallback_card_width > carousel.max_card_width
    {
        warnings.push_with_hint(
            format!(
                "carousel.fallback_card_width ({}) lies outside [{}, {}]",
                carousel.fallback_card_width,
                carousel.min_card_width,
                carousel.max_card_width
            ),
            "cards will change size abruptly once the container is measured",
        );
    }
    if carousel.speed > carousel.max_card_width * 2.0 {
        warnings.push(format!(
            "carousel.speed of {} px/s moves more than two cards per second",
            carousel.speed
        ));
    }

    Ok(ValidatedConfig {
        settings: carousel.to_settings(),
        appearance: Appearance::from(&config.appearance),
        warnings,
    })
}

fn check_numbers(c: &CarouselSection) -> Result<(), ConfigGuardRailError> {
    let fields = [
        ("gap", c.gap),
        ("card_height", c.card_height),
        ("min_card_width", c.min_card_width),
        ("max_card_width", c.max_card_width),
        ("fallback_card_width", c.fallback_card_width),
        ("speed", c.speed),
        ("step_buttons_min_width", c.step_buttons_min_width),
    ];
    for (field, value) in fields {
        if !value.is_finite() {
            return Err(ConfigGuardRailError::NonFinite { field });
        }
    }

    for (field, value) in [
        ("gap", c.gap),
        ("step_buttons_min_width", c.step_buttons_min_width),
    ] {
        if value < 0.0 {
            return Err(ConfigGuardRailError::Negative { field, value });
        }
    }

    for (field, value) in [
        ("card_height", c.card_height),
        ("min_card_width", c.min_card_width),
        ("max_card_width", c.max_card_width),
        ("fallback_card_width", c.fallback_card_width),
        ("speed", c.speed),
    ] {
        if value <= 0.0 {
            return Err(ConfigGuardRailError::NonPositive { field, value });
        }
    }
    Ok(())
}
