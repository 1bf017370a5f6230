use crate::constants::{breakpoints, layout, motion};

/// Tunable carousel parameters.
///
/// Values are trusted as given; `marquee-config` is responsible for
/// guard-railing user supplied numbers before they reach this type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselSettings {
    /// Horizontal space between cards, in px.
    pub gap: f32,
    /// Fixed card height, in px.
    pub card_height: f32,
    /// Lower bound for a measured card width.
    pub min_card_width: f32,
    /// Upper bound for a measured card width.
    pub max_card_width: f32,
    /// Card width used until the container has been measured.
    pub fallback_card_width: f32,
    /// How many cards share the container width before clamping.
    pub visible_cards: u16,
    /// Auto-advance speed in px/s.
    pub speed: f32,
    /// Container width at which the step buttons become visible.
    pub step_buttons_min_width: f32,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            gap: layout::CARD_GAP,
            card_height: layout::CARD_HEIGHT,
            min_card_width: layout::MIN_CARD_WIDTH,
            max_card_width: layout::MAX_CARD_WIDTH,
            fallback_card_width: layout::FALLBACK_CARD_WIDTH,
            visible_cards: layout::VISIBLE_CARDS,
            speed: motion::AUTO_SCROLL_SPEED,
            step_buttons_min_width: breakpoints::MEDIUM,
        }
    }
}
