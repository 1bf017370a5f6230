//! Carousel constants
//!
//! Defaults for card layout, auto-advance speed and the responsive
//! breakpoint. [`CarouselSettings`](crate::CarouselSettings) starts from
//! these; configuration can override most of them.

/// Card and track layout.
pub mod layout {
    /// Gap between adjacent cards (px).
    pub const CARD_GAP: f32 = 24.0;
    /// Fixed card height (px).
    pub const CARD_HEIGHT: f32 = 360.0;
    /// Narrowest card the sizer will produce (px).
    pub const MIN_CARD_WIDTH: f32 = 260.0;
    /// Widest card the sizer will produce (px).
    pub const MAX_CARD_WIDTH: f32 = 360.0;
    /// Card width used for motion before a usable container width is known.
    pub const FALLBACK_CARD_WIDTH: f32 = 320.0;
    /// Cards the sizer tries to fit side by side.
    pub const VISIBLE_CARDS: u16 = 3;
    /// Upward lift applied to a hovered card (px).
    pub const HOVER_LIFT: f32 = 8.0;
}

/// Auto-advance.
pub mod motion {
    /// Marquee speed (px per second).
    pub const AUTO_SCROLL_SPEED: f32 = 24.0;
}

/// Responsive behavior.
pub mod breakpoints {
    /// Container width from which the step buttons are shown (px).
    pub const MEDIUM: f32 = 768.0;
}
