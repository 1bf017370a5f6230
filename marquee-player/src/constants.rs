//! Player-side constants. Carousel geometry lives in
//! `marquee_core::constants`.

pub mod window {
    pub const DEFAULT_WIDTH: f32 = 1280.0;
    pub const DEFAULT_HEIGHT: f32 = 760.0;
    pub const MIN_WIDTH: f32 = 420.0;
    pub const MIN_HEIGHT: f32 = 600.0;
}

pub mod layout {
    /// Horizontal padding of the section content.
    pub const SECTION_PADDING_X: f32 = 20.0;
    pub const SECTION_PADDING_Y: f32 = 112.0;
    /// Content never grows wider than this (roughly `max-w-6xl`).
    pub const SECTION_MAX_WIDTH: f32 = 1152.0;
    pub const HEADER_TO_STRIP_SPACING: f32 = 48.0;
    /// Inner padding of the strip surface.
    pub const STRIP_PADDING_X: f32 = 20.0;
    pub const STRIP_PADDING_Y: f32 = 12.0;
    pub const CARD_PADDING: f32 = 32.0;
    pub const CARD_RADIUS: f32 = 24.0;
    pub const STEP_BUTTON_INSET: f32 = 12.0;
    pub const LOGO_WIDTH: f32 = 96.0;
    pub const LOGO_HEIGHT: f32 = 32.0;
}

pub mod typography {
    pub const EYEBROW: f32 = 12.0;
    pub const TITLE: f32 = 36.0;
    pub const QUOTE: f32 = 16.0;
    pub const NAME: f32 = 14.0;
    pub const ROLE: f32 = 12.0;
    pub const BADGE: f32 = 12.0;
    pub const STEP_GLYPH: f32 = 20.0;
}

pub mod input {
    /// Pixels per wheel "line" for devices that report line deltas.
    pub const WHEEL_LINE_PX: f32 = 40.0;
    /// Touch fingers are mapped to pointer ids above this base so they never
    /// collide with the mouse.
    pub const TOUCH_POINTER_BASE: u64 = 1 << 32;
}
