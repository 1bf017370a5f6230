//! Read-only view of the carousel for renderers.

use crate::motion::MotionPhase;

/// Pointer cursor the surface should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorHint {
    /// Looping is off; the strip is not draggable.
    Default,
    Grab,
    Grabbing,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselSnapshot {
    /// Current offset in `[0, total)`.
    pub offset: f32,
    /// Horizontal translation to apply to the strip (`-offset`).
    pub translate_x: f32,
    pub card_width: f32,
    pub card_height: f32,
    pub gap: f32,
    /// Cards in the rendered sequence (doubled when looping).
    pub display_len: usize,
    pub source_len: usize,
    pub phase: MotionPhase,
    pub cursor: CursorHint,
    pub show_step_buttons: bool,
    /// Catalog index of the card at the left edge.
    pub leading_index: usize,
}

impl CarouselSnapshot {
    pub fn slide_distance(&self) -> f32 {
        self.card_width + self.gap
    }

    /// Width of the whole rendered strip.
    pub fn strip_width(&self) -> f32 {
        if self.display_len == 0 {
            return 0.0;
        }
        self.display_len as f32 * self.slide_distance() - self.gap
    }
}
