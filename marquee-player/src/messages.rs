use std::time::Instant;

use marquee_core::{Direction, Interaction};

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Display frame from `window::frames()`.
    Frame(Instant),
    /// The strip surface was laid out at a new width.
    StripResized(f32),
    /// Input addressed to the carousel surface.
    Carousel(Interaction),
    /// Cursor entered the card at this display index.
    CardEntered(usize),
    /// Cursor left the card at this display index.
    CardLeft(usize),
    Key(KeyCommand),
    NoOp,
}

/// Keyboard shortcuts understood by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// `Tab`: move focus onto the carousel, or off it.
    ToggleFocus,
    /// `Escape`
    Blur,
    /// Arrow keys while the carousel is focused.
    Step(Direction),
    /// `M`
    ToggleReducedMotion,
    /// `T`
    ToggleTheme,
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Frame(_) => "Carousel::Frame",
            Self::StripResized(_) => "Carousel::StripResized",
            Self::Carousel(_) => "Carousel::Interaction",
            Self::CardEntered(_) => "Carousel::CardEntered",
            Self::CardLeft(_) => "Carousel::CardLeft",
            Self::Key(_) => "Carousel::Key",
            Self::NoOp => "NoOp",
        }
    }
}
