//! Headless controller for the Marquee testimonials carousel.
//!
//! The crate owns every piece of carousel state that is not pixels: the
//! card geometry derived from the observed container width, the looping
//! scroll offset, the auto-advance clock, and the translation of pointer,
//! wheel, hover, focus and step input into offset changes. Hosts feed it
//! frames, widths and [`Interaction`]s and render from a
//! [`CarouselSnapshot`].
//!
//! All state lives in a single [`Carousel`] value that is mutated from one
//! thread only; nothing here locks.

pub mod carousel;
pub mod constants;
pub mod interaction;
pub mod layout;
pub mod looping;
pub mod motion;
pub mod observer;
pub mod settings;
pub mod snapshot;

pub use carousel::Carousel;
pub use interaction::{
    CaptureSlot, Direction, DragSession, Interaction, NoCapture,
    PointerCapture, PointerId, Response,
};
pub use layout::{
    Geometry, LayoutSizer, bounded_card_width, card_width_for_motion,
};
pub use looping::{LoopMode, normalize_offset};
pub use motion::{AutoScroller, DisableReason, MotionPhase};
pub use observer::{WidthFeed, WidthSource, WidthSubscription};
pub use settings::CarouselSettings;
pub use snapshot::{CarouselSnapshot, CursorHint};
