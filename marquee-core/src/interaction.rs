//! Input vocabulary understood by the carousel.
//!
//! Hosts translate their platform events into [`Interaction`]s and hand them
//! to [`Carousel::handle`](crate::Carousel::handle). Pointer capture stays on
//! the host side behind [`PointerCapture`].

/// Identifier of a mouse, pen or touch pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

impl PointerId {
    /// The primary mouse. Browsers use 1 for it as well.
    pub const MOUSE: PointerId = PointerId(1);
}

/// Direction of a step button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left button: content moves back by one card.
    Previous,
    /// Right button: content moves forward by one card.
    Next,
}

impl Direction {
    /// `-1.0` or `1.0`, applied to the slide distance.
    pub fn sign(self) -> f32 {
        match self {
            Direction::Previous => -1.0,
            Direction::Next => 1.0,
        }
    }
}

/// One input event addressed to the carousel surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interaction {
    /// Pointer hovered the surface; pauses auto-advance.
    HoverEnter,
    HoverLeave,
    /// Keyboard focus landed inside the carousel; pauses auto-advance.
    Focus,
    Blur,
    TouchStart,
    TouchEnd,
    TouchCancel,
    /// Starts a drag session and captures `pointer`. `x` is in surface
    /// coordinates.
    PointerDown { pointer: PointerId, x: f32 },
    /// Moves the active drag, if any.
    PointerMove { pointer: PointerId, x: f32 },
    /// Ends the active drag and releases capture.
    PointerUp { pointer: PointerId },
    PointerCancel { pointer: PointerId },
    /// The pointer left the surface. Only ends a drag owned by that pointer.
    PointerLeave { pointer: PointerId },
    /// Wheel or trackpad delta in pixels.
    Wheel { dx: f32, dy: f32 },
    /// A step button press; moves exactly one slide.
    Step(Direction),
}

/// What the host should do after an interaction was handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Response {
    /// Suppress the platform default (text selection, native scrolling).
    pub prevent_default: bool,
    /// The offset was written and the strip needs repositioning.
    pub offset_changed: bool,
}

impl Response {
    /// Nothing happened; let the platform handle the event.
    pub const IGNORED: Response = Response {
        prevent_default: false,
        offset_changed: false,
    };

    pub(crate) fn consumed(offset_changed: bool) -> Self {
        Self {
            prevent_default: true,
            offset_changed,
        }
    }
}

/// Transient record of an active drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub pointer: PointerId,
    pub start_x: f32,
    pub start_offset: f32,
}

impl DragSession {
    /// Raw (unnormalized) offset for a pointer now at `x`. Dragging left
    /// advances the content.
    pub fn target_offset(&self, x: f32) -> f32 {
        self.start_offset - (x - self.start_x)
    }
}

/// Delta along whichever wheel axis moved further; vertical wins ties.
pub fn dominant_wheel_delta(dx: f32, dy: f32) -> f32 {
    if dx.abs() > dy.abs() { dx } else { dy }
}

/// Host-side pointer capture for the draggable surface.
///
/// Capturing routes moves and releases outside the surface back to the
/// carousel for the rest of a drag.
pub trait PointerCapture {
    /// Route all further events of `pointer` to the surface.
    fn set_capture(&mut self, pointer: PointerId);
    /// Whether `pointer` is currently captured by the surface.
    fn has_capture(&self, pointer: PointerId) -> bool;
    /// Stop routing `pointer`. Releasing a pointer that is not held is a
    /// no-op.
    fn release_capture(&mut self, pointer: PointerId);
}

/// Capture for hosts without the concept. Nothing is ever held.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCapture;

impl PointerCapture for NoCapture {
    fn set_capture(&mut self, _pointer: PointerId) {}

    fn has_capture(&self, _pointer: PointerId) -> bool {
        false
    }

    fn release_capture(&mut self, _pointer: PointerId) {}
}

/// Single-pointer capture, enough for one draggable surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaptureSlot {
    held: Option<PointerId>,
}

impl CaptureSlot {
    /// The pointer currently captured, if any.
    pub fn held(&self) -> Option<PointerId> {
        self.held
    }

    pub fn is_capturing(&self) -> bool {
        self.held.is_some()
    }
}

impl PointerCapture for CaptureSlot {
    fn set_capture(&mut self, pointer: PointerId) {
        self.held = Some(pointer);
    }

    fn has_capture(&self, pointer: PointerId) -> bool {
        self.held == Some(pointer)
    }

    fn release_capture(&mut self, pointer: PointerId) {
        if self.held == Some(pointer) {
            self.held = None;
        }
    }
}
