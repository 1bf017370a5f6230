//! The carousel state object.

use std::time::Instant;

use crate::interaction::{
    Direction, DragSession, Interaction, PointerCapture, PointerId, Response,
    dominant_wheel_delta,
};
use crate::layout::{Geometry, LayoutSizer};
use crate::looping::LoopMode;
use crate::motion::{AutoScroller, DisableReason, MotionPhase};
use crate::observer::{WidthSource, WidthSubscription};
use crate::settings::CarouselSettings;
use crate::snapshot::{CarouselSnapshot, CursorHint};

/// Single owner of the looping offset and everything that writes it.
///
/// Automatic ticking ([`Carousel::on_frame`]) and manual input
/// ([`Carousel::handle`]) both funnel through one normalization step, so the
/// offset is always in `[0, total_loop_distance)` while looping is enabled
/// and exactly 0 otherwise.
#[derive(Debug)]
pub struct Carousel {
    source_count: usize,
    sizer: LayoutSizer,
    width: Option<WidthSubscription>,
    loop_mode: LoopMode,
    scroller: AutoScroller,
    offset: f32,
    paused: bool,
    reduced_motion: bool,
    drag: Option<DragSession>,
}

impl Carousel {
    /// A carousel over `source_count` testimonials with unmeasured geometry.
    /// Auto-advance starts running at offset 0.
    pub fn new(source_count: usize, settings: CarouselSettings) -> Self {
        let sizer = LayoutSizer::new(settings);
        let loop_mode = LoopMode::resolve(source_count, &sizer.geometry());
        Self {
            source_count,
            scroller: AutoScroller::new(settings.speed),
            sizer,
            width: None,
            loop_mode,
            offset: 0.0,
            paused: false,
            reduced_motion: false,
            drag: None,
        }
    }

    /// Observe container widths from `source`. Replaces (and thereby
    /// unsubscribes) any previous source.
    pub fn with_width_source(mut self, source: &impl WidthSource) -> Self {
        self.width = Some(source.subscribe());
        self.sync_width();
        self
    }

    /// Stop observing widths; the last geometry stays in effect.
    pub fn detach_width_source(&mut self) {
        self.width = None;
    }

    /// Builder form of [`Carousel::set_reduced_motion`].
    pub fn with_reduced_motion(mut self, reduced: bool) -> Self {
        self.set_reduced_motion(reduced);
        self
    }

    // ---------------------------------------------------------------------
    // Geometry
    // ---------------------------------------------------------------------

    /// Drain the width subscription, if any, and apply the newest width.
    /// Returns `true` when geometry changed.
    pub fn sync_width(&mut self) -> bool {
        let latest = self.width.as_mut().and_then(WidthSubscription::take_latest);
        match latest {
            Some(width) => self.observe_width(width),
            None => false,
        }
    }

    /// Apply a container width directly. Returns `true` when geometry
    /// changed.
    pub fn observe_width(&mut self, container_width: f32) -> bool {
        if !self.sizer.observe(container_width) {
            return false;
        }
        self.refresh_loop_mode();
        true
    }

    fn refresh_loop_mode(&mut self) {
        let next = LoopMode::resolve(self.source_count, &self.sizer.geometry());
        // A container-only resize keeps slide and loop distances, and with
        // them the running frame clock.
        if next == self.loop_mode {
            return;
        }
        log::debug!("loop mode {:?} -> {:?}", self.loop_mode, next);
        self.loop_mode = next;
        // An active drag session survives; its release still goes through
        // `end_drag` so the host's capture is let go.
        self.scroller.reset();
        self.apply_offset(self.offset);
    }

    // ---------------------------------------------------------------------
    // Motion
    // ---------------------------------------------------------------------

    /// Apply the user's reduced-motion preference. Turning it on disables
    /// auto-advance and resets the offset to 0 once; manual input keeps
    /// working.
    pub fn set_reduced_motion(&mut self, reduced: bool) {
        if self.reduced_motion == reduced {
            return;
        }
        log::debug!("reduced motion: {reduced}");
        self.reduced_motion = reduced;
        self.scroller.reset();
        if reduced {
            self.apply_offset(0.0);
        }
    }

    /// Current motion state. A disabled loop takes precedence over reduced
    /// motion, which takes precedence over pausing.
    pub fn phase(&self) -> MotionPhase {
        if let LoopMode::Disabled(reason) = self.loop_mode {
            return MotionPhase::Disabled(reason);
        }
        if self.reduced_motion {
            return MotionPhase::Disabled(DisableReason::ReducedMotion);
        }
        if self.paused {
            MotionPhase::Paused
        } else {
            MotionPhase::Running
        }
    }

    /// Whether the host should keep delivering display frames. When this
    /// turns false the host drops its frame subscription, which cancels any
    /// pending callback.
    pub fn wants_frames(&self) -> bool {
        self.phase().is_running()
    }

    /// Advance for the display frame at `now`. Returns `true` when the
    /// offset moved.
    pub fn on_frame(&mut self, now: Instant) -> bool {
        self.sync_width();
        if !self.wants_frames() {
            self.scroller.reset();
            return false;
        }
        match self.scroller.advance(now) {
            Some(distance) => self.apply_offset(self.offset + distance),
            None => false,
        }
    }

    fn pause(&mut self) {
        if !self.loop_mode.is_enabled() || self.paused {
            return;
        }
        log::trace!("auto-advance paused at {:.1}", self.offset);
        self.paused = true;
        self.scroller.reset();
    }

    fn resume(&mut self) {
        if !self.loop_mode.is_enabled() || !self.paused {
            return;
        }
        log::trace!("auto-advance resumed at {:.1}", self.offset);
        self.paused = false;
        self.scroller.reset();
    }

    /// Normalize and store `value`. Returns `true` when the stored offset
    /// changed.
    fn apply_offset(&mut self, value: f32) -> bool {
        let next = self.loop_mode.normalize(value);
        let changed = next != self.offset;
        self.offset = next;
        changed
    }

    // ---------------------------------------------------------------------
    // Interaction
    // ---------------------------------------------------------------------

    /// Route one input event. Hover, focus and touch pause or resume
    /// auto-advance; pointer, wheel and step input move the offset.
    ///
    /// Capture is taken on pointer down and released when the drag ends.
    pub fn handle(
        &mut self,
        interaction: Interaction,
        capture: &mut impl PointerCapture,
    ) -> Response {
        match interaction {
            Interaction::HoverEnter | Interaction::Focus | Interaction::TouchStart => {
                self.pause();
                Response::IGNORED
            }
            Interaction::HoverLeave
            | Interaction::Blur
            | Interaction::TouchEnd
            | Interaction::TouchCancel => {
                self.resume();
                Response::IGNORED
            }
            Interaction::PointerDown { pointer, x } => {
                self.pointer_down(pointer, x, capture)
            }
            Interaction::PointerMove { x, .. } => self.pointer_move(x),
            Interaction::PointerUp { .. } | Interaction::PointerCancel { .. } => {
                self.end_drag(capture);
                Response::IGNORED
            }
            Interaction::PointerLeave { pointer } => {
                if self.drag.is_some_and(|d| d.pointer == pointer) {
                    self.end_drag(capture);
                }
                Response::IGNORED
            }
            Interaction::Wheel { dx, dy } => self.wheel(dx, dy),
            Interaction::Step(direction) => self.step(direction),
        }
    }

    fn pointer_down(
        &mut self,
        pointer: PointerId,
        x: f32,
        capture: &mut impl PointerCapture,
    ) -> Response {
        if !self.loop_mode.is_enabled() {
            return Response::IGNORED;
        }
        self.pause();
        self.drag = Some(DragSession {
            pointer,
            start_x: x,
            start_offset: self.offset,
        });
        capture.set_capture(pointer);
        log::trace!("drag started by {pointer:?} at x={x:.1}");
        Response::consumed(false)
    }

    fn pointer_move(&mut self, x: f32) -> Response {
        let Some(session) = self.drag else {
            return Response::IGNORED;
        };
        let changed = self.apply_offset(session.target_offset(x));
        Response::consumed(changed)
    }

    fn end_drag(&mut self, capture: &mut impl PointerCapture) {
        if let Some(session) = self.drag.take() {
            if capture.has_capture(session.pointer) {
                capture.release_capture(session.pointer);
            }
            log::trace!("drag ended at {:.1}", self.offset);
        }
    }

    fn wheel(&mut self, dx: f32, dy: f32) -> Response {
        if !self.loop_mode.is_enabled() {
            return Response::IGNORED;
        }
        let delta = dominant_wheel_delta(dx, dy);
        if delta == 0.0 || !delta.is_finite() {
            return Response::IGNORED;
        }
        self.pause();
        let changed = self.apply_offset(self.offset + delta);
        Response::consumed(changed)
    }

    fn step(&mut self, direction: Direction) -> Response {
        let Some(slide) = self.loop_mode.slide_distance() else {
            return Response::IGNORED;
        };
        self.pause();
        let changed = self.apply_offset(self.offset + direction.sign() * slide);
        Response {
            prevent_default: false,
            offset_changed: changed,
        }
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    /// Normalized offset in px.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub fn loop_mode(&self) -> LoopMode {
        self.loop_mode
    }

    pub fn geometry(&self) -> Geometry {
        self.sizer.geometry()
    }

    pub fn settings(&self) -> &CarouselSettings {
        self.sizer.settings()
    }

    pub fn source_count(&self) -> usize {
        self.source_count
    }

    /// Number of rendered cards: the testimonials twice while looping.
    pub fn display_len(&self) -> usize {
        if self.source_count > 1 {
            self.source_count * 2
        } else {
            self.source_count
        }
    }

    /// Everything a renderer needs for the current frame.
    pub fn snapshot(&self) -> CarouselSnapshot {
        let geometry = self.geometry();
        let looping = self.loop_mode.is_enabled();
        let cursor = match (looping, self.is_dragging()) {
            (false, _) => CursorHint::Default,
            (true, true) => CursorHint::Grabbing,
            (true, false) => CursorHint::Grab,
        };
        let leading_index = match self.loop_mode.slide_distance() {
            Some(slide) if self.source_count > 0 => {
                (self.offset / slide).floor() as usize % self.source_count
            }
            _ => 0,
        };
        CarouselSnapshot {
            offset: self.offset,
            translate_x: -self.offset,
            card_width: geometry.card_width,
            card_height: geometry.card_height,
            gap: geometry.gap,
            display_len: self.display_len(),
            source_len: self.source_count,
            phase: self.phase(),
            cursor,
            show_step_buttons: looping
                && geometry.container_width
                    >= self.settings().step_buttons_min_width,
            leading_index,
        }
    }
}
