//! Clipped, horizontally translated surface for the card row.
//!
//! The row is laid out at its natural width and drawn shifted by the
//! carousel offset. The widget turns raw mouse, wheel and touch events into
//! carousel [`Interaction`]s and reports its own width whenever layout
//! changes it, which is how the carousel observes its container.

use std::fmt;

use iced::advanced::Renderer as _;
use iced::advanced::layout;
use iced::advanced::renderer;
use iced::advanced::widget::{Operation, Tree, tree};
use iced::advanced::{Clipboard, Layout, Shell, Widget};
use iced::event::Event;
use iced::mouse::{self, Cursor, ScrollDelta};
use iced::touch;
use iced::{Element, Length, Rectangle, Size, Theme, Vector};
use marquee_core::{CursorHint, Interaction, PointerId};

use crate::constants::input::{TOUCH_POINTER_BASE, WHEEL_LINE_PX};

#[derive(Debug, Default)]
struct State {
    measured_width: Option<f32>,
    cursor_over: bool,
    /// Pointer that pressed on the strip and has not been released yet.
    pressed: Option<PointerId>,
    /// Fingers that went down on the strip.
    touches: Vec<touch::Finger>,
}

impl State {
    /// Forget `finger`; `true` if it started on the strip.
    fn release_touch(&mut self, finger: touch::Finger) -> bool {
        let before = self.touches.len();
        self.touches.retain(|f| *f != finger);
        self.touches.len() != before
    }
}

pub struct MarqueeStrip<'a, Message> {
    content: Element<'a, Message>,
    translate_x: f32,
    height: Length,
    cursor: CursorHint,
    on_input: Box<dyn Fn(Interaction) -> Message + 'a>,
    on_resize: Option<Box<dyn Fn(f32) -> Message + 'a>>,
}

impl<Message> fmt::Debug for MarqueeStrip<'_, Message> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarqueeStrip")
            .field("translate_x", &self.translate_x)
            .field("height", &self.height)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

pub fn marquee_strip<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    on_input: impl Fn(Interaction) -> Message + 'a,
) -> MarqueeStrip<'a, Message> {
    MarqueeStrip {
        content: content.into(),
        translate_x: 0.0,
        height: Length::Shrink,
        cursor: CursorHint::Default,
        on_input: Box::new(on_input),
        on_resize: None,
    }
}

impl<'a, Message> MarqueeStrip<'a, Message> {
    /// Horizontal shift applied to the content (the negated offset).
    pub fn translate_x(mut self, translate_x: f32) -> Self {
        self.translate_x = if translate_x.is_finite() {
            translate_x
        } else {
            0.0
        };
        self
    }

    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    /// Cursor to show; [`CursorHint::Default`] also makes the strip
    /// non-draggable.
    pub fn cursor(mut self, cursor: CursorHint) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn on_resize(mut self, on_resize: impl Fn(f32) -> Message + 'a) -> Self {
        self.on_resize = Some(Box::new(on_resize));
        self
    }

    fn draggable(&self) -> bool {
        self.cursor != CursorHint::Default
    }

    /// Content-space shift for cursors and viewports.
    fn content_shift(&self) -> Vector {
        Vector::new(-self.translate_x, 0.0)
    }

    fn emit(&self, shell: &mut Shell<'_, Message>, interaction: Interaction) {
        shell.publish((self.on_input)(interaction));
    }

    fn content_cursor(&self, cursor: Cursor, bounds: Rectangle) -> Cursor {
        match cursor.position_over(bounds) {
            Some(position) => Cursor::Available(position + self.content_shift()),
            None => Cursor::Unavailable,
        }
    }
}

/// Wheel delta in DOM orientation: positive `dy` scrolls content forward.
pub fn wheel_pixels(delta: ScrollDelta) -> (f32, f32) {
    let (x, y) = match delta {
        ScrollDelta::Lines { x, y } => (x * WHEEL_LINE_PX, y * WHEEL_LINE_PX),
        ScrollDelta::Pixels { x, y } => (x, y),
    };
    (-x, -y)
}

pub fn finger_pointer(finger: touch::Finger) -> PointerId {
    PointerId(TOUCH_POINTER_BASE.wrapping_add(finger.0))
}

impl<Message> Widget<Message, Theme, iced::Renderer> for MarqueeStrip<'_, Message> {
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, self.height)
    }

    fn layout(
        &mut self,
        tree: &mut Tree,
        renderer: &iced::Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let limits = limits.width(Length::Fill).height(self.height);
        let max = limits.max();

        // The row keeps its natural width; clipping happens in `draw`.
        let content_limits =
            layout::Limits::new(Size::ZERO, Size::new(f32::INFINITY, max.height));
        let content = self.content.as_widget_mut().layout(
            &mut tree.children[0],
            renderer,
            &content_limits,
        );

        let size = limits.resolve(Length::Fill, self.height, content.size());
        layout::Node::with_children(size, vec![content])
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut iced::Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let Some(content_layout) = layout.children().next() else {
            return;
        };
        let content_cursor = self.content_cursor(cursor, bounds);
        let content_viewport = bounds + self.content_shift();

        renderer.with_layer(bounds, |renderer| {
            renderer.with_translation(
                Vector::new(self.translate_x, 0.0),
                |renderer| {
                    self.content.as_widget().draw(
                        &tree.children[0],
                        renderer,
                        theme,
                        style,
                        content_layout,
                        content_cursor,
                        &content_viewport,
                    );
                },
            );
        });
    }

    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn children(&self) -> Vec<Tree> {
        vec![Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(std::slice::from_ref(&self.content));
    }

    fn operate(
        &mut self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &iced::Renderer,
        operation: &mut dyn Operation,
    ) {
        if let Some(content_layout) = layout.children().next() {
            self.content.as_widget_mut().operate(
                &mut tree.children[0],
                content_layout,
                renderer,
                operation,
            );
        }
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: Cursor,
        renderer: &iced::Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();

        if let Some(content_layout) = layout.children().next() {
            let content_cursor = self.content_cursor(cursor, bounds);
            let content_viewport = bounds + self.content_shift();
            self.content.as_widget_mut().update(
                &mut tree.children[0],
                event,
                content_layout,
                content_cursor,
                renderer,
                clipboard,
                shell,
                &content_viewport,
            );
        }

        let state = tree.state.downcast_mut::<State>();

        if let Some(on_resize) = &self.on_resize
            && state.measured_width != Some(bounds.width)
        {
            state.measured_width = Some(bounds.width);
            shell.publish(on_resize(bounds.width));
        }

        if shell.is_event_captured() {
            return;
        }

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(position) = cursor.position_over(bounds)
                    && self.draggable()
                {
                    state.pressed = Some(PointerId::MOUSE);
                    self.emit(
                        shell,
                        Interaction::PointerDown {
                            pointer: PointerId::MOUSE,
                            x: position.x,
                        },
                    );
                    shell.capture_event();
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                let over = bounds.contains(*position);
                if state.pressed == Some(PointerId::MOUSE) {
                    self.emit(
                        shell,
                        Interaction::PointerMove {
                            pointer: PointerId::MOUSE,
                            x: position.x,
                        },
                    );
                    shell.capture_event();
                } else if state.cursor_over && !over {
                    self.emit(
                        shell,
                        Interaction::PointerLeave {
                            pointer: PointerId::MOUSE,
                        },
                    );
                }
                state.cursor_over = over;
            }
            Event::Mouse(mouse::Event::CursorLeft) => {
                if state.pressed != Some(PointerId::MOUSE) && state.cursor_over {
                    self.emit(
                        shell,
                        Interaction::PointerLeave {
                            pointer: PointerId::MOUSE,
                        },
                    );
                }
                state.cursor_over = false;
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if state.pressed.take() == Some(PointerId::MOUSE) {
                    self.emit(
                        shell,
                        Interaction::PointerUp {
                            pointer: PointerId::MOUSE,
                        },
                    );
                }
            }
            Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                if cursor.is_over(bounds) {
                    let (dx, dy) = wheel_pixels(*delta);
                    self.emit(shell, Interaction::Wheel { dx, dy });
                    if self.draggable() {
                        shell.capture_event();
                    }
                }
            }
            Event::Touch(touch::Event::FingerPressed { id, position }) => {
                if bounds.contains(*position) {
                    state.touches.push(*id);
                    self.emit(shell, Interaction::TouchStart);
                    if self.draggable() && state.pressed.is_none() {
                        let pointer = finger_pointer(*id);
                        state.pressed = Some(pointer);
                        self.emit(
                            shell,
                            Interaction::PointerDown {
                                pointer,
                                x: position.x,
                            },
                        );
                    }
                    shell.capture_event();
                }
            }
            Event::Touch(touch::Event::FingerMoved { id, position }) => {
                let pointer = finger_pointer(*id);
                if state.pressed == Some(pointer) {
                    self.emit(
                        shell,
                        Interaction::PointerMove {
                            pointer,
                            x: position.x,
                        },
                    );
                    shell.capture_event();
                }
            }
            Event::Touch(touch::Event::FingerLifted { id, .. }) => {
                let pointer = finger_pointer(*id);
                if state.pressed == Some(pointer) {
                    state.pressed = None;
                    self.emit(shell, Interaction::PointerUp { pointer });
                }
                if state.release_touch(*id) {
                    self.emit(shell, Interaction::TouchEnd);
                }
            }
            Event::Touch(touch::Event::FingerLost { id, .. }) => {
                let pointer = finger_pointer(*id);
                if state.pressed == Some(pointer) {
                    state.pressed = None;
                    self.emit(shell, Interaction::PointerCancel { pointer });
                }
                if state.release_touch(*id) {
                    self.emit(shell, Interaction::TouchCancel);
                }
            }
            _ => {}
        }
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: Cursor,
        viewport: &Rectangle,
        renderer: &iced::Renderer,
    ) -> mouse::Interaction {
        let bounds = layout.bounds();
        match self.cursor {
            CursorHint::Grabbing => mouse::Interaction::Grabbing,
            CursorHint::Grab if cursor.is_over(bounds) => mouse::Interaction::Grab,
            _ => match layout.children().next() {
                Some(content_layout) => self.content.as_widget().mouse_interaction(
                    &tree.children[0],
                    content_layout,
                    self.content_cursor(cursor, bounds),
                    viewport,
                    renderer,
                ),
                None => mouse::Interaction::default(),
            },
        }
    }
}

impl<'a, Message> From<MarqueeStrip<'a, Message>> for Element<'a, Message>
where
    Message: 'a,
{
    fn from(widget: MarqueeStrip<'a, Message>) -> Self {
        Element::new(widget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_down_scrolls_forward() {
        let (dx, dy) = wheel_pixels(ScrollDelta::Pixels { x: 0.0, y: -30.0 });
        assert_eq!(dx, 0.0);
        assert_eq!(dy, 30.0);
    }

    #[test]
    fn line_deltas_are_scaled() {
        let (_, dy) = wheel_pixels(ScrollDelta::Lines { x: 0.0, y: -1.0 });
        assert_eq!(dy, WHEEL_LINE_PX);
    }

    #[test]
    fn fingers_never_alias_the_mouse() {
        let pointer = finger_pointer(touch::Finger(0));
        assert_ne!(pointer, PointerId::MOUSE);
        assert_ne!(finger_pointer(touch::Finger(1)), pointer);
    }
}
