use std::time::{Duration, Instant};

use iced::keyboard::{Key, Modifiers, key::Named};
use marquee_core::{Direction, Interaction, MotionPhase, PointerId};
use marquee_model::ThemeMode;
use marquee_player::subscriptions::on_key_press;
use marquee_player::update::update;
use marquee_player::{KeyCommand, Message, State};

fn send(state: &mut State, message: Message) {
    let _ = update(state, message);
}

#[test]
fn strip_width_flows_into_geometry() {
    let mut state = State::default();
    assert_eq!(state.carousel.geometry().card_width, 320.0);

    send(&mut state, Message::StripResized(1000.0));
    assert_eq!(state.carousel.geometry().card_width, 317.0);
    assert_eq!(state.width_feed.latest(), 1000.0);
}

#[test]
fn frames_advance_until_hovered() {
    let mut state = State::default();
    let t0 = Instant::now();
    send(&mut state, Message::Frame(t0));
    send(&mut state, Message::Frame(t0 + Duration::from_secs(1)));
    let moved = state.carousel.offset();
    assert!((moved - 24.0).abs() < 1e-3);

    send(&mut state, Message::Carousel(Interaction::HoverEnter));
    assert_eq!(state.carousel.phase(), MotionPhase::Paused);
    send(&mut state, Message::Frame(t0 + Duration::from_secs(3)));
    assert_eq!(state.carousel.offset(), moved);
}

#[test]
fn drag_holds_and_releases_capture() {
    let mut state = State::default();
    send(
        &mut state,
        Message::Carousel(Interaction::PointerDown {
            pointer: PointerId::MOUSE,
            x: 500.0,
        }),
    );
    assert_eq!(state.capture.held(), Some(PointerId::MOUSE));

    send(
        &mut state,
        Message::Carousel(Interaction::PointerMove {
            pointer: PointerId::MOUSE,
            x: 420.0,
        }),
    );
    assert_eq!(state.carousel.offset(), 80.0);

    send(
        &mut state,
        Message::Carousel(Interaction::PointerUp {
            pointer: PointerId::MOUSE,
        }),
    );
    assert!(!state.capture.is_capturing());
    assert!(!state.carousel.is_dragging());
    assert_eq!(state.carousel.phase(), MotionPhase::Paused);
}

#[test]
fn arrow_keys_step_only_while_focused() {
    let mut state = State::default();
    send(&mut state, Message::Key(KeyCommand::Step(Direction::Next)));
    assert_eq!(state.carousel.offset(), 0.0);

    send(&mut state, Message::Key(KeyCommand::ToggleFocus));
    assert!(state.focused);
    assert_eq!(state.carousel.phase(), MotionPhase::Paused);

    send(&mut state, Message::Key(KeyCommand::Step(Direction::Next)));
    assert_eq!(state.carousel.offset(), 344.0);

    send(&mut state, Message::Key(KeyCommand::Blur));
    assert!(!state.focused);
    assert_eq!(state.carousel.phase(), MotionPhase::Running);
}

#[test]
fn step_buttons_route_without_focus() {
    let mut state = State::default();
    send(
        &mut state,
        Message::Carousel(Interaction::Step(Direction::Previous)),
    );
    // 5 cards of 344 px: one step back from 0 wraps to 1376.
    assert_eq!(state.carousel.offset(), 1376.0);
}

#[test]
fn reduced_motion_toggle_stops_frames() {
    let mut state = State::default();
    send(&mut state, Message::Carousel(Interaction::Wheel { dx: 0.0, dy: 90.0 }));
    assert_eq!(state.carousel.offset(), 90.0);

    send(&mut state, Message::Key(KeyCommand::ToggleReducedMotion));
    assert!(!state.carousel.wants_frames());
    assert_eq!(state.carousel.offset(), 0.0);

    send(&mut state, Message::Key(KeyCommand::ToggleReducedMotion));
    assert!(!state.carousel.reduced_motion());
}

#[test]
fn theme_toggles() {
    let mut state = State::default();
    assert_eq!(state.theme, ThemeMode::Dark);
    send(&mut state, Message::Key(KeyCommand::ToggleTheme));
    assert_eq!(state.theme, ThemeMode::Light);
}

#[test]
fn late_card_leave_keeps_new_hover() {
    let mut state = State::default();
    send(&mut state, Message::CardEntered(1));
    send(&mut state, Message::CardEntered(2));
    send(&mut state, Message::CardLeft(1));
    assert_eq!(state.hovered_card, Some(2));
    send(&mut state, Message::CardLeft(2));
    assert_eq!(state.hovered_card, None);
}

#[test]
fn key_bindings() {
    let none = Modifiers::empty();
    assert_eq!(
        on_key_press(Key::Named(Named::Tab), none),
        Some(KeyCommand::ToggleFocus)
    );
    assert_eq!(
        on_key_press(Key::Named(Named::ArrowLeft), none),
        Some(KeyCommand::Step(Direction::Previous))
    );
    assert_eq!(
        on_key_press(Key::Character("M".into()), none),
        Some(KeyCommand::ToggleReducedMotion)
    );
    assert_eq!(
        on_key_press(Key::Character("t".into()), none),
        Some(KeyCommand::ToggleTheme)
    );
    assert_eq!(on_key_press(Key::Character("t".into()), Modifiers::CTRL), None);
}
