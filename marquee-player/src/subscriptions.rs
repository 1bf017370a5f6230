//! Root-level subscription composition

use iced::keyboard::{self, Key, Modifiers, key::Named};
use iced::{Subscription, event};
use marquee_core::Direction;

use crate::messages::{KeyCommand, Message};
use crate::state::State;

pub fn subscription(state: &State) -> Subscription<Message> {
    let mut subscriptions = vec![event::listen_with(|event, status, _id| {
        if status == event::Status::Captured {
            return None;
        }

        let iced::Event::Keyboard(keyboard::Event::KeyPressed {
            key,
            modifiers,
            ..
        }) = event
        else {
            return None;
        };
        on_key_press(key, modifiers).map(Message::Key)
    })];

    // Only while running: dropping this subscription is what stops the
    // frame callbacks.
    if state.carousel.wants_frames() {
        subscriptions.push(iced::window::frames().map(Message::Frame));
    }

    Subscription::batch(subscriptions)
}

pub fn on_key_press(key: Key, modifiers: Modifiers) -> Option<KeyCommand> {
    if modifiers.control() || modifiers.alt() || modifiers.logo() {
        return None;
    }

    match key.as_ref() {
        Key::Named(Named::Tab) => Some(KeyCommand::ToggleFocus),
        Key::Named(Named::Escape) => Some(KeyCommand::Blur),
        Key::Named(Named::ArrowLeft) => {
            Some(KeyCommand::Step(Direction::Previous))
        }
        Key::Named(Named::ArrowRight) => Some(KeyCommand::Step(Direction::Next)),
        Key::Character(c) if c.eq_ignore_ascii_case("m") => {
            Some(KeyCommand::ToggleReducedMotion)
        }
        Key::Character(c) if c.eq_ignore_ascii_case("t") => {
            Some(KeyCommand::ToggleTheme)
        }
        _ => None,
    }
}
