use iced::Task;
use marquee_core::Interaction;

use crate::messages::{KeyCommand, Message};
use crate::state::State;

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    log::trace!("[Update] {}", message.name());

    match message {
        Message::Frame(now) => {
            state.carousel.on_frame(now);
        }
        Message::StripResized(width) => {
            state.width_feed.publish(width);
            if state.carousel.sync_width() {
                let geometry = state.carousel.geometry();
                log::debug!(
                    "Strip width {:.0} -> card width {:.0}",
                    geometry.container_width,
                    geometry.card_width
                );
            }
        }
        Message::Carousel(interaction) => {
            handle_interaction(state, interaction);
        }
        Message::CardEntered(index) => {
            if let Some(entry) = state.catalog.display_list().get(index) {
                log::trace!("hovering card {}", entry.key());
            }
            state.hovered_card = Some(index);
        }
        Message::CardLeft(index) => {
            // Enter of the next card may arrive first.
            if state.hovered_card == Some(index) {
                state.hovered_card = None;
            }
        }
        Message::Key(command) => handle_key(state, command),
        Message::NoOp => {}
    }

    Task::none()
}

fn handle_interaction(state: &mut State, interaction: Interaction) {
    match interaction {
        Interaction::Focus => state.focused = true,
        Interaction::Blur => state.focused = false,
        _ => {}
    }
    let response = state.carousel.handle(interaction, &mut state.capture);
    if response.offset_changed {
        log::trace!("offset -> {:.1}", state.carousel.offset());
    }
}

fn handle_key(state: &mut State, command: KeyCommand) {
    match command {
        KeyCommand::ToggleFocus => {
            let next = if state.focused {
                Interaction::Blur
            } else {
                Interaction::Focus
            };
            handle_interaction(state, next);
        }
        KeyCommand::Blur => {
            if state.focused {
                handle_interaction(state, Interaction::Blur);
            }
        }
        KeyCommand::Step(direction) => {
            if state.focused {
                handle_interaction(state, Interaction::Step(direction));
            }
        }
        KeyCommand::ToggleReducedMotion => {
            let reduced = !state.carousel.reduced_motion();
            log::info!("Reduced motion {}", if reduced { "on" } else { "off" });
            state.carousel.set_reduced_motion(reduced);
        }
        KeyCommand::ToggleTheme => {
            state.theme = state.theme.toggled();
            log::info!("Theme switched to {}", state.theme);
        }
    }
}
