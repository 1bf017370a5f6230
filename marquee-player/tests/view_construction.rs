use marquee_config::Appearance;
use marquee_core::{CarouselSettings, DisableReason, Direction, Interaction, MotionPhase};
use marquee_model::{Catalog, Testimonial, ThemeMode};
use marquee_player::app::AppConfig;
use marquee_player::app::bootstrap::base_state;
use marquee_player::update::update;
use marquee_player::view::{announcement, phase_label, view};
use marquee_player::{Message, State};

fn single_story() -> Catalog {
    Catalog::try_new(vec![Testimonial::new(
        "One quote.",
        "Solo Person",
        "Founder, Solo",
        "Solo",
    )])
    .expect("valid catalog")
}

#[test]
fn builds_for_both_themes() {
    let mut state = State::default();
    let _ = view(&state);
    state.theme = ThemeMode::Light;
    let _ = view(&state);
}

#[test]
fn wide_strip_shows_step_buttons() {
    let mut state = State::default();
    assert!(!state.carousel.snapshot().show_step_buttons);

    let _ = update(&mut state, Message::StripResized(1000.0));
    assert!(state.carousel.snapshot().show_step_buttons);
    let _ = view(&state);

    let _ = update(&mut state, Message::StripResized(600.0));
    assert!(!state.carousel.snapshot().show_step_buttons);
}

#[test]
fn single_story_renders_without_looping() {
    let config = AppConfig::default().with_catalog(single_story());
    let state = base_state(&config);
    let snapshot = state.carousel.snapshot();
    assert_eq!(snapshot.display_len, 1);
    assert_eq!(
        snapshot.phase,
        MotionPhase::Disabled(DisableReason::SingleItem)
    );
    let _ = view(&state);
}

#[test]
fn reduced_motion_from_config() {
    let state = State::new(
        Catalog::builtin(),
        CarouselSettings::default(),
        Appearance {
            theme: ThemeMode::Light,
            reduced_motion: true,
        },
    );
    assert_eq!(
        phase_label(state.carousel.phase()),
        "Reduced motion: use the arrows or drag"
    );
    assert_eq!(state.theme, ThemeMode::Light);
    let _ = view(&state);
}

#[test]
fn hovered_card_builds() {
    let mut state = State::default();
    let _ = update(&mut state, Message::CardEntered(3));
    let _ = view(&state);
}

#[test]
fn announcement_follows_the_leading_card() {
    let mut state = State::default();
    let snapshot = state.carousel.snapshot();
    assert_eq!(announcement(&state, &snapshot), "Alessandra Ruiz \u{b7} 1 of 5");

    let _ = update(&mut state, Message::Carousel(Interaction::Step(Direction::Next)));
    let snapshot = state.carousel.snapshot();
    assert_eq!(snapshot.leading_index, 1);
    assert_eq!(announcement(&state, &snapshot), "Noah Bennett \u{b7} 2 of 5");
    let _ = view(&state);
}

#[test]
fn single_story_announcement() {
    let config = AppConfig::default().with_catalog(single_story());
    let state = base_state(&config);
    let snapshot = state.carousel.snapshot();
    assert_eq!(announcement(&state, &snapshot), "Solo Person \u{b7} 1 of 1");
}
