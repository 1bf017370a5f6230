use iced::font::Weight;
use iced::widget::{
    Space, button, column, container, mouse_area, row, stack, text,
};
use iced::{Alignment, Element, Font, Length};
use marquee_core::constants::layout::HOVER_LIFT;
use marquee_core::{CarouselSnapshot, DisableReason, Direction, Interaction, MotionPhase};
use marquee_model::DisplayEntry;

use crate::constants::layout::{
    CARD_PADDING, HEADER_TO_STRIP_SPACING, LOGO_HEIGHT, LOGO_WIDTH,
    SECTION_MAX_WIDTH, SECTION_PADDING_X, SECTION_PADDING_Y,
    STEP_BUTTON_INSET, STRIP_PADDING_X, STRIP_PADDING_Y,
};
use crate::constants::typography;
use crate::messages::Message;
use crate::state::State;
use crate::theme::Palette;
use crate::widgets::marquee_strip;

pub const EYEBROW: &str = "Loved by Teams Everywhere";
pub const TITLE: &str = "Customer stories that keep scaling";
pub const CASE_STUDY: &str = "Case Study";

const SEMIBOLD: Font = Font {
    weight: Weight::Semibold,
    ..Font::DEFAULT
};

pub fn view(state: &State) -> Element<'_, Message> {
    let palette = Palette::for_mode(state.theme);
    let snapshot = state.carousel.snapshot();

    let content = column![
        header(palette),
        Space::new().height(HEADER_TO_STRIP_SPACING),
        carousel(state, &snapshot, palette),
        Space::new().height(16),
        status_line(state, &snapshot, palette),
    ]
    .width(Length::Fill)
    .max_width(SECTION_MAX_WIDTH);

    container(
        container(content)
            .padding([SECTION_PADDING_Y, SECTION_PADDING_X])
            .center_x(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(palette.section())
    .into()
}

fn header<'a>(palette: Palette) -> Element<'a, Message> {
    let eyebrow = container(
        text(EYEBROW.to_uppercase())
            .size(typography::EYEBROW)
            .color(palette.text_subtle),
    )
    .padding([8.0, 16.0])
    .style(palette.eyebrow());

    let title = text(TITLE)
        .size(typography::TITLE)
        .font(SEMIBOLD)
        .color(palette.text);

    column![eyebrow, Space::new().height(20), title]
        .max_width(672)
        .into()
}

fn carousel<'a>(
    state: &'a State,
    snapshot: &CarouselSnapshot,
    palette: Palette,
) -> Element<'a, Message> {
    let mut cards = row![].spacing(snapshot.gap);
    for entry in state.catalog.display_list().iter() {
        let hovered = state.hovered_card == Some(entry.index);
        cards = cards.push(card(entry, snapshot, palette, hovered));
    }

    // The carousel measures the padded surface, not the inner strip.
    let strip = marquee_strip(cards, Message::Carousel)
        .translate_x(snapshot.translate_x)
        .cursor(snapshot.cursor)
        .height(Length::Fixed(snapshot.card_height + HOVER_LIFT))
        .on_resize(|width| {
            Message::StripResized(width + 2.0 * STRIP_PADDING_X)
        });

    let surface = container(strip)
        .padding([STRIP_PADDING_Y, STRIP_PADDING_X])
        .width(Length::Fill)
        .style(palette.strip(state.focused));

    let layered: Element<'a, Message> = if snapshot.show_step_buttons {
        stack![surface, step_buttons(palette)].into()
    } else {
        surface.into()
    };

    mouse_area(layered)
        .on_enter(Message::Carousel(Interaction::HoverEnter))
        .on_exit(Message::Carousel(Interaction::HoverLeave))
        .into()
}

fn card<'a>(
    entry: DisplayEntry<'a>,
    snapshot: &CarouselSnapshot,
    palette: Palette,
    hovered: bool,
) -> Element<'a, Message> {
    let testimonial = entry.testimonial;

    let brand: Element<'a, Message> = if testimonial.has_logo() {
        // No image backend is compiled in; the slot keeps logo proportions
        // and shows the company wordmark.
        container(
            text(&*testimonial.company)
                .size(typography::NAME)
                .font(SEMIBOLD)
                .color(palette.text),
        )
        .width(Length::Fixed(LOGO_WIDTH))
        .height(Length::Fixed(LOGO_HEIGHT))
        .align_y(Alignment::Center)
        .into()
    } else {
        container(
            text(testimonial.company.to_uppercase())
                .size(typography::BADGE)
                .font(SEMIBOLD)
                .color(palette.text_subtle),
        )
        .height(Length::Fixed(LOGO_HEIGHT))
        .padding([0.0, 16.0])
        .align_y(Alignment::Center)
        .style(palette.pill(false))
        .into()
    };

    let badge = container(
        text(CASE_STUDY.to_uppercase())
            .size(typography::BADGE)
            .color(palette.text_subtle),
    )
    .padding([4.0, 12.0])
    .style(palette.pill(true));

    let top = row![brand, badge].spacing(12).align_y(Alignment::Center);

    let quote = text(testimonial.quoted())
        .size(typography::QUOTE)
        .line_height(1.6)
        .color(palette.text_muted);

    let author = column![
        text(&*testimonial.name)
            .size(typography::NAME)
            .font(SEMIBOLD)
            .color(palette.text),
        text(&*testimonial.role)
            .size(typography::ROLE)
            .color(palette.text_subtle),
    ]
    .spacing(2);

    let body = column![
        top,
        Space::new().height(24),
        container(quote).height(Length::Fill),
        Space::new().height(24),
        author,
    ];

    let article = container(body)
        .padding(CARD_PADDING)
        .width(Length::Fixed(snapshot.card_width))
        .height(Length::Fixed(snapshot.card_height))
        .clip(true)
        .style(palette.card(hovered));

    let lift = if hovered { HOVER_LIFT } else { 0.0 };
    let lifted = column![Space::new().height(HOVER_LIFT - lift), article];

    mouse_area(lifted)
        .on_enter(Message::CardEntered(entry.index))
        .on_exit(Message::CardLeft(entry.index))
        .into()
}

fn step_buttons<'a>(palette: Palette) -> Element<'a, Message> {
    let step = move |glyph: &'static str, direction: Direction| {
        button(
            text(glyph)
                .size(typography::STEP_GLYPH)
                .color(palette.text),
        )
        .on_press(Message::Carousel(Interaction::Step(direction)))
        .padding(8)
        .style(palette.step_button())
    };

    container(
        row![
            step("\u{2039}", Direction::Previous),
            Space::new().width(Length::Fill),
            step("\u{203a}", Direction::Next),
        ]
        .align_y(Alignment::Center),
    )
    .padding([0.0, STEP_BUTTON_INSET])
    .width(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

/// Short description of what the carousel is doing.
pub fn phase_label(phase: MotionPhase) -> &'static str {
    match phase {
        MotionPhase::Running => "Auto-advancing",
        MotionPhase::Paused => "Paused",
        MotionPhase::Disabled(DisableReason::ReducedMotion) => {
            "Reduced motion: use the arrows or drag"
        }
        MotionPhase::Disabled(DisableReason::SingleItem) => "Single story",
        MotionPhase::Disabled(DisableReason::DegenerateGeometry) => {
            "Waiting for layout"
        }
    }
}

/// Polite announcement of the leading card, e.g. `Alessandra Ruiz · 1 of 5`.
///
/// Only changes when a different card leads, so it can be read out without
/// interrupting.
pub fn announcement(state: &State, snapshot: &CarouselSnapshot) -> String {
    match state.catalog.get(snapshot.leading_index) {
        Some(testimonial) => format!(
            "{} \u{b7} {} of {}",
            testimonial.name,
            snapshot.leading_index + 1,
            snapshot.source_len
        ),
        None => String::new(),
    }
}

fn status_line<'a>(
    state: &State,
    snapshot: &CarouselSnapshot,
    palette: Palette,
) -> Element<'a, Message> {
    let mut hint = String::from("Tab focus \u{b7} M reduced motion \u{b7} T theme");
    if state.focused {
        hint.push_str(" \u{b7} \u{2190}/\u{2192} step \u{b7} Esc release");
    }

    row![
        text(phase_label(snapshot.phase))
            .size(typography::ROLE)
            .color(palette.text_muted),
        Space::new().width(20),
        text(announcement(state, snapshot))
            .size(typography::ROLE)
            .font(SEMIBOLD)
            .color(palette.text_muted),
        Space::new().width(Length::Fill),
        text(hint).size(typography::ROLE).color(palette.text_subtle),
    ]
    .align_y(Alignment::Center)
    .into()
}
