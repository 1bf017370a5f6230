use iced::gradient::Linear;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Degrees, Gradient, Shadow, Theme, Vector};
use marquee_model::ThemeMode;

use crate::constants::layout::CARD_RADIUS;

/// Colors and effects for one [`ThemeMode`].
///
/// Only the hover shadow and the section overlay differ in intent between
/// the presets; the rest are the surface colors the cards sit on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub mode: ThemeMode,
    pub background: Color,
    pub card: Color,
    pub card_translucent: Color,
    pub border: Color,
    pub accent: Color,
    pub text: Color,
    pub text_muted: Color,
    pub text_subtle: Color,
    pub soft_shadow: Shadow,
    pub hover_shadow: Shadow,
    pub overlay: Color,
}

impl Palette {
    pub const DARK: Palette = Palette {
        mode: ThemeMode::Dark,
        background: Color::from_rgb(0.047, 0.051, 0.063),
        card: Color::from_rgb(0.086, 0.090, 0.110),
        card_translucent: Color::from_rgba(0.086, 0.090, 0.110, 0.7),
        border: Color::from_rgba(1.0, 1.0, 1.0, 0.08),
        accent: Color::from_rgb(0.788, 0.388, 0.259),
        text: Color::from_rgb(0.96, 0.96, 0.97),
        text_muted: Color::from_rgba(0.96, 0.96, 0.97, 0.8),
        text_subtle: Color::from_rgba(0.96, 0.96, 0.97, 0.6),
        soft_shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
            offset: Vector::new(0.0, 12.0),
            blur_radius: 40.0,
        },
        hover_shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.45),
            offset: Vector::new(0.0, 32.0),
            blur_radius: 120.0,
        },
        // rgba(201, 99, 66, 0.22)
        overlay: Color::from_rgba(0.788, 0.388, 0.259, 0.22),
    };

    pub const LIGHT: Palette = Palette {
        mode: ThemeMode::Light,
        background: Color::from_rgb(0.976, 0.969, 0.957),
        card: Color::from_rgb(1.0, 1.0, 1.0),
        card_translucent: Color::from_rgba(1.0, 1.0, 1.0, 0.7),
        border: Color::from_rgba(0.078, 0.094, 0.137, 0.1),
        accent: Color::from_rgb(0.992, 0.678, 0.471),
        text: Color::from_rgb(0.078, 0.094, 0.137),
        text_muted: Color::from_rgba(0.078, 0.094, 0.137, 0.8),
        text_subtle: Color::from_rgba(0.078, 0.094, 0.137, 0.6),
        soft_shadow: Shadow {
            color: Color::from_rgba(0.078, 0.094, 0.137, 0.08),
            offset: Vector::new(0.0, 12.0),
            blur_radius: 32.0,
        },
        hover_shadow: Shadow {
            color: Color::from_rgba(0.078, 0.094, 0.137, 0.28),
            offset: Vector::new(0.0, 28.0),
            blur_radius: 68.0,
        },
        // rgba(253, 173, 120, 0.16)
        overlay: Color::from_rgba(0.992, 0.678, 0.471, 0.16),
    };

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::DARK,
            ThemeMode::Light => Self::LIGHT,
        }
    }

    pub fn iced_theme(&self) -> Theme {
        let base = match self.mode {
            ThemeMode::Dark => iced::theme::Palette::DARK,
            ThemeMode::Light => iced::theme::Palette::LIGHT,
        };
        let palette = iced::theme::Palette {
            background: self.background,
            text: self.text,
            primary: self.accent,
            ..base
        };
        let name = match self.mode {
            ThemeMode::Dark => "Marquee Dark",
            ThemeMode::Light => "Marquee Light",
        };
        Theme::custom(name, palette)
    }

    /// Section backdrop: the overlay color fading out from the top left.
    pub fn section(self) -> impl Fn(&Theme) -> container::Style {
        move |_| container::Style {
            text_color: Some(self.text),
            background: Some(Background::Gradient(Gradient::Linear(
                Linear::new(Degrees(135.0))
                    .add_stop(0.0, self.overlay)
                    .add_stop(0.65, Color::TRANSPARENT),
            ))),
            border: Border::default(),
            shadow: Shadow::default(),
            snap: false,
        }
    }

    /// Draggable surface behind the cards, ringed in the accent color while
    /// it holds keyboard focus.
    pub fn strip(self, focused: bool) -> impl Fn(&Theme) -> container::Style {
        move |_| container::Style {
            text_color: Some(self.text),
            background: Some(Background::Color(self.card)),
            border: if focused {
                Border {
                    color: self.accent,
                    width: 2.0,
                    radius: 4.0.into(),
                }
            } else {
                Border::default()
            },
            shadow: Shadow::default(),
            snap: false,
        }
    }

    pub fn card(self, hovered: bool) -> impl Fn(&Theme) -> container::Style {
        move |_| container::Style {
            text_color: Some(self.text),
            background: Some(Background::Color(self.card)),
            border: Border {
                color: self.border,
                width: 1.0,
                radius: CARD_RADIUS.into(),
            },
            shadow: if hovered {
                self.hover_shadow
            } else {
                self.soft_shadow
            },
            snap: false,
        }
    }

    /// Rounded pill; `outlined` draws the border instead of a fill.
    pub fn pill(self, outlined: bool) -> impl Fn(&Theme) -> container::Style {
        move |_| container::Style {
            text_color: Some(self.text_subtle),
            background: (!outlined)
                .then_some(Background::Color(self.card_translucent)),
            border: Border {
                color: if outlined {
                    self.border
                } else {
                    Color::TRANSPARENT
                },
                width: if outlined { 1.0 } else { 0.0 },
                radius: 999.0.into(),
            },
            shadow: Shadow::default(),
            snap: false,
        }
    }

    /// Eyebrow label above the title, outlined in the accent color.
    pub fn eyebrow(self) -> impl Fn(&Theme) -> container::Style {
        move |_| container::Style {
            text_color: Some(self.text_subtle),
            background: Some(Background::Color(self.card_translucent)),
            border: Border {
                color: Color {
                    a: 0.6,
                    ..self.accent
                },
                width: 1.0,
                radius: 999.0.into(),
            },
            shadow: Shadow::default(),
            snap: false,
        }
    }

    pub fn step_button(
        self,
    ) -> impl Fn(&Theme, button::Status) -> button::Style {
        move |_, status| {
            let background = match status {
                button::Status::Hovered | button::Status::Pressed => self.card,
                _ => self.card_translucent,
            };
            button::Style {
                text_color: self.text,
                background: Some(Background::Color(background)),
                border: Border {
                    color: self.border,
                    width: 1.0,
                    radius: 999.0.into(),
                },
                shadow: Shadow {
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
                    offset: Vector::new(0.0, 4.0),
                    blur_radius: 8.0,
                },
                snap: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_follow_the_mode() {
        assert_eq!(Palette::for_mode(ThemeMode::Dark).mode, ThemeMode::Dark);
        assert_eq!(Palette::for_mode(ThemeMode::Light).mode, ThemeMode::Light);
    }

    #[test]
    fn hover_shadows_match_presets() {
        let dark = Palette::DARK.hover_shadow;
        assert_eq!(dark.offset, Vector::new(0.0, 32.0));
        assert_eq!(dark.blur_radius, 120.0);
        assert_eq!(dark.color.a, 0.45);

        let light = Palette::LIGHT.hover_shadow;
        assert_eq!(light.offset, Vector::new(0.0, 28.0));
        assert_eq!(light.blur_radius, 68.0);
        assert_eq!(light.color.a, 0.28);
    }

    #[test]
    fn hovered_card_uses_hover_shadow() {
        let theme = Palette::DARK.iced_theme();
        let idle = (Palette::DARK.card(false))(&theme);
        let hovered = (Palette::DARK.card(true))(&theme);
        assert_eq!(idle.shadow, Palette::DARK.soft_shadow);
        assert_eq!(hovered.shadow, Palette::DARK.hover_shadow);
    }
}
