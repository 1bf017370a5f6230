use marquee_config::Appearance;
use marquee_core::{CaptureSlot, Carousel, CarouselSettings, WidthFeed};
use marquee_model::{Catalog, ThemeMode};

/// Application state. Owned by the iced runtime and only touched from
/// [`crate::update::update`].
#[derive(Debug)]
pub struct State {
    pub catalog: Catalog,
    pub carousel: Carousel,
    /// Latest strip width; the carousel is subscribed to it.
    pub width_feed: WidthFeed,
    /// Pointer currently captured by the strip surface.
    pub capture: CaptureSlot,
    pub theme: ThemeMode,
    /// Display index of the hovered card.
    pub hovered_card: Option<usize>,
    /// Keyboard focus is on the carousel.
    pub focused: bool,
}

impl State {
    pub fn new(
        catalog: Catalog,
        settings: CarouselSettings,
        appearance: Appearance,
    ) -> Self {
        let width_feed = WidthFeed::new();
        let carousel = Carousel::new(catalog.len(), settings)
            .with_width_source(&width_feed)
            .with_reduced_motion(appearance.reduced_motion);

        Self {
            catalog,
            carousel,
            width_feed,
            capture: CaptureSlot::default(),
            theme: appearance.theme,
            hovered_card: None,
            focused: false,
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(
            Catalog::builtin(),
            CarouselSettings::default(),
            Appearance::default(),
        )
    }
}
