//! Card sizing from the observed container width.

use crate::settings::CarouselSettings;

/// Width of one card so that `visible_cards` fit the container with the
/// configured gaps, clamped to `[min_card_width, max_card_width]` and rounded
/// to whole pixels.
///
/// Returns `None` when nothing has been measured yet (`container_width == 0`)
/// or the arithmetic does not produce a finite number.
pub fn bounded_card_width(
    container_width: f32,
    settings: &CarouselSettings,
) -> Option<f32> {
    if container_width == 0.0 {
        return None;
    }
    let visible = f32::from(settings.visible_cards.max(1));
    let raw = (container_width - settings.gap * (visible - 1.0)) / visible;
    if raw.is_nan() {
        return None;
    }
    // max/min rather than clamp: settings are not guaranteed to be ordered.
    let clamped = raw.max(settings.min_card_width).min(settings.max_card_width);
    clamped.is_finite().then(|| clamped.round())
}

/// Card width the motion math uses: the bounded width, or the fallback while
/// nothing has been measured.
pub fn card_width_for_motion(
    container_width: f32,
    settings: &CarouselSettings,
) -> f32 {
    bounded_card_width(container_width, settings)
        .unwrap_or(settings.fallback_card_width)
}

/// Derived card geometry for the current container width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub container_width: f32,
    /// Card width actually used for layout and motion.
    pub card_width: f32,
    /// Whether `card_width` came from a measurement rather than the fallback.
    pub measured: bool,
    pub gap: f32,
    pub card_height: f32,
}

impl Geometry {
    pub fn measure(container_width: f32, settings: &CarouselSettings) -> Self {
        let bounded = bounded_card_width(container_width, settings);
        Self {
            container_width,
            card_width: bounded.unwrap_or(settings.fallback_card_width),
            measured: bounded.is_some(),
            gap: settings.gap,
            card_height: settings.card_height,
        }
    }

    /// Distance covered by advancing exactly one card.
    #[inline]
    pub fn slide_distance(&self) -> f32 {
        self.card_width + self.gap
    }

    /// Distance after which the doubled strip repeats itself.
    #[inline]
    pub fn total_loop_distance(&self, source_count: usize) -> f32 {
        self.slide_distance() * source_count as f32
    }
}

/// Tracks the latest container width and the geometry derived from it.
#[derive(Debug, Clone)]
pub struct LayoutSizer {
    settings: CarouselSettings,
    geometry: Geometry,
}

impl LayoutSizer {
    pub fn new(settings: CarouselSettings) -> Self {
        Self {
            geometry: Geometry::measure(0.0, &settings),
            settings,
        }
    }

    /// Record a new container width. Returns `true` when the derived
    /// geometry changed. Negative or non-finite widths count as unmeasured.
    pub fn observe(&mut self, container_width: f32) -> bool {
        let width = if container_width.is_finite() {
            container_width.max(0.0)
        } else {
            0.0
        };
        let next = Geometry::measure(width, &self.settings);
        if next == self.geometry {
            return false;
        }
        log::trace!(
            "container width {:.1} -> card width {:.0} (measured: {})",
            width,
            next.card_width,
            next.measured
        );
        self.geometry = next;
        true
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn container_width(&self) -> f32 {
        self.geometry.container_width
    }

    pub fn settings(&self) -> &CarouselSettings {
        &self.settings
    }
}
