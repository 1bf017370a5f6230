//! Loop enablement and offset normalization.

use crate::layout::Geometry;
use crate::motion::DisableReason;

/// Fold any offset into `[0, total)`.
///
/// Negative inputs (content dragged right past the start) wrap to the end of
/// the loop. Non-finite inputs and non-positive totals yield 0.
pub fn normalize_offset(value: f32, total: f32) -> f32 {
    if !value.is_finite() || !total.is_finite() || total <= 0.0 {
        return 0.0;
    }
    let folded = value.rem_euclid(total);
    // rem_euclid can round up to exactly `total` for tiny negative inputs.
    if folded >= total { 0.0 } else { folded }
}

/// Whether the strip can loop, computed once per input change instead of at
/// every call site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoopMode {
    Enabled {
        /// One card plus gap.
        slide: f32,
        /// Slide distance times the number of distinct testimonials.
        total: f32,
    },
    Disabled(DisableReason),
}

impl LoopMode {
    /// Looping needs at least two testimonials and a positive, finite slide
    /// distance.
    pub fn resolve(source_count: usize, geometry: &Geometry) -> Self {
        if source_count <= 1 {
            return LoopMode::Disabled(DisableReason::SingleItem);
        }
        let slide = geometry.slide_distance();
        let total = geometry.total_loop_distance(source_count);
        if !slide.is_finite() || slide <= 0.0 || !total.is_finite() || total <= 0.0 {
            return LoopMode::Disabled(DisableReason::DegenerateGeometry);
        }
        LoopMode::Enabled { slide, total }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, LoopMode::Enabled { .. })
    }

    /// Normalize for this mode; a disabled loop pins everything to 0.
    pub fn normalize(&self, value: f32) -> f32 {
        match *self {
            LoopMode::Enabled { total, .. } => normalize_offset(value, total),
            LoopMode::Disabled(_) => 0.0,
        }
    }

    /// Distance of one step, or `None` when the loop is disabled.
    pub fn slide_distance(&self) -> Option<f32> {
        match *self {
            LoopMode::Enabled { slide, .. } => Some(slide),
            LoopMode::Disabled(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;
    use crate::settings::CarouselSettings;

    const TOTAL: f32 = 1720.0;

    #[test]
    fn wraps_negative_and_oversized_values() {
        assert_eq!(normalize_offset(-80.0, TOTAL), 1640.0);
        assert_eq!(normalize_offset(TOTAL + 10.0, TOTAL), 10.0);
        assert_eq!(normalize_offset(3.0 * TOTAL, TOTAL), 0.0);
        assert_eq!(normalize_offset(344.0, TOTAL), 344.0);
    }

    #[test]
    fn tiny_negative_does_not_land_on_total() {
        let n = normalize_offset(-1e-9, TOTAL);
        assert!((0.0..TOTAL).contains(&n), "got {n}");
    }

    #[test]
    fn degenerate_inputs_yield_zero() {
        assert_eq!(normalize_offset(f32::NAN, TOTAL), 0.0);
        assert_eq!(normalize_offset(f32::INFINITY, TOTAL), 0.0);
        assert_eq!(normalize_offset(100.0, 0.0), 0.0);
        assert_eq!(normalize_offset(100.0, -5.0), 0.0);
    }

    #[test]
    fn random_offsets_stay_in_range_and_are_idempotent() {
        let mut rng = rand::rng();
        for _ in 0..2_000 {
            let raw: f32 = rng.random_range(-50_000.0..50_000.0);
            let n = normalize_offset(raw, TOTAL);
            assert!((0.0..TOTAL).contains(&n), "{raw} -> {n}");
            assert_eq!(normalize_offset(n, TOTAL), n);
        }
    }

    #[test]
    fn single_item_disables_looping() {
        let g = Geometry::measure(1000.0, &CarouselSettings::default());
        let mode = LoopMode::resolve(1, &g);
        assert_eq!(mode, LoopMode::Disabled(DisableReason::SingleItem));
        assert_eq!(mode.normalize(500.0), 0.0);
        assert_eq!(mode.slide_distance(), None);
    }

    #[test]
    fn zero_width_cards_are_degenerate() {
        let settings = CarouselSettings {
            gap: 0.0,
            min_card_width: 0.0,
            max_card_width: 0.0,
            ..CarouselSettings::default()
        };
        let g = Geometry::measure(1000.0, &settings);
        assert_eq!(
            LoopMode::resolve(5, &g),
            LoopMode::Disabled(DisableReason::DegenerateGeometry)
        );
    }

    #[test]
    fn enabled_mode_carries_distances() {
        let g = Geometry::measure(0.0, &CarouselSettings::default());
        let mode = LoopMode::resolve(5, &g);
        assert_eq!(
            mode,
            LoopMode::Enabled {
                slide: 344.0,
                total: 1720.0
            }
        );
    }
}
