//! Compiled-in testimonial catalog and the looped display sequence.

use crate::error::{ModelError, Result};
use crate::testimonial::Testimonial;

/// Quotes shipped with the site.
pub const BUILTIN_TESTIMONIALS: &[Testimonial] = &[
    Testimonial::with_logo(
        "Synergon AI transformed our workflows. Studio plus Omnidesk means customers feel supported while our teams automate the repetitive work.",
        "Alessandra Ruiz",
        "VP of Operations, Latticewave",
        "Latticewave",
        "/logos/latticewave.svg",
    ),
    Testimonial::with_logo(
        "RevPulse gives us pipeline clairvoyance. Forecasting accuracy went from guesswork to a science backed by realtime signals.",
        "Noah Bennett",
        "Chief Revenue Officer, FluxBase",
        "FluxBase",
        "/logos/fluxbase.svg",
    ),
    Testimonial::with_logo(
        "Global tenant governance used to cripple rollout speed. Synergon AI's multi-tenant controls let us ship securely, everywhere.",
        "Priya Desai",
        "CTO, Northwind Systems",
        "Northwind Systems",
        "/logos/northwind.svg",
    ),
    Testimonial::new(
        "Our go-to-market pods finally stay in sync. Playbooks adapt in real time so the team hits goals without living in dashboards.",
        "Maya Chen",
        "Head of Customer Experience, AeroSpark",
        "AeroSpark",
    ),
    Testimonial::new(
        "Launch risk dropped overnight. Compliance guardrails trigger automatically, letting product focus on shipping value fast.",
        "Elliot Graves",
        "Director of Product, Meridian Labs",
        "Meridian Labs",
    ),
];

/// Ordered, validated, non-empty list of testimonials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Testimonial>,
}

impl Catalog {
    /// Validate every record and keep the given order.
    pub fn try_new(items: Vec<Testimonial>) -> Result<Self> {
        if items.is_empty() {
            return Err(ModelError::EmptyCatalog);
        }
        for (index, item) in items.iter().enumerate() {
            item.validate().map_err(|err| match err {
                ModelError::EmptyField { field, .. } => ModelError::EmptyField {
                    field,
                    index: Some(index),
                },
                other => other,
            })?;
        }
        Ok(Self { items })
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            items: BUILTIN_TESTIMONIALS.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Testimonial> {
        self.items.get(index)
    }

    pub fn as_slice(&self) -> &[Testimonial] {
        &self.items
    }

    /// Looping needs at least two distinct cards to hide the seam.
    pub fn can_loop(&self) -> bool {
        self.items.len() > 1
    }

    pub fn display_list(&self) -> DisplayList<'_> {
        DisplayList::new(&self.items)
    }
}

/// The sequence actually rendered: the catalog twice when looping, once
/// otherwise.
#[derive(Debug, Clone, Copy)]
pub struct DisplayList<'a> {
    source: &'a [Testimonial],
    looped: bool,
}

/// One rendered slot in a [`DisplayList`].
#[derive(Debug, Clone, Copy)]
pub struct DisplayEntry<'a> {
    /// Position in the display sequence.
    pub index: usize,
    /// Position of the record in the catalog.
    pub source_index: usize,
    pub testimonial: &'a Testimonial,
}

impl DisplayEntry<'_> {
    /// Stable identity for the slot, unique across both copies.
    pub fn key(&self) -> String {
        format!("{}-{}", self.testimonial.name, self.index)
    }
}

impl<'a> DisplayList<'a> {
    pub fn new(source: &'a [Testimonial]) -> Self {
        Self {
            source,
            looped: source.len() > 1,
        }
    }

    pub fn is_looped(&self) -> bool {
        self.looped
    }

    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    pub fn len(&self) -> usize {
        if self.looped {
            self.source.len() * 2
        } else {
            self.source.len()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<DisplayEntry<'a>> {
        if index >= self.len() {
            return None;
        }
        let source_index = index % self.source.len();
        Some(DisplayEntry {
            index,
            source_index,
            testimonial: &self.source[source_index],
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = DisplayEntry<'a>> + use<'a> {
        let list = *self;
        (0..list.len()).filter_map(move |i| list.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::try_new(BUILTIN_TESTIMONIALS.to_vec())
            .expect("builtin testimonials validate");
        assert_eq!(catalog.len(), 5);
        assert!(catalog.can_loop());
        assert!(catalog.get(0).is_some_and(Testimonial::has_logo));
        assert!(catalog.get(3).is_some_and(|t| !t.has_logo()));
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert_eq!(Catalog::try_new(Vec::new()), Err(ModelError::EmptyCatalog));
    }

    #[test]
    fn invalid_record_reports_its_position() {
        let items = vec![
            Testimonial::new("q", "n", "r", "c"),
            Testimonial::new("", "n", "r", "c"),
        ];
        assert_eq!(
            Catalog::try_new(items),
            Err(ModelError::EmptyField {
                field: "quote",
                index: Some(1)
            })
        );
    }

    #[test]
    fn display_list_doubles_when_looping() {
        let catalog = Catalog::builtin();
        let list = catalog.display_list();
        assert!(list.is_looped());
        assert_eq!(list.len(), 10);

        let seventh = list.get(7).unwrap();
        assert_eq!(seventh.source_index, 2);
        assert_eq!(seventh.testimonial.name, "Priya Desai");
        assert_eq!(seventh.key(), "Priya Desai-7");
        assert!(list.get(10).is_none());
    }

    #[test]
    fn single_testimonial_is_not_doubled() {
        let catalog =
            Catalog::try_new(vec![Testimonial::new("q", "Solo", "r", "c")])
                .unwrap();
        let list = catalog.display_list();
        assert!(!catalog.can_loop());
        assert!(!list.is_looped());
        assert_eq!(list.iter().count(), 1);
    }

    #[test]
    fn keys_are_unique_across_copies() {
        let catalog = Catalog::builtin();
        let mut keys: Vec<_> =
            catalog.display_list().iter().map(|e| e.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 10);
    }
}
