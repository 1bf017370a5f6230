//! Data model for the Marquee testimonials carousel.
//!
//! Everything here is immutable once constructed: the catalog is compiled in
//! and the carousel only ever reads it.
#![allow(missing_docs)]

pub mod catalog;
pub mod error;
pub mod testimonial;
pub mod theme;

pub use catalog::{BUILTIN_TESTIMONIALS, Catalog, DisplayEntry, DisplayList};
pub use error::{ModelError, Result as ModelResult};
pub use testimonial::Testimonial;
pub use theme::ThemeMode;
