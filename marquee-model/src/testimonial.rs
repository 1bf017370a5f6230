use std::borrow::Cow;

use crate::error::{ModelError, Result};

/// A single customer quote shown on a carousel card.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Testimonial {
    pub quote: Cow<'static, str>,
    pub name: Cow<'static, str>,
    pub role: Cow<'static, str>,
    pub company: Cow<'static, str>,
    /// Asset path of the company logo. Cards without one show the company
    /// name as a pill instead.
    #[cfg_attr(feature = "serde", serde(default))]
    pub logo: Option<Cow<'static, str>>,
}

impl Testimonial {
    /// Build a testimonial from static text, usable in `const` tables.
    pub const fn new(
        quote: &'static str,
        name: &'static str,
        role: &'static str,
        company: &'static str,
    ) -> Self {
        Self {
            quote: Cow::Borrowed(quote),
            name: Cow::Borrowed(name),
            role: Cow::Borrowed(role),
            company: Cow::Borrowed(company),
            logo: None,
        }
    }

    /// Same as [`Testimonial::new`] with a logo asset.
    pub const fn with_logo(
        quote: &'static str,
        name: &'static str,
        role: &'static str,
        company: &'static str,
        logo: &'static str,
    ) -> Self {
        Self {
            quote: Cow::Borrowed(quote),
            name: Cow::Borrowed(name),
            role: Cow::Borrowed(role),
            company: Cow::Borrowed(company),
            logo: Some(Cow::Borrowed(logo)),
        }
    }

    pub fn has_logo(&self) -> bool {
        self.logo.as_deref().is_some_and(|l| !l.trim().is_empty())
    }

    /// Alt text for the logo image.
    pub fn logo_alt(&self) -> String {
        format!("{} logo", self.company)
    }

    /// Quote wrapped in typographic quotation marks.
    pub fn quoted(&self) -> String {
        format!("\u{201c}{}\u{201d}", self.quote)
    }

    /// Reject records whose quote, name or company is blank. Role is free-form
    /// and may be empty.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("quote", &self.quote),
            ("name", &self.name),
            ("company", &self.company),
        ] {
            if value.trim().is_empty() {
                return Err(ModelError::EmptyField { field, index: None });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_blank_name() {
        let t = Testimonial::new("Great", "  ", "CTO", "Acme");
        assert_eq!(
            t.validate(),
            Err(ModelError::EmptyField {
                field: "name",
                index: None
            })
        );
    }

    #[test]
    fn empty_role_is_allowed() {
        let t = Testimonial::new("Great", "Ada", "", "Acme");
        assert!(t.validate().is_ok());
    }

    #[test]
    fn blank_logo_counts_as_missing() {
        let t = Testimonial::with_logo("q", "n", "r", "c", " ");
        assert!(!t.has_logo());
        let t = Testimonial::with_logo("q", "n", "r", "c", "/logos/c.svg");
        assert!(t.has_logo());
        assert_eq!(t.logo_alt(), "c logo");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_without_logo() {
        let json = r#"{"quote":"q","name":"n","role":"r","company":"c"}"#;
        let t: Testimonial = serde_json::from_str(json).unwrap();
        assert_eq!(t.logo, None);
        assert_eq!(t.company, "c");
    }
}
