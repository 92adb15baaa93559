//! Product detail tabs.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ProductTab {
    #[default]
    Description,
    Craftsmanship,
    Styling,
    Care,
}

impl ProductTab {
    pub const ALL: [Self; 4] = [
        Self::Description,
        Self::Craftsmanship,
        Self::Styling,
        Self::Care,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Description => "description",
            Self::Craftsmanship => "craftsmanship",
            Self::Styling => "styling",
            Self::Care => "care",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Description => "Description",
            Self::Craftsmanship => "Craftsmanship",
            Self::Styling => "Styling Tips",
            Self::Care => "Care & Size",
        }
    }

    /// Unknown or missing keys select the description tab.
    #[must_use]
    pub fn from_key(key: Option<&str>) -> Self {
        key.and_then(|key| Self::ALL.into_iter().find(|tab| tab.key() == key))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_roundtrip() {
        for tab in ProductTab::ALL {
            assert_eq!(ProductTab::from_key(Some(tab.key())), tab);
        }
    }

    #[test]
    fn test_unknown_key_defaults() {
        assert_eq!(ProductTab::from_key(Some("reviews")), ProductTab::Description);
        assert_eq!(ProductTab::from_key(None), ProductTab::Description);
    }

    #[test]
    fn test_labels() {
        assert_eq!(ProductTab::Styling.label(), "Styling Tips");
        assert_eq!(ProductTab::Care.label(), "Care & Size");
    }
}
