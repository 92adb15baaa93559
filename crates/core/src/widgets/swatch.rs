//! Color name to swatch mapping.
//!
//! Product colors are free text ("Midnight Blue", "Rose Gold Zari"). The
//! first keyword found in the lowercased name decides the swatch.

/// Rendered appearance of a color chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swatch {
    Solid(&'static str),
    Gradient(&'static str),
}

impl Swatch {
    pub const FALLBACK: Self = Self::Solid("#9ca3af");

    /// Value for a CSS `background` declaration.
    #[must_use]
    pub const fn css(self) -> &'static str {
        match self {
            Self::Solid(value) | Self::Gradient(value) => value,
        }
    }

    /// Near-white swatches need a border to stay visible on white.
    #[must_use]
    pub fn needs_outline(self) -> bool {
        matches!(self, Self::Solid("#f5f5f5" | "#ffffff"))
    }
}

const MULTI_GRADIENT: &str =
    "linear-gradient(135deg, #fecaca 0%, #bfdbfe 25%, #a7f3d0 50%, #fde68a 75%, #fed7aa 100%)";

const SWATCHES: &[(&[&str], Swatch)] = &[
    (&["gold"], Swatch::Solid("#a17713")),
    (&["black"], Swatch::Solid("#000000")),
    (&["white", "ivory", "champagne"], Swatch::Solid("#f5f5f5")),
    (&["navy", "midnight"], Swatch::Solid("#1e3a8a")),
    (&["blue", "teal"], Swatch::Solid("#3b82f6")),
    (
        &["red", "crimson", "wine", "burgundy", "maroon"],
        Swatch::Solid("#dc2626"),
    ),
    (&["green", "emerald"], Swatch::Solid("#10b981")),
    (&["pink", "rose", "coral", "peach"], Swatch::Solid("#ec4899")),
    (&["purple", "lavender", "plum"], Swatch::Solid("#a855f7")),
    (&["grey", "gray", "charcoal"], Swatch::Solid("#6b7280")),
    (&["beige", "camel"], Swatch::Solid("#d4a574")),
    (&["mint"], Swatch::Solid("#6ee7b7")),
    (&["multi", "pastel"], Swatch::Gradient(MULTI_GRADIENT)),
];

/// Map a color name to its swatch. Total: unknown names get [`Swatch::FALLBACK`].
#[must_use]
pub fn swatch_for(name: &str) -> Swatch {
    let name = name.to_lowercase();
    SWATCHES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| name.contains(keyword)))
        .map_or(Swatch::FALLBACK, |(_, swatch)| *swatch)
}

/// The selected color of a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSelection {
    colors: Vec<String>,
    selected: usize,
}

impl ColorSelection {
    /// Select `requested` when it names one of `colors` (case-insensitive),
    /// otherwise the first color. Returns `None` for an empty palette.
    #[must_use]
    pub fn new(colors: &[String], requested: Option<&str>) -> Option<Self> {
        if colors.is_empty() {
            return None;
        }
        let selected = requested
            .and_then(|wanted| {
                colors
                    .iter()
                    .position(|color| color.eq_ignore_ascii_case(wanted.trim()))
            })
            .unwrap_or(0);
        Some(Self {
            colors: colors.to_vec(),
            selected,
        })
    }

    #[must_use]
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    #[must_use]
    pub fn selected(&self) -> &str {
        self.colors.get(self.selected).map_or("", String::as_str)
    }

    #[must_use]
    pub const fn selected_index(&self) -> usize {
        self.selected
    }
}
