//! Scroll-aware header.
//!
//! The header fades from a transparent overlay to a solid white bar over the
//! first [`SCROLL_RANGE`] pixels of scrolling. The server renders the style
//! for the initial offset; `static/js/storefront.js` mirrors
//! [`scroll_progress`] and [`HeaderStyle::at`] and reapplies them once per
//! animation frame while scrolling.

/// Scroll distance in pixels over which the header transitions.
pub const SCROLL_RANGE: f64 = 100.0;

/// Normalized scroll progress in `0.0..=1.0`.
#[must_use]
pub fn scroll_progress(offset: f64) -> f64 {
    if offset.is_nan() {
        return 0.0;
    }
    (offset / SCROLL_RANGE).clamp(0.0, 1.0)
}

/// Interpolated header appearance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderStyle {
    pub background_opacity: f64,
    pub padding_y: f64,
    pub logo_height: f64,
    /// Text color channel (0 = black, 255 = white), equal for r/g/b.
    pub text_channel: u8,
}

impl HeaderStyle {
    const PADDING: (f64, f64) = (24.0, 12.0);
    const LOGO_HEIGHT: (f64, f64) = (96.0, 48.0);

    #[must_use]
    pub fn at(progress: f64) -> Self {
        let t = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let text_channel = (255.0 * (1.0 - t)).round() as u8;
        Self {
            background_opacity: t,
            padding_y: lerp(Self::PADDING, t),
            logo_height: lerp(Self::LOGO_HEIGHT, t),
            text_channel,
        }
    }

    /// Style for a page scrolled to `offset` pixels.
    #[must_use]
    pub fn at_offset(offset: f64) -> Self {
        Self::at(scroll_progress(offset))
    }

    /// Fully scrolled style, used by pages without a hero.
    #[must_use]
    pub fn solid() -> Self {
        Self::at(1.0)
    }

    /// Inline CSS custom properties consumed by the header stylesheet.
    #[must_use]
    pub fn css_variables(&self) -> String {
        let c = self.text_channel;
        format!(
            "--header-bg: rgba(255, 255, 255, {:.2}); --header-py: {:.1}px; --header-logo-h: {:.1}px; --header-fg: rgb({c}, {c}, {c});",
            self.background_opacity, self.padding_y, self.logo_height
        )
    }
}

fn lerp((from, to): (f64, f64), t: f64) -> f64 {
    (to - from).mul_add(t, from)
}
