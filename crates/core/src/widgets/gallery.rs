//! Product image gallery with lightbox.

/// Active image and lightbox state for a gallery of `len` images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gallery {
    len: usize,
    active: usize,
    lightbox_open: bool,
}

impl Gallery {
    /// Returns `None` for an empty gallery, which renders nothing.
    #[must_use]
    pub const fn new(len: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        Some(Self {
            len,
            active: 0,
            lightbox_open: false,
        })
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn active(self) -> usize {
        self.active
    }

    #[must_use]
    pub const fn is_lightbox_open(self) -> bool {
        self.lightbox_open
    }

    /// Page scrolling is locked exactly while the lightbox is open.
    #[must_use]
    pub const fn scroll_locked(self) -> bool {
        self.lightbox_open
    }

    /// Jump to `index`, clamped to the last image.
    #[must_use]
    pub fn select(self, index: usize) -> Self {
        Self {
            active: index.min(self.len - 1),
            ..self
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self {
            active: (self.active + 1) % self.len,
            ..self
        }
    }

    #[must_use]
    pub const fn previous(self) -> Self {
        let active = if self.active == 0 {
            self.len - 1
        } else {
            self.active - 1
        };
        Self { active, ..self }
    }

    #[must_use]
    pub const fn open(self) -> Self {
        Self {
            lightbox_open: true,
            ..self
        }
    }

    #[must_use]
    pub const fn close(self) -> Self {
        Self {
            lightbox_open: false,
            ..self
        }
    }

    /// Index reached by [`Gallery::next`], for building links.
    #[must_use]
    pub const fn next_index(self) -> usize {
        self.next().active
    }

    /// Index reached by [`Gallery::previous`], for building links.
    #[must_use]
    pub const fn previous_index(self) -> usize {
        self.previous().active
    }
}
