//! CDN URLs for Sanity image and file assets.
//!
//! Uploaded images are served from
//! `https://cdn.sanity.io/images/{project}/{dataset}/{id}-{W}x{H}.{format}`
//! with transformation parameters in the query string. References that are
//! already plain URLs (static fallbacks) pass through untouched.

use sayura_core::{FileRef, ImageRef};

const CDN_BASE: &str = "https://cdn.sanity.io";

/// Width used when none is requested.
pub const DEFAULT_WIDTH: u32 = 800;
/// Quality used when none is requested.
pub const DEFAULT_QUALITY: u8 = 90;

const PLACEHOLDER_WIDTH: u32 = 20;
const PLACEHOLDER_BLUR: u8 = 10;

/// Resolves asset references for one project and dataset.
#[derive(Debug, Clone)]
pub struct ImageUrlBuilder {
    project_id: String,
    dataset: String,
}

impl ImageUrlBuilder {
    #[must_use]
    pub fn new(project_id: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: dataset.into(),
        }
    }

    /// Start building a URL for `image`.
    #[must_use]
    pub const fn image<'a>(&'a self, image: &'a ImageRef) -> ImageUrl<'a> {
        ImageUrl {
            builder: self,
            image,
            width: DEFAULT_WIDTH,
            height: None,
            quality: DEFAULT_QUALITY,
            blur: None,
        }
    }

    /// Tiny blurred rendition used as a loading placeholder.
    #[must_use]
    pub fn blur_placeholder_url(&self, image: &ImageRef) -> String {
        self.image(image)
            .width(PLACEHOLDER_WIDTH)
            .blur(PLACEHOLDER_BLUR)
            .url()
    }

    /// URL of a non-image file such as the hero video.
    ///
    /// Returns `None` for malformed references.
    #[must_use]
    pub fn file_url(&self, file: &FileRef) -> Option<String> {
        let (id, extension) = file.parts()?;
        Some(format!(
            "{CDN_BASE}/files/{}/{}/{id}.{extension}",
            self.project_id, self.dataset
        ))
    }
}

/// A pending image URL with its transformation options.
#[derive(Debug, Clone, Copy)]
pub struct ImageUrl<'a> {
    builder: &'a ImageUrlBuilder,
    image: &'a ImageRef,
    width: u32,
    height: Option<u32>,
    quality: u8,
    blur: Option<u8>,
}

impl ImageUrl<'_> {
    #[must_use]
    pub const fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Fixing the height crops the image to the requested box.
    #[must_use]
    pub const fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    #[must_use]
    pub const fn quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    #[must_use]
    pub const fn blur(mut self, blur: u8) -> Self {
        self.blur = Some(blur);
        self
    }

    /// Render the final URL.
    ///
    /// Plain-URL images are returned as-is. Malformed asset references
    /// yield an empty string, which templates treat as "no image".
    #[must_use]
    pub fn url(self) -> String {
        let Some(asset) = self.image.asset() else {
            return match self.image {
                ImageRef::Url(url) => url.clone(),
                ImageRef::Asset { reference, .. } => {
                    tracing::warn!(reference = %reference, "Unresolvable image reference");
                    String::new()
                }
            };
        };

        let mut url = format!(
            "{CDN_BASE}/images/{}/{}/{}-{}x{}.{}?w={}",
            self.builder.project_id,
            self.builder.dataset,
            asset.id,
            asset.width,
            asset.height,
            asset.format,
            self.width
        );
        if let Some(height) = self.height {
            url.push_str(&format!("&h={height}&fit=crop"));
        }
        if let Some(blur) = self.blur {
            url.push_str(&format!("&blur={blur}"));
        }
        url.push_str(&format!("&q={}", self.quality));
        url
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn builder() -> ImageUrlBuilder {
        ImageUrlBuilder::new("7x4tky5p", "production")
    }

    fn asset(reference: &str) -> ImageRef {
        ImageRef::Asset {
            reference: reference.to_string(),
            alt: None,
        }
    }

    #[test]
    fn test_default_width_and_quality() {
        let image = asset("image-a1b2c3-1200x1600-jpg");
        assert_eq!(
            builder().image(&image).url(),
            "https://cdn.sanity.io/images/7x4tky5p/production/a1b2c3-1200x1600.jpg?w=800&q=90"
        );
    }

    #[test]
    fn test_height_crops() {
        let image = asset("image-a1b2c3-1200x1600-webp");
        let url = builder().image(&image).width(600).height(800).quality(80).url();
        assert_eq!(
            url,
            "https://cdn.sanity.io/images/7x4tky5p/production/a1b2c3-1200x1600.webp?w=600&h=800&fit=crop&q=80"
        );
    }

    #[test]
    fn test_blur_placeholder() {
        let image = asset("image-a1b2c3-1200x1600-jpg");
        let url = builder().blur_placeholder_url(&image);
        assert!(url.contains("?w=20&blur=10&q=90"), "{url}");
    }

    #[test]
    fn test_plain_url_passthrough() {
        let image = ImageRef::url("/static/images/hero-poster.jpg");
        assert_eq!(builder().image(&image).width(1920).url(), "/static/images/hero-poster.jpg");
    }

    #[test]
    fn test_malformed_reference_is_empty() {
        assert_eq!(builder().image(&asset("image-broken")).url(), "");
    }

    #[test]
    fn test_file_url() {
        let file = FileRef {
            reference: "file-9f8e7d-mp4".to_string(),
        };
        assert_eq!(
            builder().file_url(&file).unwrap(),
            "https://cdn.sanity.io/files/7x4tky5p/production/9f8e7d.mp4"
        );
        let broken = FileRef {
            reference: "nope".to_string(),
        };
        assert!(builder().file_url(&broken).is_none());
    }
}
