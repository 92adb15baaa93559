//! Image and file references.
//!
//! Sanity references uploaded assets by an opaque id of the form
//! `image-<hash>-<width>x<height>-<format>` or `file-<hash>-<extension>`.
//! Resolving them into URLs needs project configuration and lives in the
//! storefront crate; this module only parses the references.

use serde::{Deserialize, Deserializer, Serialize};

/// Parsed components of an image asset reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    pub id: String,
    pub width: u32,
    pub height: u32,
    pub format: String,
}

/// An image as delivered by the CMS.
///
/// Either an uploaded asset reference or a plain URL/path (seeded and
/// fallback content uses static paths such as `/images/about/hero.jpg`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ImageRef {
    Asset {
        reference: String,
        alt: Option<String>,
    },
    Url(String),
}

impl ImageRef {
    /// Reference to a static asset path.
    #[must_use]
    pub fn url(path: impl Into<String>) -> Self {
        Self::Url(path.into())
    }

    /// Alternative text stored with the image, if any.
    #[must_use]
    pub fn alt(&self) -> Option<&str> {
        match self {
            Self::Asset { alt, .. } => alt.as_deref(),
            Self::Url(_) => None,
        }
    }

    /// Parse the asset reference into id, dimensions and format.
    ///
    /// Returns `None` for plain URLs and malformed references.
    #[must_use]
    pub fn asset(&self) -> Option<ImageAsset> {
        let Self::Asset { reference, .. } = self else {
            return None;
        };

        let rest = reference.strip_prefix("image-")?;
        let (rest, format) = rest.rsplit_once('-')?;
        let (id, dimensions) = rest.rsplit_once('-')?;
        let (width, height) = dimensions.split_once('x')?;

        if id.is_empty() || format.is_empty() {
            return None;
        }

        Some(ImageAsset {
            id: id.to_owned(),
            width: width.parse().ok()?,
            height: height.parse().ok()?,
            format: format.to_owned(),
        })
    }
}

#[derive(Deserialize)]
struct AssetPointer {
    #[serde(rename = "_ref")]
    reference: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ImageRepr {
    Url(String),
    Asset {
        asset: AssetPointer,
        #[serde(default)]
        alt: Option<String>,
    },
}

impl<'de> Deserialize<'de> for ImageRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match ImageRepr::deserialize(deserializer)? {
            ImageRepr::Url(url) => Self::Url(url),
            ImageRepr::Asset { asset, alt } => Self::Asset {
                reference: asset.reference,
                alt,
            },
        })
    }
}

/// A non-image file (e.g. the hero background video).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRef {
    pub reference: String,
}

impl FileRef {
    /// Split the reference into asset id and file extension.
    ///
    /// `file-abc123-mp4` yields `("abc123", "mp4")`. Malformed references
    /// yield `None`.
    #[must_use]
    pub fn parts(&self) -> Option<(&str, &str)> {
        let rest = self.reference.strip_prefix("file-")?;
        let (id, extension) = rest.split_once('-')?;
        if id.is_empty() || extension.is_empty() {
            return None;
        }
        Some((id, extension))
    }
}

#[derive(Deserialize)]
struct FileRepr {
    asset: AssetPointer,
}

impl<'de> Deserialize<'de> for FileRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = FileRepr::deserialize(deserializer)?;
        Ok(Self {
            reference: repr.asset.reference,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_image_asset_reference() {
        let image: ImageRef = serde_json::from_str(
            r#"{"_type":"image","asset":{"_ref":"image-a1b2c3-1200x1600-jpg","_type":"reference"},"alt":"Saree"}"#,
        )
        .unwrap();

        let asset = image.asset().unwrap();
        assert_eq!(asset.id, "a1b2c3");
        assert_eq!((asset.width, asset.height), (1200, 1600));
        assert_eq!(asset.format, "jpg");
        assert_eq!(image.alt(), Some("Saree"));
    }

    #[test]
    fn test_image_plain_url() {
        let image: ImageRef = serde_json::from_str("\"/images/products/product-1.jpg\"").unwrap();
        assert_eq!(image, ImageRef::url("/images/products/product-1.jpg"));
        assert!(image.asset().is_none());
    }

    #[test]
    fn test_image_malformed_reference() {
        let image = ImageRef::Asset {
            reference: "image-nodimensions".to_string(),
            alt: None,
        };
        assert!(image.asset().is_none());
    }

    #[test]
    fn test_file_parts() {
        let file: FileRef =
            serde_json::from_str(r#"{"asset":{"_ref":"file-9f8e7d-mp4"}}"#).unwrap();
        assert_eq!(file.parts(), Some(("9f8e7d", "mp4")));

        let broken = FileRef {
            reference: "video.mp4".to_string(),
        };
        assert_eq!(broken.parts(), None);
    }
}
