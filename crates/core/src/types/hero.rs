//! Home page hero singleton.

use serde::{Deserialize, Serialize};

use super::{FileRef, ImageRef};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroSection {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    pub background_video: Option<FileRef>,
    pub background_image: Option<ImageRef>,
    pub poster_image: Option<ImageRef>,
}
