//! Instagram feed tiles.

use serde::{Deserialize, Serialize};

use super::{ImageRef, Ordered};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstagramPost {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
}

const fn active_by_default() -> bool {
    true
}

impl Ordered for InstagramPost {
    fn order(&self) -> Option<i64> {
        self.order
    }
}
