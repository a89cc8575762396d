use crate::product::CategoryId;
use serde::{Deserialize, Serialize};
use typesafe_repository::macros::Id;
use typesafe_repository::{GetIdentity, Identity, RefIdentity};

/// Category or landing page the listing is rendered for.
#[derive(Id, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[Id(ref_id, get_id)]
pub struct CategoryObject {
    pub id: CategoryId,
    #[serde(default)]
    pub parent_id: Option<CategoryId>,
    pub name: String,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub meta_keywords: Option<String>,
    #[serde(default)]
    pub canonical_url: Option<String>,
    /// Serialized text block, e.g. `{"text": "..."}`.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<CategoryImage>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CategoryImage {
    pub file_name: String,
    #[serde(default)]
    pub placement: ImagePlacement,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ImagePlacement {
    Desktop,
    MobileSite,
    #[default]
    Other,
}

impl CategoryObject {
    pub fn first_image(&self) -> Option<&CategoryImage> {
        self.images.first()
    }

    pub fn first_image_for(&self, placement: ImagePlacement) -> Option<&CategoryImage> {
        self.images.iter().find(|i| i.placement == placement)
    }
}
