use crate::product::{CategoryId, ProductId};
use derive_builder::Builder;
use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[serde(rename_all = "lowercase")]
pub enum ListingMode {
    #[display("category")]
    Category,
    #[display("wishlist")]
    Wishlist,
    #[display("collection")]
    Collection,
}

impl ListingMode {
    pub fn parse<S: AsRef<str>>(s: S) -> Option<Self> {
        match s.as_ref().trim().to_lowercase().as_str() {
            "category" => Some(Self::Category),
            "wishlist" => Some(Self::Wishlist),
            "collection" => Some(Self::Collection),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
#[serde(rename_all = "snake_case")]
pub enum Device {
    #[default]
    #[display("mobile_site")]
    MobileSite,
    #[display("desktop")]
    Desktop,
    #[display("android")]
    Android,
}

impl Device {
    pub fn is_desktop(&self) -> bool {
        matches!(self, Self::Desktop)
    }
}

impl From<&str> for Device {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "desktop" => Self::Desktop,
            "android" => Self::Android,
            _ => Self::MobileSite,
        }
    }
}

/// What the listing is restricted to. The variant must agree with the
/// context's [`ListingMode`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SearchData {
    CategoryUrls(Vec<String>),
    ProductIds(Vec<ProductId>),
    CollectionUrls(Vec<String>),
}

impl SearchData {
    pub fn mode(&self) -> ListingMode {
        match self {
            Self::CategoryUrls(_) => ListingMode::Category,
            Self::ProductIds(_) => ListingMode::Wishlist,
            Self::CollectionUrls(_) => ListingMode::Collection,
        }
    }

    pub fn for_mode(mode: ListingMode, values: Vec<String>) -> Result<Self, anyhow::Error> {
        Ok(match mode {
            ListingMode::Category => Self::CategoryUrls(values),
            ListingMode::Collection => Self::CollectionUrls(values),
            ListingMode::Wishlist => Self::ProductIds(
                values
                    .iter()
                    .map(|v| {
                        v.trim()
                            .parse()
                            .map_err(|err| anyhow::anyhow!("Invalid product id {v}: {err}"))
                    })
                    .collect::<Result<_, _>>()?,
            ),
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct ListingContext {
    pub mode: ListingMode,
    #[builder(default)]
    pub search_terms: Option<String>,
    #[builder(default)]
    pub parent_category_id: Option<CategoryId>,
    #[builder(default)]
    pub is_display: bool,
    #[builder(default)]
    pub requesting_user_email: Option<String>,
    #[builder(default)]
    pub device: Device,
}

impl ListingContext {
    pub fn new(mode: ListingMode) -> Self {
        Self {
            mode,
            search_terms: None,
            parent_category_id: None,
            is_display: false,
            requesting_user_email: None,
            device: Device::default(),
        }
    }
}
