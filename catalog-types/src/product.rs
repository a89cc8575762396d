use crate::{CategoryStatus, ProductStatus};
use derive_more::Display;
use itertools::Itertools;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use typesafe_repository::macros::Id;
use typesafe_repository::{GetIdentity, Identity, IdentityOf, RefIdentity};

pub type ProductId = IdentityOf<IndexedProductRecord>;
pub type CategoryId = u64;

/// One matched product as returned by the search index.
///
/// Every field is a precomputed stored value, so nothing here needs a trip
/// back to the catalog. Array fields are either all empty or all populated.
#[derive(Debug, Clone, Default, Id)]
#[Id(ref_id, get_id)]
pub struct IndexedProductRecord {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub url: String,
    pub price: Decimal,
    pub mrp: Decimal,
    pub category_rank: Option<i64>,
    pub recommended_rank: Option<i64>,
    pub status: ProductStatus,
    pub launched_at: Option<OffsetDateTime>,
    pub color_id: Option<u64>,
    pub color_name: Option<String>,
    pub sizes: Vec<SizeStock>,
    pub images: Vec<StoredImage>,
    pub child_category_ids: Vec<CategoryId>,
    pub child_category_names: Vec<String>,
    pub child_category_urls: Vec<String>,
    pub child_category_statuses: Vec<CategoryStatus>,
    pub parent_category_ids: Vec<CategoryId>,
    pub parent_category: Option<String>,
    pub parent_category_url: Option<String>,
    pub parent_category_status: Option<CategoryStatus>,
    pub filters: Vec<FilterPair>,
    pub collection_urls: Vec<String>,
    pub collection_statuses: Vec<CategoryStatus>,
    pub product_description: Option<String>,
    pub fabric_detail: Option<String>,
    pub model_description: Option<String>,
    pub fit_description: Option<String>,
    pub delivery_and_return_policy: Option<String>,
    pub tabular_description: Option<String>,
}

/// Child category treated as canonical for display purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryCategory<'a> {
    pub id: Option<CategoryId>,
    pub name: Option<&'a str>,
    pub url: Option<&'a str>,
}

impl IndexedProductRecord {
    /// Primary category is the first element of the ordered child-category list.
    pub fn primary_child_category(&self) -> PrimaryCategory<'_> {
        PrimaryCategory {
            id: self.child_category_ids.first().copied(),
            name: self.child_category_names.first().map(String::as_str),
            url: self.child_category_urls.first().map(String::as_str),
        }
    }

    pub fn primary_parent_category_id(&self) -> Option<CategoryId> {
        self.parent_category_ids.first().copied()
    }

    /// Parent ids followed by child ids, without repeats.
    pub fn category_ids(&self) -> Vec<CategoryId> {
        self.parent_category_ids
            .iter()
            .chain(self.child_category_ids.iter())
            .copied()
            .unique()
            .collect()
    }

    pub fn in_stock(&self) -> bool {
        self.sizes.iter().any(SizeStock::is_available)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SizeStock {
    pub size_id: u64,
    pub size_name: String,
    pub quantity_available: i64,
}

impl SizeStock {
    pub fn is_available(&self) -> bool {
        self.quantity_available > 0
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Display)]
#[serde(rename_all = "lowercase")]
pub enum ImageSubtype {
    #[display("flip")]
    Flip,
    #[display("display")]
    Display,
    #[display("original")]
    Original,
    #[display("additional")]
    Additional,
    #[display("{_0}")]
    #[serde(untagged)]
    Other(String),
}

impl From<&str> for ImageSubtype {
    fn from(s: &str) -> Self {
        match s.trim() {
            "flip" => Self::Flip,
            "display" => Self::Display,
            "original" => Self::Original,
            "additional" => Self::Additional,
            other => Self::Other(other.to_string()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    pub name: String,
    pub priority: i32,
    pub subtype: ImageSubtype,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FilterPair {
    pub name: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record(id: u64) -> IndexedProductRecord {
        IndexedProductRecord {
            id,
            price: dec!(499),
            ..Default::default()
        }
    }

    #[test]
    fn product_id_comes_from_record_id() {
        let p = record(5);
        let id: ProductId = p.id();
        assert_eq!(id, 5);
        assert_eq!(p.id_ref(), &5);
    }

    #[test]
    fn category_ids_are_parent_first_and_unique() {
        let mut p = record(1);
        p.parent_category_ids = vec![10];
        p.child_category_ids = vec![11, 10, 12];
        assert_eq!(p.category_ids(), vec![10, 11, 12]);
        assert_eq!(p.primary_parent_category_id(), Some(10));
    }

    #[test]
    fn primary_child_category_is_first_entry() {
        let mut p = record(1);
        p.child_category_ids = vec![5, 6];
        p.child_category_names = vec!["T-Shirts".to_string(), "Hoodies".to_string()];
        p.child_category_urls = vec!["t-shirts".to_string(), "hoodies".to_string()];
        let primary = p.primary_child_category();
        assert_eq!(primary.id, Some(5));
        assert_eq!(primary.name, Some("T-Shirts"));
        assert_eq!(primary.url, Some("t-shirts"));
        assert_eq!(record(2).primary_child_category().id, None);
    }

    #[test]
    fn in_stock_needs_positive_quantity() {
        let mut p = record(1);
        assert!(!p.in_stock());
        p.sizes = vec![SizeStock {
            size_id: 1,
            size_name: "M".to_string(),
            quantity_available: 0,
        }];
        assert!(!p.in_stock());
        p.sizes[0].quantity_available = 3;
        assert!(p.in_stock());
    }

    #[test]
    fn image_subtype_parses_known_and_unknown_values() {
        assert_eq!(ImageSubtype::from("flip"), ImageSubtype::Flip);
        assert_eq!(ImageSubtype::from(" additional "), ImageSubtype::Additional);
        assert_eq!(
            ImageSubtype::from("thumb"),
            ImageSubtype::Other("thumb".to_string())
        );
    }
}
