use derive_more::Display;
use serde::{Deserialize, Serialize};

pub mod category;
pub mod listing;
pub mod product;

#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Default,
)]
#[repr(u8)]
pub enum ProductStatus {
    #[default]
    #[display("disabled")]
    Disabled = 0,
    #[display("enabled")]
    Enabled = 1,
    #[display("discontinued")]
    Discontinued = 2,
    #[display("coming soon")]
    ComingSoon = 3,
}

impl From<u8> for ProductStatus {
    fn from(s: u8) -> Self {
        match s {
            1 => Self::Enabled,
            2 => Self::Discontinued,
            3 => Self::ComingSoon,
            _ => Self::Disabled,
        }
    }
}

impl From<ProductStatus> for u8 {
    fn from(s: ProductStatus) -> Self {
        s as u8
    }
}

/// Status shared by categories and collections.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[repr(u8)]
pub enum CategoryStatus {
    #[display("disabled")]
    Disabled = 0,
    #[display("enabled")]
    Enabled = 1,
    #[display("discontinued")]
    Discontinued = 2,
}

impl From<u8> for CategoryStatus {
    fn from(s: u8) -> Self {
        match s {
            1 => Self::Enabled,
            2 => Self::Discontinued,
            _ => Self::Disabled,
        }
    }
}

impl From<CategoryStatus> for u8 {
    fn from(s: CategoryStatus) -> Self {
        s as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_round_trip_through_u8() {
        assert_eq!(ProductStatus::from(1), ProductStatus::Enabled);
        assert_eq!(ProductStatus::from(3), ProductStatus::ComingSoon);
        assert_eq!(ProductStatus::from(42), ProductStatus::Disabled);
        assert_eq!(u8::from(ProductStatus::Discontinued), 2);
        assert_eq!(CategoryStatus::from(1), CategoryStatus::Enabled);
        assert_eq!(CategoryStatus::from(7), CategoryStatus::Disabled);
        assert_eq!(u8::from(CategoryStatus::Enabled), 1);
    }
}
