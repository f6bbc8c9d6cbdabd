//! Shared restaurant filter models.

use serde::{Deserialize, Serialize};


/// The canonical set of active filter and sort criteria for the restaurant
/// directory. The address bar is the source of truth: a `RestaurantFilters`
/// is decoded fresh from the URL query on every render, never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct RestaurantFilters {
    pub search: String,
    pub cuisine: Vec<String>,
    pub price_range: Vec<String>,
    pub location: Vec<String>,
    /// Minimum rating threshold, 0 meaning "no threshold".
    pub rating: f64,
    pub is_veg: bool,
    pub delivery_time: String,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl RestaurantFilters {
    /// Number of filter dimensions currently active, for the sidebar badge.
    pub fn active_count(&self) -> usize {
        self.cuisine.len()
            + self.price_range.len()
            + self.location.len()
            + usize::from(self.is_veg)
            + usize::from(self.rating > 0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    #[default]
    Rating,
    DeliveryTime,
    DeliveryFee,
    Name,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rating => "rating",
            Self::DeliveryTime => "deliveryTime",
            Self::DeliveryFee => "deliveryFee",
            Self::Name => "name",
        }
    }

    /// Unknown values fall back to the default instead of failing.
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "deliveryTime" => Self::DeliveryTime,
            "deliveryFee" => Self::DeliveryFee,
            "name" => Self::Name,
            _ => Self::Rating,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "asc" => Self::Asc,
            _ => Self::Desc,
        }
    }
}
