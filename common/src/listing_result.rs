//! Wire models for listing responses, plus pagination display math.

use serde::{Deserialize, Serialize};


/// Envelope returned by the listing backend. `pagination` and `filters` are
/// optional payloads; a response without them is still valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(default)]
    pub pagination: Option<PaginationInfo>,
    #[serde(default)]
    pub filters: Option<FilterOptions>,
}

/// One restaurant record as returned by the backend. Displayed and linked
/// from, never mutated client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub image: String,
    pub description: String,
    pub rating: f64,
    pub delivery_time: String,
    pub delivery_fee: f64,
    pub min_order: f64,
    pub cuisine: Vec<String>,
    pub is_veg: bool,
    pub is_open: bool,
    pub location: String,
    pub price_range: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Facet vocabulary supplied by the backend. These lists are the only legal
/// values for the set-valued filters; the client never invents entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterOptions {
    pub cuisines: Vec<String>,
    pub price_ranges: Vec<String>,
    pub categories: Vec<String>,
    pub locations: Vec<String>,
}

/// Server-computed pagination state. Only display math (item ranges, page
/// button layout) is derived client-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct PaginationInfo {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    Page(u64),
    Ellipsis,
}

impl PaginationInfo {
    /// 1-based item range shown by the current page, for the
    /// "Showing X to Y of Z results" label.
    pub fn item_range(&self) -> (u64, u64) {
        let start = (self.page.max(1) - 1) * self.limit + 1;
        let end = (self.page * self.limit).min(self.total);
        (start, end)
    }

    /// Page buttons to render: first and last page always, the current page
    /// with two neighbours on each side, and ellipsis markers for the gaps.
    pub fn visible_pages(&self) -> Vec<PageControl> {
        let total_pages = self.total_pages;
        if total_pages == 0 {
            return Vec::new();
        }
        if total_pages == 1 {
            return vec![PageControl::Page(1)];
        }

        let delta: i64 = 2;
        let page = self.page as i64;
        let last = total_pages as i64;

        let mut controls = Vec::new();
        if page - delta > 2 {
            controls.push(PageControl::Page(1));
            controls.push(PageControl::Ellipsis);
        } else {
            controls.push(PageControl::Page(1));
        }

        let from = (page - delta).max(2);
        let to = (page + delta).min(last - 1);
        for i in from..=to {
            controls.push(PageControl::Page(i as u64));
        }

        if page + delta < last - 1 {
            controls.push(PageControl::Ellipsis);
            controls.push(PageControl::Page(total_pages));
        } else {
            controls.push(PageControl::Page(total_pages));
        }

        controls
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn info(page: u64, limit: u64, total: u64, total_pages: u64) -> PaginationInfo {
        PaginationInfo { page, limit, total, total_pages }
    }

    #[test]
    fn item_range_first_page() {
        assert_eq!(info(1, 12, 37, 4).item_range(), (1, 12));
    }

    #[test]
    fn item_range_last_partial_page() {
        assert_eq!(info(4, 12, 37, 4).item_range(), (37, 37));
    }

    #[test]
    fn four_pages_render_four_controls() {
        let controls = info(1, 12, 37, 4).visible_pages();
        assert_eq!(
            controls,
            vec![
                PageControl::Page(1),
                PageControl::Page(2),
                PageControl::Page(3),
                PageControl::Page(4),
            ]
        );
    }

    #[test]
    fn distant_pages_collapse_to_ellipsis() {
        let controls = info(5, 12, 120, 10).visible_pages();
        assert_eq!(
            controls,
            vec![
                PageControl::Page(1),
                PageControl::Ellipsis,
                PageControl::Page(3),
                PageControl::Page(4),
                PageControl::Page(5),
                PageControl::Page(6),
                PageControl::Page(7),
                PageControl::Ellipsis,
                PageControl::Page(10),
            ]
        );
    }

    #[test]
    fn single_page_is_a_lone_control() {
        assert_eq!(info(1, 12, 5, 1).visible_pages(), vec![PageControl::Page(1)]);
    }

    #[test]
    fn empty_result_has_no_controls() {
        assert!(info(1, 12, 0, 0).visible_pages().is_empty());
    }

    #[test]
    fn response_without_optional_payloads_decodes() {
        let raw = r#"{"data": []}"#;
        let response: ApiResponse<Vec<Restaurant>> = serde_json::from_str(raw).unwrap();
        assert!(response.data.is_empty());
        assert!(response.pagination.is_none());
        assert!(response.filters.is_none());
    }

    #[test]
    fn listing_response_decodes_camel_case_fields() {
        let raw = r#"{
            "data": [{
                "id": "r1",
                "name": "Pizza Palace",
                "rating": 4.5,
                "deliveryTime": "25-35 min",
                "deliveryFee": 2.99,
                "cuisine": ["Italian"],
                "isVeg": false,
                "isOpen": true,
                "location": "Downtown",
                "priceRange": "mid-range"
            }],
            "pagination": {"page": 1, "limit": 12, "total": 37, "totalPages": 4}
        }"#;
        let response: ApiResponse<Vec<Restaurant>> = serde_json::from_str(raw).unwrap();
        assert_eq!(response.data[0].delivery_time, "25-35 min");
        assert_eq!(response.pagination.unwrap().total_pages, 4);
    }
}
