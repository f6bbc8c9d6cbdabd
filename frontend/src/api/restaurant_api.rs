//! Client API calls for the restaurant listing backend.

use anyhow::Context;

use common::listing_query::RestaurantFilters;
use common::listing_result::{ApiResponse, FilterOptions, Restaurant};

/// Compile-time override for the backend address, with a local default.
pub fn api_base_url() -> &'static str {
    option_env!("FOODIEHUB_API_URL").unwrap_or("http://localhost:5000/api")
}

fn client() -> anyhow::Result<reqwest::Client> {
    let builder = reqwest::Client::builder();
    // The browser's fetch has no client-side timeout knob; native targets
    // get the fixed 10s budget here, wasm gets it in send_request.
    #[cfg(not(target_arch = "wasm32"))]
    let builder = builder.timeout(std::time::Duration::from_secs(
        common::listing_const::REQUEST_TIMEOUT_SECS,
    ));
    builder.build().context("failed to build http client")
}

#[cfg(target_arch = "wasm32")]
async fn send_request(request: reqwest::RequestBuilder) -> anyhow::Result<reqwest::Response> {
    use futures_util::future::{Either, select};

    // fetch itself never times out in the browser, so race it against a
    // timer carrying the same budget as the native client
    let send = std::pin::pin!(request.send());
    let timeout = std::pin::pin!(gloo_timers::future::TimeoutFuture::new(
        common::listing_const::REQUEST_TIMEOUT_MS,
    ));
    match select(send, timeout).await {
        Either::Left((result, _)) => {
            result.context("failed to reach the restaurant listing service")
        }
        Either::Right(_) => Err(anyhow::anyhow!(
            "request timed out after {} seconds",
            common::listing_const::REQUEST_TIMEOUT_SECS
        )),
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn send_request(request: reqwest::RequestBuilder) -> anyhow::Result<reqwest::Response> {
    request
        .send()
        .await
        .context("failed to reach the restaurant listing service")
}

/// One parameter value for the flat request encoder.
pub enum QueryValue {
    Scalar(String),
    Many(Vec<String>),
}

/// Generic flat encoder for outgoing request parameters: scalars become one
/// `key=value` pair, lists repeat their key once per element, and empty
/// values are omitted entirely. This is a wider encoding than the address
/// codec: it keeps defaults like `isVeg=false` and also carries
/// `page`/`limit`, which never appear in the address form.
pub fn build_query_string<'a>(params: impl IntoIterator<Item = (&'a str, QueryValue)>) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        match value {
            QueryValue::Scalar(value) => {
                if !value.is_empty() {
                    query.append_pair(key, &value);
                }
            }
            QueryValue::Many(values) => {
                for value in values {
                    if !value.is_empty() {
                        query.append_pair(key, &value);
                    }
                }
            }
        }
    }
    query.finish()
}

fn listing_params(filters: &RestaurantFilters, page: u64, limit: u64) -> Vec<(&'static str, QueryValue)> {
    vec![
        ("search", QueryValue::Scalar(filters.search.clone())),
        ("cuisine", QueryValue::Many(filters.cuisine.clone())),
        ("priceRange", QueryValue::Many(filters.price_range.clone())),
        ("location", QueryValue::Many(filters.location.clone())),
        ("rating", QueryValue::Scalar(filters.rating.to_string())),
        ("isVeg", QueryValue::Scalar(filters.is_veg.to_string())),
        ("deliveryTime", QueryValue::Scalar(filters.delivery_time.clone())),
        ("sortBy", QueryValue::Scalar(filters.sort_by.as_str().to_string())),
        ("sortOrder", QueryValue::Scalar(filters.sort_order.as_str().to_string())),
        ("page", QueryValue::Scalar(page.to_string())),
        ("limit", QueryValue::Scalar(limit.to_string())),
    ]
}

/// Fetch one page of the filtered, sorted restaurant listing.
pub async fn get_restaurants(
    filters: &RestaurantFilters,
    page: u64,
    limit: u64,
) -> anyhow::Result<ApiResponse<Vec<Restaurant>>> {
    let query = build_query_string(listing_params(filters, page, limit));
    let url = format!("{}/restaurants?{}", api_base_url(), query);

    let response = send_request(client()?.get(&url)).await?;
    let response = response
        .error_for_status()
        .context("restaurant listing request was rejected")?;
    let body = response
        .json::<ApiResponse<Vec<Restaurant>>>()
        .await
        .context("failed to decode the restaurant listing response")?;
    Ok(body)
}

/// Fetch the facet vocabulary (cuisines, price ranges, categories,
/// locations). Called once at mount, independent of the listing fetch.
pub async fn get_restaurant_filters() -> anyhow::Result<ApiResponse<FilterOptions>> {
    let url = format!("{}/restaurants/filters", api_base_url());

    let response = send_request(client()?.get(&url)).await?;
    let response = response
        .error_for_status()
        .context("filter options request was rejected")?;
    let body = response
        .json::<ApiResponse<FilterOptions>>()
        .await
        .context("failed to decode the filter options response")?;
    Ok(body)
}


#[cfg(test)]
mod tests {
    use super::*;
    use common::listing_query::{SortBy, SortOrder};

    #[test]
    fn listing_params_carry_defaults_and_page_math() {
        let query = build_query_string(listing_params(&RestaurantFilters::default(), 1, 12));
        // Unlike the address codec, the request encoder keeps falsy scalars.
        assert!(query.contains("rating=0"));
        assert!(query.contains("isVeg=false"));
        assert!(query.contains("sortBy=rating"));
        assert!(query.contains("sortOrder=desc"));
        assert!(query.contains("page=1"));
        assert!(query.contains("limit=12"));
        // Empty strings are omitted entirely.
        assert!(!query.contains("search="));
        assert!(!query.contains("deliveryTime="));
    }

    #[test]
    fn set_valued_params_repeat_their_key() {
        let filters = RestaurantFilters {
            cuisine: vec!["Italian".to_string(), "Thai".to_string()],
            sort_by: SortBy::Name,
            sort_order: SortOrder::Asc,
            ..Default::default()
        };
        let query = build_query_string(listing_params(&filters, 2, 12));
        assert!(query.contains("cuisine=Italian&cuisine=Thai"));
        assert!(query.contains("sortBy=name"));
        assert!(query.contains("sortOrder=asc"));
        assert!(query.contains("page=2"));
    }

    #[test]
    fn empty_list_members_are_dropped() {
        let params = vec![(
            "cuisine",
            QueryValue::Many(vec!["".to_string(), "Indian".to_string()]),
        )];
        assert_eq!(build_query_string(params), "cuisine=Indian");
    }

    #[test]
    fn base_url_defaults_to_the_local_backend() {
        // holds unless FOODIEHUB_API_URL was set at compile time
        assert_eq!(api_base_url(), "http://localhost:5000/api");
    }

    #[test]
    fn values_are_percent_encoded() {
        let params = vec![("search", QueryValue::Scalar("tacos & more".to_string()))];
        assert_eq!(build_query_string(params), "search=tacos+%26+more");
    }
}
