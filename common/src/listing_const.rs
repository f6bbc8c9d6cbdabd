//! Shared constants for the restaurant listing view.

/// Number of restaurants requested per listing page.
pub const PAGE_SIZE: u64 = 12;

/// Quiet interval before a free-text search value is propagated.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Hard timeout for a single listing or facet request.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Same budget in milliseconds, for timer APIs that take millis.
pub const REQUEST_TIMEOUT_MS: u32 = (REQUEST_TIMEOUT_SECS as u32) * 1000;


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_constants_agree() {
        assert_eq!(REQUEST_TIMEOUT_MS as u64, REQUEST_TIMEOUT_SECS * 1000);
        assert_eq!(REQUEST_TIMEOUT_MS, 10_000);
    }
}
