pub mod listing_query;
