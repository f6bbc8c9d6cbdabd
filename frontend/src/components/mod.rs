pub mod header;
pub mod error_boundary;
pub mod listing_components;
