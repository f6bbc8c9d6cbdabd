//! Common library exports shared across the workspace.

extern crate serde;


pub mod listing_query;
pub mod listing_result;
pub mod filter_query;
pub mod debounce;
pub mod request_seq;
pub mod listing_const;
