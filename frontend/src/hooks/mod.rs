pub mod use_debounced;
pub mod use_restaurants;
