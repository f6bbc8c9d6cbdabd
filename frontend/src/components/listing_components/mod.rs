pub mod search_bar;
pub mod filter_sidebar;
pub mod sort_options;
pub mod restaurant_grid;
pub mod restaurant_card;
pub mod pagination_controls;
