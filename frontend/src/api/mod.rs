pub mod restaurant_api;
