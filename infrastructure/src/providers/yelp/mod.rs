//! Yelp Fusion restaurant provider
//!
//! Candidate search, business detail, autocomplete and reviews over the
//! Yelp Fusion REST API.

mod adapter;
mod types;

pub use adapter::{API_KEY_ENV, DEFAULT_BASE_URL, YelpConfig, YelpRestaurantProvider};
