//! Restaurant provider adapters

pub mod yelp;

pub use yelp::{YelpConfig, YelpRestaurantProvider};
