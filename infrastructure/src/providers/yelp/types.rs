//! Yelp Fusion wire types and conversions to domain types
//!
//! Only the fields the game uses are modeled; everything else in the
//! responses is ignored.

use munch_domain::{Candidate, RestaurantDetail, Review};
use serde::Deserialize;

// ─── Wire types ──────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub businesses: Vec<Business>,
}

#[derive(Debug, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub display_address: Vec<String>,
}

/// A business as returned by both `/businesses/search` and `/businesses/{id}`
#[derive(Debug, Deserialize)]
pub struct Business {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub display_phone: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: Option<u32>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub is_closed: bool,
}

#[derive(Debug, Deserialize)]
pub struct AutocompleteTerm {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct AutocompleteResponse {
    #[serde(default)]
    pub terms: Vec<AutocompleteTerm>,
}

#[derive(Debug, Deserialize)]
pub struct ReviewUser {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct YelpReview {
    pub id: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub time_created: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub user: Option<ReviewUser>,
}

#[derive(Debug, Deserialize)]
pub struct ReviewsResponse {
    #[serde(default)]
    pub reviews: Vec<YelpReview>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub description: String,
}

// ─── Yelp → Domain ───────────────────────────────────────────────

/// Convert a search listing to a candidate
pub fn to_candidate(business: Business) -> Candidate {
    Candidate {
        image_url: business.image_url,
        url: business.url,
        rating: business.rating,
        review_count: business.review_count,
        price: business.price,
        distance: business.distance,
        ..Candidate::new(business.id, business.name)
    }
}

/// Convert a full business lookup to restaurant detail
pub fn to_detail(business: Business) -> RestaurantDetail {
    RestaurantDetail {
        image_url: business.image_url,
        url: business.url,
        phone: business.phone,
        display_phone: business.display_phone,
        rating: business.rating,
        review_count: business.review_count,
        price: business.price,
        categories: business.categories.into_iter().map(|c| c.title).collect(),
        address: business.location.display_address,
        photos: business.photos,
        is_closed: business.is_closed,
        ..RestaurantDetail::new(business.id, business.name)
    }
}

pub fn to_review(review: YelpReview) -> Review {
    Review {
        id: review.id,
        rating: review.rating,
        text: review.text,
        time_created: review.time_created,
        user_name: review.user.and_then(|u| u.name),
        url: review.url,
    }
}
