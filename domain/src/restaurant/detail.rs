//! Full restaurant detail, as broadcast to players each round

use super::candidate::{Candidate, CandidateId};
use serde::{Deserialize, Serialize};

/// Everything a player sees when a restaurant comes up for a vote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantDetail {
    pub id: CandidateId,
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
    /// Category titles, e.g. "Pizza", "Italian"
    #[serde(default)]
    pub categories: Vec<String>,
    /// Display address, one line per entry
    #[serde(default)]
    pub address: Vec<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub is_closed: bool,
}

impl RestaurantDetail {
    /// Minimal detail carrying only identity
    pub fn new(id: impl Into<CandidateId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image_url: None,
            url: None,
            phone: None,
            display_phone: None,
            rating: None,
            review_count: None,
            price: None,
            categories: Vec::new(),
            address: Vec::new(),
            photos: Vec::new(),
            is_closed: false,
        }
    }
}

impl From<&Candidate> for RestaurantDetail {
    /// Detail built from a search listing alone
    fn from(candidate: &Candidate) -> Self {
        Self {
            image_url: candidate.image_url.clone(),
            url: candidate.url.clone(),
            rating: candidate.rating,
            review_count: candidate.review_count,
            price: candidate.price.clone(),
            ..Self::new(candidate.id.clone(), candidate.name.clone())
        }
    }
}

/// A single user review of a restaurant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub rating: Option<f64>,
    pub text: String,
    #[serde(default)]
    pub time_created: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}
