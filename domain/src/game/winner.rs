//! Game results

use crate::restaurant::Candidate;
use serde::{Deserialize, Serialize};

/// Display name used when the group could not agree on anything
pub const NO_CONSENSUS_NAME: &str = "No consensus — everyone passed on everything";

/// The final result of a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Winner {
    /// The group settled on a restaurant
    Restaurant { restaurant: Candidate },
    /// Attrition left nothing the group could agree on
    NoConsensus,
}

impl Winner {
    pub fn restaurant(candidate: Candidate) -> Self {
        Winner::Restaurant {
            restaurant: candidate,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Winner::Restaurant { restaurant } => &restaurant.name,
            Winner::NoConsensus => NO_CONSENSUS_NAME,
        }
    }

}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
