//! Candidate queue with rotation semantics
//!
//! The front of the queue is the subject of the current round. After each
//! round the front is either cycled to the back (it had at least one
//! supporter) or dropped for good (nobody wanted it). Repeating this lets
//! the group converge without an explicit ranking pass.

use super::candidate::Candidate;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Ordered, mutable working set of not-yet-eliminated candidates
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateQueue {
    candidates: VecDeque<Candidate>,
}

impl CandidateQueue {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self {
            candidates: candidates.into(),
        }
    }

    /// The current round's subject
    pub fn front(&self) -> Result<&Candidate, DomainError> {
        self.candidates.front().ok_or(DomainError::QueueExhausted)
    }

    /// Remove the front candidate, re-appending it to the back when it
    /// had positive votes. Rotating an empty queue is a no-op.
    pub fn rotate(&mut self, had_positive_votes: bool) {
        if let Some(front) = self.candidates.pop_front()
            && had_positive_votes
        {
            self.candidates.push_back(front);
        }
    }

    /// Number of remaining candidates
    pub fn size(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter()
    }
}
