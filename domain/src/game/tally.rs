//! Per-round vote tally
//!
//! `votes[round]` accumulates affirmative votes for the round in progress;
//! `num_votes_cast` counts every vote since play began, across all rounds.
//! `len(votes) == round + 1` always holds.

use serde::{Deserialize, Serialize};

/// Affirmative-vote counter per round plus a cumulative vote counter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    votes: Vec<u32>,
    num_votes_cast: u32,
    /// Value of `num_votes_cast` when the current round began
    round_started_at: u32,
}

impl Default for VoteTally {
    fn default() -> Self {
        Self::new()
    }
}

impl VoteTally {
    /// A fresh tally positioned at round 0
    pub fn new() -> Self {
        Self {
            votes: vec![0],
            num_votes_cast: 0,
            round_started_at: 0,
        }
    }

    /// Record one vote; only affirmative votes count toward the round
    pub fn record_vote(&mut self, affirmative: bool) {
        self.num_votes_cast += 1;
        if affirmative && let Some(current) = self.votes.last_mut() {
            *current += 1;
        }
    }

    /// Withdraw a vote cast in the round in progress
    ///
    /// Used when a player who already voted leaves before the round closes.
    pub fn retract_vote(&mut self, affirmative: bool) {
        if self.votes_this_round() == 0 {
            return;
        }
        self.num_votes_cast -= 1;
        if affirmative && let Some(current) = self.votes.last_mut() {
            *current = current.saturating_sub(1);
        }
    }

    /// Whether every player has voted on the current round
    ///
    /// With a stable player count this is the same as `num_votes_cast`
    /// being a multiple of `num_players`. Counting from the start of the
    /// round keeps the check correct when a player leaves mid-round, as
    /// long as the leaver's own vote is retracted first.
    pub fn is_round_complete(&self, num_players: u32) -> bool {
        num_players > 0 && self.votes_this_round() >= num_players
    }

    /// Close the current round and open a new one at zero
    pub fn new_round(&mut self) {
        self.votes.push(0);
        self.round_started_at = self.num_votes_cast;
    }

    /// Zero-based index of the round in progress
    pub fn round(&self) -> usize {
        self.votes.len() - 1
    }

    /// Affirmative votes for the round in progress
    pub fn current_votes(&self) -> u32 {
        self.votes.last().copied().unwrap_or(0)
    }

    /// Affirmative votes per round, oldest first
    pub fn votes(&self) -> &[u32] {
        &self.votes
    }

    pub fn num_votes_cast(&self) -> u32 {
        self.num_votes_cast
    }

    /// Votes of either kind cast in the round in progress
    pub fn votes_this_round(&self) -> u32 {
        self.num_votes_cast - self.round_started_at
    }

    /// Round index with the highest affirmative count; ties go to the
    /// earliest round
    pub fn highest_round(&self) -> usize {
        self.votes
            .iter()
            .enumerate()
            .fold((0, 0), |(best, max), (round, &count)| {
                if count > max {
                    (round, count)
                } else {
                    (best, max)
                }
            })
            .0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tally_starts_at_round_zero() {
        let tally = VoteTally::new();
        assert_eq!(tally.round(), 0);
        assert_eq!(tally.votes(), &[0]);
        assert_eq!(tally.num_votes_cast(), 0);
    }

    #[test]
    fn test_record_vote_counts_only_affirmative() {
        let mut tally = VoteTally::new();
        tally.record_vote(true);
        tally.record_vote(false);
        tally.record_vote(true);

        assert_eq!(tally.current_votes(), 2);
        assert_eq!(tally.num_votes_cast(), 3);
    }

    #[test]
    fn test_round_complete_at_player_count() {
        let mut tally = VoteTally::new();
        assert!(!tally.is_round_complete(2));

        tally.record_vote(false);
        assert!(!tally.is_round_complete(2));

        tally.record_vote(true);
        assert!(tally.is_round_complete(2));
    }

    #[test]
    fn test_round_complete_requires_players() {
        let mut tally = VoteTally::new();
        tally.record_vote(true);
        assert!(!tally.is_round_complete(0));
    }

    #[test]
    fn test_cumulative_count_matches_multiple_rule() {
        let players = 3;
        let mut tally = VoteTally::new();
        for _ in 0..4 {
            for _ in 0..players {
                tally.record_vote(false);
            }
            assert!(tally.is_round_complete(players));
            assert_eq!(tally.num_votes_cast() % players, 0);
            tally.new_round();
            assert!(!tally.is_round_complete(players));
        }
        assert_eq!(tally.round(), 4);
        assert_eq!(tally.votes().len(), tally.round() + 1);
    }

    #[test]
    fn test_shrinking_player_count_completes_round() {
        let mut tally = VoteTally::new();
        tally.record_vote(true);
        tally.record_vote(true);
        assert!(!tally.is_round_complete(3));
        assert!(tally.is_round_complete(2));
    }

    #[test]
    fn test_retract_vote_reopens_round() {
        let mut tally = VoteTally::new();
        tally.record_vote(true);
        tally.record_vote(false);
        tally.retract_vote(true);

        assert_eq!(tally.current_votes(), 0);
        assert_eq!(tally.num_votes_cast(), 1);
        assert!(!tally.is_round_complete(2));
        assert!(tally.is_round_complete(1));
    }

    #[test]
    fn test_retract_vote_never_reaches_into_closed_round() {
        let mut tally = VoteTally::new();
        tally.record_vote(true);
        tally.new_round();
        tally.retract_vote(true);

        assert_eq!(tally.votes(), &[1, 0]);
        assert_eq!(tally.num_votes_cast(), 1);
    }

    #[test]
    fn test_highest_round_prefers_earliest_max() {
        let mut tally = VoteTally::new();
        tally.record_vote(true);
        tally.new_round();
        tally.record_vote(true);
        tally.record_vote(true);
        tally.new_round();
        tally.record_vote(true);
        tally.record_vote(true);

        assert_eq!(tally.votes(), &[1, 2, 2]);
        assert_eq!(tally.highest_round(), 1);
    }

    #[test]
    fn test_highest_round_all_zero() {
        let mut tally = VoteTally::new();
        tally.new_round();
        assert_eq!(tally.highest_round(), 0);
    }
}
