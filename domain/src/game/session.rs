//! Game session state machine
//!
//! A session moves `Lobby` → `Playing` → `Ended`. While playing, each
//! completed round runs the winner policy in a fixed order:
//!
//! 1. **Unanimous**: every player liked the current candidate, it wins.
//! 2. **Attrition**: rotate the queue; if a single candidate is all that
//!    is left, the game ends without consensus.
//! 3. **Extended play**: once the group has cast twice as many votes as
//!    there were candidates, the subject of the best-scoring round wins.
//! 4. **Continue**: open a new round on the new front candidate.
//!
//! The session performs no I/O. Callers turn the returned
//! [`RoundOutcome`] into events.

use super::join_code::JoinCode;
use super::status::GameStatus;
use super::tally::VoteTally;
use super::winner::Winner;
use crate::core::error::DomainError;
use crate::restaurant::{Candidate, CandidateQueue};
use serde::{Deserialize, Serialize};

/// What a vote (or a departure) did to the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The round is still waiting on votes
    Pending,
    /// The round closed and a new candidate is up
    NextChoice(Candidate),
    /// The game is over
    Ended(Winner),
}

impl RoundOutcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, RoundOutcome::Pending)
    }
}

/// Result of a player leaving
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveOutcome {
    pub num_players: u32,
    /// A round that closed because the departing player was the last
    /// one the round was waiting on
    pub round: RoundOutcome,
}

/// One group's game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    join_code: JoinCode,
    status: GameStatus,
    num_players: u32,
    queue: CandidateQueue,
    tally: VoteTally,
    original_candidate_count: usize,
    /// Candidate evaluated in each round, indexed like the tally
    subjects: Vec<Candidate>,
}

impl GameSession {
    /// Create a lobby seeded with the provider's candidates
    pub fn new(join_code: JoinCode, candidates: Vec<Candidate>) -> Result<Self, DomainError> {
        if candidates.is_empty() {
            return Err(DomainError::NoCandidates);
        }

        Ok(Self {
            join_code,
            status: GameStatus::Lobby,
            num_players: 0,
            original_candidate_count: candidates.len(),
            queue: CandidateQueue::new(candidates),
            tally: VoteTally::new(),
            subjects: Vec::new(),
        })
    }

    pub fn join_code(&self) -> &JoinCode {
        &self.join_code
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn num_players(&self) -> u32 {
        self.num_players
    }

    pub fn queue(&self) -> &CandidateQueue {
        &self.queue
    }

    pub fn tally(&self) -> &VoteTally {
        &self.tally
    }

    pub fn round(&self) -> usize {
        self.tally.round()
    }

    pub fn original_candidate_count(&self) -> usize {
        self.original_candidate_count
    }

    /// Add a player to the lobby, returning the new count
    pub fn join(&mut self) -> Result<u32, DomainError> {
        self.require(GameStatus::Lobby, "join")?;
        self.num_players += 1;
        Ok(self.num_players)
    }

    /// Remove a player at any stage
    ///
    /// `vote_this_round` is the leaver's vote on the round in progress, if
    /// they cast one; it is withdrawn so the round only closes once every
    /// remaining player has voted. While playing, the round is then
    /// re-checked against the smaller group so a departure cannot leave a
    /// round waiting on a vote that will never come.
    pub fn leave(&mut self, vote_this_round: Option<bool>) -> Result<LeaveOutcome, DomainError> {
        self.num_players = self.num_players.saturating_sub(1);
        if self.status == GameStatus::Playing
            && let Some(affirmative) = vote_this_round
        {
            self.tally.retract_vote(affirmative);
        }

        let round = if self.status == GameStatus::Playing
            && self.tally.is_round_complete(self.num_players)
        {
            self.close_round()?
        } else {
            RoundOutcome::Pending
        };

        Ok(LeaveOutcome {
            num_players: self.num_players,
            round,
        })
    }

    /// Begin play, returning the first round's subject
    pub fn start(&mut self) -> Result<&Candidate, DomainError> {
        let first = self.queue.front()?.clone();
        self.advance(GameStatus::Playing, "start")?;
        self.tally = VoteTally::new();
        self.subjects = vec![first];

        self.queue.front()
    }

    /// Record one player's vote on the current candidate
    pub fn vote(&mut self, affirmative: bool) -> Result<RoundOutcome, DomainError> {
        self.require(GameStatus::Playing, "vote")?;
        if self.num_players == 0 {
            return Err(DomainError::NoPlayers);
        }

        self.tally.record_vote(affirmative);

        if self.tally.is_round_complete(self.num_players) {
            self.close_round()
        } else {
            Ok(RoundOutcome::Pending)
        }
    }

    /// Apply the winner policy to the round that just completed
    fn close_round(&mut self) -> Result<RoundOutcome, DomainError> {
        let front = self.queue.front()?.clone();
        let votes = self.tally.current_votes();

        if votes >= self.num_players {
            return self.finish(Winner::restaurant(front));
        }

        // Nothing left to rotate to
        if self.queue.size() <= 1 {
            return self.finish(Winner::NoConsensus);
        }

        self.queue.rotate(votes > 0);
        if self.queue.size() == 1 {
            return self.finish(Winner::NoConsensus);
        }

        if self.tally.num_votes_cast() as usize >= self.original_candidate_count * 2 {
            let winner = self.most_popular();
            return self.finish(winner);
        }

        self.tally.new_round();
        let next = self.queue.front()?.clone();
        self.subjects.push(next.clone());
        Ok(RoundOutcome::NextChoice(next))
    }

    /// Subject of the round with the most affirmative votes
    fn most_popular(&self) -> Winner {
        let best = self.tally.highest_round();
        match (self.tally.votes().get(best), self.subjects.get(best)) {
            (Some(&count), Some(candidate)) if count > 0 => Winner::restaurant(candidate.clone()),
            _ => Winner::NoConsensus,
        }
    }

    fn finish(&mut self, winner: Winner) -> Result<RoundOutcome, DomainError> {
        self.advance(GameStatus::Ended, "end")?;
        Ok(RoundOutcome::Ended(winner))
    }

    fn advance(&mut self, next: GameStatus, action: &'static str) -> Result<(), DomainError> {
        if !self.status.can_advance_to(next) {
            return Err(DomainError::InvalidTransition {
                action,
                status: self.status,
            });
        }
        self.status = next;
        Ok(())
    }

    fn require(&self, status: GameStatus, action: &'static str) -> Result<(), DomainError> {
        if self.status == status {
            Ok(())
        } else {
            Err(DomainError::InvalidTransition {
                action,
                status: self.status,
            })
        }
    }
}
