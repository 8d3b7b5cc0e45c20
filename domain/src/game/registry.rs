//! Session registry keyed by join code
//!
//! The registry is the only state shared across actions. It is owned by a
//! single dispatch loop, so it needs no interior locking.

use super::join_code::{DEFAULT_JOIN_CODE_LENGTH, JoinCode};
use super::session::GameSession;
use crate::core::error::DomainError;
use crate::restaurant::Candidate;
use std::collections::HashMap;

/// Random draws per game before giving up on finding a free join code
const MAX_CODE_ATTEMPTS: usize = 1_000;

/// Maps join codes to live sessions
#[derive(Debug)]
pub struct SessionRegistry {
    sessions: HashMap<JoinCode, GameSession>,
    code_length: usize,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
            code_length: DEFAULT_JOIN_CODE_LENGTH,
        }
    }

    pub fn with_code_length(mut self, length: usize) -> Self {
        self.code_length = length.max(1);
        self
    }

    /// Register a new lobby for the given candidates and return its code
    pub fn create(&mut self, candidates: Vec<Candidate>) -> Result<JoinCode, DomainError> {
        if candidates.is_empty() {
            return Err(DomainError::NoCandidates);
        }

        let full = JoinCode::space_size(self.code_length)
            .is_some_and(|size| self.sessions.len() >= size);
        if full {
            return Err(DomainError::CodeSpaceExhausted);
        }

        let mut rng = rand::thread_rng();
        let code = std::iter::repeat_with(|| JoinCode::random(&mut rng, self.code_length))
            .take(MAX_CODE_ATTEMPTS)
            .find(|code| !self.sessions.contains_key(code))
            .ok_or(DomainError::CodeSpaceExhausted)?;

        let session = GameSession::new(code.clone(), candidates)?;
        self.sessions.insert(code.clone(), session);
        Ok(code)
    }

    pub fn lookup(&self, code: &JoinCode) -> Option<&GameSession> {
        self.sessions.get(code)
    }

    pub fn lookup_mut(&mut self, code: &JoinCode) -> Option<&mut GameSession> {
        self.sessions.get_mut(code)
    }

    /// Replace a session with an updated copy
    ///
    /// Used to commit a transition that was computed on a clone. Returns
    /// `false` if the code is no longer registered.
    pub fn commit(&mut self, session: GameSession) -> bool {
        match self.sessions.get_mut(session.join_code()) {
            Some(slot) => {
                *slot = session;
                true
            }
            None => false,
        }
    }

    /// Evict the session if its last player has gone, whatever its status
    ///
    /// Returns `true` if the session was removed.
    pub fn on_player_count_changed(&mut self, code: &JoinCode) -> bool {
        let empty = self
            .sessions
            .get(code)
            .is_some_and(|session| session.num_players() == 0);
        if empty {
            self.sessions.remove(code);
        }
        empty
    }

    pub fn contains(&self, code: &JoinCode) -> bool {
        self.sessions.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
