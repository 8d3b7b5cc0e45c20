//! Protocol adapter between connections and game sessions
//!
//! [`GameDispatcher`] admits each inbound action against the session's
//! lifecycle stage, applies it, fetches restaurant detail when a new
//! candidate comes up, and fans the resulting events out to the session
//! group.
//!
//! Transitions that need the provider are computed on a copy of the
//! session and committed only once the provider answers. A provider
//! failure therefore leaves the session exactly as it was and the action
//! can be retried.

use crate::ports::restaurant_provider::RestaurantProvider;
use crate::protocol::{Delivery, GameAction, INVALID_JOIN_CODE, RequiredStatus, ServerEvent};
use munch_domain::{
    Candidate, DomainError, GameSession, GameStatus, JoinCode, RestaurantDetail, RoundOutcome,
    SessionRegistry,
};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Identifies one client connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(pub u64);

impl std::fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "conn-{}", self.0)
    }
}

/// Result of checking an action against a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Admitted,
    NotFound,
    StatusMismatch(GameStatus),
}

struct Connection {
    sender: mpsc::UnboundedSender<Delivery>,
    /// Game this connection joined as a player
    joined: Option<JoinCode>,
    /// Round index and vote of the last ballot this connection cast
    ballot: Option<(usize, bool)>,
}

/// Owns every session and connection; driven by a single task
pub struct GameDispatcher {
    registry: SessionRegistry,
    provider: Arc<dyn RestaurantProvider>,
    connections: HashMap<ConnectionId, Connection>,
    groups: HashMap<JoinCode, HashSet<ConnectionId>>,
}

impl GameDispatcher {
    pub fn new(provider: Arc<dyn RestaurantProvider>, registry: SessionRegistry) -> Self {
        Self {
            registry,
            provider,
            connections: HashMap::new(),
            groups: HashMap::new(),
        }
    }

    pub fn registry(&self) -> &SessionRegistry {
        &self.registry
    }

    /// Register a lobby for the candidates and return its join code
    pub fn create_game(&mut self, candidates: Vec<Candidate>) -> Result<JoinCode, DomainError> {
        let count = candidates.len();
        let code = self.registry.create(candidates)?;
        info!("Created game {} with {} candidates", code, count);
        Ok(code)
    }

    /// Whether a game is registered under the code
    pub fn check_game(&self, code: &JoinCode) -> bool {
        self.registry.contains(code)
    }

    /// Start tracking a connection
    pub fn connect(&mut self, id: ConnectionId, sender: mpsc::UnboundedSender<Delivery>) {
        debug!("{} connected", id);
        self.connections.insert(
            id,
            Connection {
                sender,
                joined: None,
                ballot: None,
            },
        );
    }

    /// Number of members in a session group
    pub fn group_size(&self, code: &JoinCode) -> usize {
        self.groups.get(code).map_or(0, HashSet::len)
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Check whether an action requiring `required` may run against the
    /// session registered under `code`
    pub fn admit(&self, code: &JoinCode, required: RequiredStatus) -> Admission {
        match self.registry.lookup(code) {
            None => Admission::NotFound,
            Some(session) if !required.allows(session.status()) => {
                Admission::StatusMismatch(session.status())
            }
            Some(_) => Admission::Admitted,
        }
    }

    /// Admit and apply one action from a connection
    pub async fn handle(&mut self, id: ConnectionId, code: &JoinCode, action: GameAction) {
        debug!("{} -> {} on game {}", id, action.as_str(), code);

        match self.admit(code, action.required_status()) {
            Admission::Admitted => {}
            Admission::NotFound if action == GameAction::Disconnect => {
                self.forget(id);
                return;
            }
            Admission::NotFound => {
                self.reject(id, INVALID_JOIN_CODE);
                return;
            }
            Admission::StatusMismatch(status) => {
                self.reject(id, status.mismatch_reason());
                return;
            }
        }

        match action {
            GameAction::Join => self.on_join(id, code),
            GameAction::Start => self.on_start(id, code).await,
            GameAction::Vote(ok) => self.on_vote(id, code, ok).await,
            GameAction::Disconnect => self.on_disconnect(id, code).await,
        }
    }

    fn on_join(&mut self, id: ConnectionId, code: &JoinCode) {
        let already_joined = self
            .connections
            .get(&id)
            .is_some_and(|conn| conn.joined.as_ref() == Some(code));

        let num_players = match self.registry.lookup_mut(code) {
            Some(session) if already_joined => session.num_players(),
            Some(session) => match session.join() {
                Ok(count) => count,
                Err(e) => {
                    self.reject(id, &e.to_string());
                    return;
                }
            },
            None => return,
        };

        if !already_joined {
            if let Some(conn) = self.connections.get_mut(&id) {
                conn.joined = Some(code.clone());
            }
            self.groups.entry(code.clone()).or_default().insert(id);
        }

        info!("Game {} now has {} players", code, num_players);
        self.broadcast(code, ServerEvent::JoinedGame { num_players });
    }

    async fn on_start(&mut self, id: ConnectionId, code: &JoinCode) {
        let Some(mut next) = self.registry.lookup(code).cloned() else {
            return;
        };

        let first = match next.start() {
            Ok(candidate) => candidate.clone(),
            Err(e) => {
                self.reject(id, &e.to_string());
                return;
            }
        };

        match self.provider.details(&first.id).await {
            Ok(restaurant) => {
                info!(
                    "Game {} started with {} players on {} candidates",
                    code,
                    next.num_players(),
                    next.queue().size()
                );
                self.registry.commit(next);
                self.broadcast(code, ServerEvent::StartedGame { restaurant });
            }
            Err(e) => {
                warn!("Could not load first restaurant for game {}: {}", code, e);
                self.send(
                    id,
                    ServerEvent::ProviderError {
                        reason: e.to_string(),
                    },
                );
            }
        }
    }

    async fn on_vote(&mut self, id: ConnectionId, code: &JoinCode, ok: bool) {
        let Some(mut next) = self.registry.lookup(code).cloned() else {
            return;
        };

        let round = next.round();
        let outcome = match next.vote(ok) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.reject(id, &e.to_string());
                return;
            }
        };
        log_round(&next, &outcome);

        match outcome {
            RoundOutcome::Pending => {
                self.registry.commit(next);
                if let Some(conn) = self.connections.get_mut(&id) {
                    conn.ballot = Some((round, ok));
                }
            }
            RoundOutcome::NextChoice(candidate) => {
                match self.provider.details(&candidate.id).await {
                    Ok(restaurant) => {
                        self.registry.commit(next);
                        self.broadcast(code, ServerEvent::NextChoice { restaurant });
                    }
                    Err(e) => {
                        warn!(
                            "Could not load next restaurant for game {}: {}",
                            code, e
                        );
                        self.send(
                            id,
                            ServerEvent::ProviderError {
                                reason: e.to_string(),
                            },
                        );
                    }
                }
            }
            RoundOutcome::Ended(winner) => {
                info!("Game {} ended: {}", code, winner);
                self.registry.commit(next);
                self.broadcast(code, ServerEvent::EndedGame { winner });
            }
        }
    }

    async fn on_disconnect(&mut self, id: ConnectionId, code: &JoinCode) {
        let Some(conn) = self.forget(id) else {
            return;
        };
        if conn.joined.as_ref() != Some(code) {
            return;
        }

        let Some(session) = self.registry.lookup_mut(code) else {
            return;
        };
        // Only a vote on the round still open is withdrawn
        let vote_this_round = conn
            .ballot
            .filter(|(round, _)| *round == session.round())
            .map(|(_, ok)| ok);
        let outcome = match session.leave(vote_this_round) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Player could not leave game {}: {}", code, e);
                return;
            }
        };
        info!("Game {} now has {} players", code, outcome.num_players);

        if self.registry.on_player_count_changed(code) {
            info!("Game {} is empty, evicting", code);
            self.groups.remove(code);
            return;
        }

        self.broadcast(
            code,
            ServerEvent::JoinedGame {
                num_players: outcome.num_players,
            },
        );

        match outcome.round {
            RoundOutcome::Pending => {}
            RoundOutcome::NextChoice(candidate) => {
                // The player is gone either way, so fall back to the listing
                let restaurant = match self.provider.details(&candidate.id).await {
                    Ok(detail) => detail,
                    Err(e) => {
                        warn!(
                            "Could not load next restaurant for game {}: {}",
                            code, e
                        );
                        RestaurantDetail::from(&candidate)
                    }
                };
                self.broadcast(code, ServerEvent::NextChoice { restaurant });
            }
            RoundOutcome::Ended(winner) => {
                info!("Game {} ended: {}", code, winner);
                self.broadcast(code, ServerEvent::EndedGame { winner });
            }
        }
    }

    /// Drop a connection, returning its last known state
    fn forget(&mut self, id: ConnectionId) -> Option<Connection> {
        let conn = self.connections.remove(&id)?;
        if let Some(code) = &conn.joined
            && let Some(group) = self.groups.get_mut(code)
        {
            group.remove(&id);
            if group.is_empty() {
                self.groups.remove(code);
            }
        }
        debug!("{} disconnected", id);
        Some(conn)
    }

    /// Report an integrity failure and close the offending connection
    fn reject(&self, id: ConnectionId, reason: &str) {
        warn!("Rejecting {}: {}", id, reason);
        if let Some(conn) = self.connections.get(&id) {
            let _ = conn.sender.send(Delivery::Event(ServerEvent::error(reason)));
            let _ = conn.sender.send(Delivery::Close);
        }
    }

    fn send(&self, id: ConnectionId, event: ServerEvent) {
        if let Some(conn) = self.connections.get(&id) {
            let _ = conn.sender.send(Delivery::Event(event));
        }
    }

    fn broadcast(&self, code: &JoinCode, event: ServerEvent) {
        let Some(group) = self.groups.get(code) else {
            return;
        };
        debug!(
            "Broadcasting {} to {} members of {}",
            event.name(),
            group.len(),
            code
        );
        for id in group {
            if let Some(conn) = self.connections.get(id)
                && conn.sender.send(Delivery::Event(event.clone())).is_err()
            {
                debug!("{} is gone, skipping {}", id, event.name());
            }
        }
    }
}

fn log_round(session: &GameSession, outcome: &RoundOutcome) {
    let tally = session.tally();
    debug!(
        "Game {}: round {}, {} votes cast, {} players, {} yes this round, pending={}",
        session.join_code(),
        session.round(),
        tally.num_votes_cast(),
        session.num_players(),
        tally.current_votes(),
        outcome.is_pending()
    );
}
