//! Single-task game hub
//!
//! Every mutation of game state goes through one background task that
//! owns the [`GameDispatcher`]. Commands arrive over an `mpsc` channel and
//! are handled strictly one at a time, so no two actions ever touch the
//! registry concurrently and a round advance that waits on the provider
//! finishes before the next vote is looked at.
//!
//! ```text
//!  ws conn ─┐                     ┌────────────────────┐
//!  ws conn ─┼─► mpsc<HubCommand> ─►│ hub task           │
//!  http    ─┘   (oneshot replies) │   GameDispatcher   │─► per-conn mpsc<Delivery>
//!                                 └────────────────────┘
//! ```

use super::dispatch::{ConnectionId, GameDispatcher};
use crate::config::GameParams;
use crate::protocol::{Delivery, GameAction};
use munch_domain::{Candidate, DomainError, JoinCode};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Errors returned by [`GameHandle`]
#[derive(Error, Debug)]
pub enum HubError {
    #[error("Game hub has stopped")]
    Stopped,

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// A request to the hub task
#[derive(Debug)]
pub enum HubCommand {
    CreateGame {
        candidates: Vec<Candidate>,
        reply: oneshot::Sender<Result<JoinCode, DomainError>>,
    },
    CheckGame {
        code: JoinCode,
        reply: oneshot::Sender<bool>,
    },
    Connect {
        connection: ConnectionId,
        sender: mpsc::UnboundedSender<Delivery>,
    },
    Action {
        connection: ConnectionId,
        code: JoinCode,
        action: GameAction,
    },
}

/// Cloneable handle for talking to the hub task
#[derive(Clone)]
pub struct GameHandle {
    tx: mpsc::Sender<HubCommand>,
    next_connection: Arc<AtomicU64>,
}

impl GameHandle {
    /// Register a lobby and return its join code
    pub async fn create_game(&self, candidates: Vec<Candidate>) -> Result<JoinCode, HubError> {
        let (reply, rx) = oneshot::channel();
        self.send(HubCommand::CreateGame { candidates, reply })
            .await?;
        Ok(rx.await.map_err(|_| HubError::Stopped)??)
    }

    /// Whether a game exists under the code
    pub async fn check_game(&self, code: JoinCode) -> Result<bool, HubError> {
        let (reply, rx) = oneshot::channel();
        self.send(HubCommand::CheckGame { code, reply }).await?;
        rx.await.map_err(|_| HubError::Stopped)
    }

    /// Open a new connection; events for it arrive on the returned receiver
    pub async fn connect(
        &self,
    ) -> Result<(ConnectionId, mpsc::UnboundedReceiver<Delivery>), HubError> {
        let connection = ConnectionId(self.next_connection.fetch_add(1, Ordering::Relaxed));
        let (sender, receiver) = mpsc::unbounded_channel();
        self.send(HubCommand::Connect { connection, sender })
            .await?;
        Ok((connection, receiver))
    }

    /// Submit an action on behalf of a connection
    pub async fn act(
        &self,
        connection: ConnectionId,
        code: JoinCode,
        action: GameAction,
    ) -> Result<(), HubError> {
        self.send(HubCommand::Action {
            connection,
            code,
            action,
        })
        .await
    }

    /// Tell the hub a connection has closed
    pub async fn disconnect(&self, connection: ConnectionId, code: JoinCode) -> Result<(), HubError> {
        self.act(connection, code, GameAction::Disconnect).await
    }

    async fn send(&self, command: HubCommand) -> Result<(), HubError> {
        self.tx.send(command).await.map_err(|_| HubError::Stopped)
    }
}

/// Spawns and runs the hub task
pub struct GameHub;

impl GameHub {
    /// Start the hub task
    ///
    /// The task stops when `cancel` fires or every [`GameHandle`] is dropped.
    pub fn spawn(
        dispatcher: GameDispatcher,
        params: &GameParams,
        cancel: CancellationToken,
    ) -> (GameHandle, JoinHandle<()>) {
        let (tx, rx) = mpsc::channel(params.command_buffer.max(1));
        let handle = GameHandle {
            tx,
            next_connection: Arc::new(AtomicU64::new(1)),
        };
        let task = tokio::spawn(Self::run(dispatcher, rx, cancel));
        (handle, task)
    }

    async fn run(
        mut dispatcher: GameDispatcher,
        mut rx: mpsc::Receiver<HubCommand>,
        cancel: CancellationToken,
    ) {
        info!("Game hub started");
        loop {
            let command = tokio::select! {
                _ = cancel.cancelled() => break,
                command = rx.recv() => match command {
                    Some(command) => command,
                    None => break,
                },
            };
            Self::apply(&mut dispatcher, command).await;
        }
        info!(
            "Game hub stopped with {} games registered",
            dispatcher.registry().len()
        );
    }

    async fn apply(dispatcher: &mut GameDispatcher, command: HubCommand) {
        match command {
            HubCommand::CreateGame { candidates, reply } => {
                let _ = reply.send(dispatcher.create_game(candidates));
            }
            HubCommand::CheckGame { code, reply } => {
                let _ = reply.send(dispatcher.check_game(&code));
            }
            HubCommand::Connect { connection, sender } => {
                dispatcher.connect(connection, sender);
            }
            HubCommand::Action {
                connection,
                code,
                action,
            } => {
                dispatcher.handle(connection, &code, action).await;
            }
        }
        debug!(
            "Hub: {} games, {} connections",
            dispatcher.registry().len(),
            dispatcher.connection_count()
        );
    }
}
