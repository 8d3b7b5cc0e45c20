//! WebSocket transport for the real-time game protocol
//!
//! Each socket is bound to one join code (from the `joinCode` query
//! parameter). Inbound text frames are decoded as [`ClientAction`]s and
//! forwarded to the hub; deliveries from the hub are written back as JSON
//! [`ServerEvent`] frames. When either side closes, the hub is told the
//! connection went away.

use super::handlers::JoinCodeQuery;
use super::router::AppState;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Query, State};
use axum::response::Response;
use futures::{SinkExt, StreamExt};
use munch_application::{ClientAction, Delivery, GameAction, GameHandle, ServerEvent};
use munch_domain::JoinCode;
use tracing::{debug, info, warn};

pub async fn upgrade(
    ws: WebSocketUpgrade,
    Query(query): Query<JoinCodeQuery>,
    State(state): State<AppState>,
) -> Response {
    let code = JoinCode::from(query.join_code);
    ws.on_upgrade(move |socket| run_connection(socket, state.hub, code))
}

async fn run_connection(socket: WebSocket, hub: GameHandle, code: JoinCode) {
    let (connection, mut deliveries) = match hub.connect().await {
        Ok(pair) => pair,
        Err(e) => {
            warn!("Rejecting socket for {}: {}", code, e);
            return;
        }
    };
    info!("{} connected to {}", connection, code);

    let (mut sink, mut stream) = socket.split();

    loop {
        tokio::select! {
            delivery = deliveries.recv() => match delivery {
                Some(Delivery::Event(event)) => {
                    let Some(text) = encode_event(&event) else { continue };
                    if sink.send(Message::Text(text.into())).await.is_err() {
                        break;
                    }
                }
                Some(Delivery::Close) | None => {
                    let _ = sink.send(Message::Close(None)).await;
                    break;
                }
            },
            message = stream.next() => match message {
                Some(Ok(Message::Text(text))) => {
                    let Some(action) = decode_action(text.as_str()) else {
                        debug!("{} sent an unrecognized message", connection);
                        continue;
                    };
                    if hub.act(connection, code.clone(), action).await.is_err() {
                        break;
                    }
                }
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                Some(Ok(_)) => {}
            },
        }
    }

    if let Err(e) = hub.disconnect(connection, code.clone()).await {
        debug!("Disconnect of {} not delivered: {}", connection, e);
    }
    info!("{} left {}", connection, code);
}

fn decode_action(text: &str) -> Option<GameAction> {
    serde_json::from_str::<ClientAction>(text)
        .ok()
        .map(GameAction::from)
}

fn encode_event(event: &ServerEvent) -> Option<String> {
    match serde_json::to_string(event) {
        Ok(text) => Some(text),
        Err(e) => {
            warn!("Failed to encode {} event: {}", event.name(), e);
            None
        }
    }
}
