//! WebSocket bridge for board event channels
//!
//! A client joins a board's channel by opening
//! `GET /api/v1/boards/:board_id/events` with its bearer token. Every
//! event published on the board's broadcast channel is forwarded as one
//! JSON text frame. A receiver that lags far enough to drop events is
//! told so and keeps streaming from the present.

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::Response;
use corkboard::authz::authorize_board;
use corkboard::types::BoardId;
use tokio::sync::broadcast::error::RecvError;

use crate::routes::{ApiError, AppState};

/// Upgrade to a WebSocket streaming one board's events
pub async fn board_events(
    State(ctx): State<AppState>,
    headers: HeaderMap,
    Path(board_id): Path<String>,
    ws: WebSocketUpgrade,
) -> Result<Response, ApiError> {
    let session = crate::routes::session(&ctx, &headers)?;
    let board_id = BoardId::from_string(board_id);
    // Subscribing is read-for-mutation-adjacent: only members may watch
    authorize_board(&ctx, &board_id, &session.user).await?;

    let receiver = ctx.subscribe(&board_id);
    Ok(ws.on_upgrade(move |socket| stream_events(socket, board_id, receiver)))
}

async fn stream_events(
    mut socket: WebSocket,
    board_id: BoardId,
    mut receiver: tokio::sync::broadcast::Receiver<corkboard::BoardEvent>,
) {
    loop {
        match receiver.recv().await {
            Ok(event) => {
                let frame = match serde_json::to_string(&event) {
                    Ok(frame) => frame,
                    Err(error) => {
                        tracing::warn!(board = %board_id, %error, "failed to encode event");
                        continue;
                    }
                };
                if socket.send(Message::Text(frame)).await.is_err() {
                    tracing::debug!(board = %board_id, "subscriber disconnected");
                    return;
                }
            }
            Err(RecvError::Lagged(missed)) => {
                tracing::warn!(board = %board_id, missed, "subscriber lagged, events dropped");
                let notice = serde_json::json!({ "event": "lagged", "data": missed });
                if socket.send(Message::Text(notice.to_string())).await.is_err() {
                    return;
                }
            }
            Err(RecvError::Closed) => {
                tracing::debug!(board = %board_id, "board channel closed");
                return;
            }
        }
    }
}
