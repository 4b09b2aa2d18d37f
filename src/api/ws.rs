use std::sync::Arc;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::Response;
use futures::{SinkExt, StreamExt};
use tracing::{debug, info};
use crate::api::extract::ApiPath;
use crate::api::routes::AppState;
use crate::models::UserId;
use crate::notifications::SessionRegistry;

pub(crate) async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<UserId>,
) -> Response {
    let sessions = Arc::clone(&state.sessions);
    ws.on_upgrade(move |socket| push_session(socket, sessions, user_id))
}

/// Forwards pushed events to one socket until either side goes away. Inbound frames are ignored.
async fn push_session(socket: WebSocket, sessions: Arc<SessionRegistry>, user_id: UserId) {
    let (session_id, mut events) = sessions.register(user_id);
    let (mut sink, mut inbound) = socket.split();
    info!("Push session {} opened for user {}", session_id, user_id);

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Some(payload) => {
                    if sink.send(Message::Text(payload.to_string())).await.is_err() {
                        break;
                    }
                }
                None => break,
            },
            frame = inbound.next() => match frame {
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                Some(Ok(_)) => debug!("Ignoring inbound frame on session {}", session_id),
            },
        }
    }

    sessions.unregister(user_id, session_id);
    info!("Push session {} closed for user {}", session_id, user_id);
}
