use std::collections::HashMap;
use tokio::sync::{RwLock, mpsc};
use uuid::Uuid;

use crate::chat::protocol::ServerMessage;

/// A handle to send messages to a connected WebSocket client.
#[derive(Debug, Clone)]
pub struct ClientHandle {
    pub user_id: Uuid,
    pub sender: mpsc::UnboundedSender<ServerMessage>,
}

/// Manages all active WebSocket connections, one room per redesign request.
///
/// A room holds the connected parties (customer, designer, delivery partner)
/// and supports broadcasting chat messages, typing indicators, and presence.
pub struct ChatServer {
    /// request_id -> connected client handles
    rooms: RwLock<HashMap<Uuid, Vec<ClientHandle>>>,
}

impl ChatServer {
    pub fn new() -> Self {
        Self {
            rooms: RwLock::new(HashMap::new()),
        }
    }

    /// Register a new connection for a request's chat. Returns the receiver
    /// the WebSocket session should drain.
    pub async fn join(
        &self,
        request_id: Uuid,
        user_id: Uuid,
    ) -> mpsc::UnboundedReceiver<ServerMessage> {
        let (tx, rx) = mpsc::unbounded_channel();

        let handle = ClientHandle {
            user_id,
            sender: tx,
        };

        let presence_msg = ServerMessage::Presence {
            user_id,
            online: true,
        };

        let mut rooms = self.rooms.write().await;
        let room = rooms.entry(request_id).or_insert_with(Vec::new);

        // Tell existing members before adding the newcomer.
        for client in room.iter() {
            if client.user_id != user_id {
                let _ = client.sender.send(presence_msg.clone());
            }
        }

        room.push(handle);

        rx
    }

    /// Remove one connection for a user. A user may hold several connections
    /// (multiple tabs); offline presence is only broadcast once the last one
    /// is gone.
    pub async fn leave(&self, request_id: Uuid, user_id: Uuid) {
        let mut rooms = self.rooms.write().await;

        if let Some(room) = rooms.get_mut(&request_id) {
            if let Some(pos) = room.iter().position(|c| c.user_id == user_id) {
                room.remove(pos);
            }

            let still_connected = room.iter().any(|c| c.user_id == user_id);

            if !still_connected {
                let presence_msg = ServerMessage::Presence {
                    user_id,
                    online: false,
                };
                for client in room.iter() {
                    let _ = client.sender.send(presence_msg.clone());
                }
            }

            if room.is_empty() {
                rooms.remove(&request_id);
            }
        }
    }

    /// Broadcast to every connection in a request's chat, optionally skipping
    /// the sender.
    pub async fn broadcast(
        &self,
        request_id: Uuid,
        message: ServerMessage,
        exclude_user: Option<Uuid>,
    ) {
        let rooms = self.rooms.read().await;
        if let Some(room) = rooms.get(&request_id) {
            for client in room {
                if Some(client.user_id) == exclude_user {
                    continue;
                }
                // A failed send means the receiver disconnected; leave() will
                // clean the handle up.
                let _ = client.sender.send(message.clone());
            }
        }
    }
}
