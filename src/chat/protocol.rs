use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Longest accepted chat message, matching the REST-side validation.
pub const MAX_MESSAGE_LEN: usize = 5000;

// ── Client -> Server messages ──

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Send a chat message.
    SendMessage { content: String },
    /// Notify the other parties that the user is typing.
    Typing,
    /// Notify the other parties that the user stopped typing.
    StopTyping,
}

// ── Server -> Client messages ──

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// A new message was persisted (echoed to the sender too, so every client
    /// sees the server-assigned id and timestamp).
    NewMessage {
        id: Uuid,
        sender_id: Uuid,
        content: String,
        created_at: String,
    },
    /// Another party is typing.
    UserTyping { user_id: Uuid },
    /// Another party stopped typing.
    UserStopTyping { user_id: Uuid },
    /// A party came online or went offline in this request's chat.
    Presence { user_id: Uuid, online: bool },
    /// An error occurred.
    Error { message: String },
}
