use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `messages` table. Chat history for a redesign
/// request, ordered by (created_at, id).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "messages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub request_id: Uuid,
    pub sender_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::requests::Entity",
        from = "Column::RequestId",
        to = "super::requests::Column::Id"
    )]
    Request,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::SenderId",
        to = "super::users::Column::Id"
    )]
    Sender,
}

impl Related<super::requests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Request.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sender.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// DTO for persisting a new message (used by the chat session).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMessage {
    pub request_id: Uuid,
    pub sender_id: Uuid,
    pub content: String,
}

/// Response DTO for messages sent over WebSocket and REST.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub id: Uuid,
    pub request_id: Uuid,
    pub sender_id: Uuid,
    pub content: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Model> for MessageResponse {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            request_id: m.request_id,
            sender_id: m.sender_id,
            content: m.content,
            created_at: m.created_at,
        }
    }
}

/// Cursor-paginated history query. The cursor is the (created_at, id) of the
/// oldest message the client already has.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageQuery {
    pub limit: Option<u64>,
    pub cursor_created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub cursor_id: Option<Uuid>,
}

impl MessageQuery {
    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(50).min(100)
    }
}
