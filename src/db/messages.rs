use sea_orm::*;
use uuid::Uuid;

use crate::models::messages::{self, CreateMessage};

/// Insert a new chat message.
pub async fn insert_message(
    db: &DatabaseConnection,
    input: CreateMessage,
) -> Result<messages::Model, DbErr> {
    messages::ActiveModel {
        id: Set(Uuid::new_v4()),
        request_id: Set(input.request_id),
        sender_id: Set(input.sender_id),
        content: Set(input.content),
        created_at: Set(chrono::Utc::now()),
    }
    .insert(db)
    .await
}

/// Fetch messages for a request, newest first, with (created_at, id) cursor
/// pagination so clients page backwards through history.
pub async fn get_messages_by_request(
    db: &DatabaseConnection,
    request_id: Uuid,
    limit: u64,
    cursor_created_at: Option<chrono::DateTime<chrono::Utc>>,
    cursor_id: Option<Uuid>,
) -> Result<Vec<messages::Model>, DbErr> {
    let mut query = messages::Entity::find().filter(messages::Column::RequestId.eq(request_id));

    if let (Some(cursor_created_at), Some(cursor_id)) = (cursor_created_at, cursor_id) {
        query = query.filter(
            Condition::any()
                .add(messages::Column::CreatedAt.lt(cursor_created_at))
                .add(
                    Condition::all()
                        .add(messages::Column::CreatedAt.eq(cursor_created_at))
                        .add(messages::Column::Id.lt(cursor_id)),
                ),
        );
    }

    query
        .order_by_desc(messages::Column::CreatedAt)
        .order_by_desc(messages::Column::Id)
        .limit(limit)
        .all(db)
        .await
}
