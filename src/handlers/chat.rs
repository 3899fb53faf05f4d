use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::authorization::verify_chat_access;
use crate::auth::middleware::AuthenticatedUser;
use crate::db::messages as message_db;
use crate::models::messages::{MessageQuery, MessageResponse};

/// GET /api/chat/{request_id}/messages — paged history, newest first.
///
/// The WebSocket carries live traffic; this endpoint backfills on scroll-up
/// using a (created_at, id) cursor.
pub async fn get_messages(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    query: web::Query<MessageQuery>,
) -> impl Responder {
    let request_id = path.into_inner();

    if let Err(resp) = verify_chat_access(db.get_ref(), request_id, &user.0).await {
        return resp;
    }

    match message_db::get_messages_by_request(
        db.get_ref(),
        request_id,
        query.limit(),
        query.cursor_created_at,
        query.cursor_id,
    )
    .await
    {
        Ok(messages) => {
            let messages: Vec<MessageResponse> =
                messages.into_iter().map(MessageResponse::from).collect();
            HttpResponse::Ok().json(messages)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch messages: {e}"),
        })),
    }
}
