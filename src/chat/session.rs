use actix_web::{HttpRequest, HttpResponse, web};
use actix_ws::Message;
use futures_util::StreamExt;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::auth::jwks::JwksCache;
use crate::auth::jwt;
use crate::chat::protocol::{ClientMessage, MAX_MESSAGE_LEN, ServerMessage};
use crate::chat::server::ChatServer;
use crate::db::messages as message_db;
use crate::db::requests as request_db;
use crate::models::messages::CreateMessage;
use crate::models::requests::Status;

/// Query params for the WebSocket handshake endpoint.
#[derive(Debug, serde::Deserialize)]
pub struct WsQuery {
    pub token: String,
}

/// GET /api/chat/ws/{request_id}?token=<jwt>
///
/// Upgrades the HTTP connection to a WebSocket. Authenticates via a query
/// param token (browsers cannot send Authorization headers during the
/// handshake) and verifies the user is a party to a non-cancelled request.
pub async fn ws_connect(
    req: HttpRequest,
    stream: web::Payload,
    path: web::Path<Uuid>,
    query: web::Query<WsQuery>,
    db: web::Data<DatabaseConnection>,
    jwks_cache: web::Data<Arc<JwksCache>>,
    chat_server: web::Data<Arc<ChatServer>>,
) -> Result<HttpResponse, actix_web::Error> {
    let request_id = path.into_inner();
    let token = &query.token;

    let claims = jwt::validate_token(token, jwks_cache.get_ref())
        .await
        .map_err(|e| actix_web::error::ErrorUnauthorized(format!("Invalid token: {e}")))?;

    let user_id = claims
        .user_id()
        .map_err(actix_web::error::ErrorUnauthorized)?;

    let request = request_db::get_request_by_id(db.get_ref(), request_id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(format!("Database error: {e}")))?
        .ok_or_else(|| {
            actix_web::error::ErrorNotFound(format!("Request {request_id} not found"))
        })?;

    if request.status == Status::Cancelled {
        return Err(actix_web::error::ErrorForbidden(
            "Chat is closed for cancelled requests",
        ));
    }

    let is_party = request.customer_id == user_id
        || request.designer_id == Some(user_id)
        || request.delivery_partner_id == Some(user_id);

    if !is_party {
        return Err(actix_web::error::ErrorForbidden(
            "You are not a party to this request",
        ));
    }

    let (response, session, msg_stream) = actix_ws::handle(&req, stream)?;

    let rx = chat_server.join(request_id, user_id).await;

    let db_clone = db.get_ref().clone();
    let chat_server_clone = chat_server.get_ref().clone();

    actix_web::rt::spawn(handle_ws_session(
        session,
        msg_stream,
        rx,
        request_id,
        user_id,
        db_clone,
        chat_server_clone,
    ));

    Ok(response)
}

/// Drives the WebSocket session: reads incoming client frames, forwards
/// outgoing room messages, cleans up on disconnect.
async fn handle_ws_session(
    mut session: actix_ws::Session,
    mut msg_stream: actix_ws::MessageStream,
    mut rx: mpsc::UnboundedReceiver<ServerMessage>,
    request_id: Uuid,
    user_id: Uuid,
    db: DatabaseConnection,
    chat_server: Arc<ChatServer>,
) {
    loop {
        tokio::select! {
            Some(msg) = msg_stream.next() => {
                match msg {
                    Ok(Message::Text(text)) => {
                        handle_client_message(
                            &text,
                            &mut session,
                            request_id,
                            user_id,
                            &db,
                            &chat_server,
                        )
                        .await;
                    }
                    Ok(Message::Ping(bytes)) => {
                        if session.pong(&bytes).await.is_err() {
                            break;
                        }
                    }
                    Ok(Message::Close(_)) => {
                        break;
                    }
                    Err(_) => {
                        break;
                    }
                    _ => {}
                }
            }
            Some(server_msg) = rx.recv() => {
                let json = match serde_json::to_string(&server_msg) {
                    Ok(j) => j,
                    Err(_) => continue,
                };
                if session.text(json).await.is_err() {
                    break;
                }
            }
            else => break,
        }
    }

    chat_server.leave(request_id, user_id).await;
    let _ = session.close(None).await;
}

async fn send_error(session: &mut actix_ws::Session, message: String) {
    let err = ServerMessage::Error { message };
    let _ = session
        .text(serde_json::to_string(&err).unwrap_or_default())
        .await;
}

/// Parse and handle an incoming client frame.
async fn handle_client_message(
    text: &str,
    session: &mut actix_ws::Session,
    request_id: Uuid,
    user_id: Uuid,
    db: &DatabaseConnection,
    chat_server: &ChatServer,
) {
    let client_msg: ClientMessage = match serde_json::from_str(text) {
        Ok(m) => m,
        Err(e) => {
            send_error(session, format!("Invalid message format: {e}")).await;
            return;
        }
    };

    match client_msg {
        ClientMessage::SendMessage { content } => {
            let content = content.trim().to_string();
            if content.is_empty() {
                send_error(session, "Message content cannot be empty".to_string()).await;
                return;
            }
            if content.chars().count() > MAX_MESSAGE_LEN {
                send_error(
                    session,
                    format!("Message must be less than {MAX_MESSAGE_LEN} characters"),
                )
                .await;
                return;
            }

            let input = CreateMessage {
                request_id,
                sender_id: user_id,
                content,
            };

            match message_db::insert_message(db, input).await {
                Ok(saved) => {
                    let msg = ServerMessage::NewMessage {
                        id: saved.id,
                        sender_id: saved.sender_id,
                        content: saved.content,
                        created_at: saved.created_at.to_rfc3339(),
                    };
                    chat_server.broadcast(request_id, msg, None).await;
                }
                Err(e) => {
                    send_error(session, format!("Failed to save message: {e}")).await;
                }
            }
        }

        ClientMessage::Typing => {
            let msg = ServerMessage::UserTyping { user_id };
            // Only the other parties care.
            chat_server.broadcast(request_id, msg, Some(user_id)).await;
        }

        ClientMessage::StopTyping => {
            let msg = ServerMessage::UserStopTyping { user_id };
            chat_server.broadcast(request_id, msg, Some(user_id)).await;
        }
    }
}
