use actix_web::HttpResponse;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::db::requests as request_db;
use crate::models::requests::{Model as Request, Status};
use crate::models::users::{self, Roles};

/// Require a specific platform role, or 403.
pub fn require_role(user: &users::Model, role: Roles) -> Result<(), HttpResponse> {
    if user.role == role {
        Ok(())
    } else {
        Err(HttpResponse::Forbidden().json(serde_json::json!({
            "error": format!("This action requires the {:?} role", role),
        })))
    }
}

pub fn require_admin(user: &users::Model) -> Result<(), HttpResponse> {
    require_role(user, Roles::Admin)
}

/// Fetch a request and verify the user is a party to it: the customer, the
/// assigned designer, the assigned delivery partner, or an admin.
pub async fn verify_request_party(
    db: &DatabaseConnection,
    request_id: Uuid,
    user: &users::Model,
) -> Result<Request, HttpResponse> {
    let request = request_db::get_request_by_id(db, request_id)
        .await
        .map_err(|e| {
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }))
        })?
        .ok_or_else(|| {
            HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Request {request_id} not found"),
            }))
        })?;

    let is_party = request.customer_id == user.id
        || request.designer_id == Some(user.id)
        || request.delivery_partner_id == Some(user.id)
        || user.role == Roles::Admin;

    if !is_party {
        return Err(HttpResponse::Forbidden().json(serde_json::json!({
            "error": "You are not a party to this request",
        })));
    }

    Ok(request)
}

/// Chat access: any party, as long as the request is not cancelled.
pub async fn verify_chat_access(
    db: &DatabaseConnection,
    request_id: Uuid,
    user: &users::Model,
) -> Result<Request, HttpResponse> {
    let request = verify_request_party(db, request_id, user).await?;

    if request.status == Status::Cancelled {
        return Err(HttpResponse::Forbidden().json(serde_json::json!({
            "error": "Chat is closed for cancelled requests",
        })));
    }

    Ok(request)
}
