use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;
use validator::Validate;

use crate::auth::authorization::verify_request_party;
use crate::auth::middleware::AuthenticatedUser;
use crate::db::dress_images as image_db;
use crate::db::requests as request_db;
use crate::handlers::{transition_rejected, validation_error};
use crate::models::dress_images::AddImage;
use crate::models::requests::{CreateRequest, RequestListQuery};
use crate::models::users::Roles;
use crate::workflow::{self, RequestAction};

/// POST /api/requests — a customer submits a garment for redesign.
///
/// The request row and its images are written in one transaction; a request
/// without at least one photo is rejected before any write.
pub async fn create_request(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateRequest>,
) -> impl Responder {
    if user.0.role != Roles::Customer {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "error": "Only customers can create redesign requests",
        }));
    }

    if let Err(errors) = body.validate() {
        return validation_error(errors);
    }

    if let (Some(min), Some(max)) = (body.budget_min, body.budget_max) {
        if min > max {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "error": "budget_min cannot exceed budget_max",
            }));
        }
    }

    match request_db::insert_request_with_images(db.get_ref(), user.0.id, body.into_inner()).await
    {
        Ok(request) => HttpResponse::Created().json(request),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to create request: {e}"),
        })),
    }
}

/// GET /api/requests — role-scoped listing.
///
/// Customers see their own requests, designers the ones assigned to them,
/// admins everything (optionally filtered by status). Delivery partners work
/// from `/api/assignments` instead.
pub async fn list_requests(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    query: web::Query<RequestListQuery>,
) -> impl Responder {
    let result = match user.0.role {
        Roles::Customer => request_db::get_requests_by_customer(db.get_ref(), user.0.id).await,
        Roles::Designer => request_db::get_requests_by_designer(db.get_ref(), user.0.id).await,
        Roles::Admin => {
            request_db::get_requests_paginated(
                db.get_ref(),
                query.status,
                query.page(),
                query.limit(),
            )
            .await
        }
        Roles::DeliveryPartner => {
            return HttpResponse::Forbidden().json(serde_json::json!({
                "error": "Delivery partners work from /api/assignments",
            }));
        }
    };

    match result {
        Ok(requests) => HttpResponse::Ok().json(requests),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch requests: {e}"),
        })),
    }
}

/// GET /api/requests/open — the browse list for designers: requests still
/// accepting quotations.
pub async fn list_open_requests(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> impl Responder {
    if user.0.role != Roles::Designer {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "error": "Only designers can browse open requests",
        }));
    }

    match request_db::get_open_requests(db.get_ref()).await {
        Ok(requests) => HttpResponse::Ok().json(requests),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch requests: {e}"),
        })),
    }
}

/// GET /api/requests/{id} — parties only, except designers browsing an open
/// request they might quote on.
pub async fn get_request(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let request_id = path.into_inner();

    let request = match request_db::get_request_by_id(db.get_ref(), request_id).await {
        Ok(Some(r)) => r,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Request {request_id} not found"),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    let is_party = request.customer_id == user.0.id
        || request.designer_id == Some(user.0.id)
        || request.delivery_partner_id == Some(user.0.id)
        || user.0.role == Roles::Admin;
    let is_browsing_designer = user.0.role == Roles::Designer && !request.status.is_terminal();

    if !is_party && !is_browsing_designer {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "error": "You are not a party to this request",
        }));
    }

    HttpResponse::Ok().json(request)
}

/// POST /api/requests/{id}/start — the assigned designer begins work.
pub async fn start_work(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let request_id = path.into_inner();

    let request = match verify_request_party(db.get_ref(), request_id, &user.0).await {
        Ok(r) => r,
        Err(resp) => return resp,
    };

    if request.designer_id != Some(user.0.id) {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "error": "Only the assigned designer can start work",
        }));
    }

    let new_status = match workflow::transition(request.status, &user.0.role, RequestAction::StartWork)
    {
        Ok(s) => s,
        Err(e) => return transition_rejected(e),
    };

    match request_db::set_status(db.get_ref(), request_id, new_status).await {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to update request: {e}"),
        })),
    }
}

/// POST /api/requests/{id}/complete — the assigned designer finishes the
/// redesign; the drop-off assignment is opened in the same transaction.
pub async fn complete_work(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let request_id = path.into_inner();

    let request = match verify_request_party(db.get_ref(), request_id, &user.0).await {
        Ok(r) => r,
        Err(resp) => return resp,
    };

    if request.designer_id != Some(user.0.id) {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "error": "Only the assigned designer can complete work",
        }));
    }

    if let Err(e) = workflow::transition(request.status, &user.0.role, RequestAction::CompleteWork)
    {
        return transition_rejected(e);
    }

    match request_db::complete_work(db.get_ref(), request).await {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to complete request: {e}"),
        })),
    }
}

/// POST /api/requests/{id}/cancel — owning customer before acceptance, or an
/// admin on any live request.
pub async fn cancel_request(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let request_id = path.into_inner();

    let request = match verify_request_party(db.get_ref(), request_id, &user.0).await {
        Ok(r) => r,
        Err(resp) => return resp,
    };

    if user.0.role == Roles::Customer && request.customer_id != user.0.id {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "error": "You can only cancel your own requests",
        }));
    }

    let new_status = match workflow::transition(request.status, &user.0.role, RequestAction::Cancel)
    {
        Ok(s) => s,
        Err(e) => return transition_rejected(e),
    };

    match request_db::set_status(db.get_ref(), request_id, new_status).await {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to cancel request: {e}"),
        })),
    }
}

/// GET /api/requests/{id}/images — all images attached to a request.
pub async fn get_images(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let request_id = path.into_inner();

    // Same visibility rule as GET /requests/{id}: parties plus browsing
    // designers, who need the photos to quote.
    let request = match request_db::get_request_by_id(db.get_ref(), request_id).await {
        Ok(Some(r)) => r,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Request {request_id} not found"),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    let is_party = request.customer_id == user.0.id
        || request.designer_id == Some(user.0.id)
        || request.delivery_partner_id == Some(user.0.id)
        || user.0.role == Roles::Admin;
    let is_browsing_designer = user.0.role == Roles::Designer && !request.status.is_terminal();

    if !is_party && !is_browsing_designer {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "error": "You are not a party to this request",
        }));
    }

    match image_db::get_images_by_request(db.get_ref(), request_id).await {
        Ok(images) => HttpResponse::Ok().json(images),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// POST /api/requests/{id}/images — the owning customer appends an image
/// (e.g. an inspiration shot found after submitting).
pub async fn add_image(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<AddImage>,
) -> impl Responder {
    let request_id = path.into_inner();

    if let Err(errors) = body.validate() {
        return validation_error(errors);
    }

    let request = match verify_request_party(db.get_ref(), request_id, &user.0).await {
        Ok(r) => r,
        Err(resp) => return resp,
    };

    if request.customer_id != user.0.id {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "error": "Only the request's customer can add images",
        }));
    }

    if request.status.is_terminal() {
        return HttpResponse::Conflict().json(serde_json::json!({
            "error": "Cannot add images to a closed request",
        }));
    }

    match image_db::insert_image(db.get_ref(), request_id, body.into_inner()).await {
        Ok(image) => HttpResponse::Created().json(image),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to add image: {e}"),
        })),
    }
}
