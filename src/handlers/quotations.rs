use actix_web::{HttpResponse, Responder, web};
use sea_orm::{DatabaseConnection, DbErr, SqlErr};
use uuid::Uuid;
use validator::Validate;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::quotations as quotation_db;
use crate::db::requests as request_db;
use crate::handlers::{transition_rejected, validation_error};
use crate::models::quotations::{self, CreateQuotation};
use crate::models::users::Roles;
use crate::workflow::{self, RequestAction};

/// Two designers racing past the `quotation_exists` pre-check land on the
/// unique (request_id, designer_id) index; the loser deserves the same 409 as
/// the slow path, not a 500.
fn submit_failed(e: DbErr) -> HttpResponse {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            HttpResponse::Conflict().json(serde_json::json!({
                "error": "You have already quoted on this request",
            }))
        }
        _ => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to submit quotation: {e}"),
        })),
    }
}

/// POST /api/quotations — a designer quotes on an open request.
///
/// One quotation per designer per request; writing the quotation and moving
/// the request to `quoted` happen in one transaction.
pub async fn create_quotation(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateQuotation>,
) -> impl Responder {
    if user.0.role != Roles::Designer {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "error": "Only designers can submit quotations",
        }));
    }

    if let Err(errors) = body.validate() {
        return validation_error(errors);
    }

    let request = match request_db::get_request_by_id(db.get_ref(), body.request_id).await {
        Ok(Some(r)) => r,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Request {} not found", body.request_id),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    let new_status = match workflow::transition(
        request.status,
        &user.0.role,
        RequestAction::SubmitQuotation,
    ) {
        Ok(s) => s,
        Err(e) => return transition_rejected(e),
    };

    match quotation_db::quotation_exists(db.get_ref(), request.id, user.0.id).await {
        Ok(true) => {
            return HttpResponse::Conflict().json(serde_json::json!({
                "error": "You have already quoted on this request",
            }));
        }
        Ok(false) => {}
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    }

    match quotation_db::submit_quotation(db.get_ref(), user.0.id, body.into_inner(), new_status)
        .await
    {
        Ok(quotation) => HttpResponse::Created().json(quotation),
        Err(e) => submit_failed(e),
    }
}

/// GET /api/quotations/mine — a designer's own quotations across requests.
pub async fn get_my_quotations(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> impl Responder {
    if user.0.role != Roles::Designer {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "error": "Only designers have quotations",
        }));
    }

    match quotation_db::get_quotations_by_designer(db.get_ref(), user.0.id).await {
        Ok(quotations) => HttpResponse::Ok().json(quotations),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch quotations: {e}"),
        })),
    }
}

/// GET /api/requests/{id}/quotations — the owning customer (or an admin)
/// reviews the quotes on a request.
pub async fn get_quotations_for_request(
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

    if request.customer_id != user.0.id && user.0.role != Roles::Admin {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "error": "Only the request's customer can view its quotations",
        }));
    }

    match quotation_db::get_quotations_by_request(db.get_ref(), request_id).await {
        Ok(quotations) => HttpResponse::Ok().json(quotations),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch quotations: {e}"),
        })),
    }
}

/// POST /api/quotations/{id}/accept — the customer picks a quote.
///
/// Everything downstream of acceptance happens in one transaction: the chosen
/// quotation is accepted, pending siblings are rejected, the designer is
/// assigned, the earnings row is written at the platform fee split, and the
/// pickup assignment is opened.
pub async fn accept_quotation(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let quotation_id = path.into_inner();

    let quotation = match quotation_db::get_quotation_by_id(db.get_ref(), quotation_id).await {
        Ok(Some(q)) => q,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Quotation {quotation_id} not found"),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    let request = match request_db::get_request_by_id(db.get_ref(), quotation.request_id).await {
        Ok(Some(r)) => r,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": "Request for this quotation no longer exists",
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    if request.customer_id != user.0.id {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "error": "Only the request's customer can accept a quotation",
        }));
    }

    if quotation.status != quotations::Status::Pending {
        return HttpResponse::Conflict().json(serde_json::json!({
            "error": "This quotation has already been resolved",
        }));
    }

    let new_status = match workflow::transition(
        request.status,
        &user.0.role,
        RequestAction::AcceptQuotation,
    ) {
        Ok(s) => s,
        Err(e) => return transition_rejected(e),
    };

    // The pre-checks above are only advisory; the conditional updates inside
    // the transaction decide the winner when two accepts race.
    match quotation_db::accept_quotation(db.get_ref(), quotation, request, new_status).await {
        Ok(Some(updated)) => HttpResponse::Ok().json(updated),
        Ok(None) => HttpResponse::Conflict().json(serde_json::json!({
            "error": "This quotation has already been resolved",
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to accept quotation: {e}"),
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn only_constraint_violations_become_conflicts() {
        let resp = submit_failed(DbErr::RecordNotFound("request".to_string()));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
