use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;
use validator::Validate;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::assignments as assignment_db;
use crate::handlers::validation_error;
use crate::models::assignments::{self, CompleteAssignment};
use crate::models::users::Roles;

/// GET /api/assignments/open — unclaimed pickup/delivery jobs, oldest first.
pub async fn list_open_assignments(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> impl Responder {
    if user.0.role != Roles::DeliveryPartner {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "error": "Only delivery partners can browse open assignments",
        }));
    }

    match assignment_db::get_open_assignments(db.get_ref()).await {
        Ok(list) => HttpResponse::Ok().json(list),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch assignments: {e}"),
        })),
    }
}

/// GET /api/assignments/mine — the partner's claimed assignments.
pub async fn get_my_assignments(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> impl Responder {
    if user.0.role != Roles::DeliveryPartner {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "error": "Only delivery partners have assignments",
        }));
    }

    match assignment_db::get_assignments_by_partner(db.get_ref(), user.0.id).await {
        Ok(list) => HttpResponse::Ok().json(list),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch assignments: {e}"),
        })),
    }
}

/// POST /api/assignments/{id}/claim — first partner wins.
///
/// The claim is a single conditional UPDATE; when two partners race, exactly
/// one sees a row change and the other gets a 409.
pub async fn claim_assignment(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    if user.0.role != Roles::DeliveryPartner {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "error": "Only delivery partners can claim assignments",
        }));
    }

    let assignment_id = path.into_inner();

    match assignment_db::claim_assignment(db.get_ref(), assignment_id, user.0.id).await {
        Ok(true) => match assignment_db::get_assignment_by_id(db.get_ref(), assignment_id).await {
            Ok(Some(assignment)) => HttpResponse::Ok().json(assignment),
            Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Assignment {assignment_id} not found"),
            })),
            Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            })),
        },
        Ok(false) => HttpResponse::Conflict().json(serde_json::json!({
            "error": "Assignment is no longer available",
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to claim assignment: {e}"),
        })),
    }
}

/// POST /api/assignments/{id}/complete — the claiming partner marks the job
/// done; the matching pickup/delivery flag on the request is set in the same
/// transaction.
pub async fn complete_assignment(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<CompleteAssignment>,
) -> impl Responder {
    if user.0.role != Roles::DeliveryPartner {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "error": "Only delivery partners can complete assignments",
        }));
    }

    if let Err(errors) = body.validate() {
        return validation_error(errors);
    }

    let assignment_id = path.into_inner();

    let assignment = match assignment_db::get_assignment_by_id(db.get_ref(), assignment_id).await {
        Ok(Some(a)) => a,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Assignment {assignment_id} not found"),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    if assignment.delivery_partner_id != Some(user.0.id) {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "error": "You can only complete assignments you claimed",
        }));
    }

    if assignment.status == assignments::Status::Completed {
        return HttpResponse::Conflict().json(serde_json::json!({
            "error": "Assignment is already completed",
        }));
    }

    match assignment_db::complete_assignment(db.get_ref(), assignment, body.into_inner().notes)
        .await
    {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to complete assignment: {e}"),
        })),
    }
}
