use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::earnings as earnings_db;
use crate::models::earnings::{self, EarningsResponse};
use crate::models::users::Roles;

/// GET /api/earnings/mine — the designer's ledger rows plus the running
/// totals the dashboard cards show.
pub async fn get_my_earnings(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> impl Responder {
    if user.0.role != Roles::Designer {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "error": "Only designers have earnings",
        }));
    }

    match earnings_db::get_earnings_by_designer(db.get_ref(), user.0.id).await {
        Ok(rows) => {
            let summary = earnings_db::summarize(&rows);
            HttpResponse::Ok().json(EarningsResponse {
                earnings: rows,
                summary,
            })
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch earnings: {e}"),
        })),
    }
}

/// POST /api/earnings/{id}/mark-paid — admin records a payout.
pub async fn mark_paid(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    if user.0.role != Roles::Admin {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "error": "Admin access required",
        }));
    }

    let earning_id = path.into_inner();

    let earning = match earnings_db::get_earning_by_id(db.get_ref(), earning_id).await {
        Ok(Some(e)) => e,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Earning {earning_id} not found"),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    if earning.status == earnings::Status::Paid {
        return HttpResponse::Conflict().json(serde_json::json!({
            "error": "Earning is already marked as paid",
        }));
    }

    match earnings_db::mark_paid(db.get_ref(), earning.id).await {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to mark earning as paid: {e}"),
        })),
    }
}
