use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;

use crate::auth::authorization::require_admin;
use crate::auth::middleware::AuthenticatedUser;
use crate::db::stats;

/// GET /api/admin/stats — the counters on the admin dashboard.
pub async fn get_stats(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> impl Responder {
    if let Err(resp) = require_admin(&user.0) {
        return resp;
    }

    match stats::platform_stats(db.get_ref()).await {
        Ok(stats) => HttpResponse::Ok().json(stats),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to compute stats: {e}"),
        })),
    }
}
