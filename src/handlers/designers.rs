use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::auth::authorization::{require_admin, require_role};
use crate::auth::middleware::AuthenticatedUser;
use crate::cache::{RedisCache, keys};
use crate::db::designer_profiles as designer_db;
use crate::handlers::validation_error;
use crate::models::designer_profiles::{SetVerified, UpsertDesignerProfile};
use crate::models::users::Roles;

/// GET /api/designers — browse available designers, best rated first.
/// The hottest public read path, so it goes through the cache.
pub async fn list_designers(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<Arc<RedisCache>>,
) -> impl Responder {
    let cache_key = keys::designer_list();

    if let Ok(Some(cached)) = cache.get::<serde_json::Value>(&cache_key).await {
        return HttpResponse::Ok().json(cached);
    }

    match designer_db::list_available(db.get_ref()).await {
        Ok(designers) => {
            let _ = cache.set(&cache_key, &designers, Some(300)).await;
            HttpResponse::Ok().json(designers)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch designers: {e}"),
        })),
    }
}

/// GET /api/designers/{user_id} — a single designer's public profile.
pub async fn get_designer(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<Arc<RedisCache>>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let user_id = path.into_inner();
    let cache_key = keys::designer(user_id);

    if let Ok(Some(cached)) = cache.get::<serde_json::Value>(&cache_key).await {
        return HttpResponse::Ok().json(cached);
    }

    match designer_db::get_by_user_id(db.get_ref(), user_id).await {
        Ok(Some(profile)) => {
            let _ = cache.set(&cache_key, &profile, Some(600)).await;
            HttpResponse::Ok().json(profile)
        }
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Designer profile for user {user_id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// PUT /api/designers/me — a designer creates or updates their own profile.
pub async fn upsert_my_profile(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<Arc<RedisCache>>,
    body: web::Json<UpsertDesignerProfile>,
) -> impl Responder {
    if let Err(resp) = require_role(&user.0, Roles::Designer) {
        return resp;
    }

    if let Err(errors) = body.validate() {
        return validation_error(errors);
    }

    // The derive can't compare two fields; keep the range sane here.
    if let (Some(min), Some(max)) = (body.price_range_min, body.price_range_max) {
        if min > max {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "error": "price_range_min cannot exceed price_range_max",
            }));
        }
    }

    match designer_db::upsert(db.get_ref(), user.0.id, body.into_inner()).await {
        Ok(profile) => {
            let _ = cache.delete(&keys::designer(user.0.id)).await;
            let _ = cache.delete(&keys::designer_list()).await;
            HttpResponse::Ok().json(profile)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to save designer profile: {e}"),
        })),
    }
}

/// PUT /api/designers/{user_id}/verify — admin toggles the verified badge.
pub async fn verify_designer(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<Arc<RedisCache>>,
    path: web::Path<Uuid>,
    body: web::Json<SetVerified>,
) -> impl Responder {
    if let Err(resp) = require_admin(&user.0) {
        return resp;
    }

    let user_id = path.into_inner();

    match designer_db::set_verified(db.get_ref(), user_id, body.is_verified).await {
        Ok(profile) => {
            let _ = cache.delete(&keys::designer(user_id)).await;
            let _ = cache.delete(&keys::designer_list()).await;
            HttpResponse::Ok().json(profile)
        }
        Err(e) => {
            if e.to_string().contains("not found") {
                HttpResponse::NotFound().json(serde_json::json!({
                    "error": format!("Designer profile for user {user_id} not found"),
                }))
            } else {
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": format!("Failed to update verification: {e}"),
                }))
            }
        }
    }
}
