use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::auth::middleware::AuthenticatedUser;
use crate::cache::{RedisCache, keys};
use crate::db::portfolio as portfolio_db;
use crate::handlers::validation_error;
use crate::models::portfolio::{CreatePortfolioItem, UpdatePortfolioItem};
use crate::models::users::Roles;

/// POST /api/portfolio — a designer adds a showcase item.
pub async fn create_item(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<Arc<RedisCache>>,
    body: web::Json<CreatePortfolioItem>,
) -> impl Responder {
    if user.0.role != Roles::Designer {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "error": "Only designers can manage a portfolio",
        }));
    }

    if let Err(errors) = body.validate() {
        return validation_error(errors);
    }

    match portfolio_db::insert_item(db.get_ref(), user.0.id, body.into_inner()).await {
        Ok(item) => {
            let _ = cache.delete(&keys::portfolio(user.0.id)).await;
            HttpResponse::Created().json(item)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to create portfolio item: {e}"),
        })),
    }
}

/// GET /api/portfolio/designer/{designer_id} — public showcase, cache-aside.
pub async fn get_designer_portfolio(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<Arc<RedisCache>>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let designer_id = path.into_inner();
    let cache_key = keys::portfolio(designer_id);

    if let Ok(Some(cached)) = cache.get::<serde_json::Value>(&cache_key).await {
        return HttpResponse::Ok().json(cached);
    }

    match portfolio_db::get_items_by_designer(db.get_ref(), designer_id).await {
        Ok(items) => {
            let _ = cache.set(&cache_key, &items, Some(600)).await;
            HttpResponse::Ok().json(items)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch portfolio: {e}"),
        })),
    }
}

/// PUT /api/portfolio/{id} — owner-only update.
pub async fn update_item(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<Arc<RedisCache>>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePortfolioItem>,
) -> impl Responder {
    let item_id = path.into_inner();

    if let Err(errors) = body.validate() {
        return validation_error(errors);
    }

    let item = match portfolio_db::get_item_by_id(db.get_ref(), item_id).await {
        Ok(Some(i)) => i,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Portfolio item {item_id} not found"),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    if item.designer_id != user.0.id {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "error": "You can only edit your own portfolio",
        }));
    }

    match portfolio_db::update_item(db.get_ref(), item_id, body.into_inner()).await {
        Ok(updated) => {
            let _ = cache.delete(&keys::portfolio(user.0.id)).await;
            HttpResponse::Ok().json(updated)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to update portfolio item: {e}"),
        })),
    }
}

/// DELETE /api/portfolio/{id} — owner or admin.
pub async fn delete_item(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<Arc<RedisCache>>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let item_id = path.into_inner();

    let item = match portfolio_db::get_item_by_id(db.get_ref(), item_id).await {
        Ok(Some(i)) => i,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Portfolio item {item_id} not found"),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    if item.designer_id != user.0.id && user.0.role != Roles::Admin {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "error": "You can only delete your own portfolio items",
        }));
    }

    match portfolio_db::delete_item(db.get_ref(), item_id).await {
        Ok(_) => {
            let _ = cache.delete(&keys::portfolio(item.designer_id)).await;
            HttpResponse::Ok().json(serde_json::json!({ "deleted": item_id }))
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to delete portfolio item: {e}"),
        })),
    }
}
