use actix_web::FromRequest;
use actix_web::{Error, HttpRequest, dev::Payload, web};
use sea_orm::DatabaseConnection;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::auth::jwks::JwksCache;
use crate::auth::jwt;
use crate::db::users::find_or_create_from_auth;
use crate::models::users::{self, CreateUserFromAuth, Roles};

/// Extractor that validates the Bearer token and resolves the local user row,
/// creating it from JWT claims on first sight. Handlers take this as an
/// argument to require authentication.
pub struct AuthenticatedUser(pub users::Model);

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let auth_header = req
                .headers()
                .get("Authorization")
                .and_then(|v| v.to_str().ok())
                .ok_or_else(|| {
                    actix_web::error::ErrorUnauthorized("Missing Authorization header")
                })?;

            let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
                actix_web::error::ErrorUnauthorized("Authorization header must be: Bearer <token>")
            })?;

            let jwks_cache = req.app_data::<web::Data<Arc<JwksCache>>>().ok_or_else(|| {
                actix_web::error::ErrorInternalServerError("JWKS cache not configured")
            })?;

            let claims = jwt::validate_token(token, jwks_cache.get_ref())
                .await
                .map_err(|e| actix_web::error::ErrorUnauthorized(format!("Invalid token: {e}")))?;

            let user_id = claims
                .user_id()
                .map_err(actix_web::error::ErrorUnauthorized)?;

            let email = claims
                .user_email()
                .ok_or_else(|| actix_web::error::ErrorUnauthorized("No email in token claims"))?;

            let db = req
                .app_data::<web::Data<DatabaseConnection>>()
                .ok_or_else(|| {
                    actix_web::error::ErrorInternalServerError("Database not configured")
                })?;

            // New accounts start as customers; complete-profile can change the
            // role once.
            let user = find_or_create_from_auth(
                db.get_ref(),
                CreateUserFromAuth {
                    id: user_id,
                    email,
                    full_name: claims.display_name(),
                    avatar_url: claims.avatar_url(),
                    role: Roles::Customer,
                },
            )
            .await
            .map_err(|e| {
                actix_web::error::ErrorInternalServerError(format!("Database error: {e}"))
            })?;

            Ok(AuthenticatedUser(user))
        })
    }
}
