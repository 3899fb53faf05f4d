use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Platform roles, stored as lowercase strings in a Postgres TEXT column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Roles {
    #[sea_orm(string_value = "customer")]
    Customer,
    #[sea_orm(string_value = "designer")]
    Designer,
    #[sea_orm(string_value = "delivery_partner")]
    DeliveryPartner,
    #[sea_orm(string_value = "admin")]
    Admin,
}

/// SeaORM entity for the `users` table.
///
/// The primary key is the Supabase auth UUID, so a row can be created lazily
/// the first time a valid JWT is seen.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub address: Option<String>,
    pub avatar_url: Option<String>,
    pub role: Roles,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::requests::Entity")]
    Requests,
    #[sea_orm(has_many = "super::portfolio::Entity")]
    PortfolioItems,
    #[sea_orm(has_one = "super::designer_profiles::Entity")]
    DesignerProfile,
}

impl Related<super::requests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Requests.def()
    }
}

impl Related<super::portfolio::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PortfolioItems.def()
    }
}

impl Related<super::designer_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DesignerProfile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs (not stored in DB, used for request bodies) ──

/// Used internally by the auth middleware to create a user from JWT claims.
#[derive(Debug, Clone)]
pub struct CreateUserFromAuth {
    pub id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub role: Roles,
}

/// Used by `POST /api/auth/complete-profile` after first login.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CompleteProfile {
    pub role: Option<Roles>,
    #[validate(length(max = 100, message = "Name must be less than 100 characters"))]
    pub full_name: Option<String>,
    #[validate(length(max = 20, message = "Phone number is too long"))]
    pub phone: Option<String>,
    #[validate(length(max = 100, message = "City name is too long"))]
    pub city: Option<String>,
    #[validate(length(max = 500, message = "Address is too long"))]
    pub address: Option<String>,
    #[validate(url(message = "Invalid URL format"))]
    pub avatar_url: Option<String>,
}

/// Profile fields a user can change about themselves.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUser {
    #[validate(length(max = 100, message = "Name must be less than 100 characters"))]
    pub full_name: Option<String>,
    #[validate(length(max = 20, message = "Phone number is too long"))]
    pub phone: Option<String>,
    #[validate(length(max = 100, message = "City name is too long"))]
    pub city: Option<String>,
    #[validate(length(max = 500, message = "Address is too long"))]
    pub address: Option<String>,
    #[validate(url(message = "Invalid URL format"))]
    pub avatar_url: Option<String>,
}

/// A safe user representation for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub avatar_url: Option<String>,
    pub role: Roles,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

impl From<Model> for UserResponse {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            email: m.email,
            full_name: m.full_name,
            phone: m.phone,
            city: m.city,
            address: m.address,
            avatar_url: m.avatar_url,
            role: m.role,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
