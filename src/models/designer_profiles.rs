use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// SeaORM entity for the `designer_profiles` table — public-facing designer
/// metadata on top of a `users` row with the designer role.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "designer_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    /// JSON array of specialty strings, e.g. ["bridal", "upcycling"].
    #[sea_orm(column_type = "Json", nullable)]
    pub specialties: Option<Json>,
    #[sea_orm(column_type = "Double", nullable)]
    pub rating: Option<f64>,
    pub is_verified: bool,
    pub is_available: bool,
    pub price_range_min: Option<i64>,
    pub price_range_max: Option<i64>,
    pub experience_years: Option<i32>,
    pub total_projects: i32,
    pub portfolio_url: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Body for PUT /api/designers/me — creates the profile on first save.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertDesignerProfile {
    #[validate(length(max = 2000, message = "Bio must be less than 2000 characters"))]
    pub bio: Option<String>,
    pub specialties: Option<Vec<String>>,
    pub is_available: Option<bool>,
    #[validate(range(min = 0, max = 10_000_000, message = "Price out of range"))]
    pub price_range_min: Option<i64>,
    #[validate(range(min = 0, max = 10_000_000, message = "Price out of range"))]
    pub price_range_max: Option<i64>,
    #[validate(range(min = 0, max = 100, message = "Invalid experience years"))]
    pub experience_years: Option<i32>,
    #[validate(url(message = "Invalid URL format"), length(max = 500, message = "URL is too long"))]
    pub portfolio_url: Option<String>,
}

/// Body for PUT /api/designers/{id}/verify (admin only).
#[derive(Debug, Clone, Deserialize)]
pub struct SetVerified {
    pub is_verified: bool,
}
