use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// SeaORM entity for the `portfolio_items` table — a designer's before/after
/// showcase entries.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "portfolio_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub designer_id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub before_image_url: Option<String>,
    pub after_image_url: String,
    pub category: Option<String>,
    /// JSON array of tag strings.
    #[sea_orm(column_type = "Json", nullable)]
    pub tags: Option<Json>,
    pub is_featured: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::DesignerId",
        to = "super::users::Column::Id"
    )]
    Designer,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Designer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePortfolioItem {
    #[validate(length(min = 2, max = 200, message = "Title must be between 2 and 200 characters"))]
    pub title: String,
    #[validate(length(max = 1000, message = "Description must be less than 1000 characters"))]
    pub description: Option<String>,
    #[validate(url(message = "Invalid image URL"))]
    pub before_image_url: Option<String>,
    #[validate(url(message = "Invalid image URL"))]
    pub after_image_url: String,
    #[validate(length(max = 100, message = "Category is too long"))]
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_featured: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePortfolioItem {
    #[validate(length(min = 2, max = 200, message = "Title must be between 2 and 200 characters"))]
    pub title: Option<String>,
    #[validate(length(max = 1000, message = "Description must be less than 1000 characters"))]
    pub description: Option<String>,
    #[validate(url(message = "Invalid image URL"))]
    pub before_image_url: Option<String>,
    #[validate(url(message = "Invalid image URL"))]
    pub after_image_url: Option<String>,
    #[validate(length(max = 100, message = "Category is too long"))]
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_featured: Option<bool>,
}
