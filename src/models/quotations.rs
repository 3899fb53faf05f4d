use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Quotation status stored as a lowercase string in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Status {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "accepted")]
    Accepted,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

/// SeaORM entity for the `quotations` table.
///
/// (request_id, designer_id) carries a unique index — one bid per designer per
/// request is a database guarantee, not a client-side lookup.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "quotations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub request_id: Uuid,
    pub designer_id: Uuid,
    /// Whole rupees.
    pub amount: i64,
    pub estimated_days: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub status: Status,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::requests::Entity",
        from = "Column::RequestId",
        to = "super::requests::Column::Id"
    )]
    Request,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::DesignerId",
        to = "super::users::Column::Id"
    )]
    Designer,
}

impl Related<super::requests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Request.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Designer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Request body for POST /api/quotations. `designer_id` comes from the JWT.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuotation {
    pub request_id: Uuid,
    #[validate(range(min = 100, max = 10_000_000, message = "Amount must be between ₹100 and ₹1,00,00,000"))]
    pub amount: i64,
    #[validate(range(min = 1, max = 365, message = "Estimated days must be between 1 and 365"))]
    pub estimated_days: i32,
    #[validate(length(max = 2000, message = "Description must be less than 2000 characters"))]
    pub description: Option<String>,
}
