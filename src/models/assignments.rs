use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A pickup brings the garment to the designer; a delivery returns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum AssignmentType {
    #[sea_orm(string_value = "pickup")]
    Pickup,
    #[sea_orm(string_value = "delivery")]
    Delivery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Status {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "in_transit")]
    InTransit,
    #[sea_orm(string_value = "completed")]
    Completed,
}

/// SeaORM entity for the `delivery_assignments` table.
///
/// `delivery_partner_id` is null until a partner claims the task. Claiming is
/// a conditional update (`status = 'pending' AND delivery_partner_id IS NULL`)
/// so two partners racing on the same row cannot both win.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "delivery_assignments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub request_id: Uuid,
    pub assignment_type: AssignmentType,
    pub delivery_partner_id: Option<Uuid>,
    pub status: Status,
    pub scheduled_date: Option<DateTimeUtc>,
    pub completed_date: Option<DateTimeUtc>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::requests::Entity",
        from = "Column::RequestId",
        to = "super::requests::Column::Id"
    )]
    Request,
}

impl Related<super::requests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Request.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Body for POST /api/assignments/{id}/complete.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CompleteAssignment {
    #[validate(length(max = 1000, message = "Notes must be less than 1000 characters"))]
    pub notes: Option<String>,
}
