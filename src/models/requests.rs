use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Redesign request status. A closed enum instead of the free-text column the
/// old client wrote ad hoc — every status change goes through
/// `workflow::transition`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Status {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "quoted")]
    Quoted,
    #[sea_orm(string_value = "accepted")]
    Accepted,
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Completed | Status::Cancelled)
    }
}

/// SeaORM entity for the `redesign_requests` table — the central workflow row.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "redesign_requests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub style_preference: Option<String>,
    pub budget_min: Option<i64>,
    pub budget_max: Option<i64>,
    pub timeline_weeks: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub pickup_address: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub delivery_address: Option<String>,
    pub pickup_confirmed: bool,
    pub pickup_date: Option<DateTimeUtc>,
    pub delivery_confirmed: bool,
    pub delivery_date: Option<DateTimeUtc>,
    pub customer_id: Uuid,
    /// Set only by quotation acceptance, inside the same transaction.
    pub designer_id: Option<Uuid>,
    pub delivery_partner_id: Option<Uuid>,
    pub status: Status,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::CustomerId",
        to = "super::users::Column::Id"
    )]
    Customer,
    #[sea_orm(has_many = "super::quotations::Entity")]
    Quotations,
    #[sea_orm(has_many = "super::dress_images::Entity")]
    DressImages,
    #[sea_orm(has_many = "super::assignments::Entity")]
    DeliveryAssignments,
    #[sea_orm(has_many = "super::messages::Entity")]
    Messages,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::quotations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quotations.def()
    }
}

impl Related<super::dress_images::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DressImages.def()
    }
}

impl Related<super::assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DeliveryAssignments.def()
    }
}

impl Related<super::messages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Messages.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// One image attached to a new request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewDressImage {
    #[validate(url(message = "Invalid image URL"), length(max = 2000, message = "URL is too long"))]
    pub image_url: String,
    pub image_type: super::dress_images::ImageType,
}

/// Request body for POST /api/requests. At least one image is required —
/// a request with no photos of the garment cannot be quoted on.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRequest {
    #[validate(length(min = 3, max = 200, message = "Title must be between 3 and 200 characters"))]
    pub title: String,
    #[validate(length(max = 5000, message = "Description must be less than 5000 characters"))]
    pub description: Option<String>,
    #[validate(length(max = 100, message = "Style preference is too long"))]
    pub style_preference: Option<String>,
    #[validate(range(min = 0, message = "Budget cannot be negative"))]
    pub budget_min: Option<i64>,
    #[validate(range(min = 0, message = "Budget cannot be negative"))]
    pub budget_max: Option<i64>,
    #[validate(range(min = 1, max = 52, message = "Timeline must be between 1 and 52 weeks"))]
    pub timeline_weeks: Option<i32>,
    #[validate(length(min = 5, max = 500, message = "Pickup address must be between 5 and 500 characters"))]
    pub pickup_address: String,
    #[validate(length(min = 5, max = 500, message = "Delivery address must be between 5 and 500 characters"))]
    pub delivery_address: String,
    #[validate(length(min = 1, message = "At least one dress photo is required"))]
    #[validate(nested)]
    pub images: Vec<NewDressImage>,
}

/// Query params for the admin request list.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestListQuery {
    pub status: Option<Status>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl RequestListQuery {
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(20).min(100)
    }
}
