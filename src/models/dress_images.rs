use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Whether a photo shows the garment as it is or a look the customer wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ImageType {
    #[sea_orm(string_value = "original")]
    Original,
    #[sea_orm(string_value = "inspiration")]
    Inspiration,
}

/// SeaORM entity for the `dress_images` table. Rows are append-only.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dress_images")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub request_id: Uuid,
    pub image_url: String,
    pub image_type: ImageType,
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
}

impl Related<super::requests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Request.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Body for POST /api/requests/{id}/images (e.g. adding inspiration shots).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddImage {
    #[validate(url(message = "Invalid image URL"), length(max = 2000, message = "URL is too long"))]
    pub image_url: String,
    pub image_type: ImageType,
}
