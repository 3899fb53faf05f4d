use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum DressImages {
    Table,
    Id,
    RequestId,
    ImageUrl,
    ImageType,
    CreatedAt,
}

#[derive(DeriveIden)]
enum RedesignRequests {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DressImages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DressImages::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DressImages::RequestId).uuid().not_null())
                    .col(ColumnDef::new(DressImages::ImageUrl).string().not_null())
                    .col(ColumnDef::new(DressImages::ImageType).string().not_null())
                    .col(
                        ColumnDef::new(DressImages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dress_images_request_id")
                            .from(DressImages::Table, DressImages::RequestId)
                            .to(RedesignRequests::Table, RedesignRequests::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DressImages::Table).to_owned())
            .await
    }
}
