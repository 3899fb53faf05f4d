use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Quotations {
    Table,
    Id,
    RequestId,
    DesignerId,
    Amount,
    EstimatedDays,
    Description,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
enum RedesignRequests {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Quotations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Quotations::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Quotations::RequestId).uuid().not_null())
                    .col(ColumnDef::new(Quotations::DesignerId).uuid().not_null())
                    .col(ColumnDef::new(Quotations::Amount).big_integer().not_null())
                    .col(
                        ColumnDef::new(Quotations::EstimatedDays)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Quotations::Description).text())
                    .col(ColumnDef::new(Quotations::Status).string().not_null())
                    .col(
                        ColumnDef::new(Quotations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_quotations_request_id")
                            .from(Quotations::Table, Quotations::RequestId)
                            .to(RedesignRequests::Table, RedesignRequests::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_quotations_designer_id")
                            .from(Quotations::Table, Quotations::DesignerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One quotation per designer per request.
        manager
            .create_index(
                Index::create()
                    .name("idx_quotations_request_designer_unique")
                    .table(Quotations::Table)
                    .col(Quotations::RequestId)
                    .col(Quotations::DesignerId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Quotations::Table).to_owned())
            .await
    }
}
