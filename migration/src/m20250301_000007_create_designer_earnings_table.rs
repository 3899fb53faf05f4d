use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum DesignerEarnings {
    Table,
    Id,
    QuotationId,
    RequestId,
    DesignerId,
    Amount,
    PlatformFee,
    NetAmount,
    Status,
    PaidAt,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Quotations {
    Table,
    Id,
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
                    .table(DesignerEarnings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DesignerEarnings::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DesignerEarnings::QuotationId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DesignerEarnings::RequestId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DesignerEarnings::DesignerId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DesignerEarnings::Amount)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DesignerEarnings::PlatformFee)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DesignerEarnings::NetAmount)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(DesignerEarnings::Status).string().not_null())
                    .col(ColumnDef::new(DesignerEarnings::PaidAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(DesignerEarnings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_designer_earnings_quotation_id")
                            .from(DesignerEarnings::Table, DesignerEarnings::QuotationId)
                            .to(Quotations::Table, Quotations::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_designer_earnings_request_id")
                            .from(DesignerEarnings::Table, DesignerEarnings::RequestId)
                            .to(RedesignRequests::Table, RedesignRequests::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_designer_earnings_designer_id")
                            .from(DesignerEarnings::Table, DesignerEarnings::DesignerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One earnings row per accepted quotation.
        manager
            .create_index(
                Index::create()
                    .name("idx_designer_earnings_quotation_unique")
                    .table(DesignerEarnings::Table)
                    .col(DesignerEarnings::QuotationId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DesignerEarnings::Table).to_owned())
            .await
    }
}
