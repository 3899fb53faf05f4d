use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum PortfolioItems {
    Table,
    Id,
    DesignerId,
    Title,
    Description,
    BeforeImageUrl,
    AfterImageUrl,
    Category,
    Tags,
    IsFeatured,
    CreatedAt,
    UpdatedAt,
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
                    .table(PortfolioItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PortfolioItems::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PortfolioItems::DesignerId).uuid().not_null())
                    .col(ColumnDef::new(PortfolioItems::Title).string().not_null())
                    .col(ColumnDef::new(PortfolioItems::Description).text())
                    .col(ColumnDef::new(PortfolioItems::BeforeImageUrl).string())
                    .col(
                        ColumnDef::new(PortfolioItems::AfterImageUrl)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PortfolioItems::Category).string())
                    .col(ColumnDef::new(PortfolioItems::Tags).json_binary())
                    .col(
                        ColumnDef::new(PortfolioItems::IsFeatured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(PortfolioItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PortfolioItems::UpdatedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_portfolio_items_designer_id")
                            .from(PortfolioItems::Table, PortfolioItems::DesignerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PortfolioItems::Table).to_owned())
            .await
    }
}
