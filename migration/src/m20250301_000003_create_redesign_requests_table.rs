use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum RedesignRequests {
    Table,
    Id,
    Title,
    Description,
    StylePreference,
    BudgetMin,
    BudgetMax,
    TimelineWeeks,
    PickupAddress,
    DeliveryAddress,
    PickupConfirmed,
    PickupDate,
    DeliveryConfirmed,
    DeliveryDate,
    CustomerId,
    DesignerId,
    DeliveryPartnerId,
    Status,
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
                    .table(RedesignRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RedesignRequests::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RedesignRequests::Title).string().not_null())
                    .col(ColumnDef::new(RedesignRequests::Description).text())
                    .col(ColumnDef::new(RedesignRequests::StylePreference).string())
                    .col(ColumnDef::new(RedesignRequests::BudgetMin).big_integer())
                    .col(ColumnDef::new(RedesignRequests::BudgetMax).big_integer())
                    .col(ColumnDef::new(RedesignRequests::TimelineWeeks).integer())
                    .col(ColumnDef::new(RedesignRequests::PickupAddress).text())
                    .col(ColumnDef::new(RedesignRequests::DeliveryAddress).text())
                    .col(
                        ColumnDef::new(RedesignRequests::PickupConfirmed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(RedesignRequests::PickupDate).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(RedesignRequests::DeliveryConfirmed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(RedesignRequests::DeliveryDate).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(RedesignRequests::CustomerId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(RedesignRequests::DesignerId).uuid())
                    .col(ColumnDef::new(RedesignRequests::DeliveryPartnerId).uuid())
                    .col(
                        ColumnDef::new(RedesignRequests::Status)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RedesignRequests::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(RedesignRequests::UpdatedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_redesign_requests_customer_id")
                            .from(RedesignRequests::Table, RedesignRequests::CustomerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_redesign_requests_designer_id")
                            .from(RedesignRequests::Table, RedesignRequests::DesignerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_redesign_requests_delivery_partner_id")
                            .from(RedesignRequests::Table, RedesignRequests::DeliveryPartnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RedesignRequests::Table).to_owned())
            .await
    }
}
