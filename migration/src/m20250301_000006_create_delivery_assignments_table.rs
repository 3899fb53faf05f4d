use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum DeliveryAssignments {
    Table,
    Id,
    RequestId,
    AssignmentType,
    DeliveryPartnerId,
    Status,
    ScheduledDate,
    CompletedDate,
    Notes,
    CreatedAt,
    UpdatedAt,
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
                    .table(DeliveryAssignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DeliveryAssignments::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DeliveryAssignments::RequestId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DeliveryAssignments::AssignmentType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(DeliveryAssignments::DeliveryPartnerId).uuid())
                    .col(
                        ColumnDef::new(DeliveryAssignments::Status)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DeliveryAssignments::ScheduledDate)
                            .timestamp_with_time_zone(),
                    )
                    .col(
                        ColumnDef::new(DeliveryAssignments::CompletedDate)
                            .timestamp_with_time_zone(),
                    )
                    .col(ColumnDef::new(DeliveryAssignments::Notes).text())
                    .col(
                        ColumnDef::new(DeliveryAssignments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DeliveryAssignments::UpdatedAt).timestamp_with_time_zone(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_delivery_assignments_request_id")
                            .from(DeliveryAssignments::Table, DeliveryAssignments::RequestId)
                            .to(RedesignRequests::Table, RedesignRequests::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_delivery_assignments_partner_id")
                            .from(
                                DeliveryAssignments::Table,
                                DeliveryAssignments::DeliveryPartnerId,
                            )
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
            .drop_table(Table::drop().table(DeliveryAssignments::Table).to_owned())
            .await
    }
}
