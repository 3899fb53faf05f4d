use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum DesignerProfiles {
    Table,
    Id,
    UserId,
    Bio,
    Specialties,
    Rating,
    IsVerified,
    IsAvailable,
    PriceRangeMin,
    PriceRangeMax,
    ExperienceYears,
    TotalProjects,
    PortfolioUrl,
    CreatedAt,
    UpdatedAt,
}

/// Re-declare parent table identifiers for foreign-key references.
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
                    .table(DesignerProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DesignerProfiles::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DesignerProfiles::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(DesignerProfiles::Bio).text())
                    .col(ColumnDef::new(DesignerProfiles::Specialties).json_binary())
                    .col(ColumnDef::new(DesignerProfiles::Rating).double())
                    .col(
                        ColumnDef::new(DesignerProfiles::IsVerified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(DesignerProfiles::IsAvailable)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(DesignerProfiles::PriceRangeMin).big_integer())
                    .col(ColumnDef::new(DesignerProfiles::PriceRangeMax).big_integer())
                    .col(ColumnDef::new(DesignerProfiles::ExperienceYears).integer())
                    .col(
                        ColumnDef::new(DesignerProfiles::TotalProjects)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(DesignerProfiles::PortfolioUrl).string())
                    .col(
                        ColumnDef::new(DesignerProfiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(DesignerProfiles::UpdatedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_designer_profiles_user_id")
                            .from(DesignerProfiles::Table, DesignerProfiles::UserId)
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
            .drop_table(Table::drop().table(DesignerProfiles::Table).to_owned())
            .await
    }
}
