//! Migration to create the locations table.
//!
//! Every location belongs to exactly one organisation; the foreign key backs the
//! existence check performed by the repository before insert.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Locations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Locations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Locations::OrganisationId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Locations::LocationName).string().not_null())
                    .col(ColumnDef::new(Locations::Latitude).double().not_null())
                    .col(ColumnDef::new(Locations::Longitude).double().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_locations_organisation_id")
                            .from(Locations::Table, Locations::OrganisationId)
                            .to(Organisations::Table, Organisations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Locations are always listed per organisation
        manager
            .create_index(
                Index::create()
                    .name("idx_locations_organisation_id")
                    .table(Locations::Table)
                    .col(Locations::OrganisationId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Dropping the table drops idx_locations_organisation_id with it
        manager
            .drop_table(Table::drop().table(Locations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Locations {
    Table,
    Id,
    OrganisationId,
    LocationName,
    Latitude,
    Longitude,
}

#[derive(DeriveIden)]
enum Organisations {
    Table,
    Id,
}
