//! Create `buses` table.
//!
//! `bus_number` carries the uniqueness constraint.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bus::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Bus::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_len(Bus::BusNumber, 20).unique_key().not_null())
                    .col(string_len(Bus::DriverName, 100).not_null())
                    .col(string_len(Bus::Route, 200).not_null())
                    .col(integer(Bus::TotalSeats).not_null())
                    .col(integer(Bus::AvailableSeats).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Bus::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Bus {
    #[sea_orm(iden = "buses")]
    Table,
    Id,
    BusNumber,
    DriverName,
    Route,
    TotalSeats,
    AvailableSeats,
}
