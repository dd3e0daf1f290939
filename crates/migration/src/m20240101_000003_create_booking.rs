//! Create `bookings` table.
//!
//! Bus is a required reference; deleting a bus with bookings must fail.
//! Tour package is optional and detaches on delete.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Booking::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_len(Booking::CustomerName, 100).not_null())
                    .col(date(Booking::BookingDate).not_null())
                    .col(big_integer(Booking::BusId).not_null())
                    .col(big_integer_null(Booking::TourPackageId))
                    .col(integer(Booking::SeatsBooked).not_null())
                    .col(string_len_null(Booking::SeatNo, 500))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_bus")
                            .from(Booking::Table, Booking::BusId)
                            .to(Bus::Table, Bus::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_tour_package")
                            .from(Booking::Table, Booking::TourPackageId)
                            .to(TourPackage::Table, TourPackage::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Booking::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Booking {
    #[sea_orm(iden = "bookings")]
    Table,
    Id,
    CustomerName,
    BookingDate,
    BusId,
    TourPackageId,
    SeatsBooked,
    SeatNo,
}

#[derive(DeriveIden)]
enum Bus {
    #[sea_orm(iden = "buses")]
    Table,
    Id,
}

#[derive(DeriveIden)]
enum TourPackage {
    #[sea_orm(iden = "tour_packages")]
    Table,
    Id,
}
