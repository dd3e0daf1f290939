use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Bookings: index on bus_id
        manager
            .create_index(
                Index::create()
                    .name("idx_booking_bus")
                    .table(Booking::Table)
                    .col(Booking::BusId)
                    .to_owned(),
            )
            .await?;

        // Bookings: index on tour_package_id
        manager
            .create_index(
                Index::create()
                    .name("idx_booking_tour_package")
                    .table(Booking::Table)
                    .col(Booking::TourPackageId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_booking_bus").table(Booking::Table).to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_booking_tour_package")
                    .table(Booking::Table)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Booking {
    #[sea_orm(iden = "bookings")]
    Table,
    BusId,
    TourPackageId,
}
