//! Create `tour_packages` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TourPackage::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TourPackage::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_len(TourPackage::PackageName, 100).not_null())
                    .col(text_null(TourPackage::Description))
                    .col(double(TourPackage::Price).not_null())
                    .col(integer(TourPackage::DurationDays).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(TourPackage::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum TourPackage {
    #[sea_orm(iden = "tour_packages")]
    Table,
    Id,
    PackageName,
    Description,
    Price,
    DurationDays,
}
