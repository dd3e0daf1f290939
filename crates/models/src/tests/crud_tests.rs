use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, NotSet, Set,
};
use uuid::Uuid;

use crate::db::connect;
use crate::{booking, bus, tour_package};

/// Connect and migrate; `None` means the environment has no database and
/// the test should pass as a skip.
async fn setup_test_db() -> Result<Option<DatabaseConnection>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL missing; skip db tests");
        return Ok(None);
    }
    let db = connect().await?;
    // Concurrent tests may race on the first migration; the schema exists
    // either way.
    if let Err(e) = migration::Migrator::up(&db, None).await {
        eprintln!("migrations notice: {}", e);
    }
    Ok(Some(db))
}

fn unique_bus_number() -> String {
    format!("B{}", &Uuid::new_v4().simple().to_string()[..8])
}

fn new_bus(bus_number: &str) -> bus::ActiveModel {
    bus::ActiveModel {
        id: NotSet,
        bus_number: Set(bus_number.to_string()),
        driver_name: Set("Jane Doe".into()),
        route: Set("CityA-CityB-CityC".into()),
        total_seats: Set(40),
        // Deliberately wrong; before_save must overwrite it.
        available_seats: Set(7),
    }
}

#[tokio::test]
async fn bus_crud_and_seat_hook() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let number = unique_bus_number();
    let created = new_bus(&number).insert(&db).await?;
    assert!(created.id > 0);
    assert_eq!(created.available_seats, created.total_seats);

    let found = bus::Entity::find_by_id(created.id).one(&db).await?;
    let found = found.expect("bus exists");
    assert_eq!(found.bus_number, number);
    assert_eq!(found.available_seats, 40);

    // The hook also fires on update: shrinking the capacity resets
    // available seats to the new total.
    let mut am: bus::ActiveModel = found.into();
    am.total_seats = Set(30);
    let updated = am.update(&db).await?;
    assert_eq!(updated.total_seats, 30);
    assert_eq!(updated.available_seats, 30);

    bus::Entity::delete_by_id(created.id).exec(&db).await?;
    let gone = bus::Entity::find_by_id(created.id).one(&db).await?;
    assert!(gone.is_none());
    Ok(())
}

#[tokio::test]
async fn duplicate_bus_number_rejected_by_storage() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let number = unique_bus_number();
    let first = new_bus(&number).insert(&db).await?;
    let second = new_bus(&number).insert(&db).await;
    assert!(second.is_err(), "unique constraint must reject the duplicate");

    bus::Entity::delete_by_id(first.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn booking_requires_existing_bus() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let orphan = booking::ActiveModel {
        id: NotSet,
        customer_name: Set("Alice Smith".into()),
        booking_date: Set(sea_orm::prelude::Date::from_ymd_opt(2026, 8, 6).unwrap()),
        bus_id: Set(i64::MAX - 1),
        tour_package_id: Set(None),
        seats_booked: Set(2),
        seat_no: Set(None),
    };
    let res = orphan.insert(&db).await;
    assert!(res.is_err(), "foreign key must reject a missing bus");
    Ok(())
}

#[tokio::test]
async fn booking_roundtrip_with_relations() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let bus_row = new_bus(&unique_bus_number()).insert(&db).await?;
    let package = tour_package::ActiveModel {
        id: NotSet,
        package_name: Set("Hill Country Tour".into()),
        description: Set(None),
        price: Set(299.99),
        duration_days: Set(3),
    }
    .insert(&db)
    .await?;

    let created = booking::ActiveModel {
        id: NotSet,
        customer_name: Set("Alice Smith".into()),
        booking_date: Set(sea_orm::prelude::Date::from_ymd_opt(2026, 8, 6).unwrap()),
        bus_id: Set(bus_row.id),
        tour_package_id: Set(Some(package.id)),
        seats_booked: Set(2),
        seat_no: Set(Some("A1,A2".into())),
    }
    .insert(&db)
    .await?;

    let related_bus = created.find_related(bus::Entity).one(&db).await?;
    assert_eq!(related_bus.map(|b| b.id), Some(bus_row.id));
    let related_package = created.find_related(tour_package::Entity).one(&db).await?;
    assert_eq!(related_package.map(|p| p.id), Some(package.id));

    booking::Entity::delete_by_id(created.id).exec(&db).await?;
    tour_package::Entity::delete_by_id(package.id).exec(&db).await?;
    bus::Entity::delete_by_id(bus_row.id).exec(&db).await?;
    Ok(())
}
