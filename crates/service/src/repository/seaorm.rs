//! SeaORM-backed gateway adapters, one per entity.
//!
//! `save` mirrors ORM save semantics: an unset identity (0) inserts, a set
//! identity updates the existing row or inserts under that id when no row
//! exists. Entity hooks (`ActiveModelBehavior`) run on every path.
use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait, Set};

use models::{booking, bus, tour_package};

use crate::errors::ServiceError;
use crate::repository::CrudRepository;

pub struct BusRepository {
    pub db: DatabaseConnection,
}

impl BusRepository {
    fn to_active(m: bus::Model, keep_id: bool) -> bus::ActiveModel {
        bus::ActiveModel {
            id: if keep_id { Set(m.id) } else { NotSet },
            bus_number: Set(m.bus_number),
            driver_name: Set(m.driver_name),
            route: Set(m.route),
            total_seats: Set(m.total_seats),
            available_seats: Set(m.available_seats),
        }
    }
}

#[async_trait]
impl CrudRepository for BusRepository {
    type Entity = bus::Model;
    type Id = i64;

    async fn save(&self, entity: bus::Model) -> Result<bus::Model, ServiceError> {
        if entity.id == 0 {
            return Ok(Self::to_active(entity, false).insert(&self.db).await?);
        }
        let id = entity.id;
        let am = Self::to_active(entity, true);
        if self.exists_by_id(id).await? {
            Ok(am.update(&self.db).await?)
        } else {
            Ok(am.insert(&self.db).await?)
        }
    }

    async fn find_all(&self) -> Result<Vec<bus::Model>, ServiceError> {
        Ok(bus::Entity::find().all(&self.db).await?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<bus::Model>, ServiceError> {
        Ok(bus::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        let n = bus::Entity::find_by_id(id).count(&self.db).await?;
        Ok(n > 0)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        bus::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }

    fn assign_id(mut entity: bus::Model, id: i64) -> bus::Model {
        entity.id = id;
        entity
    }
}

pub struct TourPackageRepository {
    pub db: DatabaseConnection,
}

impl TourPackageRepository {
    fn to_active(m: tour_package::Model, keep_id: bool) -> tour_package::ActiveModel {
        tour_package::ActiveModel {
            id: if keep_id { Set(m.id) } else { NotSet },
            package_name: Set(m.package_name),
            description: Set(m.description),
            price: Set(m.price),
            duration_days: Set(m.duration_days),
        }
    }
}

#[async_trait]
impl CrudRepository for TourPackageRepository {
    type Entity = tour_package::Model;
    type Id = i64;

    async fn save(&self, entity: tour_package::Model) -> Result<tour_package::Model, ServiceError> {
        if entity.id == 0 {
            return Ok(Self::to_active(entity, false).insert(&self.db).await?);
        }
        let id = entity.id;
        let am = Self::to_active(entity, true);
        if self.exists_by_id(id).await? {
            Ok(am.update(&self.db).await?)
        } else {
            Ok(am.insert(&self.db).await?)
        }
    }

    async fn find_all(&self) -> Result<Vec<tour_package::Model>, ServiceError> {
        Ok(tour_package::Entity::find().all(&self.db).await?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<tour_package::Model>, ServiceError> {
        Ok(tour_package::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        let n = tour_package::Entity::find_by_id(id).count(&self.db).await?;
        Ok(n > 0)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        tour_package::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }

    fn assign_id(mut entity: tour_package::Model, id: i64) -> tour_package::Model {
        entity.id = id;
        entity
    }
}

pub struct BookingRepository {
    pub db: DatabaseConnection,
}

impl BookingRepository {
    fn to_active(m: booking::Model, keep_id: bool) -> booking::ActiveModel {
        booking::ActiveModel {
            id: if keep_id { Set(m.id) } else { NotSet },
            customer_name: Set(m.customer_name),
            booking_date: Set(m.booking_date),
            bus_id: Set(m.bus_id),
            tour_package_id: Set(m.tour_package_id),
            seats_booked: Set(m.seats_booked),
            seat_no: Set(m.seat_no),
        }
    }
}

#[async_trait]
impl CrudRepository for BookingRepository {
    type Entity = booking::Model;
    type Id = i64;

    async fn save(&self, entity: booking::Model) -> Result<booking::Model, ServiceError> {
        if entity.id == 0 {
            return Ok(Self::to_active(entity, false).insert(&self.db).await?);
        }
        let id = entity.id;
        let am = Self::to_active(entity, true);
        if self.exists_by_id(id).await? {
            Ok(am.update(&self.db).await?)
        } else {
            Ok(am.insert(&self.db).await?)
        }
    }

    async fn find_all(&self) -> Result<Vec<booking::Model>, ServiceError> {
        Ok(booking::Entity::find().all(&self.db).await?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<booking::Model>, ServiceError> {
        Ok(booking::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        let n = booking::Entity::find_by_id(id).count(&self.db).await?;
        Ok(n > 0)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        booking::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }

    fn assign_id(mut entity: booking::Model, id: i64) -> booking::Model {
        entity.id = id;
        entity
    }
}
