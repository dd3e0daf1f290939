use sea_orm::{DatabaseConnection, EntityTrait};
use serde::Serialize;

use models::{booking, bus, tour_package};

use crate::errors::ServiceError;

/// Transport projection for a booking: the referenced bus and tour package
/// are embedded by value, the way callers expect them in JSON.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingView {
    pub id: i64,
    pub customer_name: String,
    pub booking_date: sea_orm::prelude::Date,
    pub bus: bus::Model,
    pub tour_package: Option<tour_package::Model>,
    pub seats_booked: i32,
    pub seat_no: Option<String>,
}

pub async fn load_one(db: &DatabaseConnection, b: booking::Model) -> Result<BookingView, ServiceError> {
    let bus = bus::Entity::find_by_id(b.bus_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::Db(format!("booking {} references missing bus {}", b.id, b.bus_id)))?;
    let tour_package = match b.tour_package_id {
        Some(pid) => tour_package::Entity::find_by_id(pid).one(db).await?,
        None => None,
    };
    Ok(BookingView {
        id: b.id,
        customer_name: b.customer_name,
        booking_date: b.booking_date,
        bus,
        tour_package,
        seats_booked: b.seats_booked,
        seat_no: b.seat_no,
    })
}

pub async fn load_all(db: &DatabaseConnection, rows: Vec<booking::Model>) -> Result<Vec<BookingView>, ServiceError> {
    let mut out = Vec::with_capacity(rows.len());
    for b in rows {
        out.push(load_one(db, b).await?);
    }
    Ok(out)
}
