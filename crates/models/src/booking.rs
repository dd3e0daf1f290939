use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::validate::Violations;
use crate::{bus, tour_package};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookings")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub customer_name: String,
    pub booking_date: Date,
    pub bus_id: i64,
    #[serde(default)]
    pub tour_package_id: Option<i64>,
    #[serde(default)]
    pub seats_booked: i32,
    #[serde(default)]
    pub seat_no: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Bus,
    TourPackage,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Bus => Entity::belongs_to(bus::Entity)
                .from(Column::BusId)
                .to(bus::Column::Id)
                .into(),
            Relation::TourPackage => Entity::belongs_to(tour_package::Entity)
                .from(Column::TourPackageId)
                .to(tour_package::Column::Id)
                .into(),
        }
    }
}

impl Related<bus::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bus.def()
    }
}

impl Related<tour_package::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TourPackage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Collect every violated field constraint for a booking payload.
///
/// The bus reference and booking date arrive as options because a payload
/// may omit them entirely; both are required. Seat labels are opaque text,
/// never reconciled against the bus capacity.
pub fn validate(
    customer_name: &str,
    booking_date: Option<Date>,
    bus_id: Option<i64>,
    seats_booked: i32,
    seat_no: Option<&str>,
) -> Result<(), Violations> {
    let mut v = Violations::new();
    if customer_name.trim().is_empty() {
        v.add("customerName", "Customer name is required");
    } else if !(2..=100).contains(&customer_name.chars().count()) {
        v.add("customerName", "Customer name must be between 2 and 100 characters");
    }
    if booking_date.is_none() {
        v.add("bookingDate", "Booking date is required");
    }
    if bus_id.is_none() {
        v.add("bus", "Bus is required");
    }
    if seats_booked <= 0 {
        v.add("seatsBooked", "Seats booked must be positive");
    }
    if let Some(seat_no) = seat_no {
        if seat_no.chars().count() > 500 {
            v.add("seatNo", "Seat numbers cannot exceed 500 characters");
        }
    }
    v.into_result()
}
