use sea_orm::{entity::prelude::*, ActiveValue, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::validate::Violations;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "buses")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(default)]
    pub id: i64,
    #[sea_orm(unique)]
    #[serde(default)]
    pub bus_number: String,
    #[serde(default)]
    pub driver_name: String,
    #[serde(default)]
    pub route: String,
    #[serde(default)]
    pub total_seats: i32,
    #[serde(default)]
    pub available_seats: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// Every persist, insert or update, forces available seats back to the
    /// bus capacity. Callers cannot override it.
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let total = match &self.total_seats {
            ActiveValue::Set(v) | ActiveValue::Unchanged(v) => Some(*v),
            ActiveValue::NotSet => None,
        };
        if let Some(total) = total {
            self.available_seats = Set(total);
        }
        Ok(self)
    }
}

/// Collect every violated field constraint for a bus payload.
pub fn validate(m: &Model) -> Result<(), Violations> {
    let mut v = Violations::new();
    if m.bus_number.trim().is_empty() {
        v.add("busNumber", "Bus number is required");
    } else if !(3..=20).contains(&m.bus_number.chars().count()) {
        v.add("busNumber", "Bus number must be between 3 and 20 characters");
    }
    if m.driver_name.trim().is_empty() {
        v.add("driverName", "Driver name is required");
    } else if !(2..=100).contains(&m.driver_name.chars().count()) {
        v.add("driverName", "Driver name must be between 2 and 100 characters");
    }
    if m.route.trim().is_empty() {
        v.add("route", "Route is required");
    } else if !(5..=200).contains(&m.route.chars().count()) {
        v.add("route", "Route must be between 5 and 200 characters");
    }
    if m.total_seats <= 0 {
        v.add("totalSeats", "Total seats must be positive");
    } else if m.total_seats > 100 {
        v.add("totalSeats", "Total seats cannot exceed 100");
    }
    if m.available_seats < 0 {
        v.add("availableSeats", "Available seats cannot be negative");
    }
    v.into_result()
}
