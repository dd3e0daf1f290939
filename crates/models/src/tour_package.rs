use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::validate::Violations;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tour_packages")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub package_name: String,
    #[sea_orm(column_type = "Text", nullable)]
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub duration_days: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

/// Collect every violated field constraint for a tour package payload.
pub fn validate(m: &Model) -> Result<(), Violations> {
    let mut v = Violations::new();
    if m.package_name.trim().is_empty() {
        v.add("packageName", "Package name is required");
    } else if !(2..=100).contains(&m.package_name.chars().count()) {
        v.add("packageName", "Package name must be between 2 and 100 characters");
    }
    if let Some(desc) = &m.description {
        if desc.chars().count() > 1000 {
            v.add("description", "Description cannot exceed 1000 characters");
        }
    }
    if m.price <= 0.0 {
        v.add("price", "Price must be positive");
    }
    if m.duration_days <= 0 {
        v.add("durationDays", "Duration must be positive");
    }
    v.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_package() -> Model {
        Model {
            id: 0,
            package_name: "Hill Country Tour".into(),
            description: Some("Three day tour across the hill country".into()),
            price: 299.99,
            duration_days: 3,
        }
    }

    #[test]
    fn accepts_valid_package() {
        assert!(validate(&valid_package()).is_ok());
    }

    #[test]
    fn description_is_optional() {
        let mut m = valid_package();
        m.description = None;
        assert!(validate(&m).is_ok());
    }

    #[test]
    fn oversized_description_rejected() {
        let mut m = valid_package();
        m.description = Some("d".repeat(1001));
        assert!(validate(&m).unwrap_err().contains_field("description"));

        m.description = Some("d".repeat(1000));
        assert!(validate(&m).is_ok());
    }

    #[test]
    fn non_positive_price_and_duration_rejected() {
        let mut m = valid_package();
        m.price = 0.0;
        m.duration_days = 0;
        let err = validate(&m).unwrap_err();
        assert_eq!(err.len(), 2);
        assert!(err.contains_field("price"));
        assert!(err.contains_field("durationDays"));
    }
}
