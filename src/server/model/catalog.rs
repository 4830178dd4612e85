//! Service categories and the add-ons each one supports.

use crate::server::model::{
    money::Money,
    order::{OrderOption, OrderOptions, Route},
};

/// Default catalog: name, base fare in major units, supported options.
pub const DEFAULT_CATALOG: [(&str, i64, &[OrderOption]); 3] = [
    ("econom", 120, &[OrderOption::Child]),
    ("comfort", 320, &[OrderOption::Child, OrderOption::Pet]),
    ("business", 820, &[OrderOption::Child, OrderOption::Pet]),
];

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceCategory {
    pub id: i32,
    pub name: String,
    pub base_fare: Money,
    /// Options riders may attach to orders of this category.
    pub supported_options: OrderOptions,
}

impl ServiceCategory {
    pub fn from_entity(
        entity: entity::service_category::Model,
        supported_options: OrderOptions,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            base_fare: Money::from_minor(entity.base_fare),
            supported_options,
        }
    }
}

impl ServiceCategory {
    /// Deterministic fare for a route: base fare plus one major unit per route unit.
    ///
    /// `None` when the fare does not fit in `Money`.
    pub fn quote(&self, route: &Route) -> Option<Money> {
        let surcharge = route.length_units().checked_mul(Money::SCALE)?;

        self.base_fare.checked_add(Money::from_minor(surcharge))
    }
}
