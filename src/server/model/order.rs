//! Domain models for orders and their lifecycle.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::{
    model::order::{CreateOrderDto, OrderDto, OrderOptionsDto, PriceQuoteRequestDto},
    server::{
        error::order::OrderError,
        model::{money::Money, payment::Payment},
    },
};

/// Logical order status.
///
/// Transitions only move forward: `Pending -> Accepted -> InProgress -> Completed`
/// (`Accepted -> Completed` is allowed as well).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OrderStatus {
    Pending,
    Accepted,
    InProgress,
    Completed,
}

impl OrderStatus {
    /// Normalizes the stored status; the legacy `created` label reads as `Pending`.
    pub fn from_entity(status: entity::order::OrderStatus) -> Self {
        use entity::order::OrderStatus as Stored;

        match status {
            Stored::Created | Stored::Pending => Self::Pending,
            Stored::Accepted => Self::Accepted,
            Stored::InProgress => Self::InProgress,
            Stored::Completed => Self::Completed,
        }
    }

    pub fn into_entity(self) -> entity::order::OrderStatus {
        use entity::order::OrderStatus as Stored;

        match self {
            Self::Pending => Stored::Pending,
            Self::Accepted => Stored::Accepted,
            Self::InProgress => Stored::InProgress,
            Self::Completed => Stored::Completed,
        }
    }

    /// Every stored label that reads as this status.
    pub fn stored_labels(self) -> Vec<entity::order::OrderStatus> {
        match self {
            Self::Pending => vec![
                entity::order::OrderStatus::Pending,
                entity::order::OrderStatus::Created,
            ],
            other => vec![other.into_entity()],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Add-on a rider can request for a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderOption {
    Child,
    Pet,
}

impl OrderOption {
    pub const ALL: [OrderOption; 2] = [OrderOption::Child, OrderOption::Pet];

    /// Name of the option in the `service_option` catalog.
    pub fn name(self) -> &'static str {
        match self {
            Self::Child => "child",
            Self::Pet => "pet",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.name() == name)
    }
}

impl fmt::Display for OrderOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of add-ons attached to an order or supported by a service category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderOptions {
    pub child: bool,
    pub pet: bool,
}

impl OrderOptions {
    pub fn insert(&mut self, option: OrderOption) {
        match option {
            OrderOption::Child => self.child = true,
            OrderOption::Pet => self.pet = true,
        }
    }

    pub fn contains(&self, option: OrderOption) -> bool {
        match option {
            OrderOption::Child => self.child,
            OrderOption::Pet => self.pet,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = OrderOption> + '_ {
        OrderOption::ALL
            .into_iter()
            .filter(move |option| self.contains(*option))
    }

    pub fn is_empty(&self) -> bool {
        !self.child && !self.pet
    }

    /// Returns `None` when no flag is set so that the block is omitted entirely.
    pub fn into_dto(self) -> Option<OrderOptionsDto> {
        if self.is_empty() {
            return None;
        }

        Some(OrderOptionsDto {
            child: self.child.then_some(true),
            pet: self.pet.then_some(true),
        })
    }

    pub fn from_dto(dto: Option<OrderOptionsDto>) -> Self {
        let dto = dto.unwrap_or_default();
        Self {
            child: dto.child.unwrap_or(false),
            pet: dto.pet.unwrap_or(false),
        }
    }
}

impl FromIterator<OrderOption> for OrderOptions {
    fn from_iter<I: IntoIterator<Item = OrderOption>>(iter: I) -> Self {
        let mut options = OrderOptions::default();
        for option in iter {
            options.insert(option);
        }
        options
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub house: String,
    pub build: Option<String>,
}

/// Pick-up and drop-off of a trip within one city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub city: String,
    pub origin: Address,
    pub destination: Address,
}

impl Route {
    /// Distance proxy used for pricing: character count of both street and house fields.
    pub fn length_units(&self) -> i64 {
        [
            &self.origin.street,
            &self.origin.house,
            &self.destination.street,
            &self.destination.house,
        ]
        .iter()
        .map(|field| field.chars().count() as i64)
        .sum()
    }
}

/// Ride order with its category name and attached options resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub rider_id: String,
    /// Set once the order has been accepted.
    pub driver_id: Option<String>,
    pub service_category: String,
    pub route: Route,
    pub status: OrderStatus,
    pub price: Money,
    pub options: OrderOptions,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Converts an entity model to an order domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The order row
    /// - `service_category` - Name of the order's service category
    /// - `options` - Options attached to the order
    ///
    /// # Returns
    /// - `Order` - The converted domain model with its status normalized
    pub fn from_entity(
        entity: entity::order::Model,
        service_category: String,
        options: OrderOptions,
    ) -> Self {
        Self {
            id: entity.id,
            rider_id: entity.rider_id,
            driver_id: entity.driver_id,
            service_category,
            route: Route {
                city: entity.city,
                origin: Address {
                    street: entity.origin_street,
                    house: entity.origin_house,
                    build: entity.origin_build,
                },
                destination: Address {
                    street: entity.destination_street,
                    house: entity.destination_house,
                    build: entity.destination_build,
                },
            },
            status: OrderStatus::from_entity(entity.status),
            price: Money::from_minor(entity.price),
            options,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id.to_string(),
            city: self.route.city,
            start_trip_street: self.route.origin.street,
            start_trip_house: self.route.origin.house,
            start_trip_build: self.route.origin.build,
            destination_street: self.route.destination.street,
            destination_house: self.route.destination.house,
            destination_build: self.route.destination.build,
            service_category: self.service_category,
            status: self.status.to_string(),
            price: self.price.as_major_f64(),
            driver_id: self.driver_id,
            options: self.options.into_dto(),
            created_at: self.created_at,
        }
    }
}

/// Parameters for quoting the price of a trip.
#[derive(Debug, Clone)]
pub struct PriceQuoteParams {
    pub route: Route,
    /// Name of the service category, e.g. `"comfort"`.
    pub service_category: String,
}

impl PriceQuoteParams {
    pub fn from_dto(dto: PriceQuoteRequestDto) -> Self {
        Self {
            route: Route {
                city: dto.city,
                origin: Address {
                    street: dto.start_trip_street,
                    house: dto.start_trip_house,
                    build: non_empty(dto.start_trip_build),
                },
                destination: Address {
                    street: dto.destination_street,
                    house: dto.destination_house,
                    build: non_empty(dto.destination_build),
                },
            },
            service_category: dto.service_category,
        }
    }
}

/// Upper bound of an order price, client-supplied or quoted.
pub const MAX_ORDER_PRICE: Money = Money::from_major(1_000_000);

/// Checks that a price lies within `0..=MAX_ORDER_PRICE`.
pub fn validate_price(price: Money) -> Result<Money, OrderError> {
    if price.is_negative() || price > MAX_ORDER_PRICE {
        return Err(OrderError::PriceOutOfRange);
    }

    Ok(price)
}

/// Parameters for creating a rider's order.
#[derive(Debug, Clone)]
pub struct CreateOrderParams {
    pub rider_id: String,
    pub route: Route,
    pub service_category: String,
    pub options: OrderOptions,
    /// Client-supplied price; the server quotes one when absent.
    pub price: Option<Money>,
}

impl CreateOrderParams {
    /// Builds parameters from a rider's request
    ///
    /// Fails with `PriceOutOfRange` when the supplied price is not a finite amount.
    pub fn from_dto(rider_id: String, dto: CreateOrderDto) -> Result<Self, OrderError> {
        let price = match dto.price {
            Some(major) => Some(Money::from_major_f64(major).ok_or(OrderError::PriceOutOfRange)?),
            None => None,
        };
        let quote = PriceQuoteParams::from_dto(dto.trip);

        Ok(Self {
            rider_id,
            route: quote.route,
            service_category: quote.service_category,
            options: OrderOptions::from_dto(dto.options),
            price,
        })
    }
}

/// Order that has just been completed together with the payment it produced.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedOrder {
    pub order: Order,
    pub payment: Payment,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
