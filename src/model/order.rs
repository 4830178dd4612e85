use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::payment::PaymentDto;

/// Add-on flags of an order.
///
/// Flags that are not set are skipped; the whole block is omitted from
/// [`OrderDto`] when neither is set.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct OrderOptionsDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pet: Option<bool>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct OrderDto {
    pub id: String,
    pub city: String,
    pub start_trip_street: String,
    pub start_trip_house: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_trip_build: Option<String>,
    pub destination_street: String,
    pub destination_house: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_build: Option<String>,
    pub service_category: String,
    pub status: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<OrderOptionsDto>,
    pub created_at: DateTime<Utc>,
}

/// Route and category of a rider's trip request.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct PriceQuoteRequestDto {
    pub city: String,
    pub start_trip_street: String,
    pub start_trip_house: String,
    #[serde(default)]
    pub start_trip_build: Option<String>,
    pub destination_street: String,
    pub destination_house: String,
    #[serde(default)]
    pub destination_build: Option<String>,
    pub service_category: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct PriceQuoteDto {
    pub price: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CreateOrderDto {
    #[serde(flatten)]
    pub trip: PriceQuoteRequestDto,
    /// Client-supplied price; quoted server-side when absent.
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub options: Option<OrderOptionsDto>,
}

/// Result of a driver acting on an order.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct OrderActionDto {
    pub order_id: String,
    pub status: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CompletedOrderDto {
    pub order_id: String,
    pub status: String,
    pub payment: PaymentDto,
    pub message: String,
}
