use chrono::{Duration, Utc};
use entity::order::OrderStatus as StoredStatus;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{
    builder::TestBuilder,
    factory::{self, order::OrderFactory, work_shift::WorkShiftFactory},
};

use crate::{
    model::api::ErrorKind,
    server::{
        error::AppError,
        model::{
            money::Money,
            order::{
                Address, CreateOrderParams, OrderOptions, OrderStatus, PriceQuoteParams, Route,
                MAX_ORDER_PRICE,
            },
            payment::DriverShare,
        },
        service::{catalog::CatalogService, order::OrderService},
    },
};

mod complete;
mod list;

fn service(db: &DatabaseConnection) -> OrderService<'_> {
    OrderService::new(db, DriverShare::default())
}

fn route() -> Route {
    Route {
        city: "Moscow".to_string(),
        origin: Address {
            street: "Arbat".to_string(),
            house: "12".to_string(),
            build: None,
        },
        destination: Address {
            street: "Tverskaya".to_string(),
            house: "1".to_string(),
            build: Some("3".to_string()),
        },
    }
}

async fn payment_count(db: &DatabaseConnection, order_id: i32) -> Result<u64, AppError> {
    Ok(entity::prelude::Payment::find()
        .filter(entity::payment::Column::OrderId.eq(order_id))
        .count(db)
        .await?)
}

async fn link_count(db: &DatabaseConnection, order_id: i32) -> Result<u64, AppError> {
    Ok(entity::prelude::OrderShiftLink::find()
        .filter(entity::order_shift_link::Column::OrderId.eq(order_id))
        .count(db)
        .await?)
}
