use crate::{
    model::{
        api::ErrorDto,
        order::{
            CompletedOrderDto, CreateOrderDto, OrderActionDto, OrderDto, PriceQuoteDto,
            PriceQuoteRequestDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            identity::{Identity, Role},
            order::{CreateOrderParams, PriceQuoteParams},
        },
        state::AppState,
        util::parse::parse_id,
    },
};

/// List orders a driver can act on.
///
/// Returns unassigned pending orders and the driver's own accepted or in-progress
/// orders, newest first.
///
/// # Access Control
/// - `Driver`
pub async fn list_claimable_orders(
    state: &AppState,
    identity: &Identity,
) -> Result<Vec<OrderDto>, ErrorDto> {
    let driver_id = AuthGuard::new(identity).require(Role::Driver)?;

    let orders = state.orders().list_claimable(driver_id).await?;

    Ok(orders.into_iter().map(|order| order.into_dto()).collect())
}

/// Accept a pending order.
///
/// # Access Control
/// - `Driver`
///
/// # Returns
/// - `Ok(OrderActionDto)` - Order is now assigned to the caller
/// - `Err(ErrorDto)` - `not_claimable`, `already_assigned`, `not_found`,
///   `invalid_input`, `forbidden` or `storage_failure`
pub async fn accept_order(
    state: &AppState,
    identity: &Identity,
    order_id: &str,
) -> Result<OrderActionDto, ErrorDto> {
    let driver_id = AuthGuard::new(identity).require(Role::Driver)?;
    let order_id = parse_id(order_id)?;

    let order = state.orders().accept(order_id, driver_id).await?;

    Ok(OrderActionDto {
        order_id: order.id.to_string(),
        status: order.status.to_string(),
        message: "Order accepted successfully".to_string(),
    })
}

/// Start the trip of an accepted order.
///
/// # Access Control
/// - `Driver` - Must be the driver assigned to the order
pub async fn start_trip(
    state: &AppState,
    identity: &Identity,
    order_id: &str,
) -> Result<OrderActionDto, ErrorDto> {
    let driver_id = AuthGuard::new(identity).require(Role::Driver)?;
    let order_id = parse_id(order_id)?;

    let order = state.orders().start_trip(order_id, driver_id).await?;

    Ok(OrderActionDto {
        order_id: order.id.to_string(),
        status: order.status.to_string(),
        message: "Trip started successfully".to_string(),
    })
}

/// Complete an order and return the recorded driver payout.
///
/// # Access Control
/// - `Driver` - Must be the driver assigned to the order
pub async fn complete_order(
    state: &AppState,
    identity: &Identity,
    order_id: &str,
) -> Result<CompletedOrderDto, ErrorDto> {
    let driver_id = AuthGuard::new(identity).require(Role::Driver)?;
    let order_id = parse_id(order_id)?;

    let completed = state.orders().complete(order_id, driver_id).await?;

    Ok(CompletedOrderDto {
        order_id: completed.order.id.to_string(),
        status: completed.order.status.to_string(),
        payment: completed.payment.into_dto(),
        message: "Order completed successfully".to_string(),
    })
}

/// Place a new order.
///
/// # Access Control
/// - `Rider`
pub async fn create_order(
    state: &AppState,
    identity: &Identity,
    payload: CreateOrderDto,
) -> Result<OrderDto, ErrorDto> {
    let rider_id = AuthGuard::new(identity).require(Role::Rider)?;

    let params =
        CreateOrderParams::from_dto(rider_id.to_string(), payload).map_err(AppError::from)?;
    let order = state.orders().create_order(params).await?;

    Ok(order.into_dto())
}

/// Quote the price of a trip.
///
/// # Access Control
/// - `Rider`
pub async fn get_order_price(
    state: &AppState,
    identity: &Identity,
    payload: PriceQuoteRequestDto,
) -> Result<PriceQuoteDto, ErrorDto> {
    AuthGuard::new(identity).require(Role::Rider)?;

    let params = PriceQuoteParams::from_dto(payload);
    let price = state.orders().quote_price(&params).await?;

    Ok(PriceQuoteDto {
        price: price.as_major_f64(),
    })
}

/// List the caller's orders, newest first.
///
/// # Access Control
/// - `Rider`
pub async fn list_rider_orders(
    state: &AppState,
    identity: &Identity,
) -> Result<Vec<OrderDto>, ErrorDto> {
    let rider_id = AuthGuard::new(identity).require(Role::Rider)?;

    let orders = state.orders().list_rider_orders(rider_id).await?;

    Ok(orders.into_iter().map(|order| order.into_dto()).collect())
}
