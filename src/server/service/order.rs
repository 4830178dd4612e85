use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        catalog::CatalogRepository, driver::DriverRepository, order::OrderRepository,
        payment::PaymentRepository, shift::ShiftRepository,
    },
    error::{order::OrderError, AppError},
    model::{
        catalog::ServiceCategory,
        money::Money,
        order::{
            validate_price, CompletedOrder, CreateOrderParams, Order, OrderStatus,
            PriceQuoteParams, Route,
        },
        payment::{CreatePaymentParams, DriverShare},
    },
    service::payment::PaymentCalculator,
};

/// Order lifecycle manager.
///
/// Every state change runs in its own transaction: the order row is read with a lock,
/// validated, updated with a compare-and-swap, and committed together with its
/// side effects (shift link, payment).
pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
    driver_share: DriverShare,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection, driver_share: DriverShare) -> Self {
        Self { db, driver_share }
    }

    /// Lists unassigned pending orders plus the driver's own accepted and in-progress
    /// orders, newest first
    ///
    /// The result is advisory; `accept` re-validates the order.
    pub async fn list_claimable(&self, driver_id: &str) -> Result<Vec<Order>, AppError> {
        let repo = OrderRepository::new(self.db);
        let orders = repo.get_claimable(driver_id).await?;

        tracing::debug!("{} claimable orders for driver {}", orders.len(), driver_id);

        Ok(orders)
    }

    /// Assigns a pending order to a driver
    ///
    /// When the driver has an active shift the order is linked to it. Of several
    /// concurrent calls for the same order exactly one succeeds; the others fail
    /// with `NotClaimable` or `AlreadyAssigned`.
    ///
    /// # Arguments
    /// - `order_id` - Order to claim
    /// - `driver_id` - Claiming driver
    ///
    /// # Returns
    /// - `Ok(Order)`: The accepted order
    /// - `Err(AppError::NotFound)`: Order or driver does not exist
    /// - `Err(AppError::OrderErr(NotClaimable))`: Order is not pending
    /// - `Err(AppError::OrderErr(AlreadyAssigned))`: Order is bound to another driver
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn accept(&self, order_id: i32, driver_id: &str) -> Result<Order, AppError> {
        let txn = self.db.begin().await?;
        let orders = OrderRepository::new(&txn);

        if DriverRepository::new(&txn)
            .find_by_id(driver_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!("Driver {} not found", driver_id)));
        }

        let order = orders
            .lock_by_id(order_id)
            .await?
            .ok_or_else(|| order_not_found(order_id))?;

        if OrderStatus::from_entity(order.status) != OrderStatus::Pending {
            return Err(OrderError::NotClaimable { order_id }.into());
        }

        if let Some(assigned) = order.driver_id.as_deref() {
            if assigned != driver_id {
                return Err(OrderError::AlreadyAssigned { order_id }.into());
            }
        }

        if !orders.claim(order_id, driver_id).await? {
            tracing::warn!("Driver {} lost the claim on order {}", driver_id, order_id);
            return Err(OrderError::NotClaimable { order_id }.into());
        }

        let shifts = ShiftRepository::new(&txn);
        if let Some(shift) = shifts.lock_active_by_driver(driver_id).await? {
            shifts.link_order(order_id, shift.id).await?;
        }

        let accepted = orders
            .get_by_id(order_id)
            .await?
            .ok_or_else(|| order_not_found(order_id))?;

        txn.commit().await?;

        tracing::info!("Order {} accepted by driver {}", order_id, driver_id);

        Ok(accepted)
    }

    /// Starts the trip of an accepted order
    ///
    /// # Returns
    /// - `Ok(Order)`: The order, now in progress
    /// - `Err(AppError::NotFound)`: Order does not exist
    /// - `Err(AppError::OrderErr(InvalidTransition))`: Order is not accepted or is
    ///   assigned to another driver
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn start_trip(&self, order_id: i32, driver_id: &str) -> Result<Order, AppError> {
        let txn = self.db.begin().await?;
        let orders = OrderRepository::new(&txn);

        let order = orders
            .lock_by_id(order_id)
            .await?
            .ok_or_else(|| order_not_found(order_id))?;

        let from = OrderStatus::from_entity(order.status);
        let to = OrderStatus::InProgress;
        let invalid = || OrderError::InvalidTransition {
            order_id,
            driver_id: driver_id.to_string(),
            from,
            to,
        };

        if from != OrderStatus::Accepted || order.driver_id.as_deref() != Some(driver_id) {
            return Err(invalid().into());
        }

        if !orders
            .transition(order_id, driver_id, &[OrderStatus::Accepted], to)
            .await?
        {
            return Err(invalid().into());
        }

        let started = orders
            .get_by_id(order_id)
            .await?
            .ok_or_else(|| order_not_found(order_id))?;

        txn.commit().await?;

        tracing::info!("Trip for order {} started by driver {}", order_id, driver_id);

        Ok(started)
    }

    /// Completes an accepted or in-progress order and records the driver payout
    ///
    /// The status change, the link to the driver's active shift (if any) and the
    /// payment are committed together.
    ///
    /// # Returns
    /// - `Ok(CompletedOrder)`: The completed order with its payment
    /// - `Err(AppError::NotFound)`: Order does not exist
    /// - `Err(AppError::OrderErr(InvalidTransition))`: Order is not accepted or in
    ///   progress, or is assigned to another driver
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn complete(
        &self,
        order_id: i32,
        driver_id: &str,
    ) -> Result<CompletedOrder, AppError> {
        let txn = self.db.begin().await?;
        let orders = OrderRepository::new(&txn);

        let order = orders
            .lock_by_id(order_id)
            .await?
            .ok_or_else(|| order_not_found(order_id))?;

        let from = OrderStatus::from_entity(order.status);
        let to = OrderStatus::Completed;
        let invalid = || OrderError::InvalidTransition {
            order_id,
            driver_id: driver_id.to_string(),
            from,
            to,
        };

        let completable = [OrderStatus::Accepted, OrderStatus::InProgress];
        if !completable.contains(&from) || order.driver_id.as_deref() != Some(driver_id) {
            return Err(invalid().into());
        }

        if !orders
            .transition(order_id, driver_id, &completable, to)
            .await?
        {
            return Err(invalid().into());
        }

        let shifts = ShiftRepository::new(&txn);
        if let Some(shift) = shifts.lock_active_by_driver(driver_id).await? {
            shifts.link_order(order_id, shift.id).await?;
        }

        let amount =
            PaymentCalculator::new(self.driver_share).driver_payout(Money::from_minor(order.price));
        let payment = PaymentRepository::new(&txn)
            .create(CreatePaymentParams {
                order_id,
                amount,
                driver_share: self.driver_share,
            })
            .await?;

        let completed = orders
            .get_by_id(order_id)
            .await?
            .ok_or_else(|| order_not_found(order_id))?;

        txn.commit().await?;

        tracing::info!(
            "Order {} completed by driver {}, payout {}",
            order_id,
            driver_id,
            payment.amount
        );

        Ok(CompletedOrder {
            order: completed,
            payment,
        })
    }

    /// Creates a pending order for a rider
    ///
    /// Every requested option must be supported by the order's service category.
    /// The client-supplied price is kept when present, otherwise the order is priced
    /// with `quote_price`.
    ///
    /// # Returns
    /// - `Ok(Order)`: The created order
    /// - `Err(AppError::NotFound)`: Service category does not exist
    /// - `Err(AppError::OrderErr(OptionNotSupported))`: Option not available in the category
    /// - `Err(AppError::OrderErr(PriceOutOfRange))`: Price is negative or above `MAX_ORDER_PRICE`
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn create_order(&self, params: CreateOrderParams) -> Result<Order, AppError> {
        if let Some(price) = params.price {
            validate_price(price)?;
        }

        let txn = self.db.begin().await?;
        let catalog = CatalogRepository::new(&txn);

        let category = catalog
            .find_category_by_name(&params.service_category)
            .await?
            .ok_or_else(|| category_not_found(&params.service_category))?;

        let option_ids = catalog.find_option_ids(params.options).await?;
        let mut selected = Vec::new();
        for option in params.options.iter() {
            match option_ids.get(&option) {
                Some(id) if category.supported_options.contains(option) => selected.push(*id),
                _ => {
                    return Err(OrderError::OptionNotSupported {
                        option,
                        category: category.name.clone(),
                    }
                    .into())
                }
            }
        }

        let price = match params.price {
            Some(price) => price,
            None => quoted(&category, &params.route)?,
        };

        let orders = OrderRepository::new(&txn);
        let created = orders
            .create(&params, category.id, price, &selected)
            .await?;
        let order = orders
            .get_by_id(created.id)
            .await?
            .ok_or_else(|| order_not_found(created.id))?;

        txn.commit().await?;

        tracing::info!(
            "Order {} created by rider {} ({}, {})",
            order.id,
            order.rider_id,
            order.service_category,
            order.price
        );

        Ok(order)
    }

    /// Quotes the price of a trip in a service category
    ///
    /// # Returns
    /// - `Ok(Money)`: Base fare of the category plus the route surcharge
    /// - `Err(AppError::NotFound)`: Service category does not exist
    /// - `Err(AppError::OrderErr(PriceOutOfRange))`: Fare exceeds `MAX_ORDER_PRICE`
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn quote_price(&self, params: &PriceQuoteParams) -> Result<Money, AppError> {
        let category = CatalogRepository::new(self.db)
            .find_category_by_name(&params.service_category)
            .await?
            .ok_or_else(|| category_not_found(&params.service_category))?;

        Ok(quoted(&category, &params.route)?)
    }

    /// Lists every order placed by a rider, newest first
    pub async fn list_rider_orders(&self, rider_id: &str) -> Result<Vec<Order>, AppError> {
        let repo = OrderRepository::new(self.db);

        Ok(repo.get_by_rider(rider_id).await?)
    }
}

fn quoted(category: &ServiceCategory, route: &Route) -> Result<Money, OrderError> {
    category
        .quote(route)
        .ok_or(OrderError::PriceOutOfRange)
        .and_then(validate_price)
}

fn order_not_found(order_id: i32) -> AppError {
    AppError::NotFound(format!("Order {} not found", order_id))
}

fn category_not_found(name: &str) -> AppError {
    AppError::NotFound(format!("Service category '{}' not found", name))
}
