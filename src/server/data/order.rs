use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::{HashMap, HashSet};

use crate::server::model::{
    money::Money,
    order::{CreateOrderParams, Order, OrderOption, OrderOptions, OrderStatus},
};

pub struct OrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a pending order and attaches its options
    ///
    /// # Arguments
    /// - `params` - Rider, route and requested options
    /// - `category_id` - ID of the resolved service category
    /// - `price` - Final price of the order
    /// - `option_ids` - Catalog IDs of the requested options
    ///
    /// # Returns
    /// - `Ok(Model)`: The inserted order row
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        params: &CreateOrderParams,
        category_id: i32,
        price: Money,
        option_ids: &[i32],
    ) -> Result<entity::order::Model, DbErr> {
        let now = Utc::now();
        let route = &params.route;

        let order = entity::order::ActiveModel {
            rider_id: ActiveValue::Set(params.rider_id.clone()),
            driver_id: ActiveValue::Set(None),
            service_category_id: ActiveValue::Set(category_id),
            city: ActiveValue::Set(route.city.clone()),
            origin_street: ActiveValue::Set(route.origin.street.clone()),
            origin_house: ActiveValue::Set(route.origin.house.clone()),
            origin_build: ActiveValue::Set(route.origin.build.clone()),
            destination_street: ActiveValue::Set(route.destination.street.clone()),
            destination_house: ActiveValue::Set(route.destination.house.clone()),
            destination_build: ActiveValue::Set(route.destination.build.clone()),
            status: ActiveValue::Set(OrderStatus::Pending.into_entity()),
            price: ActiveValue::Set(price.minor()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for option_id in option_ids {
            entity::prelude::OrderOption::insert(entity::order_option::ActiveModel {
                order_id: ActiveValue::Set(order.id),
                option_id: ActiveValue::Set(*option_id),
            })
            .on_conflict(
                OnConflict::columns([
                    entity::order_option::Column::OrderId,
                    entity::order_option::Column::OptionId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;
        }

        Ok(order)
    }

    /// Gets an order by ID with its category name and options resolved
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Order>, DbErr> {
        let Some(order) = entity::prelude::Order::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.with_details(vec![order]).await?.pop())
    }

    /// Gets an order row by ID and locks it until the surrounding transaction ends
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: Order found and locked
    /// - `Ok(None)`: Order not found
    /// - `Err(DbErr)`: Database error
    pub async fn lock_by_id(&self, id: i32) -> Result<Option<entity::order::Model>, DbErr> {
        entity::prelude::Order::find_by_id(id)
            .lock_exclusive()
            .one(self.db)
            .await
    }

    /// Gets the orders a driver may act on, newest first
    ///
    /// Returns every unassigned pending order plus the driver's own accepted and
    /// in-progress orders.
    pub async fn get_claimable(&self, driver_id: &str) -> Result<Vec<Order>, DbErr> {
        let unassigned = Condition::all()
            .add(entity::order::Column::Status.is_in(OrderStatus::Pending.stored_labels()))
            .add(entity::order::Column::DriverId.is_null());

        let own_active = Condition::all()
            .add(entity::order::Column::DriverId.eq(driver_id))
            .add(entity::order::Column::Status.is_in([
                OrderStatus::Accepted.into_entity(),
                OrderStatus::InProgress.into_entity(),
            ]));

        let orders = entity::prelude::Order::find()
            .filter(Condition::any().add(unassigned).add(own_active))
            .order_by_desc(entity::order::Column::CreatedAt)
            .order_by_desc(entity::order::Column::Id)
            .all(self.db)
            .await?;

        self.with_details(orders).await
    }

    /// Gets all orders placed by a rider, newest first
    pub async fn get_by_rider(&self, rider_id: &str) -> Result<Vec<Order>, DbErr> {
        let orders = entity::prelude::Order::find()
            .filter(entity::order::Column::RiderId.eq(rider_id))
            .order_by_desc(entity::order::Column::CreatedAt)
            .order_by_desc(entity::order::Column::Id)
            .all(self.db)
            .await?;

        self.with_details(orders).await
    }

    /// Assigns a pending order to a driver
    ///
    /// The update only applies while the order is still pending and not assigned to
    /// another driver, so at most one of several concurrent claims succeeds.
    ///
    /// # Returns
    /// - `Ok(true)`: The order is now accepted by `driver_id`
    /// - `Ok(false)`: The order was not in a claimable state
    /// - `Err(DbErr)`: Database error
    pub async fn claim(&self, order_id: i32, driver_id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Order::update_many()
            .col_expr(
                entity::order::Column::Status,
                Expr::value(OrderStatus::Accepted.into_entity()),
            )
            .col_expr(entity::order::Column::DriverId, Expr::value(driver_id))
            .col_expr(entity::order::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::order::Column::Id.eq(order_id))
            .filter(entity::order::Column::Status.is_in(OrderStatus::Pending.stored_labels()))
            .filter(
                Condition::any()
                    .add(entity::order::Column::DriverId.is_null())
                    .add(entity::order::Column::DriverId.eq(driver_id)),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Moves a driver's order from one of `from` to `to`
    ///
    /// # Returns
    /// - `Ok(true)`: Status changed
    /// - `Ok(false)`: The order is not assigned to `driver_id` or is not in any of `from`
    /// - `Err(DbErr)`: Database error
    pub async fn transition(
        &self,
        order_id: i32,
        driver_id: &str,
        from: &[OrderStatus],
        to: OrderStatus,
    ) -> Result<bool, DbErr> {
        let from_labels: Vec<entity::order::OrderStatus> = from
            .iter()
            .flat_map(|status| status.stored_labels())
            .collect();

        let result = entity::prelude::Order::update_many()
            .col_expr(entity::order::Column::Status, Expr::value(to.into_entity()))
            .col_expr(entity::order::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::order::Column::Id.eq(order_id))
            .filter(entity::order::Column::DriverId.eq(driver_id))
            .filter(entity::order::Column::Status.is_in(from_labels))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Resolves category names and options for a batch of order rows
    async fn with_details(&self, orders: Vec<entity::order::Model>) -> Result<Vec<Order>, DbErr> {
        if orders.is_empty() {
            return Ok(Vec::new());
        }

        let order_ids: Vec<i32> = orders.iter().map(|order| order.id).collect();
        let category_ids: Vec<i32> = orders
            .iter()
            .map(|order| order.service_category_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let categories: HashMap<i32, String> = entity::prelude::ServiceCategory::find()
            .filter(entity::service_category::Column::Id.is_in(category_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|category| (category.id, category.name))
            .collect();

        let option_rows = entity::prelude::OrderOption::find()
            .filter(entity::order_option::Column::OrderId.is_in(order_ids))
            .find_also_related(entity::prelude::ServiceOption)
            .all(self.db)
            .await?;

        let mut options: HashMap<i32, OrderOptions> = HashMap::new();
        for (link, option) in option_rows {
            if let Some(option) = option.and_then(|option| OrderOption::from_name(&option.name)) {
                options.entry(link.order_id).or_default().insert(option);
            }
        }

        Ok(orders
            .into_iter()
            .map(|order| {
                let category = categories
                    .get(&order.service_category_id)
                    .cloned()
                    .unwrap_or_default();
                let order_options = options.get(&order.id).copied().unwrap_or_default();
                Order::from_entity(order, category, order_options)
            })
            .collect())
    }
}
