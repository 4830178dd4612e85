use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter,
};
use std::collections::HashMap;

use crate::server::model::{
    catalog::ServiceCategory,
    money::Money,
    order::{OrderOption, OrderOptions},
};

pub struct CatalogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CatalogRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a service category by name with the options it supports
    ///
    /// # Arguments
    /// - `name` - Category name, e.g. `"comfort"`
    ///
    /// # Returns
    /// - `Ok(Some(ServiceCategory))`: Category found
    /// - `Ok(None)`: No category with that name
    /// - `Err(DbErr)`: Database error
    pub async fn find_category_by_name(
        &self,
        name: &str,
    ) -> Result<Option<ServiceCategory>, DbErr> {
        let Some(category) = entity::prelude::ServiceCategory::find()
            .filter(entity::service_category::Column::Name.eq(name))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let supported_options = self.supported_options(category.id).await?;

        Ok(Some(ServiceCategory::from_entity(
            category,
            supported_options,
        )))
    }

    /// Resolves option names to their `service_option` IDs
    ///
    /// Options missing from the catalog are absent from the returned map.
    pub async fn find_option_ids(
        &self,
        options: OrderOptions,
    ) -> Result<HashMap<OrderOption, i32>, DbErr> {
        if options.is_empty() {
            return Ok(HashMap::new());
        }

        let names: Vec<&str> = options.iter().map(OrderOption::name).collect();
        let rows = entity::prelude::ServiceOption::find()
            .filter(entity::service_option::Column::Name.is_in(names))
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|row| OrderOption::from_name(&row.name).map(|option| (option, row.id)))
            .collect())
    }

    /// Inserts a category if no category with that name exists and returns its ID
    ///
    /// An existing category keeps its current base fare.
    pub async fn ensure_category(&self, name: &str, base_fare: Money) -> Result<i32, DbErr> {
        entity::prelude::ServiceCategory::insert(entity::service_category::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            base_fare: ActiveValue::Set(base_fare.minor()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::service_category::Column::Name)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        let category = entity::prelude::ServiceCategory::find()
            .filter(entity::service_category::Column::Name.eq(name))
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Service category {name}")))?;

        Ok(category.id)
    }

    /// Inserts an option if no option with that name exists and returns its ID
    pub async fn ensure_option(&self, option: OrderOption) -> Result<i32, DbErr> {
        entity::prelude::ServiceOption::insert(entity::service_option::ActiveModel {
            name: ActiveValue::Set(option.name().to_string()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::service_option::Column::Name)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        let row = entity::prelude::ServiceOption::find()
            .filter(entity::service_option::Column::Name.eq(option.name()))
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Service option {option}")))?;

        Ok(row.id)
    }

    /// Marks an option as supported by a category
    ///
    /// # Returns
    /// - `Ok(true)`: Link inserted
    /// - `Ok(false)`: Link already existed
    /// - `Err(DbErr)`: Database error
    pub async fn ensure_category_option(
        &self,
        category_id: i32,
        option_id: i32,
    ) -> Result<bool, DbErr> {
        let inserted = entity::prelude::ServiceCategoryOption::insert(
            entity::service_category_option::ActiveModel {
                category_id: ActiveValue::Set(category_id),
                option_id: ActiveValue::Set(option_id),
            },
        )
        .on_conflict(
            OnConflict::columns([
                entity::service_category_option::Column::CategoryId,
                entity::service_category_option::Column::OptionId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(inserted > 0)
    }

    async fn supported_options(&self, category_id: i32) -> Result<OrderOptions, DbErr> {
        let rows = entity::prelude::ServiceCategoryOption::find()
            .filter(entity::service_category_option::Column::CategoryId.eq(category_id))
            .find_also_related(entity::prelude::ServiceOption)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, option)| option)
            .filter_map(|option| OrderOption::from_name(&option.name))
            .collect())
    }
}
