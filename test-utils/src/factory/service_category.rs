//! Factory for creating service categories and their supported options in tests.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::factory::helpers::next_id;

/// Factory for creating test service categories.
///
/// Options are looked up by name in `service_option` and created when missing.
///
/// # Example
///
/// ```rust,ignore
/// let category = ServiceCategoryFactory::new(&db)
///     .name("comfort")
///     .base_fare(320_00)
///     .option("child")
///     .option("pet")
///     .build()
///     .await?;
/// ```
pub struct ServiceCategoryFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    base_fare: i64,
    options: Vec<String>,
}

impl<'a> ServiceCategoryFactory<'a> {
    /// Creates a new ServiceCategoryFactory with default values.
    ///
    /// Defaults:
    /// - name: `"category-{n}"` where n is auto-incremented
    /// - base_fare: `100_00` (100.00)
    /// - options: none
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("category-{}", next_id()),
            base_fare: 100_00,
            options: Vec::new(),
        }
    }

    /// Sets the category name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the base fare in minor units.
    pub fn base_fare(mut self, base_fare: i64) -> Self {
        self.base_fare = base_fare;
        self
    }

    /// Adds a supported option by name.
    pub fn option(mut self, name: impl Into<String>) -> Self {
        self.options.push(name.into());
        self
    }

    /// Builds and inserts the category and its option links.
    ///
    /// # Returns
    /// - `Ok(entity::service_category::Model)` - Created category
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::service_category::Model, DbErr> {
        let category = entity::service_category::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            base_fare: ActiveValue::Set(self.base_fare),
        }
        .insert(self.db)
        .await?;

        for name in self.options {
            let option = create_option(self.db, &name).await?;

            entity::service_category_option::ActiveModel {
                category_id: ActiveValue::Set(category.id),
                option_id: ActiveValue::Set(option.id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(category)
    }
}

/// Creates a category with default values and no supported options.
pub async fn create_category(
    db: &DatabaseConnection,
) -> Result<entity::service_category::Model, DbErr> {
    ServiceCategoryFactory::new(db).build().await
}

/// Gets a service option by name, inserting it when missing.
pub async fn create_option(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::service_option::Model, DbErr> {
    let existing = entity::prelude::ServiceOption::find()
        .filter(entity::service_option::Column::Name.eq(name))
        .one(db)
        .await?;

    match existing {
        Some(option) => Ok(option),
        None => {
            entity::service_option::ActiveModel {
                id: ActiveValue::NotSet,
                name: ActiveValue::Set(name.to_string()),
            }
            .insert(db)
            .await
        }
    }
}
