//! Factory for creating driver entities in tests.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test drivers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let driver = DriverFactory::new(&db)
///     .id("driver-42")
///     .name("Ivan")
///     .build()
///     .await?;
/// ```
pub struct DriverFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    surname: String,
    phone_number: String,
    email: String,
}

impl<'a> DriverFactory<'a> {
    /// Creates a new DriverFactory with default values.
    ///
    /// Defaults:
    /// - id: `"driver-{n}"` where n is auto-incremented
    /// - name: `"Driver"`, surname: `"{n}"`
    /// - email: `"driver{n}@example.com"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("driver-{}", id),
            name: "Driver".to_string(),
            surname: id.to_string(),
            phone_number: format!("+7900{:07}", id),
            email: format!("driver{}@example.com", id),
        }
    }

    /// Sets the driver ID.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the driver's first name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the driver entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::driver::Model)` - Created driver entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::driver::Model, DbErr> {
        entity::driver::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            surname: ActiveValue::Set(self.surname),
            phone_number: ActiveValue::Set(self.phone_number),
            email: ActiveValue::Set(self.email),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a driver with default values.
///
/// Shorthand for `DriverFactory::new(db).build().await`.
pub async fn create_driver(db: &DatabaseConnection) -> Result<entity::driver::Model, DbErr> {
    DriverFactory::new(db).build().await
}
