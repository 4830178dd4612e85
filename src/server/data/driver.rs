use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QuerySelect};

pub struct DriverRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DriverRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a driver by ID
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: Driver found
    /// - `Ok(None)`: Driver not found
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(&self, id: &str) -> Result<Option<entity::driver::Model>, DbErr> {
        entity::prelude::Driver::find_by_id(id.to_string())
            .one(self.db)
            .await
    }

    /// Gets a driver by ID and locks the row until the surrounding transaction ends
    ///
    /// Used to serialize per-driver operations such as opening a shift.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: Driver found and locked
    /// - `Ok(None)`: Driver not found
    /// - `Err(DbErr)`: Database error
    pub async fn lock_by_id(&self, id: &str) -> Result<Option<entity::driver::Model>, DbErr> {
        entity::prelude::Driver::find_by_id(id.to_string())
            .lock_exclusive()
            .one(self.db)
            .await
    }
}
