use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::catalog::CatalogRepository,
    error::AppError,
    model::{catalog::DEFAULT_CATALOG, money::Money},
};

pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Seeds the default service categories, options and their support matrix
    ///
    /// Existing rows are left untouched so this is safe to run on every startup.
    ///
    /// # Returns
    /// - `Ok(usize)`: Number of default categories present
    /// - `Err(AppError)`: Database error
    pub async fn ensure_default_catalog(&self) -> Result<usize, AppError> {
        let txn = self.db.begin().await?;
        let repo = CatalogRepository::new(&txn);

        for (name, base_fare, options) in DEFAULT_CATALOG {
            let category_id = repo
                .ensure_category(name, Money::from_major(base_fare))
                .await?;

            for option in options {
                let option_id = repo.ensure_option(*option).await?;
                repo.ensure_category_option(category_id, option_id).await?;
            }
        }

        txn.commit().await?;

        Ok(DEFAULT_CATALOG.len())
    }
}
