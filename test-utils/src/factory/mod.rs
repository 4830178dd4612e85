//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let driver = factory::create_driver(&db).await?;
//! let category = factory::create_category(&db).await?;
//!
//! // Customize
//! let order = factory::order::OrderFactory::new(&db, category.id)
//!     .price(1000_00)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `driver` - Create driver entities
//! - `service_category` - Create service categories with their supported options
//! - `order` - Create order entities
//! - `work_shift` - Create active or closed shifts
//! - `payment` - Create payment entities
//! - `helpers` - ID generation and entities with their dependencies

pub mod driver;
pub mod helpers;
pub mod order;
pub mod payment;
pub mod service_category;
pub mod work_shift;

pub use driver::create_driver;
pub use order::create_order;
pub use payment::create_payment;
pub use service_category::create_category;
pub use work_shift::create_shift;
