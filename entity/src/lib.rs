//! SeaORM entities for the dispatch schema.

pub mod prelude;

pub mod driver;
pub mod order;
pub mod order_option;
pub mod order_shift_link;
pub mod payment;
pub mod service_category;
pub mod service_category_option;
pub mod service_option;
pub mod work_shift;
