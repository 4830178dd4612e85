pub use super::driver::Entity as Driver;
pub use super::order::Entity as Order;
pub use super::order_option::Entity as OrderOption;
pub use super::order_shift_link::Entity as OrderShiftLink;
pub use super::payment::Entity as Payment;
pub use super::service_category::Entity as ServiceCategory;
pub use super::service_category_option::Entity as ServiceCategoryOption;
pub use super::service_option::Entity as ServiceOption;
pub use super::work_shift::Entity as WorkShift;
