use sea_orm::entity::prelude::*;

/// Order status as stored in the `status` column.
///
/// `Created` is a legacy label written by older clients for the same state as
/// `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum OrderStatus {
    #[sea_orm(string_value = "created")]
    Created,
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "accepted")]
    Accepted,
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    #[sea_orm(string_value = "completed")]
    Completed,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "order")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub rider_id: String,
    pub driver_id: Option<String>,
    pub service_category_id: i32,
    pub city: String,
    pub origin_street: String,
    pub origin_house: String,
    pub origin_build: Option<String>,
    pub destination_street: String,
    pub destination_house: String,
    pub destination_build: Option<String>,
    pub status: OrderStatus,
    /// Price in minor currency units.
    pub price: i64,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::driver::Entity",
        from = "Column::DriverId",
        to = "super::driver::Column::Id"
    )]
    Driver,
    #[sea_orm(
        belongs_to = "super::service_category::Entity",
        from = "Column::ServiceCategoryId",
        to = "super::service_category::Column::Id"
    )]
    ServiceCategory,
    #[sea_orm(has_many = "super::order_option::Entity")]
    OrderOption,
    #[sea_orm(has_many = "super::order_shift_link::Entity")]
    OrderShiftLink,
    #[sea_orm(has_one = "super::payment::Entity")]
    Payment,
}

impl Related<super::driver::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Driver.def()
    }
}

impl Related<super::service_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServiceCategory.def()
    }
}

impl Related<super::order_option::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderOption.def()
    }
}

impl Related<super::order_shift_link::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderShiftLink.def()
    }
}

impl Related<super::payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
