use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "work_shift")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub driver_id: String,
    pub started_at: DateTimeUtc,
    /// `None` while the shift is active.
    pub ended_at: Option<DateTimeUtc>,
    /// Frozen at close.
    pub total_orders: Option<i32>,
    /// Frozen at close, in minor currency units.
    pub total_earnings: Option<i64>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::driver::Entity",
        from = "Column::DriverId",
        to = "super::driver::Column::Id"
    )]
    Driver,
    #[sea_orm(has_many = "super::order_shift_link::Entity")]
    OrderShiftLink,
}

impl Related<super::driver::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Driver.def()
    }
}

impl Related<super::order_shift_link::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderShiftLink.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
