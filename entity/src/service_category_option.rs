use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "service_category_option")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub category_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub option_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::service_category::Entity",
        from = "Column::CategoryId",
        to = "super::service_category::Column::Id",
        on_delete = "Cascade"
    )]
    ServiceCategory,
    #[sea_orm(
        belongs_to = "super::service_option::Entity",
        from = "Column::OptionId",
        to = "super::service_option::Column::Id",
        on_delete = "Cascade"
    )]
    ServiceOption,
}

impl Related<super::service_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServiceCategory.def()
    }
}

impl Related<super::service_option::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServiceOption.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
