use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "service_option")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::service_category_option::Entity")]
    ServiceCategoryOption,
    #[sea_orm(has_many = "super::order_option::Entity")]
    OrderOption,
}

impl Related<super::service_category_option::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServiceCategoryOption.def()
    }
}

impl Related<super::order_option::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderOption.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
