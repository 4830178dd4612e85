use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000001_create_driver_table::Driver,
    m20261001_000002_create_service_catalog_tables::{ServiceCategory, ServiceOption},
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Order::Table)
                    .if_not_exists()
                    .col(pk_auto(Order::Id))
                    .col(string(Order::RiderId))
                    .col(string_null(Order::DriverId))
                    .col(integer(Order::ServiceCategoryId))
                    .col(string(Order::City))
                    .col(string(Order::OriginStreet))
                    .col(string(Order::OriginHouse))
                    .col(string_null(Order::OriginBuild))
                    .col(string(Order::DestinationStreet))
                    .col(string(Order::DestinationHouse))
                    .col(string_null(Order::DestinationBuild))
                    .col(string_len(Order::Status, 16))
                    .col(big_integer(Order::Price))
                    .col(
                        timestamp_with_time_zone(Order::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Order::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_driver_id")
                            .from(Order::Table, Order::DriverId)
                            .to(Driver::Table, Driver::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_service_category_id")
                            .from(Order::Table, Order::ServiceCategoryId)
                            .to(ServiceCategory::Table, ServiceCategory::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_order_status_driver_id")
                    .table(Order::Table)
                    .col(Order::Status)
                    .col(Order::DriverId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OrderOption::Table)
                    .if_not_exists()
                    .col(integer(OrderOption::OrderId))
                    .col(integer(OrderOption::OptionId))
                    .primary_key(
                        Index::create()
                            .col(OrderOption::OrderId)
                            .col(OrderOption::OptionId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_option_order_id")
                            .from(OrderOption::Table, OrderOption::OrderId)
                            .to(Order::Table, Order::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_option_option_id")
                            .from(OrderOption::Table, OrderOption::OptionId)
                            .to(ServiceOption::Table, ServiceOption::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderOption::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Order::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Order {
    Table,
    Id,
    RiderId,
    DriverId,
    ServiceCategoryId,
    City,
    OriginStreet,
    OriginHouse,
    OriginBuild,
    DestinationStreet,
    DestinationHouse,
    DestinationBuild,
    Status,
    Price,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum OrderOption {
    Table,
    OrderId,
    OptionId,
}
