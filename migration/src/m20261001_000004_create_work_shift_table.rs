use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000001_create_driver_table::Driver, m20261001_000003_create_order_table::Order,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkShift::Table)
                    .if_not_exists()
                    .col(pk_auto(WorkShift::Id))
                    .col(string(WorkShift::DriverId))
                    .col(timestamp_with_time_zone(WorkShift::StartedAt))
                    .col(timestamp_with_time_zone_null(WorkShift::EndedAt))
                    .col(integer_null(WorkShift::TotalOrders))
                    .col(big_integer_null(WorkShift::TotalEarnings))
                    .col(
                        timestamp_with_time_zone(WorkShift::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_work_shift_driver_id")
                            .from(WorkShift::Table, WorkShift::DriverId)
                            .to(Driver::Table, Driver::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_work_shift_driver_id_ended_at")
                    .table(WorkShift::Table)
                    .col(WorkShift::DriverId)
                    .col(WorkShift::EndedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OrderShiftLink::Table)
                    .if_not_exists()
                    .col(integer(OrderShiftLink::OrderId))
                    .col(integer(OrderShiftLink::ShiftId))
                    .primary_key(
                        Index::create()
                            .col(OrderShiftLink::OrderId)
                            .col(OrderShiftLink::ShiftId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_shift_link_order_id")
                            .from(OrderShiftLink::Table, OrderShiftLink::OrderId)
                            .to(Order::Table, Order::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_shift_link_shift_id")
                            .from(OrderShiftLink::Table, OrderShiftLink::ShiftId)
                            .to(WorkShift::Table, WorkShift::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderShiftLink::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(WorkShift::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WorkShift {
    Table,
    Id,
    DriverId,
    StartedAt,
    EndedAt,
    TotalOrders,
    TotalEarnings,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum OrderShiftLink {
    Table,
    OrderId,
    ShiftId,
}
