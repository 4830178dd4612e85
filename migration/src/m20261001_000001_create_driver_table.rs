use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Driver::Table)
                    .if_not_exists()
                    .col(string(Driver::Id).primary_key())
                    .col(string(Driver::Name))
                    .col(string(Driver::Surname))
                    .col(string(Driver::PhoneNumber))
                    .col(string_uniq(Driver::Email))
                    .col(
                        timestamp_with_time_zone(Driver::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Driver::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Driver {
    Table,
    Id,
    Name,
    Surname,
    PhoneNumber,
    Email,
    CreatedAt,
}
