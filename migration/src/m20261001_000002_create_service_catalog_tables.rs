use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(ServiceCategory::Id))
                    .col(string_uniq(ServiceCategory::Name))
                    .col(big_integer(ServiceCategory::BaseFare))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ServiceOption::Table)
                    .if_not_exists()
                    .col(pk_auto(ServiceOption::Id))
                    .col(string_uniq(ServiceOption::Name))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ServiceCategoryOption::Table)
                    .if_not_exists()
                    .col(integer(ServiceCategoryOption::CategoryId))
                    .col(integer(ServiceCategoryOption::OptionId))
                    .primary_key(
                        Index::create()
                            .col(ServiceCategoryOption::CategoryId)
                            .col(ServiceCategoryOption::OptionId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_category_option_category_id")
                            .from(
                                ServiceCategoryOption::Table,
                                ServiceCategoryOption::CategoryId,
                            )
                            .to(ServiceCategory::Table, ServiceCategory::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_category_option_option_id")
                            .from(ServiceCategoryOption::Table, ServiceCategoryOption::OptionId)
                            .to(ServiceOption::Table, ServiceOption::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServiceCategoryOption::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ServiceOption::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ServiceCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ServiceCategory {
    Table,
    Id,
    Name,
    BaseFare,
}

#[derive(DeriveIden)]
pub enum ServiceOption {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum ServiceCategoryOption {
    Table,
    CategoryId,
    OptionId,
}
