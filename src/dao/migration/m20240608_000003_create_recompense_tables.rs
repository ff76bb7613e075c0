//! Reward and voucher tables.

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Recompense::Table)
                    .if_not_exists()
                    .col(pk_auto(Recompense::Id))
                    .col(string(Recompense::Name))
                    .col(string(Recompense::Info))
                    .col(integer(Recompense::CitronBleu))
                    .col(integer(Recompense::CitronJaune))
                    .col(integer(Recompense::CitronRouge))
                    .col(integer(Recompense::CitronVert))
                    .col(integer(Recompense::LieuId))
                    .col(integer(Recompense::CategoryId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recompense_lieu")
                            .from(Recompense::Table, Recompense::LieuId)
                            .to(Lieu::Table, Lieu::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recompense_category")
                            .from(Recompense::Table, Recompense::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RecompenseUser::Table)
                    .if_not_exists()
                    .col(pk_auto(RecompenseUser::Id))
                    .col(integer(RecompenseUser::UserId))
                    .col(integer(RecompenseUser::RecompenseId))
                    .col(string(RecompenseUser::Code))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recompense_user_user")
                            .from(RecompenseUser::Table, RecompenseUser::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recompense_user_recompense")
                            .from(RecompenseUser::Table, RecompenseUser::RecompenseId)
                            .to(Recompense::Table, Recompense::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RecompenseUser::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Recompense::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Recompense {
    Table,
    Id,
    Name,
    Info,
    CitronBleu,
    CitronJaune,
    CitronRouge,
    CitronVert,
    LieuId,
    CategoryId,
}

#[derive(DeriveIden)]
enum RecompenseUser {
    Table,
    Id,
    UserId,
    RecompenseId,
    Code,
}

#[derive(DeriveIden)]
enum Lieu {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Category {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
