//! Catalog tables: cities, categories, venues, questions, and users.

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ville::Table)
                    .if_not_exists()
                    .col(pk_auto(Ville::Id))
                    .col(string(Ville::Name))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Category::Table)
                    .if_not_exists()
                    .col(pk_auto(Category::Id))
                    .col(string(Category::Name))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Lieu::Table)
                    .if_not_exists()
                    .col(pk_auto(Lieu::Id))
                    .col(string(Lieu::Name))
                    .col(string(Lieu::Gps))
                    .col(string(Lieu::Info))
                    .col(integer(Lieu::Code))
                    .col(boolean(Lieu::Active).default(true))
                    .col(integer_null(Lieu::VilleId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lieu_ville")
                            .from(Lieu::Table, Lieu::VilleId)
                            .to(Ville::Table, Ville::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Question::Table)
                    .if_not_exists()
                    .col(pk_auto(Question::Id))
                    .col(string(Question::Text))
                    .col(string(Question::Answer1))
                    .col(string(Question::Answer2))
                    .col(string(Question::Answer3))
                    .col(string(Question::Answer4))
                    .col(integer(Question::CorrectAnswer))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(string_uniq(Users::Pseudo))
                    .col(string_uniq(Users::Email))
                    .col(string(Users::Password))
                    .col(timestamp_with_time_zone(Users::CreatedAt))
                    .col(integer(Users::Age))
                    .col(string(Users::City))
                    .col(integer(Users::CitronBleu).default(0))
                    .col(integer(Users::CitronJaune).default(0))
                    .col(integer(Users::CitronRouge).default(0))
                    .col(integer(Users::CitronVert).default(0))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Question::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Lieu::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Category::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Ville::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Ville {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Category {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Lieu {
    Table,
    Id,
    Name,
    Gps,
    Info,
    Code,
    Active,
    VilleId,
}

#[derive(DeriveIden)]
enum Question {
    Table,
    Id,
    Text,
    Answer1,
    Answer2,
    Answer3,
    Answer4,
    CorrectAnswer,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Pseudo,
    Email,
    Password,
    CreatedAt,
    Age,
    City,
    CitronBleu,
    CitronJaune,
    CitronRouge,
    CitronVert,
}
