//! Route and session tables, with the cascades the progression engine relies on.

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Parkour::Table)
                    .if_not_exists()
                    .col(pk_auto(Parkour::Id))
                    .col(string(Parkour::Name))
                    .col(integer_null(Parkour::Lieu1Id))
                    .col(integer_null(Parkour::Lieu2Id))
                    .col(integer_null(Parkour::Lieu3Id))
                    .col(integer_null(Parkour::Lieu4Id))
                    .col(integer_null(Parkour::CategoryId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parkour_lieu1")
                            .from(Parkour::Table, Parkour::Lieu1Id)
                            .to(Lieu::Table, Lieu::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parkour_lieu2")
                            .from(Parkour::Table, Parkour::Lieu2Id)
                            .to(Lieu::Table, Lieu::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parkour_lieu3")
                            .from(Parkour::Table, Parkour::Lieu3Id)
                            .to(Lieu::Table, Lieu::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parkour_lieu4")
                            .from(Parkour::Table, Parkour::Lieu4Id)
                            .to(Lieu::Table, Lieu::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parkour_category")
                            .from(Parkour::Table, Parkour::CategoryId)
                            .to(Category::Table, Category::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Party::Table)
                    .if_not_exists()
                    .col(pk_auto(Party::Id))
                    .col(timestamp_with_time_zone(Party::StartedAt))
                    .col(timestamp_with_time_zone_null(Party::EndedAt))
                    .col(integer(Party::Etat).default(0))
                    .col(boolean(Party::Abandoned).default(false))
                    .col(integer(Party::ParkourId))
                    .col(integer(Party::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_party_parkour")
                            .from(Party::Table, Party::ParkourId)
                            .to(Parkour::Table, Parkour::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_party_user")
                            .from(Party::Table, Party::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PartyQuestion::Table)
                    .if_not_exists()
                    .col(integer(PartyQuestion::PartyId))
                    .col(integer(PartyQuestion::QuestionId))
                    .col(integer(PartyQuestion::Position))
                    .primary_key(
                        Index::create()
                            .col(PartyQuestion::PartyId)
                            .col(PartyQuestion::QuestionId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_party_question_party")
                            .from(PartyQuestion::Table, PartyQuestion::PartyId)
                            .to(Party::Table, Party::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_party_question_question")
                            .from(PartyQuestion::Table, PartyQuestion::QuestionId)
                            .to(Question::Table, Question::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PartyQuestion::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Party::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Parkour::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Parkour {
    Table,
    Id,
    Name,
    Lieu1Id,
    Lieu2Id,
    Lieu3Id,
    Lieu4Id,
    CategoryId,
}

#[derive(DeriveIden)]
enum Party {
    Table,
    Id,
    StartedAt,
    EndedAt,
    Etat,
    Abandoned,
    ParkourId,
    UserId,
}

#[derive(DeriveIden)]
enum PartyQuestion {
    Table,
    PartyId,
    QuestionId,
    Position,
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
enum Question {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
