//! SeaORM entity definitions mirroring the relational schema.

/// Venue/route category.
pub mod category;
/// Venue (physical place with an unlock code).
pub mod lieu;
/// Route: four ordered checkpoint slots plus a category.
pub mod parkour;
/// Game session.
pub mod party;
/// Session/question association.
pub mod party_question;
/// Trivia question.
pub mod question;
/// Redeemable reward.
pub mod recompense;
/// Redemption voucher linking a user to a claimed reward.
pub mod recompense_user;
/// Player account.
pub mod user;
/// City.
pub mod ville;
