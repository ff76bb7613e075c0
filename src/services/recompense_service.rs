//! Reward catalog and redemption.

use rand::Rng;
use tracing::info;

use crate::{
    dao::{
        categories::CategoryRepository,
        lieux::LieuRepository,
        recompenses::{RecompenseInput, RecompenseRepository, RedeemError},
        users::UserRepository,
    },
    dto::recompense::{RecompenseRequest, RecompenseSummary, RedeemRequest, VoucherSummary},
    error::ServiceError,
    state::SharedState,
};

/// Number of digits in a generated voucher code.
const VOUCHER_CODE_LEN: usize = 8;

/// Fetch every reward.
pub async fn list_recompenses(state: &SharedState) -> Result<Vec<RecompenseSummary>, ServiceError> {
    let repository = RecompenseRepository::new(state.require_db().await?);
    Ok(repository.list().await?.into_iter().map(Into::into).collect())
}

/// Fetch one reward.
pub async fn get_recompense(state: &SharedState, id: i32) -> Result<RecompenseSummary, ServiceError> {
    let repository = RecompenseRepository::new(state.require_db().await?);
    let Some(model) = repository.find(id).await? else {
        return Err(ServiceError::NotFound(format!(
            "recompense `{id}` not found"
        )));
    };
    Ok(model.into())
}

/// Create a reward after validating its venue and category references.
pub async fn create_recompense(
    state: &SharedState,
    request: RecompenseRequest,
) -> Result<RecompenseSummary, ServiceError> {
    let conn = state.require_db().await?;

    if LieuRepository::new(conn.clone())
        .find(request.lieu_id)
        .await?
        .is_none()
    {
        return Err(ServiceError::NotFound(format!(
            "lieu `{}` not found",
            request.lieu_id
        )));
    }
    if CategoryRepository::new(conn.clone())
        .find(request.category_id)
        .await?
        .is_none()
    {
        return Err(ServiceError::NotFound(format!(
            "category `{}` not found",
            request.category_id
        )));
    }

    let repository = RecompenseRepository::new(conn);
    let model = repository
        .insert(RecompenseInput {
            name: request.name,
            info: request.info,
            costs: [
                request.citron_bleu,
                request.citron_jaune,
                request.citron_rouge,
                request.citron_vert,
            ],
            lieu_id: request.lieu_id,
            category_id: request.category_id,
        })
        .await?;

    info!(recompense_id = model.id, "reward created");
    Ok(model.into())
}

/// Overwrite a reward's fields.
pub async fn update_recompense(
    state: &SharedState,
    id: i32,
    request: RecompenseRequest,
) -> Result<(), ServiceError> {
    let repository = RecompenseRepository::new(state.require_db().await?);
    let updated = repository
        .update(
            id,
            RecompenseInput {
                name: request.name,
                info: request.info,
                costs: [
                    request.citron_bleu,
                    request.citron_jaune,
                    request.citron_rouge,
                    request.citron_vert,
                ],
                lieu_id: request.lieu_id,
                category_id: request.category_id,
            },
        )
        .await?;

    if !updated {
        return Err(ServiceError::NotFound(format!(
            "recompense `{id}` not found"
        )));
    }
    Ok(())
}

/// Delete a reward; its vouchers go with it.
pub async fn delete_recompense(state: &SharedState, id: i32) -> Result<(), ServiceError> {
    let repository = RecompenseRepository::new(state.require_db().await?);
    if !repository.delete(id).await? {
        return Err(ServiceError::NotFound(format!(
            "recompense `{id}` not found"
        )));
    }
    Ok(())
}

/// Redeem a reward for a user, debiting all four citron counters atomically.
pub async fn redeem_recompense(
    state: &SharedState,
    recompense_id: i32,
    request: RedeemRequest,
) -> Result<VoucherSummary, ServiceError> {
    let repository = RecompenseRepository::new(state.require_db().await?);

    let voucher = repository
        .redeem(request.user_id, recompense_id, generate_voucher_code())
        .await
        .map_err(|err| match err {
            RedeemError::UserNotFound(id) => {
                ServiceError::NotFound(format!("user `{id}` not found"))
            }
            RedeemError::RecompenseNotFound(id) => {
                ServiceError::NotFound(format!("recompense `{id}` not found"))
            }
            RedeemError::InsufficientBalance(color) => {
                ServiceError::Conflict(format!("not enough {color} citrons"))
            }
            RedeemError::Storage(source) => source.into(),
        })?;

    info!(
        user_id = request.user_id,
        recompense_id,
        voucher_id = voucher.id,
        "reward redeemed"
    );

    Ok(VoucherSummary::new(voucher, None))
}

/// List the vouchers one user has claimed.
pub async fn list_user_vouchers(
    state: &SharedState,
    user_id: i32,
) -> Result<Vec<VoucherSummary>, ServiceError> {
    let conn = state.require_db().await?;

    if UserRepository::new(conn.clone()).find(user_id).await?.is_none() {
        return Err(ServiceError::NotFound(format!(
            "user `{user_id}` not found"
        )));
    }

    let repository = RecompenseRepository::new(conn);
    let vouchers = repository.vouchers_for_user(user_id).await?;

    Ok(vouchers
        .into_iter()
        .map(|(voucher, reward)| VoucherSummary::new(voucher, reward))
        .collect())
}

fn generate_voucher_code() -> String {
    let mut rng = rand::rng();
    (0..VOUCHER_CODE_LEN)
        .map(|_| char::from_digit(rng.random_range(0..10), 10).unwrap_or('0'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn voucher_codes_are_numeric_and_fixed_length() {
        let code = generate_voucher_code();
        assert_eq!(code.len(), VOUCHER_CODE_LEN);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }
}
