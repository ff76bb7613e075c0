//! Integration tests for the catalog surfaces: accounts, citron counters,
//! venues, routes, rewards, and login.

mod common;

use lemonmaze_back::dto::auth::LoginRequest;
use lemonmaze_back::dto::category::CategoryRequest;
use lemonmaze_back::dto::parkour::ParkourRequest;
use lemonmaze_back::dto::recompense::{RecompenseRequest, RedeemRequest};
use lemonmaze_back::dto::user::{ChangeEmailRequest, CitronRequest, CreateUserRequest};
use lemonmaze_back::dao::users::CitronColor;
use lemonmaze_back::error::ServiceError;
use lemonmaze_back::services::{auth_service, catalog_service, recompense_service, user_service};

use common::{seed_lieu, seed_user, seed_ville, setup_state};

#[tokio::test]
async fn installing_a_connection_leaves_degraded_mode() {
    let state = setup_state().await;
    assert!(!state.is_degraded().await);

    let watcher = state.degraded_watcher();
    assert!(!*watcher.borrow());
}

#[tokio::test]
async fn registering_a_taken_pseudo_is_a_conflict() {
    let state = setup_state().await;
    seed_user(&state, "kim").await;

    let err = user_service::create_user(
        &state,
        CreateUserRequest {
            pseudo: "kim".to_owned(),
            email: "other@example.com".to_owned(),
            password: "pw".to_owned(),
            age: 30,
            city: "Brest".to_owned(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));
}

#[tokio::test]
async fn changing_email_to_a_taken_one_is_a_conflict() {
    let state = setup_state().await;
    let first = seed_user(&state, "kim").await;
    seed_user(&state, "alex").await;

    let err = user_service::change_email(
        &state,
        first,
        ChangeEmailRequest {
            email: "alex@example.com".to_owned(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));
}

#[tokio::test]
async fn citron_counters_never_go_negative() {
    let state = setup_state().await;
    let user_id = seed_user(&state, "kim").await;

    user_service::add_citrons(&state, user_id, CitronColor::Bleu, CitronRequest { amount: 3 })
        .await
        .expect("credit citrons");

    let err = user_service::remove_citrons(
        &state,
        user_id,
        CitronColor::Bleu,
        CitronRequest { amount: 5 },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));

    // The failed debit must not have touched the balance.
    let user = user_service::get_user(&state, user_id).await.expect("load");
    assert_eq!(user.citron_bleu, 3);

    user_service::remove_citrons(
        &state,
        user_id,
        CitronColor::Bleu,
        CitronRequest { amount: 3 },
    )
    .await
    .expect("debit citrons");
    let user = user_service::get_user(&state, user_id).await.expect("load");
    assert_eq!(user.citron_bleu, 0);
}

#[tokio::test]
async fn colors_are_independent_counters() {
    let state = setup_state().await;
    let user_id = seed_user(&state, "kim").await;

    user_service::add_citrons(&state, user_id, CitronColor::Rouge, CitronRequest { amount: 2 })
        .await
        .expect("credit rouge");

    let err = user_service::remove_citrons(
        &state,
        user_id,
        CitronColor::Vert,
        CitronRequest { amount: 1 },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));

    let user = user_service::get_user(&state, user_id).await.expect("load");
    assert_eq!(user.citron_rouge, 2);
    assert_eq!(user.citron_vert, 0);
}

#[tokio::test]
async fn venues_can_be_disabled_without_deleting_them() {
    let state = setup_state().await;
    let lieu_id = seed_lieu(&state, "WarpZone", 4428).await;

    catalog_service::set_lieu_active(&state, lieu_id, false)
        .await
        .expect("deactivate");
    let lieu = catalog_service::get_lieu(&state, lieu_id).await.expect("load");
    assert!(!lieu.active);

    catalog_service::set_lieu_active(&state, lieu_id, true)
        .await
        .expect("activate");
    let lieu = catalog_service::get_lieu(&state, lieu_id).await.expect("load");
    assert!(lieu.active);

    let code = catalog_service::get_lieu_code(&state, lieu_id)
        .await
        .expect("code");
    assert_eq!(code.code, 4428);
}

#[tokio::test]
async fn a_route_cannot_repeat_a_venue_across_slots() {
    let state = setup_state().await;
    let lieu_id = seed_lieu(&state, "Le Comptoir", 2573).await;
    let other = seed_lieu(&state, "Penny Lane", 1430).await;

    let err = catalog_service::create_parkour(
        &state,
        ParkourRequest {
            name: "Parcours double".to_owned(),
            lieu1_id: Some(lieu_id),
            lieu2_id: Some(lieu_id),
            lieu3_id: Some(other),
            lieu4_id: None,
            category_id: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(_)));
}

#[tokio::test]
async fn a_route_referencing_a_missing_venue_is_rejected() {
    let state = setup_state().await;
    let lieu_id = seed_lieu(&state, "Le Comptoir", 2573).await;

    let err = catalog_service::create_parkour(
        &state,
        ParkourRequest {
            name: "Parcours troué".to_owned(),
            lieu1_id: Some(lieu_id),
            lieu2_id: Some(lieu_id + 99),
            lieu3_id: None,
            lieu4_id: None,
            category_id: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn resolved_route_details_expose_venue_names_in_order() {
    let state = setup_state().await;
    let first = seed_lieu(&state, "Little Delirium", 4925).await;
    let second = seed_lieu(&state, "WarpZone", 4428).await;

    let parkour = catalog_service::create_parkour(
        &state,
        ParkourRequest {
            name: "Parcours court".to_owned(),
            lieu1_id: Some(first),
            lieu2_id: Some(second),
            lieu3_id: None,
            lieu4_id: None,
            category_id: None,
        },
    )
    .await
    .expect("create route");

    let detail = catalog_service::get_parkour_detail(&state, parkour.id)
        .await
        .expect("detail");
    let names: Vec<Option<String>> = detail
        .lieux
        .iter()
        .map(|venue| venue.as_ref().map(|venue| venue.name.clone()))
        .collect();
    assert_eq!(
        names,
        vec![
            Some("Little Delirium".to_owned()),
            Some("WarpZone".to_owned()),
            None,
            None
        ]
    );
}

#[tokio::test]
async fn cities_support_the_full_crud_cycle() {
    let state = setup_state().await;
    let ville_id = seed_ville(&state, "Rennes").await;

    let listed = catalog_service::list_villes(&state).await.expect("list");
    assert_eq!(listed.len(), 1);

    catalog_service::update_ville(
        &state,
        ville_id,
        lemonmaze_back::dto::ville::VilleRequest {
            name: "Brest".to_owned(),
        },
    )
    .await
    .expect("rename");
    let ville = catalog_service::get_ville(&state, ville_id).await.expect("load");
    assert_eq!(ville.name, "Brest");

    catalog_service::delete_ville(&state, ville_id).await.expect("delete");
    let err = catalog_service::get_ville(&state, ville_id).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn redeeming_a_reward_debits_counters_and_issues_a_voucher() {
    let state = setup_state().await;
    let lieu_id = seed_lieu(&state, "Little Delirium", 4925).await;
    let category = catalog_service::create_category(
        &state,
        CategoryRequest {
            name: "Bar".to_owned(),
        },
    )
    .await
    .expect("create category");
    let user_id = seed_user(&state, "kim").await;

    let reward = recompense_service::create_recompense(
        &state,
        RecompenseRequest {
            name: "1.50€ offert".to_owned(),
            info: "Remise sur une boisson.".to_owned(),
            citron_bleu: 2,
            citron_jaune: 0,
            citron_rouge: 1,
            citron_vert: 0,
            lieu_id,
            category_id: category.id,
        },
    )
    .await
    .expect("create reward");

    user_service::add_citrons(&state, user_id, CitronColor::Bleu, CitronRequest { amount: 2 })
        .await
        .expect("credit bleu");
    user_service::add_citrons(&state, user_id, CitronColor::Rouge, CitronRequest { amount: 1 })
        .await
        .expect("credit rouge");

    let voucher = recompense_service::redeem_recompense(
        &state,
        reward.id,
        RedeemRequest { user_id },
    )
    .await
    .expect("redeem");
    assert_eq!(voucher.code.len(), 8);
    assert!(voucher.code.chars().all(|c| c.is_ascii_digit()));

    let user = user_service::get_user(&state, user_id).await.expect("load");
    assert_eq!(user.citron_bleu, 0);
    assert_eq!(user.citron_rouge, 0);

    let vouchers = recompense_service::list_user_vouchers(&state, user_id)
        .await
        .expect("list vouchers");
    assert_eq!(vouchers.len(), 1);
    assert_eq!(vouchers[0].recompense_name.as_deref(), Some("1.50€ offert"));
}

#[tokio::test]
async fn a_redemption_shortfall_rolls_every_debit_back() {
    let state = setup_state().await;
    let lieu_id = seed_lieu(&state, "Little Delirium", 4925).await;
    let category = catalog_service::create_category(
        &state,
        CategoryRequest {
            name: "Bar".to_owned(),
        },
    )
    .await
    .expect("create category");
    let user_id = seed_user(&state, "kim").await;

    let reward = recompense_service::create_recompense(
        &state,
        RecompenseRequest {
            name: "Pinte offerte".to_owned(),
            info: "Une pinte.".to_owned(),
            citron_bleu: 1,
            citron_jaune: 0,
            citron_rouge: 3,
            citron_vert: 0,
            lieu_id,
            category_id: category.id,
        },
    )
    .await
    .expect("create reward");

    // Enough bleu, not enough rouge: the bleu debit must be rolled back.
    user_service::add_citrons(&state, user_id, CitronColor::Bleu, CitronRequest { amount: 1 })
        .await
        .expect("credit bleu");

    let err = recompense_service::redeem_recompense(
        &state,
        reward.id,
        RedeemRequest { user_id },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));

    let user = user_service::get_user(&state, user_id).await.expect("load");
    assert_eq!(user.citron_bleu, 1);
    assert_eq!(user.citron_rouge, 0);

    let vouchers = recompense_service::list_user_vouchers(&state, user_id)
        .await
        .expect("list vouchers");
    assert!(vouchers.is_empty());
}

#[tokio::test]
async fn login_issues_a_token_for_valid_credentials_only() {
    let state = setup_state().await;
    seed_user(&state, "kim").await;

    let response = auth_service::login(
        &state,
        LoginRequest {
            pseudo: "kim".to_owned(),
            password: "hunter2".to_owned(),
        },
    )
    .await
    .expect("login");
    assert!(!response.token.is_empty());
    assert_eq!(response.pseudo, "kim");

    let err = auth_service::login(
        &state,
        LoginRequest {
            pseudo: "kim".to_owned(),
            password: "wrong".to_owned(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::Unauthorized(_)));

    let err = auth_service::login(
        &state,
        LoginRequest {
            pseudo: "nobody".to_owned(),
            password: "hunter2".to_owned(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::Unauthorized(_)));
}
