//! Integration tests for the session progression engine: creation with random
//! question assignment, checkpoint advancement, code resolution, termination,
//! and the cascade behavior the engine relies on.

mod common;

use std::collections::HashSet;

use lemonmaze_back::dto::party::{CreatePartyRequest, SetEtatRequest, UpdatePartyRequest};
use lemonmaze_back::dto::party_question::AddQuestionsRequest;
use lemonmaze_back::error::ServiceError;
use lemonmaze_back::services::{
    catalog_service, party_question_service, party_service, user_service,
};

use common::{seed_board, seed_questions, seed_user, setup_state};

#[tokio::test]
async fn create_party_assigns_four_distinct_questions_from_the_pool() {
    let state = setup_state().await;
    let (parkour_id, user_id, pool) = seed_board(&state, 8).await;

    let created = party_service::create_party(
        &state,
        CreatePartyRequest {
            parkour_id,
            user_id,
        },
    )
    .await
    .expect("create session");

    assert_eq!(created.question_ids.len(), 4);
    let distinct: HashSet<i32> = created.question_ids.iter().copied().collect();
    assert_eq!(distinct.len(), 4);
    assert!(created.question_ids.iter().all(|id| pool.contains(id)));

    let party = party_service::get_party(&state, created.party_id)
        .await
        .expect("load session");
    assert_eq!(party.etat, 0);
    assert!(!party.abandoned);
    assert!(party.ended_at.is_none());
}

#[tokio::test]
async fn create_party_rejects_unknown_route_and_user() {
    let state = setup_state().await;
    let (parkour_id, user_id, _) = seed_board(&state, 4).await;

    let err = party_service::create_party(
        &state,
        CreatePartyRequest {
            parkour_id: parkour_id + 99,
            user_id,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    let err = party_service::create_party(
        &state,
        CreatePartyRequest {
            parkour_id,
            user_id: user_id + 99,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn create_party_with_a_short_pool_leaves_no_partial_state() {
    let state = setup_state().await;
    let (parkour_id, user_id, _) = seed_board(&state, 3).await;

    let err = party_service::create_party(
        &state,
        CreatePartyRequest {
            parkour_id,
            user_id,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::InsufficientData(_)));

    let parties = party_service::list_parties(&state).await.expect("list");
    assert!(parties.is_empty(), "no orphan session may survive");
}

#[tokio::test]
async fn assigned_questions_are_listed_in_draw_order() {
    let state = setup_state().await;
    let (parkour_id, user_id, _) = seed_board(&state, 8).await;

    let created = party_service::create_party(
        &state,
        CreatePartyRequest {
            parkour_id,
            user_id,
        },
    )
    .await
    .expect("create session");

    let listed = party_question_service::list_questions(&state, created.party_id)
        .await
        .expect("list questions");
    let listed_ids: Vec<i32> = listed.iter().map(|question| question.id).collect();
    assert_eq!(listed_ids, created.question_ids);
}

#[tokio::test]
async fn current_code_resolves_the_first_checkpoint_at_etat_zero() {
    let state = setup_state().await;
    let (parkour_id, user_id, _) = seed_board(&state, 4).await;

    let created = party_service::create_party(
        &state,
        CreatePartyRequest {
            parkour_id,
            user_id,
        },
    )
    .await
    .expect("create session");

    let current = party_service::current_code(&state, created.party_id)
        .await
        .expect("resolve code");
    assert_eq!(current.etat, 0);
    assert_eq!(current.code, Some(4925));
}

#[tokio::test]
async fn advancing_walks_the_route_and_signals_completion() {
    let state = setup_state().await;
    let (parkour_id, user_id, _) = seed_board(&state, 4).await;

    let created = party_service::create_party(
        &state,
        CreatePartyRequest {
            parkour_id,
            user_id,
        },
    )
    .await
    .expect("create session");
    let id = created.party_id;

    let expected_codes = [2573, 4428, 1430];
    for (step, expected_code) in expected_codes.iter().enumerate() {
        let advanced = party_service::advance_party(&state, id).await.expect("advance");
        assert_eq!(advanced.etat, step as i32 + 1);
        assert!(!advanced.finished);

        let current = party_service::current_code(&state, id).await.expect("code");
        assert_eq!(current.code, Some(*expected_code));
    }

    let advanced = party_service::advance_party(&state, id).await.expect("advance");
    assert_eq!(advanced.etat, 4);
    assert!(advanced.finished);

    let current = party_service::current_code(&state, id).await.expect("code");
    assert_eq!(current.etat, 4);
    assert_eq!(current.code, None);
}

#[tokio::test]
async fn concurrent_advances_never_observe_the_same_value() {
    let state = setup_state().await;
    let (parkour_id, user_id, _) = seed_board(&state, 4).await;

    let created = party_service::create_party(
        &state,
        CreatePartyRequest {
            parkour_id,
            user_id,
        },
    )
    .await
    .expect("create session");
    let id = created.party_id;

    let mut handles = Vec::new();
    for _ in 0..4 {
        let state = state.clone();
        handles.push(tokio::spawn(async move {
            party_service::advance_party(&state, id).await.expect("advance").etat
        }));
    }

    let mut observed = Vec::new();
    for handle in handles {
        observed.push(handle.await.expect("join"));
    }
    observed.sort_unstable();
    assert_eq!(observed, vec![1, 2, 3, 4]);

    let final_etat = party_service::get_etat(&state, id).await.expect("etat").etat;
    assert_eq!(final_etat, 4);
}

#[tokio::test]
async fn advance_on_a_missing_session_is_not_found() {
    let state = setup_state().await;
    seed_board(&state, 4).await;

    let err = party_service::advance_party(&state, 404).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn set_etat_rejects_negative_values_and_applies_valid_ones() {
    let state = setup_state().await;
    let (parkour_id, user_id, _) = seed_board(&state, 4).await;

    let created = party_service::create_party(
        &state,
        CreatePartyRequest {
            parkour_id,
            user_id,
        },
    )
    .await
    .expect("create session");
    let id = created.party_id;

    let err = party_service::set_etat(&state, id, SetEtatRequest { etat: -1 })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(_)));

    party_service::set_etat(&state, id, SetEtatRequest { etat: 2 })
        .await
        .expect("set etat");
    let etat = party_service::get_etat(&state, id).await.expect("etat").etat;
    assert_eq!(etat, 2);
}

#[tokio::test]
async fn ending_a_session_is_idempotent_and_abandoning_flags_it() {
    let state = setup_state().await;
    let (parkour_id, user_id, _) = seed_board(&state, 4).await;

    let created = party_service::create_party(
        &state,
        CreatePartyRequest {
            parkour_id,
            user_id,
        },
    )
    .await
    .expect("create session");
    let id = created.party_id;

    party_service::end_party(&state, id).await.expect("end");
    party_service::end_party(&state, id).await.expect("end again");

    let party = party_service::get_party(&state, id).await.expect("load");
    assert!(party.ended_at.is_some());
    assert!(!party.abandoned);

    party_service::abandon_party(&state, id).await.expect("abandon");
    let party = party_service::get_party(&state, id).await.expect("load");
    assert!(party.abandoned);
}

#[tokio::test]
async fn adding_an_existing_question_conflicts_and_inserts_nothing() {
    let state = setup_state().await;
    let (parkour_id, user_id, _) = seed_board(&state, 4).await;

    let created = party_service::create_party(
        &state,
        CreatePartyRequest {
            parkour_id,
            user_id,
        },
    )
    .await
    .expect("create session");
    let id = created.party_id;

    let fresh = seed_questions(&state, 1).await;
    let already_assigned = created.question_ids[0];

    let err = party_question_service::add_questions(
        &state,
        id,
        AddQuestionsRequest {
            question_ids: vec![fresh[0], already_assigned],
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));

    // The fresh question must not have been inserted either.
    let listed = party_question_service::list_questions(&state, id)
        .await
        .expect("list");
    assert_eq!(listed.len(), 4);

    party_question_service::add_questions(
        &state,
        id,
        AddQuestionsRequest {
            question_ids: vec![fresh[0]],
        },
    )
    .await
    .expect("add fresh question");
    let listed = party_question_service::list_questions(&state, id)
        .await
        .expect("list");
    assert_eq!(listed.len(), 5);
    assert_eq!(listed.last().map(|question| question.id), Some(fresh[0]));
}

#[tokio::test]
async fn adding_an_unknown_question_names_the_missing_id() {
    let state = setup_state().await;
    let (parkour_id, user_id, _) = seed_board(&state, 4).await;

    let created = party_service::create_party(
        &state,
        CreatePartyRequest {
            parkour_id,
            user_id,
        },
    )
    .await
    .expect("create session");

    let err = party_question_service::add_questions(
        &state,
        created.party_id,
        AddQuestionsRequest {
            question_ids: vec![9876],
        },
    )
    .await
    .unwrap_err();
    match err {
        ServiceError::NotFound(message) => assert!(message.contains("9876")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn removing_a_missing_association_is_not_found() {
    let state = setup_state().await;
    let (parkour_id, user_id, pool) = seed_board(&state, 5).await;

    let created = party_service::create_party(
        &state,
        CreatePartyRequest {
            parkour_id,
            user_id,
        },
    )
    .await
    .expect("create session");
    let id = created.party_id;

    let unassigned = pool
        .iter()
        .copied()
        .find(|candidate| !created.question_ids.contains(candidate))
        .expect("one question stays unassigned");

    let err = party_question_service::remove_question(&state, id, unassigned)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    party_question_service::remove_question(&state, id, created.question_ids[0])
        .await
        .expect("remove assigned question");
    let listed = party_question_service::list_questions(&state, id)
        .await
        .expect("list");
    assert_eq!(listed.len(), 3);
}

#[tokio::test]
async fn deleting_the_route_cascades_to_sessions_and_associations() {
    let state = setup_state().await;
    let (parkour_id, user_id, _) = seed_board(&state, 4).await;

    let created = party_service::create_party(
        &state,
        CreatePartyRequest {
            parkour_id,
            user_id,
        },
    )
    .await
    .expect("create session");

    catalog_service::delete_parkour(&state, parkour_id)
        .await
        .expect("delete route");

    let err = party_service::get_party(&state, created.party_id)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    let err = party_question_service::list_questions(&state, created.party_id)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn deleting_the_user_cascades_to_sessions() {
    let state = setup_state().await;
    let (parkour_id, user_id, _) = seed_board(&state, 4).await;

    let created = party_service::create_party(
        &state,
        CreatePartyRequest {
            parkour_id,
            user_id,
        },
    )
    .await
    .expect("create session");

    user_service::delete_user(&state, user_id).await.expect("delete user");

    let err = party_service::get_party(&state, created.party_id)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn deleting_a_question_drops_it_from_assigned_sessions() {
    let state = setup_state().await;
    let (parkour_id, user_id, _) = seed_board(&state, 4).await;

    let created = party_service::create_party(
        &state,
        CreatePartyRequest {
            parkour_id,
            user_id,
        },
    )
    .await
    .expect("create session");

    catalog_service::delete_question(&state, created.question_ids[1])
        .await
        .expect("delete question");

    let listed = party_question_service::list_questions(&state, created.party_id)
        .await
        .expect("list");
    assert_eq!(listed.len(), 3);
    assert!(listed.iter().all(|question| question.id != created.question_ids[1]));
}

#[tokio::test]
async fn updating_a_session_validates_its_new_references() {
    let state = setup_state().await;
    let (parkour_id, user_id, _) = seed_board(&state, 4).await;

    let created = party_service::create_party(
        &state,
        CreatePartyRequest {
            parkour_id,
            user_id,
        },
    )
    .await
    .expect("create session");
    let id = created.party_id;

    let err = party_service::update_party(
        &state,
        id,
        UpdatePartyRequest {
            parkour_id: parkour_id + 99,
            user_id,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    let other_user = seed_user(&state, "alex").await;
    party_service::update_party(
        &state,
        id,
        UpdatePartyRequest {
            parkour_id,
            user_id: other_user,
        },
    )
    .await
    .expect("update session");

    let party = party_service::get_party(&state, id).await.expect("load");
    assert_eq!(party.user_id, other_user);
}
