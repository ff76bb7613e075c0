//! OpenAPI documentation generation.

use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the Lemonmaze backend.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::auth::login,
        crate::routes::party::create_party,
        crate::routes::party::list_parties,
        crate::routes::party::get_party,
        crate::routes::party::update_party,
        crate::routes::party::delete_party,
        crate::routes::party::advance_party,
        crate::routes::party::current_code,
        crate::routes::party::end_party,
        crate::routes::party::abandon_party,
        crate::routes::party::get_etat,
        crate::routes::party::set_etat,
        crate::routes::party_question::add_questions,
        crate::routes::party_question::list_questions,
        crate::routes::party_question::remove_question,
        crate::routes::ville::list_villes,
        crate::routes::ville::get_ville,
        crate::routes::ville::create_ville,
        crate::routes::ville::update_ville,
        crate::routes::ville::delete_ville,
        crate::routes::category::list_categories,
        crate::routes::category::get_category,
        crate::routes::category::create_category,
        crate::routes::category::update_category,
        crate::routes::category::delete_category,
        crate::routes::lieu::list_lieux,
        crate::routes::lieu::get_lieu,
        crate::routes::lieu::get_lieu_name,
        crate::routes::lieu::create_lieu,
        crate::routes::lieu::update_lieu,
        crate::routes::lieu::get_lieu_code,
        crate::routes::lieu::update_lieu_code,
        crate::routes::lieu::activate_lieu,
        crate::routes::lieu::deactivate_lieu,
        crate::routes::lieu::delete_lieu,
        crate::routes::parkour::list_parkours,
        crate::routes::parkour::get_parkour,
        crate::routes::parkour::get_parkour_detail,
        crate::routes::parkour::create_parkour,
        crate::routes::parkour::update_parkour,
        crate::routes::parkour::delete_parkour,
        crate::routes::question::list_questions,
        crate::routes::question::list_question_ids,
        crate::routes::question::get_question,
        crate::routes::question::create_question,
        crate::routes::question::update_question,
        crate::routes::question::delete_question,
        crate::routes::user::list_users,
        crate::routes::user::get_user,
        crate::routes::user::create_user,
        crate::routes::user::change_password,
        crate::routes::user::change_email,
        crate::routes::user::delete_user,
        crate::routes::user::add_citrons,
        crate::routes::user::remove_citrons,
        crate::routes::recompense::list_recompenses,
        crate::routes::recompense::get_recompense,
        crate::routes::recompense::create_recompense,
        crate::routes::recompense::update_recompense,
        crate::routes::recompense::delete_recompense,
        crate::routes::recompense::redeem_recompense,
        crate::routes::recompense::list_user_vouchers,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::common::ActionResponse,
            crate::dto::auth::LoginRequest,
            crate::dto::auth::LoginResponse,
            crate::dto::party::CreatePartyRequest,
            crate::dto::party::PartyCreated,
            crate::dto::party::PartySummary,
            crate::dto::party::AdvanceResponse,
            crate::dto::party::CurrentCodeResponse,
            crate::dto::party::EtatResponse,
            crate::dto::party::SetEtatRequest,
            crate::dto::party::UpdatePartyRequest,
            crate::dto::party_question::AddQuestionsRequest,
            crate::dto::ville::VilleRequest,
            crate::dto::ville::VilleSummary,
            crate::dto::category::CategoryRequest,
            crate::dto::category::CategorySummary,
            crate::dto::lieu::LieuRequest,
            crate::dto::lieu::LieuSummary,
            crate::dto::lieu::LieuNameResponse,
            crate::dto::lieu::LieuCodeResponse,
            crate::dto::lieu::UpdateCodeRequest,
            crate::dto::parkour::ParkourRequest,
            crate::dto::parkour::ParkourSummary,
            crate::dto::parkour::ParkourDetail,
            crate::dto::parkour::CheckpointLieu,
            crate::dto::question::QuestionRequest,
            crate::dto::question::QuestionSummary,
            crate::dto::question::QuestionIdsResponse,
            crate::dto::user::CreateUserRequest,
            crate::dto::user::UserSummary,
            crate::dto::user::ChangePasswordRequest,
            crate::dto::user::ChangeEmailRequest,
            crate::dto::user::CitronRequest,
            crate::dto::recompense::RecompenseRequest,
            crate::dto::recompense::RecompenseSummary,
            crate::dto::recompense::RedeemRequest,
            crate::dto::recompense::VoucherSummary,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Login and token issuance"),
        (name = "party", description = "Game session progression"),
        (name = "party-question", description = "Questions assigned to a session"),
        (name = "ville", description = "City catalog"),
        (name = "category", description = "Category catalog"),
        (name = "lieu", description = "Venue catalog"),
        (name = "parkour", description = "Route catalog"),
        (name = "question", description = "Question catalog"),
        (name = "user", description = "User accounts"),
        (name = "citron", description = "Citron counters"),
        (name = "recompense", description = "Rewards and redemption"),
    )
)]
pub struct ApiDoc;
