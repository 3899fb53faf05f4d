pub mod admin;
pub mod ai;
pub mod assignments;
pub mod auth;
pub mod chat;
pub mod designers;
pub mod earnings;
pub mod portfolio;
pub mod quotations;
pub mod requests;
pub mod users;

use actix_web::{HttpResponse, web};
use validator::ValidationErrors;

use crate::workflow::TransitionError;

/// 400 response for a failed `validator` check, with per-field messages.
pub(crate) fn validation_error(errors: ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({
        "error": "Invalid input",
        "details": errors,
    }))
}

/// Map a rejected lifecycle transition: wrong actor is a 403, wrong state a
/// 409.
pub(crate) fn transition_rejected(err: TransitionError) -> HttpResponse {
    let body = serde_json::json!({ "error": err.to_string() });
    match err {
        TransitionError::WrongActor { .. } => HttpResponse::Forbidden().json(body),
        TransitionError::InvalidState { .. } => HttpResponse::Conflict().json(body),
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── Auth routes (protected by JWT via the AuthenticatedUser extractor) ──
    cfg.service(
        web::scope("/auth")
            .route("/me", web::get().to(auth::me))
            .route("/complete-profile", web::post().to(auth::complete_profile)),
    );

    // ── User routes ──
    cfg.service(web::resource("/users").route(web::get().to(users::get_users)));
    cfg.service(
        web::resource("/users/{id}")
            .route(web::get().to(users::get_user))
            .route(web::put().to(users::update_user))
            .route(web::delete().to(users::delete_user)),
    );

    // ── Designer directory ──
    cfg.service(
        web::scope("/designers")
            .route("", web::get().to(designers::list_designers))
            .route("/me", web::put().to(designers::upsert_my_profile))
            .route("/{user_id}", web::get().to(designers::get_designer))
            .route("/{user_id}/verify", web::put().to(designers::verify_designer)),
    );

    // ── Redesign requests ──
    cfg.service(
        web::scope("/requests")
            .route("", web::get().to(requests::list_requests))
            .route("", web::post().to(requests::create_request))
            .route("/open", web::get().to(requests::list_open_requests))
            .route("/{id}", web::get().to(requests::get_request))
            .route("/{id}/start", web::post().to(requests::start_work))
            .route("/{id}/complete", web::post().to(requests::complete_work))
            .route("/{id}/cancel", web::post().to(requests::cancel_request))
            .route("/{id}/images", web::get().to(requests::get_images))
            .route("/{id}/images", web::post().to(requests::add_image)),
    );

    // ── Quotations ──
    cfg.service(
        web::scope("/quotations")
            .route("", web::post().to(quotations::create_quotation))
            .route("/mine", web::get().to(quotations::get_my_quotations))
            .route(
                "/request/{request_id}",
                web::get().to(quotations::get_quotations_for_request),
            )
            .route("/{id}/accept", web::post().to(quotations::accept_quotation)),
    );

    // ── Delivery assignments ──
    cfg.service(
        web::scope("/assignments")
            .route("/open", web::get().to(assignments::list_open_assignments))
            .route("/mine", web::get().to(assignments::get_my_assignments))
            .route("/{id}/claim", web::post().to(assignments::claim_assignment))
            .route(
                "/{id}/complete",
                web::post().to(assignments::complete_assignment),
            ),
    );

    // ── Designer earnings ──
    cfg.service(
        web::scope("/earnings")
            .route("/mine", web::get().to(earnings::get_my_earnings))
            .route("/{id}/mark-paid", web::post().to(earnings::mark_paid)),
    );

    // ── Portfolio ──
    cfg.service(
        web::scope("/portfolio")
            .route("", web::post().to(portfolio::create_item))
            .route(
                "/designer/{designer_id}",
                web::get().to(portfolio::get_designer_portfolio),
            )
            .route("/{id}", web::put().to(portfolio::update_item))
            .route("/{id}", web::delete().to(portfolio::delete_item)),
    );

    // ── Admin ──
    cfg.service(web::scope("/admin").route("/stats", web::get().to(admin::get_stats)));

    // ── AI design studio ──
    cfg.service(
        web::scope("/ai")
            .route("/suggestions", web::post().to(ai::design_suggestions))
            .route("/generate", web::post().to(ai::generate_design)),
    );

    // ── Chat ──
    cfg.service(
        web::scope("/chat")
            .route(
                "/{request_id}/messages",
                web::get().to(chat::get_messages),
            )
            .route(
                "/ws/{request_id}",
                web::get().to(crate::chat::session::ws_connect),
            ),
    );
}
