use actix_web::{HttpResponse, Responder, web};
use validator::Validate;

use crate::ai::{AiClient, AiError, GenerateRequest, SUGGESTION_MODEL, SuggestionRequest};
use crate::auth::middleware::AuthenticatedUser;
use crate::handlers::validation_error;

fn suggestion_body(suggestion: String) -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "suggestion": suggestion,
        "model": SUGGESTION_MODEL,
    })
}

fn ai_error_response(err: AiError) -> HttpResponse {
    let body = serde_json::json!({ "error": err.to_string() });
    match err {
        AiError::RateLimited => HttpResponse::TooManyRequests().json(body),
        AiError::CreditsExhausted => HttpResponse::PaymentRequired().json(body),
        AiError::Gateway { .. } => HttpResponse::BadGateway().json(body),
        AiError::Request(_) | AiError::EmptyResponse => {
            HttpResponse::InternalServerError().json(body)
        }
    }
}

/// POST /api/ai/suggestions — text suggestions for a redesign brief.
pub async fn design_suggestions(
    _user: AuthenticatedUser,
    client: web::Data<AiClient>,
    body: web::Json<SuggestionRequest>,
) -> impl Responder {
    if let Err(errors) = body.validate() {
        return validation_error(errors);
    }

    match client.design_suggestions(&body).await {
        Ok(suggestion) => HttpResponse::Ok().json(suggestion_body(suggestion)),
        Err(e) => ai_error_response(e),
    }
}

/// POST /api/ai/generate — generate a design image from the brief and
/// optional original/inspiration photos.
pub async fn generate_design(
    _user: AuthenticatedUser,
    client: web::Data<AiClient>,
    body: web::Json<GenerateRequest>,
) -> impl Responder {
    if let Err(errors) = body.validate() {
        return validation_error(errors);
    }

    match client.generate_design(&body).await {
        Ok(design) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "imageUrl": design.image_url,
            "description": design.description,
        })),
        Err(e) => ai_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn suggestion_response_reports_the_model_actually_called() {
        let body = suggestion_body("add a lace overlay".to_string());
        assert_eq!(body["model"], "google/gemini-3-flash-preview");
        assert_eq!(body["success"], true);
    }

    #[test]
    fn provider_limits_surface_as_client_visible_statuses() {
        let resp = ai_error_response(AiError::RateLimited);
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
        let resp = ai_error_response(AiError::CreditsExhausted);
        assert_eq!(resp.status(), StatusCode::PAYMENT_REQUIRED);
        let resp = ai_error_response(AiError::Gateway { status: 500 });
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }
}
