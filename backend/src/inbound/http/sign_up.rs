//! Sign-up API handler.
//!
//! ```text
//! POST /api/v1/signup {"name":"Ada","email":"ada@example.com","password":"pw","passwordConfirmation":"pw"}
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, post, web};

use crate::domain::{Account, Error, SignUpBody, SignUpRequest};
use crate::inbound::http::state::HttpState;

/// Register a new account.
///
/// The response status and JSON body are taken unchanged from the sign-up
/// handler's response envelope.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use signup::inbound::http::sign_up::sign_up;
///
/// let app = App::new().service(web::scope("/api/v1").service(sign_up));
/// ```
#[utoipa::path(
    post,
    path = "/api/v1/signup",
    request_body = SignUpBody,
    responses(
        (status = 200, description = "Account created", body = Account),
        (status = 400, description = "Missing or invalid parameter", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["accounts"],
    operation_id = "signUp"
)]
#[post("/signup")]
pub async fn sign_up(state: web::Data<HttpState>, payload: web::Json<SignUpBody>) -> HttpResponse {
    let request = SignUpRequest::new(payload.into_inner());
    let (status_code, body) = state.sign_up.handle(request).await.into_parts();
    let status = StatusCode::from_u16(status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status).json(body)
}
