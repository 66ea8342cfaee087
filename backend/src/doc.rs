//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the sign-up endpoint together with the request,
//! account, and error schemas. Swagger UI serves it in debug builds.

use utoipa::OpenApi;

use crate::domain::{Account, Error, ErrorCode, SignUpBody};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sign-up API",
        description = "HTTP interface for registering accounts."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(crate::inbound::http::sign_up::sign_up),
    components(schemas(SignUpBody, Account, Error, ErrorCode)),
    tags(
        (name = "accounts", description = "Account registration")
    )
)]
pub struct ApiDoc;
