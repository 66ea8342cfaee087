//! Server construction and adapter wiring.

mod config;

pub use config::ServerSettings;

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use signup::ApiDoc;
use signup::inbound::http::json_config;
use signup::inbound::http::sign_up::sign_up;
use signup::inbound::http::state::HttpState;
use signup::outbound::email::RegexEmailValidator;
use signup::outbound::memory::InMemoryAccountRepository;

fn build_app(
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api/v1").service(sign_up);

    let app = App::new()
        .app_data(json_config())
        .app_data(http_state)
        .service(api);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server backed by the regex email validator and
/// the in-memory account repository.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(bind_addr: SocketAddr) -> std::io::Result<Server> {
    let http_state = web::Data::new(HttpState::from_ports(
        Arc::new(RegexEmailValidator),
        Arc::new(InMemoryAccountRepository::new()),
    ));

    let server = HttpServer::new(move || build_app(http_state.clone()))
        .bind(bind_addr)?
        .run();

    info!(%bind_addr, "sign-up server listening");
    Ok(server)
}
