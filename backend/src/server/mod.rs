//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::io;
use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use survey_service::Trace;
#[cfg(debug_assertions)]
use survey_service::doc::ApiDoc;
use survey_service::domain::ports::CandidateRepository;
use survey_service::inbound::http::health::{HealthState, live, ready};
use survey_service::inbound::http::state::HttpState;
use survey_service::inbound::http::survey;
use survey_service::outbound::persistence::{
    InMemoryCandidateRepository, JsonFileCandidateRepository,
};
use survey_service::settings::SurveySettings;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Open the candidate store selected by `settings`.
///
/// # Errors
/// Returns [`std::io::Error`] if the store directory cannot be created or
/// opened.
pub fn build_repository(settings: &SurveySettings) -> io::Result<Arc<dyn CandidateRepository>> {
    if settings.in_memory {
        info!("using in-memory candidate store");
        return Ok(Arc::new(InMemoryCandidateRepository::new()));
    }

    let repository = JsonFileCandidateRepository::open(settings.data_dir(), settings.data_file())
        .map_err(io::Error::other)?;
    info!(
        dir = %settings.data_dir().display(),
        file = settings.data_file(),
        "using JSON file candidate store"
    );
    Ok(Arc::new(repository))
}

pub(crate) fn build_app(
    health_state: web::Data<HealthState>,
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
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(survey::configure)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// The health state is marked ready once the listener is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> io::Result<Server> {
    let ServerConfig {
        bind_addr,
        repository,
    } = config;
    let http_state = web::Data::new(HttpState::from_repository(repository));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
