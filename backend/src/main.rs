//! Survey service entry point: loads settings, opens the candidate store and
//! serves the HTTP API.

mod server;

use std::io;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, build_repository, create_server};
use survey_service::inbound::http::health::HealthState;
use survey_service::settings::SurveySettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = SurveySettings::load_from_iter(std::env::args_os())
        .map_err(|err| io::Error::other(err.to_string()))?;
    let repository = build_repository(&settings)?;
    let config = ServerConfig::new(settings.bind_addr()?, repository);
    info!(addr = %config.bind_addr(), "starting survey service");

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}
