use std::sync::Arc;
use std::time::Duration;

use study_coach::app::create_app;
use study_coach::consts::{CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS};
use study_coach::service::CoachService;
use study_coach::{config, gateway};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    log::info!("Initializing study coach service...");

    let config = config::load_config().map_err(std::io::Error::other)?;

    let http_client = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .read_timeout(Duration::from_secs(READ_TIMEOUT_SECS))
        .build()
        .map_err(std::io::Error::other)?;

    let gateway = gateway::from_config(&config, http_client);
    log::info!(
        "provider {} with model {}",
        gateway.provider(),
        config.provider.model_name()
    );

    let coach_service = Arc::new(CoachService::new(gateway));

    let server = actix_web::HttpServer::new(move || create_app(coach_service.clone()));

    server
        .bind((config.server.host.as_str(), config.server.port))?
        .run()
        .await
}
