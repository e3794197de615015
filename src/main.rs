use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use quizrush_server::{
    app_state::AppState,
    config::Config,
    handlers::{configure, payload_config},
    middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if let Err(err) = config.validate_for_production() {
        log::error!("Invalid configuration: {}", err);
        std::process::exit(1);
    }

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let max_upload_bytes = config.max_upload_bytes;

    let state = match AppState::new(config).await {
        Ok(state) => state,
        Err(err) => {
            log::error!("Failed to initialize application state: {}", err);
            std::process::exit(1);
        }
    };

    log::info!("Starting QuizRush server on http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(payload_config(max_upload_bytes))
            .wrap(RequestIdMiddleware)
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .configure(configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
