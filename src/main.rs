use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use video_tutor_server::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
};

fn cors(allowed_origins: &[String]) -> Cors {
    if allowed_origins.is_empty() {
        return Cors::permissive();
    }

    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    config.warn_on_missing_settings();

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let max_payload_bytes = config.max_payload_bytes;
    let allowed_origins = config.cors_allowed_origins.clone();

    log::info!(
        "Serving transcript from {} and quiz from {}",
        config.transcript_path,
        config.quiz_path
    );
    let state = AppState::new(config);

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(handlers::json_config(max_payload_bytes))
            .wrap(cors(&allowed_origins))
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .configure(handlers::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
