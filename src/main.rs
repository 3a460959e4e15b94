use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use questline_server::{
    app_state::AppState,
    auth::{AuthMiddleware, JwtService},
    config::Config,
    handlers,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        config.validate_for_production();
    }

    let jwt_service = JwtService::new(&config.jwt_secret, config.jwt_expiration_hours);
    let bind_addr = (config.web_server_host.clone(), config.web_server_port);

    let state = AppState::new(config)
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    log::info!("Starting HTTP server on {}:{}", bind_addr.0, bind_addr.1);

    HttpServer::new(move || {
        // Permissive CORS incl. preflight; every handler shares this layer.
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(jwt_service.clone()))
            .wrap(cors)
            .wrap(Logger::default())
            .service(handlers::health_check)
            .service(
                web::scope("")
                    .wrap(AuthMiddleware)
                    .service(handlers::submit_answer)
                    .service(handlers::list_questions)
                    .service(handlers::get_attempt_status)
                    .service(handlers::get_challenge),
            )
    })
    .bind(bind_addr)?
    .run()
    .await
}
