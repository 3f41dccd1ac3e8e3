use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use webquiz_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let bind_addr = (config.web_server_host.clone(), config.web_server_port);

    let state = AppState::new(config)
        .await
        .expect("failed to initialise application state");

    log::info!("starting HTTP server on {}:{}", bind_addr.0, bind_addr.1);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(handlers::register_user)
            .service(handlers::get_quizzes)
            // completed must go before the {id} routes
            .service(handlers::get_completed_quizzes)
            .service(handlers::get_quiz)
            .service(handlers::create_quiz)
            .service(handlers::solve_quiz)
            .service(handlers::delete_quiz)
    })
    .bind(bind_addr)?
    .run()
    .await
}
