use crate::config::config::Config;
use crate::repository::database::Database;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use serde::Serialize;

mod config;
mod controller;
mod models;
mod repository;
mod service;
mod util;

#[derive(Serialize)]
pub struct Response {
    status: String,
    message: String,
}

#[get("/health")]
async fn health_check() -> impl Responder {
    let response = Response {
        status: "Success".to_string(),
        message: "Everything is working as expected".to_string(),
    };
    HttpResponse::Ok().json(response)
}

pub struct AppState {
    pub db: Database,
    pub config: Config,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    log4rs::init_file("./log-config.yml", Default::default()).expect("Log config file not found.");
    let config = Config::init();
    let bind_addr = ("0.0.0.0", config.port);
    let db = Database::new(config.clone());
    let app_data = web::Data::new(AppState { db, config });

    let governor_conf = GovernorConfigBuilder::default()
        .per_second(10)
        .burst_size(30)
        .finish()
        .unwrap();

    HttpServer::new(move || {
        App::new()
            .app_data(app_data.clone())
            .app_data(controller::handler::json_config())
            .configure(controller::handler::config)
            .service(health_check)
            .default_service(web::get().to(controller::handler::serve_page))
            .wrap(actix_web::middleware::Logger::default())
            .wrap(Governor::new(&governor_conf))
    })
    .bind(bind_addr)?
    .run()
    .await
}
