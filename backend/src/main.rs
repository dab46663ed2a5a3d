use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use backend::config::{json_config, Config};
use backend::grading::GradeScale;
use backend::services;
use backend::store::RecordStore;
use env_logger::Env;
use log::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let store = RecordStore::open(&config.db_path)
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    let store = web::Data::new(store);
    let scale = web::Data::new(GradeScale::standard());

    info!(
        "Milestone record engine running at http://{}:{} (db: {})",
        config.host, config.port, config.db_path
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(json_config())
            .app_data(store.clone())
            .app_data(scale.clone())
            .route("/health", web::get().to(services::health::process))
            .service(services::milestones::configure_routes())
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
