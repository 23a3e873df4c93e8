use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use tourism_market_api::{
    config::AppConfig,
    db::{self, memory::MemoryStore, mongo::MongoStore, CatalogStore},
    routes,
    state::AppState,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err))?;

    let store: Arc<dyn CatalogStore> = match &config.mongo_uri {
        Some(uri) => {
            let client = db::mongo::create_mongo_client(uri)
                .await
                .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;
            Arc::new(MongoStore::new(client))
        }
        None => {
            log::warn!("MONGODB_URI is not set, serving an empty in-memory catalog");
            Arc::new(MemoryStore::new())
        }
    };

    let state = web::Data::new(AppState::new(store, &config));
    log::info!(
        "Starting HTTP server on {}:{} (store: {}, page size: {}, same-day pricing: {})",
        config.host,
        config.port,
        state.store.backend_name(),
        state.catalog.page_size(),
        config.pricing.same_day_policy
    );

    let jwt_secret = config.jwt_secret.clone();
    HttpServer::new(move || {
        let jwt_secret = jwt_secret.clone();
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(state.clone())
            .configure(move |cfg| routes::config(cfg, &jwt_secret))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
