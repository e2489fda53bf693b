use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer, Responder, get};
use std::sync::Arc;

use hrm_dashboard::config::Config;
use hrm_dashboard::dashboard::poller::{AlertFeed, spawn_poller};
use hrm_dashboard::db::{MySqlSource, init_db};
use hrm_dashboard::docs::ApiDoc;
use hrm_dashboard::routes;

use tracing::info;
use tracing_appender::rolling;
use utoipa::OpenApi; // ← needed for ApiDoc::openapi()
use utoipa_swagger_ui::SwaggerUi;

#[get("/")]
async fn index() -> impl Responder {
    "Hello World!"
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!("Server starting...");

    let pool = init_db(&config.database_url).await?;
    let source = Arc::new(MySqlSource::new(pool));
    let feed = Arc::new(AlertFeed::default());

    // Aborted on drop, so it lives as long as the server does
    let _poller = spawn_poller(source.clone(), feed.clone(), config.poll_interval);

    let limiter = routes::protected_rate_limit(config.rate_protected_per_min)?;
    let server_addr = config.server_addr.clone();
    let source = Data::from(source);
    let feed = Data::from(feed);

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}") // ← important: wildcard {_:.*} to match JS/CSS files
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(Data::new(config.clone()))
            .app_data(source.clone())
            .app_data(feed.clone())
            .service(index)
            // Protected routes with rate limiting
            .configure(|cfg| routes::configure::<MySqlSource>(cfg, &config, &limiter))
    })
    .bind(server_addr)?
    .run()
    .await?;

    Ok(())
}
