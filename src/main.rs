use actix_cors::Cors;
use actix_web::{http::header, middleware::NormalizePath, web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use portfolio_api::{
    background_task::start_purge_task,
    db::postgres::{create_pool, run_migrations},
    graceful_shutdown::shutdown_signal,
    middlewares::auth::AuthMiddleware,
    routes::configure_routes,
    settings::{AdminCredentials, AppConfig},
    AppState,
};

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    if json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

fn build_cors(origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .max_age(3600);

    if origins.iter().any(|o| o == "*") {
        cors.allow_any_origin()
    } else {
        origins.iter().fold(cors, |cors, origin| cors.allowed_origin(origin))
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = match AppConfig::new() {
        Ok(cfg) => cfg,
        Err(e) => {
            init_tracing(false);
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(config.is_production());
    tracing::info!("Loaded configuration: {:?}", config);

    let pool = create_pool(&config)
        .await
        .context("Invalid database configuration")?;

    if let Err(e) = run_migrations(&pool).await {
        tracing::error!("Failed to apply database migrations: {}", e);
    }

    let app_state = web::Data::new(AppState::new(&config, pool));

    if let Err(e) = app_state.auth_handler.ensure_admin(&AdminCredentials::from(&config)).await {
        tracing::error!("Failed to seed admin account: {}", e);
    }

    let server_addr = format!("{}:{}", config.host, config.port);
    let cors_origins = config.cors_origins();

    tracing::info!(
        "🚀 Starting Portfolio API v{} on {}",
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let server_state = app_state.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(server_state.clone())
            .wrap(AuthMiddleware)
            .wrap(NormalizePath::trim())
            .wrap(build_cors(&cors_origins))
            .wrap(TracingLogger::default())
            .configure(configure_routes)
    })
    .workers(config.worker_count)
    .bind(&server_addr)
    .with_context(|| format!("Failed to bind {}", server_addr))?
    .run();

    let handle = server.handle();
    tokio::spawn(start_purge_task(app_state));

    tokio::select! {
        res = server => res.context("Server error")?,
        _ = shutdown_signal() => handle.stop(true).await,
    }

    tracing::info!("Server stopped");
    Ok(())
}
