use baan_core::application::{
    ports::{security::AdminTokenValidator, time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use baan_core::config::AppConfig;
use baan_core::domain::{
    lead::LeadRepository,
    project::{ProjectReadRepository, ProjectWriteRepository},
    property::{PropertyReadRepository, PropertyWriteRepository},
    slug::SlugLookup,
    template::TemplateRepository,
};
use baan_core::infrastructure::{
    database,
    repositories::{
        PostgresLeadRepository, PostgresProjectReadRepository, PostgresProjectWriteRepository,
        PostgresPropertyReadRepository, PostgresPropertyWriteRepository, PostgresSlugLookup,
        PostgresTemplateRepository,
    },
    security::Sha256TokenValidator,
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use baan_core::presentation::http::{routes::build_router, state::HttpState};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let property_write_repo: Arc<dyn PropertyWriteRepository> =
        Arc::new(PostgresPropertyWriteRepository::new(pool.clone()));
    let property_read_repo: Arc<dyn PropertyReadRepository> =
        Arc::new(PostgresPropertyReadRepository::new(pool.clone()));
    let project_write_repo: Arc<dyn ProjectWriteRepository> =
        Arc::new(PostgresProjectWriteRepository::new(pool.clone()));
    let project_read_repo: Arc<dyn ProjectReadRepository> =
        Arc::new(PostgresProjectReadRepository::new(pool.clone()));
    let lead_repo: Arc<dyn LeadRepository> = Arc::new(PostgresLeadRepository::new(pool.clone()));
    let template_repo: Arc<dyn TemplateRepository> =
        Arc::new(PostgresTemplateRepository::new(pool.clone()));
    let slug_lookup: Arc<dyn SlugLookup> = Arc::new(PostgresSlugLookup::new(pool.clone()));

    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let admin_tokens: Arc<dyn AdminTokenValidator> =
        Arc::new(Sha256TokenValidator::new(config.admin_api_token()));

    let services = Arc::new(ApplicationServices::new(
        property_write_repo,
        property_read_repo,
        project_write_repo,
        project_read_repo,
        lead_repo,
        template_repo,
        slug_lookup,
        slugger,
        clock,
    ));

    let state = HttpState {
        services,
        admin_tokens,
    };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
