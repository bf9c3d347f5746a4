use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use verbatim_core::application::{ports::time::Clock, services::ApplicationServices};
use verbatim_core::config::AppConfig;
use verbatim_core::domain::{
    quote::{QuoteReadRepository, QuoteRelationsRepository, QuoteWriteRepository},
    services::SlugGenerator,
    speaker::SpeakerRepository,
    taxonomy::{CategoryRepository, TagRepository},
};
use verbatim_core::infrastructure::{
    database,
    repositories::{
        PostgresCategoryRepository, PostgresQuoteReadRepository,
        PostgresQuoteRelationsRepository, PostgresQuoteWriteRepository,
        PostgresSpeakerRepository, PostgresTagRepository,
    },
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use verbatim_core::presentation::http::{routes::build_router, state::HttpState};

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

    let speaker_repo: Arc<dyn SpeakerRepository> =
        Arc::new(PostgresSpeakerRepository::new(pool.clone()));
    let quote_write_repo: Arc<dyn QuoteWriteRepository> =
        Arc::new(PostgresQuoteWriteRepository::new(pool.clone()));
    let quote_read_repo: Arc<dyn QuoteReadRepository> =
        Arc::new(PostgresQuoteReadRepository::new(pool.clone()));
    let quote_relations_repo: Arc<dyn QuoteRelationsRepository> =
        Arc::new(PostgresQuoteRelationsRepository::new(pool.clone()));
    let tag_repo: Arc<dyn TagRepository> = Arc::new(PostgresTagRepository::new(pool.clone()));
    let category_repo: Arc<dyn CategoryRepository> =
        Arc::new(PostgresCategoryRepository::new(pool.clone()));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());
    let slug_generator: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator::default());

    let services = Arc::new(ApplicationServices::new(
        quote_write_repo,
        quote_read_repo,
        quote_relations_repo,
        speaker_repo,
        tag_repo,
        category_repo,
        slug_generator,
        clock,
    ));

    let state = HttpState { services };
    let app = build_router(state);

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
