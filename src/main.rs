use anyhow::Result;
use server_time::application::{
    ports::{
        host::HostIdentity,
        time::{Clock, TimeZoneResolver},
    },
    services::ApplicationServices,
};
use server_time::config::AppConfig;
use server_time::infrastructure::{
    host::SystemHost,
    time::{SystemClock, SystemTimeZone},
};
use server_time::presentation::http::{
    openapi::ApiDocument, routes::build_router, state::HttpState,
};
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

    let config = Arc::new(AppConfig::from_env()?);
    let api_document = ApiDocument::load(config.openapi_path());

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let zones: Arc<dyn TimeZoneResolver> = Arc::new(SystemTimeZone::detect());
    let host: Arc<dyn HostIdentity> = Arc::new(SystemHost::detect());

    let services = Arc::new(ApplicationServices::new(
        clock,
        zones,
        host,
        config.environment(),
    ));

    let state = HttpState::new(services, Arc::clone(&config), api_document);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(
        env = config.environment(),
        trust_proxy = config.trust_proxy(),
        "Server Time API listening on http://{address}"
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("server stopped");
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received, draining in-flight requests");
}
