use mood_board::{
    config::log_filter, emotes::seed_teams, load_document, persist_document, router, AppState,
    Config,
};
use std::{env, net::SocketAddr};
use tokio::fs;
use tracing::info;
use tracing_subscriber::fmt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(log_filter(env::var("RUST_LOG").ok().as_deref()))
        .init();

    let config = Config::from_env();
    if let Some(parent) = config.data_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }

    let mut data = load_document(&config.data_path).await;
    info!(
        path = %config.data_path.display(),
        teams = data.teams.len(),
        "store loaded"
    );

    let added = seed_teams(&mut data, config.seed_teams.iter().map(String::as_str));
    if !added.is_empty() {
        persist_document(&config.data_path, &data)
            .await
            .map_err(|err| err.message)?;
        info!(teams = ?added, "teams seeded");
    }

    let app = router(AppState::new(config.data_path, data));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutting down");
}
