//! Retroboard host entry point.

use retroboard_host::board_creator::LocalBoardCreator;
use retroboard_host::config::HostConfig;
use retroboard_host::error::AppError;
use retroboard_host::runner;
use retroboard_onboarding::application::session::OnboardingSession;
use retroboard_store::file_store::FileStore;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber. Logs go to stderr; stdout carries responses.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    tracing::info!("Starting Retroboard onboarding host");

    // Read configuration from environment.
    let config = HostConfig::from_env()?;
    tracing::info!(
        store_path = %config.store_path.display(),
        route = %config.route,
        "loaded configuration"
    );

    // Resume the session from the file store.
    let store = FileStore::open(&config.store_path)?;
    let mut session = OnboardingSession::begin(store)?
        .with_listener(|| tracing::info!("left onboarding session"));

    let input = BufReader::new(tokio::io::stdin());
    let mut output = tokio::io::stdout();
    runner::run(
        input,
        &mut output,
        &mut session,
        &LocalBoardCreator,
        config.is_onboarding_route(),
    )
    .await
}
