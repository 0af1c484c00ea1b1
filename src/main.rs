mod config;
mod controller;
mod data;
mod error;
mod middleware;
mod model;
mod router;
mod scheduler;
mod service;
mod startup;
mod state;

use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError, service::setup::code::SetupCodeService, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session_layer = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;
    let notifier = startup::setup_notifier(&config, http_client.clone());
    let cors = startup::setup_cors(&config)?;

    // Create setup code service
    let setup_code_service = SetupCodeService::new();

    tracing::info!("Starting server");

    // Check for parent users and generate a setup login link if none exist
    startup::check_for_parent(&db, &config, &setup_code_service).await?;

    // Start event reminder scheduler
    let scheduler_db = db.clone();
    let scheduler_notifier = notifier.clone();
    let reminder_lead_minutes = config.reminder_lead_minutes;
    tokio::spawn(async move {
        if let Err(e) = scheduler::event_reminders::start_scheduler(
            scheduler_db,
            scheduler_notifier,
            reminder_lead_minutes,
        )
        .await
        {
            tracing::error!("Event reminder scheduler error: {}", e);
        }
    });

    let state = AppState::new(
        db,
        http_client,
        oauth_client,
        setup_code_service,
        notifier,
        config.oauth_userinfo_url.clone(),
    );

    let app = router::router()
        .layer(cors)
        .layer(session_layer)
        .with_state(state);

    tracing::info!("Listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
