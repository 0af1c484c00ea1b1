use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::{
    config::Config,
    data::user::UserRepository,
    error::{config::ConfigError, AppError},
    service::{
        notify::{Notifier, NullNotifier, WebhookNotifier},
        setup::code::SetupCodeService,
    },
    state::OAuth2Client,
};

/// Connects to the SQLite database and runs pending migrations.
///
/// Establishes a connection pool to the SQLite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer backed by the application database.
///
/// Creates the session store on the SQLite pool underlying the SeaORM connection,
/// runs the store's own migration, and configures a seven-day inactivity expiry.
///
/// # Arguments
/// - `db` - Database connection whose pool backs the session store
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Session layer ready to be applied to the router
/// - `Err(AppError)` - Failed to migrate the session store table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool().clone();
    let session_store = SqliteStore::new(pool);

    session_store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(7))))
}

/// Builds the shared HTTP client for outbound requests.
///
/// Redirects are disabled so provider and webhook calls cannot be bounced to
/// unexpected addresses.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured HTTP client
/// - `Err(AppError)` - Failed to build the client
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the OAuth2 client from the configured provider endpoints.
///
/// # Arguments
/// - `config` - Application configuration with client credentials and endpoints
///
/// # Returns
/// - `Ok(OAuth2Client)` - Configured OAuth2 client
/// - `Err(AppError::ConfigErr)` - A configured endpoint is not a valid URL
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let client = BasicClient::new(ClientId::new(config.oauth_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.oauth_client_secret.clone()))
        .set_auth_uri(
            AuthUrl::new(config.oauth_auth_url.clone())
                .map_err(|_| ConfigError::InvalidEnvVar("OAUTH_AUTH_URL".to_string()))?,
        )
        .set_token_uri(
            TokenUrl::new(config.oauth_token_url.clone())
                .map_err(|_| ConfigError::InvalidEnvVar("OAUTH_TOKEN_URL".to_string()))?,
        )
        .set_redirect_uri(
            RedirectUrl::new(config.oauth_redirect_url.clone())
                .map_err(|_| ConfigError::InvalidEnvVar("OAUTH_REDIRECT_URL".to_string()))?,
        );

    Ok(client)
}

/// Selects the notifier implementation from configuration.
///
/// Uses the webhook notifier when a webhook URL is configured, otherwise falls
/// back to the no-op notifier with a startup warning.
///
/// # Arguments
/// - `config` - Application configuration
/// - `http_client` - Shared HTTP client for webhook delivery
///
/// # Returns
/// - `Arc<dyn Notifier>` - The selected notifier
pub fn setup_notifier(config: &Config, http_client: reqwest::Client) -> Arc<dyn Notifier> {
    match &config.webhook_url {
        Some(webhook_url) => Arc::new(WebhookNotifier::new(
            http_client,
            webhook_url.clone(),
            config.app_url.clone(),
        )),
        None => {
            tracing::warn!("WEBHOOK_URL is not set, notifications are disabled");
            Arc::new(NullNotifier)
        }
    }
}

/// Builds the CORS layer restricted to the configured application origin.
///
/// # Arguments
/// - `config` - Application configuration containing the app URL
///
/// # Returns
/// - `Ok(CorsLayer)` - Configured CORS layer
/// - `Err(AppError::ConfigErr)` - The app URL is not a valid header value
pub fn setup_cors(config: &Config) -> Result<CorsLayer, AppError> {
    let origin = config
        .app_url
        .parse::<HeaderValue>()
        .map_err(|_| ConfigError::InvalidEnvVar("APP_URL".to_string()))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}

/// Checks for parent users and generates a setup login link if none exist.
///
/// Without a parent user no events can ever be created, so on a fresh database
/// a one-time setup code is generated and a login link logged. The first user
/// to log in with the code is granted the parent role.
///
/// # Arguments
/// - `db` - Database connection
/// - `config` - Application configuration containing the app URL
/// - `setup_code_service` - Service holding the active setup code
///
/// # Returns
/// - `Ok(())` - Check completed (with or without generating a code)
/// - `Err(AppError)` - Database error while counting parent users
pub async fn check_for_parent(
    db: &DatabaseConnection,
    config: &Config,
    setup_code_service: &SetupCodeService,
) -> Result<(), AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.has_parent().await? {
        return Ok(());
    }

    let code = setup_code_service.generate().await;

    tracing::info!(
        "No parent user found. Log in within 60 seconds to claim the parent role: {}/api/auth/login?code={}",
        config.app_url,
        code
    );

    Ok(())
}
