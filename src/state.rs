//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - HTTP client for external API requests
//! - OAuth2 client for provider authentication
//! - Setup code service for bootstrapping the first parent user
//! - Notifier for outbound webhook announcements
//! - Provider endpoint URLs needed at request time

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::service::{notify::Notifier, setup::code::SetupCodeService};

/// Type alias for the OAuth2 client configured for provider authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// This struct holds all the shared state that needs to be accessible across
/// request handlers. It is initialized once during server startup and then
/// cloned (cheaply, as it contains reference-counted or cloneable types) for
/// each incoming request via Axum's state extraction.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `OAuth2Client` is designed to be cloned
/// - `SetupCodeService` uses `Arc` for shared state
/// - `Arc<dyn Notifier>` is a reference-counted pointer
/// - `String` is cloned when needed
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// This connection is shared across all requests and manages a pool of
    /// connections to the SQLite database.
    pub db: DatabaseConnection,

    /// HTTP client for making external API requests.
    ///
    /// Configured with security settings (no redirects) to prevent SSRF
    /// vulnerabilities. Used for provider API calls and webhook delivery.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the provider authentication flow.
    ///
    /// Handles the OAuth2 authentication flow including generating login URLs
    /// and exchanging authorization codes for access tokens.
    pub oauth_client: OAuth2Client,

    /// Service for managing temporary setup codes.
    ///
    /// Used to generate and validate temporary setup codes that allow the first
    /// user to gain the parent role when no parent users exist in the database.
    pub setup_code_service: SetupCodeService,

    /// Notifier for outbound announcements.
    ///
    /// Used by the event and invitation services and the reminder scheduler to
    /// post messages to the configured chat webhook.
    pub notifier: Arc<dyn Notifier>,

    /// Provider userinfo endpoint queried after a successful token exchange.
    pub userinfo_url: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// This constructor is called once during server startup after all
    /// dependencies have been initialized. The resulting state is then
    /// provided to the Axum router for use in request handlers.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for external API requests
    /// - `oauth_client` - OAuth2 client for provider authentication
    /// - `setup_code_service` - Service for managing setup codes
    /// - `notifier` - Notifier for outbound announcements
    /// - `userinfo_url` - Provider userinfo endpoint
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        setup_code_service: SetupCodeService,
        notifier: Arc<dyn Notifier>,
        userinfo_url: String,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            setup_code_service,
            notifier,
            userinfo_url,
        }
    }
}
