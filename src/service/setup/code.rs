//! Setup code service for managing temporary verification codes.
//!
//! This module provides the `SetupCodeService` for generating and validating one-time-use
//! setup codes. These codes are used during initial application setup to grant the parent
//! role to the first user. Codes are stored in-memory with a 60-second TTL and are
//! automatically invalidated after successful use or expiration.

use rand::{distr::Alphanumeric, Rng};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Time-to-live for setup codes in seconds.
const SETUP_CODE_TTL_SECONDS: u64 = 60;

/// Length of generated setup codes.
const SETUP_CODE_LENGTH: usize = 32;

/// Stored setup code with expiration timestamp.
#[derive(Clone)]
struct SetupCode {
    /// The verification code string.
    code: String,
    /// Timestamp when this code expires.
    expires_at: Instant,
}

impl SetupCode {
    /// Creates a new setup code with 60-second TTL.
    fn new(code: String) -> Self {
        Self {
            code,
            expires_at: Instant::now() + Duration::from_secs(SETUP_CODE_TTL_SECONDS),
        }
    }

    /// Checks if the setup code has expired.
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    /// Checks if the provided input matches this setup code.
    fn matches(&self, input: &str) -> bool {
        self.code == input
    }
}

/// Service for managing temporary setup codes used to bootstrap the first parent user.
///
/// Provides methods for generating one-time-use verification codes that allow the first
/// user to authenticate with the parent role during application setup. The setup code is
/// generated once on server startup if no parent user exists, stored in memory with a
/// 60-second TTL, and automatically invalidated after successful use or expiration.
/// This ensures secure initial setup without requiring pre-configured credentials.
#[derive(Clone)]
pub struct SetupCodeService {
    /// The currently active setup code, if any.
    code: Arc<RwLock<Option<SetupCode>>>,
}

impl SetupCodeService {
    /// Creates a new service with no active code.
    pub fn new() -> Self {
        Self {
            code: Arc::new(RwLock::new(None)),
        }
    }

    /// Generates a new one-time setup code, replacing any existing one.
    ///
    /// # Returns
    /// - `String` - The generated code, valid for 60 seconds
    pub async fn generate(&self) -> String {
        let code: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(SETUP_CODE_LENGTH)
            .map(char::from)
            .collect();

        let mut guard = self.code.write().await;
        *guard = Some(SetupCode::new(code.clone()));

        code
    }

    /// Validates and consumes a setup code.
    ///
    /// A matching unexpired code validates exactly once; the stored code is
    /// invalidated on success and on expiry, so a code can never be replayed.
    ///
    /// # Arguments
    /// - `input` - The code string supplied with the login request
    ///
    /// # Returns
    /// - `true` - Input matched the active code
    /// - `false` - No active code, expired code, or mismatch
    pub async fn validate(&self, input: &str) -> bool {
        let mut guard = self.code.write().await;

        match guard.as_ref() {
            Some(code) if code.is_expired() => {
                *guard = None;
                false
            }
            Some(code) if code.matches(input) => {
                *guard = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for SetupCodeService {
    fn default() -> Self {
        Self::new()
    }
}
