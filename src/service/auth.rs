use oauth2::{
    basic::BasicTokenType, AuthorizationCode, CsrfToken, EmptyExtraTokenFields,
    StandardTokenResponse, TokenResponse,
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use url::Url;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{UpsertUserParam, User},
    state::OAuth2Client,
};

/// Userinfo profile returned by the OAuth provider.
#[derive(Deserialize)]
pub struct OAuthProfile {
    /// Stable subject identifier for the authenticated user.
    pub sub: String,
    /// Display name of the authenticated user.
    pub name: String,
}

/// OAuth authorization-code flow against the configured provider.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    oauth_client: &'a OAuth2Client,
    userinfo_url: &'a str,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        userinfo_url: &'a str,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            userinfo_url,
        }
    }

    pub fn login_url(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(|| CsrfToken::new_random())
            .url();

        (authorize_url, csrf_state)
    }

    /// Completes the OAuth flow for an authorization code.
    ///
    /// Exchanges the code for an access token, fetches the provider profile and
    /// upserts the user. The parent role is granted only when `grant_parent` is
    /// set (a validated setup code); otherwise the stored role is preserved.
    ///
    /// # Arguments
    /// - `authorization_code`: Authorization code from the provider callback
    /// - `grant_parent`: Whether a setup code was validated for this login
    ///
    /// # Returns
    /// - `Ok(User)`: The created or updated user
    /// - `Err(AppError)`: Token exchange, profile fetch or database error
    pub async fn callback(
        &self,
        authorization_code: String,
        grant_parent: bool,
    ) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let auth_code = AuthorizationCode::new(authorization_code);

        let token = self
            .oauth_client
            .exchange_code(auth_code)
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchangeFailed(e.to_string()))?;

        let profile = self.fetch_profile(&token).await?;

        let user = user_repo
            .upsert(UpsertUserParam {
                subject: profile.sub,
                name: profile.name,
                grant_parent: if grant_parent { Some(true) } else { None },
            })
            .await?;

        Ok(user)
    }

    /// Retrieves the user's profile using the provided access token
    async fn fetch_profile(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<OAuthProfile, AppError> {
        let access_token = token.access_token().secret();

        let profile = self
            .http_client
            .get(self.userinfo_url)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .json::<OAuthProfile>()
            .await?;

        Ok(profile)
    }
}
