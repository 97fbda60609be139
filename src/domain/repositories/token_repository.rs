//! Repository trait for admin token authentication.

use crate::domain::entities::AdminToken;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for admin token management.
///
/// Tokens are hashed with HMAC-SHA256 before they reach this layer.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTokenRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Validates a token hash against stored credentials.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the token exists and is not revoked
    /// - `Ok(false)` otherwise
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn validate_token(&self, token_hash: &str) -> Result<bool, AppError>;

    /// Updates the `last_used_at` timestamp for a token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update_last_used(&self, token_hash: &str) -> Result<(), AppError>;

    /// Creates a new admin token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including a
    /// duplicate hash.
    async fn create_token(&self, name: &str, token_hash: &str) -> Result<AdminToken, AppError>;

    /// Lists all tokens, newest first.
    async fn list_tokens(&self) -> Result<Vec<AdminToken>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<AdminToken>, AppError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<AdminToken>, AppError>;

    /// Revokes a token, preventing further logins and invalidating open sessions.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn revoke_token(&self, id: i64) -> Result<(), AppError>;
}
