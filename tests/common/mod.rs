#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use softplay_directory::application::services::auth_service::hash_token;
use softplay_directory::application::services::{AuthService, VenueService};
use softplay_directory::config::SiteConfig;
use softplay_directory::domain::entities::{AdminToken, NewVenueView, VenueView};
use softplay_directory::domain::repositories::{TokenRepository, VenueRepository, ViewRepository};
use softplay_directory::domain::view_event::ViewEvent;
use softplay_directory::error::AppError;
use softplay_directory::infrastructure::analytics::ChannelEmitter;
use softplay_directory::state::AppState;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::mpsc;

pub const TEST_SECRET: &str = "test-signing-secret";
pub const VALID_TOKEN: &str = "valid-admin-token";
pub const REVOKED_TOKEN: &str = "revoked-admin-token";

/// Venue store double.
pub enum FakeVenues {
    /// Always reports this count.
    Count(i64),
    /// Reports 0, 1, 2, ... on successive calls.
    Growing(AtomicI64),
    /// Always fails with this internal message.
    Failing(&'static str),
}

impl FakeVenues {
    pub fn growing() -> Self {
        FakeVenues::Growing(AtomicI64::new(0))
    }
}

#[async_trait]
impl VenueRepository for FakeVenues {
    async fn count(&self) -> Result<i64, AppError> {
        match self {
            FakeVenues::Count(n) => Ok(*n),
            FakeVenues::Growing(n) => Ok(n.fetch_add(1, Ordering::SeqCst)),
            FakeVenues::Failing(message) => Err(AppError::internal(
                *message,
                json!({"source": "connection refused (os error 111)"}),
            )),
        }
    }
}

/// View store double reporting a fixed total.
pub struct FakeViews(pub i64);

#[async_trait]
impl ViewRepository for FakeViews {
    async fn record_view(&self, view: NewVenueView) -> Result<VenueView, AppError> {
        Ok(VenueView {
            id: 1,
            venue_id: view.venue_id,
            slug: view.slug,
            viewed_at: view.viewed_at,
        })
    }

    async fn count_views(&self, _venue_id: Option<i64>) -> Result<i64, AppError> {
        Ok(self.0)
    }
}

/// Token store double: [`VALID_TOKEN`] is active, [`REVOKED_TOKEN`] is revoked.
pub struct FakeTokens {
    tokens: Vec<AdminToken>,
    unavailable: bool,
}

impl FakeTokens {
    /// A store whose every query fails.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }
}

impl Default for FakeTokens {
    fn default() -> Self {
        let token = |id: i64, name: &str, raw: &str, revoked: bool| AdminToken {
            id,
            name: name.to_string(),
            token_hash: hash_token(TEST_SECRET, raw),
            created_at: Utc::now(),
            last_used_at: None,
            revoked_at: revoked.then(Utc::now),
        };

        Self {
            tokens: vec![
                token(1, "Ops", VALID_TOKEN, false),
                token(2, "Old laptop", REVOKED_TOKEN, true),
            ],
            unavailable: false,
        }
    }
}

#[async_trait]
impl TokenRepository for FakeTokens {
    async fn validate_token(&self, token_hash: &str) -> Result<bool, AppError> {
        if self.unavailable {
            return Err(AppError::internal("Database error", json!({})));
        }

        Ok(self
            .tokens
            .iter()
            .any(|t| t.token_hash == token_hash && !t.is_revoked()))
    }

    async fn update_last_used(&self, _token_hash: &str) -> Result<(), AppError> {
        Ok(())
    }

    async fn create_token(&self, name: &str, token_hash: &str) -> Result<AdminToken, AppError> {
        Ok(AdminToken {
            id: 99,
            name: name.to_string(),
            token_hash: token_hash.to_string(),
            created_at: Utc::now(),
            last_used_at: None,
            revoked_at: None,
        })
    }

    async fn list_tokens(&self) -> Result<Vec<AdminToken>, AppError> {
        Ok(self.tokens.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<AdminToken>, AppError> {
        Ok(self.tokens.iter().find(|t| t.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<AdminToken>, AppError> {
        Ok(self.tokens.iter().find(|t| t.name == name).cloned())
    }

    async fn revoke_token(&self, _id: i64) -> Result<(), AppError> {
        Ok(())
    }
}

pub fn create_test_state_from(
    venues: FakeVenues,
    tokens: FakeTokens,
    queue_capacity: usize,
) -> (AppState, mpsc::Receiver<ViewEvent>) {
    let (tx, rx) = mpsc::channel(queue_capacity);

    let venue_service = Arc::new(VenueService::new(Arc::new(venues), Arc::new(FakeViews(7))));
    let auth_service = Arc::new(AuthService::new(Arc::new(tokens), TEST_SECRET.to_string()));

    let state = AppState::new(
        venue_service,
        auth_service,
        ChannelEmitter::new(tx),
        SiteConfig::new("https://example.com"),
    );

    (state, rx)
}

pub fn create_test_state_with(
    venues: FakeVenues,
    queue_capacity: usize,
) -> (AppState, mpsc::Receiver<ViewEvent>) {
    create_test_state_from(venues, FakeTokens::default(), queue_capacity)
}

pub fn create_test_state(venues: FakeVenues) -> (AppState, mpsc::Receiver<ViewEvent>) {
    create_test_state_with(venues, 100)
}

pub async fn create_test_venue(pool: &sqlx::PgPool, slug: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO venues (slug, name) VALUES ($1, $1) RETURNING id")
        .bind(slug)
        .fetch_one(pool)
        .await
        .unwrap()
}
