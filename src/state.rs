//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AuthService, VenueService};
use crate::config::SiteConfig;
use crate::infrastructure::analytics::ChannelEmitter;

#[derive(Clone)]
pub struct AppState {
    pub venue_service: Arc<VenueService>,
    pub auth_service: Arc<AuthService>,
    pub emitter: ChannelEmitter,
    pub site: Arc<SiteConfig>,
}

impl AppState {
    pub fn new(
        venue_service: Arc<VenueService>,
        auth_service: Arc<AuthService>,
        emitter: ChannelEmitter,
        site: SiteConfig,
    ) -> Self {
        Self {
            venue_service,
            auth_service,
            emitter,
            site: Arc::new(site),
        }
    }
}
