//! Admin panel credentials.

use chrono::{DateTime, Utc};

/// Admin token entity with metadata.
///
/// Only the HMAC-SHA256 hash of the raw token is stored.
#[derive(Debug, Clone)]
pub struct AdminToken {
    pub id: i64,
    pub name: String,
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
    pub revoked_at: Option<DateTime<Utc>>,
}

impl AdminToken {
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_revoked() {
        let mut token = AdminToken {
            id: 1,
            name: "Ops".to_string(),
            token_hash: "ab".repeat(32),
            created_at: Utc::now(),
            last_used_at: None,
            revoked_at: None,
        };
        assert!(!token.is_revoked());

        token.revoked_at = Some(Utc::now());
        assert!(token.is_revoked());
    }
}
