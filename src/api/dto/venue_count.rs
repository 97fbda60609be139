//! DTOs for the venue count endpoint.

use serde::{Deserialize, Serialize};

/// Body returned to callers when the count query fails.
pub const VENUE_COUNT_ERROR: &str = "Failed to get venue count";

/// `{"count": <integer>}`
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct VenueCountResponse {
    pub count: i64,
}

/// `{"error": "Failed to get venue count"}`
///
/// Deliberately flat and fixed: unlike [`crate::error::AppError`] responses it
/// carries no code or details.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct VenueCountError {
    pub error: String,
}

impl Default for VenueCountError {
    fn default() -> Self {
        Self {
            error: VENUE_COUNT_ERROR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_count_response_shape() {
        let body = serde_json::to_value(VenueCountResponse { count: 17 }).unwrap();
        assert_eq!(body, json!({"count": 17}));
    }

    #[test]
    fn test_error_response_shape() {
        let body = serde_json::to_value(VenueCountError::default()).unwrap();
        assert_eq!(body, json!({"error": "Failed to get venue count"}));
    }
}
