//! DTOs for the view beacon endpoint.

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use validator::Validate;

/// Lowercase alphanumeric words joined by single hyphens.
static SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap());

/// Path parameters of `POST /api/venues/{id}/views`.
#[derive(Debug, Deserialize, Validate)]
pub struct VenuePath {
    #[validate(range(min = 1, message = "Venue id must be positive"))]
    pub id: i64,
}

/// Body of `POST /api/venues/{id}/views`.
#[derive(Debug, Deserialize, Validate)]
pub struct TrackViewRequest {
    #[validate(length(min = 1, max = 200))]
    #[validate(regex(path = *SLUG_REGEX, message = "Invalid slug format"))]
    pub slug: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(slug: &str) -> TrackViewRequest {
        TrackViewRequest {
            slug: slug.to_string(),
        }
    }

    #[test]
    fn test_valid_slugs() {
        for slug in ["ball-pit-park", "ball-pit-park-2", "jungle", "a1-b2-c3"] {
            assert!(request(slug).validate().is_ok(), "{slug} should be valid");
        }
    }

    #[test]
    fn test_invalid_slugs() {
        for slug in ["", "Ball-Pit", "-leading", "trailing-", "double--hyphen", "with space"] {
            assert!(request(slug).validate().is_err(), "{slug:?} should be invalid");
        }

        assert!(request(&"a".repeat(201)).validate().is_err());
    }

    #[test]
    fn test_venue_path_range() {
        assert!(VenuePath { id: 42 }.validate().is_ok());
        assert!(VenuePath { id: 0 }.validate().is_err());
        assert!(VenuePath { id: -5 }.validate().is_err());
    }
}
