//! Fixed value lists for enumerated entity fields, with validation helpers.
//!
//! The admin API accepts these fields as plain strings; every write path
//! validates against the lists here before any SQL runs, so an unknown
//! value fails with [`CoreError::Validation`] instead of a store error.

use crate::error::CoreError;

/// Valid technology categories.
pub const TECHNOLOGY_CATEGORIES: &[&str] = &[
    "frontend",
    "backend",
    "database",
    "devops",
    "tool",
    "framework",
    "language",
];

/// Category applied when a technology payload omits one.
pub const DEFAULT_TECHNOLOGY_CATEGORY: &str = "tool";

/// Badge color applied when a technology payload omits one.
pub const DEFAULT_TECHNOLOGY_COLOR: &str = "#6B7280";

/// Valid project lifecycle statuses.
pub const PROJECT_STATUSES: &[&str] = &["active", "maintenance", "archived"];

/// Status applied when a project payload omits one.
pub const DEFAULT_PROJECT_STATUS: &str = "active";

/// Valid integration health statuses.
pub const INTEGRATION_STATUSES: &[&str] = &["operational", "maintenance", "outage"];

/// Status applied when an integration payload omits one.
pub const DEFAULT_INTEGRATION_STATUS: &str = "operational";

/// Valid update types for project changelog entries.
pub const UPDATE_TYPES: &[&str] = &["feature", "bugfix", "security", "performance", "breaking"];

/// Validate that a category string is one of the known technology categories.
pub fn validate_technology_category(category: &str) -> Result<(), CoreError> {
    if TECHNOLOGY_CATEGORIES.contains(&category) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown category: '{category}'. Valid categories: {}",
            TECHNOLOGY_CATEGORIES.join(", ")
        )))
    }
}

/// Validate that a status string is one of the known project statuses.
pub fn validate_project_status(status: &str) -> Result<(), CoreError> {
    if PROJECT_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown status: '{status}'. Valid statuses: {}",
            PROJECT_STATUSES.join(", ")
        )))
    }
}

/// Validate that a status string is one of the known integration statuses.
pub fn validate_integration_status(status: &str) -> Result<(), CoreError> {
    if INTEGRATION_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown status: '{status}'. Valid statuses: {}",
            INTEGRATION_STATUSES.join(", ")
        )))
    }
}

/// Validate that an update type string is one of the known update types.
pub fn validate_update_type(update_type: &str) -> Result<(), CoreError> {
    if UPDATE_TYPES.contains(&update_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown update type: '{update_type}'. Valid types: {}",
            UPDATE_TYPES.join(", ")
        )))
    }
}

/// Validate a `#RRGGBB` hex color string.
pub fn validate_hex_color(color: &str) -> Result<(), CoreError> {
    let hex = color.strip_prefix('#').ok_or_else(|| {
        CoreError::Validation(format!("Invalid color '{color}': must start with '#'"))
    })?;
    if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid color '{color}': expected #RRGGBB"
        )))
    }
}

/// Validate a URL-safe slug: lowercase alphanumerics and hyphens, non-empty,
/// no leading/trailing/doubled hyphens.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    let well_formed = !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if well_formed {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid slug '{slug}': use lowercase letters, digits, and single hyphens"
        )))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn known_values_pass() {
        for category in TECHNOLOGY_CATEGORIES {
            assert!(validate_technology_category(category).is_ok());
        }
        for status in PROJECT_STATUSES {
            assert!(validate_project_status(status).is_ok());
        }
        for status in INTEGRATION_STATUSES {
            assert!(validate_integration_status(status).is_ok());
        }
        for update_type in UPDATE_TYPES {
            assert!(validate_update_type(update_type).is_ok());
        }
    }

    #[test]
    fn unknown_values_fail_with_validation_error() {
        let err = validate_technology_category("desktop").unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
        assert!(validate_project_status("paused").is_err());
        assert!(validate_integration_status("down").is_err());
        assert!(validate_update_type("hotfix").is_err());
    }

    #[test]
    fn hex_color_accepts_rrggbb_only() {
        assert!(validate_hex_color("#DEA584").is_ok());
        assert!(validate_hex_color("#000000").is_ok());
        assert!(validate_hex_color("DEA584").is_err());
        assert!(validate_hex_color("#FFF").is_err());
        assert!(validate_hex_color("#GGGGGG").is_err());
    }

    #[test]
    fn slug_rules() {
        assert!(validate_slug("civic-pulse-dashboard").is_ok());
        assert!(validate_slug("rust").is_ok());
        assert!(validate_slug("next15").is_ok());
        assert!(validate_slug("").is_err());
        assert!(validate_slug("Rust").is_err());
        assert!(validate_slug("-leading").is_err());
        assert!(validate_slug("trailing-").is_err());
        assert!(validate_slug("double--hyphen").is_err());
        assert!(validate_slug("with space").is_err());
    }
}
