//! Shared constants and configuration for the Beacon event model.
//!
//! This crate provides the schema identifiers, wire field keys, and field
//! limits used across all Beacon crates. Events describe themselves on the
//! wire with a versioned schema URI; the field keys here are the fixed data
//! keys those schemas define.
//!
//! No crate in the workspace depends on anything *except* `beacon-types`
//! for cross-cutting definitions. This keeps the dependency graph clean and
//! prevents circular dependencies.

/// Tracker version label, attached to outgoing payloads by the emission
/// layer.
pub const TRACKER_VERSION: &str = "rust-0.0.1";

/// Value of the `programmingLanguage` field on application-error payloads.
pub const PLATFORM_LANGUAGE: &str = "RUST";

// ── Self-describing schema identifiers ───────────────────────────────

/// Schema describing an application error event.
pub const SCHEMA_APPLICATION_ERROR: &str =
    "iglu:com.snowplowanalytics.snowplow/application_error/jsonschema/1-0-2";

/// Schema describing a screen-view event.
pub const SCHEMA_SCREEN_VIEW: &str =
    "iglu:com.snowplowanalytics.mobile/screen_view/jsonschema/1-0-0";

/// Schema describing the screen context entity attached to events while a
/// screen is presented.
pub const SCHEMA_SCREEN_ENTITY: &str =
    "iglu:com.snowplowanalytics.mobile/screen/jsonschema/1-0-0";

/// Schema describing a user-timing event.
pub const SCHEMA_TIMING: &str =
    "iglu:com.snowplowanalytics.snowplow/timing/jsonschema/1-0-0";

// ── Application-error data keys ──────────────────────────────────────

/// Error message.
pub const KEY_ERROR_MESSAGE: &str = "message";
/// Exception stack trace.
pub const KEY_ERROR_STACK_TRACE: &str = "stackTrace";
/// Exception name.
pub const KEY_ERROR_EXCEPTION_NAME: &str = "exceptionName";
/// Whether the error ended the application.
pub const KEY_ERROR_IS_FATAL: &str = "isFatal";
/// Language the error was raised in.
pub const KEY_ERROR_LANGUAGE: &str = "programmingLanguage";

// ── Screen data keys ─────────────────────────────────────────────────
//
// Shared between the screen-view event, the screen context entity, and
// the screen-state presence export.

/// Screen name.
pub const KEY_SCREEN_NAME: &str = "name";
/// Screen identifier.
pub const KEY_SCREEN_ID: &str = "id";
/// Screen type.
pub const KEY_SCREEN_TYPE: &str = "type";
/// Transition used to arrive at the screen.
pub const KEY_SCREEN_TRANSITION_TYPE: &str = "transitionType";
/// Name of the screen navigated away from.
pub const KEY_SCREEN_PREVIOUS_NAME: &str = "previousName";
/// Identifier of the screen navigated away from.
pub const KEY_SCREEN_PREVIOUS_ID: &str = "previousId";
/// Type of the screen navigated away from.
pub const KEY_SCREEN_PREVIOUS_TYPE: &str = "previousType";

// ── Timing data keys ─────────────────────────────────────────────────

/// Timing category.
pub const KEY_TIMING_CATEGORY: &str = "category";
/// Timed variable.
pub const KEY_TIMING_VARIABLE: &str = "variable";
/// Measured time in milliseconds.
pub const KEY_TIMING_TIMING: &str = "timing";
/// Optional timing label.
pub const KEY_TIMING_LABEL: &str = "label";

// ── Subject data keys ────────────────────────────────────────────────

/// Business user identifier.
pub const KEY_SUBJECT_USER_ID: &str = "uid";
/// Network user identifier.
pub const KEY_SUBJECT_NETWORK_USER_ID: &str = "tnuid";
/// Domain user identifier.
pub const KEY_SUBJECT_DOMAIN_USER_ID: &str = "duid";
/// Subject IP address.
pub const KEY_SUBJECT_IP_ADDRESS: &str = "ip";
/// Subject user agent.
pub const KEY_SUBJECT_USERAGENT: &str = "ua";
/// Subject timezone.
pub const KEY_SUBJECT_TIMEZONE: &str = "tz";
/// Subject language.
pub const KEY_SUBJECT_LANGUAGE: &str = "lang";

mod limits;
pub use limits::EventLimits;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_identifiers_are_versioned_iglu_uris() {
        for schema in [
            SCHEMA_APPLICATION_ERROR,
            SCHEMA_SCREEN_VIEW,
            SCHEMA_SCREEN_ENTITY,
            SCHEMA_TIMING,
        ] {
            assert!(schema.starts_with("iglu:"), "{schema} missing iglu scheme");
            let parts: Vec<&str> = schema.trim_start_matches("iglu:").split('/').collect();
            assert_eq!(parts.len(), 4, "{schema} should be vendor/name/format/version");
            assert_eq!(parts[2], "jsonschema");
            assert!(!parts[3].is_empty(), "{schema} missing version");
        }
    }

    #[test]
    fn screen_keys_match_wire_format() {
        assert_eq!(KEY_SCREEN_NAME, "name");
        assert_eq!(KEY_SCREEN_ID, "id");
        assert_eq!(KEY_SCREEN_TYPE, "type");
        assert_eq!(KEY_SCREEN_TRANSITION_TYPE, "transitionType");
    }
}
