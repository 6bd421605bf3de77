//! Field limits applied when error events render their payload.

use serde::Deserialize;

fn default_max_message_length() -> usize {
    2048
}

fn default_max_stack_length() -> usize {
    8192
}

fn default_max_exception_name_length() -> usize {
    1024
}

/// Truncation limits for the free-text fields of an application-error
/// payload, in bytes.
///
/// Collector-side schemas bound these fields, so oversized values are cut
/// at render time rather than rejected at build time. Cuts never split a
/// UTF-8 code point. The defaults match the collector limits; a host
/// application may override them through its own configuration file,
/// e.g.:
///
/// ```toml
/// [tracker.limits]
/// max_message_length = 512
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct EventLimits {
    /// Maximum length of the error message. Default: 2048.
    #[serde(default = "default_max_message_length")]
    pub max_message_length: usize,

    /// Maximum length of the stack trace. Default: 8192.
    #[serde(default = "default_max_stack_length")]
    pub max_stack_length: usize,

    /// Maximum length of the exception name. Default: 1024.
    #[serde(default = "default_max_exception_name_length")]
    pub max_exception_name_length: usize,
}

impl Default for EventLimits {
    fn default() -> Self {
        Self {
            max_message_length: default_max_message_length(),
            max_stack_length: default_max_stack_length(),
            max_exception_name_length: default_max_exception_name_length(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_collector_limits() {
        let limits = EventLimits::default();
        assert_eq!(limits.max_message_length, 2048);
        assert_eq!(limits.max_stack_length, 8192);
        assert_eq!(limits.max_exception_name_length, 1024);
    }

    #[test]
    fn partial_toml_table_falls_back_to_defaults() {
        let limits: EventLimits = toml::from_str("max_message_length = 512").unwrap();
        assert_eq!(limits.max_message_length, 512);
        assert_eq!(limits.max_stack_length, 8192);
        assert_eq!(limits.max_exception_name_length, 1024);
    }

    #[test]
    fn empty_table_is_all_defaults() {
        let limits: EventLimits = toml::from_str("").unwrap();
        assert_eq!(limits, EventLimits::default());
    }

    #[test]
    fn full_table_overrides_everything() {
        let limits: EventLimits = toml::from_str(
            "max_message_length = 1\nmax_stack_length = 2\nmax_exception_name_length = 3",
        )
        .unwrap();
        assert_eq!(limits.max_message_length, 1);
        assert_eq!(limits.max_stack_length, 2);
        assert_eq!(limits.max_exception_name_length, 3);
    }
}
