//! Per-event user identity attributes.

use beacon_payload::Payload;
use beacon_types::{
    KEY_SUBJECT_DOMAIN_USER_ID, KEY_SUBJECT_IP_ADDRESS, KEY_SUBJECT_LANGUAGE,
    KEY_SUBJECT_NETWORK_USER_ID, KEY_SUBJECT_TIMEZONE, KEY_SUBJECT_USERAGENT, KEY_SUBJECT_USER_ID,
};

/// User identity attributes a single event may override.
///
/// Every attribute is optional. [`payload`](Self::payload) renders only
/// the present ones, under their short wire keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Subject {
    user_id: Option<String>,
    network_user_id: Option<String>,
    domain_user_id: Option<String>,
    ip_address: Option<String>,
    useragent: Option<String>,
    timezone: Option<String>,
    language: Option<String>,
}

impl Subject {
    /// Creates a subject with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Business user identifier (`uid`).
    pub fn with_user_id(mut self, value: impl Into<String>) -> Self {
        self.user_id = Some(value.into());
        self
    }

    /// Network user identifier (`tnuid`).
    pub fn with_network_user_id(mut self, value: impl Into<String>) -> Self {
        self.network_user_id = Some(value.into());
        self
    }

    /// Domain user identifier (`duid`).
    pub fn with_domain_user_id(mut self, value: impl Into<String>) -> Self {
        self.domain_user_id = Some(value.into());
        self
    }

    /// Subject IP address (`ip`).
    pub fn with_ip_address(mut self, value: impl Into<String>) -> Self {
        self.ip_address = Some(value.into());
        self
    }

    /// Subject user agent (`ua`).
    pub fn with_useragent(mut self, value: impl Into<String>) -> Self {
        self.useragent = Some(value.into());
        self
    }

    /// Subject timezone (`tz`).
    pub fn with_timezone(mut self, value: impl Into<String>) -> Self {
        self.timezone = Some(value.into());
        self
    }

    /// Subject language (`lang`).
    pub fn with_language(mut self, value: impl Into<String>) -> Self {
        self.language = Some(value.into());
        self
    }

    /// Renders the present attributes under their wire keys.
    pub fn payload(&self) -> Payload {
        let mut fields = Payload::new();
        fields.add_opt(KEY_SUBJECT_USER_ID, self.user_id.as_deref());
        fields.add_opt(KEY_SUBJECT_NETWORK_USER_ID, self.network_user_id.as_deref());
        fields.add_opt(KEY_SUBJECT_DOMAIN_USER_ID, self.domain_user_id.as_deref());
        fields.add_opt(KEY_SUBJECT_IP_ADDRESS, self.ip_address.as_deref());
        fields.add_opt(KEY_SUBJECT_USERAGENT, self.useragent.as_deref());
        fields.add_opt(KEY_SUBJECT_TIMEZONE, self.timezone.as_deref());
        fields.add_opt(KEY_SUBJECT_LANGUAGE, self.language.as_deref());
        fields
    }
}
