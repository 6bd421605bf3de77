//! The application error event.

use beacon_payload::{Payload, SelfDescribingJson};
use beacon_types::{
    EventLimits, KEY_ERROR_EXCEPTION_NAME, KEY_ERROR_IS_FATAL, KEY_ERROR_LANGUAGE,
    KEY_ERROR_MESSAGE, KEY_ERROR_STACK_TRACE, PLATFORM_LANGUAGE, SCHEMA_APPLICATION_ERROR,
};
use serde_json::json;

use crate::{BuildError, EventBase, EventBuilder};

const EVENT: &str = "error";

/// A caught (or fatal) application error.
///
/// Built via [`ErrorEvent::builder`]; `message` is the only required
/// field. `fatal` defaults to true when never staged, matching the
/// crash-reporting path where an unhandled error is the common case.
#[derive(Debug, Clone)]
pub struct ErrorEvent {
    base: EventBase,
    message: String,
    stack_trace: Option<String>,
    exception_name: Option<String>,
    fatal: bool,
    limits: EventLimits,
}

impl ErrorEvent {
    /// Starts staging an error event.
    pub fn builder() -> ErrorEventBuilder {
        ErrorEventBuilder {
            base: EventBase::now(),
            message: None,
            stack_trace: None,
            exception_name: None,
            fatal: None,
            limits: None,
        }
    }

    /// The base attributes.
    pub fn base(&self) -> &EventBase {
        &self.base
    }

    /// The error message, untruncated.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The stack trace, untruncated, if captured.
    pub fn stack_trace(&self) -> Option<&str> {
        self.stack_trace.as_deref()
    }

    /// The exception or error type name, if known.
    pub fn exception_name(&self) -> Option<&str> {
        self.exception_name.as_deref()
    }

    /// Whether the error ended the application.
    pub fn fatal(&self) -> bool {
        self.fatal
    }

    /// Renders the error into its self-describing envelope.
    ///
    /// Free-text fields are cut to the event's [`EventLimits`] here, at
    /// render time, so the event itself keeps what the caller staged.
    /// Derives purely from the frozen event: calling it repeatedly
    /// yields structurally identical envelopes.
    pub fn payload(&self) -> SelfDescribingJson {
        let mut data = Payload::new();
        data.add(
            KEY_ERROR_MESSAGE,
            truncated(&self.message, self.limits.max_message_length, KEY_ERROR_MESSAGE),
        );
        data.add_opt(
            KEY_ERROR_STACK_TRACE,
            self.stack_trace
                .as_deref()
                .map(|s| truncated(s, self.limits.max_stack_length, KEY_ERROR_STACK_TRACE)),
        );
        data.add_opt(
            KEY_ERROR_EXCEPTION_NAME,
            self.exception_name.as_deref().map(|s| {
                truncated(s, self.limits.max_exception_name_length, KEY_ERROR_EXCEPTION_NAME)
            }),
        );
        data.add_value(KEY_ERROR_IS_FATAL, json!(self.fatal));
        data.add(KEY_ERROR_LANGUAGE, PLATFORM_LANGUAGE);
        SelfDescribingJson::from_payload(SCHEMA_APPLICATION_ERROR, data)
    }
}

/// Staged construction of an [`ErrorEvent`].
#[derive(Debug, Clone)]
pub struct ErrorEventBuilder {
    base: EventBase,
    message: Option<String>,
    stack_trace: Option<String>,
    exception_name: Option<String>,
    fatal: Option<bool>,
    limits: Option<EventLimits>,
}

impl ErrorEventBuilder {
    /// The error message. Required; must be non-empty at build time.
    pub fn message(mut self, value: impl Into<String>) -> Self {
        self.message = Some(value.into());
        self
    }

    /// The stack trace as captured by the host.
    pub fn stack_trace(mut self, value: impl Into<String>) -> Self {
        self.stack_trace = Some(value.into());
        self
    }

    /// The exception or error type name.
    pub fn exception_name(mut self, value: impl Into<String>) -> Self {
        self.exception_name = Some(value.into());
        self
    }

    /// Whether the error ended the application. Defaults to true when
    /// never staged.
    pub fn fatal(mut self, value: bool) -> Self {
        self.fatal = Some(value);
        self
    }

    /// Field limits applied when the event renders its payload.
    pub fn limits(mut self, limits: EventLimits) -> Self {
        self.limits = Some(limits);
        self
    }
}

impl EventBuilder for ErrorEventBuilder {
    type Event = ErrorEvent;

    fn base_mut(&mut self) -> &mut EventBase {
        &mut self.base
    }

    fn build(self) -> Result<ErrorEvent, BuildError> {
        let message = self.message.ok_or(BuildError::MissingField {
            event: EVENT,
            field: "message",
        })?;
        if message.is_empty() {
            return Err(BuildError::EmptyField {
                event: EVENT,
                field: "message",
            });
        }
        Ok(ErrorEvent {
            base: self.base,
            message,
            stack_trace: self.stack_trace,
            exception_name: self.exception_name,
            fatal: self.fatal.unwrap_or(true),
            limits: self.limits.unwrap_or_default(),
        })
    }
}

/// Cuts `value` to at most `limit` bytes without splitting a UTF-8 code
/// point.
fn truncated<'a>(value: &'a str, limit: usize, field: &'static str) -> &'a str {
    if value.len() <= limit {
        return value;
    }
    let mut end = limit;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    tracing::debug!(field, limit, "field over limit, truncating");
    &value[..end]
}
