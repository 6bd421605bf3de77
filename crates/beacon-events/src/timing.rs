//! The user-timing event.

use beacon_payload::{Payload, SelfDescribingJson};
use beacon_types::{
    KEY_TIMING_CATEGORY, KEY_TIMING_LABEL, KEY_TIMING_TIMING, KEY_TIMING_VARIABLE, SCHEMA_TIMING,
};
use serde_json::json;

use crate::{BuildError, EventBase, EventBuilder};

const EVENT: &str = "timing";

/// A measured duration, classified by category and variable.
#[derive(Debug, Clone)]
pub struct TimingEvent {
    base: EventBase,
    category: String,
    variable: String,
    timing: i64,
    label: Option<String>,
}

impl TimingEvent {
    /// Starts staging a timing event.
    pub fn builder() -> TimingEventBuilder {
        TimingEventBuilder {
            base: EventBase::now(),
            category: None,
            variable: None,
            timing: None,
            label: None,
        }
    }

    /// The base attributes.
    pub fn base(&self) -> &EventBase {
        &self.base
    }

    /// The timing category.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The timed variable.
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// The measured time in milliseconds.
    pub fn timing(&self) -> i64 {
        self.timing
    }

    /// The optional label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Renders the timing into its self-describing envelope.
    pub fn payload(&self) -> SelfDescribingJson {
        let mut data = Payload::new();
        data.add(KEY_TIMING_CATEGORY, self.category.as_str());
        data.add(KEY_TIMING_VARIABLE, self.variable.as_str());
        data.add_value(KEY_TIMING_TIMING, json!(self.timing));
        data.add_opt(KEY_TIMING_LABEL, self.label.as_deref());
        SelfDescribingJson::from_payload(SCHEMA_TIMING, data)
    }
}

/// Staged construction of a [`TimingEvent`].
#[derive(Debug, Clone)]
pub struct TimingEventBuilder {
    base: EventBase,
    category: Option<String>,
    variable: Option<String>,
    timing: Option<i64>,
    label: Option<String>,
}

impl TimingEventBuilder {
    /// The timing category. Required; must be non-empty at build time.
    pub fn category(mut self, value: impl Into<String>) -> Self {
        self.category = Some(value.into());
        self
    }

    /// The timed variable. Required; must be non-empty at build time.
    pub fn variable(mut self, value: impl Into<String>) -> Self {
        self.variable = Some(value.into());
        self
    }

    /// The measured time in milliseconds. Required.
    pub fn timing(mut self, value: i64) -> Self {
        self.timing = Some(value);
        self
    }

    /// An optional label for the measurement.
    pub fn label(mut self, value: impl Into<String>) -> Self {
        self.label = Some(value.into());
        self
    }
}

impl EventBuilder for TimingEventBuilder {
    type Event = TimingEvent;

    fn base_mut(&mut self) -> &mut EventBase {
        &mut self.base
    }

    fn build(self) -> Result<TimingEvent, BuildError> {
        let category = self.category.ok_or(BuildError::MissingField {
            event: EVENT,
            field: "category",
        })?;
        if category.is_empty() {
            return Err(BuildError::EmptyField {
                event: EVENT,
                field: "category",
            });
        }
        let variable = self.variable.ok_or(BuildError::MissingField {
            event: EVENT,
            field: "variable",
        })?;
        if variable.is_empty() {
            return Err(BuildError::EmptyField {
                event: EVENT,
                field: "variable",
            });
        }
        let timing = self.timing.ok_or(BuildError::MissingField {
            event: EVENT,
            field: "timing",
        })?;
        Ok(TimingEvent {
            base: self.base,
            category,
            variable,
            timing,
            label: self.label,
        })
    }
}
