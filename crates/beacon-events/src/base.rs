//! Base event attributes and the staged builder contract.

use beacon_payload::SelfDescribingJson;
use chrono::{DateTime, Utc};

use crate::{BuildError, Subject};

/// Attributes shared by every event variant.
///
/// The wall-clock `timestamp` is captured when the builder is created
/// and is always present; everything else is staged through the
/// [`EventBuilder`] setters. Once an event is built, its base is
/// immutable and read through the accessors here by whatever assembles
/// the final wire payload.
#[derive(Debug, Clone)]
pub struct EventBase {
    pub(crate) timestamp: DateTime<Utc>,
    pub(crate) created_timestamp: Option<DateTime<Utc>>,
    pub(crate) true_timestamp: Option<DateTime<Utc>>,
    pub(crate) contexts: Vec<SelfDescribingJson>,
    pub(crate) subject: Option<Subject>,
}

impl EventBase {
    pub(crate) fn now() -> Self {
        Self {
            timestamp: Utc::now(),
            created_timestamp: None,
            true_timestamp: None,
            contexts: Vec::new(),
            subject: None,
        }
    }

    /// When the event was constructed.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// The device-created timestamp override, if staged.
    pub fn created_timestamp(&self) -> Option<DateTime<Utc>> {
        self.created_timestamp
    }

    /// The true-timestamp override, if staged.
    pub fn true_timestamp(&self) -> Option<DateTime<Utc>> {
        self.true_timestamp
    }

    /// Context entities attached to the event, in staging order.
    pub fn contexts(&self) -> &[SelfDescribingJson] {
        &self.contexts
    }

    /// The per-event subject override, if staged.
    pub fn subject(&self) -> Option<&Subject> {
        self.subject.as_ref()
    }
}

/// The staged construction contract every event builder implements.
///
/// Builders are by-value fluent: each setter consumes and returns the
/// builder, and the terminal [`build`](Self::build) validates the
/// variant's required fields before freezing the event. Setters
/// overwrite; none of them validate beyond their types. Staging does no
/// I/O and has no side effects.
pub trait EventBuilder: Sized {
    /// The event variant this builder produces.
    type Event;

    /// The base attributes staged so far.
    fn base_mut(&mut self) -> &mut EventBase;

    /// Sets the true-timestamp override.
    fn true_timestamp(mut self, ts: DateTime<Utc>) -> Self {
        self.base_mut().true_timestamp = Some(ts);
        self
    }

    /// Sets the device-created timestamp override.
    fn created_timestamp(mut self, ts: DateTime<Utc>) -> Self {
        self.base_mut().created_timestamp = Some(ts);
        self
    }

    /// Replaces the staged context list.
    fn contexts(mut self, contexts: Vec<SelfDescribingJson>) -> Self {
        self.base_mut().contexts = contexts;
        self
    }

    /// Appends one context entity to the staged list.
    fn context(mut self, context: SelfDescribingJson) -> Self {
        self.base_mut().contexts.push(context);
        self
    }

    /// Sets the per-event subject override.
    fn subject(mut self, subject: Subject) -> Self {
        self.base_mut().subject = Some(subject);
        self
    }

    /// Validates required fields and freezes the event.
    ///
    /// Fails when a required field is missing or empty; the error names
    /// the event and the offending field.
    fn build(self) -> Result<Self::Event, BuildError>;
}
