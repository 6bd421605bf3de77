//! Custom self-describing events.

use beacon_payload::SelfDescribingJson;

use crate::{BuildError, EventBase, EventBuilder};

const EVENT: &str = "self_describing";

/// A custom event whose envelope the caller supplies whole.
///
/// This is the escape hatch for event kinds the model does not type:
/// the caller provides a schema-tagged envelope and the model only
/// insists that the schema is actually there.
#[derive(Debug, Clone)]
pub struct SelfDescribingEvent {
    base: EventBase,
    event_data: SelfDescribingJson,
}

impl SelfDescribingEvent {
    /// Starts staging a custom event.
    pub fn builder() -> SelfDescribingEventBuilder {
        SelfDescribingEventBuilder {
            base: EventBase::now(),
            event_data: None,
        }
    }

    /// The base attributes.
    pub fn base(&self) -> &EventBase {
        &self.base
    }

    /// The envelope's schema URI.
    pub fn schema(&self) -> &str {
        self.event_data.schema()
    }

    /// Returns the envelope exactly as staged.
    pub fn payload(&self) -> SelfDescribingJson {
        self.event_data.clone()
    }
}

/// Staged construction of a [`SelfDescribingEvent`].
#[derive(Debug, Clone)]
pub struct SelfDescribingEventBuilder {
    base: EventBase,
    event_data: Option<SelfDescribingJson>,
}

impl SelfDescribingEventBuilder {
    /// The event's envelope. Required; its schema must be non-empty at
    /// build time.
    pub fn event_data(mut self, envelope: SelfDescribingJson) -> Self {
        self.event_data = Some(envelope);
        self
    }
}

impl EventBuilder for SelfDescribingEventBuilder {
    type Event = SelfDescribingEvent;

    fn base_mut(&mut self) -> &mut EventBase {
        &mut self.base
    }

    fn build(self) -> Result<SelfDescribingEvent, BuildError> {
        let event_data = self.event_data.ok_or(BuildError::MissingField {
            event: EVENT,
            field: "event_data",
        })?;
        if event_data.schema().is_empty() {
            return Err(BuildError::EmptyField {
                event: EVENT,
                field: "schema",
            });
        }
        Ok(SelfDescribingEvent {
            base: self.base,
            event_data,
        })
    }
}
