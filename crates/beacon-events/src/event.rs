//! The closed event sum type.

use beacon_payload::SelfDescribingJson;
use beacon_types::{SCHEMA_APPLICATION_ERROR, SCHEMA_SCREEN_VIEW, SCHEMA_TIMING};

use crate::{ErrorEvent, EventBase, ScreenViewEvent, SelfDescribingEvent, TimingEvent};

/// Any event the model can track.
///
/// The set is closed on purpose: emission code matches exhaustively,
/// so adding a variant surfaces every site that must handle it.
#[derive(Debug, Clone)]
pub enum Event {
    Error(ErrorEvent),
    ScreenView(ScreenViewEvent),
    Timing(TimingEvent),
    SelfDescribing(SelfDescribingEvent),
}

impl Event {
    /// The base attributes shared by every variant.
    pub fn base(&self) -> &EventBase {
        match self {
            Event::Error(event) => event.base(),
            Event::ScreenView(event) => event.base(),
            Event::Timing(event) => event.base(),
            Event::SelfDescribing(event) => event.base(),
        }
    }

    /// The schema URI the event carries on the wire.
    pub fn schema(&self) -> &str {
        match self {
            Event::Error(_) => SCHEMA_APPLICATION_ERROR,
            Event::ScreenView(_) => SCHEMA_SCREEN_VIEW,
            Event::Timing(_) => SCHEMA_TIMING,
            Event::SelfDescribing(event) => event.schema(),
        }
    }

    /// Stable lowercase label for logging and diagnostics.
    pub fn event_name(&self) -> &'static str {
        match self {
            Event::Error(_) => "error",
            Event::ScreenView(_) => "screen_view",
            Event::Timing(_) => "timing",
            Event::SelfDescribing(_) => "self_describing",
        }
    }

    /// Renders the event into its self-describing envelope.
    pub fn payload(&self) -> SelfDescribingJson {
        match self {
            Event::Error(event) => event.payload(),
            Event::ScreenView(event) => event.payload(),
            Event::Timing(event) => event.payload(),
            Event::SelfDescribing(event) => event.payload(),
        }
    }
}

impl From<ErrorEvent> for Event {
    fn from(event: ErrorEvent) -> Self {
        Event::Error(event)
    }
}

impl From<ScreenViewEvent> for Event {
    fn from(event: ScreenViewEvent) -> Self {
        Event::ScreenView(event)
    }
}

impl From<TimingEvent> for Event {
    fn from(event: TimingEvent) -> Self {
        Event::Timing(event)
    }
}

impl From<SelfDescribingEvent> for Event {
    fn from(event: SelfDescribingEvent) -> Self {
        Event::SelfDescribing(event)
    }
}
