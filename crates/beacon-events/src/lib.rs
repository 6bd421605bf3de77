//! Event model for Beacon: staged builders, immutable events, and
//! self-describing payload rendering.
//!
//! Every event variant is built through the [`EventBuilder`] contract:
//! fluent setters stage the fields, and a terminal
//! [`build`](EventBuilder::build) validates the variant's required
//! fields before freezing the event. A failed build returns a
//! [`BuildError`] naming the offending field; it never yields a partial
//! event. Built events are immutable and render their wire form on
//! demand through `payload()`.
//!
//! # Variants
//!
//! | Variant | Required fields |
//! |---------|-----------------|
//! | [`ErrorEvent`] | `message` |
//! | [`ScreenViewEvent`] | `name` |
//! | [`TimingEvent`] | `category`, `variable`, `timing` |
//! | [`SelfDescribingEvent`] | `event_data` (non-empty schema) |
//!
//! The [`Event`] sum type closes over the variants for emission code.
//!
//! # Usage
//!
//! ```rust,ignore
//! use beacon_events::{ErrorEvent, Event, EventBuilder};
//!
//! let event: Event = ErrorEvent::builder()
//!     .message("index out of range")
//!     .exception_name("IndexError")
//!     .fatal(false)
//!     .build()?
//!     .into();
//! let envelope = event.payload();
//! ```

mod base;
mod error;
mod error_event;
mod event;
mod screen_view;
mod self_describing;
mod subject;
mod timing;

pub use base::{EventBase, EventBuilder};
pub use error::BuildError;
pub use error_event::{ErrorEvent, ErrorEventBuilder};
pub use event::Event;
pub use screen_view::{ScreenViewEvent, ScreenViewEventBuilder};
pub use self_describing::{SelfDescribingEvent, SelfDescribingEventBuilder};
pub use subject::Subject;
pub use timing::{TimingEvent, TimingEventBuilder};
