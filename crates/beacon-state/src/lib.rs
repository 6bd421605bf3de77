//! Screen navigation state for the Beacon event model.
//!
//! A [`ScreenState`] is the immutable identity of one presented screen:
//! its name, optional type, a unique screen identifier, and the
//! transition used to arrive there. States are cheap values constructed
//! by the navigation layer on every screen change.
//!
//! The [`ScreenStateTracker`] owns the current and previous states.
//! Each [`transition`](ScreenStateTracker::transition) swaps them under
//! a lock and hands back both as shared snapshots, so event-enrichment
//! code on any thread only ever observes fully constructed states.
//!
//! # Usage
//!
//! ```rust,ignore
//! use beacon_state::{ScreenState, ScreenStateTracker};
//!
//! let tracker = ScreenStateTracker::new();
//! tracker.transition(ScreenState::new("Home", Some("main"), None));
//! let step = tracker.transition(ScreenState::with_transition(
//!     "Checkout",
//!     Some("modal"),
//!     None,
//!     Some("present"),
//! ));
//!
//! assert_eq!(step.previous.unwrap().name(), "Home");
//! if let Some(context) = tracker.screen_context() {
//!     // attach the screen entity to outgoing events
//! }
//! ```

mod screen_state;
mod tracker;

pub use screen_state::ScreenState;
pub use tracker::{ScreenStateTracker, ScreenTransition};

#[cfg(test)]
mod tests;
