//! Current/previous screen bookkeeping.

use std::sync::{Arc, Mutex, MutexGuard};

use beacon_payload::SelfDescribingJson;

use crate::ScreenState;

/// Outcome of one navigation step: the state just installed and a
/// snapshot of the one it replaced.
#[derive(Debug, Clone)]
pub struct ScreenTransition {
    /// The replaced state, without its transition. `None` on the very
    /// first step.
    pub previous: Option<Arc<ScreenState>>,
    /// The state now current.
    pub current: Arc<ScreenState>,
}

#[derive(Debug, Default)]
struct Slots {
    current: Option<Arc<ScreenState>>,
    previous: Option<Arc<ScreenState>>,
}

/// Owns the current and previous screen states for one tracker.
///
/// Navigation callbacks write, enrichment paths read, and both go
/// through one lock, so a reader only ever observes a fully
/// constructed state. Cloning the tracker hands out another handle to
/// the same slots.
#[derive(Debug, Clone, Default)]
pub struct ScreenStateTracker {
    slots: Arc<Mutex<Slots>>,
}

impl ScreenStateTracker {
    /// Creates a tracker that has seen no screen yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `next` as the current state, demoting the old current
    /// to the previous slot.
    ///
    /// The previous slot keeps the replaced screen's identity but not
    /// its transition. An invalid `next` is still installed so the
    /// bookkeeping follows the navigation layer, but it will refuse to
    /// export a screen context.
    pub fn transition(&self, next: ScreenState) -> ScreenTransition {
        if !next.is_valid() {
            tracing::warn!(
                screen_id = next.screen_id(),
                "screen state has no name and will not enrich events"
            );
        }
        let next = Arc::new(next);
        let mut slots = self.lock_slots();
        let previous = slots
            .current
            .take()
            .map(|replaced| Arc::new(replaced.without_transition()));
        slots.previous = previous.clone();
        slots.current = Some(Arc::clone(&next));
        drop(slots);

        tracing::debug!(
            screen = next.name(),
            screen_id = next.screen_id(),
            transition_type = next.transition_type().unwrap_or_default(),
            "screen transition"
        );
        ScreenTransition {
            previous,
            current: next,
        }
    }

    /// The current state, once any screen has been seen.
    pub fn current(&self) -> Option<Arc<ScreenState>> {
        self.lock_slots().current.clone()
    }

    /// The previous state, once at least two screens have been seen.
    pub fn previous(&self) -> Option<Arc<ScreenState>> {
        self.lock_slots().previous.clone()
    }

    /// The current screen's context entity, or `None` when no screen
    /// has been seen or the current state is invalid.
    pub fn screen_context(&self) -> Option<SelfDescribingJson> {
        self.current().and_then(|state| state.screen_context())
    }

    fn lock_slots(&self) -> MutexGuard<'_, Slots> {
        // A poisoned lock still holds fully constructed states; the
        // worst case is a stale snapshot.
        self.slots.lock().unwrap_or_else(|poisoned| {
            tracing::error!("screen state lock poisoned, recovering");
            poisoned.into_inner()
        })
    }
}
