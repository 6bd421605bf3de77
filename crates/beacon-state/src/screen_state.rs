//! Immutable screen identity.

use beacon_payload::{Payload, SelfDescribingJson};
use beacon_types::{
    KEY_SCREEN_ID, KEY_SCREEN_NAME, KEY_SCREEN_TRANSITION_TYPE, KEY_SCREEN_TYPE,
    SCHEMA_SCREEN_ENTITY,
};
use uuid::Uuid;

/// The identity of one presented screen.
///
/// A state is **valid** when its name is non-empty, and only a valid
/// state may enrich outgoing events; [`screen_context`] enforces that
/// gate. Field *presence* is a separate question answered by
/// [`valid_dictionary`], which reports whatever fields the state
/// carries without judging validity. Callers deciding whether to
/// export must branch on [`is_valid`] first.
///
/// States hold no back-reference to their predecessor. Chaining screen
/// visits is the tracker's job.
///
/// [`screen_context`]: Self::screen_context
/// [`valid_dictionary`]: Self::valid_dictionary
/// [`is_valid`]: Self::is_valid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenState {
    name: String,
    screen_type: Option<String>,
    screen_id: String,
    transition_type: Option<String>,
}

impl ScreenState {
    /// Creates a state with no transition classification.
    ///
    /// Used for the initial screen and wherever no transition applies.
    /// `screen_id` is generated fresh when not supplied.
    pub fn new(
        name: impl Into<String>,
        screen_type: Option<&str>,
        screen_id: Option<&str>,
    ) -> Self {
        Self::with_transition(name, screen_type, screen_id, None)
    }

    /// Creates a state for an explicit transition (push, pop, modal
    /// present).
    ///
    /// `screen_id` is generated fresh when not supplied; it is never
    /// derived from the name or type.
    pub fn with_transition(
        name: impl Into<String>,
        screen_type: Option<&str>,
        screen_id: Option<&str>,
        transition_type: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            screen_type: screen_type.map(str::to_owned),
            screen_id: screen_id
                .map(str::to_owned)
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            transition_type: transition_type.map(str::to_owned),
        }
    }

    /// The screen name. Empty when the navigation layer supplied none.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The screen type, if classified.
    pub fn screen_type(&self) -> Option<&str> {
        self.screen_type.as_deref()
    }

    /// The unique screen identifier.
    pub fn screen_id(&self) -> &str {
        &self.screen_id
    }

    /// The transition used to arrive at the screen, if classified.
    pub fn transition_type(&self) -> Option<&str> {
        self.transition_type.as_deref()
    }

    /// Whether the state may be used to enrich events.
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty()
    }

    /// The fields the state carries, keyed for the wire.
    ///
    /// Absent fields are omitted, never defaulted to empty strings. An
    /// empty name is omitted too, but this reports presence only; it
    /// does not reject invalid states.
    pub fn valid_dictionary(&self) -> Payload {
        let mut fields = Payload::new();
        fields.add(KEY_SCREEN_NAME, self.name.as_str());
        fields.add(KEY_SCREEN_ID, self.screen_id.as_str());
        fields.add_opt(KEY_SCREEN_TYPE, self.screen_type.as_deref());
        fields.add_opt(KEY_SCREEN_TRANSITION_TYPE, self.transition_type.as_deref());
        fields
    }

    /// The screen context entity for event enrichment, or `None` when
    /// the state is invalid.
    pub fn screen_context(&self) -> Option<SelfDescribingJson> {
        if !self.is_valid() {
            tracing::debug!(
                screen_id = self.screen_id(),
                "screen state is invalid, refusing to export context"
            );
            return None;
        }
        Some(SelfDescribingJson::from_payload(
            SCHEMA_SCREEN_ENTITY,
            self.valid_dictionary(),
        ))
    }

    /// Snapshot for the previous-state slot: keeps the screen identity,
    /// drops the transition. Previous transitions are not tracked.
    pub fn without_transition(&self) -> Self {
        Self {
            name: self.name.clone(),
            screen_type: self.screen_type.clone(),
            screen_id: self.screen_id.clone(),
            transition_type: None,
        }
    }
}
