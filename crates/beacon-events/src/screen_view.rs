//! The screen-view event.

use beacon_payload::{Payload, SelfDescribingJson};
use beacon_state::ScreenState;
use beacon_types::{
    KEY_SCREEN_ID, KEY_SCREEN_NAME, KEY_SCREEN_PREVIOUS_ID, KEY_SCREEN_PREVIOUS_NAME,
    KEY_SCREEN_PREVIOUS_TYPE, KEY_SCREEN_TRANSITION_TYPE, KEY_SCREEN_TYPE, SCHEMA_SCREEN_VIEW,
};
use uuid::Uuid;

use crate::{BuildError, EventBase, EventBuilder};

const EVENT: &str = "screen_view";

/// One screen being presented to the user.
///
/// `name` is required. `screen_id` is generated at build time when not
/// supplied, so every tracked view has an identity the next view can
/// link back to. The previous-screen fields are folded in from the
/// tracker's retired state via [`ScreenViewEventBuilder::previous`].
#[derive(Debug, Clone)]
pub struct ScreenViewEvent {
    base: EventBase,
    name: String,
    screen_id: String,
    screen_type: Option<String>,
    transition_type: Option<String>,
    previous_name: Option<String>,
    previous_id: Option<String>,
    previous_type: Option<String>,
}

impl ScreenViewEvent {
    /// Starts staging a screen-view event.
    pub fn builder() -> ScreenViewEventBuilder {
        ScreenViewEventBuilder {
            base: EventBase::now(),
            name: None,
            screen_id: None,
            screen_type: None,
            transition_type: None,
            previous_name: None,
            previous_id: None,
            previous_type: None,
        }
    }

    /// The base attributes.
    pub fn base(&self) -> &EventBase {
        &self.base
    }

    /// The screen name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The screen identifier.
    pub fn screen_id(&self) -> &str {
        &self.screen_id
    }

    /// The screen type, if classified.
    pub fn screen_type(&self) -> Option<&str> {
        self.screen_type.as_deref()
    }

    /// The transition used to arrive at the screen, if classified.
    pub fn transition_type(&self) -> Option<&str> {
        self.transition_type.as_deref()
    }

    /// Name of the screen navigated away from, if one was staged.
    pub fn previous_name(&self) -> Option<&str> {
        self.previous_name.as_deref()
    }

    /// Identifier of the screen navigated away from, if one was staged.
    pub fn previous_id(&self) -> Option<&str> {
        self.previous_id.as_deref()
    }

    /// Type of the screen navigated away from, if one was staged.
    pub fn previous_type(&self) -> Option<&str> {
        self.previous_type.as_deref()
    }

    /// Derives the state the navigation layer hands to the tracker once
    /// this view has been tracked.
    pub fn to_state(&self) -> ScreenState {
        ScreenState::with_transition(
            self.name.as_str(),
            self.screen_type.as_deref(),
            Some(self.screen_id.as_str()),
            self.transition_type.as_deref(),
        )
    }

    /// Renders the view into its self-describing envelope. Absent
    /// fields are omitted.
    pub fn payload(&self) -> SelfDescribingJson {
        let mut data = Payload::new();
        data.add(KEY_SCREEN_NAME, self.name.as_str());
        data.add(KEY_SCREEN_ID, self.screen_id.as_str());
        data.add_opt(KEY_SCREEN_TYPE, self.screen_type.as_deref());
        data.add_opt(KEY_SCREEN_TRANSITION_TYPE, self.transition_type.as_deref());
        data.add_opt(KEY_SCREEN_PREVIOUS_NAME, self.previous_name.as_deref());
        data.add_opt(KEY_SCREEN_PREVIOUS_ID, self.previous_id.as_deref());
        data.add_opt(KEY_SCREEN_PREVIOUS_TYPE, self.previous_type.as_deref());
        SelfDescribingJson::from_payload(SCHEMA_SCREEN_VIEW, data)
    }
}

/// Staged construction of a [`ScreenViewEvent`].
#[derive(Debug, Clone)]
pub struct ScreenViewEventBuilder {
    base: EventBase,
    name: Option<String>,
    screen_id: Option<String>,
    screen_type: Option<String>,
    transition_type: Option<String>,
    previous_name: Option<String>,
    previous_id: Option<String>,
    previous_type: Option<String>,
}

impl ScreenViewEventBuilder {
    /// The screen name. Required; must be non-empty at build time.
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    /// The screen identifier. Generated at build time when not staged.
    pub fn screen_id(mut self, value: impl Into<String>) -> Self {
        self.screen_id = Some(value.into());
        self
    }

    /// The screen type.
    pub fn screen_type(mut self, value: impl Into<String>) -> Self {
        self.screen_type = Some(value.into());
        self
    }

    /// The transition used to arrive at the screen.
    pub fn transition_type(mut self, value: impl Into<String>) -> Self {
        self.transition_type = Some(value.into());
        self
    }

    /// Folds the previous screen's identity in from a retired state.
    ///
    /// An empty previous name stays absent; the previous identifier is
    /// always carried so visit chains survive an unnamed screen.
    pub fn previous(mut self, state: &ScreenState) -> Self {
        self.previous_name = state.is_valid().then(|| state.name().to_owned());
        self.previous_id = Some(state.screen_id().to_owned());
        self.previous_type = state.screen_type().map(str::to_owned);
        self
    }
}

impl EventBuilder for ScreenViewEventBuilder {
    type Event = ScreenViewEvent;

    fn base_mut(&mut self) -> &mut EventBase {
        &mut self.base
    }

    fn build(self) -> Result<ScreenViewEvent, BuildError> {
        let name = self.name.ok_or(BuildError::MissingField {
            event: EVENT,
            field: "name",
        })?;
        if name.is_empty() {
            return Err(BuildError::EmptyField {
                event: EVENT,
                field: "name",
            });
        }
        Ok(ScreenViewEvent {
            base: self.base,
            name,
            screen_id: self
                .screen_id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            screen_type: self.screen_type,
            transition_type: self.transition_type,
            previous_name: self.previous_name,
            previous_id: self.previous_id,
            previous_type: self.previous_type,
        })
    }
}
