use thiserror::Error;

/// Why a builder refused to produce an event.
///
/// Build failures surface synchronously to the builder's caller. A
/// failed build never yields a partial event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A required field was never staged.
    #[error("{event} event requires `{field}`")]
    MissingField {
        event: &'static str,
        field: &'static str,
    },
    /// A required field was staged with an empty value.
    #[error("{event} event field `{field}` must be non-empty")]
    EmptyField {
        event: &'static str,
        field: &'static str,
    },
}
