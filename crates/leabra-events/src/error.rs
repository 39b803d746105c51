//! Error types for the `leabra-events` crate.
//!
//! Every constructor and lookup in this crate returns [`EventError`]
//! synchronously. Nothing is retried or swallowed here; the engine that
//! issued the call decides whether to abort the run or skip the
//! offending instruction.

/// Broad class of an [`EventError`].
///
/// Lets callers branch on the kind of failure without matching every
/// variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// A value failed a construction-time check (range, emptiness, uniqueness).
    Validation,
    /// A name did not resolve to a registered descriptor.
    Lookup,
    /// A string did not name a concrete event variant.
    Type,
}

/// Errors raised while building events or using the registries.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EventError {
    /// A hard clamp activation lies outside `[0, 1]` (or is NaN).
    #[error("activation {value} at index {index} for layer {layer_name} is outside [0, 1]")]
    ActivationOutOfRange {
        /// The layer the clamp targets.
        layer_name: String,
        /// Position of the first offending value.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// A phase was registered with an empty name.
    #[error("phase must have a name")]
    EmptyPhaseName,

    /// A phase name is already taken.
    #[error("phase name is already taken: {0}")]
    DuplicatePhase(String),

    /// A frequency name is already taken and the registry rejects duplicates.
    #[error("frequency name is already taken: {0}")]
    DuplicateFrequency(String),

    /// No phase is registered under the given name.
    #[error("no phase with name {0} exists")]
    UnknownPhase(String),

    /// No frequency is registered under the given name.
    #[error("no frequency with name {0} exists")]
    UnknownFrequency(String),

    /// The given string does not name an event variant.
    #[error("{0} is not an event variant")]
    UnknownEventKind(String),
}

impl EventError {
    /// Return the category this error belongs to.
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::ActivationOutOfRange { .. }
            | Self::EmptyPhaseName
            | Self::DuplicatePhase(_)
            | Self::DuplicateFrequency(_) => ErrorCategory::Validation,
            Self::UnknownPhase(_) | Self::UnknownFrequency(_) => ErrorCategory::Lookup,
            Self::UnknownEventKind(_) => ErrorCategory::Type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_follow_taxonomy() {
        assert_eq!(EventError::EmptyPhaseName.category(), ErrorCategory::Validation);
        assert_eq!(
            EventError::DuplicatePhase("plus".to_owned()).category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            EventError::UnknownFrequency("whales".to_owned()).category(),
            ErrorCategory::Lookup
        );
        assert_eq!(
            EventError::UnknownEventKind("Whale".to_owned()).category(),
            ErrorCategory::Type
        );
    }

    #[test]
    fn messages_name_the_offender() {
        let err = EventError::UnknownPhase("beta".to_owned());
        assert_eq!(err.to_string(), "no phase with name beta exists");
    }
}
