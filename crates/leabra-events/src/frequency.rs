//! Logging frequencies and the registry that mints them.
//!
//! A [`Frequency`] pairs a name (`cycle`, `trial`, ...) with the
//! [`EventKind`] that closes one period at that cadence. Logging events
//! carry a frequency so loggers know which stream to pause or resume.
//!
//! # Duplicate names
//!
//! Unlike phases, frequencies have historically been last-write-wins: a
//! second registration under the same name replaces the first. The
//! behaviour is kept as the default but made explicit through
//! [`DuplicatePolicy`], so a registry can opt into rejecting duplicates.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::EventError;
use crate::event::{Event, EventKind};

/// Name of the per-cycle frequency.
pub const CYCLE: &str = "cycle";

/// Name of the per-trial frequency.
pub const TRIAL: &str = "trial";

/// Name of the per-epoch frequency.
pub const EPOCH: &str = "epoch";

/// Name of the per-batch frequency.
pub const BATCH: &str = "batch";

/// Frequencies every [`FrequencyRegistry`] starts with.
pub const DEFAULT_FREQUENCIES: [(&str, EventKind); 4] = [
    (CYCLE, EventKind::Cycle),
    (TRIAL, EventKind::EndTrial),
    (EPOCH, EventKind::EndEpoch),
    (BATCH, EventKind::EndBatch),
];

/// What a registry does when a name is registered twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Replace the existing entry (last write wins).
    #[default]
    Overwrite,
    /// Fail with a validation error and keep the existing entry.
    Reject,
}

/// A registered logging frequency.
///
/// Equality and hashing are structural: two frequencies are equal when
/// both the name and the end event match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frequency {
    name: Arc<str>,
    end_event_kind: EventKind,
}

impl Frequency {
    fn new(name: &str, end_event_kind: EventKind) -> Self {
        Self {
            name: Arc::from(name),
            end_event_kind,
        }
    }

    /// Return the frequency name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the kind of event that ends one period.
    pub const fn end_event_kind(&self) -> EventKind {
        self.end_event_kind
    }

    /// Return whether `event` closes a period at this frequency.
    pub fn is_ended_by(&self, event: &Event) -> bool {
        event.kind() == self.end_event_kind
    }
}

impl core::fmt::Display for Frequency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Registry of every logging frequency known to a network.
#[derive(Debug, Clone)]
pub struct FrequencyRegistry {
    frequencies: BTreeMap<String, Frequency>,
    policy: DuplicatePolicy,
}

impl FrequencyRegistry {
    /// Create a registry with the default frequencies and the
    /// [`DuplicatePolicy::Overwrite`] policy.
    pub fn new() -> Self {
        Self::with_policy(DuplicatePolicy::Overwrite)
    }

    /// Create a registry with the default frequencies and an explicit
    /// duplicate policy.
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        let frequencies = DEFAULT_FREQUENCIES
            .iter()
            .map(|&(name, kind)| (name.to_owned(), Frequency::new(name, kind)))
            .collect();
        Self {
            frequencies,
            policy,
        }
    }

    /// Return the duplicate policy in force.
    pub const fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Register a frequency and return it.
    ///
    /// The defaults are ordinary entries: under
    /// [`DuplicatePolicy::Overwrite`] even `cycle` can be remapped.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::DuplicateFrequency`] if the name is taken and
    /// the policy is [`DuplicatePolicy::Reject`].
    pub fn register(&mut self, name: &str, end_event_kind: EventKind) -> Result<Frequency, EventError> {
        let frequency = Frequency::new(name, end_event_kind);

        if let Some(previous) = self.frequencies.get(name) {
            match self.policy {
                DuplicatePolicy::Reject => {
                    return Err(EventError::DuplicateFrequency(name.to_owned()));
                }
                DuplicatePolicy::Overwrite => {
                    warn!(
                        frequency = name,
                        previous_end_event = %previous.end_event_kind,
                        end_event = %end_event_kind,
                        "frequency overwritten"
                    );
                }
            }
        }

        self.frequencies.insert(name.to_owned(), frequency.clone());
        debug!(frequency = name, end_event = %end_event_kind, "frequency registered");
        Ok(frequency)
    }

    /// Register a frequency whose end event is given by variant name
    /// (`"EndTrial"` or `"end_trial"`).
    ///
    /// # Errors
    ///
    /// Returns [`EventError::UnknownEventKind`] if `end_event` does not
    /// name an event variant, otherwise whatever [`register`] returns.
    ///
    /// [`register`]: FrequencyRegistry::register
    pub fn register_named(&mut self, name: &str, end_event: &str) -> Result<Frequency, EventError> {
        let kind = end_event.parse::<EventKind>()?;
        self.register(name, kind)
    }

    /// Look up a frequency by name.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::UnknownFrequency`] if no frequency has that name.
    pub fn lookup(&self, name: &str) -> Result<Frequency, EventError> {
        self.frequencies
            .get(name)
            .cloned()
            .ok_or_else(|| EventError::UnknownFrequency(name.to_owned()))
    }

    /// Return whether a frequency with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.frequencies.contains_key(name)
    }

    /// Return the names of all registered frequencies, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.frequencies.keys().map(String::as_str).collect()
    }

    /// Return all registered frequencies, sorted by name.
    pub fn frequencies(&self) -> Vec<Frequency> {
        self.frequencies.values().cloned().collect()
    }

    /// Return the number of registered frequencies.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Return whether the registry holds no frequencies.
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

impl Default for FrequencyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::error::ErrorCategory;

    #[test]
    fn defaults_are_registered() {
        let registry = FrequencyRegistry::new();
        let names: BTreeSet<&str> = registry.names().into_iter().collect();
        assert_eq!(names, BTreeSet::from(["cycle", "trial", "epoch", "batch"]));
    }

    #[test]
    fn defaults_map_to_their_end_events() {
        let registry = FrequencyRegistry::new();
        for (name, kind) in DEFAULT_FREQUENCIES {
            let frequency = registry.lookup(name).unwrap();
            assert_eq!(frequency.name(), name);
            assert_eq!(frequency.end_event_kind(), kind);
        }
    }

    #[test]
    fn unknown_name_fails_lookup() {
        let registry = FrequencyRegistry::new();
        let err = registry.lookup("whales").unwrap_err();
        assert_eq!(err, EventError::UnknownFrequency("whales".to_owned()));
        assert_eq!(err.category(), ErrorCategory::Lookup);
    }

    #[test]
    fn repeated_lookups_are_equal() {
        let registry = FrequencyRegistry::new();
        assert_eq!(registry.lookup(TRIAL).unwrap(), registry.lookup(TRIAL).unwrap());
    }

    #[test]
    fn equality_is_structural() {
        let mut scratch = FrequencyRegistry::new();
        let registry = FrequencyRegistry::new();

        let rebuilt = scratch.register(TRIAL, EventKind::EndTrial).unwrap();
        assert_eq!(rebuilt, registry.lookup(TRIAL).unwrap());
        assert_ne!(rebuilt, registry.lookup(CYCLE).unwrap());
        assert_ne!(rebuilt, registry.lookup(EPOCH).unwrap());
        assert_ne!(rebuilt, registry.lookup(BATCH).unwrap());

        let remapped = scratch.register(TRIAL, EventKind::EndEpoch).unwrap();
        assert_ne!(remapped, registry.lookup(TRIAL).unwrap());
    }

    #[test]
    fn overwrite_policy_replaces_entries() {
        let mut registry = FrequencyRegistry::new();
        assert_eq!(registry.policy(), DuplicatePolicy::Overwrite);

        registry.register(CYCLE, EventKind::EndTrial).unwrap();
        assert_eq!(registry.lookup(CYCLE).unwrap().end_event_kind(), EventKind::EndTrial);
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn reject_policy_keeps_entries() {
        let mut registry = FrequencyRegistry::with_policy(DuplicatePolicy::Reject);
        let err = registry.register(CYCLE, EventKind::EndTrial).unwrap_err();
        assert_eq!(err, EventError::DuplicateFrequency("cycle".to_owned()));
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(registry.lookup(CYCLE).unwrap().end_event_kind(), EventKind::Cycle);

        registry.register("minibatch", EventKind::EndBatch).unwrap();
        assert!(registry.contains("minibatch"));
    }

    #[test]
    fn register_named_parses_the_end_event() {
        let mut registry = FrequencyRegistry::new();
        let frequency = registry.register_named("minibatch", "end_batch").unwrap();
        assert_eq!(frequency.end_event_kind(), EventKind::EndBatch);

        let err = registry.register_named("bogus", "Whale").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Type);
        assert!(!registry.contains("bogus"));
    }

    #[test]
    fn end_event_closes_the_period() {
        let registry = FrequencyRegistry::new();
        let trial = registry.lookup(TRIAL).unwrap();
        assert!(trial.is_ended_by(&Event::EndTrial));
        assert!(!trial.is_ended_by(&Event::Cycle));
        assert!(registry.lookup(CYCLE).unwrap().is_ended_by(&Event::Cycle));
    }
}
