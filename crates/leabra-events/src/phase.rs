//! Named phases of a trial and the registry that mints them.
//!
//! A [`Phase`] identifies a sub-stage of a trial (for example the `minus`
//! and `plus` phases that learning rules compare). Phases are only created
//! through a [`PhaseRegistry`], which guarantees that every name is
//! non-empty and taken at most once. Names are permanent: there is no
//! removal and no rename.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::EventError;

/// Name of the plus phase, registered by default.
pub const PLUS: &str = "plus";

/// Name of the minus phase, registered by default.
pub const MINUS: &str = "minus";

/// Name of the none phase, registered by default.
pub const NONE: &str = "none";

/// Phases every [`PhaseRegistry`] starts with.
pub const DEFAULT_PHASES: [&str; 3] = [PLUS, MINUS, NONE];

/// A registered trial phase.
///
/// Equality, ordering, hashing and [`Display`](core::fmt::Display) are all
/// keyed on the name. A phase only compares against another phase:
///
/// ```compile_fail
/// use leabra_events::PhaseRegistry;
///
/// let phases = PhaseRegistry::new();
/// let plus = phases.lookup("plus").unwrap();
/// let _ = plus == "plus";
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Phase {
    name: Arc<str>,
}

impl Phase {
    /// Only the registry mints phases, after validating the name.
    fn new(name: &str) -> Self {
        Self { name: Arc::from(name) }
    }

    /// Return the phase name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl core::fmt::Display for Phase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Registry of every phase known to a network.
///
/// Starts with [`PLUS`], [`MINUS`] and [`NONE`] and grows monotonically.
/// Registering a name twice is always an error.
#[derive(Debug, Clone)]
pub struct PhaseRegistry {
    phases: BTreeMap<String, Phase>,
}

impl PhaseRegistry {
    /// Create a registry holding the default phases.
    pub fn new() -> Self {
        let phases = DEFAULT_PHASES
            .iter()
            .map(|name| ((*name).to_owned(), Phase::new(name)))
            .collect();
        Self { phases }
    }

    /// Register a new phase and return it.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::EmptyPhaseName`] if `name` is empty, or
    /// [`EventError::DuplicatePhase`] if it is already registered.
    pub fn register(&mut self, name: &str) -> Result<Phase, EventError> {
        if name.is_empty() {
            return Err(EventError::EmptyPhaseName);
        }
        if self.phases.contains_key(name) {
            return Err(EventError::DuplicatePhase(name.to_owned()));
        }

        let phase = Phase::new(name);
        self.phases.insert(name.to_owned(), phase.clone());
        debug!(phase = %phase, "phase registered");
        Ok(phase)
    }

    /// Look up a phase by name.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::UnknownPhase`] if no phase has that name.
    pub fn lookup(&self, name: &str) -> Result<Phase, EventError> {
        self.phases
            .get(name)
            .cloned()
            .ok_or_else(|| EventError::UnknownPhase(name.to_owned()))
    }

    /// Return whether a phase with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.phases.contains_key(name)
    }

    /// Return the names of all registered phases, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.phases.keys().map(String::as_str).collect()
    }

    /// Return all registered phases, sorted by name.
    pub fn phases(&self) -> Vec<Phase> {
        self.phases.values().cloned().collect()
    }

    /// Return the number of registered phases.
    pub fn len(&self) -> usize {
        self.phases.len()
    }

    /// Return whether the registry holds no phases.
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }
}

impl Default for PhaseRegistry {
    fn default() -> Self {
        Self::new()
    }
}
