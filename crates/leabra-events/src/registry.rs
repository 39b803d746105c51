//! The per-network registry context.
//!
//! Phases and frequencies live in a [`Registry`] owned by one simulation
//! context instead of process-wide state, so two networks (or two tests)
//! never see each other's registrations. Registration takes `&mut self`
//! and lookup takes `&self`; an embedding that shares one registry across
//! threads wraps it in `Arc<RwLock<Registry>>`.

use std::path::Path;

use tracing::debug;

use crate::config::{ConfigError, RegistryConfig};
use crate::error::EventError;
use crate::event::Event;
use crate::frequency::{DuplicatePolicy, Frequency, FrequencyRegistry};
use crate::phase::{Phase, PhaseRegistry};

/// Phase and frequency registries for one network.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    phases: PhaseRegistry,
    frequencies: FrequencyRegistry,
}

impl Registry {
    /// Create a registry with the default phases and frequencies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry whose frequency registry uses `policy` for
    /// duplicate names.
    pub fn with_frequency_policy(policy: DuplicatePolicy) -> Self {
        Self {
            phases: PhaseRegistry::new(),
            frequencies: FrequencyRegistry::with_policy(policy),
        }
    }

    /// Build a registry from configuration: apply the duplicate policy,
    /// then register the extra phases and frequencies in order.
    ///
    /// # Errors
    ///
    /// Returns the first [`EventError`] raised by a registration.
    pub fn from_config(config: &RegistryConfig) -> Result<Self, EventError> {
        let mut registry = Self::with_frequency_policy(config.frequency_duplicates);

        for name in &config.phases {
            registry.phases.register(name)?;
        }
        for spec in &config.frequencies {
            registry
                .frequencies
                .register_named(&spec.name, &spec.end_event)?;
        }

        debug!(
            phases = registry.phases.len(),
            frequencies = registry.frequencies.len(),
            "registry built from config"
        );
        Ok(registry)
    }

    /// Load a YAML config file and build a registry from it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed, or if
    /// a registration it asks for fails.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let config = RegistryConfig::from_file(path)?;
        Ok(Self::from_config(&config)?)
    }

    /// Return the phase registry.
    pub const fn phases(&self) -> &PhaseRegistry {
        &self.phases
    }

    /// Return the phase registry for registration.
    pub const fn phases_mut(&mut self) -> &mut PhaseRegistry {
        &mut self.phases
    }

    /// Return the frequency registry.
    pub const fn frequencies(&self) -> &FrequencyRegistry {
        &self.frequencies
    }

    /// Return the frequency registry for registration.
    pub const fn frequencies_mut(&mut self) -> &mut FrequencyRegistry {
        &mut self.frequencies
    }

    /// Look up a phase by name.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::UnknownPhase`] if no phase has that name.
    pub fn phase(&self, name: &str) -> Result<Phase, EventError> {
        self.phases.lookup(name)
    }

    /// Look up a frequency by name.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::UnknownFrequency`] if no frequency has that name.
    pub fn frequency(&self, name: &str) -> Result<Frequency, EventError> {
        self.frequencies.lookup(name)
    }

    /// Build an [`Event::BeginPhase`] for the named phase.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::UnknownPhase`] if no phase has that name.
    pub fn begin_phase(&self, name: &str) -> Result<Event, EventError> {
        self.phase(name).map(Event::begin_phase)
    }

    /// Build an [`Event::EndPhase`] for the named phase.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::UnknownPhase`] if no phase has that name.
    pub fn end_phase(&self, name: &str) -> Result<Event, EventError> {
        self.phase(name).map(Event::end_phase)
    }

    /// Build an [`Event::PauseLogging`] for the named frequency.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::UnknownFrequency`] if no frequency has that name.
    pub fn pause_logging(&self, freq_name: &str) -> Result<Event, EventError> {
        Event::pause_logging(&self.frequencies, freq_name)
    }

    /// Build an [`Event::ResumeLogging`] for the named frequency.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::UnknownFrequency`] if no frequency has that name.
    pub fn resume_logging(&self, freq_name: &str) -> Result<Event, EventError> {
        Event::resume_logging(&self.frequencies, freq_name)
    }
}
