//! The closed set of events a network can execute.
//!
//! An [`Event`] is one discrete control point of a simulation run: advance
//! one cycle, end a trial, clamp a layer, begin a phase, and so on. The
//! engine decides *when* each event fires; this module only defines *what*
//! an event is and validates its payload at construction.
//!
//! Listeners branch on events with an exhaustive `match`, so adding a
//! variant is a compile error everywhere a listener forgot to decide what
//! to do with it.
//!
//! [`EventKind`] is the payload-free tag of each variant. Frequencies use
//! it to name the event that closes their period.

use core::str::FromStr;

use crate::error::EventError;
use crate::frequency::{Frequency, FrequencyRegistry};
use crate::phase::Phase;

// ---------------------------------------------------------------------------
// EventKind
// ---------------------------------------------------------------------------

/// Payload-free tag identifying an [`Event`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventKind {
    /// Tag of [`Event::Cycle`].
    Cycle,
    /// Tag of [`Event::EndTrial`].
    EndTrial,
    /// Tag of [`Event::EndEpoch`].
    EndEpoch,
    /// Tag of [`Event::EndBatch`].
    EndBatch,
    /// Tag of [`Event::HardClamp`].
    HardClamp,
    /// Tag of [`Event::Unclamp`].
    Unclamp,
    /// Tag of [`Event::Learn`].
    Learn,
    /// Tag of [`Event::BeginPhase`].
    BeginPhase,
    /// Tag of [`Event::EndPhase`].
    EndPhase,
    /// Tag of [`Event::PauseLogging`].
    PauseLogging,
    /// Tag of [`Event::ResumeLogging`].
    ResumeLogging,
}

impl EventKind {
    /// Every tag, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::Cycle,
        Self::EndTrial,
        Self::EndEpoch,
        Self::EndBatch,
        Self::HardClamp,
        Self::Unclamp,
        Self::Learn,
        Self::BeginPhase,
        Self::EndPhase,
        Self::PauseLogging,
        Self::ResumeLogging,
    ];

    /// Return the variant name, e.g. `"EndTrial"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cycle => "Cycle",
            Self::EndTrial => "EndTrial",
            Self::EndEpoch => "EndEpoch",
            Self::EndBatch => "EndBatch",
            Self::HardClamp => "HardClamp",
            Self::Unclamp => "Unclamp",
            Self::Learn => "Learn",
            Self::BeginPhase => "BeginPhase",
            Self::EndPhase => "EndPhase",
            Self::PauseLogging => "PauseLogging",
            Self::ResumeLogging => "ResumeLogging",
        }
    }

    /// Return the `snake_case` spelling, e.g. `"end_trial"`.
    pub const fn as_snake_case(self) -> &'static str {
        match self {
            Self::Cycle => "cycle",
            Self::EndTrial => "end_trial",
            Self::EndEpoch => "end_epoch",
            Self::EndBatch => "end_batch",
            Self::HardClamp => "hard_clamp",
            Self::Unclamp => "unclamp",
            Self::Learn => "learn",
            Self::BeginPhase => "begin_phase",
            Self::EndPhase => "end_phase",
            Self::PauseLogging => "pause_logging",
            Self::ResumeLogging => "resume_logging",
        }
    }
}

impl core::fmt::Display for EventKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = EventError;

    /// Parse either the variant name (`EndTrial`) or its `snake_case`
    /// spelling (`end_trial`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s || kind.as_snake_case() == s)
            .ok_or_else(|| EventError::UnknownEventKind(s.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// HardClamp payload
// ---------------------------------------------------------------------------

/// Payload of [`Event::HardClamp`]: a layer name and the activations to
/// clamp it to.
///
/// Every activation is in `[0, 1]`; [`HardClamp::new`] rejects anything
/// else, NaN included. If there are fewer activations than units in the
/// layer, the layer tiles them.
#[derive(Debug, Clone, PartialEq)]
pub struct HardClamp {
    layer_name: String,
    acts: Vec<f64>,
}

impl HardClamp {
    /// Validate and build a clamp payload.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::ActivationOutOfRange`] naming the first value
    /// outside `[0, 1]`.
    pub fn new(layer_name: impl Into<String>, acts: impl Into<Vec<f64>>) -> Result<Self, EventError> {
        let layer_name = layer_name.into();
        let acts = acts.into();

        if let Some((index, &value)) = acts
            .iter()
            .enumerate()
            .find(|(_, value)| !(0.0..=1.0).contains(*value))
        {
            return Err(EventError::ActivationOutOfRange {
                layer_name,
                index,
                value,
            });
        }

        Ok(Self { layer_name, acts })
    }

    /// Return the name of the clamped layer.
    pub fn layer_name(&self) -> &str {
        &self.layer_name
    }

    /// Return the clamped activations, in the order given.
    pub fn acts(&self) -> &[f64] {
        &self.acts
    }
}

// ---------------------------------------------------------------------------
// Event
// ---------------------------------------------------------------------------

/// A discrete control point the network reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Advance the network by one cycle.
    Cycle,
    /// The current trial has ended.
    EndTrial,
    /// The current epoch has ended.
    EndEpoch,
    /// The current batch has ended.
    EndBatch,
    /// Hard clamp a layer to fixed activations.
    HardClamp(HardClamp),
    /// Release a previously clamped layer.
    Unclamp {
        /// The layer to unclamp.
        layer_name: String,
    },
    /// Apply learning in the projections.
    Learn,
    /// A phase of the trial begins.
    BeginPhase(Phase),
    /// A phase of the trial ends.
    EndPhase(Phase),
    /// Pause logging at the given frequency.
    PauseLogging(Frequency),
    /// Resume logging at the given frequency.
    ResumeLogging(Frequency),
}

impl Event {
    /// Build a [`Event::HardClamp`].
    ///
    /// # Errors
    ///
    /// Returns [`EventError::ActivationOutOfRange`] if any activation is
    /// outside `[0, 1]`.
    pub fn hard_clamp(layer_name: impl Into<String>, acts: impl Into<Vec<f64>>) -> Result<Self, EventError> {
        HardClamp::new(layer_name, acts).map(Self::HardClamp)
    }

    /// Build an [`Event::Unclamp`].
    pub fn unclamp(layer_name: impl Into<String>) -> Self {
        Self::Unclamp {
            layer_name: layer_name.into(),
        }
    }

    /// Build an [`Event::BeginPhase`] for an already resolved phase.
    pub const fn begin_phase(phase: Phase) -> Self {
        Self::BeginPhase(phase)
    }

    /// Build an [`Event::EndPhase`] for an already resolved phase.
    pub const fn end_phase(phase: Phase) -> Self {
        Self::EndPhase(phase)
    }

    /// Build an [`Event::PauseLogging`], resolving the frequency by name.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::UnknownFrequency`] if `freq_name` is not
    /// registered.
    pub fn pause_logging(frequencies: &FrequencyRegistry, freq_name: &str) -> Result<Self, EventError> {
        frequencies.lookup(freq_name).map(Self::PauseLogging)
    }

    /// Build an [`Event::ResumeLogging`], resolving the frequency by name.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::UnknownFrequency`] if `freq_name` is not
    /// registered.
    pub fn resume_logging(frequencies: &FrequencyRegistry, freq_name: &str) -> Result<Self, EventError> {
        frequencies.lookup(freq_name).map(Self::ResumeLogging)
    }

    /// Return the tag of this event.
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Cycle => EventKind::Cycle,
            Self::EndTrial => EventKind::EndTrial,
            Self::EndEpoch => EventKind::EndEpoch,
            Self::EndBatch => EventKind::EndBatch,
            Self::HardClamp(_) => EventKind::HardClamp,
            Self::Unclamp { .. } => EventKind::Unclamp,
            Self::Learn => EventKind::Learn,
            Self::BeginPhase(_) => EventKind::BeginPhase,
            Self::EndPhase(_) => EventKind::EndPhase,
            Self::PauseLogging(_) => EventKind::PauseLogging,
            Self::ResumeLogging(_) => EventKind::ResumeLogging,
        }
    }

    /// Return the targeted layer for clamp and unclamp events.
    pub fn layer_name(&self) -> Option<&str> {
        match self {
            Self::HardClamp(clamp) => Some(clamp.layer_name()),
            Self::Unclamp { layer_name } => Some(layer_name),
            _ => None,
        }
    }

    /// Return the phase carried by phase boundary events.
    pub const fn phase(&self) -> Option<&Phase> {
        match self {
            Self::BeginPhase(phase) | Self::EndPhase(phase) => Some(phase),
            _ => None,
        }
    }

    /// Return the frequency carried by logging events.
    pub const fn frequency(&self) -> Option<&Frequency> {
        match self {
            Self::PauseLogging(freq) | Self::ResumeLogging(freq) => Some(freq),
            _ => None,
        }
    }
}
