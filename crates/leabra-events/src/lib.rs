//! Event vocabulary and name registries for the Leabra network engine.
//!
//! The engine loop drives a network by dispatching a stream of discrete
//! [`Event`] values (advance one cycle, end a trial, clamp a layer, begin
//! a phase, pause logging) to every component that implements
//! [`EventListener`]. This crate defines that vocabulary; it does not
//! decide when events fire.
//!
//! # Modules
//!
//! - [`event`] -- The closed [`Event`] sum type and its [`EventKind`] tags.
//! - [`listener`] -- The [`EventListener`] capability and [`broadcast`].
//! - [`phase`] -- [`Phase`] descriptors and the strict [`PhaseRegistry`].
//! - [`frequency`] -- [`Frequency`] descriptors and the [`FrequencyRegistry`]
//!   with its explicit [`DuplicatePolicy`].
//! - [`registry`] -- [`Registry`], the per-network owner of both registries.
//! - [`config`] -- YAML [`RegistryConfig`] for extra phases and frequencies.
//! - [`error`] -- [`EventError`] and its [`ErrorCategory`].
//!
//! # Usage
//!
//! ```
//! use leabra_events::{Event, EventListener, Registry, broadcast};
//!
//! struct CycleCounter(u32);
//!
//! impl EventListener for CycleCounter {
//!     fn handle(&mut self, event: &Event) {
//!         if matches!(event, Event::Cycle) {
//!             self.0 += 1;
//!         }
//!     }
//! }
//!
//! let registry = Registry::new();
//! let mut counter = CycleCounter(0);
//!
//! let schedule = [
//!     registry.begin_phase("minus").ok(),
//!     Some(Event::Cycle),
//!     Some(Event::Cycle),
//!     registry.end_phase("minus").ok(),
//!     registry.pause_logging("cycle").ok(),
//!     Some(Event::EndTrial),
//! ];
//! for event in schedule.iter().flatten() {
//!     broadcast([&mut counter], event);
//! }
//! assert_eq!(counter.0, 2);
//!
//! // Names that were never registered are rejected at construction.
//! assert!(registry.pause_logging("fortnight").is_err());
//! assert!(Event::hard_clamp("input", [0.0, 1.5]).is_err());
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod frequency;
pub mod listener;
pub mod phase;
pub mod registry;

// Re-export primary types at crate root.
pub use config::{ConfigError, FrequencyConfig, RegistryConfig};
pub use error::{ErrorCategory, EventError};
pub use event::{Event, EventKind, HardClamp};
pub use frequency::{DuplicatePolicy, Frequency, FrequencyRegistry};
pub use listener::{EventListener, broadcast};
pub use phase::{Phase, PhaseRegistry};
pub use registry::Registry;
