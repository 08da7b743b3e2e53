//! Klaxon Tone Catalog
//!
//! This crate holds the fixed catalog of 32 alert tones offered by the
//! multi-tone sounder, as published in the sounder's operations manual.
//!
//! # Overview
//!
//! Each tone has descriptive metadata (frequency summary, description, DIP
//! switch configuration, conformance standard) and a structural
//! [`TonePattern`] that a synthesis backend renders into audio. Patterns fall
//! into six families:
//!
//! - **Continuous** - a single steady tone
//! - **Pulsed** - a tone gated on and off
//! - **Alternating** - two tones held in turn
//! - **Swept** - linear sweeps (repeating, triangle, or gated by silence)
//! - **PulsedBurst** / **SweptBurst** - three bursts then a long silence
//!
//! # Example
//!
//! ```
//! use klaxon_spec::{Catalog, PatternKind, ToneCatalog};
//!
//! let catalog = Catalog::new();
//! let tone = catalog.resolve(11).unwrap();
//! assert_eq!(tone.standard, Some("ISO 8201"));
//! assert_eq!(tone.kind(), Some(PatternKind::PulsedBurst));
//!
//! let evacuation = catalog.find_by_dip_switches("O-I-O-O-O").unwrap().unwrap();
//! assert_eq!(evacuation.id, 9);
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: The static tone table and its queries
//! - [`dip`]: DIP switch configuration codec
//! - [`error`]: Catalog errors and the shared [`BackendError`] trait
//! - [`frequency`]: Primary-frequency extraction from descriptive text
//! - [`pattern`]: Pattern families and their timing parameters

pub mod catalog;
pub mod dip;
pub mod error;
pub mod frequency;
pub mod pattern;

// Re-export commonly used types at the crate root
pub use catalog::{Catalog, ToneCatalog, TonePatternSpec, MAX_TONE_ID, MIN_TONE_ID, TONES};
pub use dip::{DipSwitches, DIP_POSITIONS};
pub use error::{BackendError, CatalogError, CatalogResult};
pub use frequency::{parse_primary_frequency, primary_frequency_or_default, FALLBACK_FREQUENCY_HZ};
pub use pattern::{BurstTiming, PatternKind, SweepMotion, TonePattern};
