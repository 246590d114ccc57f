//! Camera Link cable model for CIS line-scan cameras.
//!
//! This crate has **no dependencies** and **no I/O** — it is a pure model of
//! the camera-interface standard: cable format classes, per-cable port
//! capacities, the phase-aware packing thresholds, and pixel-clock constants.
//!
//! The numbers encode physical constraints of the interface: a cable's
//! electrical format (Base/Medium/Full/Deca) must hold whole multiples of the
//! phase count so the color channels of one pixel range stay on one cable —
//! receiver firmware cannot reassemble a pixel range whose phases arrive on
//! different cables.
//!
//! # Crate organisation
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`format`] | Cable format classes (Base ≤3, Medium ≤6, Full ≤8, Deca ≤10 ports) |
//! | [`capacity`] | Per-phase packing table: one-cable limit, split point, absolute max |
//! | [`timing`] | Pixel-clock, dead-time, and lval-modulus constants |

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod capacity;
pub mod format;
pub mod timing;

pub use capacity::{PhasePacking, MAX_PHASE_COUNT, MIN_PHASE_COUNT};
pub use format::{FormatClass, MAX_PORTS_PER_CABLE};
