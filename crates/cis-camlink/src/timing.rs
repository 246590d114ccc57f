//! Pixel-clock and lval-modulus constants.
//!
//! Values taken from the interface standard and the receiver firmware
//! datasheets. The dead-time factor covers the per-line overhead the
//! firmware inserts between line transfers.

/// Standard Camera Link pixel clock in Hz.
pub const STANDARD_PIXEL_CLOCK_HZ: u64 = 85_000_000;

/// Default dead-time/safety factor applied to the per-tap bandwidth.
pub const DEFAULT_DEAD_TIME_FACTOR: f64 = 1.01;

/// Moduli the receiver firmware accepts for the per-tap pixel span (lval).
/// Multi-light variants may use any of these.
pub const VALID_LVAL_MODULI: [u32; 5] = [1, 4, 8, 16, 32];

/// Fixed lval modulus of the single-phase variants.
pub const SINGLE_PHASE_MODULUS: u32 = 8;

/// Bytes transferred per pixel per port (8-bit pixel data).
pub const BYTES_PER_PIXEL: u64 = 1;

/// True if `modulus` is one the firmware accepts.
#[must_use]
pub fn is_valid_modulus(modulus: u32) -> bool {
    VALID_LVAL_MODULI.contains(&modulus)
}
