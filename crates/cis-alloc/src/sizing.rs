//! Tap sizing.
//!
//! Decides how many taps a pixel count needs at a given line rate, and how
//! many pixels each tap carries (lval). Pure arithmetic over the request —
//! the packing of taps onto cables happens in [`crate::packing`].

use cis_camlink::timing::{is_valid_modulus, VALID_LVAL_MODULI};
use cis_camlink::{MAX_PHASE_COUNT, MIN_PHASE_COUNT};
use tracing::debug;

use crate::error::{AllocError, Result};

/// Result of sizing taps for one link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TapPlan {
    /// Independent data channels needed.
    pub taps: u32,
    /// Pixels per tap, floored to the required modulus.
    pub lval: u32,
    /// Pixels actually carried (`lval × taps`, ≤ the nominal count).
    pub pixels_actual: u32,
}

impl TapPlan {
    /// Plan for a zero-pixel link: no taps, no ports.
    pub(crate) const EMPTY: Self = Self {
        taps: 0,
        lval: 0,
        pixels_actual: 0,
    };
}

/// Compute the minimal tap count and per-tap pixel span for `nominal_pixels`.
///
/// The per-tap ceiling is `pixel_clock_hz / (line_rate_hz × phase_count) /
/// dead_time_factor`; the lval is floored to the nearest multiple of
/// `modulus`. Pixels lost to that flooring are accepted (the caller reports
/// them), never fatal. An lval of zero means the modulus exceeded the
/// achievable span; the port packer rejects it.
///
/// Pure and deterministic: identical inputs give identical plans.
///
/// # Errors
///
/// Returns [`AllocError::InvalidConfiguration`] for a phase count outside
/// 1..=6, an unsupported modulus, a zero line rate or pixel clock
/// (non-positive bandwidth), a dead-time factor below 1.0, or a tap count
/// beyond any representable topology.
pub fn size_taps(
    nominal_pixels: u32,
    line_rate_hz: u32,
    phase_count: u8,
    pixel_clock_hz: u64,
    modulus: u32,
    dead_time_factor: f64,
) -> Result<TapPlan> {
    if phase_count < MIN_PHASE_COUNT || phase_count > MAX_PHASE_COUNT {
        return Err(AllocError::invalid_configuration(format!(
            "phase count {phase_count} outside supported range {MIN_PHASE_COUNT}..={MAX_PHASE_COUNT}"
        )));
    }
    if !is_valid_modulus(modulus) {
        return Err(AllocError::invalid_configuration(format!(
            "lval modulus {modulus} not in {VALID_LVAL_MODULI:?}"
        )));
    }
    if line_rate_hz == 0 || pixel_clock_hz == 0 {
        return Err(AllocError::invalid_configuration(
            "non-positive bandwidth: line rate and pixel clock must be nonzero",
        ));
    }
    if dead_time_factor < 1.0 {
        return Err(AllocError::invalid_configuration(format!(
            "dead-time factor {dead_time_factor} below 1.0"
        )));
    }

    if nominal_pixels == 0 {
        return Ok(TapPlan::EMPTY);
    }

    // Bandwidth ceiling per tap, pixels per line.
    #[allow(clippy::cast_precision_loss)]
    let max_pixels_per_tap = pixel_clock_hz as f64
        / (f64::from(line_rate_hz) * f64::from(phase_count))
        / dead_time_factor;

    let taps_needed = (f64::from(nominal_pixels) / max_pixels_per_tap).ceil();
    if taps_needed > f64::from(u32::MAX) {
        return Err(AllocError::invalid_configuration(format!(
            "tap count overflow: {nominal_pixels} px cannot be carried at {line_rate_hz} Hz"
        )));
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let taps = (taps_needed as u32).max(1);

    let lval_max = nominal_pixels / taps;
    let lval = lval_max / modulus * modulus;
    let pixels_actual = lval * taps;

    debug!(
        "sized {} px into {} tap(s): lval {} (max {}, modulus {}), {} px actual",
        nominal_pixels, taps, lval, lval_max, modulus, pixels_actual
    );

    Ok(TapPlan {
        taps,
        lval,
        pixels_actual,
    })
}
