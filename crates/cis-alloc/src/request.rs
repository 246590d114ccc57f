//! Typed allocation request.
//!
//! One struct carries every input of an allocation run. Values originate from
//! user-selected scan width, resolution, sensor-chip lookup tables, and the
//! line-rate slider — all outside this engine.

use cis_camlink::timing::{
    is_valid_modulus, DEFAULT_DEAD_TIME_FACTOR, SINGLE_PHASE_MODULUS, VALID_LVAL_MODULI,
};
use cis_camlink::{MAX_PHASE_COUNT, MIN_PHASE_COUNT};
use tracing::debug;

use crate::error::{AllocError, Result};

/// Complete set of inputs for one allocation run.
///
/// Construct with [`ChannelRequest::new`] and the `with_*` builders, then
/// hand to [`allocate`](crate::allocate). The request is a plain value type;
/// the engine holds no state between runs.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelRequest {
    /// Pixels the sensor array nominally produces per line.
    pub nominal_pixels: u32,

    /// Selected line rate in Hz.
    pub line_rate_hz: u32,

    /// Color/illumination channels per pixel span (1..=6).
    pub phase_count: u8,

    /// Pixel-clock bandwidth ceiling per tap, in Hz.
    pub pixel_clock_hz: u64,

    /// Required divisor of the per-tap pixel span (lval).
    pub modulus: u32,

    /// Dead-time/safety factor ≥ 1.0 for firmware line overhead.
    pub dead_time_factor: f64,

    /// Physical sensor boards behind the links.
    pub board_count: u32,

    /// FPGA links the boards are grouped into.
    pub link_count: u32,
}

impl ChannelRequest {
    /// Create a request with single-board defaults.
    ///
    /// Defaults: modulus 8 (the single-phase firmware value), dead-time
    /// factor 1.01, one board on one link.
    #[must_use]
    pub fn new(nominal_pixels: u32, line_rate_hz: u32, phase_count: u8, pixel_clock_hz: u64) -> Self {
        Self {
            nominal_pixels,
            line_rate_hz,
            phase_count,
            pixel_clock_hz,
            modulus: SINGLE_PHASE_MODULUS,
            dead_time_factor: DEFAULT_DEAD_TIME_FACTOR,
            board_count: 1,
            link_count: 1,
        }
    }

    /// Set the lval modulus (multi-light variants accept 1, 4, 8, 16, 32).
    #[must_use]
    pub fn with_modulus(mut self, modulus: u32) -> Self {
        self.modulus = modulus;
        self
    }

    /// Set the dead-time factor.
    #[must_use]
    pub fn with_dead_time_factor(mut self, factor: f64) -> Self {
        self.dead_time_factor = factor;
        self
    }

    /// Set the board/link topology.
    #[must_use]
    pub fn with_boards(mut self, board_count: u32, link_count: u32) -> Self {
        self.board_count = board_count;
        self.link_count = link_count;
        self
    }

    /// Check the request against the supported ranges.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError::InvalidConfiguration`] for a phase count outside
    /// 1..=6, a modulus the firmware rejects, a zero line rate, pixel clock,
    /// board count, or link count, or a dead-time factor below 1.0.
    pub fn validate(&self) -> Result<()> {
        if self.phase_count < MIN_PHASE_COUNT || self.phase_count > MAX_PHASE_COUNT {
            return Err(AllocError::invalid_configuration(format!(
                "phase count {} outside supported range {MIN_PHASE_COUNT}..={MAX_PHASE_COUNT}",
                self.phase_count
            )));
        }
        if !is_valid_modulus(self.modulus) {
            return Err(AllocError::invalid_configuration(format!(
                "lval modulus {} not in {VALID_LVAL_MODULI:?}",
                self.modulus
            )));
        }
        if self.line_rate_hz == 0 {
            return Err(AllocError::invalid_configuration("line rate is zero"));
        }
        if self.pixel_clock_hz == 0 {
            return Err(AllocError::invalid_configuration("pixel clock is zero"));
        }
        if self.dead_time_factor < 1.0 {
            return Err(AllocError::invalid_configuration(format!(
                "dead-time factor {} below 1.0",
                self.dead_time_factor
            )));
        }
        if self.board_count == 0 {
            return Err(AllocError::invalid_configuration("board count is zero"));
        }
        if self.link_count == 0 {
            return Err(AllocError::invalid_configuration("link count is zero"));
        }

        debug!(
            "request: {} px @ {} Hz, {} phase(s), clock {} Hz, modulus {}, {} board(s) on {} link(s)",
            self.nominal_pixels,
            self.line_rate_hz,
            self.phase_count,
            self.pixel_clock_hz,
            self.modulus,
            self.board_count,
            self.link_count
        );
        Ok(())
    }
}
