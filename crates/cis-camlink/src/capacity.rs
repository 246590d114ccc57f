//! Per-phase packing thresholds.
//!
//! One tap contributes `phase_count` ports (one per color/illumination
//! channel), and those ports must land on the same cable. The table below
//! gives, per phase count, the one-cable limit, where to split when two
//! cables are needed, and the absolute maximum the two-cable topology
//! supports. Every split point falls on a whole-tap boundary.
//!
//! | phase_count | one cable | first cable of a split | absolute max |
//! |-------------|-----------|------------------------|--------------|
//! | 1 or 2 | 10 | 8 (total ≤ 16) or 10 | 20 |
//! | 3 | 10 | 6 (total == 12) or 9 | 18 |
//! | 4 | 10 | 8 | 16 |
//! | 5 | 10 | 10 | 20 |
//! | 6 | 10 | 6 | 12 |

use crate::format::MAX_PORTS_PER_CABLE;

/// Lowest supported phase count.
pub const MIN_PHASE_COUNT: u8 = 1;

/// Highest supported phase count.
pub const MAX_PHASE_COUNT: u8 = 6;

/// Packing thresholds for one phase count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhasePacking {
    /// Phase count this row applies to (1..=6).
    pub phase_count: u8,
    /// Maximum ports on a single cable.
    pub single_cable_max: u32,
    /// Maximum ports across the two-cable topology.
    pub absolute_max: u32,
}

impl PhasePacking {
    /// Table row for `phase_count`, or `None` outside 1..=6.
    #[must_use]
    pub const fn for_phase_count(phase_count: u8) -> Option<Self> {
        let absolute_max = match phase_count {
            1 | 2 | 5 => 20,
            3 => 18,
            4 => 16,
            6 => 12,
            _ => return None,
        };
        Some(Self {
            phase_count,
            single_cable_max: MAX_PORTS_PER_CABLE,
            absolute_max,
        })
    }

    /// Port count of the first cable when `total_ports` needs two cables.
    ///
    /// Only meaningful for `single_cable_max < total_ports <= absolute_max`;
    /// the remainder goes on the second cable.
    #[must_use]
    pub const fn split_point(&self, total_ports: u32) -> u32 {
        match self.phase_count {
            1 | 2 => {
                if total_ports <= 16 {
                    8
                } else {
                    10
                }
            }
            3 => {
                if total_ports == 12 {
                    6
                } else {
                    9
                }
            }
            4 => 8,
            5 => 10,
            // 6-phase only ever splits 12 as 6 + 6.
            _ => 6,
        }
    }
}
