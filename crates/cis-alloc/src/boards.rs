//! Board splitting and allocation orchestration.
//!
//! Divides the total pixel count across FPGA links (whole boards per link,
//! first links absorbing the rounding surplus), then runs the tap sizer and
//! port packer per link. Pixel ranges stay globally contiguous: each link
//! starts where the previous link's actual pixels ended.

use cis_camlink::PhasePacking;
use tracing::debug;

use crate::error::{AllocError, Result};
use crate::link::Link;
use crate::packing::pack_ports;
use crate::request::ChannelRequest;
use crate::sizing::{size_taps, TapPlan};

/// Pixels assigned to each link, first to last.
///
/// Each step hands the next link `ceil(remaining_boards / remaining_links)`
/// whole boards and the matching share of `total_pixels`, rounded and then
/// clamped to the pixels still unassigned. The first links therefore receive
/// at most one board's worth of rounding surplus; later links get exact
/// fractions.
///
/// # Errors
///
/// Returns [`AllocError::InvalidConfiguration`] when `board_count` or
/// `link_count` is zero.
pub fn split_pixels(total_pixels: u32, board_count: u32, link_count: u32) -> Result<Vec<u32>> {
    if board_count == 0 || link_count == 0 {
        return Err(AllocError::invalid_configuration(
            "board and link counts must be nonzero",
        ));
    }

    let mut shares = Vec::with_capacity(link_count as usize);
    let mut remaining_boards = board_count;
    let mut remaining_links = link_count;
    let mut unassigned = total_pixels;

    for _ in 0..link_count {
        let factor = remaining_boards.div_ceil(remaining_links);
        let exact = f64::from(factor) / f64::from(board_count) * f64::from(total_pixels);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let share = (exact.round() as u32).min(unassigned);
        shares.push(share);
        unassigned -= share;
        remaining_boards -= factor;
        remaining_links -= 1;
    }

    debug!("{total_pixels} px over {board_count} board(s): shares {shares:?}");
    Ok(shares)
}

/// Run the full engine: validate, split pixels across links, size taps and
/// pack ports per link.
///
/// Stateless and deterministic — every configuration change recomputes from
/// scratch. A zero-pixel share produces a link with zero connectors and no
/// error.
///
/// # Errors
///
/// Returns [`AllocError::TooManyPorts`] when any link needs more ports than
/// its phase count's cable topology allows, and
/// [`AllocError::InvalidConfiguration`] for out-of-range request fields or a
/// modulus the achievable lval cannot satisfy.
pub fn allocate(request: &ChannelRequest) -> Result<Vec<Link>> {
    request.validate()?;

    let packing = PhasePacking::for_phase_count(request.phase_count).ok_or_else(|| {
        AllocError::invalid_configuration(format!(
            "unsupported phase count {}",
            request.phase_count
        ))
    })?;

    let shares = split_pixels(request.nominal_pixels, request.board_count, request.link_count)?;

    let mut links = Vec::with_capacity(shares.len());
    let mut cursor: u32 = 0;

    for (index, share) in shares.iter().copied().enumerate() {
        let plan = if share == 0 {
            TapPlan::EMPTY
        } else {
            size_taps(
                share,
                request.line_rate_hz,
                request.phase_count,
                request.pixel_clock_hz,
                request.modulus,
                request.dead_time_factor,
            )?
        };

        let total_ports = u64::from(plan.taps) * u64::from(request.phase_count);
        if total_ports > u64::from(packing.absolute_max) {
            return Err(AllocError::TooManyPorts {
                max_allowed: packing.absolute_max,
                phase_count: request.phase_count,
                required: total_ports,
            });
        }

        // Checked against absolute_max above, so the narrowing is exact.
        #[allow(clippy::cast_possible_truncation)]
        let total_ports = total_ports as u32;

        let connectors = if plan.taps == 0 {
            Vec::new()
        } else {
            pack_ports(request.phase_count, total_ports, plan.lval, cursor)?
        };

        let dropped = share - plan.pixels_actual;
        let notes = (dropped > 0).then(|| {
            format!(
                "{dropped} px dropped to satisfy lval modulus {}",
                request.modulus
            )
        });

        debug!(
            "link {}: {} px at offset {}, {} tap(s) on {} cable(s)",
            index + 1,
            plan.pixels_actual,
            cursor,
            plan.taps,
            connectors.len()
        );

        links.push(Link::new(
            plan.pixels_actual,
            cursor,
            request.pixel_clock_hz,
            request.line_rate_hz,
            request.phase_count,
            plan.taps,
            plan.lval,
            notes,
            connectors,
        ));
        cursor += plan.pixels_actual;
    }

    Ok(links)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_boards_on_two_links_surplus_goes_first() {
        // ceil(3/2) = 2 boards on the first link: 6000 px, then 3000.
        assert_eq!(split_pixels(9000, 3, 2).unwrap(), vec![6000, 3000]);
    }

    #[test]
    fn even_split_stays_even() {
        assert_eq!(split_pixels(8000, 2, 2).unwrap(), vec![4000, 4000]);
        assert_eq!(split_pixels(9000, 3, 3).unwrap(), vec![3000, 3000, 3000]);
    }

    #[test]
    fn single_link_takes_everything() {
        assert_eq!(split_pixels(7168, 4, 1).unwrap(), vec![7168]);
    }

    #[test]
    fn half_pixel_rounding_never_overassigns() {
        // 9 px over 2 boards rounds both shares to 5; the clamp keeps the
        // total at 9 and the surplus on the first link.
        assert_eq!(split_pixels(9, 2, 2).unwrap(), vec![5, 4]);
    }

    #[test]
    fn more_links_than_boards_leaves_trailing_links_empty() {
        assert_eq!(split_pixels(6000, 1, 2).unwrap(), vec![6000, 0]);
    }

    #[test]
    fn zero_total_splits_to_zero_shares() {
        assert_eq!(split_pixels(0, 3, 2).unwrap(), vec![0, 0]);
    }

    #[test]
    fn shares_always_sum_to_at_most_total() {
        for boards in 1..=6 {
            for links in 1..=boards {
                for total in [0u32, 1, 9, 100, 8191, 9000] {
                    let shares = split_pixels(total, boards, links).unwrap();
                    let sum: u64 = shares.iter().map(|&s| u64::from(s)).sum();
                    assert!(sum <= u64::from(total), "{total} px, {boards}/{links}");
                }
            }
        }
    }

    #[test]
    fn zero_counts_are_invalid() {
        assert!(split_pixels(1000, 0, 1).is_err());
        assert!(split_pixels(1000, 1, 0).is_err());
    }
}
