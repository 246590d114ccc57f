//! Port packing.
//!
//! Packs a link's ports onto one or two cables per the phase packing table.
//! The split point always keeps the phases of one tap on one cable; when the
//! first cable of a split exceeds Full capacity, both cables are forced to
//! Deca — receiver firmware requires a uniform cable type across a split
//! pair.

use cis_camlink::{FormatClass, PhasePacking};
use tracing::debug;

use crate::error::{AllocError, Result};
use crate::link::Connector;

/// Channel label for the ports of one tap.
const fn phase_note(phase_count: u8, phase_index: u8) -> Option<&'static str> {
    if phase_count != 3 {
        return None;
    }
    Some(match phase_index {
        0 => "Red",
        1 => "Green",
        _ => "Blue",
    })
}

/// Pack `total_ports` (= taps × `phase_count`) into one or two connectors.
///
/// Ports are created in pixel order: tap `i` covers
/// `[i·lval + start_pixel, (i+1)·lval − 1 + start_pixel]`, replicated once
/// per phase. Connector ids count from 1; port names are ascending letters
/// per connector in insertion order.
///
/// `total_ports == 0` yields a single empty Base connector (valid,
/// zero-cost).
///
/// # Errors
///
/// Returns [`AllocError::TooManyPorts`] when `total_ports` exceeds the
/// absolute maximum of the phase count's two-cable topology, and
/// [`AllocError::InvalidConfiguration`] for an unsupported phase count, a
/// zero lval (modulus exceeded the achievable span), or a port total that is
/// not a whole number of taps.
pub fn pack_ports(
    phase_count: u8,
    total_ports: u32,
    lval: u32,
    start_pixel: u32,
) -> Result<Vec<Connector>> {
    let packing = PhasePacking::for_phase_count(phase_count).ok_or_else(|| {
        AllocError::invalid_configuration(format!("unsupported phase count {phase_count}"))
    })?;

    if total_ports == 0 {
        return Ok(vec![Connector::new(1, FormatClass::Base)]);
    }
    if total_ports > packing.absolute_max {
        return Err(AllocError::TooManyPorts {
            max_allowed: packing.absolute_max,
            phase_count,
            required: u64::from(total_ports),
        });
    }
    if total_ports % u32::from(phase_count) != 0 {
        return Err(AllocError::invalid_configuration(format!(
            "{total_ports} ports is not a whole number of {phase_count}-phase taps"
        )));
    }
    if lval == 0 {
        return Err(AllocError::invalid_configuration(
            "lval is zero: modulus exceeds the achievable pixels per tap",
        ));
    }

    // (format, port quota) per cable.
    let layout: Vec<(FormatClass, u32)> = if total_ports <= packing.single_cable_max {
        let format = format_for(total_ports)?;
        debug!("{total_ports} port(s) on one {format} cable");
        vec![(format, total_ports)]
    } else {
        let first = packing.split_point(total_ports);
        let second = total_ports - first;
        // Uniform cable type across a split pair when the first cable
        // exceeds Full capacity.
        let forced_deca = first > 8 && total_ports > 8;
        let (first_format, second_format) = if forced_deca {
            (FormatClass::Deca, FormatClass::Deca)
        } else {
            (format_for(first)?, format_for(second)?)
        };
        debug!(
            "{total_ports} ports split {first}+{second} onto {first_format}+{second_format}{}",
            if forced_deca { " (Deca forced)" } else { "" }
        );
        vec![(first_format, first), (second_format, second)]
    };

    let mut connectors: Vec<Connector> = layout
        .iter()
        .enumerate()
        .map(|(i, &(format, _))| Connector::new(i as u32 + 1, format))
        .collect();

    let taps = total_ports / u32::from(phase_count);
    let mut slot = 0;
    let mut filled = 0;
    for tap in 0..taps {
        let start = start_pixel + tap * lval;
        let end = start + lval - 1;
        for phase in 0..phase_count {
            if filled == layout[slot].1 {
                slot += 1;
                filled = 0;
            }
            connectors[slot].add_port(start, end, phase_note(phase_count, phase));
            filled += 1;
        }
    }

    Ok(connectors)
}

fn format_for(ports: u32) -> Result<FormatClass> {
    FormatClass::smallest_for(ports).ok_or_else(|| {
        AllocError::invalid_configuration(format!("{ports} ports exceed a single cable"))
    })
}
