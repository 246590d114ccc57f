//! End-to-end properties of the allocation engine.
//!
//! Each test drives the public `allocate` entry point the way the
//! configuration model does: build a request, recompute, inspect the links.

use cis_alloc::cable::{FormatClass, STANDARD_PIXEL_CLOCK_HZ};
use cis_alloc::{allocate, AllocError, ChannelRequest, Link};

fn request(nominal: u32, rate: u32, phases: u8) -> ChannelRequest {
    ChannelRequest::new(nominal, rate, phases, STANDARD_PIXEL_CLOCK_HZ)
}

/// Distinct pixel ranges of a link, sorted by start pixel.
fn distinct_ranges(link: &Link) -> Vec<(u32, u32)> {
    let mut ranges: Vec<(u32, u32)> = link
        .connectors()
        .iter()
        .flat_map(|c| c.ports())
        .filter(|p| !p.is_unused())
        .map(|p| (p.start_pixel(), p.end_pixel()))
        .collect();
    ranges.sort_unstable();
    ranges.dedup();
    ranges
}

/// 8000 px at 40 kHz against the 85 MHz clock: four taps on one Medium
/// cable, all pixels carried (8000 is a multiple of the modulus).
#[test]
fn single_phase_scanner_fits_one_cable() {
    let links = allocate(&request(8000, 40_000, 1)).unwrap();
    assert_eq!(links.len(), 1);

    let link = &links[0];
    assert_eq!(link.taps(), 4);
    assert_eq!(link.pixel_count(), 8000);
    assert_eq!(link.pixel_count() % 8, 0);
    assert_eq!(link.connector_count(), 1);
    assert_eq!(link.port_count(), 4);
    assert_eq!(link.connectors()[0].format_class(), FormatClass::Medium);
    assert!(link.notes().is_none());
}

/// RGB at 12 total ports splits six-and-six onto two Medium cables.
#[test]
fn rgb_twelve_ports_split_medium_medium() {
    let links = allocate(&request(2400, 40_000, 3)).unwrap();
    let link = &links[0];

    assert_eq!(link.taps(), 4);
    assert_eq!(link.port_count(), 12);
    assert_eq!(link.connector_count(), 2);

    let conns = link.connectors();
    assert_eq!(conns[0].id(), 1);
    assert_eq!(conns[1].id(), 2);
    assert_eq!(conns[0].port_count(), 6);
    assert_eq!(conns[1].port_count(), 6);
    assert_eq!(conns[0].format_class(), FormatClass::Medium);
    assert_eq!(conns[1].format_class(), FormatClass::Medium);

    // Phase ports of one tap share the range and carry the channel labels.
    let first = conns[0].ports();
    assert_eq!(first[0].note(), Some("Red"));
    assert_eq!(first[1].note(), Some("Green"));
    assert_eq!(first[2].note(), Some("Blue"));
    assert_eq!(first[0].start_pixel(), first[2].start_pixel());
    assert_eq!(conns[1].ports()[0].start_pixel(), 1200);
}

/// Five-phase splits land ten ports on the first cable, forcing Deca on
/// both cables of the pair.
#[test]
fn uneven_split_forces_deca_pair() {
    let links = allocate(&request(1200, 40_000, 5)).unwrap();
    let link = &links[0];

    assert_eq!(link.taps(), 3);
    assert_eq!(link.port_count(), 15);
    let conns = link.connectors();
    assert_eq!(conns[0].port_count(), 10);
    assert_eq!(conns[1].port_count(), 5);
    assert_eq!(conns[0].format_class(), FormatClass::Deca);
    assert_eq!(conns[1].format_class(), FormatClass::Deca);
}

/// A combination needing 21 single-phase ports is fatal, naming the limit,
/// the phase count, and the required count.
#[test]
fn too_many_ports_is_fatal_and_named() {
    let err = allocate(&request(43_000, 40_000, 1)).unwrap_err();
    match err {
        AllocError::TooManyPorts {
            max_allowed,
            phase_count,
            required,
        } => {
            assert_eq!(max_allowed, 20);
            assert_eq!(phase_count, 1);
            assert_eq!(required, 21);
        }
        other => panic!("expected TooManyPorts, got {other:?}"),
    }
}

/// Three boards on two links: the first link takes two boards' worth of
/// pixels, the second takes one, and ranges stay globally contiguous.
#[test]
fn board_split_gives_surplus_to_first_link() {
    let links = allocate(&request(9000, 1000, 1).with_boards(3, 2)).unwrap();
    assert_eq!(links.len(), 2);

    assert_eq!(links[0].pixel_count(), 6000);
    assert_eq!(links[1].pixel_count(), 3000);
    assert_eq!(links[0].start_pixel(), 0);
    assert_eq!(links[1].start_pixel(), 6000);

    let second_ranges = distinct_ranges(&links[1]);
    assert_eq!(second_ranges.first().copied(), Some((6000, 8999)));
}

/// A zero-pixel request yields links with no connectors and no error.
#[test]
fn zero_pixels_is_valid_and_empty() {
    let links = allocate(&request(0, 40_000, 1)).unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].pixel_count(), 0);
    assert_eq!(links[0].connector_count(), 0);
    assert_eq!(links[0].port_count(), 0);
    assert_eq!(links[0].data_rate_bytes_per_sec(), 0);
}

/// Pixel conservation: per link, the distinct ranges tile exactly
/// `pixel_count` sensor pixels and every phase replicates that tiling;
/// across links, the totals never exceed the request.
#[test]
fn pixels_are_conserved() {
    for (nominal, rate, phases, boards, link_count) in [
        (8000u32, 40_000u32, 1u8, 1u32, 1u32),
        (2400, 40_000, 3, 1, 1),
        (9000, 1000, 1, 3, 2),
        (7000, 25_000, 2, 2, 2),
        (1000, 240_000, 1, 1, 1),
    ] {
        let req = request(nominal, rate, phases).with_boards(boards, link_count);
        let links = allocate(&req).unwrap();

        let mut total: u64 = 0;
        for link in &links {
            let ranges = distinct_ranges(link);
            let tiled: u64 = ranges
                .iter()
                .map(|&(s, e)| u64::from(e) - u64::from(s) + 1)
                .sum();
            assert_eq!(tiled, u64::from(link.pixel_count()));

            let port_pixels: u64 = link.connectors().iter().map(|c| c.pixel_count()).sum();
            assert_eq!(
                port_pixels,
                u64::from(link.pixel_count()) * u64::from(phases)
            );
            total += u64::from(link.pixel_count());
        }
        assert!(total <= u64::from(nominal));
    }
}

/// Contiguity: sorting all distinct ranges across every link leaves no gaps
/// and no overlaps.
#[test]
fn ranges_tile_without_gaps_or_overlaps() {
    let links = allocate(&request(9000, 1000, 1).with_boards(3, 2)).unwrap();

    let mut ranges: Vec<(u32, u32)> = links.iter().flat_map(|l| distinct_ranges(l)).collect();
    ranges.sort_unstable();

    let mut next = 0u32;
    for (start, end) in ranges {
        assert_eq!(start, next, "gap or overlap at pixel {next}");
        assert!(end >= start);
        next = end + 1;
    }
    assert_eq!(next, 9000);
}

/// Capacity invariant: every cable fits its format class, and the class is
/// the smallest that fits except on forced-Deca pairs.
#[test]
fn formats_are_tight_unless_deca_forced() {
    for (nominal, rate, phases) in [
        (8000u32, 40_000u32, 1u8),
        (8000, 90_000, 1),
        (2400, 40_000, 3),
        (3000, 40_000, 3),
        (1200, 40_000, 5),
        (700, 40_000, 6),
        (4000, 60_000, 2),
        (1600, 50_000, 4),
    ] {
        let links = allocate(&request(nominal, rate, phases)).unwrap();
        for link in &links {
            let conns = link.connectors();
            let forced_pair = conns.len() == 2 && conns[0].port_count() > 8;
            for conn in conns {
                assert!(conn.port_count() <= conn.format_class().port_capacity());
                if !forced_pair {
                    assert_eq!(
                        Some(conn.format_class()),
                        FormatClass::smallest_for(conn.port_count()),
                        "{nominal} px @ {rate} Hz, {phases} phase(s), cable {}",
                        conn.id()
                    );
                }
            }
        }
    }
}

/// Determinism: identical inputs give bit-identical output.
#[test]
fn recomputation_is_idempotent() {
    let req = request(7168, 33_000, 3).with_boards(2, 2).with_modulus(16);
    let a = allocate(&req).unwrap();
    let b = allocate(&req).unwrap();
    assert_eq!(a, b);
}

/// Raising the line rate never lowers the tap count.
#[test]
fn taps_grow_with_line_rate() {
    let mut prev = 0;
    for rate in (5_000..=50_000).step_by(1_000) {
        let links = allocate(&request(8000, rate, 1)).unwrap();
        let taps = links[0].taps();
        assert!(taps >= prev, "taps shrank at {rate} Hz");
        prev = taps;
    }
}

/// Modulus flooring is reported on the link, not fatal.
#[test]
fn flooring_losses_are_noted() {
    let links = allocate(&request(1000, 240_000, 1)).unwrap();
    let link = &links[0];
    assert_eq!(link.pixel_count(), 984);
    let notes = link.notes().unwrap();
    assert!(notes.contains("16"), "unexpected note: {notes}");
}
