//! Split a wide scanner across multiple sensor boards.
//!
//! Three boards grouped onto two FPGA links: the first link carries two
//! boards' worth of pixels, the second carries one.

use anyhow::Result;
use cis_alloc::cable::STANDARD_PIXEL_CLOCK_HZ;
use cis_alloc::{allocate, ChannelRequest};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("cis_alloc=debug")
        .init();

    let request =
        ChannelRequest::new(9000, 30_000, 1, STANDARD_PIXEL_CLOCK_HZ).with_boards(3, 2);
    let links = allocate(&request)?;

    println!("{} px over {} board(s):\n", request.nominal_pixels, request.board_count);
    for (i, link) in links.iter().enumerate() {
        println!(
            "Link {}: pixels {}..{} ({} px), {} tap(s), {} cable(s), {} ports",
            i + 1,
            link.start_pixel(),
            link.start_pixel() + link.pixel_count().saturating_sub(1),
            link.pixel_count(),
            link.taps(),
            link.connector_count(),
            link.port_count()
        );
    }

    Ok(())
}
