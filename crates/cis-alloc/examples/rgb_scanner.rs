//! Allocate channels for an RGB line-scan configuration.
//!
//! Shows the full breakdown: taps, cables, per-port pixel ranges.

use cis_alloc::cable::STANDARD_PIXEL_CLOCK_HZ;
use cis_alloc::{allocate, ChannelRequest, Result};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("cis_alloc=debug")
        .init();

    println!("📷 RGB line-scan allocation\n");

    let request = ChannelRequest::new(2400, 40_000, 3, STANDARD_PIXEL_CLOCK_HZ);
    let links = allocate(&request)?;

    for (i, link) in links.iter().enumerate() {
        println!(
            "Board {} ({}): {} cable(s), {} ports, {} taps",
            i + 1,
            link.connectors()
                .first()
                .map_or("empty", |c| c.format_class().name()),
            link.connector_count(),
            link.port_count(),
            link.taps()
        );
        println!(
            "  {} px at lval {}, {:.1} MB/s",
            link.pixel_count(),
            link.lval(),
            link.data_rate_bytes_per_sec() as f64 / 1e6
        );
        if let Some(notes) = link.notes() {
            println!("  note: {notes}");
        }
        for conn in link.connectors() {
            println!("  Cable {} ({}):", conn.id(), conn.format_class());
            for port in conn.ports() {
                println!("    {port}");
            }
        }
    }

    Ok(())
}
