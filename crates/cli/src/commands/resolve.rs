//! Print the effective radius for one world.

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use console::style;
use portal_core::DimensionKind;
use portal_core::resolver::resolve_in;

use crate::args::parse_kind;
use crate::commands::read_snapshot;

/// Show the radius the guard would apply in a world
#[derive(Parser)]
pub struct Resolve {
    /// World name as it appears in world.toml
    #[arg(value_name = "WORLD")]
    world: String,

    /// Actual kind of the world on the server (OVERWORLD, NETHER, THE_END)
    #[arg(short, long, value_parser = parse_kind, default_value = "OVERWORLD")]
    kind: DimensionKind,
}

impl Resolve {
    pub fn execute(self, data_dir: &Path) -> Result<()> {
        let snapshot = read_snapshot(data_dir)?;
        let radius = resolve_in(&snapshot, &self.world, self.kind);

        println!("{} {}", style("World:").bold().cyan(), self.world);
        match snapshot.override_for(&self.world) {
            Some(entry) => println!(
                "{} type={} block-distance={:?} nether-block-distance={:?}",
                style("Override:").bold().cyan(),
                entry.dimension.as_str(),
                entry.radius,
                entry.nether_radius
            ),
            None => println!("{} none (global defaults)", style("Override:").bold().cyan()),
        }
        println!("{} {}", style("Radius:").bold().cyan(), radius);
        if self.kind.is_exempt() {
            println!(
                "{}",
                style("Portals in THE_END are never restricted; the radius is informational.")
                    .dim()
            );
        }
        Ok(())
    }
}
