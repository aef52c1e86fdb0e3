//! Add worlds to `world.toml` the way the server command does.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use portal_core::{DimensionKind, SpatialPoint};
use portal_runtime::{DataPaths, InMemoryHost, PortalGuard, WorldInfo, WorldOracleImpl};

use crate::args::{WorldSpec, parse_world};

/// Register worlds in the world table, creating the data files if needed
#[derive(Parser)]
pub struct GenerateWorldConfig {
    /// World to register, as NAME or NAME:KIND (repeatable).
    /// Defaults to world, world_nether, and world_the_end
    #[arg(short, long = "world", value_name = "NAME[:KIND]", value_parser = parse_world)]
    worlds: Vec<WorldSpec>,
}

impl GenerateWorldConfig {
    pub fn execute(self, data_dir: &Path) -> Result<()> {
        let paths = DataPaths::in_dir(data_dir);

        // Enable against an empty server so the generate step reports every
        // world it adds.
        let host = InMemoryHost::new(WorldOracleImpl::new());
        let guard = PortalGuard::enable(paths.clone(), &host.env())
            .with_context(|| format!("Failed to open data directory {}", data_dir.display()))?;

        let specs = if self.worlds.is_empty() {
            vanilla_worlds()
        } else {
            self.worlds
        };
        for spec in specs {
            host.worlds
                .load_world(spec.name, WorldInfo::new(spec.kind, SpatialPoint::ORIGIN));
        }

        let added = guard.generate_world_config(&host.env());
        guard
            .save_world_table()
            .with_context(|| format!("Failed to write {}", paths.worlds.display()))?;

        if added.is_empty() {
            println!("{} every world is already registered", style("ok").green().bold());
        } else {
            for name in &added {
                println!("{} {}", style("added").green().bold(), name);
            }
        }
        println!("{} {}", style("World table:").bold().cyan(), paths.worlds.display());
        Ok(())
    }
}

fn vanilla_worlds() -> Vec<WorldSpec> {
    [
        ("world", DimensionKind::Overworld),
        ("world_nether", DimensionKind::Nether),
        ("world_the_end", DimensionKind::TheEnd),
    ]
    .into_iter()
    .map(|(name, kind)| WorldSpec {
        name: name.to_owned(),
        kind,
    })
    .collect()
}
