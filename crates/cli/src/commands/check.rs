//! Evaluate a simulated portal creation or trip against the data directory.

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use console::style;
use portal_core::{
    AdmissionEngine, CreationRequest, Decision, DimensionKind, GuardConfig, NearbyPlayer,
    SettingsStore, SpatialPoint, TravelRequest,
};

use crate::args::{parse_kind, parse_point};
use crate::commands::read_snapshot;

/// Check whether a portal would be allowed
#[derive(Parser)]
pub struct Check {
    #[command(flatten)]
    world: WorldArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    event: CheckEvent,
}

#[derive(Args)]
struct WorldArgs {
    /// World the event happens in
    #[arg(short, long, default_value = "world", global = true)]
    world: String,

    /// Actual kind of the world (OVERWORLD, NETHER, THE_END)
    #[arg(short, long, value_parser = parse_kind, default_value = "OVERWORLD", global = true)]
    kind: DimensionKind,

    /// World spawn point as x,z
    #[arg(short, long, value_parser = parse_point, default_value = "0,0", global = true)]
    spawn: SpatialPoint,
}

#[derive(Subcommand)]
enum CheckEvent {
    /// A player lights a portal frame
    Create {
        /// Portal blocks as x,z, in server order
        #[arg(value_name = "X,Z", value_parser = parse_point, required = true)]
        blocks: Vec<SpatialPoint>,

        /// Location of a nearby player holding the bypass permission (repeatable)
        #[arg(long = "bypass-at", value_name = "X,Z", value_parser = parse_point)]
        bypass_at: Vec<SpatialPoint>,
    },
    /// A player steps through a portal
    Travel {
        /// Where the player enters the portal, as x,z
        #[arg(value_name = "X,Z", value_parser = parse_point)]
        from: SpatialPoint,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// One-line verdict with the applied radius
    Summary,
    /// Full JSON output
    Json,
}

impl Check {
    pub fn execute(self, data_dir: &Path) -> Result<()> {
        let snapshot = read_snapshot(data_dir)?;
        let allow_travel = snapshot.global().allow_travel_in_zone;
        let store = SettingsStore::from_snapshot(snapshot);
        let decision = self.evaluate(&store, allow_travel);

        match self.format {
            OutputFormat::Summary => print_summary(&self.world, &decision),
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&decision)
                    .context("Failed to serialize decision to JSON")?;
                println!("{json}");
            }
        }
        Ok(())
    }

    fn evaluate(&self, store: &SettingsStore, allow_travel: bool) -> Decision {
        // Matches the server: nothing is checked in End worlds.
        if self.world.kind.is_exempt() {
            return Decision::Allowed;
        }

        let engine = AdmissionEngine::new(store, GuardConfig::default());
        match &self.event {
            CheckEvent::Create { blocks, bypass_at } => {
                let nearby: Vec<NearbyPlayer> = bypass_at
                    .iter()
                    .map(|location| NearbyPlayer::new(*location, true))
                    .collect();
                engine.evaluate_creation(&CreationRequest {
                    world: &self.world.world,
                    dimension: self.world.kind,
                    spawn: self.world.spawn,
                    blocks,
                    nearby_players: &nearby,
                })
            }
            CheckEvent::Travel { from } => engine.evaluate_travel(&TravelRequest {
                world: &self.world.world,
                dimension: self.world.kind,
                spawn: self.world.spawn,
                from: *from,
                allow_travel_override: allow_travel,
            }),
        }
    }
}

fn print_summary(world: &WorldArgs, decision: &Decision) {
    match decision {
        Decision::Allowed => println!(
            "{} in {} ({})",
            style("ALLOWED").green().bold(),
            world.world,
            world.kind
        ),
        Decision::Denied(denial) => println!(
            "{} in {} ({}): {} at ({}, {}) within radius {}",
            style("DENIED").red().bold(),
            denial.world,
            world.kind,
            denial.reason,
            denial.at.x,
            denial.at.z,
            denial.radius
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Check {
        Check::try_parse_from(std::iter::once("check").chain(args.iter().copied())).unwrap()
    }

    fn decide(args: &[&str]) -> Decision {
        let check = parse(args);
        let store = SettingsStore::default();
        check.evaluate(&store, false)
    }

    #[test]
    fn arguments_are_well_formed() {
        Check::command().debug_assert();
    }

    #[test]
    fn creation_near_spawn_is_denied() {
        let decision = decide(&["create", "10,10", "10,11"]);
        let denial = decision.denial().unwrap();
        assert_eq!(denial.radius, 100);
        assert_eq!(denial.at, SpatialPoint::new(10.0, 10.0));
    }

    #[test]
    fn bypass_holder_admits_creation() {
        assert!(decide(&["create", "10,10", "--bypass-at", "12,12"]).is_allowed());
    }

    #[test]
    fn nether_and_end_kinds() {
        assert!(decide(&["--kind", "nether", "travel", "15,0"]).is_allowed());
        assert!(decide(&["--kind", "nether", "travel", "14,0"]).is_denied());
        assert!(decide(&["--kind", "the_end", "travel", "0,0"]).is_allowed());
    }

    #[test]
    fn spawn_offset_moves_the_zone() {
        assert!(decide(&["--spawn", "1000,1000", "create", "0,0"]).is_allowed());
    }
}
