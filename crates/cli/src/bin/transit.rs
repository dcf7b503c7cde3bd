use std::path::PathBuf;

use clap::Parser;
use transit_engine::catalog;
use transit_engine::config::{load_bodies, load_ship_classes};
use transit_engine::core::units::km_to_m;
use transit_engine::export::profile;
use transit_engine::flight::{self, FlightPhase, FlightPolicy, TickOutcome};
use transit_engine::planning::{analyze_launch_window, solve_intercept};

#[derive(Parser)]
#[command(author, version, about = "Flight planner CLI for the transit engine")]
struct Cli {
    /// Origin body name (case-insensitive)
    #[arg(long)]
    from: String,

    /// Destination body name (case-insensitive)
    #[arg(long)]
    to: String,

    /// Ship class name from the fleet catalog
    #[arg(long)]
    ship: String,

    /// Departure time in simulated seconds since epoch
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    /// Reference body for cached distance queries (defaults to origin)
    #[arg(long)]
    reference: Option<String>,

    /// World manifest path (YAML file, TOML file, or directory of TOML)
    #[arg(long, default_value = "configs/bodies.yaml")]
    bodies: PathBuf,

    /// Fleet catalog path
    #[arg(long, default_value = "configs/ships.yaml")]
    ships: PathBuf,

    /// Aim at the destination's current position instead of intercept-solving
    #[arg(long, default_value_t = false)]
    no_intercept: bool,

    /// Mark the flight to dock on arrival
    #[arg(long, default_value_t = false)]
    dock: bool,

    /// Tick quantum in seconds for the simulated advancement
    #[arg(long, default_value_t = 60.0)]
    tick: f64,

    /// Write per-tick progress samples as CSV (use `-` for stdout)
    #[arg(long)]
    export_profile: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let bodies = load_bodies(&cli.bodies)?;
    let ship_classes = load_ship_classes(&cli.ships)?;

    let reference = cli.reference.as_deref().unwrap_or(&cli.from);
    let mut world = catalog::build_world(&bodies, reference)?;
    let ship = catalog::select_ship(&ship_classes, &cli.ship)?;

    let origin = world
        .body_id(&cli.from)
        .ok_or_else(|| anyhow::anyhow!("origin body '{}' not in manifest", cli.from))?;
    let destination = world
        .body_id(&cli.to)
        .ok_or_else(|| anyhow::anyhow!("destination body '{}' not in manifest", cli.to))?;

    world.update_positions(cli.time);

    let policy = FlightPolicy {
        tick_seconds: cli.tick,
        ..FlightPolicy::default()
    };

    let window = analyze_launch_window(&world, origin, destination, cli.time);
    println!(
        "Alignment: {:?} (current {:.0} km in [{:.0}, {:.0}] km)",
        window.quality, window.current_distance_km, window.min_distance_km, window.max_distance_km
    );
    if let Some(next) = window.next_window_s {
        println!(
            "Next optimal departure in {:.1} days",
            transit_engine::core::time::seconds_to_days(next - cli.time)
        );
    }

    let intercept = if cli.no_intercept {
        None
    } else {
        let solution = solve_intercept(&world, origin, destination, cli.time, |d| {
            flight::travel_time(d, &ship, &policy)
        });
        println!(
            "Intercept: {:.0} km after {} round(s){}",
            solution.distance_km,
            solution.rounds,
            if solution.converged { "" } else { " (best effort)" }
        );
        Some(solution)
    };

    let distance_m = match &intercept {
        Some(solution) => km_to_m(solution.distance_km),
        None => km_to_m(world.distance_between(origin, destination, cli.time)),
    };

    let mut state = flight::plan_flight(origin, destination, distance_m, &ship, &policy);
    state.dock_on_arrival = cli.dock;
    if let Some(solution) = &intercept {
        state.origin_position_km = Some(solution.origin_position_km);
        state.intercept_position_km = Some(solution.intercept_position_km);
    }

    println!(
        "Plan: {:.1} days total ({:.1} h burn each end, {:.1} days coast), {:.0} kg propellant",
        transit_engine::core::time::seconds_to_days(state.total_time_s),
        state.burn_time_s / 3_600.0,
        transit_engine::core::time::seconds_to_days(state.coast_time_s),
        flight::leg_propellant_mass(distance_m, &ship, &policy),
    );

    let mut writer = match &cli.export_profile {
        Some(path) => {
            let mut writer = profile::writer_for_path(path)?;
            profile::write_header(&mut writer)?;
            Some(writer)
        }
        None => None,
    };

    let mut ticks: u64 = 0;
    loop {
        let outcome = flight::advance(&mut state, cli.tick);
        ticks += 1;
        if let Some(writer) = writer.as_mut() {
            profile::Record {
                time_s: state.elapsed_time_s,
                phase: phase_label(state.phase),
                distance_m: state.distance_covered_m,
                velocity_m_s: state.current_velocity_m_s,
            }
            .write_to(writer.as_mut())?;
        }
        if outcome == TickOutcome::Arrived {
            break;
        }
    }

    println!(
        "Arrived after {} tick(s); covered {:.0} m{}",
        ticks,
        state.distance_covered_m,
        if state.dock_on_arrival { ", docking" } else { "" }
    );

    Ok(())
}

fn phase_label(phase: FlightPhase) -> &'static str {
    match phase {
        FlightPhase::Accelerating => "accelerating",
        FlightPhase::Coasting => "coasting",
        FlightPhase::Decelerating => "decelerating",
        FlightPhase::Complete => "complete",
    }
}
