use clap::{Parser, Subcommand};
use fieldsim_core::runtime::{body_states, build_world, pivot_names, BodyState};
use fieldsim_core::{Scenario, Slot};
use log::info;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fieldsim")]
#[command(about = "fieldsim - charged satellites, primaries and pivots", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario and print the final state
    Run {
        /// Path to a JSON scenario (the built-in two body demo if omitted)
        scenario: Option<PathBuf>,
        /// Override the scenario's tick count
        #[arg(long)]
        ticks: Option<u64>,
        /// Also print the state every K ticks (0 = only at the end)
        #[arg(long, default_value_t = 0)]
        every: u64,
    },
    /// List the satellite placement slots and their angles
    Slots,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Run {
            scenario,
            ticks,
            every,
        } => run(scenario.as_ref(), ticks, every),
        Commands::Slots => {
            print_slots();
            Ok(())
        }
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(
    file: Option<&PathBuf>,
    ticks: Option<u64>,
    every: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut scenario = match file {
        Some(path) => Scenario::from_json(&fs::read_to_string(path)?)?,
        None => Scenario::two_body_demo(),
    };
    if let Some(ticks) = ticks {
        scenario.ticks = ticks;
    }

    let mut world = build_world(&scenario)?;
    info!(
        "running {} ticks over {} primaries and {} satellites",
        scenario.ticks,
        world.primaries().count(),
        world.satellites().count()
    );

    for _ in 0..scenario.ticks {
        world.tick();
        if every > 0 && world.tick_count() % every == 0 && world.tick_count() < scenario.ticks {
            println!("# tick {}", world.tick_count());
            print_states(&body_states(&world));
        }
    }

    println!("# tick {} (final)", world.tick_count());
    print_states(&body_states(&world));
    for (a, b) in pivot_names(&world) {
        println!("pivot {} <=> {}", a, b);
    }

    Ok(())
}

fn print_states(states: &[BodyState]) {
    for state in states {
        let p = state.position;
        let (axis, angle) = state.rotation.to_axis_angle();
        println!(
            "{:<32} {:?} pos=({:.6}, {:.6}, {:.6}) rot={:.6} about ({:.3}, {:.3}, {:.3})",
            state.id, state.kind, p.x, p.y, p.z, angle, axis.x, axis.y, axis.z
        );
    }
}

fn print_slots() {
    for slot in Slot::ALL {
        let (omega, gamma) = slot.angles();
        let offset = slot.orbit(1.0).local_offset();
        println!(
            "{:<16} omega={:.4} gamma={:.4} offset=({:.3}, {:.3}, {:.3})",
            slot.name(),
            omega,
            gamma,
            offset.x,
            offset.y,
            offset.z
        );
    }
}
