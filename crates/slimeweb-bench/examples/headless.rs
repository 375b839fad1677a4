//! Headless driver: runs the reference world without a window.
//!
//! Demonstrates: build config → SlimeWorld → step frames → inject control
//! commands → read population and field state.
//!
//! Set `RUST_LOG=slimeweb_engine=debug` to see per-frame logging.

use slimeweb_bench::reference_profile;
use slimeweb_core::{Command, FieldKind, SpeciesKind};
use slimeweb_engine::SlimeWorld;
use tracing::info;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn main() {
    init_tracing();
    println!("=== Slimeweb Headless Example ===\n");

    let mut world = SlimeWorld::new(reference_profile(42)).unwrap();
    let (w, h) = (world.grid().width(), world.grid().height());

    // Frame number → command, as an input layer would send them.
    let script = [
        (120, Command::CycleSpeed),
        (180, Command::DepositFood {
            x: w as f64 / 2.0 + 20.0,
            y: h as f64 / 2.0,
        }),
        (240, Command::ToggleSpecies(SpeciesKind::Dictyostelium)),
        (300, Command::CycleSpeed),
        (360, Command::CycleSpeed),
        (420, Command::Reset),
    ];

    for frame in 0..480 {
        for (_, cmd) in script.iter().filter(|(at, _)| *at == frame) {
            info!(frame, command = ?cmd, "applying command");
            world.apply(*cmd);
        }

        let result = world.step_frame();

        if frame % 60 == 0 || frame == 479 {
            let pheromone = world.grid().layer(FieldKind::Pheromone);
            let mean_trail = pheromone.iter().sum::<f64>() / pheromone.len() as f64;
            let (_, setting) = world.current_speed();
            println!(
                "  frame {:>3}: speed={:<9} pop={:>5} (P {:>4} D {:>4} F {:>4}) births={:>3} deaths={:>3} net={:>+4} trail={:>8.5} time={:>6}μs",
                frame,
                setting.label,
                world.population(),
                world.population_of(SpeciesKind::Physarum),
                world.population_of(SpeciesKind::Dictyostelium),
                world.population_of(SpeciesKind::Fuligo),
                result.metrics.births,
                result.metrics.deaths,
                result.metrics.net_growth(),
                mean_trail,
                result.metrics.total_us,
            );
        }
    }

    println!(
        "\nDone: {} sub-steps, {:.2}s simulated, {} particles alive.",
        world.sub_step_count(),
        world.elapsed_seconds(),
        world.population()
    );
}
