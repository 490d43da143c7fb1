// Burn chamber demo
// A sealed tile of plasma and oxygen is lit while a radiator pipe dumps heat
// into space next door. Prints one coloured line per tick.

use atmos_reactions::constants::{CELL_VOLUME, DEFAULT_PIPE_NAME, T0C};
use atmos_reactions::gas::Gas;
use atmos_reactions::gas_mixture::GasMixture;
use atmos_reactions::heat_exchanger::HeatExchanger;
use atmos_reactions::sim::{SimProps, Simulation, Station};
use atmos_reactions::sim_op::standard_ops;
use atmos_reactions::AtmosConfig;
use colored::Colorize;
use glam::IVec2;
use std::env;

const TICKS: u32 = 40;

fn main() {
    let config = match env::args().nth(1) {
        Some(path) => match AtmosConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{} {}", "config error:".red().bold(), err);
                std::process::exit(1);
            }
        },
        None => AtmosConfig::default(),
    };

    let mut station = Station::new();
    let Some(chamber) = station.add_tile(
        IVec2::new(0, 0),
        Some(
            GasMixture::new(CELL_VOLUME, T0C + 300.0)
                .with_moles(Gas::Oxygen, 40.0)
                .with_moles(Gas::Plasma, 60.0)
                .with_moles(Gas::Tritium, 4.0),
        ),
    ) else {
        return;
    };
    station.add_tile(IVec2::new(1, 0), None);

    let radiator =
        station.add_pipe(GasMixture::new(200.0, T0C + 500.0).with_moles(Gas::Nitrogen, 30.0));
    let device = station.add_device(Some(IVec2::new(1, 0)));
    station.connect(device, DEFAULT_PIPE_NAME, radiator);
    station.add_heat_exchanger(HeatExchanger::new(device).with_surface_area(1.0));

    let mut sim = Simulation::new(SimProps {
        station,
        config,
        ops: standard_ops(),
        dt: 0.5,
    });

    println!("{}", "Burn chamber".bold());
    println!(
        "{:>4}  {:>9}  {:>7}  {:>7}  {:>7}  {:>7}  {:>9}  {}",
        "tick", "T (K)", "O2", "plasma", "CO2", "H2O", "pipe (K)", "hotspots"
    );

    for _ in 0..TICKS {
        let logged = sim.hotspot_log.len();
        sim.step();

        let (Some(air), Some(pipe)) =
            (sim.station.mixture(chamber), sim.station.mixture(radiator))
        else {
            break;
        };
        let new_hotspots = sim.hotspot_log.len() - logged;
        let temperature = format!("{:>9.1}", air.temperature());
        let temperature = if air.temperature() > T0C + 1000.0 {
            temperature.red().bold()
        } else if air.temperature() > T0C + 100.0 {
            temperature.yellow()
        } else {
            temperature.cyan()
        };
        let hotspots = if new_hotspots > 0 {
            format!("{}", new_hotspots).red()
        } else {
            "-".dimmed()
        };

        println!(
            "{:>4}  {}  {:>7.2}  {:>7.2}  {:>7.2}  {:>7.2}  {:>9.1}  {}",
            sim.current_step(),
            temperature,
            air.moles(Gas::Oxygen),
            air.moles(Gas::Plasma),
            air.moles(Gas::CarbonDioxide),
            air.moles(Gas::WaterVapor),
            pipe.temperature(),
            hotspots
        );
    }

    sim.finish();
    println!(
        "{} {} hotspot exposures in {} ticks",
        "done:".green().bold(),
        sim.hotspot_log.len(),
        sim.current_step()
    );
}
