// Heat exchanger tests against the in-memory station

use atmos_reactions::constants::{CELL_VOLUME, DEFAULT_PIPE_NAME, T20C, TCMB};
use atmos_reactions::gas::Gas;
use atmos_reactions::gas_mixture::GasMixture;
use atmos_reactions::heat_exchanger::{ExchangeOutcome, HeatExchanger};
use atmos_reactions::sim::Station;
use atmos_reactions::{AtmosConfig, MixtureId};
use approx::assert_relative_eq;
use glam::IVec2;
use more_asserts::{assert_ge, assert_gt, assert_le, assert_lt};

fn room_air() -> GasMixture {
    GasMixture::new(CELL_VOLUME, T20C)
        .with_moles(Gas::Oxygen, 21.0)
        .with_moles(Gas::Nitrogen, 79.0)
}

fn coolant(temperature: f32) -> GasMixture {
    GasMixture::new(200.0, temperature).with_moles(Gas::Nitrogen, 20.0)
}

/// One exchanger on `location`, fed by a pipe holding `pipe_air`.
fn single_exchanger(station: &mut Station, location: IVec2, pipe_air: GasMixture) -> MixtureId {
    let pipe = station.add_pipe(pipe_air);
    let device = station.add_device(Some(location));
    station.connect(device, DEFAULT_PIPE_NAME, pipe);
    station.add_heat_exchanger(HeatExchanger::new(device));
    pipe
}

fn run_exchangers(station: &mut Station, config: &AtmosConfig, dt: f32) -> Vec<ExchangeOutcome> {
    station
        .exchangers
        .iter()
        .map(|exchanger| exchanger.exchange_heat(&station.grid, &mut station.mixtures, config, dt))
        .collect()
}

#[test]
fn test_space_radiator_cools_toward_background() {
    let config = AtmosConfig::default();
    let mut station = Station::new();
    station.add_tile(IVec2::ZERO, None);
    let pipe = single_exchanger(&mut station, IVec2::ZERO, coolant(600.0));

    let mut last = 600.0;
    for _ in 0..500 {
        run_exchangers(&mut station, &config, 1.0);
        let now = station.mixture(pipe).unwrap().temperature();
        assert_le!(now, last);
        assert_ge!(now, TCMB);
        last = now;
    }
    assert_lt!(last, 300.0);
}

#[test]
fn test_room_and_pipe_approach_each_other() {
    let config = AtmosConfig::default();
    let mut station = Station::new();
    let room = station.add_tile(IVec2::new(2, 2), Some(room_air())).unwrap();
    let pipe = single_exchanger(&mut station, IVec2::new(2, 2), coolant(150.0));

    let mut gap = T20C - 150.0;
    for _ in 0..50 {
        run_exchangers(&mut station, &config, 1.0);
        let pipe_t = station.mixture(pipe).unwrap().temperature();
        let room_t = station.mixture(room).unwrap().temperature();
        assert_le!(pipe_t, room_t + 1e-3);
        assert_le!(room_t - pipe_t, gap + 1e-3);
        gap = room_t - pipe_t;
    }
    assert_lt!(gap, T20C - 150.0);
}

#[test]
fn test_exchange_conserves_energy_between_pipe_and_room() {
    let config = AtmosConfig::default();
    let mut station = Station::new();
    let room = station.add_tile(IVec2::ZERO, Some(room_air())).unwrap();
    let pipe = single_exchanger(&mut station, IVec2::ZERO, coolant(800.0));

    let energy = |station: &Station| {
        let pipe_air = station.mixture(pipe).unwrap();
        let room_air = station.mixture(room).unwrap();
        config.heat_capacity(pipe_air, true) * pipe_air.temperature()
            + config.heat_capacity(room_air, true) * room_air.temperature()
    };
    let before = energy(&station);
    run_exchangers(&mut station, &config, 0.5);

    assert_relative_eq!(energy(&station), before, max_relative = 1e-4);
    assert_gt!(station.mixture(room).unwrap().temperature(), T20C);
}

#[test]
fn test_walled_in_exchanger_does_nothing() {
    let config = AtmosConfig::default();
    let mut station = Station::new();
    station.add_tile(IVec2::ZERO, Some(room_air()));
    station.set_blocked(IVec2::ZERO, true);
    let pipe = single_exchanger(&mut station, IVec2::ZERO, coolant(800.0));

    assert_eq!(run_exchangers(&mut station, &config, 1.0), vec![ExchangeOutcome::TileBlocked]);
    assert_eq!(station.mixture(pipe).unwrap().temperature(), 800.0);
}

#[test]
fn test_unconnected_exchanger_is_skipped() {
    let config = AtmosConfig::default();
    let mut station = Station::new();
    station.add_tile(IVec2::ZERO, Some(room_air()));
    let device = station.add_device(Some(IVec2::ZERO));
    station.add_heat_exchanger(HeatExchanger::new(device));

    assert_eq!(run_exchangers(&mut station, &config, 1.0), vec![ExchangeOutcome::MissingPipe]);
}

#[test]
fn test_heat_scale_speeds_up_exchange() {
    let slow = AtmosConfig {
        heat_scale: 1.0,
        ..AtmosConfig::default()
    };
    let fast = AtmosConfig::default();

    let cooled = |config: &AtmosConfig| {
        let mut station = Station::new();
        station.add_tile(IVec2::ZERO, None);
        let pipe = single_exchanger(&mut station, IVec2::ZERO, coolant(600.0));
        run_exchangers(&mut station, config, 1.0);
        600.0 - station.mixture(pipe).unwrap().temperature()
    };

    // a smaller effective heat capacity moves further for the same energy
    assert_gt!(cooled(&fast), cooled(&slow));
}

#[test]
fn test_coupled_exchanger_in_room() {
    let config = AtmosConfig::default();
    let mut station = Station::new();
    let room = station.add_tile(IVec2::ZERO, Some(room_air())).unwrap();
    let inlet = station.add_pipe(coolant(700.0));
    let outlet = station.add_pipe(GasMixture::new(200.0, T20C));
    let device = station.add_device(Some(IVec2::ZERO));
    station.connect(device, "inlet", inlet);
    station.connect(device, "outlet", outlet);
    station.add_heat_exchanger(HeatExchanger::coupled(device, "inlet", "outlet"));

    assert_eq!(run_exchangers(&mut station, &config, 1.0), vec![ExchangeOutcome::Exchanged]);

    let inlet_air = station.mixture(inlet).unwrap();
    let outlet_air = station.mixture(outlet).unwrap();
    assert_relative_eq!(inlet_air.moles(Gas::Nitrogen), 10.0, max_relative = 1e-5);
    assert_relative_eq!(outlet_air.moles(Gas::Nitrogen), 10.0, max_relative = 1e-5);
    assert_lt!(inlet_air.temperature(), 700.0);
    assert_gt!(station.mixture(room).unwrap().temperature(), T20C);
}
