use log::info;
use simcore::{
    CompoundSpec, LapContext, LapModel, Model, RaceConfig, ResultsByCompound, SimulationResult,
};

/// Fraction of the excess temperature over ambient lost each lap.
const HEAT_DISSIPATION_FACTOR: f64 = 0.1;

/// Load is given in Newtons; thermal sensitivity is degC per kilonewton.
const NEWTONS_PER_KILONEWTON: f64 = 1000.0;

/// Lap-stepping state for a single compound over a race.
pub struct TyreModel {
    spec: CompoundSpec,
    initial_temp: f64,
    current_grip: f64,
    current_temp: f64,
}

impl TyreModel {
    /// Build a model at its starting state: full base grip, tyre at
    /// ambient track temperature.
    pub fn new(spec: CompoundSpec, config: &RaceConfig) -> Self {
        let current_grip = spec.base_grip;
        TyreModel {
            spec,
            initial_temp: config.track_temperature,
            current_grip,
            current_temp: config.track_temperature,
        }
    }

    pub fn spec(&self) -> &CompoundSpec {
        &self.spec
    }

    /// Grip remaining after the laps stepped so far.
    pub fn grip(&self) -> f64 {
        self.current_grip
    }

    /// Tyre temperature after the laps stepped so far.
    pub fn temperature(&self) -> f64 {
        self.current_temp
    }
}

fn degraded_grip(grip: f64, degradation_rate: f64) -> f64 {
    (grip - degradation_rate).max(0.0)
}

fn lap_heat_input(load_per_lap: f64, thermal_sensitivity: f64) -> f64 {
    (load_per_lap / NEWTONS_PER_KILONEWTON) * thermal_sensitivity
}

impl Model for TyreModel {
    fn reset(&mut self) {
        self.current_grip = self.spec.base_grip;
        self.current_temp = self.initial_temp;
    }
}

impl LapModel for TyreModel {
    fn step_lap(&mut self, _ctx: LapContext, config: &RaceConfig) {
        // Grip decays linearly, floored at zero.
        self.current_grip = degraded_grip(self.current_grip, self.spec.degradation_rate);

        // Heat input and dissipation apply in the same update; the
        // dissipation term reads the pre-update temperature.
        let temp_increase = lap_heat_input(config.load_per_lap, self.spec.thermal_sensitivity);
        self.current_temp += temp_increase
            - (self.current_temp - config.track_temperature) * HEAT_DISSIPATION_FACTOR;
    }
}

/// Simulate one compound over the full race distance.
///
/// Returns the per-lap grip and temperature series; both have length
/// `config.race_distance`. Degenerate inputs (negative rates, zero laps)
/// are accepted as-is and produce the mathematically consistent output.
pub fn simulate(spec: &CompoundSpec, config: &RaceConfig) -> SimulationResult {
    info!("Simulating for {} compound...", spec.name);

    let mut model = TyreModel::new(spec.clone(), config);
    let mut result = SimulationResult::with_capacity(config.race_distance as usize);

    for lap in 1..=config.race_distance {
        model.step_lap(LapContext { lap }, config);
        result.remaining_grip.push(model.grip());
        result.temperatures.push(model.temperature());
    }

    result
}

/// Simulate every compound in list order against the shared config.
pub fn simulate_all(compounds: &[CompoundSpec], config: &RaceConfig) -> ResultsByCompound {
    let mut results = ResultsByCompound::new();
    for spec in compounds {
        results.push(spec.name.clone(), simulate(spec, config));
    }
    results
}
