use serde::{Deserialize, Serialize};

/// A named rubber formulation with fixed grip and thermal parameters.
///
/// All fields are required when deserializing a compound definition; a
/// missing key is surfaced immediately as a deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompoundSpec {
    /// Identifier, unique within a run
    pub name: String,
    /// Starting grip level (unitless, typically 0-1)
    pub base_grip: f64,
    /// Grip lost per lap before clamping at zero
    pub degradation_rate: f64,
    /// Degrees Celsius gained per kN of load per lap
    pub thermal_sensitivity: f64,
}

impl CompoundSpec {
    pub fn new(
        name: impl Into<String>,
        base_grip: f64,
        degradation_rate: f64,
        thermal_sensitivity: f64,
    ) -> Self {
        CompoundSpec {
            name: name.into(),
            base_grip,
            degradation_rate,
            thermal_sensitivity,
        }
    }
}

fn default_track_temperature() -> f64 {
    30.0
}

fn default_race_distance() -> u32 {
    50
}

fn default_load_per_lap() -> f64 {
    1500.0
}

/// Race configuration shared by every compound in a run.
///
/// Absent keys take the defaults (30 degC ambient, 50 laps, 1500 N).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceConfig {
    /// Ambient baseline in degrees Celsius
    #[serde(default = "default_track_temperature")]
    pub track_temperature: f64,
    /// Number of laps
    #[serde(default = "default_race_distance")]
    pub race_distance: u32,
    /// Vertical load in Newtons, constant across laps and compounds
    #[serde(default = "default_load_per_lap")]
    pub load_per_lap: f64,
}

impl Default for RaceConfig {
    fn default() -> Self {
        RaceConfig {
            track_temperature: default_track_temperature(),
            race_distance: default_race_distance(),
            load_per_lap: default_load_per_lap(),
        }
    }
}

/// Per-compound output series, one entry per lap.
///
/// Index i holds the state after lap i+1; both series have length
/// `race_distance`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationResult {
    pub remaining_grip: Vec<f64>,
    pub temperatures: Vec<f64>,
}

impl SimulationResult {
    pub fn with_capacity(laps: usize) -> Self {
        SimulationResult {
            remaining_grip: Vec::with_capacity(laps),
            temperatures: Vec::with_capacity(laps),
        }
    }

    /// Number of laps recorded so far.
    pub fn laps(&self) -> usize {
        self.remaining_grip.len()
    }
}

/// Mapping from compound name to its simulation result.
///
/// Iteration order is insertion order, which is the order compounds were
/// simulated in.
#[derive(Debug, Clone, Default)]
pub struct ResultsByCompound {
    entries: Vec<(String, SimulationResult)>,
}

impl ResultsByCompound {
    pub fn new() -> Self {
        ResultsByCompound::default()
    }

    pub fn push(&mut self, name: impl Into<String>, result: SimulationResult) {
        self.entries.push((name.into(), result));
    }

    pub fn get(&self, name: &str) -> Option<&SimulationResult> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, r)| r)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SimulationResult)> {
        self.entries.iter().map(|(n, r)| (n.as_str(), r))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One lap of the race clock.
#[derive(Debug, Clone, Copy)]
pub struct LapContext {
    /// Lap number, 1-based
    pub lap: u32,
}

pub trait Model {
    fn reset(&mut self);
}

pub trait LapModel: Model {
    fn step_lap(&mut self, ctx: LapContext, config: &RaceConfig);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn race_config_defaults() {
        let config = RaceConfig::default();
        assert_eq!(config.track_temperature, 30.0);
        assert_eq!(config.race_distance, 50);
        assert_eq!(config.load_per_lap, 1500.0);
    }

    #[test]
    fn race_config_absent_keys_take_defaults() {
        let config: RaceConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.track_temperature, 30.0);
        assert_eq!(config.race_distance, 50);
        assert_eq!(config.load_per_lap, 1500.0);

        let config: RaceConfig = serde_json::from_str(r#"{"race_distance": 3}"#).unwrap();
        assert_eq!(config.race_distance, 3);
        assert_eq!(config.load_per_lap, 1500.0);
    }

    #[test]
    fn compound_spec_missing_key_is_an_error() {
        let err = serde_json::from_str::<CompoundSpec>(
            r#"{"name": "Soft", "base_grip": 1.0, "degradation_rate": 0.02}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("thermal_sensitivity"));
    }

    #[test]
    fn compound_spec_full_definition_parses() {
        let spec: CompoundSpec = serde_json::from_str(
            r#"{"name": "Soft", "base_grip": 1.0, "degradation_rate": 0.02, "thermal_sensitivity": 0.1}"#,
        )
        .unwrap();
        assert_eq!(spec.name, "Soft");
        assert_eq!(spec.base_grip, 1.0);
    }

    #[test]
    fn results_preserve_insertion_order() {
        let mut results = ResultsByCompound::new();
        results.push("Soft", SimulationResult::default());
        results.push("Medium", SimulationResult::default());
        results.push("Hard", SimulationResult::default());

        let names: Vec<&str> = results.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Soft", "Medium", "Hard"]);
        assert_eq!(results.len(), 3);
        assert!(results.get("Medium").is_some());
        assert!(results.get("Wet").is_none());
    }
}
