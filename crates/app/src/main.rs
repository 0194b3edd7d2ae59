use std::error::Error;

use log::info;
use simcore::{CompoundSpec, RaceConfig};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

const OUTPUT_PATH: &str = "tyre_compound_analysis.png";

fn compounds() -> Vec<CompoundSpec> {
    vec![
        CompoundSpec::new("Soft", 1.0, 0.02, 0.1),
        CompoundSpec::new("Medium", 0.9, 0.015, 0.08),
        CompoundSpec::new("Hard", 0.8, 0.01, 0.05),
    ]
}

fn main() -> Result<(), Box<dyn Error>> {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let config = RaceConfig::default();
    let compounds = compounds();

    let results = tyre::simulate_all(&compounds, &config);
    render::render_results(&results, config.race_distance, OUTPUT_PATH)?;

    info!("Wrote plot: {OUTPUT_PATH}");
    Ok(())
}
