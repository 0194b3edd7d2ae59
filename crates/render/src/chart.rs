use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use simcore::{ResultsByCompound, SimulationResult};
use thiserror::Error;

const CHART_WIDTH: u32 = 1400;
const CHART_HEIGHT: u32 = 800;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to draw chart: {0}")]
    Draw(String),
}

impl RenderError {
    fn draw(err: impl std::fmt::Display) -> Self {
        RenderError::Draw(err.to_string())
    }
}

fn grip_series(result: &SimulationResult) -> &[f64] {
    &result.remaining_grip
}

fn temperature_series(result: &SimulationResult) -> &[f64] {
    &result.temperatures
}

/// Fold the min/max over every compound's series, padded so flat lines
/// do not collapse the axis. Falls back to 0..1 when there is no data.
fn value_range<'a>(series: impl Iterator<Item = &'a [f64]>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for values in series {
        for &v in values {
            min = min.min(v);
            max = max.max(v);
        }
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let pad = ((max - min) * 0.05).max(0.05);
    (min - pad, max + pad)
}

fn draw_chart(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    title: &str,
    y_label: &str,
    results: &ResultsByCompound,
    race_distance: u32,
    series_of: fn(&SimulationResult) -> &[f64],
    label_suffix: &str,
) -> Result<(), RenderError> {
    let (y_min, y_max) = value_range(results.iter().map(|(_, r)| series_of(r)));
    let x_max = f64::from(race_distance.max(2));

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(1.0..x_max, y_min..y_max)
        .map_err(RenderError::draw)?;

    chart
        .configure_mesh()
        .x_desc("Lap")
        .y_desc(y_label)
        .draw()
        .map_err(RenderError::draw)?;

    for (idx, (name, result)) in results.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        let values = series_of(result);
        chart
            .draw_series(LineSeries::new(
                values.iter().enumerate().map(|(i, &v)| ((i + 1) as f64, v)),
                &color,
            ))
            .map_err(RenderError::draw)?
            .label(format!("{name} {label_suffix}"))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.filled()));
    }

    if !results.is_empty() {
        chart
            .configure_series_labels()
            .border_style(&BLACK)
            .background_style(&WHITE.mix(0.8))
            .draw()
            .map_err(RenderError::draw)?;
    }

    Ok(())
}

/// Render the full results mapping as one PNG: grip chart on top,
/// temperature chart below, shared lap axis, one labeled line per
/// compound. Pure presentation; the series are drawn as-is.
pub fn render_results(
    results: &ResultsByCompound,
    race_distance: u32,
    path: impl AsRef<Path>,
) -> Result<(), RenderError> {
    let root =
        BitMapBackend::new(path.as_ref(), (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(RenderError::draw)?;

    let (grip_area, temp_area) = root.split_vertically((CHART_HEIGHT / 2) as i32);

    draw_chart(
        &grip_area,
        "Tyre Grip Over Race Distance",
        "Grip Level",
        results,
        race_distance,
        grip_series,
        "Grip",
    )?;
    draw_chart(
        &temp_area,
        "Tyre Temperature Over Race Distance",
        "Temperature (\u{b0}C)",
        results,
        race_distance,
        temperature_series,
        "Temperature",
    )?;

    root.present().map_err(RenderError::draw)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use simcore::{CompoundSpec, RaceConfig};

    #[test]
    fn renders_png_for_simulated_compounds() {
        let compounds = vec![
            CompoundSpec::new("Soft", 1.0, 0.02, 0.1),
            CompoundSpec::new("Hard", 0.8, 0.01, 0.05),
        ];
        let config = RaceConfig::default();
        let results = tyre::simulate_all(&compounds, &config);

        let path = std::env::temp_dir().join("tyre_render_test.png");
        render_results(&results, config.race_distance, &path).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn tolerates_empty_results_and_zero_distance() {
        let results = ResultsByCompound::new();
        let path = std::env::temp_dir().join("tyre_render_empty_test.png");
        render_results(&results, 0, &path).unwrap();
        let _ = std::fs::remove_file(&path);
    }
}
