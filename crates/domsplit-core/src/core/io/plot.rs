use crate::core::models::score::ScoreRecord;
use plotters::prelude::*;
use std::fmt::Display;
use std::ops::Range;
use std::path::Path;
use thiserror::Error;

const PLOT_SIZE: (u32, u32) = (1000, 600);

pub const X_AXIS_LABEL: &str = "Residues";
pub const Y_AXIS_LABEL: &str = "IntraA * IntraB / InterAB^2";

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("Failed to render score curve: {0}")]
    Drawing(String),
}

fn drawing_error<E: Display>(e: E) -> PlotError {
    PlotError::Drawing(e.to_string())
}

pub fn plot_title(protein_id: &str) -> String {
    format!("Domain identification ({})", protein_id)
}

/// Splits the curve into runs of consecutive defined scores, keyed by residue number.
/// Undefined records end a run, so they show up as gaps in the plotted line.
pub(crate) fn defined_segments(records: &[ScoreRecord]) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();
    for record in records {
        match record.score.discriminator.value() {
            Some(value) => current.push((record.residue_number as f64, value)),
            None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

fn axis_ranges(records: &[ScoreRecord]) -> (Range<f64>, Range<f64>) {
    let (x_min, x_max) = records
        .iter()
        .map(|r| r.residue_number as f64)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
            (lo.min(x), hi.max(x))
        });
    let x_range = if x_min < x_max {
        x_min..x_max
    } else if x_min.is_finite() {
        x_min - 1.0..x_min + 1.0
    } else {
        0.0..1.0
    };

    let y_max = records
        .iter()
        .filter_map(|r| r.score.discriminator.value())
        .fold(0.0, f64::max);
    let y_range = 0.0..if y_max > 0.0 { y_max * 1.1 } else { 1.0 };

    (x_range, y_range)
}

/// Renders the discriminator curve of `records` as an SVG line chart at `path`.
pub fn render_score_curve<P: AsRef<Path>>(
    path: P,
    records: &[ScoreRecord],
    protein_id: &str,
) -> Result<(), PlotError> {
    let (x_range, y_range) = axis_ranges(records);

    let root = SVGBackend::new(path.as_ref(), PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(drawing_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(plot_title(protein_id), ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range)
        .map_err(drawing_error)?;

    chart
        .configure_mesh()
        .x_desc(X_AXIS_LABEL)
        .y_desc(Y_AXIS_LABEL)
        .draw()
        .map_err(drawing_error)?;

    for segment in defined_segments(records) {
        if let [point] = segment.as_slice() {
            chart
                .draw_series(std::iter::once(Circle::new(*point, 2, RED.filled())))
                .map_err(drawing_error)?;
        } else {
            chart
                .draw_series(LineSeries::new(segment, RED))
                .map_err(drawing_error)?;
        }
    }

    root.present().map_err(drawing_error)?;
    Ok(())
}
