use std::path::Path;

use ndarray::{ArrayView1, ArrayView2};
use plotters::prelude::*;

use crate::error::RollError;

const PLOT_SIZE: (u32, u32) = (900, 700);

fn plot_error<E: std::fmt::Display>(err: E) -> RollError {
    RollError::Plot(err.to_string())
}

/// Maps an activation in `[0, 1]` from blue to red.
fn activation_color(value: f32) -> HSLColor {
    let value = value.clamp(0.0, 1.0) as f64;
    HSLColor((1.0 - value) * 240.0 / 360.0, 1.0, 0.5)
}

/// Write the frequency track and its roll to an SVG file.
///
/// The upper panel plots the frequency of each frame; the lower panel shows the roll
/// with frames on the x axis and pitch bins on the y axis.
///
/// # Arguments
///
/// * `path` - Output SVG path.
/// * `freq` - Frequency per frame, in Hz, shape (t,).
/// * `roll` - Roll, shape (t, f).
pub fn plot_roll<P: AsRef<Path>>(
    path: P,
    freq: ArrayView1<f32>,
    roll: ArrayView2<f32>,
) -> Result<(), RollError> {
    let (n_frames, n_bins) = roll.dim();
    if freq.len() != n_frames {
        return Err(RollError::Plot(format!(
            "{} frequencies for {} roll frames",
            freq.len(),
            n_frames
        )));
    }

    let root = SVGBackend::new(path.as_ref(), PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;
    let (upper, lower) = root.split_vertically((PLOT_SIZE.1 / 3) as i32);

    let x_max = n_frames.max(1) as f32;
    let freq_max = freq.iter().cloned().fold(1.0f32, f32::max) * 1.1;

    let mut freq_chart = ChartBuilder::on(&upper)
        .margin(10)
        .x_label_area_size(20)
        .y_label_area_size(60)
        .build_cartesian_2d(0f32..x_max, 0f32..freq_max)
        .map_err(plot_error)?;

    freq_chart
        .configure_mesh()
        .y_desc("Freq (Hz)")
        .draw()
        .map_err(plot_error)?;

    freq_chart
        .draw_series(LineSeries::new(
            freq.iter().enumerate().map(|(t, &f)| (t as f32, f)),
            BLUE.stroke_width(2),
        ))
        .map_err(plot_error)?;

    let mut roll_chart = ChartBuilder::on(&lower)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f32..x_max, 0f32..n_bins as f32)
        .map_err(plot_error)?;

    roll_chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Time (frames)")
        .y_desc("Pitch bins")
        .draw()
        .map_err(plot_error)?;

    roll_chart
        .plotting_area()
        .fill(&activation_color(0.0))
        .map_err(plot_error)?;

    // Only active cells; the background already shows zero activation.
    roll_chart
        .draw_series(roll.indexed_iter().filter(|(_, v)| **v > 0.0).map(|((t, bin), &v)| {
            let (t, bin) = (t as f32, bin as f32);
            Rectangle::new([(t, bin), (t + 1.0, bin + 1.0)], activation_color(v).filled())
        }))
        .map_err(plot_error)?;

    root.present().map_err(plot_error)?;
    Ok(())
}
