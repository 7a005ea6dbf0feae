use log::debug;
use ndarray::{ArrayBase, ArrayD, ArrayViewD, Axis, Data, Dimension, IxDyn, Zip};
use rayon::prelude::*;

use crate::{config::RollConfig, error::RollError};

use super::{
    helpers::ported::numpy::{arange, clip, fold_where_greater_than},
    kernel::tent_row,
};

/// Shape of the roll for a pitch array of shape `pitch_shape`, plus a trailing bin axis.
pub fn roll_shape(pitch_shape: &[usize], n_bins: usize) -> Vec<usize> {
    let mut shape = pitch_shape.to_vec();
    shape.push(n_bins);
    shape
}

fn broadcast_to<'a>(
    array: &'a ArrayD<f32>,
    shape: &[usize],
) -> Result<ArrayViewD<'a, f32>, RollError> {
    array.broadcast(IxDyn(shape)).ok_or_else(|| RollError::Broadcast {
        from: array.shape().to_vec(),
        to: shape.to_vec(),
    })
}

/// Convert a pitch array of any shape to a roll.
///
/// Every pitch value gets a triangular pulse over the bin axis, peaking at 1 on
/// `pitch * bins_per_semitone` and falling to 0 over `smooth_bins` bins on each side.
/// The pulse is built as a rising ramp, folded down where it exceeds 1, then clipped to `[0, 1]`.
/// Pulses centered outside the bin range are cut off silently.
///
/// # Arguments
///
/// * `pitch` - Pitch array of shape S, e.g. (t,) or (batch, t).
/// * `config` - Bin resolution and kernel half-width.
///
/// # Returns
///
/// * The roll, of shape S + (128 * bins_per_semitone,), every value in `[0, 1]`.
pub fn pitch_to_roll<S, D>(
    pitch: &ArrayBase<S, D>,
    config: &RollConfig,
) -> Result<ArrayD<f32>, RollError>
where
    S: Data<Elem = f32>,
    D: Dimension,
{
    config.validate()?;

    let n_bins = config.n_bins();
    let shape = roll_shape(pitch.shape(), n_bins);
    debug!("Encoding pitch of shape {:?} into roll of shape {:?}", pitch.shape(), shape);

    // (f,) -> S + (f,)
    let x = arange(n_bins).into_dyn();
    let x = broadcast_to(&x, &shape)?;

    let a = 1.0 / config.smooth_bins;
    let scale = config.bins_per_semitone as f32;

    // S -> S + (1,) -> S + (f,)
    let b = pitch
        .mapv(|p| 1.0 - (p * scale) / config.smooth_bins)
        .into_dyn()
        .insert_axis(Axis(pitch.ndim()));
    let b = broadcast_to(&b, &shape)?;

    let mut roll = Zip::from(&x).and(&b).map_collect(|&x, &b| a * x + b);
    fold_where_greater_than(&mut roll, 1.0);
    clip(&mut roll, 0.0, 1.0);

    Ok(roll)
}

/// Same as [`pitch_to_roll`], computing each row independently on the rayon thread pool.
pub fn pitch_to_roll_par<S, D>(
    pitch: &ArrayBase<S, D>,
    config: &RollConfig,
) -> Result<ArrayD<f32>, RollError>
where
    S: Data<Elem = f32>,
    D: Dimension,
{
    config.validate()?;

    let shape = roll_shape(pitch.shape(), config.n_bins());
    debug!("Encoding {} pitch rows in parallel into roll of shape {:?}", pitch.len(), shape);

    let pitches: Vec<f32> = pitch.iter().copied().collect();
    let data: Vec<f32> = pitches
        .par_iter()
        .flat_map_iter(|&p| tent_row(p, config))
        .collect();

    Ok(ArrayD::from_shape_vec(IxDyn(&shape), data)?)
}
