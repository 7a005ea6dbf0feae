/* PORTED NUMPY FUNCTIONS */

use ndarray::{Array1, ArrayBase, DataMut, Dimension};

/// Returns evenly spaced values `0, 1, ..., n - 1`. This is equivalent to numpy.arange(n).
///
/// # Arguments
///
/// * `n` - Number of values.
///
/// # Returns
///
/// * A 1D array of length `n`.
pub fn arange(n: usize) -> Array1<f32> {
    Array1::from_iter((0..n).map(|i| i as f32))
}

/// Reflects every element above `threshold` back below it, in place.
///
/// Each element `x > threshold` becomes `2 * threshold - x`; all other elements are left alone.
/// With a threshold of 1 this turns a rising ramp peaking at 1 into a tent.
///
/// # Arguments
///
/// * `array` - Array to fold.
/// * `threshold` - The value above which elements are reflected.
pub fn fold_where_greater_than<S, D>(array: &mut ArrayBase<S, D>, threshold: f32)
where
    S: DataMut<Elem = f32>,
    D: Dimension,
{
    array.mapv_inplace(|x| if x > threshold { 2.0 * threshold - x } else { x });
}

/// Limits the values of an array to `[min, max]`, in place. This is equivalent to numpy.clip.
///
/// # Arguments
///
/// * `array` - Array to clip.
/// * `min` - Lower bound.
/// * `max` - Upper bound.
pub fn clip<S, D>(array: &mut ArrayBase<S, D>, min: f32, max: f32)
where
    S: DataMut<Elem = f32>,
    D: Dimension,
{
    array.mapv_inplace(|x| x.max(min).min(max));
}

/// Returns the location of the maximum element in the array.
///
/// # Arguments
///
/// * `arr` - Input values.
///
/// # Returns
///
/// * The location of the first maximum element, or `None` if there are no values.
pub fn arg_max<'a, I>(arr: I) -> Option<usize>
where
    I: IntoIterator<Item = &'a f32>,
{
    arr.into_iter()
        .enumerate()
        .reduce(|(max_index, max_value), (current_index, current_value)| {
            if current_value > max_value {
                (current_index, current_value)
            } else {
                (max_index, max_value)
            }
        })
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr1;

    #[test]
    fn arange_counts_from_zero() {
        assert_eq!(arange(4), arr1(&[0.0, 1.0, 2.0, 3.0]));
        assert!(arange(0).is_empty());
    }

    #[test]
    fn fold_reflects_only_values_above_threshold() {
        let mut values = arr1(&[-1.0f32, 0.5, 1.0, 1.5, 3.0]);
        fold_where_greater_than(&mut values, 1.0);
        assert_eq!(values, arr1(&[-1.0, 0.5, 1.0, 0.5, -1.0]));
    }

    #[test]
    fn clip_limits_both_sides() {
        let mut values = arr1(&[-2.0f32, 0.0, 0.25, 1.0, 7.0]);
        clip(&mut values, 0.0, 1.0);
        assert_eq!(values, arr1(&[0.0, 0.0, 0.25, 1.0, 1.0]));
    }

    #[test]
    fn arg_max_returns_first_maximum() {
        assert_eq!(arg_max(&[0.0f32, 3.0, 1.0, 3.0]), Some(1));
        assert_eq!(arg_max(&[] as &[f32]), None);
    }
}
