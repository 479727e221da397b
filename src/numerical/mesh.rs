//! Uniform meshes shared by all solvers.
//!
//! Nodes are computed as `xl + i*h` rather than by repeated addition, so the
//! last node of `[1, 2]` with `h = 0.1` is `2.0` and not `1.9999999999999998`.
use crate::numerical::ODE_errors::OdeError;
use nalgebra::DVector;

/// relative slack when checking that `h` does not exceed the interval
const STEP_SLACK: f64 = 1e-12;
/// largest number of steps a mesh may have
pub const MAX_STEPS: usize = 100_000_000;

/// Number of steps `N = round((xr - xl) / h)` after validating the step;
/// more than [`MAX_STEPS`] steps is an invalid step too.
pub fn n_steps(xl: f64, xr: f64, h: f64) -> Result<usize, OdeError> {
    let length = xr - xl;
    if !(h.is_finite() && xl.is_finite() && xr.is_finite()) || h <= 0.0 || length <= 0.0 {
        return Err(OdeError::InvalidStep { h, xl, xr });
    }
    if h > length * (1.0 + STEP_SLACK) {
        return Err(OdeError::InvalidStep { h, xl, xr });
    }
    let steps = (length / h).round();
    if !(steps <= MAX_STEPS as f64) {
        return Err(OdeError::InvalidStep { h, xl, xr });
    }
    Ok((steps as usize).max(1))
}

/// Mesh `x_0..x_N` with `x_i = xl + i*h`.
///
/// When `h` does not divide the interval evenly the last node may fall short
/// of (or slightly overshoot) `xr`; the rounded `N` wins.
pub fn uniform_mesh(xl: f64, xr: f64, h: f64) -> Result<DVector<f64>, OdeError> {
    let n = n_steps(xl, xr, h)?;
    Ok(DVector::from_fn(n + 1, |i, _| xl + i as f64 * h))
}
