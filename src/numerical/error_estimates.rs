//! Error estimates of a discrete solution.
//!
//! * pointwise absolute error against an exact solution;
//! * Runge-Romberg-Richardson (RRR) estimate from the solutions with steps
//!   `h` and `h/2`:
//! ```text
//! err_i = |y_{h/2}(x_i) - y_h(x_i)| / (2^p - 1)
//! ```
//! where `p` is the convergence order of the method.
//!
//! The two solutions of the RRR estimate live on different meshes (N + 1 and
//! 2N + 1 nodes). Before comparing, the fine solution is thinned to every
//! other node so the same `x_i` line up; any other pair of lengths is rejected
//! instead of being compared index by index.
use crate::numerical::ODE_errors::OdeError;
use log::debug;

/// relative tolerance when checking that fine and coarse nodes coincide
const NODE_TOLERANCE: f64 = 1e-9;

/// |approx_i - exact_i|
pub fn absolute_error(approx: &[f64], exact: &[f64]) -> Result<Vec<f64>, OdeError> {
    if approx.len() != exact.len() {
        return Err(OdeError::LengthMismatch {
            left: approx.len(),
            right: exact.len(),
        });
    }
    Ok(approx
        .iter()
        .zip(exact.iter())
        .map(|(a, e)| (a - e).abs())
        .collect())
}

/// Maximum of |v_i|, 0 for an empty slice.
pub fn max_norm(v: &[f64]) -> f64 {
    v.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()))
}

/// Fine samples at the coarse nodes.
///
/// Equal lengths are taken as already aligned; `2*(n-1)+1` fine samples are
/// thinned to every other one.
pub fn fine_to_coarse(coarse_len: usize, fine: &[f64]) -> Result<Vec<f64>, OdeError> {
    if fine.len() == coarse_len {
        return Ok(fine.to_vec());
    }
    if coarse_len == 0 || fine.len() != 2 * (coarse_len - 1) + 1 {
        return Err(OdeError::GridMismatch {
            coarse: coarse_len,
            fine: fine.len(),
        });
    }
    Ok(fine.iter().step_by(2).copied().collect())
}

/// Same as [`fine_to_coarse`] but also checks that every kept fine node sits
/// on the corresponding coarse node.
pub fn align_to_coarse(
    x_coarse: &[f64],
    x_fine: &[f64],
    y_fine: &[f64],
) -> Result<Vec<f64>, OdeError> {
    if x_fine.len() != y_fine.len() {
        return Err(OdeError::LengthMismatch {
            left: x_fine.len(),
            right: y_fine.len(),
        });
    }
    let x_kept = fine_to_coarse(x_coarse.len(), x_fine)?;
    let scale = 1.0 + max_norm(x_coarse);
    for (xc, xf) in x_coarse.iter().zip(x_kept.iter()) {
        if (xc - xf).abs() > NODE_TOLERANCE * scale {
            debug!("fine node {} does not match coarse node {}", xf, xc);
            return Err(OdeError::GridMismatch {
                coarse: x_coarse.len(),
                fine: x_fine.len(),
            });
        }
    }
    fine_to_coarse(x_coarse.len(), y_fine)
}

/// Pointwise RRR estimate on the coarse mesh.
pub fn rrr_method(y_h: &[f64], y_h2: &[f64], order: u32) -> Result<Vec<f64>, OdeError> {
    let aligned = fine_to_coarse(y_h.len(), y_h2)?;
    let denominator = 2.0_f64.powi(order as i32) - 1.0;
    Ok(y_h
        .iter()
        .zip(aligned.iter())
        .map(|(coarse, fine)| (fine - coarse).abs() / denominator)
        .collect())
}

/// Representative scalar of the RRR estimate: its maximum over the mesh.
pub fn rrr_max(y_h: &[f64], y_h2: &[f64], order: u32) -> Result<f64, OdeError> {
    Ok(max_norm(&rrr_method(y_h, y_h2, order)?))
}
