//! Tridiagonal linear systems and the Thomas algorithm.
//!
//! Row `i` of the system reads
//! ```text
//! lower[i]*x[i-1] + diag[i]*x[i] + upper[i]*x[i+1] = rhs[i]
//! ```
//! with `lower[0]` and `upper[n-1]` ignored. The forward sweep eliminates the
//! lower diagonal, back substitution recovers `x`; both are O(n).
//!
//! The sweep does not pivot. A pivot that is zero relative to the largest
//! matrix entry (boundary rows can make a leading block singular while the
//! whole system is not) hands the system over to Gaussian elimination with
//! row interchanges, still O(n). Only a zero pivot there is reported as a
//! singular system.
use crate::numerical::ODE_errors::OdeError;
use log::debug;
use nalgebra::DVector;

/// pivots below this fraction of the largest entry count as zero
const PIVOT_TOLERANCE: f64 = 1e-12;

#[derive(Debug, Clone)]
pub struct Tridiagonal {
    pub lower: DVector<f64>,
    pub diag: DVector<f64>,
    pub upper: DVector<f64>,
}

impl Tridiagonal {
    /// Zero system of size `n`.
    pub fn zeros(n: usize) -> Self {
        Tridiagonal {
            lower: DVector::zeros(n),
            diag: DVector::zeros(n),
            upper: DVector::zeros(n),
        }
    }

    pub fn size(&self) -> usize {
        self.diag.len()
    }

    /// Sets row `i` to `(lower, diag, upper)`.
    pub fn set_row(&mut self, i: usize, lower: f64, diag: f64, upper: f64) {
        self.lower[i] = lower;
        self.diag[i] = diag;
        self.upper[i] = upper;
    }

    /// A * x, used to check solutions.
    #[cfg(test)]
    pub fn mul_vec(&self, x: &DVector<f64>) -> DVector<f64> {
        let n = self.size();
        DVector::from_fn(n, |i, _| {
            let mut acc = self.diag[i] * x[i];
            if i > 0 {
                acc += self.lower[i] * x[i - 1];
            }
            if i + 1 < n {
                acc += self.upper[i] * x[i + 1];
            }
            acc
        })
    }

    /// largest absolute entry of the three diagonals
    fn max_entry(&self) -> f64 {
        self.lower
            .iter()
            .chain(self.diag.iter())
            .chain(self.upper.iter())
            .fold(0.0_f64, |acc, v| acc.max(v.abs()))
    }

    /// Solves `A x = rhs` with the Thomas algorithm.
    pub fn solve(&self, rhs: &DVector<f64>) -> Result<DVector<f64>, OdeError> {
        let n = self.size();
        if rhs.len() != n {
            return Err(OdeError::LengthMismatch {
                left: n,
                right: rhs.len(),
            });
        }
        if n == 0 {
            return Ok(DVector::zeros(0));
        }
        let tiny = PIVOT_TOLERANCE * self.max_entry();
        if !tiny.is_finite() {
            return Err(OdeError::SingularSystem { row: 0 });
        }
        // modified upper diagonal and right-hand side
        let mut cp = DVector::zeros(n);
        let mut dp = DVector::zeros(n);

        for i in 0..n {
            let pivot = if i == 0 {
                self.diag[0]
            } else {
                self.diag[i] - self.lower[i] * cp[i - 1]
            };
            if !(pivot.abs() > tiny) {
                debug!(
                    "Thomas pivot {:e} at row {} is too small, switching to row interchanges",
                    pivot, i
                );
                return self.solve_with_pivoting(rhs, tiny);
            }
            if i + 1 < n {
                cp[i] = self.upper[i] / pivot;
            }
            dp[i] = if i == 0 {
                rhs[0] / pivot
            } else {
                (rhs[i] - self.lower[i] * dp[i - 1]) / pivot
            };
        }

        let mut x = DVector::zeros(n);
        x[n - 1] = dp[n - 1];
        for i in (0..n - 1).rev() {
            x[i] = dp[i] - cp[i] * x[i + 1];
        }
        Ok(x)
    }

    /// Gaussian elimination with partial pivoting on the band. A row
    /// interchange moves one entry onto the second upper diagonal `fill`.
    fn solve_with_pivoting(&self, rhs: &DVector<f64>, tiny: f64) -> Result<DVector<f64>, OdeError> {
        let n = self.size();
        let mut d = self.diag.clone();
        let mut du = self.upper.clone();
        let mut fill: DVector<f64> = DVector::zeros(n);
        let mut b = rhs.clone();

        for i in 0..n - 1 {
            // entry below the pivot, row i+1 column i
            let below = self.lower[i + 1];
            if d[i].abs() >= below.abs() {
                if !(d[i].abs() > tiny) {
                    return Err(OdeError::SingularSystem { row: i });
                }
                let factor = below / d[i];
                d[i + 1] -= factor * du[i];
                b[i + 1] -= factor * b[i];
            } else {
                // swap rows i and i+1
                let factor = d[i] / below;
                d[i] = below;
                let next_diag = d[i + 1];
                d[i + 1] = du[i] - factor * next_diag;
                if i + 2 < n {
                    fill[i] = du[i + 1];
                    du[i + 1] = -factor * fill[i];
                }
                du[i] = next_diag;
                let b_i = b[i];
                b[i] = b[i + 1];
                b[i + 1] = b_i - factor * b[i + 1];
            }
        }
        if !(d[n - 1].abs() > tiny) {
            return Err(OdeError::SingularSystem { row: n - 1 });
        }

        let mut x = DVector::zeros(n);
        x[n - 1] = b[n - 1] / d[n - 1];
        if n > 1 {
            x[n - 2] = (b[n - 2] - du[n - 2] * x[n - 1]) / d[n - 2];
        }
        for i in (0..n.saturating_sub(2)).rev() {
            x[i] = (b[i] - du[i] * x[i + 1] - fill[i] * x[i + 2]) / d[i];
        }
        Ok(x)
    }
}
