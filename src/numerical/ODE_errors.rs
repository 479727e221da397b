use std::fmt;

/// Error types shared by the Cauchy and boundary-value solvers
#[derive(Debug, Clone, PartialEq)]
pub enum OdeError {
    /// step is not positive, not finite, or larger than the interval
    InvalidStep { h: f64, xl: f64, xr: f64 },
    /// two sequences that must be compared pointwise have different lengths
    LengthMismatch { left: usize, right: usize },
    /// the fine (h/2) grid cannot be aligned with the coarse (h) grid
    GridMismatch { coarse: usize, fine: usize },
    /// second equation of the system is not affine in (y, z) at this x
    NonAffineSystem { x: f64 },
    /// a*y + b*y' = c with a = b = 0
    DegenerateBoundary { a: f64, b: f64 },
    /// secant iteration of the shooting method did not reach the tolerance
    NotConverged {
        iterations: usize,
        last_guess: f64,
        residual: f64,
    },
    /// integration produced NaN or infinity at this x
    NonFiniteState { x: f64 },
    /// zero pivot during the forward sweep of the Thomas algorithm
    SingularSystem { row: usize },
    InvalidConfig(String),
}

impl fmt::Display for OdeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OdeError::InvalidStep { h, xl, xr } => write!(
                f,
                "invalid step h = {} for the interval [{}, {}]",
                h, xl, xr
            ),
            OdeError::LengthMismatch { left, right } => {
                write!(f, "sequences have different lengths: {} and {}", left, right)
            }
            OdeError::GridMismatch { coarse, fine } => write!(
                f,
                "grid of {} points is not a bisection of the grid of {} points",
                fine, coarse
            ),
            OdeError::NonAffineSystem { x } => write!(
                f,
                "second equation is not affine in (y, z) at x = {}; finite differences need a linear ODE",
                x
            ),
            OdeError::DegenerateBoundary { a, b } => {
                write!(f, "boundary condition {}*y + {}*y' is empty", a, b)
            }
            OdeError::NotConverged {
                iterations,
                last_guess,
                residual,
            } => write!(
                f,
                "shooting did not converge after {} iterations (last slope {}, residual {})",
                iterations, last_guess, residual
            ),
            OdeError::NonFiniteState { x } => write!(f, "solution is not finite at x = {}", x),
            OdeError::SingularSystem { row } => {
                write!(f, "tridiagonal system is singular at row {}", row)
            }
            OdeError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for OdeError {}
