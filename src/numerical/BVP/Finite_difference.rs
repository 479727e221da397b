//! # Finite-difference method for linear two-point boundary value problems
//!
//! For `y'' = p(x)*y' + q(x)*y + r(x)` on a uniform mesh with step `h` the
//! centered differences give, at every interior node,
//! ```text
//! (1 + h*p_i/2)*y_{i-1} - (2 + h^2*q_i)*y_i + (1 - h*p_i/2)*y_{i+1} = h^2*r_i
//! ```
//! The boundary conditions `a*y + b*y' = c` use the second-order one-sided
//! difference `y'(x_0) ~ (-3*y_0 + 4*y_1 - y_2)/(2h)` (mirrored at `x_N`).
//! The `y_2` (`y_{N-2}`) term of such a row is removed with the neighbouring
//! interior equation, so the whole system stays tridiagonal and is solved by
//! the Thomas algorithm.
//!
//! The ODE is given as the usual [`OdeSystem`]; p, q and r are recovered by
//! evaluating `g` at `(y, z) = (0, 0), (1, 0), (0, 1)`, and one more sample
//! checks that `g` really is affine.
use crate::numerical::BVP::BVP_problem::{BoundaryCondition, BoundaryValueProblem};
use crate::numerical::Cauchy::Cauchy_api::OdeSystem;
use crate::numerical::ODE_errors::OdeError;
use crate::numerical::mesh::uniform_mesh;
use crate::somelinalg::Thomas::Tridiagonal;
use log::{debug, info};
use nalgebra::DVector;

/// point used to check the affine form of g
const CHECK_PROBE: (f64, f64) = (1.7, -0.6);
const AFFINE_TOLERANCE: f64 = 1e-8;

/// g(x, y, z) = p*z + q*y + r at one node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearCoefficients {
    pub p: f64,
    pub q: f64,
    pub r: f64,
}

#[derive(Debug, Clone)]
pub struct FiniteDifferenceSolution {
    pub x_mesh: DVector<f64>,
    pub y: DVector<f64>,
}

/// Extracts p, q, r of `z' = g(x, y, z)` at `x`, failing if `g` is not affine
/// or if the first equation is not `y' = z`.
pub fn linear_coefficients(system: &OdeSystem, x: f64) -> Result<LinearCoefficients, OdeError> {
    for (y, z) in [(0.3, 0.7), CHECK_PROBE] {
        let dy = (system.dy_dx)(x, y, z);
        if !((dy - z).abs() <= AFFINE_TOLERANCE * (1.0 + z.abs())) {
            return Err(OdeError::InvalidConfig(format!(
                "finite differences need y' = z, got y' = {} for z = {} at x = {}",
                dy, z, x
            )));
        }
    }
    let g = &system.dz_dx;
    let r = g(x, 0.0, 0.0);
    let q = g(x, 1.0, 0.0) - r;
    let p = g(x, 0.0, 1.0) - r;
    let (y, z) = CHECK_PROBE;
    let probed = g(x, y, z);
    let predicted = p * z + q * y + r;
    let scale = 1.0 + probed.abs().max(predicted.abs());
    if !((probed - predicted).abs() <= AFFINE_TOLERANCE * scale) {
        debug!(
            "g({}, {}, {}) = {} but the affine form gives {}",
            x, y, z, probed, predicted
        );
        return Err(OdeError::NonAffineSystem { x });
    }
    Ok(LinearCoefficients { p, q, r })
}

/// Assembles the tridiagonal system for the mesh `x`.
pub fn assemble_system(
    problem: &BoundaryValueProblem,
    x: &DVector<f64>,
    h: f64,
) -> Result<(Tridiagonal, DVector<f64>), OdeError> {
    let n = x.len() - 1;
    let mut matrix = Tridiagonal::zeros(n + 1);
    let mut rhs = DVector::zeros(n + 1);
    for i in 1..n {
        let LinearCoefficients { p, q, r } = linear_coefficients(&problem.system, x[i])?;
        matrix.set_row(i, 1.0 + h * p / 2.0, -2.0 - h * h * q, 1.0 - h * p / 2.0);
        rhs[i] = h * h * r;
    }
    left_row(&mut matrix, &mut rhs, &problem.left, h)?;
    right_row(&mut matrix, &mut rhs, &problem.right, h)?;
    Ok((matrix, rhs))
}

/// a*y_0 + b*(-3*y_0 + 4*y_1 - y_2)/(2h) = c, with y_2 eliminated by row 1
fn left_row(
    matrix: &mut Tridiagonal,
    rhs: &mut DVector<f64>,
    bc: &BoundaryCondition,
    h: f64,
) -> Result<(), OdeError> {
    let c0 = bc.a - 3.0 * bc.b / (2.0 * h);
    let c1 = 2.0 * bc.b / h;
    let c2 = -bc.b / (2.0 * h);
    let k = if c2 == 0.0 {
        0.0
    } else {
        if matrix.upper[1] == 0.0 {
            return Err(OdeError::SingularSystem { row: 1 });
        }
        c2 / matrix.upper[1]
    };
    let (d0, u0) = (c0 - k * matrix.lower[1], c1 - k * matrix.diag[1]);
    matrix.set_row(0, 0.0, d0, u0);
    rhs[0] = bc.c - k * rhs[1];
    Ok(())
}

/// a*y_N + b*(3*y_N - 4*y_{N-1} + y_{N-2})/(2h) = c, with y_{N-2} eliminated
/// by row N-1
fn right_row(
    matrix: &mut Tridiagonal,
    rhs: &mut DVector<f64>,
    bc: &BoundaryCondition,
    h: f64,
) -> Result<(), OdeError> {
    let n = matrix.size() - 1;
    let c_n = bc.a + 3.0 * bc.b / (2.0 * h);
    let c_n1 = -2.0 * bc.b / h;
    let c_n2 = bc.b / (2.0 * h);
    let k = if c_n2 == 0.0 {
        0.0
    } else {
        if matrix.lower[n - 1] == 0.0 {
            return Err(OdeError::SingularSystem { row: n - 1 });
        }
        c_n2 / matrix.lower[n - 1]
    };
    let (l_n, d_n) = (c_n1 - k * matrix.diag[n - 1], c_n - k * matrix.upper[n - 1]);
    matrix.set_row(n, l_n, d_n, 0.0);
    rhs[n] = bc.c - k * rhs[n - 1];
    Ok(())
}

/// Solves a linear BVP by finite differences with step `h`.
pub fn finite_difference(
    problem: &BoundaryValueProblem,
    h: f64,
) -> Result<FiniteDifferenceSolution, OdeError> {
    problem.validate()?;
    let x_mesh = uniform_mesh(problem.xl, problem.xr, h)?;
    if x_mesh.len() < 3 {
        // at least one interior node is needed
        return Err(OdeError::InvalidStep {
            h,
            xl: problem.xl,
            xr: problem.xr,
        });
    }
    info!(
        "finite differences on [{}, {}] with {} nodes",
        problem.xl,
        problem.xr,
        x_mesh.len()
    );
    let (matrix, rhs) = assemble_system(problem, &x_mesh, h)?;
    let y = matrix.solve(&rhs)?;
    if let Some(i) = y.iter().position(|v| !v.is_finite()) {
        return Err(OdeError::NonFiniteState { x: x_mesh[i] });
    }
    debug!("y({}) = {}, y({}) = {}", x_mesh[0], y[0], problem.xr, y[y.len() - 1]);
    Ok(FiniteDifferenceSolution { x_mesh, y })
}
