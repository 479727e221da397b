//! # Shooting method for two-point boundary value problems
//!
//! The BVP `y'' = g(x, y, y')`, `al*y + bl*y' = yl` at `xl`,
//! `ar*y + br*y' = yr` at `xr` is turned into a sequence of Cauchy problems:
//! 1. the left state is parametrised by one unknown `s` (the slope for a value
//!    condition, the value otherwise), see
//!    [`BoundaryCondition::state_from_parameter`];
//! 2. the Cauchy problem is integrated from `xl` to `xr`;
//! 3. `s` is corrected by the secant method until the right residual
//!    `ar*y(xr) + br*y'(xr) - yr` drops below the tolerance.
//!
//! Every residual evaluation is a full integration on the mesh, so the work is
//! O(iterations * N). The number of secant iterations is capped; running out
//! of iterations is reported, never silently accepted.
//!
//! ## Usage Example
//! ```rust, ignore
//! use RustedODE::numerical::BVP::BVP_problem::{BoundaryCondition, BoundaryValueProblem};
//! use RustedODE::numerical::BVP::Shooting::{ShootingConfig, ShootingMethodSolver};
//! use RustedODE::numerical::Cauchy::Cauchy_api::OdeSystem;
//! // y'' = y, y(0) = 0, y(1) = sinh(1)
//! let problem = BoundaryValueProblem::new(
//!     OdeSystem::second_order(|_x, y, _z| y),
//!     0.0,
//!     1.0,
//!     BoundaryCondition::dirichlet(0.0),
//!     BoundaryCondition::dirichlet(1.0_f64.sinh()),
//! );
//! let mut solver = ShootingMethodSolver::new(ShootingConfig { step: 0.01, ..Default::default() });
//! let result = solver.solve(&problem).unwrap();
//! println!("y'(0) = {}", result.s);
//! ```
use crate::numerical::BVP::BVP_problem::BoundaryValueProblem;
use crate::numerical::Cauchy::Cauchy_api::{CauchyMethod, CauchyProblem, CauchySolution};
use crate::numerical::ODE_errors::OdeError;
use log::{debug, error, info, warn};
use nalgebra::DVector;

/// Configuration for the shooting method solver.
#[derive(Debug, Clone)]
pub struct ShootingConfig {
    pub step: f64,
    /// |residual| below which the secant iteration stops
    pub tolerance: f64,
    pub max_iterations: usize,
    /// two starting values of the free parameter for the secant method
    pub initial_guesses: (f64, f64),
    /// Cauchy solver used for every trajectory
    pub integrator: CauchyMethod,
    /// if false, running out of iterations returns the last trajectory with
    /// `converged = false` instead of an error
    pub fail_on_divergence: bool,
}

impl Default for ShootingConfig {
    fn default() -> Self {
        ShootingConfig {
            step: 0.1,
            tolerance: 1e-3,
            max_iterations: 50,
            initial_guesses: (0.0, 1.0),
            integrator: CauchyMethod::RungeKutta4,
            fail_on_divergence: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ShootingResult {
    /// trajectory for the final parameter, including z = y'
    pub solution: CauchySolution,
    /// final value of the free parameter
    pub s: f64,
    /// number of secant corrections made
    pub iterations: usize,
    /// right boundary residual of the final trajectory
    pub residual: f64,
    pub converged: bool,
}

impl ShootingResult {
    pub fn x(&self) -> &DVector<f64> {
        &self.solution.x_mesh
    }

    pub fn y(&self) -> &DVector<f64> {
        &self.solution.y
    }
}

/// Outcome of the secant iteration
#[derive(Debug, Clone, Copy)]
struct SecantOutcome {
    root: f64,
    residual: f64,
    iterations: usize,
    converged: bool,
}

/// Secant method for the root of `f`, starting from `x0`, `x1`.
///
/// Stops when `|f| < tolerance`, after `max_iterations` corrections, or when
/// the secant becomes horizontal or non-finite. A non-finite `f` ends the
/// iteration unconverged, reporting the previous iterate if its value is
/// finite. Errors of `f` itself are passed through.
fn secant_method<F>(
    mut f: F,
    x0: f64,
    x1: f64,
    tolerance: f64,
    max_iterations: usize,
) -> Result<SecantOutcome, OdeError>
where
    F: FnMut(f64) -> Result<f64, OdeError>,
{
    debug!(
        "Starting secant method with guesses {}, {}, tolerance={}, max_iterations={}",
        x0, x1, tolerance, max_iterations
    );
    let mut x_prev = x0;
    let mut f_prev = f(x_prev)?;
    if f_prev.abs() < tolerance {
        return Ok(SecantOutcome {
            root: x_prev,
            residual: f_prev,
            iterations: 0,
            converged: true,
        });
    }
    let mut x_curr = x1;
    let mut f_curr = f(x_curr)?;
    debug!(
        "Initial values: x_prev={}, x_curr={}, f_prev={}, f_curr={}",
        x_prev, x_curr, f_prev, f_curr
    );

    let mut iterations = 0;
    while !(f_curr.abs() < tolerance) && iterations < max_iterations {
        let slope_denominator = f_curr - f_prev;
        if slope_denominator == 0.0 || !slope_denominator.is_finite() {
            warn!(
                "secant is horizontal at x={} (f={}), stopping",
                x_curr, f_curr
            );
            break;
        }
        let x_next = x_curr - f_curr * (x_curr - x_prev) / slope_denominator;
        x_prev = x_curr;
        f_prev = f_curr;
        x_curr = x_next;
        f_curr = f(x_curr)?;
        iterations += 1;
        debug!("Iteration {}: x={}, f(x)={}", iterations, x_curr, f_curr);
    }

    let converged = f_curr.abs() < tolerance;
    if !f_curr.is_finite() && f_prev.is_finite() {
        warn!(
            "f({}) is not finite, keeping the previous iterate {} (f={})",
            x_curr, x_prev, f_prev
        );
        (x_curr, f_curr) = (x_prev, f_prev);
    }
    if converged {
        info!(
            "Secant method converged after {} iterations with x={}, f(x)={}",
            iterations, x_curr, f_curr
        );
    } else {
        error!(
            "Secant method did not converge after {} iterations, f(x)={}",
            iterations, f_curr
        );
    }
    Ok(SecantOutcome {
        root: x_curr,
        residual: f_curr,
        iterations,
        converged,
    })
}

pub struct ShootingMethodSolver {
    pub config: ShootingConfig,
    result: Option<ShootingResult>,
}

impl ShootingMethodSolver {
    pub fn new(config: ShootingConfig) -> Self {
        ShootingMethodSolver {
            config,
            result: None,
        }
    }

    fn cauchy_problem(&self, problem: &BoundaryValueProblem, s: f64) -> CauchyProblem {
        CauchyProblem {
            x0: problem.xl,
            x_end: problem.xr,
            y0: problem.left.state_from_parameter(s),
            h: self.config.step,
        }
    }

    /// Solves the BVP using the shooting method.
    pub fn solve(&mut self, problem: &BoundaryValueProblem) -> Result<ShootingResult, OdeError> {
        problem.validate()?;
        let config = &self.config;
        if !(config.tolerance > 0.0) {
            return Err(OdeError::InvalidConfig(format!(
                "shooting tolerance must be positive, got {}",
                config.tolerance
            )));
        }
        let (s0, s1) = config.initial_guesses;
        if s0 == s1 {
            return Err(OdeError::InvalidConfig(
                "shooting needs two different initial guesses".to_string(),
            ));
        }
        info!(
            "Starting shooting method on [{}, {}] with {} and h = {}",
            problem.xl, problem.xr, config.integrator, config.step
        );
        debug!(
            "Boundary conditions: left={:?}, right={:?}",
            problem.left, problem.right
        );

        // first blow-up of a trajectory, kept in case no guess gives a finite one
        let mut blow_up: Option<OdeError> = None;
        let residual = |s: f64| -> Result<f64, OdeError> {
            let trajectory = match config
                .integrator
                .integrate(&problem.system, &self.cauchy_problem(problem, s))
            {
                Ok(trajectory) => trajectory,
                Err(e @ OdeError::NonFiniteState { .. }) => {
                    warn!("trajectory for s={} is not finite: {}", s, e);
                    blow_up.get_or_insert(e);
                    return Ok(f64::NAN);
                }
                Err(e) => return Err(e),
            };
            let end = trajectory.last_state();
            let r = problem.right.residual(&end);
            debug!(
                "Residual evaluation: s={}, y(b)={}, y'(b)={}, residual={}",
                s, end[0], end[1], r
            );
            Ok(r)
        };
        let outcome = secant_method(residual, s0, s1, config.tolerance, config.max_iterations)?;

        if !outcome.residual.is_finite() {
            // every trajectory tried blew up
            return Err(blow_up.unwrap_or(OdeError::NotConverged {
                iterations: outcome.iterations,
                last_guess: outcome.root,
                residual: outcome.residual,
            }));
        }
        if !outcome.converged {
            if config.fail_on_divergence {
                return Err(OdeError::NotConverged {
                    iterations: outcome.iterations,
                    last_guess: outcome.root,
                    residual: outcome.residual,
                });
            }
            warn!(
                "returning the unconverged trajectory for s={} (residual {})",
                outcome.root, outcome.residual
            );
        }

        info!("starting final solution for s = {}", outcome.root);
        let solution = config
            .integrator
            .integrate(&problem.system, &self.cauchy_problem(problem, outcome.root))?;
        let end = solution.last_state();
        info!(
            "Final solution: y({})={}, y'({})={}",
            problem.xr, end[0], problem.xr, end[1]
        );
        let result = ShootingResult {
            solution,
            s: outcome.root,
            iterations: outcome.iterations,
            residual: outcome.residual,
            converged: outcome.converged,
        };
        self.result = Some(result.clone());
        Ok(result)
    }

    pub fn get_solution(&self) -> Option<&ShootingResult> {
        self.result.as_ref()
    }
}

/// One-call shooting: `(x, y)` of the converged trajectory.
pub fn shooting(
    problem: &BoundaryValueProblem,
    config: ShootingConfig,
) -> Result<(DVector<f64>, DVector<f64>), OdeError> {
    let result = ShootingMethodSolver::new(config).solve(problem)?;
    Ok((result.solution.x_mesh, result.solution.y))
}
