//! Common types of the Cauchy (initial value) solvers.
//!
//! A second-order scalar ODE `y'' = g(x, y, y')` is solved as the first-order
//! system
//! ```text
//! y' = dy_dx(x, y, z)
//! z' = dz_dx(x, y, z)
//! ```
//! The convention is fixed: the first function is always the derivative of
//! `y`, the second one the derivative of `z`, and the state vector stores `y`
//! at index 0 and `z` at index 1.
//!
//! ```rust, ignore
//! use RustedODE::numerical::Cauchy::Cauchy_api::{CauchyMethod, CauchyProblem, OdeSystem};
//! // y'' = -y, y(0) = 0, y'(0) = 1  =>  y = sin(x)
//! let system = OdeSystem::second_order(|_x, y, _z| -y);
//! let problem = CauchyProblem::new(0.0, 1.0, 0.0, 1.0, 0.1);
//! let solution = CauchyMethod::RungeKutta4.integrate(&system, &problem).unwrap();
//! println!("y(1) = {}", solution.y[solution.len() - 1]);
//! ```
use crate::numerical::Cauchy::Adams4::adams4;
use crate::numerical::Cauchy::Euler::euler;
use crate::numerical::Cauchy::RK4::runge_kutta4;
use crate::numerical::ODE_errors::OdeError;
use crate::numerical::mesh::uniform_mesh;
use nalgebra::{DVector, Vector2};
use strum_macros::{Display, EnumIter, EnumString};

/// right-hand side f(x, y, z)
pub type RhsFn = Box<dyn Fn(f64, f64, f64) -> f64 + Send + Sync>;

/// state (y, z) at some x
pub type State = Vector2<f64>;

pub struct OdeSystem {
    /// y' = dy_dx(x, y, z)
    pub dy_dx: RhsFn,
    /// z' = dz_dx(x, y, z)
    pub dz_dx: RhsFn,
}

impl OdeSystem {
    pub fn new<F, G>(dy_dx: F, dz_dx: G) -> Self
    where
        F: Fn(f64, f64, f64) -> f64 + Send + Sync + 'static,
        G: Fn(f64, f64, f64) -> f64 + Send + Sync + 'static,
    {
        OdeSystem {
            dy_dx: Box::new(dy_dx),
            dz_dx: Box::new(dz_dx),
        }
    }

    /// Reduction of `y'' = g(x, y, y')` with `z = y'`.
    pub fn second_order<G>(g: G) -> Self
    where
        G: Fn(f64, f64, f64) -> f64 + Send + Sync + 'static,
    {
        OdeSystem::new(|_x, _y, z| z, g)
    }

    /// Derivative of the state vector.
    pub fn eval(&self, x: f64, state: &State) -> State {
        Vector2::new(
            (self.dy_dx)(x, state[0], state[1]),
            (self.dz_dx)(x, state[0], state[1]),
        )
    }
}

/// Initial value problem on `[x0, x_end]` with a constant step `h`.
#[derive(Debug, Clone, Copy)]
pub struct CauchyProblem {
    pub x0: f64,
    pub x_end: f64,
    pub y0: State,
    pub h: f64,
}

impl CauchyProblem {
    pub fn new(x0: f64, x_end: f64, y0: f64, z0: f64, h: f64) -> Self {
        CauchyProblem {
            x0,
            x_end,
            y0: Vector2::new(y0, z0),
            h,
        }
    }

    /// Same problem with another step, used for the h / h/2 pair.
    pub fn with_step(&self, h: f64) -> Self {
        CauchyProblem { h, ..*self }
    }
}

#[derive(Debug, Clone)]
pub struct CauchySolution {
    pub x_mesh: DVector<f64>,
    pub y: DVector<f64>,
    pub z: DVector<f64>,
}

impl CauchySolution {
    pub fn len(&self) -> usize {
        self.x_mesh.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x_mesh.is_empty()
    }

    pub fn state(&self, i: usize) -> State {
        Vector2::new(self.y[i], self.z[i])
    }

    /// State at the right end of the mesh.
    pub fn last_state(&self) -> State {
        self.state(self.len() - 1)
    }
}

/// Storage filled step by step by the integrators.
///
/// Every pushed state is checked for NaN/inf so a blown-up integration stops
/// at the first bad node instead of filling the rest of the mesh with garbage.
pub(crate) struct SolutionBuilder {
    x_mesh: DVector<f64>,
    y: DVector<f64>,
    z: DVector<f64>,
    filled: usize,
}

impl SolutionBuilder {
    pub(crate) fn new(problem: &CauchyProblem) -> Result<Self, OdeError> {
        let x_mesh = uniform_mesh(problem.x0, problem.x_end, problem.h)?;
        let n = x_mesh.len();
        let mut builder = SolutionBuilder {
            x_mesh,
            y: DVector::zeros(n),
            z: DVector::zeros(n),
            filled: 0,
        };
        builder.push(problem.y0)?;
        Ok(builder)
    }

    /// number of steps N (the mesh has N + 1 nodes)
    pub(crate) fn n_steps(&self) -> usize {
        self.x_mesh.len() - 1
    }

    pub(crate) fn x(&self, i: usize) -> f64 {
        self.x_mesh[i]
    }

    pub(crate) fn state(&self, i: usize) -> State {
        Vector2::new(self.y[i], self.z[i])
    }

    pub(crate) fn push(&mut self, state: State) -> Result<(), OdeError> {
        let i = self.filled;
        if !(state[0].is_finite() && state[1].is_finite()) {
            return Err(OdeError::NonFiniteState { x: self.x_mesh[i] });
        }
        self.y[i] = state[0];
        self.z[i] = state[1];
        self.filled += 1;
        Ok(())
    }

    pub(crate) fn finish(self) -> CauchySolution {
        debug_assert_eq!(self.filled, self.x_mesh.len());
        CauchySolution {
            x_mesh: self.x_mesh,
            y: self.y,
            z: self.z,
        }
    }
}

/// Named Cauchy solvers, usable wherever a method has to be picked at run time
/// (task files, the shooting method).
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum CauchyMethod {
    #[strum(to_string = "euler")]
    Euler,
    #[strum(to_string = "rk4", serialize = "runge_kutta4")]
    RungeKutta4,
    #[strum(to_string = "adams4", serialize = "adams")]
    Adams4,
}

impl CauchyMethod {
    /// Global convergence order, used by the RRR error estimate.
    pub fn order(&self) -> u32 {
        match self {
            CauchyMethod::Euler => 1,
            CauchyMethod::RungeKutta4 => 4,
            CauchyMethod::Adams4 => 4,
        }
    }

    pub fn integrate(
        &self,
        system: &OdeSystem,
        problem: &CauchyProblem,
    ) -> Result<CauchySolution, OdeError> {
        match self {
            CauchyMethod::Euler => euler(system, problem),
            CauchyMethod::RungeKutta4 => runge_kutta4(system, problem),
            CauchyMethod::Adams4 => adams4(system, problem),
        }
    }
}
