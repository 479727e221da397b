//! Two-point boundary value problem for `y'' = g(x, y, y')`.
//!
//! Each end carries a linear condition `a*y + b*y' = c`:
//! * `b = 0` - value (Dirichlet) condition `y = c/a`;
//! * `a = 0` - derivative (Neumann) condition `y' = c/b`;
//! * otherwise a mixed (Robin) condition.
use crate::numerical::Cauchy::Cauchy_api::{OdeSystem, State};
use crate::numerical::ODE_errors::OdeError;
use nalgebra::Vector2;

/// Boundary condition types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryConditionType {
    /// y = value
    Dirichlet,
    /// y' = value
    Neumann,
    /// a*y + b*y' = value
    Robin,
}

/// a*y + b*y' = c
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryCondition {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl BoundaryCondition {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        BoundaryCondition { a, b, c }
    }

    pub fn dirichlet(value: f64) -> Self {
        BoundaryCondition::new(1.0, 0.0, value)
    }

    pub fn neumann(value: f64) -> Self {
        BoundaryCondition::new(0.0, 1.0, value)
    }

    pub fn bc_type(&self) -> BoundaryConditionType {
        if self.b == 0.0 {
            BoundaryConditionType::Dirichlet
        } else if self.a == 0.0 {
            BoundaryConditionType::Neumann
        } else {
            BoundaryConditionType::Robin
        }
    }

    pub fn validate(&self) -> Result<(), OdeError> {
        let finite = self.a.is_finite() && self.b.is_finite() && self.c.is_finite();
        if !finite || (self.a == 0.0 && self.b == 0.0) {
            return Err(OdeError::DegenerateBoundary {
                a: self.a,
                b: self.b,
            });
        }
        Ok(())
    }

    /// a*y + b*z - c
    pub fn residual(&self, state: &State) -> f64 {
        self.a * state[0] + self.b * state[1] - self.c
    }

    /// Left state consistent with this condition, parametrised by `s`.
    ///
    /// The free parameter is the slope for a value condition and the value
    /// otherwise; in the mixed case the slope follows from `y = s`.
    pub fn state_from_parameter(&self, s: f64) -> State {
        match self.bc_type() {
            BoundaryConditionType::Dirichlet => Vector2::new(self.c / self.a, s),
            BoundaryConditionType::Neumann => Vector2::new(s, self.c / self.b),
            BoundaryConditionType::Robin => Vector2::new(s, (self.c - self.a * s) / self.b),
        }
    }
}

/// Represents the BVP `y'' = g(x, y, y')` on `[xl, xr]`, given as the first
/// order system `y' = z, z' = g(x, y, z)`.
pub struct BoundaryValueProblem {
    pub system: OdeSystem,
    pub xl: f64,
    pub xr: f64,
    pub left: BoundaryCondition,
    pub right: BoundaryCondition,
}

impl BoundaryValueProblem {
    pub fn new(
        system: OdeSystem,
        xl: f64,
        xr: f64,
        left: BoundaryCondition,
        right: BoundaryCondition,
    ) -> Self {
        BoundaryValueProblem {
            system,
            xl,
            xr,
            left,
            right,
        }
    }

    pub fn validate(&self) -> Result<(), OdeError> {
        self.left.validate()?;
        self.right.validate()
    }
}
