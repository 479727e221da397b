//! Explicit Euler method: first order, one right-hand side evaluation per step.
use crate::numerical::Cauchy::Cauchy_api::{CauchyProblem, CauchySolution, OdeSystem, SolutionBuilder};
use crate::numerical::ODE_errors::OdeError;
use log::debug;

/// y_{i+1} = y_i + h*f(x_i, y_i), applied to both components of the state.
pub fn euler(system: &OdeSystem, problem: &CauchyProblem) -> Result<CauchySolution, OdeError> {
    let mut solution = SolutionBuilder::new(problem)?;
    let h = problem.h;
    debug!("Euler: {} steps of h = {}", solution.n_steps(), h);
    let mut y = problem.y0;
    for i in 0..solution.n_steps() {
        let f = system.eval(solution.x(i), &y);
        y += h * f;
        solution.push(y)?;
    }
    Ok(solution.finish())
}
