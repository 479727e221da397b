//! Classical fourth-order Runge-Kutta method.
use crate::numerical::Cauchy::Cauchy_api::{
    CauchyProblem, CauchySolution, OdeSystem, SolutionBuilder, State,
};
use crate::numerical::ODE_errors::OdeError;
use log::debug;

/// One RK4 step from `(x, y)` to `x_next = x + h`.
///
/// Both components of every stage state are advanced before the next
/// evaluation: y and z are coupled through the system.
pub(crate) fn rk4_step(system: &OdeSystem, x: f64, x_next: f64, y: &State) -> State {
    let h = x_next - x;
    let x_half = x + h / 2.0;
    let k1 = system.eval(x, y);
    let k2 = system.eval(x_half, &(y + (h / 2.0) * k1));
    let k3 = system.eval(x_half, &(y + (h / 2.0) * k2));
    let k4 = system.eval(x_next, &(y + h * k3));
    y + (h / 6.0) * (k1 + 2.0 * k2 + 2.0 * k3 + k4)
}

pub fn runge_kutta4(
    system: &OdeSystem,
    problem: &CauchyProblem,
) -> Result<CauchySolution, OdeError> {
    let mut solution = SolutionBuilder::new(problem)?;
    debug!("RK4: {} steps of h = {}", solution.n_steps(), problem.h);
    let mut y = problem.y0;
    for i in 0..solution.n_steps() {
        y = rk4_step(system, solution.x(i), solution.x(i + 1), &y);
        solution.push(y)?;
    }
    Ok(solution.finish())
}
