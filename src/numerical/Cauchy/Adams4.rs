//! Four-step explicit Adams-Bashforth method.
//!
//! The first three steps are made with RK4, after that
//! ```text
//! y_{i+1} = y_i + h/24 * (55 f_i - 59 f_{i-1} + 37 f_{i-2} - 9 f_{i-3})
//! ```
//! The right-hand side is only sampled at nodes that are already computed,
//! so it is never evaluated at the right end of the mesh.
use crate::numerical::Cauchy::Cauchy_api::{
    CauchyProblem, CauchySolution, OdeSystem, SolutionBuilder, State,
};
use crate::numerical::Cauchy::RK4::rk4_step;
use crate::numerical::ODE_errors::OdeError;
use log::debug;

/// number of back values the formula uses
const STEPS: usize = 4;

pub fn adams4(system: &OdeSystem, problem: &CauchyProblem) -> Result<CauchySolution, OdeError> {
    let mut solution = SolutionBuilder::new(problem)?;
    let n = solution.n_steps();
    let h = problem.h;
    debug!("Adams-Bashforth 4: {} steps of h = {}", n, h);

    let mut y = problem.y0;
    // bootstrap y_1..y_3
    for i in 0..(STEPS - 1).min(n) {
        y = rk4_step(system, solution.x(i), solution.x(i + 1), &y);
        solution.push(y)?;
    }
    if n < STEPS {
        return Ok(solution.finish());
    }

    // f_{i-3}, f_{i-2}, f_{i-1}, f_i
    let mut f_history: Vec<State> = (0..STEPS)
        .map(|i| system.eval(solution.x(i), &solution.state(i)))
        .collect();
    for i in (STEPS - 1)..n {
        let (f_n3, f_n2, f_n1, f_n) = (f_history[0], f_history[1], f_history[2], f_history[3]);
        y += (h / 24.0) * (55.0 * f_n - 59.0 * f_n1 + 37.0 * f_n2 - 9.0 * f_n3);
        solution.push(y)?;
        if i + 1 < n {
            f_history.remove(0);
            f_history.push(system.eval(solution.x(i + 1), &y));
        }
    }
    Ok(solution.finish())
}
