/// error type shared by all solvers
pub mod ODE_errors;
/// uniform meshes
pub mod mesh;
/// absolute error and Runge-Romberg-Richardson estimate
pub mod error_estimates;
/// Cauchy problem solvers
///```rust, ignore
/// use RustedODE::numerical::Cauchy::Cauchy_api::{CauchyMethod, CauchyProblem, OdeSystem};
/// let system = OdeSystem::second_order(|x, y, z| ((x + 1.0) / x) * z - y / x);
/// let e = std::f64::consts::E;
/// let problem = CauchyProblem::new(1.0, 2.0, 2.0 + e, 1.0 + e, 0.1);
/// for method in [CauchyMethod::Euler, CauchyMethod::RungeKutta4, CauchyMethod::Adams4] {
///     let solution = method.integrate(&system, &problem).unwrap();
///     println!("{}: y(2) = {}", method, solution.y[solution.len() - 1]);
/// }
///```
pub mod Cauchy;
/// boundary value problem solvers
/// ```rust, ignore
/// use RustedODE::numerical::BVP::BVP_problem::{BoundaryCondition, BoundaryValueProblem};
/// use RustedODE::numerical::BVP::Finite_difference::finite_difference;
/// use RustedODE::numerical::Cauchy::Cauchy_api::OdeSystem;
/// let problem = BoundaryValueProblem::new(
///     OdeSystem::second_order(|x, y, z| (y - (x - 3.0) * z) / (x * x - 1.0)),
///     0.0,
///     1.0,
///     BoundaryCondition::new(0.0, 1.0, 0.0),
///     BoundaryCondition::new(1.0, 1.0, -0.75),
/// );
/// let solution = finite_difference(&problem, 0.05).unwrap();
/// println!("y = {:?}", solution.y);
/// ```
pub mod BVP;
