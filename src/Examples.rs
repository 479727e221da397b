//! demo runs of the solvers on the lab problems
/// demo problems, closed-form solutions and run options
pub mod lab_scenarios;
/// plots, reports and samples of a run
pub mod lab_output;
/// Euler, Runge-Kutta 4 and Adams 4 on a Cauchy problem
pub mod cauchy_demo;
/// shooting and finite differences on a boundary value problem
pub mod boundary_demo;
