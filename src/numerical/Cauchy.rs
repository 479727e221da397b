//! Solvers of the Cauchy problem for a second-order ODE reduced to a system
//! of two first-order equations.
/// system, problem and solution types; run-time choice of the method
pub mod Cauchy_api;
/// explicit Euler, order 1
pub mod Euler;
/// classical Runge-Kutta, order 4
pub mod RK4;
/// Adams-Bashforth, 4 steps, RK4 start
pub mod Adams4;
