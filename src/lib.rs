#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
//! Numerical solvers for second-order ODEs:
//! * Cauchy (initial value) problems: explicit Euler, Runge-Kutta 4,
//!   Adams-Bashforth 4, with absolute and Runge-Romberg-Richardson error
//!   estimates;
//! * two-point boundary value problems: shooting (secant method) and
//!   finite differences with a tridiagonal (Thomas) solve.
pub mod Examples;
pub mod Utils;
pub mod numerical;
pub mod somelinalg;
