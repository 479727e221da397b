//! Two-point boundary value problems for `y'' = g(x, y, y')` with linear
//! boundary conditions `a*y + b*y' = c` at both ends.
/// problem and boundary condition types
pub mod BVP_problem;
/// shooting: secant iteration over Cauchy problems
pub mod Shooting;
/// centered finite differences, linear ODEs only
pub mod Finite_difference;

mod BVP_tests;
