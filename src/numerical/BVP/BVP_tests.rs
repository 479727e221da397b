#[cfg(test)]
mod tests {
    use crate::numerical::BVP::BVP_problem::{BoundaryCondition, BoundaryValueProblem};
    use crate::numerical::BVP::Finite_difference::{finite_difference, linear_coefficients};
    use crate::numerical::BVP::Shooting::{ShootingConfig, ShootingMethodSolver, shooting};
    use crate::numerical::Cauchy::Cauchy_api::{CauchyMethod, OdeSystem};
    use crate::numerical::ODE_errors::OdeError;
    use crate::numerical::error_estimates::{absolute_error, max_norm};
    use approx::assert_abs_diff_eq;
    use nalgebra::DVector;
    use simplelog::*;

    // y'' = (y - (x-3)*y')/(x^2 - 1), y'(0) = 0, y(1) + y'(1) = -0.75
    // exact solution y = x - 3 + 1/(x+1)
    fn lab_problem() -> BoundaryValueProblem {
        BoundaryValueProblem::new(
            OdeSystem::second_order(|x, y, z| (y - (x - 3.0) * z) / (x * x - 1.0)),
            0.0,
            1.0,
            BoundaryCondition::new(0.0, 1.0, 0.0),
            BoundaryCondition::new(1.0, 1.0, -0.75),
        )
    }

    fn lab_exact(x: f64) -> f64 {
        x - 3.0 + 1.0 / (x + 1.0)
    }

    // y'' = y, y(0) = 0, y(1) = sinh(1)
    fn sinh_problem() -> BoundaryValueProblem {
        BoundaryValueProblem::new(
            OdeSystem::second_order(|_x, y, _z| y),
            0.0,
            1.0,
            BoundaryCondition::dirichlet(0.0),
            BoundaryCondition::dirichlet(1.0_f64.sinh()),
        )
    }

    // y'' = y, y(0) + y'(0) = 2, 2y(1) - y'(1) = e; exact y = e^x
    fn robin_problem() -> BoundaryValueProblem {
        BoundaryValueProblem::new(
            OdeSystem::second_order(|_x, y, _z| y),
            0.0,
            1.0,
            BoundaryCondition::new(1.0, 1.0, 2.0),
            BoundaryCondition::new(2.0, -1.0, std::f64::consts::E),
        )
    }

    fn max_error(x: &DVector<f64>, y: &DVector<f64>, exact: impl Fn(f64) -> f64) -> f64 {
        let exact: Vec<f64> = x.iter().map(|x| exact(*x)).collect();
        max_norm(&absolute_error(y.as_slice(), &exact).unwrap())
    }

    fn adams_config(step: f64) -> ShootingConfig {
        ShootingConfig {
            step,
            integrator: CauchyMethod::Adams4,
            ..Default::default()
        }
    }

    #[test]
    fn lab_problem_by_shooting() {
        let _ = SimpleLogger::init(LevelFilter::Info, Config::default());
        let problem = lab_problem();
        let mut solver = ShootingMethodSolver::new(adams_config(0.1));
        let result = solver.solve(&problem).unwrap();
        assert!(result.converged);
        assert!(result.residual.abs() < 1e-3);
        assert_eq!(result.x().len(), 11);
        // y'(0) is fixed, the free parameter is y(0) = -2
        assert_abs_diff_eq!(result.s, -2.0, epsilon = 1e-2);
        let coarse = max_error(result.x(), result.y(), lab_exact);
        assert!(coarse < 1e-2, "shooting error {}", coarse);
        assert!(solver.get_solution().is_some());

        let (x, y) = shooting(&problem, adams_config(0.05)).unwrap();
        let fine = max_error(&x, &y, lab_exact);
        assert!(fine < coarse);
    }

    #[test]
    fn lab_problem_by_finite_differences() {
        let problem = lab_problem();
        let coarse = finite_difference(&problem, 0.1).unwrap();
        let fine = finite_difference(&problem, 0.05).unwrap();
        assert_eq!(coarse.x_mesh.len(), 11);
        assert_eq!(fine.x_mesh.len(), 21);
        let e_coarse = max_error(&coarse.x_mesh, &coarse.y, lab_exact);
        let e_fine = max_error(&fine.x_mesh, &fine.y, lab_exact);
        assert!(e_coarse < 2e-2, "fd error {}", e_coarse);
        assert!(e_fine < 0.5 * e_coarse);
    }

    #[test]
    fn shooting_and_finite_differences_agree() {
        let problem = lab_problem();
        for h in [0.1, 0.05] {
            let (_, y_shoot) = shooting(&problem, adams_config(h)).unwrap();
            let fd = finite_difference(&problem, h).unwrap();
            let gap = max_norm(&absolute_error(y_shoot.as_slice(), fd.y.as_slice()).unwrap());
            assert!(gap < 1e-2, "h = {}: gap {}", h, gap);
        }
    }

    #[test]
    fn rk4_shooting_hits_the_singular_end() {
        // the ODE is singular at x = 1 and the last RK4 stage samples it
        let res = shooting(&lab_problem(), ShootingConfig::default());
        assert_eq!(res.unwrap_err(), OdeError::NonFiniteState { x: 1.0 });
    }

    #[test]
    fn finite_differences_are_second_order() {
        let problem = sinh_problem();
        let error = |h: f64| {
            let solution = finite_difference(&problem, h).unwrap();
            max_error(&solution.x_mesh, &solution.y, f64::sinh)
        };
        let (e1, e2) = (error(0.1), error(0.05));
        assert!(e1 < 1e-4);
        let ratio = e1 / e2;
        assert!(ratio > 3.5 && ratio < 4.5, "ratio {}", ratio);
    }

    #[test]
    fn quadratic_solution_is_reproduced_exactly() {
        // y'' = 2, y(0) + y'(0) = 0, y(1) + y'(1) = 3 => y = x^2
        let problem = BoundaryValueProblem::new(
            OdeSystem::second_order(|_x, _y, _z| 2.0),
            0.0,
            1.0,
            BoundaryCondition::new(1.0, 1.0, 0.0),
            BoundaryCondition::new(1.0, 1.0, 3.0),
        );
        let solution = finite_difference(&problem, 0.25).unwrap();
        for (x, y) in solution.x_mesh.iter().zip(solution.y.iter()) {
            assert_abs_diff_eq!(*y, x * x, epsilon = 1e-12);
        }
    }

    #[test]
    fn mixed_conditions() {
        let problem = robin_problem();
        let fd = |h: f64| {
            let solution = finite_difference(&problem, h).unwrap();
            max_error(&solution.x_mesh, &solution.y, f64::exp)
        };
        let (e1, e2) = (fd(0.1), fd(0.05));
        assert!(e1 < 2e-2, "fd error {}", e1);
        assert!(e1 / e2 > 3.0);

        let config = ShootingConfig {
            tolerance: 1e-10,
            ..Default::default()
        };
        let result = ShootingMethodSolver::new(config).solve(&problem).unwrap();
        assert!(max_error(result.x(), result.y(), f64::exp) < 1e-5);
        // y(0) = 1, z(0) = 2 - y(0)
        assert_abs_diff_eq!(result.s, 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(result.solution.z[0], 1.0, epsilon = 1e-5);
    }

    #[test]
    fn linear_problem_needs_one_secant_step() {
        let config = ShootingConfig {
            tolerance: 1e-10,
            ..Default::default()
        };
        let result = ShootingMethodSolver::new(config).solve(&sinh_problem()).unwrap();
        assert!(result.iterations <= 2, "iterations {}", result.iterations);
        assert_abs_diff_eq!(result.s, 1.0, epsilon = 1e-5);
        assert!(max_error(result.x(), result.y(), f64::sinh) < 1e-6);
    }

    #[test]
    fn first_guess_can_be_the_answer() {
        // y'' = 0, y(0) = 0, y(1) = 1 => slope 1
        let problem = BoundaryValueProblem::new(
            OdeSystem::second_order(|_x, _y, _z| 0.0),
            0.0,
            1.0,
            BoundaryCondition::dirichlet(0.0),
            BoundaryCondition::dirichlet(1.0),
        );
        let config = ShootingConfig {
            initial_guesses: (1.0, 2.0),
            ..Default::default()
        };
        let result = ShootingMethodSolver::new(config).solve(&problem).unwrap();
        assert_eq!(result.iterations, 0);
        assert_eq!(result.s, 1.0);
    }

    #[test]
    fn nonlinear_problem_by_shooting() {
        // y'' = 1.5 y^2, y(0) = 4, y(1) = 1 => y = 4/(1+x)^2
        let problem = BoundaryValueProblem::new(
            OdeSystem::second_order(|_x, y, _z| 1.5 * y * y),
            0.0,
            1.0,
            BoundaryCondition::dirichlet(4.0),
            BoundaryCondition::dirichlet(1.0),
        );
        let config = ShootingConfig {
            step: 0.01,
            tolerance: 1e-8,
            initial_guesses: (-6.0, -5.0),
            ..Default::default()
        };
        let result = ShootingMethodSolver::new(config).solve(&problem).unwrap();
        assert!(result.converged);
        assert_abs_diff_eq!(result.s, -8.0, epsilon = 1e-4);
        let error = max_error(result.x(), result.y(), |x| 4.0 / ((1.0 + x) * (1.0 + x)));
        assert!(error < 1e-6, "error {}", error);

        let fd = finite_difference(&problem, 0.01);
        assert!(matches!(fd, Err(OdeError::NonAffineSystem { .. })));
    }

    #[test]
    fn coefficients_of_the_lab_equation() {
        let coefficients = linear_coefficients(&lab_problem().system, 0.5).unwrap();
        // g = -(x-3)/(x^2-1) * z + 1/(x^2-1) * y
        assert_abs_diff_eq!(coefficients.p, -2.5 / 0.75, epsilon = 1e-12);
        assert_abs_diff_eq!(coefficients.q, -1.0 / 0.75, epsilon = 1e-12);
        assert_abs_diff_eq!(coefficients.r, 0.0);
    }

    #[test]
    fn finite_differences_need_y_prime_equal_z() {
        let problem = BoundaryValueProblem::new(
            OdeSystem::new(|_x, y, _z| y, |_x, y, _z| y),
            0.0,
            1.0,
            BoundaryCondition::dirichlet(0.0),
            BoundaryCondition::dirichlet(1.0),
        );
        let res = finite_difference(&problem, 0.1);
        assert!(matches!(res, Err(OdeError::InvalidConfig(_))));
    }

    #[test]
    fn too_coarse_mesh_for_finite_differences() {
        let res = finite_difference(&sinh_problem(), 1.0);
        assert!(matches!(res, Err(OdeError::InvalidStep { .. })));
    }

    #[test]
    fn exhausted_iterations_are_reported() {
        let config = ShootingConfig {
            max_iterations: 0,
            initial_guesses: (0.0, 0.5),
            ..Default::default()
        };
        let res = ShootingMethodSolver::new(config.clone()).solve(&sinh_problem());
        match res {
            Err(OdeError::NotConverged {
                iterations,
                last_guess,
                residual,
            }) => {
                assert_eq!(iterations, 0);
                assert_eq!(last_guess, 0.5);
                assert!(residual.abs() > 1e-3);
            }
            other => panic!("expected NotConverged, got {:?}", other),
        }

        let lenient = ShootingConfig {
            fail_on_divergence: false,
            ..config
        };
        let result = ShootingMethodSolver::new(lenient).solve(&sinh_problem()).unwrap();
        assert!(!result.converged);
        assert_eq!(result.s, 0.5);
        assert_eq!(result.y()[0], 0.0);
    }

    #[test]
    fn diverging_trajectory_ends_the_iteration() {
        // y'' = 1.5 y^2, y(0) = 4, y(1) = 1; s = 50 blows up near x = 0.72
        let problem = BoundaryValueProblem::new(
            OdeSystem::second_order(|_x, y, _z| 1.5 * y * y),
            0.0,
            1.0,
            BoundaryCondition::dirichlet(4.0),
            BoundaryCondition::dirichlet(1.0),
        );
        let config = ShootingConfig {
            step: 0.01,
            initial_guesses: (0.0, 50.0),
            fail_on_divergence: false,
            ..Default::default()
        };
        let result = ShootingMethodSolver::new(config.clone()).solve(&problem).unwrap();
        assert!(!result.converged);
        assert_eq!(result.s, 0.0);
        assert_eq!(result.iterations, 0);
        assert!(result.residual.is_finite() && result.residual > 80.0, "{}", result.residual);
        assert_eq!(result.y()[0], 4.0);

        let strict = ShootingConfig {
            fail_on_divergence: true,
            ..config.clone()
        };
        match ShootingMethodSolver::new(strict).solve(&problem) {
            Err(OdeError::NotConverged {
                iterations,
                last_guess,
                residual,
            }) => {
                assert_eq!(iterations, 0);
                assert_eq!(last_guess, 0.0);
                assert!(residual.is_finite());
            }
            other => panic!("expected NotConverged, got {:?}", other),
        }

        // no finite trajectory to return at all
        let hopeless = ShootingConfig {
            initial_guesses: (50.0, 60.0),
            ..config
        };
        let res = ShootingMethodSolver::new(hopeless).solve(&problem);
        assert!(matches!(res, Err(OdeError::NonFiniteState { .. })));
    }

    #[test]
    fn bad_input_fails_fast() {
        let mut problem = sinh_problem();
        problem.right = BoundaryCondition::new(0.0, 0.0, 1.0);
        let degenerate = OdeError::DegenerateBoundary { a: 0.0, b: 0.0 };
        assert_eq!(
            shooting(&problem, ShootingConfig::default()).unwrap_err(),
            degenerate
        );
        assert_eq!(finite_difference(&problem, 0.1).unwrap_err(), degenerate);

        let same_guesses = ShootingConfig {
            initial_guesses: (0.5, 0.5),
            ..Default::default()
        };
        let res = shooting(&sinh_problem(), same_guesses);
        assert!(matches!(res, Err(OdeError::InvalidConfig(_))));

        let bad_step = ShootingConfig {
            step: -0.1,
            ..Default::default()
        };
        let res = shooting(&sinh_problem(), bad_step);
        assert!(matches!(res, Err(OdeError::InvalidStep { .. })));
    }
}
