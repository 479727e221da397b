//! Boundary value demo: shooting and finite differences at steps h and h/2,
//! compared with the closed-form solution and with the RRR estimate.
use crate::Examples::lab_output::{Curve, DemoSummary, LabOutput, MethodSummary};
use crate::Examples::lab_scenarios::BoundaryScenario;
use crate::Utils::report::{error_table, max_error_line, rrr_line};
use crate::numerical::BVP::Finite_difference::finite_difference;
use crate::numerical::BVP::Shooting::ShootingMethodSolver;
use crate::numerical::ODE_errors::OdeError;
use crate::numerical::error_estimates::{absolute_error, align_to_coarse, max_norm, rrr_max};
use log::{error, info};
use nalgebra::DVector;

/// order of the centered finite-difference scheme
const FINITE_DIFFERENCE_ORDER: u32 = 2;

/// Solution of one method at steps h and h/2.
struct Pair {
    name: &'static str,
    x: DVector<f64>,
    y: DVector<f64>,
    x_fine: DVector<f64>,
    y_fine: DVector<f64>,
    order: u32,
}

pub fn run(scenario: &BoundaryScenario, out: &mut dyn LabOutput) -> Result<DemoSummary, OdeError> {
    info!(
        "boundary value demo on [{}, {}] with h = {}",
        scenario.xl, scenario.xr, scenario.h
    );
    let problem = scenario.problem();
    let h = scenario.h;

    let mut solver = ShootingMethodSolver::new(scenario.shooting_config(h));
    let shot = solver.solve(&problem)?;
    let mut solver = ShootingMethodSolver::new(scenario.shooting_config(h / 2.0));
    let shot_fine = solver.solve(&problem)?;
    let shooting_note = format!(
        "shooting ({}): free parameter {:.6} after {} secant iterations, residual {:.3e}",
        scenario.integrator, shot.s, shot.iterations, shot.residual
    );

    let fd = finite_difference(&problem, h)?;
    let fd_fine = finite_difference(&problem, h / 2.0)?;

    let pairs = [
        Pair {
            name: "shooting",
            x: shot.solution.x_mesh,
            y: shot.solution.y,
            x_fine: shot_fine.solution.x_mesh,
            y_fine: shot_fine.solution.y,
            order: scenario.integrator.order(),
        },
        Pair {
            name: "finite",
            x: fd.x_mesh,
            y: fd.y,
            x_fine: fd_fine.x_mesh,
            y_fine: fd_fine.y,
            order: FINITE_DIFFERENCE_ORDER,
        },
    ];

    let mut summary = DemoSummary::default();
    let mut error_columns: Vec<(&str, Vec<f64>)> = Vec::new();
    for pair in &pairs {
        let exact = pair.x.map(BoundaryScenario::exact);
        let exact_fine = pair.x_fine.map(BoundaryScenario::exact);
        let errors = absolute_error(pair.y.as_slice(), exact.as_slice())?;
        let errors_fine = absolute_error(pair.y_fine.as_slice(), exact_fine.as_slice())?;
        let y_fine = align_to_coarse(pair.x.as_slice(), pair.x_fine.as_slice(), pair.y_fine.as_slice())?;
        let rrr = rrr_max(pair.y.as_slice(), &y_fine, pair.order)?;

        let solution_curve = Curve {
            label: pair.name,
            x: pair.x.as_slice(),
            y: pair.y.as_slice(),
        };
        let exact_curve = Curve {
            label: "function",
            x: pair.x.as_slice(),
            y: exact.as_slice(),
        };
        if let Err(e) = out.plot(pair.name, solution_curve, exact_curve) {
            error!("cannot plot {}: {}", pair.name, e);
        }
        let columns = [("y", &pair.y), ("exact", &exact)];
        if let Err(e) = out.samples(&format!("boundary_{}", pair.name), &pair.x, &columns) {
            error!("cannot save samples of {}: {}", pair.name, e);
        }

        summary.methods.push(MethodSummary {
            method: pair.name.to_string(),
            max_error_h: max_norm(&errors),
            max_error_h2: max_norm(&errors_fine),
            rrr,
        });
        error_columns.push((pair.name, errors));
    }

    let mut text = vec![shooting_note];
    text.extend(summary.methods.iter().map(|m| rrr_line(&m.method, m.rrr)));
    text.push(String::new());
    text.extend(
        error_columns
            .iter()
            .map(|(name, errors)| max_error_line(name, errors)),
    );
    out.report(&text.join("\n"));

    let columns: Vec<(&str, &[f64])> = error_columns
        .iter()
        .map(|(name, errors)| (*name, errors.as_slice()))
        .collect();
    out.report(&error_table(pairs[0].x.as_slice(), &columns)?);
    Ok(summary)
}
