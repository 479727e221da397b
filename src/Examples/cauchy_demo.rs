//! Cauchy problem demo: every integrator at steps h and h/2, compared with
//! the closed-form solution and with the RRR estimate.
use crate::Examples::lab_output::{Curve, DemoSummary, LabOutput, MethodSummary};
use crate::Examples::lab_scenarios::CauchyScenario;
use crate::Utils::report::{error_table, max_error_line, rrr_line};
use crate::numerical::Cauchy::Cauchy_api::CauchyMethod;
use crate::numerical::ODE_errors::OdeError;
use crate::numerical::error_estimates::{absolute_error, align_to_coarse, max_norm, rrr_max};
use log::{error, info};
use strum::IntoEnumIterator;

pub fn run(scenario: &CauchyScenario, out: &mut dyn LabOutput) -> Result<DemoSummary, OdeError> {
    info!(
        "Cauchy demo on [{}, {}] with h = {}",
        scenario.xl, scenario.xr, scenario.h
    );
    let system = scenario.system();
    let problem = scenario.problem();
    let half = problem.with_step(problem.h / 2.0);

    let mut summary = DemoSummary::default();
    let mut x_coarse = Vec::new();
    let mut error_columns: Vec<(String, Vec<f64>)> = Vec::new();
    for method in CauchyMethod::iter() {
        let name = method.to_string();
        let coarse = method.integrate(&system, &problem)?;
        let fine = method.integrate(&system, &half)?;
        let exact = coarse.x_mesh.map(CauchyScenario::exact);
        let exact_fine = fine.x_mesh.map(CauchyScenario::exact);

        let errors = absolute_error(coarse.y.as_slice(), exact.as_slice())?;
        let errors_fine = absolute_error(fine.y.as_slice(), exact_fine.as_slice())?;
        let y_fine = align_to_coarse(
            coarse.x_mesh.as_slice(),
            fine.x_mesh.as_slice(),
            fine.y.as_slice(),
        )?;
        let rrr = rrr_max(coarse.y.as_slice(), &y_fine, method.order())?;

        let solution_curve = Curve {
            label: &name,
            x: coarse.x_mesh.as_slice(),
            y: coarse.y.as_slice(),
        };
        let exact_curve = Curve {
            label: "function",
            x: coarse.x_mesh.as_slice(),
            y: exact.as_slice(),
        };
        if let Err(e) = out.plot(&name, solution_curve, exact_curve) {
            error!("cannot plot {}: {}", name, e);
        }
        let columns = [("y", &coarse.y), ("z", &coarse.z), ("exact", &exact)];
        if let Err(e) = out.samples(&format!("cauchy_{}", name), &coarse.x_mesh, &columns) {
            error!("cannot save samples of {}: {}", name, e);
        }

        summary.methods.push(MethodSummary {
            method: name.clone(),
            max_error_h: max_norm(&errors),
            max_error_h2: max_norm(&errors_fine),
            rrr,
        });
        x_coarse = coarse.x_mesh.as_slice().to_vec();
        error_columns.push((name, errors));
    }

    let mut text: Vec<String> = summary
        .methods
        .iter()
        .map(|m| rrr_line(&m.method, m.rrr))
        .collect();
    text.push(String::new());
    text.extend(
        error_columns
            .iter()
            .map(|(name, errors)| max_error_line(name, errors)),
    );
    out.report(&text.join("\n"));

    let columns: Vec<(&str, &[f64])> = error_columns
        .iter()
        .map(|(name, errors)| (name.as_str(), errors.as_slice()))
        .collect();
    out.report(&error_table(&x_coarse, &columns)?);
    Ok(summary)
}
