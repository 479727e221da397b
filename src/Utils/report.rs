/*
Text reports of the demo runs: the RRR error estimates as one line per method
and the pointwise absolute errors as a table with one column per method.
*/
use crate::numerical::ODE_errors::OdeError;
use crate::numerical::error_estimates::max_norm;
use tabled::builder::Builder;
use tabled::settings::Style;

/// digits after the decimal point in the tables
const PRECISION: usize = 3;

/// "<method> error (RRR): <value>"
pub fn rrr_line(method: &str, estimate: f64) -> String {
    format!("{} error (RRR): {:.6e}", method, estimate)
}

/// "<method> error: <max>" for a pointwise error sequence
pub fn max_error_line(method: &str, errors: &[f64]) -> String {
    format!("{} error: {:.6e}", method, max_norm(errors))
}

/// Table of absolute errors: an `x` column plus one column per method.
pub fn error_table(x: &[f64], columns: &[(&str, &[f64])]) -> Result<String, OdeError> {
    for (_, errors) in columns {
        if errors.len() != x.len() {
            return Err(OdeError::LengthMismatch {
                left: x.len(),
                right: errors.len(),
            });
        }
    }
    let mut builder = Builder::default();
    let mut header = vec!["x".to_string()];
    header.extend(columns.iter().map(|(name, _)| name.to_string()));
    builder.push_record(header);
    for (i, xi) in x.iter().enumerate() {
        let mut row = vec![format!("{:.prec$}", xi, prec = PRECISION)];
        row.extend(
            columns
                .iter()
                .map(|(_, errors)| format!("{:.prec$e}", errors[i], prec = PRECISION)),
        );
        builder.push_record(row);
    }
    let mut table = builder.build();
    table.with(Style::modern_rounded());
    Ok(table.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_a_row_per_node() {
        let x = [1.0, 1.5, 2.0];
        let euler = [0.0, 0.1, 0.25];
        let rk = [0.0, 1e-6, 2e-6];
        let table = error_table(&x, &[("euler", &euler), ("rk4", &rk)]).unwrap();
        assert!(table.contains("euler"));
        assert!(table.contains("rk4"));
        assert!(table.contains("1.500"));
        assert!(table.contains("2.500e-1"));
        // header, three rows
        let rows = table.lines().filter(|l| l.contains('│')).count();
        assert_eq!(rows, 4);
    }

    #[test]
    fn table_rejects_short_columns() {
        let res = error_table(&[1.0, 2.0], &[("euler", &[0.1])]);
        assert_eq!(res, Err(OdeError::LengthMismatch { left: 2, right: 1 }));
    }

    #[test]
    fn summary_lines() {
        assert_eq!(rrr_line("adams4", 0.5), "adams4 error (RRR): 5.000000e-1");
        assert_eq!(max_error_line("euler", &[0.1, -0.3, 0.2]), "euler error: 3.000000e-1");
    }
}
