//! Where the demos send their plots, reports and samples.
//!
//! The demos only talk to a [`LabOutput`]; [`FileOutput`] writes PNG/CSV
//! files and prints to the console, the recording variant used in tests keeps
//! everything in memory.
use crate::Examples::lab_scenarios::OutputOptions;
use crate::Utils::logger::save_samples_to_csv;
use crate::Utils::plots::plot_two_curves;
use log::info;
use nalgebra::DVector;
use std::error::Error;

/// One series of a plot.
#[derive(Debug, Clone, Copy)]
pub struct Curve<'a> {
    pub label: &'a str,
    pub x: &'a [f64],
    pub y: &'a [f64],
}

pub trait LabOutput {
    /// two curves on one chart named `title`
    fn plot(&mut self, title: &str, first: Curve, second: Curve) -> Result<(), Box<dyn Error>>;
    /// a block of report text
    fn report(&mut self, text: &str);
    /// mesh samples of one method, `name` identifies the file
    fn samples(
        &mut self,
        name: &str,
        x: &DVector<f64>,
        columns: &[(&str, &DVector<f64>)],
    ) -> Result<(), Box<dyn Error>>;
}

/// Max errors of one method at steps h and h/2.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodSummary {
    pub method: String,
    pub max_error_h: f64,
    pub max_error_h2: f64,
    pub rrr: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DemoSummary {
    pub methods: Vec<MethodSummary>,
}

impl DemoSummary {
    pub fn get(&self, method: &str) -> Option<&MethodSummary> {
        self.methods.iter().find(|m| m.method == method)
    }
}

/// PNG and CSV files in `options.dir`, reports on stdout.
pub struct FileOutput {
    options: OutputOptions,
}

impl FileOutput {
    pub fn new(options: OutputOptions) -> Self {
        FileOutput { options }
    }
}

impl LabOutput for FileOutput {
    fn plot(&mut self, title: &str, first: Curve, second: Curve) -> Result<(), Box<dyn Error>> {
        if !self.options.plots {
            return Ok(());
        }
        std::fs::create_dir_all(&self.options.dir)?;
        let path = plot_two_curves(
            first.x,
            first.y,
            second.x,
            second.y,
            title,
            (first.label, second.label),
            Some(self.options.dir.as_path()),
        )?;
        info!("plot saved to {}", path.display());
        Ok(())
    }

    fn report(&mut self, text: &str) {
        println!("{}", text);
    }

    fn samples(
        &mut self,
        name: &str,
        x: &DVector<f64>,
        columns: &[(&str, &DVector<f64>)],
    ) -> Result<(), Box<dyn Error>> {
        if !self.options.csv {
            return Ok(());
        }
        std::fs::create_dir_all(&self.options.dir)?;
        let path = self.options.dir.join(format!("{}.csv", name));
        save_samples_to_csv(&path, "x", x, columns)?;
        info!("result saved to {}", path.display());
        Ok(())
    }
}

/// Keeps plot titles, reports and sample file names in memory.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingOutput {
    pub plots: Vec<(String, String, String)>,
    pub reports: Vec<String>,
    pub samples: Vec<String>,
}

#[cfg(test)]
impl LabOutput for RecordingOutput {
    fn plot(&mut self, title: &str, first: Curve, second: Curve) -> Result<(), Box<dyn Error>> {
        if first.x.len() != first.y.len() || second.x.len() != second.y.len() {
            return Err(format!("plot '{}': length mismatch", title).into());
        }
        self.plots.push((
            title.to_string(),
            first.label.to_string(),
            second.label.to_string(),
        ));
        Ok(())
    }

    fn report(&mut self, text: &str) {
        self.reports.push(text.to_string());
    }

    fn samples(
        &mut self,
        name: &str,
        _x: &DVector<f64>,
        _columns: &[(&str, &DVector<f64>)],
    ) -> Result<(), Box<dyn Error>> {
        self.samples.push(name.to_string());
        Ok(())
    }
}
