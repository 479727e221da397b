//! Demo problems with their closed-form solutions, and the options of a run.
//!
//! Every value has a compiled-in default; a task file (see
//! [`crate::Utils::task_parser`]) may override any of them:
//! ```text
//! cauchy
//!   x_bounds: 1.0, 2.0
//!   initial: 3.718281828459045, 3.718281828459045
//!   step: 0.1
//! boundary
//!   x_bounds: 0.0, 1.0
//!   left: 0.0, 1.0, 0.0
//!   right: 1.0, 1.0, -0.75
//!   step: 0.1
//!   tolerance: 0.001
//!   max_iterations: 50
//!   integrator: adams4
//! output
//!   plots: true
//!   csv: false
//!   log_level: info
//!   log_file: false
//!   dir: plots
//! ```
use crate::Utils::task_parser::TaskDocument;
use crate::numerical::BVP::BVP_problem::{BoundaryCondition, BoundaryValueProblem};
use crate::numerical::BVP::Shooting::ShootingConfig;
use crate::numerical::Cauchy::Cauchy_api::{CauchyMethod, CauchyProblem, OdeSystem};
use crate::numerical::ODE_errors::OdeError;
use log::info;
use std::f64::consts::E;
use std::path::{Path, PathBuf};

const KNOWN_KEYS: &[(&str, &[&str])] = &[
    ("cauchy", &["x_bounds", "initial", "step"]),
    (
        "boundary",
        &[
            "x_bounds",
            "left",
            "right",
            "step",
            "tolerance",
            "max_iterations",
            "integrator",
        ],
    ),
    ("output", &["plots", "csv", "log_level", "log_file", "dir"]),
];

/// x*y'' - (x+1)*y' + y = 0 on [1, 2], y(1) = 2+e, y'(1) = 1+e
#[derive(Debug, Clone, PartialEq)]
pub struct CauchyScenario {
    pub xl: f64,
    pub xr: f64,
    pub y0: f64,
    pub z0: f64,
    pub h: f64,
}

impl Default for CauchyScenario {
    fn default() -> Self {
        CauchyScenario {
            xl: 1.0,
            xr: 2.0,
            y0: 2.0 + E,
            z0: 1.0 + E,
            h: 0.1,
        }
    }
}

impl CauchyScenario {
    pub fn system(&self) -> OdeSystem {
        OdeSystem::second_order(|x, y, z| ((x + 1.0) / x) * z - y / x)
    }

    /// y = x + 1 + e^x
    pub fn exact(x: f64) -> f64 {
        x + 1.0 + x.exp()
    }

    pub fn problem(&self) -> CauchyProblem {
        CauchyProblem::new(self.xl, self.xr, self.y0, self.z0, self.h)
    }

    fn update(&mut self, doc: &TaskDocument) -> Result<(), OdeError> {
        if let Some(v) = doc.floats("cauchy", "x_bounds", 2)? {
            (self.xl, self.xr) = (v[0], v[1]);
        }
        if let Some(v) = doc.floats("cauchy", "initial", 2)? {
            (self.y0, self.z0) = (v[0], v[1]);
        }
        if let Some(h) = doc.float("cauchy", "step")? {
            self.h = h;
        }
        Ok(())
    }
}

/// (x^2 - 1)*y'' + (x - 3)*y' - y = 0 on [0, 1], y'(0) = 0, y(1) + y'(1) = -0.75
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryScenario {
    pub xl: f64,
    pub xr: f64,
    pub left: BoundaryCondition,
    pub right: BoundaryCondition,
    pub h: f64,
    /// shooting tolerance on the right boundary residual
    pub tolerance: f64,
    pub max_iterations: usize,
    /// Cauchy solver of the shooting runs; it must not sample x = 1, where
    /// the equation is singular
    pub integrator: CauchyMethod,
}

impl Default for BoundaryScenario {
    fn default() -> Self {
        BoundaryScenario {
            xl: 0.0,
            xr: 1.0,
            left: BoundaryCondition::new(0.0, 1.0, 0.0),
            right: BoundaryCondition::new(1.0, 1.0, -0.75),
            h: 0.1,
            tolerance: 1e-3,
            max_iterations: 50,
            integrator: CauchyMethod::Adams4,
        }
    }
}

impl BoundaryScenario {
    pub fn system(&self) -> OdeSystem {
        OdeSystem::second_order(|x, y, z| (y - (x - 3.0) * z) / (x * x - 1.0))
    }

    /// y = x - 3 + 1/(x+1)
    pub fn exact(x: f64) -> f64 {
        x - 3.0 + 1.0 / (x + 1.0)
    }

    pub fn problem(&self) -> BoundaryValueProblem {
        BoundaryValueProblem::new(self.system(), self.xl, self.xr, self.left, self.right)
    }

    /// Shooting settings for step `h`.
    pub fn shooting_config(&self, h: f64) -> ShootingConfig {
        ShootingConfig {
            step: h,
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
            integrator: self.integrator,
            ..Default::default()
        }
    }

    fn update(&mut self, doc: &TaskDocument) -> Result<(), OdeError> {
        if let Some(v) = doc.floats("boundary", "x_bounds", 2)? {
            (self.xl, self.xr) = (v[0], v[1]);
        }
        if let Some(v) = doc.floats("boundary", "left", 3)? {
            self.left = BoundaryCondition::new(v[0], v[1], v[2]);
        }
        if let Some(v) = doc.floats("boundary", "right", 3)? {
            self.right = BoundaryCondition::new(v[0], v[1], v[2]);
        }
        if let Some(h) = doc.float("boundary", "step")? {
            self.h = h;
        }
        if let Some(tol) = doc.float("boundary", "tolerance")? {
            self.tolerance = tol;
        }
        if let Some(n) = doc.usize("boundary", "max_iterations")? {
            self.max_iterations = n;
        }
        if let Some(method) = doc.parsed::<CauchyMethod>("boundary", "integrator")? {
            self.integrator = method;
        }
        Ok(())
    }
}

/// What a demo run writes besides the console report.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputOptions {
    pub plots: bool,
    pub csv: bool,
    pub log_level: String,
    pub log_file: bool,
    /// directory for PNG and CSV files
    pub dir: PathBuf,
}

impl Default for OutputOptions {
    fn default() -> Self {
        OutputOptions {
            plots: true,
            csv: false,
            log_level: "info".to_string(),
            log_file: false,
            dir: PathBuf::from("."),
        }
    }
}

impl OutputOptions {
    fn update(&mut self, doc: &TaskDocument) -> Result<(), OdeError> {
        if let Some(plots) = doc.boolean("output", "plots")? {
            self.plots = plots;
        }
        if let Some(csv) = doc.boolean("output", "csv")? {
            self.csv = csv;
        }
        if let Some(level) = doc.word("output", "log_level")? {
            self.log_level = level;
        }
        if let Some(log_file) = doc.boolean("output", "log_file")? {
            self.log_file = log_file;
        }
        if let Some(dir) = doc.word("output", "dir")? {
            self.dir = PathBuf::from(dir);
        }
        Ok(())
    }
}

/// Everything one run of the binary needs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabTask {
    pub cauchy: CauchyScenario,
    pub boundary: BoundaryScenario,
    pub output: OutputOptions,
}

impl LabTask {
    /// Defaults overridden by the values present in `doc`.
    pub fn from_document(doc: &TaskDocument) -> Result<Self, OdeError> {
        doc.check_known(KNOWN_KEYS)?;
        let mut task = LabTask::default();
        task.cauchy.update(doc)?;
        task.boundary.update(doc)?;
        task.output.update(doc)?;
        Ok(task)
    }

    pub fn from_file(path: &Path) -> Result<Self, OdeError> {
        info!("reading task file {}", path.display());
        LabTask::from_document(&TaskDocument::from_file(path)?)
    }
}
