#![allow(non_snake_case)]
use RustedODE::Examples::lab_output::FileOutput;
use RustedODE::Examples::lab_scenarios::LabTask;
use RustedODE::Examples::{boundary_demo, cauchy_demo};
use RustedODE::Utils::logger::init_logger;
use log::{error, info};
use std::io::{self, BufRead};
use std::path::Path;

/// 1 or 2 from the first line of the input, anything else is `None`
fn read_choice(input: &mut impl BufRead) -> Option<u32> {
    let mut line = String::new();
    input.read_line(&mut line).ok()?;
    line.trim().parse::<u32>().ok()
}

fn main() {
    // optional task file as the first argument
    let task = match std::env::args().nth(1) {
        Some(path) => match LabTask::from_file(Path::new(&path)) {
            Ok(task) => task,
            Err(e) => {
                eprintln!("{}", e);
                return;
            }
        },
        None => LabTask::default(),
    };
    if let Err(e) = init_logger(&task.output.log_level, task.output.log_file) {
        eprintln!("{}", e);
        return;
    }

    println!("Select lab:");
    println!("1: Cauchy");
    println!("2: boundary");
    let choice = read_choice(&mut io::stdin().lock());

    let mut out = FileOutput::new(task.output.clone());
    let result = match choice {
        Some(1) => cauchy_demo::run(&task.cauchy, &mut out),
        Some(2) => boundary_demo::run(&task.boundary, &mut out),
        _ => {
            println!("I don't know u wrong");
            return;
        }
    };
    match result {
        Ok(summary) => info!("demo finished: {} methods compared", summary.methods.len()),
        Err(e) => error!("demo aborted: {}", e),
    }
}
