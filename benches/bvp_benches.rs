use RustedODE::Examples::lab_scenarios::{BoundaryScenario, CauchyScenario};
use RustedODE::numerical::BVP::Finite_difference::finite_difference;
use RustedODE::numerical::BVP::Shooting::ShootingMethodSolver;
use RustedODE::numerical::Cauchy::Cauchy_api::CauchyMethod;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_shooting(c: &mut Criterion) {
    let scenario = BoundaryScenario::default();
    let problem = scenario.problem();
    let mut group = c.benchmark_group("shooting");
    for h in [0.01, 0.001] {
        group.bench_function(format!("adams4 h = {}", h), |b| {
            b.iter(|| {
                let mut solver = ShootingMethodSolver::new(scenario.shooting_config(black_box(h)));
                solver.solve(&problem)
            })
        });
    }
    group.finish();
}

fn bench_finite_difference(c: &mut Criterion) {
    let problem = BoundaryScenario::default().problem();
    let mut group = c.benchmark_group("finite differences");
    for h in [0.01, 0.001] {
        group.bench_function(format!("h = {}", h), |b| {
            b.iter(|| finite_difference(&problem, black_box(h)))
        });
    }
    group.finish();
}

fn bench_cauchy(c: &mut Criterion) {
    let scenario = CauchyScenario {
        h: 0.001,
        ..Default::default()
    };
    let system = scenario.system();
    let problem = scenario.problem();
    for method in [CauchyMethod::Euler, CauchyMethod::RungeKutta4, CauchyMethod::Adams4] {
        c.bench_function(&format!("cauchy {}", method), |b| {
            b.iter(|| method.integrate(&system, black_box(&problem)))
        });
    }
}

criterion_group!(benches, bench_shooting, bench_finite_difference, bench_cauchy);
criterion_main!(benches);
