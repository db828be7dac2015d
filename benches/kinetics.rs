//! Kinetics benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chemostat_lab::kinetics::{step, ModelParameters};
use chemostat_lab::{ChemostatConfig, SimulationController, SimulationState};

fn bench_single_step(c: &mut Criterion) {
    let params = ModelParameters::new(0.4, 0.5, 0.5, 0.2, 30.0).unwrap();
    let state = SimulationState::new(0.1, 20.0);

    c.bench_function("euler_step", |b| {
        b.iter(|| step(black_box(&state), black_box(&params), black_box(0.03)))
    });
}

fn bench_controller_run(c: &mut Criterion) {
    let config = ChemostatConfig::default();
    let mut controller = SimulationController::new(&config).unwrap();

    c.bench_function("controller_10k_ticks", |b| {
        b.iter(|| {
            controller.start();
            for _ in 0..10_000 {
                controller.tick();
            }
            black_box(controller.state().biomass_g_per_L)
        })
    });
}

criterion_group!(benches, bench_single_step, bench_controller_run);
criterion_main!(benches);
