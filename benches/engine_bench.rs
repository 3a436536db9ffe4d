use aim_adapt::analysis::analyze;
use aim_adapt::core::AnalysisConfig;
use aim_adapt::{create_initial_profile, AdaptiveEngine, GameMode, PerformanceSample};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sample(i: usize) -> PerformanceSample {
    let modes = [GameMode::Flick, GameMode::Tracking, GameMode::Precision];
    PerformanceSample::new(
        modes[i % modes.len()],
        55.0 + (i % 40) as f64,
        220.0 + (i % 25) as f64 * 8.0,
        50.0 + (i % 30) as f64,
    )
    .with_shots(40, 10)
    .with_perfect_shots(12)
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut engine = AdaptiveEngine::default();
    let mut profile = create_initial_profile();
    for i in 0..50 {
        profile = engine.analyze_and_recommend(sample(i), &profile, 40.0).profile;
    }

    let mut i = 50;
    c.bench_function("analyze_and_recommend (full history)", |b| {
        b.iter(|| {
            i += 1;
            let outcome = engine.analyze_and_recommend(black_box(sample(i)), &profile, 40.0);
            black_box(outcome.recommendation.target_difficulty)
        })
    });
}

fn bench_analyze(c: &mut Criterion) {
    let history: Vec<_> = (0..50).map(sample).collect();
    let config = AnalysisConfig::default();
    c.bench_function("analyze (50 samples)", |b| {
        b.iter(|| analyze(black_box(&history), &config))
    });
}

criterion_group!(benches, bench_full_pipeline, bench_analyze);
criterion_main!(benches);
