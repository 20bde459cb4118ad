use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vitals_eval::evaluate;
use vitals_record::Record;

fn sample_records() -> Vec<Record> {
    (0..256)
        .map(|i| {
            let t = i as f64 / 255.0;
            Record {
                id: None,
                user_id: None,
                bmi: 10.0 + 30.0 * t,
                heart_rate: 40.0 + 140.0 * t,
                sleep_hours: 12.0 * (1.0 - t),
                exercise_level: 7.0 * t,
                risk_score: 100.0 * t,
                risk_level: "MEDIUM".into(),
                recommendation: String::new(),
                timestamp: None,
            }
        })
        .collect()
}

fn bench_evaluate(c: &mut Criterion) {
    let records = sample_records();
    c.bench_function("evaluate_history_256", |b| {
        b.iter(|| {
            for r in &records {
                black_box(evaluate(black_box(r)));
            }
        })
    });
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
