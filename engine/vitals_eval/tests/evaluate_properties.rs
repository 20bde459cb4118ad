use proptest::prelude::*;
use vitals_eval::{evaluate, Evaluator};
use vitals_record::Record;

fn record(bmi: f64, heart_rate: f64, sleep_hours: f64, exercise_level: f64) -> Record {
    Record {
        id: None,
        user_id: None,
        bmi,
        heart_rate,
        sleep_hours,
        exercise_level,
        risk_score: 55.0,
        risk_level: "MEDIUM".into(),
        recommendation: "Moderate risk detected.".into(),
        timestamp: None,
    }
}

proptest! {
    #[test]
    fn evaluation_is_idempotent(
        bmi in 10.0f64..=40.0,
        hr in 40.0f64..=180.0,
        sleep in 0.0f64..=12.0,
        exercise in 0.0f64..=7.0,
    ) {
        let r = record(bmi, hr, sleep, exercise);
        let first = evaluate(&r);
        let second = evaluate(&r);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn degrees_are_bounded_for_any_reading(
        bmi in -100.0f64..200.0,
        hr in -100.0f64..400.0,
        sleep in -10.0f64..30.0,
        exercise in -10.0f64..20.0,
    ) {
        for result in evaluate(&record(bmi, hr, sleep, exercise)) {
            for m in &result.memberships {
                prop_assert!((0.0..=1.0).contains(&m.degree));
            }
        }
    }

    #[test]
    fn raw_values_are_echoed(bmi in 10.0f64..=40.0, hr in 40.0f64..=180.0) {
        let results = evaluate(&record(bmi, hr, 7.0, 3.0));
        prop_assert_eq!(results[0].raw_value, bmi);
        prop_assert_eq!(results[1].raw_value, hr);
    }
}

#[test]
fn evaluator_is_shareable_across_threads() {
    let evaluator = Evaluator::default();
    let r = record(27.5, 118.0, 6.5, 1.0);
    let expected = evaluator.evaluate(&r);
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| evaluator.evaluate(&r)))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}
