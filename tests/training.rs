use std::collections::VecDeque;

use perceptron_nn::{
    load_patterns, run_prediction_loop, NetworkConfig, TrainState, Trainer,
};

const RECORDS: &str = "\
1.0,1.0,1
0.5,1.0,1
1.0,0.25,1
-1.0,-1.0,-1
-0.5,-1.0,-1
-1.0,-0.25,-1
";

#[test]
fn load_train_and_predict() {
    let patterns = load_patterns(RECORDS.as_bytes(), 2).unwrap();
    let config = NetworkConfig { seed: Some(2024), ..NetworkConfig::default() };
    let mut trainer = Trainer::new(config);

    let mut epochs = 0;
    let last = trainer.train(&patterns, |_| epochs += 1);
    assert_eq!(last.state, TrainState::Converged);
    assert!(last.error <= 0.1);
    assert!(epochs >= 1);

    let mut source: VecDeque<String> = ["0.9,0.8", "-0.9,-0.8", "0.9"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let mut out = Vec::new();
    let count = run_prediction_loop(trainer.network_mut(), &mut source, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(count, 2);
    let answers: Vec<&str> = text
        .split("Input x, y: ")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    assert_eq!(answers, vec!["1", "-1", "expected 3 comma-separated fields, found 2"]);
}

#[test]
fn stepping_never_skips_a_converged_epoch() {
    let patterns = load_patterns(RECORDS.as_bytes(), 2).unwrap();
    let config = NetworkConfig { seed: Some(7), restart_after: 200, ..NetworkConfig::default() };
    let mut trainer = Trainer::new(config);

    for _ in 0..100_000 {
        let stats = trainer.step(&patterns);
        match stats.state {
            TrainState::Converged => {
                assert!(stats.error <= 0.1);
                return;
            }
            TrainState::Restarting => assert_eq!(trainer.iteration(), 0),
            TrainState::Training => assert!(stats.error > 0.1),
        }
    }
    panic!("no convergence within 100000 epochs");
}
