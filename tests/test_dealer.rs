use std::path::PathBuf;

use kuhn_cfr::cards::Deal;
use kuhn_cfr::config::TrainConfig;
use kuhn_cfr::dealer::{format_shuffles, Dealer, ReplayDealer, ShuffleDealer};
use kuhn_cfr::error::KuhnError;
use kuhn_cfr::trainer::KuhnTrainer;

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("kuhn-cfr-{}-{}", std::process::id(), name));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_replay_from_file() {
    let path = temp_file("replay.txt", "123\n312\n");
    let mut dealer = ReplayDealer::from_file(&path).unwrap();
    assert_eq!(dealer.next_deal().unwrap(), Deal::from_values(1, 2).unwrap());
    assert_eq!(dealer.next_deal().unwrap(), Deal::from_values(3, 1).unwrap());
    assert!(dealer.next_deal().is_err());
    std::fs::remove_file(path).ok();
}

#[test]
fn test_malformed_file_reports_line() {
    let path = temp_file("malformed.txt", "123\n231\n2x1\n");
    match ReplayDealer::from_file(&path) {
        Err(KuhnError::MalformedDeal { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected malformed deal, got {:?}", other),
    }
    std::fs::remove_file(path).ok();
}

#[test]
fn test_config_replays_deals_file() {
    let text = format_shuffles(&mut ShuffleDealer::new(4), 300);
    let path = temp_file("config.txt", &text);
    let config = TrainConfig {
        iterations: 300,
        deals: Some(path.clone()),
        ..TrainConfig::default()
    };

    let from_file = KuhnTrainer::new(config.dealer().unwrap()).train(300).unwrap();
    let from_seed = KuhnTrainer::new(ShuffleDealer::new(4)).train(300).unwrap();
    assert_eq!(from_file, from_seed);
    std::fs::remove_file(path).ok();
}

#[test]
fn test_short_deals_file_aborts_training() {
    let path = temp_file("short.txt", "123\n213\n");
    let config = TrainConfig {
        iterations: 3,
        deals: Some(path.clone()),
        ..TrainConfig::default()
    };
    let result = KuhnTrainer::new(config.dealer().unwrap()).train(config.iterations);
    assert!(matches!(result, Err(KuhnError::DealerExhausted { served: 2 })));
    std::fs::remove_file(path).ok();
}

#[test]
fn test_seeded_config_is_reproducible() {
    let config = TrainConfig {
        iterations: 200,
        seed: Some(17),
        ..TrainConfig::default()
    };
    let a = KuhnTrainer::new(config.dealer().unwrap()).train(200).unwrap();
    let b = KuhnTrainer::new(config.dealer().unwrap()).train(200).unwrap();
    assert_eq!(a, b);
}
