use approx::assert_abs_diff_eq;

use kuhn_cfr::evaluate::*;
use kuhn_cfr::game::InfoSetKey;

#[test]
fn test_equilibrium_family_value() {
    for alpha in [0.0, 0.1, 0.2, 1.0 / 3.0] {
        let profile = equilibrium_profile(alpha).unwrap();
        assert_eq!(profile.len(), 12);
        assert_abs_diff_eq!(expected_value(&profile), GAME_VALUE, epsilon = 1e-12);
    }
}

#[test]
fn test_equilibrium_family_unexploitable() {
    for alpha in [0.0, 0.15, 1.0 / 3.0] {
        let profile = equilibrium_profile(alpha).unwrap();
        assert_abs_diff_eq!(exploitability(&profile), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(best_response_value(&profile, 0), GAME_VALUE, epsilon = 1e-9);
        assert_abs_diff_eq!(best_response_value(&profile, 1), -GAME_VALUE, epsilon = 1e-9);
    }
}

#[test]
fn test_equilibrium_bet_ratio() {
    let alpha = 0.2;
    let profile = equilibrium_profile(alpha).unwrap();
    let low: InfoSetKey = "1".parse().unwrap();
    let high: InfoSetKey = "3".parse().unwrap();
    assert_abs_diff_eq!(profile.get(&low)[1], alpha);
    assert_abs_diff_eq!(profile.get(&high)[1], 3.0 * alpha, epsilon = 1e-12);
}

#[test]
fn test_always_bet_is_exploitable() {
    let entries: Vec<(String, [f64; 2])> = all_info_set_keys()
        .iter()
        .map(|k| (k.to_string(), [0.0, 1.0]))
        .collect();
    let refs: Vec<(&str, [f64; 2])> = entries.iter().map(|(l, s)| (l.as_str(), *s)).collect();
    let profile = StrategyProfile::from_labels(&refs).unwrap();
    // Everyone bets and calls: pure showdown for 2, zero on average.
    assert_abs_diff_eq!(expected_value(&profile), 0.0, epsilon = 1e-12);
    assert!(exploitability(&profile) > 0.1);
}

#[test]
fn test_missing_keys_play_uniform() {
    let profile = StrategyProfile::new();
    assert!(profile.is_empty());
    assert_eq!(profile.get(&"2PB".parse().unwrap()), [0.5, 0.5]);
}

#[test]
fn test_bad_label_rejected() {
    assert!(StrategyProfile::from_labels(&[("4P", [1.0, 0.0])]).is_err());
}

#[test]
fn test_decision_keys_by_player() {
    for key in decision_keys(0) {
        assert_eq!(key.acting_player(), 0);
    }
    for key in decision_keys(1) {
        assert_eq!(key.acting_player(), 1);
    }
}
