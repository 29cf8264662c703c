use scorecalc::core::score;
use scorecalc::{CalcError, ScoreInput, ScoreOutcome};

#[test]
fn test_product_rule_for_large_sums() {
    // x > 10, y < 0, x + y > 20
    for (x, y) in [(25_i64, -2_i64), (30, -5), (1000, -1)] {
        assert!(x > 10 && y < 0 && x + y > 20);
        assert_eq!(score::compute(x, y), ScoreOutcome::Defined(x * y));
    }
}

#[test]
fn test_minus_one_scores_zero_below_sum_threshold() {
    // compute(15, -1): 15 + -1 = 14 <= 20, y == -1
    assert_eq!(score::compute(15, -1), ScoreOutcome::Defined(0));
}

#[test]
fn test_undefined_combinations() {
    // The rule table leaves these unassigned; the outcome is explicit,
    // never a guessed default
    assert_eq!(score::compute(15, -10), ScoreOutcome::Undefined);
    assert_eq!(score::compute(12, 5), ScoreOutcome::Undefined);
    assert_eq!(score::compute(5, 20), ScoreOutcome::Undefined);
}

#[test]
fn test_sum_rule_and_zero_x_passthrough() {
    assert_eq!(score::compute(12, 15), ScoreOutcome::Defined(27));

    let input = ScoreInput::new(0, 7);
    assert_eq!(score::compute(input.x, input.y), ScoreOutcome::Defined(7));
    assert!(score::compute(input.x, input.y).is_defined());
}

#[test]
fn test_parse_then_compute() {
    let input = ScoreInput::parse("12", "15").unwrap();
    assert_eq!(score::compute_checked(input.x, input.y).unwrap(), 27);
}

#[test]
fn test_unparseable_inputs_fail_with_invalid_input() {
    for (x, y) in [("twelve", "15"), ("12", "15.5"), ("", "0")] {
        let result = ScoreInput::parse(x, y);
        assert!(matches!(result, Err(CalcError::InvalidInput { .. })));
    }
}

#[test]
fn test_undefined_surfaces_as_error_through_checked_api() {
    let err = score::compute_checked(15, -10).unwrap_err();
    assert!(matches!(err, CalcError::UndefinedScore { x: 15, y: -10 }));
    assert_eq!(err.to_string(), "No scoring rule assigns a value for x = 15, y = -10");
}

#[test]
fn test_referential_transparency() {
    for _ in 0..3 {
        assert_eq!(score::compute(23, -2), ScoreOutcome::Defined(-46));
        assert_eq!(score::compute(15, -10), ScoreOutcome::Undefined);
    }
}
