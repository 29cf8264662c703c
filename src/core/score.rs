use crate::domain::model::ScoreOutcome;
use crate::utils::error::{CalcError, Result};

/// Evaluate the scoring rule table. First match wins; the nesting mirrors
/// the rule precedence exactly:
///
/// 1. x > 10, y < 0, x + y > 20          -> x * y
/// 2. x > 10, y < 0, x + y <= 20, y == -1 -> 0
/// 3. x > 10, y < 0, x + y <= 20, y != -1 -> undefined
/// 4. x > 10, y >= 0, y > 10             -> x + y
/// 5. x > 10, y >= 0, y <= 10            -> undefined
/// 6. x <= 10, x == 0                    -> y
/// 7. x <= 10, x != 0                    -> undefined
///
/// Arithmetic saturates at the i64 bounds so no input can panic or wrap.
pub fn compute(x: i64, y: i64) -> ScoreOutcome {
    if x > 10 {
        if y < 0 {
            if x.saturating_add(y) > 20 {
                ScoreOutcome::Defined(x.saturating_mul(y))
            } else if y == -1 {
                ScoreOutcome::Defined(0)
            } else {
                ScoreOutcome::Undefined
            }
        } else if y > 10 {
            ScoreOutcome::Defined(x.saturating_add(y))
        } else {
            ScoreOutcome::Undefined
        }
    } else if x == 0 {
        ScoreOutcome::Defined(y)
    } else {
        ScoreOutcome::Undefined
    }
}

/// Like [`compute`], but surfaces the undefined outcome as an error for
/// callers that need a plain score or a failure.
pub fn compute_checked(x: i64, y: i64) -> Result<i64> {
    match compute(x, y) {
        ScoreOutcome::Defined(score) => Ok(score),
        ScoreOutcome::Undefined => Err(CalcError::UndefinedScore { x, y }),
    }
}
