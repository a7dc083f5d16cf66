use rust_decimal::Decimal;

use super::percent_of;
use crate::models::{round_display, HealthScore, ScoreReport, UndefinedReason};

const SAVINGS_WEIGHT: Decimal = Decimal::from_parts(5, 0, 0, false, 1);
const EXPENSES_WEIGHT: Decimal = Decimal::from_parts(3, 0, 0, false, 1);
const OFFSET: Decimal = Decimal::from_parts(50, 0, 0, false, 0);
const MIN_SCORE: Decimal = Decimal::ONE;
const MAX_SCORE: Decimal = Decimal::ONE_HUNDRED;

/// Financial health score in `[1, 100]`:
///
/// `savings% * 0.5 - expenses% * 0.3 + 50`, clamped. The floor is 1 so a
/// defined score is never zero. Undefined whenever income is zero.
pub(crate) fn health_score(income: Decimal, savings: Decimal, total_expenses: Decimal) -> ScoreReport {
    if income.is_zero() {
        let reason = if savings.is_zero() && total_expenses.is_zero() {
            UndefinedReason::InsufficientData
        } else {
            UndefinedReason::ZeroIncome
        };
        return ScoreReport {
            score: HealthScore::Undefined(reason),
            explanation: format!("Health score cannot be computed: {reason}"),
        };
    }

    let savings_ratio = percent_of(savings, income);
    let expenses_ratio = percent_of(total_expenses, income);
    let raw = savings_ratio * SAVINGS_WEIGHT - expenses_ratio * EXPENSES_WEIGHT + OFFSET;
    let score = raw.clamp(MIN_SCORE, MAX_SCORE);

    let explanation = format!(
        "Score = (savings ratio × 0.5) − (expenses ratio × 0.3) + 50 \
         = ({:.2} × 0.5) − ({:.2} × 0.3) + 50 \
         = {:.2}, clamped to [1, 100] = {:.2}",
        round_display(savings_ratio, 2),
        round_display(expenses_ratio, 2),
        round_display(raw, 2),
        round_display(score, 2),
    );

    ScoreReport {
        score: HealthScore::Defined(score),
        explanation,
    }
}
