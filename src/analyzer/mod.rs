mod aggregate;
mod allocation;
mod goals;
mod projection;
mod score;

pub(crate) use aggregate::{discretionary_income, expense_breakdown, total_expenses};
pub(crate) use allocation::compare_allocations;
pub(crate) use goals::recommend_goal;
pub(crate) use projection::project_next_month;
pub(crate) use score::health_score;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::{AnalysisError, AnalysisResult};
use crate::models::{BudgetInput, BudgetResult, InputField};

/// Runs every budget computation over a single input.
///
/// The only state carried between calls is the random source used to pick
/// goal suggestions.
pub(crate) struct BudgetAnalyzer {
    rng: StdRng,
}

impl BudgetAnalyzer {
    pub(crate) fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Analyzer whose goal suggestions are reproducible.
    pub(crate) fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub(crate) fn analyze(&mut self, input: &BudgetInput) -> AnalysisResult<BudgetResult> {
        validate(input)?;

        let total = total_expenses(input);
        let discretionary = discretionary_income(input);
        let health = health_score(input.income, input.savings, total);
        let projection = project_next_month(input.savings)?;

        let (goal_recommendation, category_allocation) = if health.score.is_defined() {
            (
                Some(recommend_goal(
                    input.income,
                    input.savings,
                    total,
                    &mut self.rng,
                )?),
                Some(compare_allocations(input)?),
            )
        } else {
            (None, None)
        };

        debug!(
            income = %input.income,
            total_expenses = %total,
            discretionary = %discretionary,
            score = ?health.score,
            projected = projection.predicted,
            "budget analyzed"
        );

        Ok(BudgetResult {
            total_expenses: total,
            discretionary_income: discretionary,
            health,
            projection,
            goal_recommendation,
            category_allocation,
            expense_breakdown: expense_breakdown(input),
        })
    }
}

/// Reject any negative field before computing anything.
pub(crate) fn validate(input: &BudgetInput) -> AnalysisResult<()> {
    for field in InputField::all() {
        let value = input.get(*field);
        if value < Decimal::ZERO {
            warn!(field = field.flag(), %value, "rejected negative input");
            return Err(AnalysisError::InvalidInput {
                field: field.label(),
                value,
            });
        }
    }
    Ok(())
}

/// `part / whole * 100`, saturating at `Decimal::MAX` instead of overflowing.
/// Callers guarantee `whole > 0`.
fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    ratio(part, whole)
        .checked_mul(Decimal::ONE_HUNDRED)
        .unwrap_or(Decimal::MAX)
}

/// `part / whole`, saturating at `Decimal::MAX` instead of overflowing.
fn ratio(part: Decimal, whole: Decimal) -> Decimal {
    part.checked_div(whole).unwrap_or(Decimal::MAX)
}

#[cfg(test)]
mod tests;
