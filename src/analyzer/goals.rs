use rand::Rng;
use rust_decimal::Decimal;

use super::ratio;
use crate::error::{AnalysisError, AnalysisResult};

pub(crate) const GOAL_CATALOG: [&str; 5] = [
    "Build an emergency fund that covers three to six months of expenses.",
    "Pay down your highest-interest debt before taking on new spending.",
    "Automate a transfer of 10% of every paycheck into savings.",
    "Cancel one recurring subscription and redirect that money to savings.",
    "Start or increase contributions to a retirement account.",
];

const LOW_SAVINGS_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);
const HIGH_SPENDING_RATE: Decimal = Decimal::from_parts(70, 0, 0, false, 2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GoalTier {
    LowSavings,
    HighSpending,
    OnTrack,
}

impl GoalTier {
    pub(crate) fn prefix(&self) -> &'static str {
        match self {
            Self::LowSavings => "Your savings rate is low!",
            Self::HighSpending => "You're spending a high percentage of your income!",
            Self::OnTrack => "You're on a great track! Consider this goal:",
        }
    }
}

/// Which message prefix applies. Savings below 10% of income wins over
/// expenses above 70%.
///
/// Income must be positive.
pub(crate) fn goal_tier(
    income: Decimal,
    savings: Decimal,
    total_expenses: Decimal,
) -> AnalysisResult<GoalTier> {
    if income <= Decimal::ZERO {
        return Err(AnalysisError::DivisionUndefined {
            operation: "goal recommendation",
        });
    }
    let tier = if ratio(savings, income) < LOW_SAVINGS_RATE {
        GoalTier::LowSavings
    } else if ratio(total_expenses, income) > HIGH_SPENDING_RATE {
        GoalTier::HighSpending
    } else {
        GoalTier::OnTrack
    };
    Ok(tier)
}

/// Tier prefix followed by a goal drawn uniformly from [`GOAL_CATALOG`].
///
/// Income must be positive.
pub(crate) fn recommend_goal<R: Rng + ?Sized>(
    income: Decimal,
    savings: Decimal,
    total_expenses: Decimal,
    rng: &mut R,
) -> AnalysisResult<String> {
    let tier = goal_tier(income, savings, total_expenses)?;
    let goal = GOAL_CATALOG[rng.random_range(0..GOAL_CATALOG.len())];
    Ok(format!("{} {goal}", tier.prefix()))
}

#[cfg(test)]
#[path = "goals_tests.rs"]
mod goals_tests;
