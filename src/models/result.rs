use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::Category;
use crate::error::{AnalysisError, AnalysisResult};

/// Round half away from zero to `dp` places before formatting, since
/// `{:.2}` on a `Decimal` truncates. Never yields `-0`.
pub fn round_display(value: Decimal, dp: u32) -> Decimal {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    }
}

/// Why a health score could not be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndefinedReason {
    /// Income, savings and expenses are all zero.
    InsufficientData,
    /// Income is zero but savings or expenses are not.
    ZeroIncome,
}

impl UndefinedReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InsufficientData => "insufficient data",
            Self::ZeroIncome => "income is zero",
        }
    }
}

impl std::fmt::Display for UndefinedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthScore {
    /// Always within `[1, 100]`.
    Defined(Decimal),
    Undefined(UndefinedReason),
}

impl HealthScore {
    pub fn is_defined(&self) -> bool {
        matches!(self, Self::Defined(_))
    }

    /// The numeric score, or `UndefinedScore` for the caller to surface.
    pub fn require(&self) -> AnalysisResult<Decimal> {
        match self {
            Self::Defined(v) => Ok(*v),
            Self::Undefined(reason) => Err(AnalysisError::UndefinedScore(*reason)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreReport {
    pub score: HealthScore,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SavingsProjection {
    pub predicted: f64,
    pub explanation: String,
}

impl SavingsProjection {
    /// Predicted value rounded to cents, or `None` when it is not finite or
    /// does not fit in a `Decimal`.
    pub fn predicted_amount(&self) -> Option<Decimal> {
        Decimal::from_f64(self.predicted).map(|v| round_display(v, 2))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryAllocation {
    pub category: Category,
    pub recommended_percent: Decimal,
    pub actual_percent: Decimal,
}

impl CategoryAllocation {
    /// Actual minus recommended, in percentage points.
    pub fn variance(&self) -> Decimal {
        self.actual_percent - self.recommended_percent
    }

    pub fn is_over(&self) -> bool {
        self.actual_percent > self.recommended_percent
    }
}

/// One slice of the expense breakdown chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseSlice {
    pub category: Category,
    pub amount: Decimal,
    /// Share of total expenses; `None` when nothing was spent.
    pub share_percent: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetResult {
    pub total_expenses: Decimal,
    pub discretionary_income: Decimal,
    pub health: ScoreReport,
    pub projection: SavingsProjection,
    /// Only produced when the health score is defined (income > 0).
    pub goal_recommendation: Option<String>,
    /// Only produced when the health score is defined (income > 0).
    pub category_allocation: Option<Vec<CategoryAllocation>>,
    pub expense_breakdown: Vec<ExpenseSlice>,
}
