use rust_decimal::Decimal;

use super::percent_of;
use crate::error::{AnalysisError, AnalysisResult};
use crate::models::{BudgetInput, Category, CategoryAllocation};

/// Recommended vs. actual share of income for every category.
///
/// Income must be positive.
pub(crate) fn compare_allocations(input: &BudgetInput) -> AnalysisResult<Vec<CategoryAllocation>> {
    if input.income <= Decimal::ZERO {
        return Err(AnalysisError::DivisionUndefined {
            operation: "allocation comparison",
        });
    }

    Ok(Category::all()
        .iter()
        .map(|c| CategoryAllocation {
            category: *c,
            recommended_percent: c.recommended_percent(),
            actual_percent: percent_of(input.amount(*c), input.income),
        })
        .collect())
}
