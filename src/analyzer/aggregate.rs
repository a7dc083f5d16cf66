use rust_decimal::Decimal;

use super::percent_of;
use crate::models::{BudgetInput, Category, ExpenseSlice};

/// Sum of the six expense categories. Savings are not an expense.
///
/// Amounts are non-negative, so an overflowing sum saturates at `Decimal::MAX`.
pub(crate) fn total_expenses(input: &BudgetInput) -> Decimal {
    Category::all()
        .iter()
        .filter(|c| c.is_expense())
        .map(|c| input.amount(*c))
        .fold(Decimal::ZERO, |acc, amount| {
            acc.checked_add(amount).unwrap_or(Decimal::MAX)
        })
}

/// What is left after expenses and savings. Negative when over budget,
/// saturating at `Decimal::MIN`.
pub(crate) fn discretionary_income(input: &BudgetInput) -> Decimal {
    input
        .income
        .checked_sub(total_expenses(input))
        .and_then(|rest| rest.checked_sub(input.savings))
        .unwrap_or(Decimal::MIN)
}

/// Per-category series for the expense breakdown chart.
pub(crate) fn expense_breakdown(input: &BudgetInput) -> Vec<ExpenseSlice> {
    let total = total_expenses(input);
    Category::expenses()
        .iter()
        .map(|c| {
            let amount = input.amount(*c);
            let share_percent = if total > Decimal::ZERO {
                Some(percent_of(amount, total))
            } else {
                None
            };
            ExpenseSlice {
                category: *c,
                amount,
                share_percent,
            }
        })
        .collect()
}
