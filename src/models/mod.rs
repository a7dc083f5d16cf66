mod category;
mod input;
mod result;

pub use category::Category;
pub use input::{BudgetInput, InputField};
pub use result::{
    round_display, BudgetResult, CategoryAllocation, ExpenseSlice, HealthScore, SavingsProjection, ScoreReport,
    UndefinedReason,
};
