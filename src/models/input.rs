use rust_decimal::Decimal;

use super::Category;

/// One of the eight numeric fields the budget form collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Income,
    Rent,
    Groceries,
    Transportation,
    Entertainment,
    Savings,
    Debt,
    OtherExpenses,
}

impl InputField {
    pub fn all() -> &'static [InputField] {
        &[
            Self::Income,
            Self::Rent,
            Self::Groceries,
            Self::Transportation,
            Self::Entertainment,
            Self::Savings,
            Self::Debt,
            Self::OtherExpenses,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Monthly income",
            Self::Rent => "Rent or mortgage",
            Self::Groceries => "Groceries",
            Self::Transportation => "Transportation",
            Self::Entertainment => "Entertainment",
            Self::Savings => "Monthly savings",
            Self::Debt => "Debt payments",
            Self::OtherExpenses => "Other expenses",
        }
    }

    /// Command-line flag name, without the leading `--`.
    pub fn flag(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Rent => "rent",
            Self::Groceries => "groceries",
            Self::Transportation => "transportation",
            Self::Entertainment => "entertainment",
            Self::Savings => "savings",
            Self::Debt => "debt",
            Self::OtherExpenses => "other",
        }
    }

    pub fn from_flag(flag: &str) -> Option<Self> {
        Self::all().iter().copied().find(|f| f.flag() == flag)
    }

    /// Increment used by the form's +/- keys.
    pub fn step(&self) -> Decimal {
        match self {
            Self::Income => Decimal::from(100),
            Self::Rent => Decimal::from(50),
            _ => Decimal::from(10),
        }
    }

    pub fn category(&self) -> Option<Category> {
        match self {
            Self::Income => None,
            Self::Rent => Some(Category::Rent),
            Self::Groceries => Some(Category::Groceries),
            Self::Transportation => Some(Category::Transportation),
            Self::Entertainment => Some(Category::Entertainment),
            Self::Savings => Some(Category::Savings),
            Self::Debt => Some(Category::Debt),
            Self::OtherExpenses => Some(Category::Other),
        }
    }
}

impl std::fmt::Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Monthly figures for a single analysis. All amounts must be non-negative.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BudgetInput {
    pub income: Decimal,
    pub rent: Decimal,
    pub groceries: Decimal,
    pub transportation: Decimal,
    pub entertainment: Decimal,
    pub savings: Decimal,
    pub debt: Decimal,
    pub other_expenses: Decimal,
}

impl BudgetInput {
    pub fn get(&self, field: InputField) -> Decimal {
        match field {
            InputField::Income => self.income,
            InputField::Rent => self.rent,
            InputField::Groceries => self.groceries,
            InputField::Transportation => self.transportation,
            InputField::Entertainment => self.entertainment,
            InputField::Savings => self.savings,
            InputField::Debt => self.debt,
            InputField::OtherExpenses => self.other_expenses,
        }
    }

    pub fn set(&mut self, field: InputField, value: Decimal) {
        let slot = match field {
            InputField::Income => &mut self.income,
            InputField::Rent => &mut self.rent,
            InputField::Groceries => &mut self.groceries,
            InputField::Transportation => &mut self.transportation,
            InputField::Entertainment => &mut self.entertainment,
            InputField::Savings => &mut self.savings,
            InputField::Debt => &mut self.debt,
            InputField::OtherExpenses => &mut self.other_expenses,
        };
        *slot = value;
    }

    pub fn amount(&self, category: Category) -> Decimal {
        match category {
            Category::Rent => self.rent,
            Category::Groceries => self.groceries,
            Category::Transportation => self.transportation,
            Category::Entertainment => self.entertainment,
            Category::Savings => self.savings,
            Category::Debt => self.debt,
            Category::Other => self.other_expenses,
        }
    }
}
