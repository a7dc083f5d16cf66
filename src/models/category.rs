use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Rent,
    Groceries,
    Transportation,
    Entertainment,
    Savings,
    Debt,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rent => "Rent/Mortgage",
            Self::Groceries => "Groceries",
            Self::Transportation => "Transportation",
            Self::Entertainment => "Entertainment",
            Self::Savings => "Savings",
            Self::Debt => "Debt",
            Self::Other => "Other",
        }
    }

    /// Every category, in the order of the recommended allocation table.
    pub fn all() -> &'static [Category] {
        &[
            Self::Rent,
            Self::Groceries,
            Self::Transportation,
            Self::Entertainment,
            Self::Savings,
            Self::Debt,
            Self::Other,
        ]
    }

    /// The six categories that count toward total expenses, in chart order.
    pub fn expenses() -> &'static [Category] {
        &[
            Self::Rent,
            Self::Groceries,
            Self::Transportation,
            Self::Entertainment,
            Self::Debt,
            Self::Other,
        ]
    }

    pub fn is_expense(&self) -> bool {
        !matches!(self, Self::Savings)
    }

    /// Recommended share of monthly income, in percent. The table sums to 100.
    pub fn recommended_percent(&self) -> Decimal {
        let pct: i64 = match self {
            Self::Rent => 30,
            Self::Groceries => 15,
            Self::Transportation => 10,
            Self::Entertainment => 5,
            Self::Savings => 20,
            Self::Debt => 10,
            Self::Other => 10,
        };
        Decimal::from(pct)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
