#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::goals::{GoalTier, GOAL_CATALOG};
use super::*;
use crate::models::{Category, HealthScore, UndefinedReason};

fn make_input() -> BudgetInput {
    BudgetInput {
        income: dec!(5000),
        rent: dec!(1500),
        groceries: dec!(600),
        transportation: dec!(300),
        entertainment: dec!(200),
        savings: dec!(1000),
        debt: dec!(250),
        other_expenses: dec!(150),
    }
}

// ── validate ──────────────────────────────────────────────────

#[test]
fn test_validate_accepts_zeroes() {
    assert!(validate(&BudgetInput::default()).is_ok());
    assert!(validate(&make_input()).is_ok());
}

#[test]
fn test_validate_rejects_negative_field() {
    let input = BudgetInput {
        groceries: dec!(-0.01),
        ..make_input()
    };
    assert_eq!(
        validate(&input),
        Err(AnalysisError::InvalidInput {
            field: "Groceries",
            value: dec!(-0.01),
        })
    );
}

#[test]
fn test_validate_rejects_negative_income() {
    let input = BudgetInput {
        income: dec!(-1),
        ..BudgetInput::default()
    };
    assert!(matches!(
        validate(&input),
        Err(AnalysisError::InvalidInput { field: "Monthly income", .. })
    ));
}

// ── aggregation ───────────────────────────────────────────────

#[test]
fn test_total_expenses_excludes_savings() {
    assert_eq!(total_expenses(&make_input()), dec!(3000));
}

#[test]
fn test_total_expenses_zero() {
    assert_eq!(total_expenses(&BudgetInput::default()), Decimal::ZERO);
}

#[test]
fn test_total_expenses_is_exact_sum() {
    let input = BudgetInput {
        rent: dec!(0.1),
        groceries: dec!(0.2),
        transportation: dec!(0.3),
        entertainment: dec!(0.4),
        debt: dec!(0.5),
        other_expenses: dec!(0.6),
        ..BudgetInput::default()
    };
    assert_eq!(total_expenses(&input), dec!(2.1));
}

#[test]
fn test_discretionary_income() {
    assert_eq!(discretionary_income(&make_input()), dec!(1000));
}

#[test]
fn test_discretionary_income_negative_when_over_budget() {
    let input = BudgetInput {
        income: dec!(2000),
        ..make_input()
    };
    assert_eq!(discretionary_income(&input), dec!(-2000));
}

fn huge(units: i128) -> Decimal {
    Decimal::from_i128_with_scale(units * 10_000_000_000_000_000_000_000_000_000, 0)
}

#[test]
fn test_total_expenses_saturates_on_overflow() {
    let input = BudgetInput {
        rent: huge(5),
        groceries: huge(5),
        ..BudgetInput::default()
    };
    assert_eq!(total_expenses(&input), Decimal::MAX);
    assert_eq!(discretionary_income(&input), Decimal::MIN);
}

#[test]
fn test_discretionary_income_saturates_on_overflow() {
    let input = BudgetInput {
        rent: huge(7),
        savings: huge(7),
        ..BudgetInput::default()
    };
    assert_eq!(total_expenses(&input), huge(7));
    assert_eq!(discretionary_income(&input), Decimal::MIN);
}

#[test]
fn test_expense_breakdown_series() {
    let slices = expense_breakdown(&make_input());
    assert_eq!(slices.len(), 6);
    assert_eq!(slices[0].category, Category::Rent);
    assert_eq!(slices[0].amount, dec!(1500));
    assert_eq!(slices[0].share_percent, Some(dec!(50)));
    assert!(slices.iter().all(|s| s.category != Category::Savings));

    let share_total: Decimal = slices.iter().filter_map(|s| s.share_percent).sum();
    assert!((share_total - dec!(100)).abs() < dec!(0.0001));
}

#[test]
fn test_expense_breakdown_no_spending() {
    let slices = expense_breakdown(&BudgetInput::default());
    assert_eq!(slices.len(), 6);
    assert!(slices.iter().all(|s| s.share_percent.is_none()));
}

// ── health_score ──────────────────────────────────────────────

#[test]
fn test_score_worked_example() {
    let report = health_score(dec!(5000), dec!(1000), dec!(3000));
    assert_eq!(report.score, HealthScore::Defined(dec!(42)));
    assert!(report.explanation.contains("20.00"));
    assert!(report.explanation.contains("60.00"));
    assert!(report.explanation.contains("42.00"));
}

#[test]
fn test_score_explanation_rounds_repeating_ratios() {
    let report = health_score(dec!(3), dec!(1), dec!(1));
    let score = report.score.require().unwrap();
    assert_eq!(score.round_dp(2), dec!(56.67));
    assert!(
        report.explanation.contains("(33.33 × 0.5) − (33.33 × 0.3) + 50"),
        "{}",
        report.explanation
    );
    assert!(
        report.explanation.contains("= 56.67, clamped to [1, 100] = 56.67"),
        "{}",
        report.explanation
    );
}

#[test]
fn test_score_insufficient_data() {
    let report = health_score(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO);
    assert_eq!(
        report.score,
        HealthScore::Undefined(UndefinedReason::InsufficientData)
    );
    assert!(report.explanation.contains("insufficient data"));
}

#[test]
fn test_score_zero_income() {
    let report = health_score(Decimal::ZERO, dec!(100), Decimal::ZERO);
    assert_eq!(report.score, HealthScore::Undefined(UndefinedReason::ZeroIncome));
    assert!(report.explanation.contains("income is zero"));

    let report = health_score(Decimal::ZERO, Decimal::ZERO, dec!(100));
    assert_eq!(report.score, HealthScore::Undefined(UndefinedReason::ZeroIncome));
}

#[test]
fn test_score_clamped_to_floor_of_one() {
    // expenses at 500% of income: raw = 0 - 150 + 50 = -100
    let report = health_score(dec!(1000), Decimal::ZERO, dec!(5000));
    assert_eq!(report.score, HealthScore::Defined(dec!(1)));
    assert!(report.explanation.contains("-100.00"));
    assert!(report.explanation.contains("= 1.00"));
}

#[test]
fn test_score_never_exactly_zero() {
    // raw = 0 - 50 + 50 = 0 before clamping
    let report = health_score(dec!(3000), Decimal::ZERO, dec!(5000));
    assert_eq!(report.score, HealthScore::Defined(dec!(1)));
}

#[test]
fn test_score_clamped_to_ceiling() {
    // savings at 200% of income: raw = 100 - 0 + 50 = 150
    let report = health_score(dec!(1000), dec!(2000), Decimal::ZERO);
    assert_eq!(report.score, HealthScore::Defined(dec!(100)));
}

#[test]
fn test_score_always_in_range() {
    let amounts = [dec!(0), dec!(0.01), dec!(1), dec!(250), dec!(1000), dec!(99999.99)];
    for income in amounts.iter().filter(|i| !i.is_zero()) {
        for savings in &amounts {
            for expenses in &amounts {
                let score = health_score(*income, *savings, *expenses)
                    .score
                    .require()
                    .unwrap();
                assert!(
                    score >= dec!(1) && score <= dec!(100),
                    "{income}/{savings}/{expenses} -> {score}"
                );
            }
        }
    }
}

#[test]
fn test_score_tiny_income_saturates() {
    let report = health_score(dec!(0.0000000000000000000000000001), dec!(1000000), Decimal::ZERO);
    assert_eq!(report.score, HealthScore::Defined(dec!(100)));
}

// ── compare_allocations ───────────────────────────────────────

#[test]
fn test_allocations_actual_percent() {
    let allocations = compare_allocations(&make_input()).unwrap();
    assert_eq!(allocations.len(), 7);

    let rent = &allocations[0];
    assert_eq!(rent.category, Category::Rent);
    assert_eq!(rent.recommended_percent, dec!(30));
    assert_eq!(rent.actual_percent, dec!(30));

    let savings = allocations
        .iter()
        .find(|a| a.category == Category::Savings)
        .unwrap();
    assert_eq!(savings.recommended_percent, dec!(20));
    assert_eq!(savings.actual_percent, dec!(20));
}

#[test]
fn test_allocations_sum_to_100_when_income_fully_used() {
    let input = BudgetInput {
        income: dec!(3333),
        rent: dec!(1111),
        groceries: dec!(444),
        transportation: dec!(333),
        entertainment: dec!(111),
        savings: dec!(777),
        debt: dec!(222),
        other_expenses: dec!(335),
    };
    assert!(discretionary_income(&input).is_zero());

    let total: Decimal = compare_allocations(&input)
        .unwrap()
        .iter()
        .map(|a| a.actual_percent)
        .sum();
    assert!((total - dec!(100)).abs() < dec!(0.0001), "sum was {total}");
}

#[test]
fn test_allocations_zero_income_is_error() {
    let input = BudgetInput {
        income: Decimal::ZERO,
        ..make_input()
    };
    assert_eq!(
        compare_allocations(&input),
        Err(AnalysisError::DivisionUndefined {
            operation: "allocation comparison"
        })
    );
}

// ── BudgetAnalyzer ────────────────────────────────────────────

#[test]
fn test_analyze_full_result() {
    let mut analyzer = BudgetAnalyzer::with_seed(5);
    let result = analyzer.analyze(&make_input()).unwrap();

    assert_eq!(result.total_expenses, dec!(3000));
    assert_eq!(result.discretionary_income, dec!(1000));
    assert_eq!(result.health.score, HealthScore::Defined(dec!(42)));
    assert!((result.projection.predicted - (1200.0 + 400.0 / 11.0)).abs() < 1e-6);

    let goal = result.goal_recommendation.unwrap();
    assert!(goal.starts_with(GoalTier::OnTrack.prefix()));
    assert!(GOAL_CATALOG.iter().any(|g| goal.ends_with(g)));

    assert_eq!(result.category_allocation.unwrap().len(), 7);
    assert_eq!(result.expense_breakdown.len(), 6);
}

#[test]
fn test_analyze_zero_income_skips_goal_and_allocation() {
    let mut analyzer = BudgetAnalyzer::with_seed(5);
    let input = BudgetInput {
        savings: dec!(100),
        ..BudgetInput::default()
    };
    let result = analyzer.analyze(&input).unwrap();

    assert_eq!(
        result.health.score,
        HealthScore::Undefined(UndefinedReason::ZeroIncome)
    );
    assert!(result.goal_recommendation.is_none());
    assert!(result.category_allocation.is_none());
    assert_eq!(result.discretionary_income, dec!(-100));
}

#[test]
fn test_analyze_all_zero() {
    let mut analyzer = BudgetAnalyzer::new();
    let result = analyzer.analyze(&BudgetInput::default()).unwrap();
    assert_eq!(
        result.health.score.require(),
        Err(AnalysisError::UndefinedScore(UndefinedReason::InsufficientData))
    );
    assert_eq!(result.projection.predicted, 0.0);
}

#[test]
fn test_analyze_rejects_negative_input() {
    let mut analyzer = BudgetAnalyzer::with_seed(5);
    let input = BudgetInput {
        debt: dec!(-50),
        ..make_input()
    };
    assert!(matches!(
        analyzer.analyze(&input),
        Err(AnalysisError::InvalidInput { field: "Debt payments", .. })
    ));
}

#[test]
fn test_analyze_same_seed_is_reproducible() {
    let input = make_input();
    let first = BudgetAnalyzer::with_seed(11).analyze(&input).unwrap();
    let second = BudgetAnalyzer::with_seed(11).analyze(&input).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_analyze_near_decimal_max_does_not_overflow() {
    let mut analyzer = BudgetAnalyzer::with_seed(2);

    let result = analyzer
        .analyze(&BudgetInput {
            rent: huge(5),
            groceries: huge(5),
            ..BudgetInput::default()
        })
        .unwrap();
    assert_eq!(result.total_expenses, Decimal::MAX);

    let result = analyzer
        .analyze(&BudgetInput {
            rent: huge(7),
            savings: huge(7),
            ..BudgetInput::default()
        })
        .unwrap();
    assert_eq!(result.discretionary_income, Decimal::MIN);
    assert_eq!(result.projection.predicted_amount(), None);

    let result = analyzer
        .analyze(&BudgetInput {
            income: huge(7),
            rent: huge(7),
            groceries: huge(7),
            savings: huge(7),
            ..BudgetInput::default()
        })
        .unwrap();
    assert!(result.health.score.is_defined());
    assert_eq!(result.total_expenses, Decimal::MAX);
}
