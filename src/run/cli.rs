use anyhow::{Context, Result};
use tracing::info;

use crate::analyzer::BudgetAnalyzer;
use crate::models::{round_display, BudgetInput, BudgetResult, HealthScore, InputField};
use crate::ui::util::{format_amount, format_percent, format_points, format_share, parse_amount};

pub(crate) fn as_cli(args: &[String]) -> Result<()> {
    match args[1].as_str() {
        "analyze" | "a" => cli_analyze(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("budgetcalc {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("BudgetCalc - single-session personal budgeting calculator");
    println!();
    println!("Usage: budgetcalc [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  analyze [flags]               Analyze a monthly budget and print the report");
    for field in InputField::all() {
        let flag = format!("--{} <amount>", field.flag());
        println!("    {flag:<26}{} (default: 0)", field.label());
    }
    println!("    {:<26}Fix the goal suggestion for repeatable output", "--seed <n>");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Set BUDGETCALC_LOG=debug to see analysis logs on stderr.");
}

/// Flags accepted by `analyze`.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct AnalyzeArgs {
    pub(crate) input: BudgetInput,
    pub(crate) seed: Option<u64>,
}

pub(crate) fn parse_analyze_args(args: &[String]) -> Result<AnalyzeArgs> {
    let mut parsed = AnalyzeArgs::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let name = arg
            .strip_prefix("--")
            .ok_or_else(|| anyhow::anyhow!("Unexpected argument: {arg}"))?;
        let value = iter
            .next()
            .ok_or_else(|| anyhow::anyhow!("Missing value for --{name}"))?;

        if name == "seed" {
            let seed = value
                .parse::<u64>()
                .with_context(|| format!("Invalid seed: {value}"))?;
            parsed.seed = Some(seed);
            continue;
        }

        let field = InputField::from_flag(name)
            .ok_or_else(|| anyhow::anyhow!("Unknown flag: --{name}"))?;
        let amount = parse_amount(value).with_context(|| format!("Invalid value for --{name}"))?;
        parsed.input.set(field, amount);
    }

    Ok(parsed)
}

fn cli_analyze(args: &[String]) -> Result<()> {
    let parsed = parse_analyze_args(args)?;
    let mut analyzer = match parsed.seed {
        Some(seed) => BudgetAnalyzer::with_seed(seed),
        None => BudgetAnalyzer::new(),
    };

    let result = analyzer.analyze(&parsed.input)?;
    info!(income = %parsed.input.income, "analysis complete");
    print!("{}", format_report(&result));
    Ok(())
}

/// Plain-text rendering of an analysis, in the order the TUI shows it.
pub(crate) fn format_report(result: &BudgetResult) -> String {
    let mut out = String::new();
    let rule = "─".repeat(56);

    out.push_str("Budget Analysis Summary\n");
    out.push_str(&format!("{rule}\n"));
    out.push_str(&format!(
        "  Total Expenses:        {}\n",
        format_amount(result.total_expenses)
    ));
    out.push_str(&format!(
        "  Discretionary Income:  {}\n",
        format_amount(result.discretionary_income)
    ));

    out.push('\n');
    match result.health.score {
        HealthScore::Defined(score) => {
            out.push_str(&format!(
                "Financial Health Score: {:.2} / 100\n",
                round_display(score, 2)
            ));
            out.push_str(&format!("  {}\n", result.health.explanation));
        }
        HealthScore::Undefined(_) => {
            if let Err(e) = result.health.score.require() {
                out.push_str(&format!("Financial Health Score: {e}\n"));
            }
        }
    }

    out.push('\n');
    out.push_str(&format!("{}\n", result.projection.explanation));

    if let Some(goal) = &result.goal_recommendation {
        out.push('\n');
        out.push_str(&format!("{goal}\n"));
    }

    if let Some(allocations) = &result.category_allocation {
        out.push('\n');
        out.push_str("Recommended vs Actual Allocation:\n");
        out.push_str(&format!(
            "  {:<16} {:>12} {:>10} {:>12}\n",
            "Category", "Recommended", "Actual", "Difference"
        ));
        for alloc in allocations {
            out.push_str(&format!(
                "  {:<16} {:>12} {:>10} {:>12}\n",
                alloc.category.as_str(),
                format_percent(alloc.recommended_percent),
                format_percent(alloc.actual_percent),
                format_points(alloc.variance()),
            ));
        }
    }

    out.push('\n');
    out.push_str("Monthly Expense Breakdown:\n");
    for slice in &result.expense_breakdown {
        let share = slice
            .share_percent
            .map(format_share)
            .unwrap_or_else(|| "-".into());
        out.push_str(&format!(
            "  {:<16} {:>14} {:>7}\n",
            slice.category.as_str(),
            format_amount(slice.amount),
            share
        ));
    }

    out
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
