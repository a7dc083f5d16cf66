use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;

use crate::models::{round_display, BudgetResult, CategoryAllocation, HealthScore};
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, format_percent, format_points, format_share, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let Some(result) = &app.result else {
        let msg = app
            .analysis_error
            .as_deref()
            .unwrap_or("No analysis yet. Fill in the budget and press a");
        render_empty(f, area, msg);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Summary cards
            Constraint::Length(7), // Explanations
            Constraint::Min(10),   // Allocation table + chart
        ])
        .split(area);

    render_summary_cards(f, chunks[0], result);
    render_explanations(f, chunks[1], result);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[2]);

    render_allocation_table(f, bottom[0], result);
    render_expense_chart(f, bottom[1], result);
}

fn titled_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(format!(" {title} "), theme::title_style()))
}

fn render_empty(f: &mut Frame, area: Rect, msg: &str) {
    let text = Paragraph::new(Line::from(Span::styled(msg.to_string(), theme::dim_style())))
        .centered()
        .block(titled_block("Analysis"));
    f.render_widget(text, area);
}

fn render_summary_cards(f: &mut Frame, area: Rect, result: &BudgetResult) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    render_card(
        f,
        cards[0],
        "Total Expenses",
        format_amount(result.total_expenses),
        theme::RED,
    );
    render_card(
        f,
        cards[1],
        "Discretionary",
        format_amount(result.discretionary_income),
        theme::signed_color(result.discretionary_income),
    );

    let (score_text, score_color) = match result.health.score {
        HealthScore::Defined(score) => (
            format!("{:.2} / 100", round_display(score, 2)),
            theme::score_color(score),
        ),
        HealthScore::Undefined(reason) => (format!("N/A ({reason})"), theme::RED),
    };
    render_card(f, cards[2], "Health Score", score_text, score_color);

    let (projected_text, projected_color) = match result.projection.predicted_amount() {
        Some(projected) => (format_amount(projected), theme::signed_color(projected)),
        None => ("N/A (out of range)".to_string(), theme::RED),
    };
    render_card(
        f,
        cards[3],
        "Next Month Savings",
        projected_text,
        projected_color,
    );
}

fn render_card(f: &mut Frame, area: Rect, title: &str, display: String, color: Color) {
    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            display,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ])
    .centered()
    .block(titled_block(title));

    f.render_widget(text, area);
}

fn render_explanations(f: &mut Frame, area: Rect, result: &BudgetResult) {
    let score_style = if result.health.score.is_defined() {
        theme::normal_style()
    } else {
        Style::default().fg(theme::RED).add_modifier(Modifier::BOLD)
    };

    let mut lines = vec![
        Line::from(Span::styled(result.health.explanation.clone(), score_style)),
        Line::from(Span::styled(
            result.projection.explanation.clone(),
            theme::normal_style(),
        )),
    ];
    if let Some(goal) = &result.goal_recommendation {
        lines.push(Line::from(Span::styled(
            goal.clone(),
            Style::default().fg(theme::YELLOW),
        )));
    }

    let text = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(titled_block("Summary"));
    f.render_widget(text, area);
}

fn render_allocation_table(f: &mut Frame, area: Rect, result: &BudgetResult) {
    let Some(allocations) = &result.category_allocation else {
        let msg = Paragraph::new(Line::from(Span::styled(
            "Allocation comparison needs a non-zero income",
            theme::dim_style(),
        )))
        .centered()
        .block(titled_block("Recommended vs Actual"));
        f.render_widget(msg, area);
        return;
    };

    let header = Row::new(vec!["Category", "Recommended", "Actual", "Difference"])
        .style(theme::header_style())
        .height(1);

    let rows: Vec<Row> = allocations
        .iter()
        .enumerate()
        .map(|(i, alloc)| allocation_row(i, alloc))
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(16),
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Min(12),
        ],
    )
    .header(header)
    .block(titled_block("Recommended vs Actual"));

    f.render_widget(table, area);
}

fn allocation_row(i: usize, alloc: &CategoryAllocation) -> Row<'static> {
    let style = if i % 2 == 0 {
        theme::alt_row_style()
    } else {
        theme::normal_style()
    };
    // Saving more than recommended is good; spending more is not.
    let over_is_bad = alloc.category.is_expense();
    let diff_color = if alloc.is_over() == over_is_bad && !alloc.variance().is_zero() {
        theme::RED
    } else {
        theme::GREEN
    };

    Row::new(vec![
        Cell::from(alloc.category.as_str()),
        Cell::from(format_percent(alloc.recommended_percent)),
        Cell::from(format_percent(alloc.actual_percent)),
        Cell::from(Span::styled(
            format_points(alloc.variance()),
            Style::default().fg(diff_color),
        )),
    ])
    .style(style)
}

fn render_expense_chart(f: &mut Frame, area: Rect, result: &BudgetResult) {
    if result.total_expenses.is_zero() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "No expenses entered",
            theme::dim_style(),
        )))
        .centered()
        .block(titled_block("Monthly Expense Breakdown"));
        f.render_widget(msg, area);
        return;
    }

    let bars: Vec<Bar> = result
        .expense_breakdown
        .iter()
        .map(|slice| {
            let val = slice.amount.round().to_u64().unwrap_or(0);
            let share = slice
                .share_percent
                .map(format_share)
                .unwrap_or_default();
            Bar::default()
                .value(val)
                .label(Line::from(truncate(slice.category.as_str(), 8)))
                .text_value(share)
                .style(Style::default().fg(theme::ACCENT))
                .value_style(
                    Style::default()
                        .fg(theme::HEADER_BG)
                        .bg(theme::ACCENT)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(titled_block("Monthly Expense Breakdown"))
        .data(BarGroup::default().bars(&bars))
        .bar_width(8)
        .bar_gap(1)
        .bar_style(Style::default().fg(theme::ACCENT))
        .value_style(Style::default().fg(theme::TEXT));

    f.render_widget(chart, area);
}
