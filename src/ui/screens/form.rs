use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::models::InputField;
use crate::ui::app::{App, InputMode};
use crate::ui::theme;
use crate::ui::util::{format_amount, format_percent};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let header = Row::new(vec!["Field", "Amount", "Step", "Recommended"])
        .style(theme::header_style())
        .height(1);

    let rows: Vec<Row> = InputField::all()
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let editing = i == app.field_index && app.input_mode == InputMode::Editing;
            let amount = if editing {
                format!("{}_", app.edit_input)
            } else {
                format_amount(app.input.get(*field))
            };
            let recommended = field
                .category()
                .map(|c| format!("{} of income", format_percent(c.recommended_percent())))
                .unwrap_or_default();

            let style = if i == app.field_index {
                theme::selected_style()
            } else if i % 2 == 0 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(field.label()),
                Cell::from(amount),
                Cell::from(format!("±{}", field.step())),
                Cell::from(recommended),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(20),
            Constraint::Length(18),
            Constraint::Length(8),
            Constraint::Min(16),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                " Monthly Budget ",
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );

    f.render_widget(table, area);
}
