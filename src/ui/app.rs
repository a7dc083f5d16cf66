use anyhow::Result;
use rust_decimal::Decimal;

use crate::analyzer::BudgetAnalyzer;
use crate::models::{round_display, BudgetInput, BudgetResult, InputField};

use super::util::parse_amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Budget,
    Analysis,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Budget, Self::Analysis]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Budget => write!(f, "Budget"),
            Self::Analysis => write!(f, "Analysis"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Editing,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Editing => write!(f, "EDIT"),
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) edit_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    // Form
    pub(crate) input: BudgetInput,
    pub(crate) field_index: usize,

    // Analysis
    pub(crate) analyzer: BudgetAnalyzer,
    pub(crate) result: Option<BudgetResult>,
    pub(crate) analysis_error: Option<String>,
}

impl App {
    pub(crate) fn new(analyzer: BudgetAnalyzer) -> Self {
        Self {
            running: true,
            screen: Screen::Budget,
            input_mode: InputMode::Normal,
            edit_input: String::new(),
            status_message: String::new(),
            show_help: false,

            input: BudgetInput::default(),
            field_index: 0,

            analyzer,
            result: None,
            analysis_error: None,
        }
    }

    pub(crate) fn selected_field(&self) -> InputField {
        let fields = InputField::all();
        fields[self.field_index.min(fields.len() - 1)]
    }

    pub(crate) fn move_down(&mut self) {
        if self.field_index + 1 < InputField::all().len() {
            self.field_index += 1;
        }
    }

    pub(crate) fn move_up(&mut self) {
        self.field_index = self.field_index.saturating_sub(1);
    }

    /// Start editing the selected field, pre-filled with its current value.
    pub(crate) fn begin_edit(&mut self) {
        let value = self.input.get(self.selected_field());
        self.edit_input = if value.is_zero() {
            String::new()
        } else {
            value.normalize().to_string()
        };
        self.status_message.clear();
        self.input_mode = InputMode::Editing;
    }

    /// Parse the edit buffer into the selected field. The buffer is kept on
    /// error so the user can fix it.
    pub(crate) fn commit_edit(&mut self) -> Result<()> {
        let field = self.selected_field();
        let value = parse_amount(&self.edit_input)?;
        self.input.set(field, value);
        self.edit_input.clear();
        self.input_mode = InputMode::Normal;
        self.set_status(format!("{field} set to {value}"));
        Ok(())
    }

    pub(crate) fn cancel_edit(&mut self) {
        self.edit_input.clear();
        self.input_mode = InputMode::Normal;
        self.set_status("Edit cancelled");
    }

    /// Step the selected field up or down by its increment, never below zero.
    pub(crate) fn adjust_field(&mut self, delta: i64) {
        let field = self.selected_field();
        let current = self.input.get(field);
        let step = field.step() * Decimal::from(delta);
        let next = current
            .checked_add(step)
            .unwrap_or(Decimal::MAX)
            .max(Decimal::ZERO);
        self.input.set(field, next);
    }

    pub(crate) fn analyze(&mut self) {
        match self.analyzer.analyze(&self.input) {
            Ok(result) => {
                self.status_message = match result.health.score.require() {
                    Ok(score) => format!(
                        "Analysis complete: health score {:.2}",
                        round_display(score, 2)
                    ),
                    Err(e) => e.to_string(),
                };
                self.result = Some(result);
                self.analysis_error = None;
            }
            Err(e) => {
                self.result = None;
                self.analysis_error = Some(e.to_string());
                self.set_status(format!("Error: {e}"));
            }
        }
        self.screen = Screen::Analysis;
    }

    pub(crate) fn reset(&mut self) {
        self.input = BudgetInput::default();
        self.field_index = 0;
        self.result = None;
        self.analysis_error = None;
        self.screen = Screen::Budget;
        self.set_status("Form cleared");
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod app_tests;
