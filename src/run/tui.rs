use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::analyzer::BudgetAnalyzer;
use crate::ui::app::{App, InputMode, Screen};

pub(crate) fn as_tui() -> Result<()> {
    let mut app = App::new(BudgetAnalyzer::new());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| crate::ui::render::render(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app),
                InputMode::Editing => handle_editing_input(key, app),
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.screen = Screen::Budget;
            app.move_down();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.screen = Screen::Budget;
            app.move_up();
        }
        KeyCode::Char('1') => app.screen = Screen::Budget,
        KeyCode::Char('2') => app.screen = Screen::Analysis,
        KeyCode::Tab | KeyCode::BackTab => {
            // Two screens, so forward and back are the same move
            app.screen = match app.screen {
                Screen::Budget => Screen::Analysis,
                Screen::Analysis => Screen::Budget,
            };
        }
        KeyCode::Char('e') | KeyCode::Enter if app.screen == Screen::Budget => {
            app.begin_edit();
        }
        KeyCode::Char('+') | KeyCode::Char('=') if app.screen == Screen::Budget => {
            app.adjust_field(1);
        }
        KeyCode::Char('-') if app.screen == Screen::Budget => app.adjust_field(-1),
        KeyCode::Char('a') => app.analyze(),
        KeyCode::Char('r') => app.reset(),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Esc => app.status_message.clear(),
        _ => {}
    }
}

fn handle_editing_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => {
            if let Err(e) = app.commit_edit() {
                app.set_status(format!("Error: {e}"));
            }
        }
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Backspace => {
            app.edit_input.pop();
        }
        KeyCode::Tab | KeyCode::Down => match app.commit_edit() {
            Ok(()) => {
                app.move_down();
                app.begin_edit();
            }
            Err(e) => app.set_status(format!("Error: {e}")),
        },
        KeyCode::Char(c) if c.is_ascii_digit() || matches!(c, '.' | ',' | '$') => {
            app.edit_input.push(c);
        }
        _ => {}
    }
}
