use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Pane};

/// Handle a key event. Every cursor movement in the left pane is a selection
/// change and refreshes the task pane synchronously.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
        }
        KeyCode::Char('?') => {
            app.show_hints = !app.show_hints;
        }
        KeyCode::Tab => {
            app.focus = match app.focus {
                Pane::Lists => Pane::Tasks,
                Pane::Tasks => Pane::Lists,
            };
        }
        // Numeric shortcuts jump straight to the built-in views
        KeyCode::Char(c @ '0'..='5') => {
            app.select_shortcut(c as usize - '0' as usize);
        }
        KeyCode::Char('j') | KeyCode::Down => match app.focus {
            Pane::Lists => app.select_next(),
            Pane::Tasks => app.task_cursor_next(),
        },
        KeyCode::Char('k') | KeyCode::Up => match app.focus {
            Pane::Lists => app.select_prev(),
            Pane::Tasks => app.task_cursor_prev(),
        },
        KeyCode::Char('g') | KeyCode::Home => {
            if app.focus == Pane::Lists {
                app.select_first();
            } else {
                app.task_pane.cursor = 0;
            }
        }
        KeyCode::Char('G') | KeyCode::End => {
            if app.focus == Pane::Lists {
                app.select_last();
            } else {
                app.task_pane.cursor = app.task_pane.tasks.len().saturating_sub(1);
            }
        }
        _ => {}
    }
}
