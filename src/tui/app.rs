use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::data::{self, InMemorySource, LoadedData, UiState};
use crate::views::{self, ListEntry, TaskView};

use super::input;
use super::render;
use super::theme::Theme;

/// Which pane owns the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Lists,
    Tasks,
}

/// Right-pane display state. Updated only through [`App::display_selected`];
/// selecting a delimiter leaves it frozen at its last non-delimiter state.
#[derive(Debug, Clone)]
pub struct TaskPane {
    pub title: String,
    pub tasks: Vec<TaskView>,
    pub cursor: usize,
}

impl Default for TaskPane {
    fn default() -> Self {
        TaskPane {
            title: "Tasks".to_string(),
            tasks: Vec::new(),
            cursor: 0,
        }
    }
}

/// Main application state
pub struct App {
    pub source: InMemorySource,
    /// Directory holding lists.toml (None when running from seed data);
    /// anchors .state.json persistence
    pub data_dir: Option<PathBuf>,
    pub entries: Vec<ListEntry>,
    /// Left-pane cursor index
    pub cursor: usize,
    pub focus: Pane,
    pub task_pane: TaskPane,
    pub theme: Theme,
    pub should_quit: bool,
    /// Key hint row visible (toggled with ?)
    pub show_hints: bool,
}

impl App {
    pub fn new(data: LoadedData) -> Self {
        let theme = Theme::from_config(&data.ui);
        let entries = views::all_entries(&data.source);
        let data_dir = data
            .path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf);

        let mut app = App {
            source: data.source,
            data_dir,
            entries,
            cursor: 0,
            focus: Pane::Lists,
            task_pane: TaskPane::default(),
            theme,
            should_quit: false,
            show_hints: true,
        };
        // Populate the task pane from the initially highlighted entry
        app.display_selected();
        app
    }

    /// Number of entries in the user section (the "N projects" footer)
    pub fn user_count(&self) -> usize {
        views::user_entries(&self.source).len()
    }

    pub fn selected_entry(&self) -> Option<&ListEntry> {
        self.entries.get(self.cursor)
    }

    /// Move the left-pane cursor to `index` (clamped). Fires the selection
    /// handler exactly once if the selection actually changed.
    pub fn select(&mut self, index: usize) {
        let clamped = index.min(self.entries.len().saturating_sub(1));
        if clamped == self.cursor {
            return;
        }
        self.cursor = clamped;
        self.display_selected();
    }

    pub fn select_next(&mut self) {
        self.select(self.cursor.saturating_add(1));
    }

    pub fn select_prev(&mut self) {
        self.select(self.cursor.saturating_sub(1));
    }

    pub fn select_first(&mut self) {
        self.select(0);
    }

    pub fn select_last(&mut self) {
        self.select(self.entries.len().saturating_sub(1));
    }

    /// Jump to the built-in view carrying the given numeric shortcut
    pub fn select_shortcut(&mut self, shortcut: usize) {
        let target = self.entries.iter().position(
            |e| matches!(e, ListEntry::View { shortcut: Some(s), .. } if *s == shortcut),
        );
        if let Some(index) = target {
            self.select(index);
        }
    }

    /// Selection handler: refresh the task pane from the highlighted entry.
    ///
    /// Delimiters are a deliberate no-op for both title and contents; for
    /// everything else the title is the entry name, suffixed with the task
    /// count when there is at least one task, and the tasks are re-resolved.
    pub fn display_selected(&mut self) {
        let Some(entry) = self.entries.get(self.cursor).cloned() else {
            return;
        };
        let name = entry.name(&self.source).to_string();
        if name.is_empty() {
            return;
        }
        let tasks = entry.tasks(&self.source);
        self.task_pane.title = if tasks.is_empty() {
            name
        } else {
            format!("{} ({})", name, tasks.len())
        };
        self.task_pane.tasks = tasks;
        self.task_pane.cursor = 0;
    }

    /// Move the task-pane cursor (when the right pane has focus)
    pub fn task_cursor_next(&mut self) {
        if self.task_pane.cursor + 1 < self.task_pane.tasks.len() {
            self.task_pane.cursor += 1;
        }
    }

    pub fn task_cursor_prev(&mut self) {
        self.task_pane.cursor = self.task_pane.cursor.saturating_sub(1);
    }
}

/// Restore UI state from .state.json (no-op for seed data)
pub fn restore_ui_state(app: &mut App) {
    let Some(dir) = app.data_dir.clone() else {
        return;
    };
    if let Some(state) = data::read_ui_state(&dir) {
        app.select(state.cursor);
    }
}

/// Save UI state to .state.json (no-op for seed data)
pub fn save_ui_state(app: &App) {
    let Some(dir) = &app.data_dir else {
        return;
    };
    let state = UiState { cursor: app.cursor };
    let _ = data::write_ui_state(dir, &state);
}

/// Run the TUI application
pub fn run(data_file: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let data = data::load_data(data_file)?;
    let mut app = App::new(data);
    restore_ui_state(&mut app);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Save UI state before exit
    save_ui_state(&app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::UiConfig;
    use crate::model::{Group, Project, Task};

    fn app_with(groups: Vec<Group>) -> App {
        App::new(LoadedData {
            source: InMemorySource::new(groups),
            ui: UiConfig::default(),
            path: None,
        })
    }

    fn home_app() -> App {
        app_with(vec![Group::new(
            1,
            "Home",
            vec![Project::new(
                1,
                "Movies",
                vec![Task::new(1, "Watch Matrix"), Task::new(2, "Watch Matrix II")],
            )],
            vec![Task::new(1, "Watch movies")],
        )])
    }

    #[test]
    fn initial_selection_shows_inbox() {
        let app = home_app();
        assert_eq!(app.cursor, 0);
        assert_eq!(app.task_pane.title, "Inbox");
        assert!(app.task_pane.tasks.is_empty());
    }

    #[test]
    fn selecting_home_group_titles_pane_with_count() {
        let mut app = home_app();
        // Entry 8 is the first user entry: [6 builtins + 2 delimiters] before it
        app.select(8);
        assert_eq!(app.task_pane.title, "Home (3)");
        let names: Vec<&str> = app
            .task_pane
            .tasks
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["Watch movies", "Watch Matrix", "Watch Matrix II"]);
    }

    #[test]
    fn selecting_project_shows_only_its_tasks() {
        let mut app = home_app();
        app.select(9);
        assert_eq!(app.task_pane.title, "Movies (2)");
        let names: Vec<&str> = app
            .task_pane
            .tasks
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["Watch Matrix", "Watch Matrix II"]);
    }

    #[test]
    fn selecting_delimiter_freezes_task_pane() {
        let mut app = home_app();
        app.select(8);
        let title_before = app.task_pane.title.clone();
        let tasks_before = app.task_pane.tasks.clone();

        // Entry 7 is the delimiter between builtins and user lists
        app.select(7);
        assert!(app.selected_entry().unwrap().is_delimiter());
        assert_eq!(app.task_pane.title, title_before);
        assert_eq!(app.task_pane.tasks, tasks_before);
    }

    #[test]
    fn empty_group_titles_pane_without_count() {
        let mut app = app_with(vec![Group::new(1, "Nothing", Vec::new(), Vec::new())]);
        app.select(8);
        assert_eq!(app.task_pane.title, "Nothing");
        assert!(app.task_pane.tasks.is_empty());
    }

    #[test]
    fn selection_is_clamped_to_entry_count() {
        let mut app = home_app();
        app.select(999);
        assert_eq!(app.cursor, app.entries.len() - 1);
    }

    #[test]
    fn shortcut_jumps_to_builtin() {
        let mut app = home_app();
        app.select(8);
        app.select_shortcut(5);
        assert_eq!(app.task_pane.title, "Logbook");
        // Shortcut 1 is Today, which sits after the first delimiter
        app.select_shortcut(1);
        assert_eq!(app.cursor, 2);
        assert_eq!(app.task_pane.title, "Today");
    }

    #[test]
    fn user_count_counts_groups_and_projects() {
        let app = home_app();
        assert_eq!(app.user_count(), 2);
        let empty = app_with(Vec::new());
        assert_eq!(empty.user_count(), 0);
    }

    #[test]
    fn task_cursor_stays_in_bounds() {
        let mut app = home_app();
        app.select(8);
        app.task_cursor_prev();
        assert_eq!(app.task_pane.cursor, 0);
        for _ in 0..10 {
            app.task_cursor_next();
        }
        assert_eq!(app.task_pane.cursor, app.task_pane.tasks.len() - 1);
    }
}
