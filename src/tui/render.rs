use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use super::app::{App, Pane};

/// Main render function: header row, two-pane content, status row
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(1),    // content
            Constraint::Length(1), // status row
        ])
        .split(area);

    render_header(frame, app, chunks[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(1)])
        .split(chunks[1]);

    render_lists_pane(frame, app, panes[0]);
    render_tasks_pane(frame, app, panes[1]);
    render_status_row(frame, app, chunks[2]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(Span::styled(
        " slate",
        Style::default()
            .fg(app.theme.accent)
            .bg(app.theme.background)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(app.theme.background)),
        area,
    );
}

/// Left pane: all list entries with the cursor row highlighted
fn render_lists_pane(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Pane::Lists;
    let block = pane_block(app, "Lists", &format!("{} projects", app.user_count()), focused);
    let inner = block.inner(area);

    let mut lines: Vec<Line> = Vec::new();
    for (i, entry) in app.entries.iter().enumerate() {
        let is_cursor = i == app.cursor && focused;
        lines.push(entry_line(
            app,
            entry.label(&app.source),
            is_cursor,
            inner.width,
        ));
    }

    let scroll = scroll_offset(app.cursor, inner.height);
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(app.theme.background))
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

/// Right pane: the tasks of the last non-delimiter selection
fn render_tasks_pane(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Pane::Tasks;
    let footer = format!("{} tasks", app.task_pane.tasks.len());
    let block = pane_block(app, &app.task_pane.title, &footer, focused);
    let inner = block.inner(area);

    let mut lines: Vec<Line> = Vec::new();
    if app.task_pane.tasks.is_empty() {
        lines.push(Line::from(Span::styled(
            " No tasks",
            Style::default().fg(app.theme.dim).bg(app.theme.background),
        )));
    } else {
        for (i, task) in app.task_pane.tasks.iter().enumerate() {
            let is_cursor = i == app.task_pane.cursor && focused;
            lines.push(entry_line(app, task.name.clone(), is_cursor, inner.width));
        }
    }

    let scroll = scroll_offset(app.task_pane.cursor, inner.height);
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(app.theme.background))
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let line = if app.show_hints {
        Line::from(Span::styled(
            " j/k move  0-5 views  Tab focus  ? hints  q quit",
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    } else {
        Line::from(Span::styled(
            " ".repeat(area.width as usize),
            Style::default().bg(bg),
        ))
    };
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}

fn pane_block(app: &App, title: &str, footer: &str, focused: bool) -> Block<'static> {
    let border_color = if focused {
        app.theme.highlight
    } else {
        app.theme.border
    };
    Block::bordered()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(app.theme.text_bright)
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Span::styled(
            format!(" {} ", footer),
            Style::default().fg(app.theme.dim),
        ))
        .border_style(Style::default().fg(border_color).bg(app.theme.background))
}

/// Build one row, highlighting and padding the cursor row to pane width
fn entry_line(app: &App, label: String, is_cursor: bool, width: u16) -> Line<'static> {
    let bg = if is_cursor {
        app.theme.highlight
    } else {
        app.theme.background
    };
    let fg = if is_cursor {
        app.theme.text_bright
    } else {
        app.theme.text
    };

    let mut spans = vec![Span::styled(
        format!(" {}", label),
        Style::default().fg(fg).bg(bg),
    )];

    if is_cursor {
        let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let w = width as usize;
        if content_width < w {
            spans.push(Span::styled(
                " ".repeat(w - content_width),
                Style::default().bg(bg),
            ));
        }
    }

    Line::from(spans)
}

/// First visible row so the cursor stays inside the viewport
fn scroll_offset(cursor: usize, height: u16) -> u16 {
    let visible = height.max(1) as usize;
    cursor.saturating_sub(visible - 1) as u16
}
