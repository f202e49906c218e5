//! Full-screen terminal front end.

mod app;

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use sk_fiction::GameSession;

use app::PlayView;

/// Launch the visual interface and play until the user leaves.
pub fn run(session: GameSession) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let mut view = PlayView::new(session);
    let result = run_loop(&mut terminal, &mut view);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    view: &mut PlayView,
) -> Result<(), String> {
    loop {
        terminal
            .draw(|frame| draw(frame, view))
            .map_err(|e| format!("draw error: {e}"))?;

        if view.should_quit {
            return Ok(());
        }

        let Event::Key(key) = event::read().map_err(|e| format!("event error: {e}"))? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        // Ctrl+C always quits
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            view.should_quit = true;
        } else {
            view.handle_key(key);
        }
    }
}

fn draw(frame: &mut Frame, view: &PlayView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    view.draw(frame, chunks[0]);

    let status = Paragraph::new(view.status_hint())
        .style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(status, chunks[1]);
}
