//! Play view: scrolling transcript, input line and status sidebar.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use sk_fiction::{GameSession, Response, ResponseKind};

/// Visual category of a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStyle {
    /// Echo of what the player typed.
    Command,
    /// Successful narration.
    Result,
    /// Refusals and parse failures.
    Error,
    /// Banners and system notices.
    System,
}

/// One line of the transcript.
#[derive(Debug, Clone)]
pub struct OutputLine {
    pub style: OutputStyle,
    pub text: String,
}

/// State of the play screen.
pub struct PlayView {
    session: GameSession,
    output_lines: Vec<OutputLine>,
    /// Scroll offset from the bottom.
    output_scroll: u16,
    input_text: String,
    /// Byte offset of the cursor within `input_text`.
    input_cursor: usize,
    pub should_quit: bool,
}

impl PlayView {
    pub fn new(session: GameSession) -> Self {
        let mut view = Self {
            session,
            output_lines: Vec::new(),
            output_scroll: 0,
            input_text: String::new(),
            input_cursor: 0,
            should_quit: false,
        };
        let intro = view.session.intro();
        view.push_output(OutputStyle::System, &intro);
        view
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.session.is_over() {
            // Any key leaves once the game has ended.
            self.should_quit = true;
            return;
        }
        match key.code {
            KeyCode::Enter => self.submit_input(),
            KeyCode::Esc => {
                self.input_text.clear();
                self.input_cursor = 0;
            }
            KeyCode::Backspace => {
                if let Some(prev) = self.prev_boundary() {
                    self.input_text.remove(prev);
                    self.input_cursor = prev;
                }
            }
            KeyCode::Left => {
                if let Some(prev) = self.prev_boundary() {
                    self.input_cursor = prev;
                }
            }
            KeyCode::Right => {
                if let Some(c) = self.input_text[self.input_cursor..].chars().next() {
                    self.input_cursor += c.len_utf8();
                }
            }
            KeyCode::Home => self.input_cursor = 0,
            KeyCode::End => self.input_cursor = self.input_text.len(),
            KeyCode::Up | KeyCode::PageUp => {
                self.output_scroll = self.output_scroll.saturating_add(1);
            }
            KeyCode::Down | KeyCode::PageDown => {
                self.output_scroll = self.output_scroll.saturating_sub(1);
            }
            KeyCode::Char(c) => {
                self.input_text.insert(self.input_cursor, c);
                self.input_cursor += c.len_utf8();
            }
            _ => {}
        }
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.input_text[..self.input_cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_text);
        self.input_cursor = 0;
        let response = self.session.process_command(&input);
        if response.is_silent() {
            return;
        }
        self.push_output(OutputStyle::Command, input.trim());
        self.push_response(&response);
    }

    fn push_response(&mut self, response: &Response) {
        let style = match response.kind {
            ResponseKind::Success if response.game_over => OutputStyle::System,
            ResponseKind::Success => OutputStyle::Result,
            ResponseKind::Failure => OutputStyle::Error,
            ResponseKind::Silent => return,
        };
        self.push_output(style, &response.text);
        if response.game_over {
            self.push_output(OutputStyle::System, "Press any key to exit.");
        }
    }

    fn push_output(&mut self, style: OutputStyle, text: &str) {
        for line in text.lines() {
            self.output_lines.push(OutputLine {
                style,
                text: line.to_string(),
            });
        }
        self.output_lines.push(OutputLine {
            style,
            text: String::new(),
        });
        self.output_scroll = 0;
    }

    pub fn status_hint(&self) -> &'static str {
        if self.session.is_over() {
            "Any key:exit"
        } else if self.session.in_combat() {
            "1-9:choose action  Enter:send  \u{2191}\u{2193}:scroll  Ctrl+C:quit"
        } else {
            "Enter:send  Esc:clear  \u{2191}\u{2193}:scroll  Ctrl+C:quit"
        }
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(40), Constraint::Length(30)])
            .split(area);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Output
                Constraint::Length(3), // Input
            ])
            .split(columns[0]);

        self.draw_output(frame, chunks[0]);
        self.draw_input(frame, chunks[1]);
        self.draw_sidebar(frame, columns[1]);
    }

    fn draw_output(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .output_lines
            .iter()
            .map(|ol| {
                let (prefix, color, modifier) = match ol.style {
                    OutputStyle::Command => ("> ", Color::Yellow, Modifier::BOLD),
                    OutputStyle::Result => ("", Color::White, Modifier::empty()),
                    OutputStyle::Error => ("", Color::Red, Modifier::empty()),
                    OutputStyle::System => ("", Color::Cyan, Modifier::empty()),
                };
                Line::from(Span::styled(
                    format!("{prefix}{}", ol.text),
                    Style::default().fg(color).add_modifier(modifier),
                ))
            })
            .collect();

        let inner_width = area.width.saturating_sub(2) as usize;
        let total_wrapped: u16 = lines
            .iter()
            .map(|l| {
                if inner_width == 0 {
                    1
                } else {
                    l.width().max(1).div_ceil(inner_width) as u16
                }
            })
            .sum();

        let visible_height = area.height.saturating_sub(2);
        let max_scroll = total_wrapped.saturating_sub(visible_height);
        let scroll = max_scroll.saturating_sub(self.output_scroll);

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" SKOOLACH ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));
        frame.render_widget(paragraph, area);
    }

    fn draw_input(&self, frame: &mut Frame, area: Rect) {
        let input = Paragraph::new(format!("> {}", self.input_text)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
        frame.render_widget(input, area);

        let typed = self.input_text[..self.input_cursor].chars().count() as u16;
        let cursor_x = area.x + 1 + 2 + typed;
        if cursor_x < area.x + area.width.saturating_sub(1) {
            frame.set_cursor_position(Position::new(cursor_x, area.y + 1));
        }
    }

    fn draw_sidebar(&self, frame: &mut Frame, area: Rect) {
        let status = self.session.status();
        let label = Style::default().fg(Color::DarkGray);
        let mut lines = vec![
            Line::from(vec![Span::styled("Room    ", label), Span::raw(status.room)]),
            Line::from(vec![
                Span::styled("Health  ", label),
                Span::raw(status.health.to_string()),
            ]),
            Line::from(vec![
                Span::styled("Parts   ", label),
                Span::raw(format!("{}/{}", status.components, status.total_components)),
            ]),
            Line::from(vec![
                Span::styled("Parser  ", label),
                Span::raw(format!("level {}", status.tier)),
            ]),
            Line::default(),
            Line::from(Span::styled("Inventory", Style::default().add_modifier(Modifier::BOLD))),
        ];
        if status.inventory.is_empty() {
            lines.push(Line::from(Span::styled("  (empty)", label)));
        }
        lines.extend(
            status
                .inventory
                .into_iter()
                .map(|name| Line::from(format!("  {name}"))),
        );
        if let Some(combat) = status.combat {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Combat",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
            lines.extend(combat.split(" | ").map(|part| Line::from(format!("  {part}"))));
        }

        let sidebar = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" Status ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(sidebar, area);
    }
}
