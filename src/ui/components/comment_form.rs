use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::locale;

use super::post::types::{Focus, PostComponent, PostState};

const MIN_TEXT_LINES: u16 = 2;

/// A required textarea with a submit button. The button is disabled while
/// the textarea is empty.
pub struct CommentForm {
    content: String,
    cursor_position: usize, // in chars
    validity_message: Option<String>,
}

impl CommentForm {
    pub fn new() -> Self {
        Self {
            content: String::new(),
            cursor_position: 0,
            validity_message: None,
        }
    }

    pub fn value(&self) -> &str {
        &self.content
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    pub fn validity_message(&self) -> Option<&str> {
        self.validity_message.as_deref()
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.content.is_empty()
    }

    /// Replaces the whole value. Every edit clears the custom validity message.
    pub fn set_value(&mut self, value: String) {
        self.content = value;
        self.cursor_position = self.content.chars().count();
        self.validity_message = None;
    }

    pub fn insert_char(&mut self, c: char) {
        let index = self.byte_index();
        self.content.insert(index, c);
        self.cursor_position += 1;
        self.validity_message = None;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let index = self.byte_index();
            self.content.remove(index);
            self.validity_message = None;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.content.chars().count() {
            self.cursor_position += 1;
        }
    }

    pub fn set_custom_validity(&mut self, message: &str) {
        self.validity_message = if message.is_empty() {
            None
        } else {
            Some(message.to_string())
        };
    }

    /// Required-field check: a value must be present and no custom error set.
    pub fn check_validity(&self) -> bool {
        !self.content.is_empty() && self.validity_message.is_none()
    }

    /// Hands the value over and resets the form.
    pub fn take_value(&mut self) -> String {
        self.cursor_position = 0;
        self.validity_message = None;
        std::mem::take(&mut self.content)
    }

    fn byte_index(&self) -> usize {
        self.content
            .char_indices()
            .nth(self.cursor_position)
            .map(|(index, _)| index)
            .unwrap_or(self.content.len())
    }

    fn text_lines(&self, state: &PostState) -> Vec<Line<'static>> {
        let active = state.focus == Focus::Composer;
        if self.content.is_empty() && !active {
            return vec![Line::from(Span::styled(
                locale::FORM_PLACEHOLDER,
                Style::default().fg(Color::DarkGray),
            ))];
        }

        let cursor_style = Style::default().bg(Color::White).fg(Color::Black);
        let mut lines = Vec::new();
        let mut spans = Vec::new();
        let mut current = String::new();

        for (i, c) in self.content.chars().enumerate() {
            let at_cursor = active && i == self.cursor_position;
            if c == '\n' {
                spans.push(Span::raw(std::mem::take(&mut current)));
                if at_cursor {
                    spans.push(Span::styled(" ", cursor_style));
                }
                lines.push(Line::from(std::mem::take(&mut spans)));
            } else if at_cursor {
                spans.push(Span::raw(std::mem::take(&mut current)));
                spans.push(Span::styled(c.to_string(), cursor_style));
            } else {
                current.push(c);
            }
        }
        spans.push(Span::raw(current));
        if active && self.cursor_position >= self.content.chars().count() {
            spans.push(Span::styled("_", cursor_style));
        }
        lines.push(Line::from(spans));
        lines
    }

    fn button_line(&self) -> Line<'static> {
        let style = if self.is_submit_disabled() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };
        Line::from(Span::styled(format!("[ {} ]", locale::SUBMIT_LABEL), style))
    }
}

impl Default for CommentForm {
    fn default() -> Self {
        Self::new()
    }
}

impl PostComponent for CommentForm {
    fn render(&mut self, area: Rect, buf: &mut Buffer, state: &PostState) {
        if area.height == 0 {
            return;
        }

        let text_height = self.height(area).saturating_sub(3);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(text_height),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        Line::from(Span::styled(
            locale::FORM_TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .render(chunks[0], buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if state.focus == Focus::Composer {
                Color::Green
            } else {
                Color::White
            }));
        Paragraph::new(self.text_lines(state))
            .block(block)
            .wrap(Wrap { trim: false })
            .render(chunks[1], buf);

        self.button_line().render(chunks[2], buf);

        if let Some(message) = &self.validity_message {
            Line::from(Span::styled(message.clone(), Style::default().fg(Color::Red)))
                .render(chunks[3], buf);
        }
    }

    fn height(&self, area: Rect) -> u16 {
        let width = area.width.saturating_sub(2).max(1) as usize;
        let text_lines: u16 = self
            .content
            .split('\n')
            .map(|line| textwrap::wrap(line, width).len().max(1) as u16)
            .sum();
        // title + bordered textarea + button + validation message
        1 + text_lines.max(MIN_TEXT_LINES) + 2 + 1 + 1
    }
}
