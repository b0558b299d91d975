use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget},
};
use tokio::sync::mpsc::UnboundedSender;

use crate::locale;

use super::post::types::PostEvent;

pub struct CommentState {
    pub selected: bool,
}

/// One comment in a post's thread. Owns its applause counter; the comment
/// list itself belongs to the post, so deletion is only ever requested.
pub struct CommentView {
    text: String,
    applause: u32,
    on_delete: UnboundedSender<PostEvent>,
}

impl CommentView {
    pub fn new(text: String, on_delete: UnboundedSender<PostEvent>) -> Self {
        Self { text, applause: 0, on_delete }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn applause(&self) -> u32 {
        self.applause
    }

    pub fn applaud(&mut self) {
        self.applause += 1;
    }

    pub fn request_delete(&self) {
        if let Err(e) = self.on_delete.send(PostEvent::DeleteComment(self.text.clone())) {
            log::warn!("Delete request dropped, post is gone: {:?}", e);
        }
    }

    pub fn height(&self, width: u16) -> u16 {
        let text_lines = u16::try_from(self.wrapped_text(width).len()).unwrap_or(u16::MAX);
        // borders + commenter line + text + footer
        text_lines.saturating_add(4)
    }

    // Measuring and drawing both go through here so they agree line for line.
    fn wrapped_text(&self, width: u16) -> Vec<String> {
        let usable_width = usize::from(width.saturating_sub(2)).max(1);
        let mut lines: Vec<String> = textwrap::wrap(&self.text, usable_width)
            .into_iter()
            .map(|line| line.into_owned())
            .collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        lines
    }

    fn footer(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("{} • {}", locale::APPLAUD_LABEL, self.applause),
                Style::default().fg(Color::Green),
            ),
            Span::styled("  ·  ", Style::default().fg(Color::DarkGray)),
            Span::styled(locale::DELETE_LABEL, Style::default().fg(Color::Red)),
        ])
    }
}

impl StatefulWidget for &mut CommentView {
    type State = CommentState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.height == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(
                if state.selected { Color::Blue } else { Color::DarkGray }
            ));

        let mut lines = vec![Line::from(Span::styled(
            locale::COMMENTER_LABEL,
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        lines.extend(self.wrapped_text(area.width).into_iter().map(Line::from));
        lines.push(self.footer());

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
