use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Widget},
};

use super::types::{PostComponent, PostState};

pub struct PostAvatar {
    src: String,
    initial: String,
}

impl PostAvatar {
    pub fn new(src: String, owner_name: &str) -> Self {
        log::debug!("Avatar source {}", src);
        let initial = owner_name
            .chars()
            .find(|c| c.is_alphanumeric())
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string());
        Self { src, initial }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn initial(&self) -> &str {
        &self.initial
    }
}

impl PostComponent for PostAvatar {
    fn render(&mut self, area: Rect, buf: &mut Buffer, _state: &PostState) {
        if area.width < 3 || area.height < 3 {
            // Not enough room for the frame, show just the letter
            if area.width > 0 && area.height > 0 {
                buf.set_string(area.x, area.y, &self.initial, Style::default().fg(Color::Green));
            }
            return;
        }

        let frame = Rect { width: 3, height: 3, ..area };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Green));
        let inner = block.inner(frame);
        block.render(frame, buf);

        buf.set_string(
            inner.x,
            inner.y,
            &self.initial,
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        );
    }

    fn height(&self, _area: Rect) -> u16 {
        3 // Fixed avatar height
    }
}
