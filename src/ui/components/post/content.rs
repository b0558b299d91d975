use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::model::{ContentBlock, ContentKind};

use super::types::{PostComponent, PostState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedBlock {
    Paragraph(String),
    /// Link blocks have no destination, so `href` is always empty.
    Anchor { href: String, text: String },
}

impl RenderedBlock {
    pub fn text(&self) -> &str {
        match self {
            RenderedBlock::Paragraph(text) => text,
            RenderedBlock::Anchor { text, .. } => text,
        }
    }

    fn style(&self) -> Style {
        match self {
            RenderedBlock::Paragraph(_) => Style::default(),
            RenderedBlock::Anchor { .. } => Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        }
    }

    // Every block takes at least one row, even when empty.
    fn wrapped_lines(&self, width: u16) -> Vec<Line<'static>> {
        let chars_per_line = usize::from(width).max(1);
        let style = self.style();
        let mut lines: Vec<Line<'static>> = textwrap::wrap(self.text(), chars_per_line)
            .into_iter()
            .map(|line| Line::from(Span::styled(line.into_owned(), style)))
            .collect();
        if lines.is_empty() {
            lines.push(Line::default());
        }
        lines
    }
}

pub struct PostContent {
    blocks: Vec<RenderedBlock>,
}

impl PostContent {
    pub fn new(content: &[ContentBlock]) -> Self {
        let blocks = content
            .iter()
            .map(|block| match block.kind {
                ContentKind::Paragraph => RenderedBlock::Paragraph(block.text.clone()),
                ContentKind::Link => RenderedBlock::Anchor {
                    href: String::new(),
                    text: block.text.clone(),
                },
            })
            .collect();
        Self { blocks }
    }

    pub fn blocks(&self) -> &[RenderedBlock] {
        &self.blocks
    }

    fn wrapped_lines(&self, width: u16) -> Vec<Line<'static>> {
        self.blocks
            .iter()
            .flat_map(|block| block.wrapped_lines(width))
            .collect()
    }

    fn calculate_height(&self, width: u16) -> u16 {
        u16::try_from(self.wrapped_lines(width).len()).unwrap_or(u16::MAX)
    }
}

impl PostComponent for PostContent {
    fn render(&mut self, area: Rect, buf: &mut Buffer, _state: &PostState) {
        Paragraph::new(self.wrapped_lines(area.width)).render(area, buf);
    }

    fn height(&self, area: Rect) -> u16 {
        self.calculate_height(area.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_keep_order_and_kind() {
        let content = PostContent::new(&[
            ContentBlock::paragraph("Hello"),
            ContentBlock::link("Click"),
        ]);

        assert_eq!(
            content.blocks(),
            &[
                RenderedBlock::Paragraph("Hello".to_string()),
                RenderedBlock::Anchor { href: String::new(), text: "Click".to_string() },
            ]
        );
    }

    #[test]
    fn test_link_is_styled_as_anchor() {
        let mut content = PostContent::new(&[
            ContentBlock::paragraph("Hello"),
            ContentBlock::link("Click"),
        ]);
        let area = Rect::new(0, 0, 20, 2);
        let mut buf = Buffer::empty(area);
        content.render(area, &mut buf, &PostState::default());

        assert_eq!(buf[(0, 0)].symbol(), "H");
        assert!(!buf[(0, 0)].modifier.contains(Modifier::UNDERLINED));
        assert_eq!(buf[(0, 1)].symbol(), "C");
        assert!(buf[(0, 1)].modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_empty_content_has_no_height() {
        let content = PostContent::new(&[]);
        assert_eq!(content.height(Rect::new(0, 0, 40, 10)), 0);
    }

    #[test]
    fn test_height_counts_wrapped_lines() {
        let content = PostContent::new(&[ContentBlock::paragraph("one two three four")]);
        assert_eq!(content.height(Rect::new(0, 0, 14, 10)), 2);
    }

    #[test]
    fn test_indented_paragraph_measured_as_drawn() {
        let mut content = PostContent::new(&[ContentBlock::paragraph("  indented words here")]);
        let area = Rect::new(0, 0, 10, 4);
        assert_eq!(content.height(area), 2);

        let mut buf = Buffer::empty(area);
        content.render(area, &mut buf, &PostState::default());

        let row = |y: u16| -> String { (0..10).map(|x| buf[(x, y)].symbol().to_string()).collect() };
        assert_eq!(row(0), "  indented");
        assert_eq!(row(1), "words here");
        assert_eq!(row(2).trim(), "");
    }

    #[test]
    fn test_wrapped_link_keeps_anchor_style() {
        let mut content = PostContent::new(&[ContentBlock::link("jane.design/doctorcare")]);
        let area = Rect::new(0, 0, 12, 2);
        assert_eq!(content.height(area), 2);

        let mut buf = Buffer::empty(area);
        content.render(area, &mut buf, &PostState::default());
        assert!(buf[(0, 1)].modifier.contains(Modifier::UNDERLINED));
    }
}
