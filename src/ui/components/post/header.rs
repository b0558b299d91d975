use chrono::{DateTime, FixedOffset, Utc};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::{model::Author, time_format};

use super::types::{PostComponent, PostContext, PostState};

/// The `<time>` element of a post header: machine readable value, hover
/// title and visible text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeElement {
    pub datetime: String,
    pub title: String,
    pub text: String,
}

pub struct PostHeader {
    author_name: String,
    author_role: String,
    published_at: DateTime<FixedOffset>,
    context: PostContext,
}

impl PostHeader {
    pub fn new(author: &Author, published_at: DateTime<FixedOffset>, context: PostContext) -> Self {
        Self {
            author_name: author.name.clone(),
            author_role: author.role.clone(),
            published_at,
            context,
        }
    }

    // Recomputed on every call; the relative text depends on the clock.
    pub fn time_element(&self) -> TimeElement {
        let published_utc = self.published_at.with_timezone(&Utc);
        let offset = self.context.clock.local_offset(&published_utc);
        let local_time = published_utc.with_timezone(&offset);
        let now = self.context.clock.now();

        TimeElement {
            datetime: time_format::iso_8601(&self.published_at),
            title: time_format::format_absolute(&local_time),
            text: time_format::format_relative(&published_utc, &now, offset),
        }
    }

    fn build_lines(&self, show_title: bool) -> Vec<Line<'static>> {
        let time = self.time_element();

        let mut lines = vec![
            Line::from(Span::styled(
                self.author_name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.author_role.clone(),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        if show_title {
            lines.push(Line::from(Span::styled(
                time.title.trim_end().to_string(),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )));
        }

        lines
    }
}

impl PostComponent for PostHeader {
    fn render(&mut self, area: Rect, buf: &mut Buffer, state: &PostState) {
        if area.height == 0 {
            return;
        }

        Paragraph::new(self.build_lines(state.show_time_title)).render(area, buf);

        // Relative time sits on the author line, flush right
        let time = Line::from(Span::styled(
            self.time_element().text,
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Right);
        let time_area = Rect { height: 1, ..area };
        let needed_width = self.author_name.chars().count() + 1 + time.width();
        if usize::from(time_area.width) > needed_width {
            time.render(time_area, buf);
        }
    }

    fn height(&self, _area: Rect) -> u16 {
        3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_format::MockClock;
    use chrono::Duration;
    use std::rc::Rc;

    fn header(elapsed: Duration) -> PostHeader {
        header_for("Marina Duarte", elapsed)
    }

    fn header_for(name: &str, elapsed: Duration) -> PostHeader {
        let published = DateTime::parse_from_rfc3339("2022-05-03T20:00:00-03:00").unwrap();
        let mut clock = MockClock::new();
        clock
            .expect_now()
            .return_const(published.with_timezone(&Utc) + elapsed);
        clock
            .expect_local_offset()
            .return_const(FixedOffset::west_opt(3 * 3600).unwrap());

        let author = Author {
            name: name.to_string(),
            role: "Engenheira".to_string(),
            avatar_url: String::new(),
        };
        PostHeader::new(&author, published, PostContext::new(Rc::new(clock)))
    }

    #[test]
    fn test_time_element() {
        let time = header(Duration::hours(2)).time_element();
        assert_eq!(time.datetime, "2022-05-03T23:00:00.000Z");
        assert_eq!(time.title, "3 de maio às 20:00h ");
        assert_eq!(time.text, "há cerca de 2 horas");
    }

    #[test]
    fn test_title_does_not_depend_on_now() {
        let early = header(Duration::minutes(1)).time_element();
        let late = header(Duration::days(30)).time_element();
        assert_eq!(early.title, late.title);
        assert_ne!(early.text, late.text);
    }

    #[test]
    fn test_render_shows_relative_time() {
        let mut header = header(Duration::hours(2));
        let area = Rect::new(0, 0, 50, 3);
        let mut buf = Buffer::empty(area);
        header.render(area, &mut buf, &PostState::default());

        let first_row: String = (0..50).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(first_row.starts_with("Marina Duarte"));
        assert!(first_row.trim_end().ends_with("há cerca de 2 horas"));

        let third_row: String = (0..50).map(|x| buf[(x, 2)].symbol().to_string()).collect();
        assert!(third_row.trim().is_empty());
    }

    #[test]
    fn test_render_title_when_toggled() {
        let mut header = header(Duration::hours(2));
        let area = Rect::new(0, 0, 50, 3);
        let mut buf = Buffer::empty(area);
        let state = PostState { show_time_title: true, ..PostState::default() };
        header.render(area, &mut buf, &state);

        let third_row: String = (0..50).map(|x| buf[(x, 2)].symbol().to_string()).collect();
        assert_eq!(third_row.trim_end(), "3 de maio às 20:00h");
    }

    #[test]
    fn test_render_very_long_name() {
        let mut header = header_for(&"a".repeat(65535), Duration::hours(2));
        let area = Rect::new(0, 0, 50, 3);
        let mut buf = Buffer::empty(area);
        header.render(area, &mut buf, &PostState::default());

        let first_row: String = (0..50).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert_eq!(first_row, "a".repeat(50));
    }
}
