use avatar::PostAvatar;
use content::{PostContent, RenderedBlock};
use header::{PostHeader, TimeElement};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, StatefulWidget, Widget},
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use types::{Focus, PostComponent, PostContext, PostEvent, PostState};

use crate::{locale, model::PostData};

use super::{
    comment::{CommentState, CommentView},
    comment_form::CommentForm,
};

pub mod avatar;
pub mod content;
pub mod header;
pub mod types;

pub const SEED_COMMENT: &str = "Post muito top! Vamos nessa!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Posted,
    Rejected,
}

/// A post with its comment thread. The comment list and the draft are owned
/// here and change only through the methods below.
pub struct PostView {
    header: PostHeader,
    avatar: PostAvatar,
    content: PostContent,
    form: CommentForm,
    comments: Vec<String>,
    comment_views: Vec<CommentView>,
    selected_comment: usize,
    event_sender: UnboundedSender<PostEvent>,
    event_receiver: UnboundedReceiver<PostEvent>,
}

impl PostView {
    pub fn new(post: PostData, context: PostContext) -> Self {
        let (event_sender, event_receiver) = mpsc::unbounded_channel();

        let mut view = Self {
            header: PostHeader::new(&post.author, post.published_at, context),
            avatar: PostAvatar::new(post.author.avatar_url.clone(), &post.author.name),
            content: PostContent::new(&post.content),
            form: CommentForm::new(),
            comments: vec![SEED_COMMENT.to_string()],
            comment_views: Vec::new(),
            selected_comment: 0,
            event_sender,
            event_receiver,
        };
        view.sync_comment_views();
        view
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub fn comment_views(&self) -> &[CommentView] {
        &self.comment_views
    }

    pub fn draft(&self) -> &str {
        self.form.value()
    }

    pub fn validation_message(&self) -> Option<&str> {
        self.form.validity_message()
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.form.is_submit_disabled()
    }

    pub fn time_element(&self) -> TimeElement {
        self.header.time_element()
    }

    pub fn content_blocks(&self) -> &[RenderedBlock] {
        self.content.blocks()
    }

    pub fn avatar_src(&self) -> &str {
        self.avatar.src()
    }

    pub fn selected_comment(&self) -> Option<usize> {
        if self.comments.is_empty() {
            None
        } else {
            Some(self.selected_comment)
        }
    }

    pub fn edit_draft(&mut self, text: impl Into<String>) {
        self.form.set_value(text.into());
    }

    pub fn insert_char(&mut self, c: char) {
        self.form.insert_char(c);
    }

    pub fn insert_newline(&mut self) {
        self.form.insert_char('\n');
    }

    pub fn delete_char(&mut self) {
        self.form.delete_char();
    }

    pub fn move_cursor_left(&mut self) {
        self.form.move_cursor_left();
    }

    pub fn move_cursor_right(&mut self) {
        self.form.move_cursor_right();
    }

    /// Form submission. An empty draft fails the required-field check and is
    /// rejected instead of posted.
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.form.check_validity() {
            self.reject_invalid_draft();
            return SubmitOutcome::Rejected;
        }

        let text = self.form.take_value();
        log::info!("Posting comment ({} chars)", text.chars().count());
        self.comments.push(text);
        self.sync_comment_views();
        SubmitOutcome::Posted
    }

    /// Clicking the submit button does nothing while it is disabled.
    pub fn press_submit_button(&mut self) -> Option<SubmitOutcome> {
        if self.form.is_submit_disabled() {
            log::debug!("Submit button pressed while disabled");
            return None;
        }
        Some(self.submit())
    }

    pub fn reject_invalid_draft(&mut self) {
        log::warn!("Rejected empty comment");
        self.form.set_custom_validity(locale::REQUIRED_FIELD);
    }

    /// Removes every comment whose text equals `text`.
    pub fn delete_comment(&mut self, text: &str) {
        let before = self.comments.len();
        self.comments.retain(|comment| comment != text);
        log::info!("Deleted {} comment(s)", before - self.comments.len());
        self.sync_comment_views();
    }

    pub fn process_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            match event {
                PostEvent::DeleteComment(text) => self.delete_comment(&text),
            }
        }
    }

    pub fn select_next_comment(&mut self) {
        if self.selected_comment + 1 < self.comments.len() {
            self.selected_comment += 1;
        }
    }

    pub fn select_previous_comment(&mut self) {
        self.selected_comment = self.selected_comment.saturating_sub(1);
    }

    pub fn applaud_selected_comment(&mut self) {
        if let Some(view) = self.comment_views.get_mut(self.selected_comment) {
            view.applaud();
        }
    }

    pub fn delete_selected_comment(&mut self) {
        if let Some(view) = self.comment_views.get(self.selected_comment) {
            view.request_delete();
        }
        self.process_events();
    }

    // Child views are keyed by text, so a surviving comment keeps its view
    // (and its applause) across list changes.
    fn sync_comment_views(&mut self) {
        let mut previous = std::mem::take(&mut self.comment_views);
        self.comment_views = self
            .comments
            .iter()
            .map(|text| match previous.iter().position(|view| view.text() == text) {
                Some(index) => previous.swap_remove(index),
                None => CommentView::new(text.clone(), self.event_sender.clone()),
            })
            .collect();

        if self.selected_comment >= self.comments.len() {
            self.selected_comment = self.comments.len().saturating_sub(1);
        }
    }

    fn render_comments(&mut self, area: Rect, buf: &mut Buffer, state: &PostState) {
        let focused = state.focus == Focus::Comments;
        let total_height: u16 = self
            .comment_views
            .iter()
            .map(|view| view.height(area.width))
            .sum();
        // Start at the selected comment once the thread overflows
        let first = if focused && total_height > area.height {
            self.selected_comment
        } else {
            0
        };

        let mut current_y = area.y;
        let max_y = area.y + area.height;
        for (index, view) in self.comment_views.iter_mut().enumerate().skip(first) {
            let remaining_height = max_y.saturating_sub(current_y);
            if remaining_height == 0 {
                break;
            }
            let height = view.height(area.width).min(remaining_height);
            let comment_area = Rect {
                x: area.x,
                y: current_y,
                width: area.width,
                height,
            };
            let mut comment_state = CommentState {
                selected: focused && index == self.selected_comment,
            };
            view.render(comment_area, buf, &mut comment_state);
            current_y += height;
        }
    }
}

impl StatefulWidget for &mut PostView {
    type State = PostState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.height == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White));

        let inner_area = block.inner(area);
        block.render(area, buf);

        let mut current_y = inner_area.y;
        let max_y = inner_area.y + inner_area.height;

        let header_height = self.header.height(inner_area).min(inner_area.height);
        let horizontal_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(4), Constraint::Min(10)])
            .split(Rect {
                x: inner_area.x,
                y: current_y,
                width: inner_area.width,
                height: header_height,
            });
        self.avatar.render(horizontal_areas[0], buf, state);
        self.header.render(horizontal_areas[1], buf, state);
        current_y += header_height + 1;

        let mut remaining_height = max_y.saturating_sub(current_y);
        if remaining_height == 0 {
            return;
        }
        let content_height = self.content.height(inner_area).min(remaining_height);
        let content_area = Rect {
            x: inner_area.x,
            y: current_y,
            width: inner_area.width,
            height: content_height,
        };
        self.content.render(content_area, buf, state);
        current_y += content_height + 1;
        remaining_height = max_y.saturating_sub(current_y);
        if remaining_height == 0 {
            return;
        }

        let form_height = self.form.height(inner_area).min(remaining_height);
        let form_area = Rect {
            x: inner_area.x,
            y: current_y,
            width: inner_area.width,
            height: form_height,
        };
        self.form.render(form_area, buf, state);
        current_y += form_height;
        remaining_height = max_y.saturating_sub(current_y);
        if remaining_height == 0 {
            return;
        }

        let comments_area = Rect {
            x: inner_area.x,
            y: current_y,
            width: inner_area.width,
            height: remaining_height,
        };
        self.render_comments(comments_area, buf, state);
    }
}
