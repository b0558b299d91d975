use ratatui::{buffer::Buffer, layout::Rect};
use std::rc::Rc;

use crate::time_format::Clock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Composer,
    Comments,
}

#[derive(Debug, Clone, Default)]
pub struct PostState {
    pub focus: Focus,
    /// Show the absolute publish time next to the relative one.
    pub show_time_title: bool,
}

pub trait PostComponent {
    fn render(&mut self, area: Rect, buf: &mut Buffer, state: &PostState);
    fn height(&self, area: Rect) -> u16;
}

#[derive(Clone)]
pub struct PostContext {
    pub clock: Rc<dyn Clock>,
}

impl PostContext {
    pub fn new(clock: Rc<dyn Clock>) -> Self {
        Self { clock }
    }
}

/// Requests a child view sends up to the post that owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostEvent {
    DeleteComment(String),
}
