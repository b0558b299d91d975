use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::crossterm::terminal::EnterAlternateScreen;
use std::{
    ops::ControlFlow,
    rc::Rc,
    time::{Duration, Instant},
};

use super::components::post::{
    types::{Focus, PostContext, PostState},
    PostView,
};

use ratatui::crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, Terminal};
use std::io::{self, Write};

use crate::locale;
use crate::model::PostData;
use crate::time_format::{Clock, SystemClock};
use crate::ui::draw;

pub struct App {
    pub post: PostView,
    pub state: PostState,
    pub status_line: String,
}

impl App {
    pub fn new(post: PostData) -> Self {
        Self::with_clock(post, Rc::new(SystemClock))
    }

    pub fn with_clock(post: PostData, clock: Rc<dyn Clock>) -> Self {
        Self {
            post: PostView::new(post, PostContext::new(clock)),
            state: PostState::default(),
            status_line: "".to_string(),
        }
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> ControlFlow<()> {
        if key.kind != KeyEventKind::Press {
            return ControlFlow::Continue(());
        }

        if key.code == KeyCode::Tab || key.code == KeyCode::BackTab {
            self.state.focus = match self.state.focus {
                Focus::Composer => Focus::Comments,
                Focus::Comments => Focus::Composer,
            };
            return ControlFlow::Continue(());
        }

        match self.state.focus {
            Focus::Composer => self.handle_composer_input(key),
            Focus::Comments => return self.handle_comments_input(key.code),
        }
        ControlFlow::Continue(())
    }

    fn handle_composer_input(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Enter if alt => self.post.insert_newline(),
            KeyCode::Enter => {
                self.post.submit();
            }
            KeyCode::Char('p') if ctrl => {
                self.post.press_submit_button();
            }
            KeyCode::Char('t') if ctrl => self.toggle_time_title(),
            KeyCode::Char(c) if !ctrl => self.post.insert_char(c),
            KeyCode::Backspace => self.post.delete_char(),
            KeyCode::Left => self.post.move_cursor_left(),
            KeyCode::Right => self.post.move_cursor_right(),
            KeyCode::Esc => self.state.focus = Focus::Comments,
            _ => {}
        }
    }

    fn handle_comments_input(&mut self, key: KeyCode) -> ControlFlow<()> {
        match key {
            KeyCode::Char('j') | KeyCode::Down => self.post.select_next_comment(),
            KeyCode::Char('k') | KeyCode::Up => self.post.select_previous_comment(),
            KeyCode::Char('l') => self.post.applaud_selected_comment(),
            KeyCode::Char('d') => self.post.delete_selected_comment(),
            KeyCode::Char('t') => self.toggle_time_title(),
            KeyCode::Char('q') | KeyCode::Esc => return ControlFlow::Break(()),
            _ => {}
        }
        ControlFlow::Continue(())
    }

    fn toggle_time_title(&mut self) {
        self.state.show_time_title = !self.state.show_time_title;
    }

    pub async fn run(mut self) -> Result<()> {
        // Terminal initialization
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = ratatui::backend::CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Main event loop
        let result = self.event_loop(&mut terminal).await;

        // Cleanup
        self.cleanup(&mut terminal)?;

        // Return any error that occurred
        result
    }

    async fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        // Redraw periodically so the relative time keeps up
        let tick_rate = Duration::from_millis(1000);
        let mut last_tick = Instant::now();

        loop {
            self.post.process_events();

            terminal.draw(|f| draw(f, self))?;

            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if self.handle_input(key).is_break() {
                        log::info!("Quit requested");
                        return Ok(());
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                last_tick = Instant::now();
            }
        }
    }

    fn cleanup<B: Backend + Write>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen,)?;
        terminal.show_cursor()?;
        Ok(())
    }

    pub fn update_status(&mut self) {
        self.status_line = if let Some(message) = self.post.validation_message() {
            message.to_string()
        } else {
            let total = self.post.comments().len();
            match self.state.focus {
                Focus::Composer => format!("{} | {} comentário(s)", locale::COMPOSER_HINTS, total),
                Focus::Comments => {
                    let selected = self.post.selected_comment().map(|i| i + 1).unwrap_or(0);
                    format!("{} | {} / {}", locale::COMMENTS_HINTS, selected, total)
                }
            }
        };
    }
}
