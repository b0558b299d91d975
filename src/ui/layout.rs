use crate::ui::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Paragraph,
    Frame,
};

pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(f.area());

    app.update_status();

    f.render_stateful_widget(&mut app.post, chunks[0], &mut app.state);
    f.render_widget(Paragraph::new(app.status_line.clone()), chunks[1]);
}
