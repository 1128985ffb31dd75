use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::app_state::App;
use crate::notification::render_notification;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let help_area = if let Some(route) = self.router.current() {
            let layout =
                Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(frame.area());
            crate::detail::detail_render::render_card(route, frame, layout[0]);
            layout[1]
        } else {
            let layout = Layout::vertical([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(frame.area());

            crate::input::input_render::render_field(self, frame, layout[0]);
            crate::results::results_render::render_pane(self, frame, layout[1]);
            layout[2]
        };

        crate::help::help_line_render::render_line(self, frame, help_area);

        let area = frame.area();
        crate::alert::render_popup(&self.alert, frame, area);

        render_notification(frame, &mut self.notification);
    }
}
