use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::text::Text;
use ratatui::widgets::{Paragraph, Widget, Wrap};

use crate::core::state::Session;
use crate::core::view::view;

/// Minimum rows reserved for the inline viewport while the check runs.
pub const VIEWPORT_HEIGHT: u16 = 4;

/// The view as a wrapped paragraph. The trailing newline is not drawn; it
/// becomes the cursor position after the final frame.
fn paragraph(session: &Session) -> Paragraph<'static> {
    let text = view(session);
    Paragraph::new(Text::raw(text.trim_end_matches('\n').to_string())).wrap(Wrap { trim: false })
}

/// Rows the session's text occupies at `width` columns.
pub fn required_height(session: &Session, width: u16) -> u16 {
    let lines = paragraph(session).line_count(width);
    u16::try_from(lines).unwrap_or(u16::MAX)
}

/// Viewport height for the in-progress frame at `width` columns.
pub fn viewport_height(session: &Session, width: u16) -> u16 {
    required_height(session, width).max(VIEWPORT_HEIGHT)
}

/// Draws an in-progress frame into the inline viewport.
pub fn draw_ui(frame: &mut Frame, session: &Session) {
    frame.render_widget(paragraph(session), frame.area());
}

/// Writes the final frame above the viewport at its full height and parks
/// the cursor on the line below it.
///
/// The final text can be taller than the viewport (long URLs, long errors),
/// so it goes through `insert_before` rather than `draw`.
pub fn draw_final<B: Backend>(terminal: &mut Terminal<B>, session: &Session) -> Result<(), B::Error> {
    let width = terminal.get_frame().area().width;
    let height = required_height(session, width);
    let paragraph = paragraph(session);

    terminal.insert_before(height, |buf| paragraph.render(buf.area, buf))?;
    // The viewport now sits below the text; wipe what is left of the old frame
    terminal.clear()?;

    let below = terminal.get_frame().area().as_position();
    terminal.set_cursor_position(below)
}
