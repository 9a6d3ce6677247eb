//! Window chrome: the header row with title and close button, the border,
//! and the resize grip. Hit classification is pure so drag/resize/close
//! routing can be tested without a terminal.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders};

use crate::theme;
use crate::ui::{UiFrame, safe_set_string};
use crate::workspace::WindowFrame;

const CLOSE_BUTTON: &str = "[x]";
const RESIZE_GRIP: &str = "◢";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowHit {
    /// Header row outside the close button; starts a drag.
    Header,
    Close,
    /// Bottom-right corner; starts a resize.
    ResizeGrip,
    Body,
}

pub struct WindowChrome;

impl WindowChrome {
    /// Classifies a canvas-coordinate pointer position against a window
    /// frame. `None` means the pointer is outside the window entirely.
    pub fn hit(frame: &WindowFrame, column: i32, row: i32) -> Option<WindowHit> {
        let left = frame.position.x;
        let top = frame.position.y;
        let right = left + frame.size.width as i32;
        let bottom = top + frame.size.height as i32;
        if column < left || column >= right || row < top || row >= bottom {
            return None;
        }
        let close_start = right - 1 - CLOSE_BUTTON.len() as i32;
        if row == top {
            if column >= close_start && column < close_start + CLOSE_BUTTON.len() as i32 {
                return Some(WindowHit::Close);
            }
            return Some(WindowHit::Header);
        }
        if row == bottom - 1 && column == right - 1 {
            return Some(WindowHit::ResizeGrip);
        }
        Some(WindowHit::Body)
    }

    /// Draws the chrome into an offscreen buffer sized to the window and
    /// returns the interior body area.
    pub fn render(buffer: &mut Buffer, title: &str, focused: bool) -> Rect {
        let area = buffer.area;
        if area.width < 2 || area.height < 2 {
            return Rect::default();
        }

        let header_style = Style::default()
            .bg(theme::window_header_bg(focused))
            .fg(theme::window_header_fg(focused))
            .add_modifier(if focused {
                Modifier::BOLD
            } else {
                Modifier::empty()
            });
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell_mut((x, area.y)) {
                cell.set_symbol(" ");
                cell.set_style(header_style);
            }
        }
        safe_set_string(buffer, area, area.x + 1, area.y, title, header_style);
        let close_x = area.x + area.width - 1 - CLOSE_BUTTON.len() as u16;
        safe_set_string(buffer, area, close_x, area.y, CLOSE_BUTTON, header_style);

        let border_area = Rect {
            x: area.x,
            y: area.y + 1,
            width: area.width,
            height: area.height - 1,
        };
        let border_style = Style::default().fg(theme::window_border(focused));
        let mut frame = UiFrame::from_parts(area, buffer);
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
            border_area,
        );
        safe_set_string(
            buffer,
            area,
            area.x + area.width - 1,
            area.y + area.height - 1,
            RESIZE_GRIP,
            border_style,
        );

        Rect {
            x: border_area.x + 1,
            y: border_area.y + 1,
            width: border_area.width.saturating_sub(2),
            height: border_area.height.saturating_sub(2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::{Point, Size};

    fn frame() -> WindowFrame {
        WindowFrame {
            position: Point { x: 10, y: 5 },
            size: Size {
                width: 30,
                height: 10,
            },
            z: 1,
        }
    }

    #[test]
    fn hit_outside_is_none() {
        let frame = frame();
        assert_eq!(WindowChrome::hit(&frame, 9, 5), None);
        assert_eq!(WindowChrome::hit(&frame, 40, 5), None);
        assert_eq!(WindowChrome::hit(&frame, 10, 15), None);
    }

    #[test]
    fn header_and_close_are_distinguished() {
        let frame = frame();
        assert_eq!(WindowChrome::hit(&frame, 11, 5), Some(WindowHit::Header));
        // Close button occupies the 3 cells before the right border.
        assert_eq!(WindowChrome::hit(&frame, 36, 5), Some(WindowHit::Close));
        assert_eq!(WindowChrome::hit(&frame, 38, 5), Some(WindowHit::Close));
        assert_eq!(WindowChrome::hit(&frame, 39, 5), Some(WindowHit::Header));
    }

    #[test]
    fn bottom_right_corner_is_the_resize_grip() {
        let frame = frame();
        assert_eq!(
            WindowChrome::hit(&frame, 39, 14),
            Some(WindowHit::ResizeGrip)
        );
        assert_eq!(WindowChrome::hit(&frame, 38, 14), Some(WindowHit::Body));
        assert_eq!(WindowChrome::hit(&frame, 20, 10), Some(WindowHit::Body));
    }

    #[test]
    fn render_returns_the_interior_body_area() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 30,
            height: 10,
        };
        let mut buffer = Buffer::empty(area);
        let body = WindowChrome::render(&mut buffer, "뉴스", true);
        assert_eq!(body, Rect::new(1, 2, 28, 7));
        // Title lands in the header row.
        assert!(buffer.cell((1, 0)).unwrap().symbol().starts_with('뉴'));
    }
}
