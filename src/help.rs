use crate::theme::BASE_STYLE;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Flex, Layout, Margin, Rect},
    text::{Line, Text},
    widgets::{Block, Clear, Paragraph, Widget},
};

/// Key bindings listed in the popup, as `(keys, action)` pairs
static BINDINGS: &[(&str, &str)] = &[
    ("h, LEFT", "Previous day"),
    ("l, RIGHT", "Next day"),
    ("k, UP", "Select previous reading"),
    ("j, DOWN", "Select next reading"),
    ("o, ENTER", "Open selected reading"),
    ("0, HOME", "Jump to today"),
    ("g", "Input date to jump to"),
    ("d", "Input day number to jump to"),
    ("?", "Show this help"),
    ("q, ESC", "Quit"),
];

const KEYS_WIDTH: usize = 16;

const DISMISS: &str = "Press the Any Key to dismiss.";

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Help;

impl Help {
    fn text() -> Text<'static> {
        let mut lines = BINDINGS
            .iter()
            .map(|&(keys, action)| Line::raw(format!("{keys:KEYS_WIDTH$}{action}")))
            .collect::<Vec<_>>();
        lines.push(Line::default());
        lines.push(Line::raw(DISMISS));
        Text::from(lines)
    }
}

/*
 * .┌─── Commands ───┐.
 * .│h, LEFT    ...  │.
 * .│...             │.
 * .└────────────────┘.
 *
 * The popup shrinks to fit small areas, cutting off text on the right and
 * bottom.
 */
impl Widget for Help {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Help::text();
        let text_width = u16::try_from(text.width()).unwrap_or(u16::MAX);
        let text_height = u16::try_from(text.height()).unwrap_or(u16::MAX);
        // Border on every side plus one blank column left and right
        let popup_area = centered(
            area,
            text_width.saturating_add(4),
            text_height.saturating_add(2),
        );
        Clear.render(popup_area, buf);
        Block::new().style(BASE_STYLE).render(popup_area, buf);
        Paragraph::new(text)
            .block(
                Block::bordered()
                    .title(" Commands ")
                    .title_alignment(Alignment::Center),
            )
            .style(BASE_STYLE)
            .render(popup_area.inner(Margin::new(1, 0)), buf);
    }
}

/// Returns a `width` by `height` rectangle centered in `area`, shrunk as
/// needed so that it never extends past `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([height.min(area.height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([width.min(area.width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Cell;

    fn render_lines(width: u16, height: u16) -> Vec<String> {
        let area = Rect::new(0, 0, width, height);
        let mut buffer = Buffer::empty(area);
        Help.render(area, &mut buffer);
        buffer
            .content()
            .chunks(usize::from(width).max(1))
            .map(|row| row.iter().map(Cell::symbol).collect::<String>())
            .collect()
    }

    #[test]
    fn test_render() {
        let lines = render_lines(60, 20);
        assert_eq!(lines.len(), 20);
        assert!(lines[3].contains(" Commands "));
        assert!(lines[4].contains("│h, LEFT         Previous day"));
        assert!(lines[13].contains("│q, ESC          Quit"));
        assert!(lines[15].contains("│Press the Any Key to dismiss."));
        assert!(lines[16].contains('└'));
    }

    #[test]
    fn test_render_narrow() {
        let lines = render_lines(30, 20);
        assert_eq!(lines.len(), 20);
        assert!(lines[3].starts_with(" ┌"));
        assert!(lines[3].ends_with("┐ "));
        assert_eq!(lines[4], " │h, LEFT         Previous d│ ");
        assert!(lines[16].starts_with(" └"));
    }

    #[test]
    fn test_render_short() {
        let lines = render_lines(60, 5);
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains(" Commands "));
        assert!(lines[1].contains("│h, LEFT         Previous day"));
        assert!(lines[3].contains("│k, UP           Select previous reading"));
        assert!(lines[4].contains('└'));
    }

    #[test]
    fn test_render_any_size() {
        for width in 0..=60 {
            for height in 0..=20 {
                let area = Rect::new(3, 2, width, height);
                let mut buffer = Buffer::empty(area);
                Help.render(area, &mut buffer);
            }
        }
    }
}
