use super::PlanCursor;
use crate::theme::{
    category_style, CARD_STYLE, DATE_STYLE, LABEL_STYLE, LINK_STYLE, RULE_STYLE,
    SELECTED_CARD_STYLE,
};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, StatefulWidget, Widget},
};

/// Maximum width of the plan in columns; wider areas center it
const MAIN_WIDTH: u16 = 60;

/// Number of lines taken up by each reading's card
const CARD_LINES: u16 = 3;

const ACS_HLINE: &str = "─";

/*
 * Day 1                               January 1, 2026
 * ───────────────────────────────────────────────────
 * ┌ Old Testament ──────────────────────────────────┐
 * │Genesis 1-2                                      │
 * └─────────────────────────────────────────────────┘
 * ...
 * https://www.biblegateway.com/passage/?search=...
 */
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct PlanView;

impl StatefulWidget for PlanView {
    type State = PlanCursor;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [area] = Layout::horizontal([MAIN_WIDTH.min(area.width)])
            .flex(Flex::Center)
            .areas(area);
        let [header_area, rule_area, cards_area, link_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);
        let plan = state.plan();
        // Style spans rather than lines so that the label and the date, which
        // share a row, don't restyle each other:
        Line::from(Span::styled(plan.label.as_str(), LABEL_STYLE)).render(header_area, buf);
        Line::from(Span::styled(plan.date(), DATE_STYLE))
            .right_aligned()
            .render(header_area, buf);
        Line::styled(ACS_HLINE.repeat(rule_area.width.into()), RULE_STYLE).render(rule_area, buf);
        // Scroll just far enough that the selected card is the last one shown
        let fits = usize::from(cards_area.height / CARD_LINES);
        let first = (state.selected() + 1).saturating_sub(fits.max(1));
        let mut y = cards_area.y;
        for (i, reading) in plan.readings.iter().enumerate().skip(first).take(fits) {
            let card_area = Rect {
                y,
                height: CARD_LINES,
                ..cards_area
            };
            let border_style = if i == state.selected() {
                SELECTED_CARD_STYLE
            } else {
                CARD_STYLE
            };
            Paragraph::new(reading.reference.as_str())
                .block(
                    Block::bordered()
                        .border_style(border_style)
                        .title(Span::styled(
                            format!(" {} ", reading.category),
                            category_style(reading.category),
                        )),
                )
                .render(card_area, buf);
            y += CARD_LINES;
        }
        if let Some(reading) = state.selected_reading() {
            Line::styled(reading.link.as_str(), LINK_STYLE).render(link_area, buf);
        }
    }
}
