use crate::plan::{day_of_year, Day};
use crate::theme::{
    jumpto::{READY_ENTER_STYLE, UNFILLED_CELL_STYLE},
    BASE_STYLE,
};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Flex, Layout, Margin, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Clear, StatefulWidget, Widget},
};
use std::ops::Range;

const OUTER_WIDTH: u16 = 20;
const OUTER_HEIGHT: u16 = 8;

/// Most digits any prompt accepts
const MAX_DIGITS: usize = 8;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct JumpTo;

impl StatefulWidget for JumpTo {
    type State = JumpToState;

    /*
     * ....................
     * .┌ Jump to Date ──┐.
     * .│                │.
     * .│   YYYY-MM-DD   │.
     * .│                │.
     * .│    [ENTER]     │.
     * .└────────────────┘.
     * ....................
     */

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [outer_area] = Layout::horizontal([OUTER_WIDTH])
            .flex(Flex::Center)
            .areas(area);
        let [outer_area] = Layout::vertical([OUTER_HEIGHT])
            .flex(Flex::Center)
            .areas(outer_area);
        Clear.render(outer_area, buf);
        Block::new().style(BASE_STYLE).render(outer_area, buf);
        let block_area = outer_area.inner(Margin::new(1, 1));
        Block::bordered()
            .title(state.kind.title())
            .title_alignment(Alignment::Center)
            .render(block_area, buf);
        let text_area = block_area.inner(Margin::new(1, 1));
        state.to_text().render(text_area, buf);
    }
}

/// What a jump prompt asks for
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum JumpKind {
    /// A calendar date, entered as `YYYY-MM-DD`
    Date,
    /// A day number of the plan, one to three digits
    Day,
}

impl JumpKind {
    fn title(self) -> &'static str {
        match self {
            JumpKind::Date => " Jump to Date ",
            JumpKind::Day => " Jump to Day ",
        }
    }

    fn slots(self) -> usize {
        match self {
            JumpKind::Date => 8,
            JumpKind::Day => 3,
        }
    }

    // Placeholder shown for an unfilled digit at `pos`
    fn fallback(self, pos: usize) -> &'static str {
        match (self, pos) {
            (JumpKind::Date, 0..4) => "Y",
            (JumpKind::Date, 4..6) => "M",
            (JumpKind::Date, _) => "D",
            (JumpKind::Day, _) => "N",
        }
    }

    fn separator_before(self, pos: usize) -> bool {
        self == JumpKind::Date && (pos == 4 || pos == 6)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct JumpToState {
    kind: JumpKind,
    digits: [Option<u8>; MAX_DIGITS],
    pos: usize,
}

impl JumpToState {
    pub(crate) fn new(kind: JumpKind) -> JumpToState {
        JumpToState {
            kind,
            digits: [None; MAX_DIGITS],
            pos: 0,
        }
    }

    pub(crate) fn kind(&self) -> JumpKind {
        self.kind
    }

    // A date needs every digit; a day number needs at least one
    fn ready(&self) -> bool {
        match self.kind {
            JumpKind::Date => self.pos == self.kind.slots(),
            JumpKind::Day => self.pos > 0,
        }
    }

    fn to_text(self) -> Text<'static> {
        Text::from_iter([
            Line::styled("", BASE_STYLE),
            self.to_line(),
            Line::styled("", BASE_STYLE),
            // Style a span and convert it to a line rather than creating a
            // styled line directly so that only the "[ENTER]" text and not any
            // of its centering padding will be underlined:
            Line::from(Span::styled(
                "[ENTER]",
                if self.ready() {
                    READY_ENTER_STYLE
                } else {
                    BASE_STYLE
                },
            )),
        ])
        .centered()
    }

    fn to_line(self) -> Line<'static> {
        let mut spans = Vec::new();
        for (pos, dg) in self.digits.iter().take(self.kind.slots()).enumerate() {
            if self.kind.separator_before(pos) {
                spans.push(Span::styled("-", BASE_STYLE));
            }
            spans.push(match dg {
                Some(d) => Span::styled(d.to_string(), BASE_STYLE),
                None => Span::styled(self.kind.fallback(pos), UNFILLED_CELL_STYLE),
            });
        }
        Line::from_iter(spans)
    }

    pub(crate) fn handle_input(&mut self, input: JumpToInput) -> JumpToOutput {
        match input {
            JumpToInput::Digit(d) if self.pos < self.kind.slots() => {
                self.digits[self.pos] = Some(d);
                self.pos += 1;
                JumpToOutput::Ok
            }
            JumpToInput::Backspace if self.pos > 0 => {
                self.pos -= 1;
                self.digits[self.pos] = None;
                JumpToOutput::Ok
            }
            JumpToInput::Enter if self.ready() => {
                self.target().map_or(JumpToOutput::Invalid, JumpToOutput::Jump)
            }
            _ => JumpToOutput::Invalid,
        }
    }

    fn target(&self) -> Option<Day> {
        match self.kind {
            JumpKind::Date => {
                let year = i32::try_from(self.number(0..4)).ok()?;
                let month = u8::try_from(self.number(4..6)).ok()?;
                let month = time::Month::try_from(month).ok()?;
                let day = u8::try_from(self.number(6..8)).ok()?;
                time::Date::from_calendar_date(year, month, day)
                    .ok()
                    .map(day_of_year)
            }
            JumpKind::Day => Day::checked(self.number(0..self.pos)),
        }
    }

    fn number(&self, range: Range<usize>) -> i64 {
        self.digits[range]
            .iter()
            .flatten()
            .fold(0, |n, &d| n * 10 + i64::from(d))
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum JumpToInput {
    Digit(u8),
    Backspace,
    Enter,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum JumpToOutput {
    Ok,
    Invalid,
    Jump(Day),
}
