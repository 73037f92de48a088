use crate::browser::LinkOpener;
use crate::help::Help;
use crate::jumpto::{JumpKind, JumpTo, JumpToInput, JumpToOutput, JumpToState};
use crate::plan::Day;
use crate::theme::BASE_STYLE;
use crate::viewer::{PlanCursor, PlanView};
use crossterm::event::{read, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::Rect,
    widgets::{StatefulWidget, Widget},
    Terminal,
};
use std::io::{self, Write};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App<O> {
    cursor: PlanCursor,
    opener: O,
    state: AppState,
}

impl<O: LinkOpener> App<O> {
    pub(crate) fn new(cursor: PlanCursor, opener: O) -> App<O> {
        App {
            cursor,
            opener,
            state: AppState::Viewing,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.handle_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = read()?
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match &mut self.state {
            AppState::Viewing => match key {
                KeyCode::Char('h') | KeyCode::Left => self.cursor.previous_day().is_ok(),
                KeyCode::Char('l') | KeyCode::Right => self.cursor.next_day().is_ok(),
                KeyCode::Char('k') | KeyCode::Up => self.cursor.select_previous(),
                KeyCode::Char('j') | KeyCode::Down => self.cursor.select_next(),
                KeyCode::Char('o') | KeyCode::Enter => self.open_selected(),
                KeyCode::Char('0') | KeyCode::Home => {
                    self.cursor.jump_to_today();
                    true
                }
                KeyCode::Char('g') => {
                    self.state = AppState::Jumping(JumpToState::new(JumpKind::Date));
                    true
                }
                KeyCode::Char('d') => {
                    self.state = AppState::Jumping(JumpToState::new(JumpKind::Day));
                    true
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Viewing;
                true
            }
            AppState::Jumping(state) => {
                let prompt_key = match state.kind() {
                    JumpKind::Date => 'g',
                    JumpKind::Day => 'd',
                };
                if matches!(key, KeyCode::Char('q') | KeyCode::Esc)
                    || key == KeyCode::Char(prompt_key)
                {
                    self.state = AppState::Viewing;
                    true
                } else {
                    let output = match key {
                        KeyCode::Char(c) => c
                            .to_digit(10)
                            .and_then(|d| u8::try_from(d).ok())
                            .map_or(JumpToOutput::Invalid, |d| {
                                state.handle_input(JumpToInput::Digit(d))
                            }),
                        KeyCode::Backspace | KeyCode::Delete => {
                            state.handle_input(JumpToInput::Backspace)
                        }
                        KeyCode::Enter => state.handle_input(JumpToInput::Enter),
                        _ => JumpToOutput::Invalid,
                    };
                    match output {
                        JumpToOutput::Ok => true,
                        JumpToOutput::Invalid => false,
                        JumpToOutput::Jump(day) => {
                            self.state = AppState::Viewing;
                            self.jump_to(day);
                            true
                        }
                    }
                }
            }
            AppState::Quitting => false,
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }

    fn jump_to(&mut self, day: Day) {
        self.cursor.jump_to_day(day);
    }

    fn open_selected(&mut self) -> bool {
        let Some(reading) = self.cursor.selected_reading() else {
            return false;
        };
        match self.opener.open(&reading.link) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("failed to open {}: {e}", reading.link);
                false
            }
        }
    }
}

impl<O: LinkOpener> Widget for &mut App<O> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        PlanView.render(area, buf, &mut self.cursor);
        if self.state == AppState::Helping {
            Help.render(area, buf);
        } else if let AppState::Jumping(ref mut state) = self.state {
            JumpTo.render(area, buf, state);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Viewing,
    Helping,
    Jumping(JumpToState),
    Quitting,
}
