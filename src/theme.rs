use crate::plan::Category;
use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const LABEL_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const DATE_STYLE: Style = BASE_STYLE.fg(Color::LightBlue);

pub(crate) const RULE_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

pub(crate) const SELECTED_CARD_STYLE: Style = BASE_STYLE
    .fg(Color::LightYellow)
    .add_modifier(Modifier::BOLD);

pub(crate) const CARD_STYLE: Style = BASE_STYLE.fg(Color::Gray);

pub(crate) const LINK_STYLE: Style = BASE_STYLE
    .fg(Color::DarkGray)
    .add_modifier(Modifier::UNDERLINED);

pub(crate) const fn category_style(category: Category) -> Style {
    match category {
        Category::OldTestament => BASE_STYLE.fg(Color::LightBlue),
        Category::Psalms => BASE_STYLE.fg(Color::LightMagenta),
        Category::WisdomBooks => BASE_STYLE.fg(Color::LightGreen),
        Category::NewTestament => BASE_STYLE.fg(Color::LightRed),
    }
}

pub(crate) mod jumpto {
    use super::*;

    pub(crate) const UNFILLED_CELL_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

    pub(crate) const READY_ENTER_STYLE: Style = BASE_STYLE.add_modifier(Modifier::UNDERLINED);
}
