mod cursor;
mod widget;
pub(crate) use self::cursor::PlanCursor;
pub(crate) use self::widget::PlanView;
