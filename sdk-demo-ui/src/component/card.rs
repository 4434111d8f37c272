use crate::{theme, widget::*};

pub fn simple<'a, T: 'a, C: Into<Element<'a, T>>>(content: C) -> Container<'a, T> {
    Container::new(content).padding(15).style(theme::card::simple)
}

/// Bordered block grouping the content of a demo section.
pub fn section<'a, T: 'a, C: Into<Element<'a, T>>>(content: C) -> Container<'a, T> {
    Container::new(content).padding(20).style(theme::card::section)
}
