/// Category filter bar: "All" plus one button per category, single-select
use iced::widget::{button, text, Row};
use iced::Element;

use crate::state::data::{Filter, ReferenceEntry};
use crate::state::filter;
use crate::Message;

pub fn filter_bar<'a>(active: Filter, entries: &[ReferenceEntry]) -> Element<'a, Message> {
    let buttons = Filter::options().map(|option| -> Element<'a, Message> {
        let selected = option == active;
        let label = format!("{} ({})", option.label(), filter::count(entries, option));

        button(text(label).size(14))
            .on_press(Message::FilterSelected(option))
            .padding([6, 12])
            .style(move |theme, status| {
                if selected {
                    button::primary(theme, status)
                } else {
                    button::secondary(theme, status)
                }
            })
            .into()
    });

    Row::with_children(buttons).spacing(8).into()
}
