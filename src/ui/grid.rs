use iced::widget::{container, scrollable, text, text_editor};
use iced::{Element, Length};
use iced_aw::Wrap;
use std::collections::HashMap;

use super::card::entry_card;
use crate::config::BoardConfig;
use crate::state::data::{EntryId, Filter, ReferenceEntry};
use crate::state::store::ReferenceStore;
use crate::Message;

/// Grid of cards for the entries the active filter lets through,
/// or a placeholder when there are none.
pub fn grid<'a>(
    shown: Vec<&'a ReferenceEntry>,
    store: &'a ReferenceStore,
    notes: &'a HashMap<EntryId, text_editor::Content>,
    active: Filter,
    config: &BoardConfig,
) -> Element<'a, Message> {
    if shown.is_empty() {
        return empty_state(store.is_empty(), active);
    }

    let cards: Vec<Element<'a, Message>> = shown
        .into_iter()
        .map(|entry| entry_card(entry, store.image(entry), notes.get(&entry.id), config))
        .collect();

    scrollable(
        Wrap::with_elements(cards)
            .spacing(16.0)
            .line_spacing(16.0),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn empty_state<'a>(board_is_empty: bool, active: Filter) -> Element<'a, Message> {
    let message = if board_is_empty {
        "No references yet. Drop images anywhere or use \"Add images\".".to_string()
    } else {
        format!("Nothing tagged {} yet.", active.label())
    };

    container(text(message).size(16))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
