/// One entry card: image, metadata, remove button, tag toggles, notes
use iced::widget::{button, column, container, image, row, text, text_editor, Space};
use iced::{ContentFit, Element, Length};
use iced_aw::Wrap;

use crate::config::BoardConfig;
use crate::format::{format_bytes, format_time_of_day};
use crate::state::data::{Category, ReferenceEntry};
use crate::Message;

pub fn entry_card<'a>(
    entry: &'a ReferenceEntry,
    handle: Option<&'a image::Handle>,
    notes: Option<&'a text_editor::Content>,
    config: &BoardConfig,
) -> Element<'a, Message> {
    let preview: Element<'a, Message> = match handle {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(config.thumbnail_height))
            .content_fit(ContentFit::Cover)
            .into(),
        None => container(text("No preview").size(12))
            .width(Length::Fill)
            .height(Length::Fixed(config.thumbnail_height))
            .center_x(Length::Fill)
            .center_y(Length::Fixed(config.thumbnail_height))
            .into(),
    };

    let local_time = entry.created_at.with_timezone(&chrono::Local);
    let mut meta = vec![format_bytes(entry.size_bytes as f64)];
    if let Some((width, height)) = entry.dimensions {
        meta.push(format!("{} × {}", width, height));
    }
    meta.push(format_time_of_day(&local_time));

    let header = row![
        column![
            text(&entry.name).size(14),
            text(meta.join(" · ")).size(11),
        ]
        .spacing(2)
        .width(Length::Fill),
        button(text("Remove").size(12))
            .on_press(Message::Remove(entry.id))
            .padding([4, 8])
            .style(button::danger),
    ]
    .spacing(8);

    let id = entry.id;
    let tag_buttons: Vec<Element<'a, Message>> = Category::ALL
        .into_iter()
        .map(|category| {
            let selected = entry.has_tag(category);
            button(text(category.label()).size(12))
                .on_press(Message::ToggleTag(id, category))
                .padding([2, 8])
                .style(move |theme, status| {
                    if selected {
                        button::primary(theme, status)
                    } else {
                        button::secondary(theme, status)
                    }
                })
                .into()
        })
        .collect();

    let tags = Wrap::with_elements(tag_buttons)
        .spacing(4.0)
        .line_spacing(4.0);

    let notes: Element<'a, Message> = match notes {
        Some(content) => text_editor(content)
            .placeholder("Notes...")
            .on_action(move |action| Message::NotesEdited(id, action))
            .height(Length::Fixed(72.0))
            .into(),
        None => Space::with_height(Length::Fixed(72.0)).into(),
    };

    container(column![preview, header, tags, notes].spacing(8))
        .padding(10)
        .width(Length::Fixed(config.card_width))
        .style(container::rounded_box)
        .into()
}
