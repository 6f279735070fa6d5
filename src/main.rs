use chrono::Utc;
use iced::widget::{button, column, container, row, text, text_editor};
use iced::{event, window, Element, Event, Length, Size, Subscription, Task, Theme};
use rfd::AsyncFileDialog;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod format;
mod state;
mod ui;

use config::BoardConfig;
use state::data::{Category, EntryId, Filter};
use state::intake::{self, CandidateFile, PICKER_EXTENSIONS};
use state::store::ReferenceStore;

/// Main application state
struct ReferenceBoard {
    /// Every entry on the board plus their image handles
    store: ReferenceStore,
    /// Which entries the grid shows
    filter: Filter,
    /// Editor state for each entry's notes field
    notes: HashMap<EntryId, text_editor::Content>,
    /// Files are being dragged over the window
    drop_hover: bool,
    config: BoardConfig,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked the "Add images" button
    PickFiles,
    /// The file dialog closed (empty if cancelled)
    FilesPicked(Vec<PathBuf>),
    /// A file or folder was dropped on the window
    PathDropped(PathBuf),
    /// Background walk of a dropped folder finished
    FolderScanned(Vec<CandidateFile>),
    DropHover(bool),
    FilterSelected(Filter),
    ToggleTag(EntryId, Category),
    NotesEdited(EntryId, text_editor::Action),
    Remove(EntryId),
    /// The window is closing: release everything
    CloseRequested,
}

impl ReferenceBoard {
    fn new(config: BoardConfig) -> (Self, Task<Message>) {
        info!("🎨 Reference Board ready");

        (
            ReferenceBoard {
                store: ReferenceStore::new(),
                filter: Filter::All,
                notes: HashMap::new(),
                drop_hover: false,
                config,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickFiles => Task::perform(pick_images(), Message::FilesPicked),
            Message::FilesPicked(paths) => {
                self.ingest(intake::collect_candidates(paths));
                Task::none()
            }
            Message::PathDropped(path) => {
                self.drop_hover = false;

                if path.is_dir() {
                    debug!("Scanning dropped folder {}", path.display());
                    return Task::perform(intake::scan_folder(path), Message::FolderScanned);
                }

                self.ingest(intake::collect_candidates(vec![path]));
                Task::none()
            }
            Message::FolderScanned(batch) => {
                self.ingest(batch);
                Task::none()
            }
            Message::DropHover(hovering) => {
                self.drop_hover = hovering;
                Task::none()
            }
            Message::FilterSelected(filter) => {
                self.filter = filter;
                Task::none()
            }
            Message::ToggleTag(id, category) => {
                self.store.toggle_tag(id, category);
                Task::none()
            }
            Message::NotesEdited(id, action) => {
                if let Some(content) = self.notes.get_mut(&id) {
                    let is_edit = action.is_edit();
                    content.perform(action);
                    if is_edit {
                        self.store.update_notes(id, content.text());
                    }
                }
                Task::none()
            }
            Message::Remove(id) => {
                self.store.remove(id);
                self.notes.remove(&id);
                Task::none()
            }
            Message::CloseRequested => {
                let released = self.store.release_all();
                self.notes.clear();
                info!("👋 Closing, {} handles released", released);
                iced::exit()
            }
        }
    }

    /// Merge a batch into the store and give new entries a notes editor
    fn ingest(&mut self, batch: Vec<CandidateFile>) {
        let added = self.store.ingest(batch, Utc::now());
        if added == 0 {
            return;
        }

        for entry in self.store.entries() {
            self.notes
                .entry(entry.id)
                .or_insert_with(text_editor::Content::new);
        }

        info!("📥 Added {} references ({} on board)", added, self.store.len());
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let shown = state::filter::apply(self.store.entries(), self.filter);

        let status = if self.drop_hover {
            "Release to add images".to_string()
        } else {
            format!("Showing {} of {}", shown.len(), self.store.len())
        };

        let toolbar = row![
            button("Add images")
                .on_press(Message::PickFiles)
                .padding(10),
            text(status).size(16),
        ]
        .spacing(20)
        .align_y(iced::Alignment::Center);

        let content = column![
            toolbar,
            ui::filter_bar::filter_bar(self.filter, self.store.entries()),
            ui::grid::grid(shown, &self.store, &self.notes, self.filter, &self.config),
        ]
        .spacing(20)
        .padding(24);

        let hovering = self.drop_hover;
        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |theme: &Theme| {
                let mut style = container::transparent(theme);
                if hovering {
                    style.border = style
                        .border
                        .color(theme.palette().primary)
                        .width(3.0)
                        .rounded(8.0);
                }
                style
            })
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(window_event)
    }

    fn theme(&self) -> Theme {
        self.config.theme.to_theme()
    }
}

/// Map window-level events (drag-and-drop, close) to messages
fn window_event(event: Event, _status: event::Status, _id: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::FileHovered(_)) => Some(Message::DropHover(true)),
        Event::Window(window::Event::FilesHoveredLeft) => Some(Message::DropHover(false)),
        Event::Window(window::Event::FileDropped(path)) => Some(Message::PathDropped(path)),
        Event::Window(window::Event::CloseRequested) => Some(Message::CloseRequested),
        _ => None,
    }
}

/// Show the native multi-select picker for image files
async fn pick_images() -> Vec<PathBuf> {
    AsyncFileDialog::new()
        .set_title("Add reference images")
        .add_filter("Images", &PICKER_EXTENSIONS)
        .pick_files()
        .await
        .map(|files| files.iter().map(|f| f.path().to_path_buf()).collect())
        .unwrap_or_default()
}

fn init_tracing(config: &BoardConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> iced::Result {
    let loaded = BoardConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    init_tracing(&config);
    if let Err(e) = &loaded {
        warn!("⚠️  Ignoring config file, using defaults: {}", e);
    }

    iced::application(
        "Reference Board",
        ReferenceBoard::update,
        ReferenceBoard::view,
    )
    .subscription(ReferenceBoard::subscription)
    .theme(ReferenceBoard::theme)
    .window(window::Settings {
        size: Size::new(1280.0, 860.0),
        exit_on_close_request: false,
        ..window::Settings::default()
    })
    .centered()
    .run_with(move || ReferenceBoard::new(config))
}
