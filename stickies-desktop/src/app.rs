//! The Stickies application shell.
//!
//! Rendering is a one-way projection of the core note collection: every
//! frame rebuilds the cards from [`NoteStore::list`] plus the current
//! search query, and all mutations flow back through `NoteStore` methods.
//! While a card is in edit mode its text lives in an editor buffer; each
//! keystroke re-arms the debounced save, and toggling out of edit mode
//! commits immediately through the same update path.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use iced::widget::{
    button, column, container, horizontal_space, row, scrollable, text, text_editor, text_input,
    Space,
};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};

use stickies_core::{
    project, MemoryStorage, NoteCard, NoteColor, NoteStore, SaveScheduler, SqliteStorage,
    StickiesError,
};

use crate::theme;

/// How often the shell checks for due debounced saves while any are pending.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Cards per grid row.
const GRID_COLUMNS: usize = 3;

pub fn run() -> iced::Result {
    iced::application("Stickies", StickiesApp::update, StickiesApp::view)
        .subscription(StickiesApp::subscription)
        .theme(StickiesApp::theme)
        .window_size((980.0, 720.0))
        .run_with(StickiesApp::boot)
}

pub struct StickiesApp {
    store: NoteStore,
    scheduler: SaveScheduler,
    query: String,
    palette_open: bool,
    /// Edit buffers for the notes currently in edit mode, keyed by note id.
    editors: HashMap<String, text_editor::Content>,
    status: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    AddToggled,
    ColorPicked(NoteColor),
    SearchChanged(String),
    EditToggled(String),
    ContentEdited(String, text_editor::Action),
    DeletePressed(String),
    Tick(Instant),
}

impl StickiesApp {
    fn boot() -> (Self, Task<Message>) {
        let (store, status) = match open_default_store() {
            Ok(store) => (store, String::from("Ready")),
            Err(e) => {
                log::error!("falling back to in-memory storage: {e}");
                let store = NoteStore::open(Box::new(MemoryStorage::new()))
                    .expect("in-memory storage reads cannot fail");
                (
                    store,
                    format!("Running without persistence: {}", e.user_message()),
                )
            }
        };

        (
            Self {
                store,
                scheduler: SaveScheduler::new(),
                query: String::new(),
                palette_open: false,
                editors: HashMap::new(),
                status,
            },
            Task::none(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::AddToggled => {
                self.palette_open = !self.palette_open;
            }
            Message::ColorPicked(color) => {
                self.palette_open = false;
                match self.store.create(color) {
                    Ok(_) => self.status = String::from("Note created"),
                    Err(e) => self.report(e),
                }
            }
            Message::SearchChanged(query) => {
                self.query = query;
            }
            Message::EditToggled(id) => {
                if let Some(content) = self.editors.remove(&id) {
                    // Leaving edit mode commits immediately and supersedes
                    // any pending debounced save.
                    self.scheduler.cancel(&id);
                    match self.store.update(&id, &editor_text(&content)) {
                        Ok(()) => self.status = String::from("Saved"),
                        Err(e) => self.report(e),
                    }
                } else if let Some(note) = self.store.get(&id) {
                    self.editors
                        .insert(id, text_editor::Content::with_text(&note.content));
                }
            }
            Message::ContentEdited(id, action) => {
                let is_edit = action.is_edit();
                if let Some(content) = self.editors.get_mut(&id) {
                    content.perform(action);
                    if is_edit {
                        self.scheduler.schedule(&id, Instant::now());
                    }
                }
            }
            Message::DeletePressed(id) => {
                self.editors.remove(&id);
                self.scheduler.cancel(&id);
                match self.store.delete(&id) {
                    Ok(()) => self.status = String::from("Note deleted"),
                    Err(e) => self.report(e),
                }
            }
            Message::Tick(now) => {
                for id in self.scheduler.take_due(now) {
                    if let Some(content) = self.editors.get(&id) {
                        match self.store.update(&id, &editor_text(content)) {
                            Ok(()) => self.status = String::from("Saved"),
                            Err(e) => self.report(e),
                        }
                    }
                }
            }
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let cards = self.view_cards();

        column![
            self.view_header(),
            scrollable(cards).height(Length::Fill).width(Length::Fill),
            text(&self.status).size(13),
        ]
        .spacing(16)
        .padding(16)
        .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        // Wake only while a debounced save is pending.
        if self.scheduler.is_idle() {
            Subscription::none()
        } else {
            iced::time::every(TICK_INTERVAL).map(Message::Tick)
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn report(&mut self, error: StickiesError) {
        log::error!("{error}");
        self.status = error.user_message();
    }

    fn view_header(&self) -> Element<'_, Message> {
        let search = text_input("Search notes...", &self.query)
            .on_input(Message::SearchChanged)
            .padding(8)
            .width(Length::Fixed(260.0));

        let add_label = if self.palette_open { "×" } else { "+" };
        let add = button(text(add_label).size(18))
            .on_press(Message::AddToggled)
            .padding(8);

        let top = row![text("Stickies").size(28), horizontal_space(), search, add]
            .spacing(12)
            .align_y(Alignment::Center);

        let mut header = column![top].spacing(12);
        if self.palette_open {
            let swatches: Vec<Element<'_, Message>> = NoteColor::ALL
                .iter()
                .map(|&color| {
                    button(Space::new(28.0, 28.0))
                        .style(theme::swatch(color))
                        .on_press(Message::ColorPicked(color))
                        .into()
                })
                .collect();
            header = header.push(row(swatches).spacing(10));
        }

        header.into()
    }

    fn view_cards(&self) -> Element<'_, Message> {
        let cards = project(self.store.list(), &self.query);
        let visible: Vec<NoteCard> = cards.into_iter().filter(|c| c.visible).collect();

        if visible.is_empty() {
            let hint = if self.store.list().is_empty() {
                "No notes yet — press + and pick a color."
            } else {
                "No notes match the search."
            };
            return text(hint).size(15).into();
        }

        let mut grid = column![].spacing(14);
        for chunk in visible.chunks(GRID_COLUMNS) {
            let mut cards_row = row![].spacing(14);
            for card in chunk {
                cards_row = cards_row.push(self.view_card(card));
            }
            grid = grid.push(cards_row);
        }
        grid.into()
    }

    fn view_card(&self, card: &NoteCard) -> Element<'_, Message> {
        let body: Element<'_, Message> = match self.editors.get(&card.id) {
            Some(content) => text_editor(content)
                .placeholder("Write your note here...")
                .on_action({
                    let id = card.id.clone();
                    move |action| Message::ContentEdited(id.clone(), action)
                })
                .height(Length::Fixed(120.0))
                .into(),
            None => container(text(card.content.clone()).size(15))
                .height(Length::Fixed(120.0))
                .width(Length::Fill)
                .into(),
        };

        let edit_label = if self.editors.contains_key(&card.id) {
            "Save"
        } else {
            "Edit"
        };

        let footer = row![
            text(card.date_label.clone()).size(12),
            horizontal_space(),
            button(text(edit_label).size(12))
                .style(button::secondary)
                .on_press(Message::EditToggled(card.id.clone()))
                .padding(4),
            button(text("Delete").size(12))
                .style(button::danger)
                .on_press(Message::DeletePressed(card.id.clone()))
                .padding(4),
        ]
        .spacing(6)
        .align_y(Alignment::Center);

        container(column![body, footer].spacing(8))
            .style(theme::card(card.color))
            .padding(12)
            .width(Length::Fixed(290.0))
            .into()
    }
}

/// Strips the trailing newline the editor widget appends to its buffer.
fn editor_text(content: &text_editor::Content) -> String {
    let text = content.text();
    text.strip_suffix('\n').map(str::to_string).unwrap_or(text)
}

fn open_default_store() -> stickies_core::Result<NoteStore> {
    let dir = dirs::data_dir()
        .ok_or_else(|| StickiesError::InvalidStore("no platform data directory".to_string()))?
        .join("stickies");
    std::fs::create_dir_all(&dir)?;

    let storage = SqliteStorage::open(dir.join("stickies.db"))?;
    NoteStore::open(Box::new(storage))
}
