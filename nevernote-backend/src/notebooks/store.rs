//! NotebookStore — in-memory notebooks guarded by a single lock
//!
//! Every public operation takes the lock once, so each call is atomic with
//! respect to every other call. Note ids come from one counter shared by all
//! notebooks.

use nevernote_types::{Note, NoteInput};
use parking_lot::Mutex;
use std::collections::HashMap;

use super::error::{NoteField, StoreError};
use super::seed;

/// Timestamp pattern used for `Created` / `LastModified`
pub const TIMESTAMP_FORMAT: &str = "%Y.%m.%d %H:%M:%S";

/// Produces the timestamp string stamped onto notes.
pub type Clock = fn() -> String;

/// Current local time formatted with `TIMESTAMP_FORMAT`.
pub fn local_timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

#[derive(Default)]
struct StoreState {
    notebooks: HashMap<String, Vec<Note>>,
    next_id: u64,
}

impl StoreState {
    fn notebook_mut(&mut self, title: &str) -> Result<&mut Vec<Note>, StoreError> {
        self.notebooks
            .get_mut(title)
            .ok_or_else(|| StoreError::NotebookNotFound(title.to_string()))
    }

    fn titles(&self) -> Vec<String> {
        self.notebooks.keys().cloned().collect()
    }
}

/// Validated fields of a create/update request
struct NoteFields {
    title: String,
    body: String,
    tags: Vec<String>,
}

/// Checks Title, Body and Tags in that order and reports the first missing one.
fn validate(input: NoteInput) -> Result<NoteFields, StoreError> {
    let title = input
        .title
        .filter(|t| !t.is_empty())
        .ok_or(StoreError::MissingField(NoteField::Title))?;
    let body = input
        .body
        .filter(|b| !b.is_empty())
        .ok_or(StoreError::MissingField(NoteField::Body))?;
    let tags = input.tags.ok_or(StoreError::MissingField(NoteField::Tags))?;

    Ok(NoteFields { title, body, tags })
}

/// In-memory store owning every notebook and the note id counter
pub struct NotebookStore {
    state: Mutex<StoreState>,
    clock: Clock,
}

impl Default for NotebookStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NotebookStore {
    /// Create an empty store stamping notes with the local wall-clock time
    pub fn new() -> Self {
        Self::with_clock(local_timestamp)
    }

    /// Create an empty store with a custom timestamp source
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            state: Mutex::new(StoreState::default()),
            clock,
        }
    }

    /// Create a store holding the example `English` notebook
    pub fn seeded() -> Self {
        let store = Self::new();
        let (title, notes) = seed::example_notebook();
        store.insert_notebook(title, notes);
        store
    }

    /// Insert (or replace) a notebook with the given notes as-is.
    ///
    /// Ids and timestamps are kept, and the id counter is left untouched.
    pub fn insert_notebook(&self, title: impl Into<String>, notes: Vec<Note>) {
        let title = title.into();
        log::debug!("[NOTEBOOKS] Loading notebook '{}' with {} notes", title, notes.len());
        self.state.lock().notebooks.insert(title, notes);
    }

    /// Titles of every notebook, in no particular order
    pub fn list_notebook_titles(&self) -> Vec<String> {
        self.state.lock().titles()
    }

    /// Create an empty notebook, replacing any notebook with the same title
    pub fn create_notebook(&self, title: &str) -> Vec<String> {
        let mut state = self.state.lock();
        if state.notebooks.insert(title.to_string(), Vec::new()).is_some() {
            log::debug!("[NOTEBOOKS] Replaced existing notebook '{}' with an empty one", title);
        } else {
            log::debug!("[NOTEBOOKS] Created notebook '{}'", title);
        }
        state.titles()
    }

    /// Delete a notebook and all of its notes
    pub fn delete_notebook(&self, title: &str) -> Result<Vec<String>, StoreError> {
        let mut state = self.state.lock();
        let removed = state
            .notebooks
            .remove(title)
            .ok_or_else(|| StoreError::NotebookNotFound(title.to_string()))?;
        log::debug!("[NOTEBOOKS] Deleted notebook '{}' ({} notes)", title, removed.len());
        Ok(state.titles())
    }

    /// Number of notes in a notebook; a missing notebook counts as empty
    pub fn count_notes(&self, title: &str) -> usize {
        self.state.lock().notebooks.get(title).map_or(0, Vec::len)
    }

    /// Notes carrying every tag in `filter`, in insertion order.
    ///
    /// A missing notebook yields an empty list.
    pub fn list_notes(&self, title: &str, filter: &[String]) -> Vec<Note> {
        let state = self.state.lock();
        match state.notebooks.get(title) {
            Some(notes) => notes
                .iter()
                .filter(|note| note.has_all_tags(filter))
                .cloned()
                .collect(),
            None => Vec::new(),
        }
    }

    /// Append a new note and return the notebook's notes
    pub fn create_note(&self, title: &str, input: NoteInput) -> Result<Vec<Note>, StoreError> {
        let fields = validate(input)?;
        let now = (self.clock)();

        let mut state = self.state.lock();
        let StoreState { notebooks, next_id } = &mut *state;
        let notebook = notebooks
            .get_mut(title)
            .ok_or_else(|| StoreError::NotebookNotFound(title.to_string()))?;
        let id = next_id.to_string();
        *next_id += 1;

        notebook.push(Note {
            id: id.clone(),
            title: fields.title,
            body: fields.body,
            tags: fields.tags,
            created: now.clone(),
            last_modified: now,
        });
        log::debug!("[NOTEBOOKS] Created note {} in '{}'", id, title);

        Ok(notebook.clone())
    }

    /// Replace a note's title, body and tags in place, keeping its id and creation time
    pub fn update_note(
        &self,
        title: &str,
        note_id: &str,
        input: NoteInput,
    ) -> Result<Vec<Note>, StoreError> {
        let fields = validate(input)?;
        let now = (self.clock)();

        let mut state = self.state.lock();
        let notebook = state.notebook_mut(title)?;
        let note = notebook
            .iter_mut()
            .find(|n| n.id == note_id)
            .ok_or_else(|| StoreError::NoteNotFound(note_id.to_string()))?;

        note.title = fields.title;
        note.body = fields.body;
        note.tags = fields.tags;
        note.last_modified = now;
        log::debug!("[NOTEBOOKS] Updated note {} in '{}'", note_id, title);

        Ok(notebook.clone())
    }

    /// First note in the notebook with a matching id
    pub fn read_note(&self, title: &str, note_id: &str) -> Result<Note, StoreError> {
        let state = self.state.lock();
        let notebook = state
            .notebooks
            .get(title)
            .ok_or_else(|| StoreError::NotebookNotFound(title.to_string()))?;

        notebook
            .iter()
            .find(|n| n.id == note_id)
            .cloned()
            .ok_or_else(|| StoreError::NoteNotFound(note_id.to_string()))
    }

    /// Remove the first note with a matching id and return the remaining notes
    pub fn delete_note(&self, title: &str, note_id: &str) -> Result<Vec<Note>, StoreError> {
        let mut state = self.state.lock();
        let notebook = state.notebook_mut(title)?;
        let index = notebook
            .iter()
            .position(|n| n.id == note_id)
            .ok_or_else(|| StoreError::NoteNotFound(note_id.to_string()))?;

        notebook.remove(index);
        log::debug!("[NOTEBOOKS] Deleted note {} from '{}'", note_id, title);

        Ok(notebook.clone())
    }
}
