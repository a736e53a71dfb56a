//! Example data loaded at startup so a fresh instance is not empty.

use nevernote_types::Note;

pub const EXAMPLE_NOTEBOOK: &str = "English";

/// The `English` notebook holding a single "Hamlet" note with fixed timestamps.
pub fn example_notebook() -> (String, Vec<Note>) {
    let hamlet = Note {
        id: "1".to_string(),
        title: "Hamlet".to_string(),
        body: "This is Hamlet".to_string(),
        tags: vec!["Classics".to_string(), "Shakespeare".to_string()],
        created: "HamletCreated".to_string(),
        last_modified: "HamletModified".to_string(),
    };

    (EXAMPLE_NOTEBOOK.to_string(), vec![hamlet])
}
