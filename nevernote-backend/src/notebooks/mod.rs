//! Notebooks system — named, ordered collections of notes kept in memory
//!
//! All state lives in a single `NotebookStore` shared by every request
//! handler. Nothing is persisted; restarting the process drops every notebook.

pub mod error;
pub mod seed;
pub mod store;

pub use error::StoreError;
pub use store::NotebookStore;
