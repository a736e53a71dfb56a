//! Wire types shared by the nevernote service and its HTTP clients.
//!
//! Field names are capitalized on the wire (`Id`, `Title`, ...) and notes
//! serialize their fields in declaration order.

use serde::{Deserialize, Deserializer, Serialize};

// =====================================================
// Domain Types
// =====================================================

/// A single note stored inside a notebook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Body")]
    pub body: String,
    #[serde(rename = "Tags")]
    pub tags: Vec<String>,
    #[serde(rename = "Created")]
    pub created: String,
    #[serde(rename = "LastModified")]
    pub last_modified: String,
}

impl Note {
    /// True when every tag in `filter` appears in this note's tags.
    pub fn has_all_tags(&self, filter: &[String]) -> bool {
        filter
            .iter()
            .all(|wanted| self.tags.iter().any(|tag| tag == wanted))
    }
}

// =====================================================
// Request Types
// =====================================================

/// Deserialize a field, treating a value of the wrong type like an absent one.
///
/// A mistyped field only clears itself; the rest of the body still decodes.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient<T> {
        Valid(Option<T>),
        Mistyped(serde::de::IgnoredAny),
    }

    Ok(match Lenient::<T>::deserialize(deserializer)? {
        Lenient::Valid(value) => value,
        Lenient::Mistyped(_) => None,
    })
}

/// Body of a create/update note request.
///
/// Every field is optional on the wire so the service can report which
/// required field is missing. `tags: None` (absent or `null`) is rejected,
/// while `tags: Some(vec![])` is a valid, empty tag list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoteInput {
    #[serde(rename = "Title", default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(rename = "Body", default, deserialize_with = "lenient")]
    pub body: Option<String>,
    #[serde(rename = "Tags", default, deserialize_with = "lenient")]
    pub tags: Option<Vec<String>>,
}

impl NoteInput {
    pub fn new(title: impl Into<String>, body: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            title: Some(title.into()),
            body: Some(body.into()),
            tags: Some(tags),
        }
    }
}

/// Optional body of a list notes request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagFilter {
    #[serde(rename = "Tags", default, deserialize_with = "lenient")]
    pub tags: Option<Vec<String>>,
}

impl TagFilter {
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or(&[])
    }
}
