//! Data models for the post store

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Store-assigned identifier, immutable once assigned
    pub id: u64,
    /// Post title, never blank while stored
    pub title: String,
    /// Post body, never blank while stored
    pub content: String,
}

impl Post {
    pub fn new(id: u64, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }

    fn field(&self, field: SortField) -> &str {
        match field {
            SortField::Title => &self.title,
            SortField::Content => &self.content,
        }
    }

    /// Lowercased value of `field`, used as the sort key
    pub fn sort_key(&self, field: SortField) -> String {
        self.field(field).to_lowercase()
    }
}

/// Input for creating a post.
///
/// `None` means the field was absent; `Some("")` means it was present but blank.
/// Both are rejected by create.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPost {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NewPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }
}

/// Partial update of a post. Absent or blank fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostUpdate {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: None,
        }
    }

    pub fn content(content: impl Into<String>) -> Self {
        Self {
            title: None,
            content: Some(content.into()),
        }
    }
}

/// Field a listing can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Content,
}

impl FromStr for SortField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(SortField::Title),
            "content" => Ok(SortField::Content),
            _ => Err(()),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortField::Title => write!(f, "title"),
            SortField::Content => write!(f, "content"),
        }
    }
}

/// Sort direction, ascending unless requested otherwise
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

/// Ordering requested for a listing. No field keeps insertion order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortOrder {
    pub field: Option<SortField>,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn by(field: SortField, direction: SortDirection) -> Self {
        Self {
            field: Some(field),
            direction,
        }
    }
}

/// Search terms. Matching is case-insensitive substring containment,
/// OR-ed across fields; empty or absent terms never match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl SearchQuery {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: None,
        }
    }

    pub fn content(content: impl Into<String>) -> Self {
        Self {
            title: None,
            content: Some(content.into()),
        }
    }

    /// Whether `post` matches either term
    pub fn matches(&self, post: &Post) -> bool {
        contains_term(&post.title, self.title.as_deref())
            || contains_term(&post.content, self.content.as_deref())
    }
}

fn contains_term(haystack: &str, term: Option<&str>) -> bool {
    match term {
        Some(term) if !term.is_empty() => haystack.to_lowercase().contains(&term.to_lowercase()),
        _ => false,
    }
}

/// Whether a supplied field counts as present for validation
pub(crate) fn is_filled(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}
