#![forbid(unsafe_code)]

//! Immutable episode content list.

use std::sync::Arc;

/// Text shown in the content region while no episodes are available.
pub const LOADING_PLACEHOLDER: &str = "Loading...";

/// Ordered HTML fragments, indexed from 0. Cheap to clone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EpisodeList {
    items: Arc<[String]>,
}

impl EpisodeList {
    #[must_use]
    pub fn new(items: Vec<String>) -> Self {
        Self {
            items: items.into(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: u32) -> Option<&str> {
        self.items.get(index as usize).map(String::as_str)
    }

    /// Highest valid index, or `None` for an empty list.
    #[must_use]
    pub fn max_index(&self) -> Option<u32> {
        let last = self.items.len().checked_sub(1)?;
        Some(u32::try_from(last).unwrap_or(u32::MAX))
    }

    /// Content to display for `index`.
    ///
    /// An empty list yields `placeholder`. An index past the end of a
    /// non-empty list yields an empty string.
    #[must_use]
    pub fn content_at<'a>(&'a self, index: u32, placeholder: &'a str) -> &'a str {
        if self.is_empty() {
            placeholder
        } else {
            self.get(index).unwrap_or("")
        }
    }
}
