#![forbid(unsafe_code)]

//! One-shot episode loading with a single fallback attempt.
//!
//! The primary attempt asks the source for a fresh copy (a cache-busting
//! query parameter on the module URL). Any failure is logged and followed by
//! exactly one plain attempt. If that fails too the page stays degraded for
//! the rest of the session; nothing retries later.

use std::future::Future;

use crate::episodes::EpisodeList;
use crate::error::LoadError;
use crate::logging::{error, info, warn};

/// How a retrieval attempt addresses the content module.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Retrieval {
    /// Append `t=<cache_bust>` to force a fresh fetch.
    Fresh { cache_bust: String },
    /// Plain URL, whatever the host has cached.
    Cached,
}

impl Retrieval {
    /// Resolve the URL for this variant against `base`.
    #[must_use]
    pub fn url(&self, base: &str) -> String {
        match self {
            Self::Fresh { cache_bust } => {
                let sep = if base.contains('?') { '&' } else { '?' };
                format!("{base}{sep}t={cache_bust}")
            }
            Self::Cached => base.to_owned(),
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Fresh { .. } => "fresh",
            Self::Cached => "cached",
        }
    }
}

/// Provider of the ordered episode fragments.
///
/// Both retrieval variants must yield equivalent content.
pub trait EpisodeSource {
    fn fetch(
        &self,
        retrieval: &Retrieval,
    ) -> impl Future<Output = Result<Vec<String>, LoadError>>;
}

/// Result of the whole load sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded {
        episodes: EpisodeList,
        /// Variant label of the attempt that succeeded.
        via: &'static str,
    },
    Degraded {
        primary: LoadError,
        fallback: LoadError,
    },
}

impl LoadOutcome {
    #[must_use]
    pub fn episodes(&self) -> Option<&EpisodeList> {
        match self {
            Self::Loaded { episodes, .. } => Some(episodes),
            Self::Degraded { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }
}

/// Run the primary attempt, then at most one fallback attempt.
pub async fn load_episodes<S: EpisodeSource>(source: &S, cache_bust: String) -> LoadOutcome {
    let primary = Retrieval::Fresh { cache_bust };
    let primary_err = match source.fetch(&primary).await {
        Ok(items) => return loaded(items, primary.label()),
        Err(err) => err,
    };
    warn!(error = %primary_err, "failed to load episodes, retrying without cache bust");

    match source.fetch(&Retrieval::Cached).await {
        Ok(items) => loaded(items, Retrieval::Cached.label()),
        Err(fallback) => {
            error!(error = %fallback, "fallback episode load failed, content stays on placeholder");
            LoadOutcome::Degraded {
                primary: primary_err,
                fallback,
            }
        }
    }
}

fn loaded(items: Vec<String>, via: &'static str) -> LoadOutcome {
    info!(count = items.len(), via, "episodes loaded");
    LoadOutcome::Loaded {
        episodes: EpisodeList::new(items),
        via,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fresh_url_appends_cache_bust() {
        let r = Retrieval::Fresh {
            cache_bust: "0.25".into(),
        };
        assert_eq!(
            r.url("./data/generatedEpisodes.js"),
            "./data/generatedEpisodes.js?t=0.25"
        );
        assert_eq!(r.url("/e.js?v=2"), "/e.js?v=2&t=0.25");
    }

    #[test]
    fn cached_url_is_unchanged() {
        assert_eq!(Retrieval::Cached.url("./e.js"), "./e.js");
    }
}
