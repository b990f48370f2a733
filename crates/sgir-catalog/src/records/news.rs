//! OSINT news clippings.

use crate::labels::{Impact, Priority};
use crate::resource::{contains_ci, Resource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sgir_types::Regional;

/// An open-source news item tagged to a region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub title: String,
    /// Publication name.
    pub source: String,
    pub regional: Regional,
    /// Topic keywords used by the monitoring desk.
    #[serde(default)]
    pub keywords: Vec<String>,
    pub content: String,
    pub published_at: DateTime<Utc>,
    pub impact: Impact,
    pub relevance: Priority,
}

impl Resource for NewsItem {
    fn regional(&self) -> Regional {
        self.regional
    }

    /// Searches title, content, and keywords.
    fn matches_text(&self, needle: &str) -> bool {
        contains_ci(&self.title, needle)
            || contains_ci(&self.content, needle)
            || self.keywords.iter().any(|k| contains_ci(k, needle))
    }
}
