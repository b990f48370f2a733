//! The resource seam: what the query layer needs from a record.

use sgir_types::Regional;

/// A catalog record that can be visibility-filtered and text-searched.
///
/// Every domain record carries exactly one regional tag, which is the
/// only attribute the access policy looks at. `matches_text` defines
/// the record's *searchable fields* — each type decides which of its
/// fields participate (a document searches title and content, a
/// background check searches name and company, and so on).
pub trait Resource {
    /// The record's regional scope tag.
    fn regional(&self) -> Regional;

    /// Case-insensitive substring match over the record's searchable
    /// text fields.
    fn matches_text(&self, needle: &str) -> bool;
}

/// Case-insensitive substring test, Unicode-aware.
pub(crate) fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
