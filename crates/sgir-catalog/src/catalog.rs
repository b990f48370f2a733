//! The in-memory record store and its policy-filtered queries.

use crate::error::SeedError;
use crate::geo;
use crate::records::{
    Asset, BackgroundCheck, IntelDocument, NewsItem, Occurrence, Task, WeatherReport,
};
use crate::resource::Resource;
use serde::Deserialize;
use sgir_auth::{AccessPolicy, Session};
use sgir_types::Regional;
use std::collections::HashMap;

/// Embedded record collections (the pilot deployment's data set).
const BUILTIN_SEED: &str = include_str!("../data/seed.json");

/// Maximum number of hits returned by [`Catalog::search`].
pub const SEARCH_LIMIT: usize = 5;

/// Queries shorter than this (in characters) return no hits.
pub const MIN_QUERY_LEN: usize = 2;

/// Wire shape of the seed file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Seed {
    intel_documents: Vec<IntelDocument>,
    tasks: Vec<Task>,
    background_checks: Vec<BackgroundCheck>,
    occurrences: Vec<Occurrence>,
    osint_news: Vec<NewsItem>,
    assets: Vec<Asset>,
    weather: HashMap<Regional, WeatherReport>,
}

/// One result of a global [`Catalog::search`].
///
/// Search spans the three collections the operations desk actually
/// searches: intelligence documents, background checks, and tasks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchHit<'a> {
    Document(&'a IntelDocument),
    Check(&'a BackgroundCheck),
    Task(&'a Task),
}

impl SearchHit<'_> {
    /// A short human-readable label for the hit.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            SearchHit::Document(doc) => &doc.title,
            SearchHit::Check(check) => &check.name,
            SearchHit::Task(task) => &task.title,
        }
    }
}

/// All record collections, queried exclusively through an
/// [`AccessPolicy`].
///
/// The catalog itself never decides visibility: every query routes
/// each candidate record through `policy.evaluate(...)` with the
/// session's current identity, and a denied record is silently
/// skipped. Results always preserve seed order.
///
/// # Example
///
/// ```
/// use sgir_auth::{Directory, RegionalPolicy, Session};
/// use sgir_catalog::Catalog;
///
/// let directory = Directory::builtin().expect("embedded table");
/// let catalog = Catalog::builtin().expect("embedded seed");
/// let mut session = Session::new(directory.into());
///
/// session.authenticate("Fábio", None).expect("seeded identity");
/// let docs = catalog.documents(&session, &RegionalPolicy, None);
/// assert!(docs.iter().all(|d| d.regional == sgir_types::Regional::Sp));
/// ```
#[derive(Debug)]
pub struct Catalog {
    documents: Vec<IntelDocument>,
    tasks: Vec<Task>,
    checks: Vec<BackgroundCheck>,
    occurrences: Vec<Occurrence>,
    news: Vec<NewsItem>,
    assets: Vec<Asset>,
    weather: HashMap<Regional, WeatherReport>,
}

impl Catalog {
    /// Parses the embedded seed data.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] if the embedded seed is malformed (a
    /// build defect, not a runtime condition).
    pub fn builtin() -> Result<Self, SeedError> {
        Self::from_json(BUILTIN_SEED)
    }

    /// Parses a catalog from seed-shaped JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] on malformed input.
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        let seed: Seed = serde_json::from_str(json)?;
        Ok(Self {
            documents: seed.intel_documents,
            tasks: seed.tasks,
            checks: seed.background_checks,
            occurrences: seed.occurrences,
            news: seed.osint_news,
            assets: seed.assets,
            weather: seed.weather,
        })
    }

    /// Intelligence documents visible to the session, optionally
    /// narrowed by a case-insensitive text filter.
    #[must_use]
    pub fn documents<'a>(
        &'a self,
        session: &Session,
        policy: &dyn AccessPolicy,
        text_filter: Option<&str>,
    ) -> Vec<&'a IntelDocument> {
        visible(&self.documents, session, policy, text_filter)
    }

    /// Tasks visible to the session.
    #[must_use]
    pub fn tasks<'a>(
        &'a self,
        session: &Session,
        policy: &dyn AccessPolicy,
        text_filter: Option<&str>,
    ) -> Vec<&'a Task> {
        visible(&self.tasks, session, policy, text_filter)
    }

    /// Background checks visible to the session.
    #[must_use]
    pub fn checks<'a>(
        &'a self,
        session: &Session,
        policy: &dyn AccessPolicy,
        text_filter: Option<&str>,
    ) -> Vec<&'a BackgroundCheck> {
        visible(&self.checks, session, policy, text_filter)
    }

    /// Occurrences visible to the session.
    #[must_use]
    pub fn occurrences<'a>(
        &'a self,
        session: &Session,
        policy: &dyn AccessPolicy,
        text_filter: Option<&str>,
    ) -> Vec<&'a Occurrence> {
        visible(&self.occurrences, session, policy, text_filter)
    }

    /// News items visible to the session.
    #[must_use]
    pub fn news<'a>(
        &'a self,
        session: &Session,
        policy: &dyn AccessPolicy,
        text_filter: Option<&str>,
    ) -> Vec<&'a NewsItem> {
        visible(&self.news, session, policy, text_filter)
    }

    /// Global search over documents, background checks, and tasks.
    ///
    /// Hits keep seed order within each collection, collections are
    /// concatenated in that order, and the result is truncated to
    /// [`SEARCH_LIMIT`]. Queries shorter than [`MIN_QUERY_LEN`]
    /// characters yield nothing.
    #[must_use]
    pub fn search<'a>(
        &'a self,
        session: &Session,
        policy: &dyn AccessPolicy,
        query: &str,
    ) -> Vec<SearchHit<'a>> {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_LEN {
            return Vec::new();
        }

        let docs = visible(&self.documents, session, policy, Some(query))
            .into_iter()
            .map(SearchHit::Document);
        let checks = visible(&self.checks, session, policy, Some(query))
            .into_iter()
            .map(SearchHit::Check);
        let tasks = visible(&self.tasks, session, policy, Some(query))
            .into_iter()
            .map(SearchHit::Task);

        docs.chain(checks).chain(tasks).take(SEARCH_LIMIT).collect()
    }

    /// Occurrences visible to the session within `radius_km` of a
    /// point, by great-circle distance.
    #[must_use]
    pub fn occurrences_near<'a>(
        &'a self,
        session: &Session,
        policy: &dyn AccessPolicy,
        lat: f64,
        lon: f64,
        radius_km: f64,
    ) -> Vec<&'a Occurrence> {
        self.occurrences(session, policy, None)
            .into_iter()
            .filter(|o| geo::distance_km(lat, lon, o.lat, o.lon) <= radius_km)
            .collect()
    }

    /// Weather snapshot for a region, if one is seeded.
    #[must_use]
    pub fn weather(&self, regional: Regional) -> Option<&WeatherReport> {
        self.weather.get(&regional)
    }

    /// Strategic assets. Reference data, not visibility-filtered.
    #[must_use]
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }
}

/// The single filtering path: policy first, then the optional text
/// filter, preserving input order.
fn visible<'a, R: Resource>(
    items: &'a [R],
    session: &Session,
    policy: &dyn AccessPolicy,
    text_filter: Option<&str>,
) -> Vec<&'a R> {
    items
        .iter()
        .filter(|item| policy.evaluate(session.current(), item.regional(), &[]))
        .filter(|item| text_filter.map_or(true, |needle| item.matches_text(needle)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sgir_auth::{Directory, RegionalPolicy, Session};
    use std::sync::Arc;

    fn session_for(name: &str) -> Session {
        let directory = Arc::new(Directory::builtin().expect("embedded table"));
        let mut session = Session::new(directory);
        session.authenticate(name, None).expect("seeded identity");
        session
    }

    #[test]
    fn builtin_seed_parses_completely() {
        let catalog = Catalog::builtin().expect("embedded seed");
        assert_eq!(catalog.documents.len(), 5);
        assert_eq!(catalog.tasks.len(), 5);
        assert_eq!(catalog.checks.len(), 4);
        assert_eq!(catalog.occurrences.len(), 6);
        assert_eq!(catalog.news.len(), 6);
        assert_eq!(catalog.assets.len(), 4);
        assert_eq!(catalog.weather.len(), 5);
    }

    #[test]
    fn logged_out_session_sees_nothing() {
        let catalog = Catalog::builtin().expect("embedded seed");
        let directory = Arc::new(Directory::builtin().expect("embedded table"));
        let session = Session::new(directory);
        let policy = RegionalPolicy;

        assert!(catalog.documents(&session, &policy, None).is_empty());
        assert!(catalog.tasks(&session, &policy, None).is_empty());
        assert!(catalog.search(&session, &policy, "drone").is_empty());
    }

    #[test]
    fn regional_analyst_sees_only_own_region() {
        let catalog = Catalog::builtin().expect("embedded seed");
        let session = session_for("Fábio");
        let policy = RegionalPolicy;

        let docs = catalog.documents(&session, &policy, None);
        assert!(!docs.is_empty());
        assert!(docs.iter().all(|d| d.regional == Regional::Sp));

        // Sharing metadata does not widen visibility: RELINFO-002 is
        // an MS document shared with SP, still invisible to Fábio.
        assert!(docs.iter().all(|d| d.id != "RELINFO-002"));
    }

    #[test]
    fn supervisor_sees_every_region() {
        let catalog = Catalog::builtin().expect("embedded seed");
        let session = session_for("Gideonis");
        let policy = RegionalPolicy;

        assert_eq!(catalog.documents(&session, &policy, None).len(), 5);
        assert_eq!(catalog.occurrences(&session, &policy, None).len(), 6);
        assert_eq!(catalog.news(&session, &policy, None).len(), 6);
    }

    #[test]
    fn text_filter_is_case_insensitive() {
        let catalog = Catalog::builtin().expect("embedded seed");
        let session = session_for("Gideonis");
        let policy = RegionalPolicy;

        let hits = catalog.tasks(&session, &policy, Some("DRONES"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 5);
    }

    #[test]
    fn results_preserve_seed_order() {
        let catalog = Catalog::builtin().expect("embedded seed");
        let session = session_for("Gideonis");
        let policy = RegionalPolicy;

        let ids: Vec<u32> = catalog
            .occurrences(&session, &policy, None)
            .iter()
            .map(|o| o.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn search_truncates_to_limit() {
        let catalog = Catalog::builtin().expect("embedded seed");
        let session = session_for("Gideonis");
        let policy = RegionalPolicy;

        // "de" matches broadly across all three search collections.
        let hits = catalog.search(&session, &policy, "de");
        assert_eq!(hits.len(), SEARCH_LIMIT);
    }

    #[test]
    fn search_ignores_short_queries() {
        let catalog = Catalog::builtin().expect("embedded seed");
        let session = session_for("Gideonis");
        let policy = RegionalPolicy;

        assert!(catalog.search(&session, &policy, "a").is_empty());
        assert!(catalog.search(&session, &policy, "  a  ").is_empty());
        assert!(catalog.search(&session, &policy, "").is_empty());
    }

    #[test]
    fn search_respects_visibility() {
        let catalog = Catalog::builtin().expect("embedded seed");
        let policy = RegionalPolicy;

        // Carlos Pereira appears in an SP document, an SP check, and
        // an SP task; Fábio (SP) finds all three.
        let fabio = session_for("Fábio");
        let hits = catalog.search(&fabio, &policy, "carlos pereira");
        assert_eq!(hits.len(), 3);

        // G. Silva (MS) finds none of them.
        let silva = session_for("G. Silva");
        assert!(catalog.search(&silva, &policy, "carlos pereira").is_empty());
    }

    #[test]
    fn search_orders_documents_then_checks_then_tasks() {
        let catalog = Catalog::builtin().expect("embedded seed");
        let session = session_for("Fábio");
        let policy = RegionalPolicy;

        let hits = catalog.search(&session, &policy, "carlos pereira");
        assert!(matches!(hits[0], SearchHit::Document(_)));
        assert!(matches!(hits[1], SearchHit::Check(_)));
        assert!(matches!(hits[2], SearchHit::Task(_)));
    }

    #[test]
    fn occurrences_near_respects_radius_and_visibility() {
        let catalog = Catalog::builtin().expect("embedded seed");
        let policy = RegionalPolicy;

        // Around the Santos terminal: only the drone occurrence (id 5).
        let geovana = session_for("Geovana");
        let near = catalog.occurrences_near(&geovana, &policy, -23.98, -46.31, 50.0);
        assert_eq!(near.len(), 1);
        assert_eq!(near[0].id, 5);

        // Same point, SP-interior analyst: occurrence 5 is SP-Porto,
        // so nothing within 50 km is visible.
        let fabio = session_for("Fábio");
        assert!(catalog
            .occurrences_near(&fabio, &policy, -23.98, -46.31, 50.0)
            .is_empty());

        // A supervisor with an enormous radius sees everything.
        let gideonis = session_for("Gideonis");
        let all = catalog.occurrences_near(&gideonis, &policy, -23.98, -46.31, 10_000.0);
        assert_eq!(all.len(), 6);
    }

    #[test]
    fn weather_lookup_by_region() {
        let catalog = Catalog::builtin().expect("embedded seed");

        let ms = catalog.weather(Regional::Ms).expect("seeded region");
        assert_eq!(ms.temp, Some(32));

        let global = catalog.weather(Regional::Global).expect("seeded region");
        assert!(!global.has_measurements());
    }

    #[test]
    fn assets_are_unfiltered_reference_data() {
        let catalog = Catalog::builtin().expect("embedded seed");
        assert_eq!(catalog.assets().len(), 4);
    }

    #[test]
    fn from_json_rejects_malformed_input() {
        assert!(Catalog::from_json("{ not json").is_err());
        assert!(Catalog::from_json("{}").is_err(), "missing collections");
    }
}
