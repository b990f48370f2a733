//! Policy-filtered resource catalog for SGIR.
//!
//! This crate holds the domain data: intelligence documents, tasks,
//! background checks, geolocated occurrences, OSINT news, strategic
//! assets, and weather snapshots. It owns no access decisions of its
//! own — every query routes each candidate record through an
//! [`AccessPolicy`](sgir_auth::AccessPolicy) with the caller's
//! [`Session`](sgir_auth::Session).
//!
//! # Query Model
//!
//! | Surface | Filtered by policy | Text-searchable |
//! |---------|--------------------|-----------------|
//! | [`Catalog::documents`] etc. | yes | optional filter |
//! | [`Catalog::search`] | yes | required, ≥ 2 chars, ≤ 5 hits |
//! | [`Catalog::occurrences_near`] | yes | — (radius instead) |
//! | [`Catalog::weather`], [`Catalog::assets`] | no (reference data) | — |
//!
//! Results always preserve seed order; a record the policy denies is
//! silently skipped, never an error.

pub mod catalog;
pub mod cpf;
pub mod error;
pub mod geo;
pub mod labels;
pub mod records;
pub mod resource;

pub use catalog::{Catalog, SearchHit, MIN_QUERY_LEN, SEARCH_LIMIT};
pub use error::SeedError;
pub use labels::{FireRisk, Impact, Priority, RiskLevel, Severity};
pub use records::{
    Asset, AssetKind, BackgroundCheck, CheckStatus, DocStatus, IntelDocument, NewsItem, Occurrence,
    OccurrenceKind, OccurrenceStatus, Task, TaskStatus, WeatherReport,
};
pub use resource::Resource;

// Re-export the identity vocabulary for convenience.
pub use sgir_types::{Identity, Permission, Regional};
