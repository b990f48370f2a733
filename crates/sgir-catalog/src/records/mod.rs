//! Domain record types.
//!
//! One file per collection. All records are serde value types whose
//! wire field names match the seed data (`camelCase`), and every
//! region-tagged record implements [`Resource`](crate::Resource).

mod asset;
mod check;
mod document;
mod news;
mod occurrence;
mod task;
mod weather;

pub use asset::{Asset, AssetKind};
pub use check::{BackgroundCheck, CheckStatus};
pub use document::{DocStatus, IntelDocument};
pub use news::NewsItem;
pub use occurrence::{Occurrence, OccurrenceKind, OccurrenceStatus};
pub use task::{Task, TaskStatus};
pub use weather::WeatherReport;
