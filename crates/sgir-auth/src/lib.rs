//! Session lifecycle and access policy for SGIR.
//!
//! This crate is the access-control core: it decides *who is logged
//! in* and *what they may see*. Domain data lives in `sgir-catalog`;
//! presentation lives in the host.
//!
//! # Visibility Model
//!
//! ```text
//! Visible = Session(WHO, still valid) ∩ RegionalPolicy(WHERE) ∩ required tags(WHAT)
//! ```
//!
//! | Layer | Type | Controls |
//! |-------|------|----------|
//! | [`Session`] | Struct | Who is acting, lockout, expiry |
//! | [`AccessPolicy`] | Trait | Whether a resource's region/tags are visible |
//! | [`AuditSink`] | Trait | Where security events go |
//!
//! # Crate Architecture
//!
//! ```text
//! sgir-types  (Identity, Regional, Permission)
//!     ↑
//! sgir-auth  ◄── THIS CRATE
//! (Directory, Session, AccessPolicy, AuditSink)
//!     ↑
//! sgir-catalog (policy-filtered queries)
//!     ↑
//! sgir-cli (host)
//! ```
//!
//! # Design Principles
//!
//! - **No hidden state** — [`Session`] is an explicit value the host
//!   owns and passes by reference; there is no global singleton.
//! - **Policy is the only gate** — every data query goes through
//!   [`AccessPolicy::evaluate`]; a `false` is a normal outcome, not an
//!   error.
//! - **Injected audit** — the core emits [`AuditEvent`]s into an
//!   [`AuditSink`] and never touches storage itself.

pub mod audit;
pub mod config;
pub mod directory;
pub mod error;
pub mod policy;
pub mod session;

pub use audit::{
    AuditEvent, AuditKind, AuditSink, LogoutReason, MemorySink, TracingSink, MEMORY_SINK_CAPACITY,
};
pub use config::AuthConfig;
pub use directory::Directory;
pub use error::AuthError;
pub use policy::{AccessPolicy, RegionalPolicy};
pub use session::Session;

// Re-export the identity vocabulary for convenience.
pub use sgir_types::{Identity, Permission, Regional, SessionId};
