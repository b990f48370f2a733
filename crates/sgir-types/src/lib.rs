//! Core identity and scope types for SGIR.
//!
//! This crate is the leaf of the SGIR dependency graph. It defines the
//! vocabulary shared by every other crate — regional scopes, permission
//! tags, identity records, session identifiers — and deliberately
//! contains **no** access-control logic.
//!
//! # Crate Architecture
//!
//! ```text
//! sgir-types   (Regional, Permission, Identity, SessionId)  ◄── THIS CRATE
//!     ↑                 ↑
//! sgir-auth        sgir-catalog
//! (Session,        (Resource collections,
//!  AccessPolicy)    policy-filtered queries)
//!     ↑                 ↑
//!         sgir-cli (host / presentation)
//! ```
//!
//! # Design Principles
//!
//! - **Identity is not permission** — [`Identity`] describes *who*
//!   someone is; deciding what they may see belongs to `sgir-auth`.
//! - **Value types** — everything here is an immutable, cloneable,
//!   serde-friendly value.

pub mod id;
pub mod identity;
pub mod permission;
pub mod regional;

pub use id::SessionId;
pub use identity::Identity;
pub use permission::Permission;
pub use regional::Regional;
