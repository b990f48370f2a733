//! Access policy trait and the regional-scoping implementation.
//!
//! The policy is the **sole** gate on data exposure: every catalog
//! query routes each candidate record through
//! [`AccessPolicy::evaluate`], and nothing else decides visibility.
//! A `false` answer is a normal query outcome, never an error.

use crate::Session;
use sgir_types::{Identity, Permission, Regional};

/// Decides whether a resource is visible to an identity.
///
/// Implementations receive the *current* identity (or `None` when
/// logged out), the resource's regional tag, and an optional set of
/// required permission tags.
///
/// # Implementors
///
/// - [`RegionalPolicy`] — the standard regional/elevated rule order
/// - Custom impls for testing or restricted environments
///
/// # Example
///
/// ```
/// use sgir_auth::AccessPolicy;
/// use sgir_types::{Identity, Permission, Regional};
///
/// /// Denies everything; useful as a panic-button policy.
/// struct DenyAll;
///
/// impl AccessPolicy for DenyAll {
///     fn evaluate(
///         &self,
///         _identity: Option<&Identity>,
///         _resource_regional: Regional,
///         _required: &[Permission],
///     ) -> bool {
///         false
///     }
/// }
///
/// let analyst = Identity::new("Fábio", "Analista", Regional::Sp, vec![Permission::Standard]);
/// assert!(!DenyAll.evaluate(Some(&analyst), Regional::Sp, &[]));
/// ```
pub trait AccessPolicy: Send + Sync {
    /// Returns `true` if a resource tagged `resource_regional` is
    /// visible to `identity`, given the optionally required tags.
    fn evaluate(
        &self,
        identity: Option<&Identity>,
        resource_regional: Regional,
        required: &[Permission],
    ) -> bool;

    /// Convenience: evaluates against a [`Session`]'s current identity.
    ///
    /// A logged-out session always yields `false`.
    fn evaluate_session(
        &self,
        session: &Session,
        resource_regional: Regional,
        required: &[Permission],
    ) -> bool {
        self.evaluate(session.current(), resource_regional, required)
    }
}

/// The standard SGIR visibility policy.
///
/// # Rule Order (first match wins)
///
/// The ordering is an explicit design contract — elevated bypass is
/// evaluated *before* regional match, and regional match is a hard
/// gate *before* permission-tag checks:
///
/// 1. No active identity → **deny**.
/// 2. Identity's scope is `Global`, or it holds any elevated tag
///    (`supervisor`, `manager`, `director`) → **allow**, regardless of
///    the resource's region.
/// 3. Identity's region differs from the resource's → **deny**.
/// 4. `required` is non-empty → allow iff the identity holds at least
///    one of the listed tags.
/// 5. Otherwise (same region, nothing required) → **allow**.
///
/// # Example
///
/// ```
/// use sgir_auth::{AccessPolicy, RegionalPolicy};
/// use sgir_types::{Identity, Permission, Regional};
///
/// let policy = RegionalPolicy;
/// let fabio = Identity::new(
///     "Fábio",
///     "Analista Florestal",
///     Regional::Sp,
///     vec![Permission::Standard, Permission::Florestal],
/// );
///
/// assert!(policy.evaluate(Some(&fabio), Regional::Sp, &[]));
/// assert!(!policy.evaluate(Some(&fabio), Regional::Ms, &[]));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RegionalPolicy;

impl AccessPolicy for RegionalPolicy {
    fn evaluate(
        &self,
        identity: Option<&Identity>,
        resource_regional: Regional,
        required: &[Permission],
    ) -> bool {
        // Rule 1: no identity, no visibility.
        let Some(identity) = identity else {
            return false;
        };

        // Rule 2: wildcard scope or elevated tag bypasses everything.
        if identity.regional.is_global() || identity.is_elevated() {
            return true;
        }

        // Rule 3: regional match is a hard gate.
        if identity.regional != resource_regional {
            return false;
        }

        // Rule 4: required tags, any-of.
        if !required.is_empty() {
            return identity.has_any_permission(required);
        }

        // Rule 5: same region, nothing more required.
        true
    }
}
