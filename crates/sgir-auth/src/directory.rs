//! Static identity directory.

use serde_json::Error as JsonError;
use sgir_types::Identity;
use std::collections::HashMap;

/// Embedded user table (the eight identities of the pilot deployment).
const BUILTIN_USERS: &str = include_str!("../data/users.json");

/// Read-only lookup of identities by name.
///
/// The directory is fixed configuration: it is built once at process
/// start and never mutated. Adding or removing identities is a
/// deployment-time change, which is why no insert/remove methods
/// exist.
///
/// # Example
///
/// ```
/// use sgir_auth::Directory;
///
/// let directory = Directory::builtin().expect("embedded table is valid");
/// let fabio = directory.lookup("Fábio").expect("seeded identity");
/// assert_eq!(fabio.role, "Analista Florestal");
/// assert!(directory.lookup("Ghost").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Directory {
    users: HashMap<String, Identity>,
}

impl Directory {
    /// Builds a directory from an explicit identity list.
    ///
    /// Later entries win on duplicate names.
    #[must_use]
    pub fn new(identities: impl IntoIterator<Item = Identity>) -> Self {
        Self {
            users: identities
                .into_iter()
                .map(|identity| (identity.name.clone(), identity))
                .collect(),
        }
    }

    /// Parses the embedded user table.
    ///
    /// # Errors
    ///
    /// Returns the underlying JSON error if the embedded table is
    /// malformed (a build defect, not a runtime condition).
    pub fn builtin() -> Result<Self, JsonError> {
        let identities: Vec<Identity> = serde_json::from_str(BUILTIN_USERS)?;
        Ok(Self::new(identities))
    }

    /// Parses a directory from a JSON identity array.
    ///
    /// The expected shape is the same as the embedded table: an array
    /// of identity objects.
    ///
    /// # Errors
    ///
    /// Returns the JSON error on malformed input.
    pub fn from_json(json: &str) -> Result<Self, JsonError> {
        let identities: Vec<Identity> = serde_json::from_str(json)?;
        Ok(Self::new(identities))
    }

    /// Looks up an identity by exact name. No side effects.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Identity> {
        self.users.get(name)
    }

    /// Returns `true` if the directory contains the name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.users.contains_key(name)
    }

    /// Iterates over all registered names (unordered).
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.users.keys().map(String::as_str)
    }

    /// Number of registered identities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns `true` if the directory is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
