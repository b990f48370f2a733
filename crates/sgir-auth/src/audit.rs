//! Security audit events and sinks.
//!
//! Every authentication success or failure, lockout, and logout is
//! emitted as a structured [`AuditEvent`] through an injected
//! [`AuditSink`]. The core never writes to storage itself — where the
//! events end up (tracing, memory, a remote collector) is the host's
//! choice.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use sgir_types::SessionId;

/// Default retention of [`MemorySink`]: only the most recent events
/// are kept, oldest dropped first.
pub const MEMORY_SINK_CAPACITY: usize = 100;

/// The kind of security event being recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditKind {
    /// A session was established.
    LoginSuccess,
    /// An authentication attempt failed (unknown identity or bad credential).
    LoginFailure,
    /// The failure threshold was reached; authentication is suspended.
    Lockout,
    /// The active identity was cleared (explicit or timeout).
    Logout,
}

impl AuditKind {
    /// Stable lowercase name, matching the serde representation.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoginSuccess => "login_success",
            Self::LoginFailure => "login_failure",
            Self::Lockout => "lockout",
            Self::Logout => "logout",
        }
    }
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogoutReason {
    /// The user logged out explicitly.
    UserLogout,
    /// The idle timeout elapsed.
    SessionTimeout,
}

impl std::fmt::Display for LogoutReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UserLogout => f.write_str("user_logout"),
            Self::SessionTimeout => f.write_str("session_timeout"),
        }
    }
}

/// One structured security event.
///
/// # Example
///
/// ```
/// use sgir_auth::{AuditEvent, AuditKind};
///
/// let event = AuditEvent::now(AuditKind::LoginFailure, "Ghost", "identity not found");
/// assert_eq!(event.kind, AuditKind::LoginFailure);
/// assert_eq!(event.identity, "Ghost");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Wall-clock time the event was recorded.
    pub timestamp: DateTime<Utc>,
    /// What happened.
    pub kind: AuditKind,
    /// The identity name involved (attempted name for failures).
    pub identity: String,
    /// Session the event belongs to, when one exists.
    pub session_id: Option<SessionId>,
    /// Free-form detail (error text, logout reason).
    pub details: String,
}

impl AuditEvent {
    /// Creates an event timestamped now, with no session attached.
    #[must_use]
    pub fn now(kind: AuditKind, identity: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
            identity: identity.into(),
            session_id: None,
            details: details.into(),
        }
    }

    /// Attaches a session id to the event.
    #[must_use]
    pub fn with_session(mut self, session_id: SessionId) -> Self {
        self.session_id = Some(session_id);
        self
    }
}

/// Destination for audit events.
///
/// Implementations must be cheap and infallible from the caller's
/// perspective: a failing sink must not make authentication fail.
pub trait AuditSink: Send + Sync {
    /// Records one event.
    fn append(&self, event: AuditEvent);
}

/// Sink that emits each event as a structured `tracing` event.
///
/// This is the production default: the host configures a subscriber
/// and decides where the log goes.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl AuditSink for TracingSink {
    fn append(&self, event: AuditEvent) {
        tracing::info!(
            target: "sgir::audit",
            kind = event.kind.name(),
            identity = %event.identity,
            session_id = event.session_id.map(|id| id.to_string()),
            details = %event.details,
            "security event"
        );
    }
}

/// In-memory ring buffer sink.
///
/// Keeps the most recent [`MEMORY_SINK_CAPACITY`] events (the legacy
/// console retained its last 100 log lines). Intended for tests and
/// interactive inspection.
///
/// # Example
///
/// ```
/// use sgir_auth::{AuditEvent, AuditKind, AuditSink, MemorySink};
///
/// let sink = MemorySink::new();
/// sink.append(AuditEvent::now(AuditKind::Logout, "Fábio", "user_logout"));
/// assert_eq!(sink.events().len(), 1);
/// ```
#[derive(Debug)]
pub struct MemorySink {
    capacity: usize,
    events: Mutex<Vec<AuditEvent>>,
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySink {
    /// Creates a sink with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(MEMORY_SINK_CAPACITY)
    }

    /// Creates a sink retaining at most `capacity` events.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            events: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the retained events, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.lock().clone()
    }

    /// Number of retained events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// Returns `true` if no events are retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Drops all retained events.
    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl AuditSink for MemorySink {
    fn append(&self, event: AuditEvent) {
        let mut events = self.events.lock();
        events.push(event);
        if events.len() > self.capacity {
            let overflow = events.len() - self.capacity;
            events.drain(..overflow);
        }
    }
}
