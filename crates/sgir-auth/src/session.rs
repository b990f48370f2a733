//! Session lifecycle: authenticate, touch, expire, logout, lockout.

use crate::{AuditEvent, AuditKind, AuditSink, AuthConfig, AuthError, Directory, LogoutReason};
use sgir_types::{Identity, SessionId};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// The state behind a logged-in session.
#[derive(Debug, Clone)]
struct ActiveIdentity {
    id: SessionId,
    identity: Identity,
    /// Monotonic deadline; pushed forward by [`Session::touch`].
    expires_at: Instant,
}

/// The single authenticated-identity lifecycle.
///
/// A `Session` holds **at most one** active identity at a time. It is
/// an explicit value owned by the host — there is no process-wide
/// singleton — and every query layer receives it by reference.
///
/// # State Machine
///
/// ```text
/// LoggedOut ──authenticate()──► LoggedIn ──logout()/timeout──► LoggedOut
///     │                            ▲
///     └──too many failures──► LockedOut ──cooldown elapses──┘
/// ```
///
/// # Time Handling
///
/// Expiry and lockout deadlines are monotonic [`Instant`]s, immune to
/// wall-clock steps. [`current`](Self::current) checks the deadline
/// lazily, so a session past its deadline is already invisible even
/// before the host calls [`expire_if_due`](Self::expire_if_due) (which
/// actually clears the state and emits the audit event).
///
/// # Credential Caveat
///
/// The credential check is a placeholder length test inherited from
/// the demo system (see [`AuthConfig::min_credential_len`]). It
/// performs **no cryptographic verification** and must not be
/// mistaken for authentication security.
///
/// # Example
///
/// ```
/// use sgir_auth::{Directory, Session};
///
/// let directory = Directory::builtin().expect("embedded table");
/// let mut session = Session::new(directory.into());
///
/// session.authenticate("Fábio", Some("corredor-7")).expect("known identity");
/// assert!(session.current().is_some());
///
/// session.logout(sgir_auth::LogoutReason::UserLogout);
/// assert!(session.current().is_none());
/// ```
pub struct Session {
    directory: Arc<Directory>,
    config: AuthConfig,
    sink: Arc<dyn AuditSink>,
    active: Option<ActiveIdentity>,
    /// Consecutive failures since the last success or cooldown reset.
    failures: u32,
    /// When set and in the future, authentication is suspended.
    locked_until: Option<Instant>,
}

impl Session {
    /// Creates a logged-out session with default config and the
    /// [`TracingSink`](crate::TracingSink).
    #[must_use]
    pub fn new(directory: Arc<Directory>) -> Self {
        Self::with_config(directory, AuthConfig::default(), Arc::new(crate::TracingSink))
    }

    /// Creates a logged-out session with explicit config and audit sink.
    #[must_use]
    pub fn with_config(
        directory: Arc<Directory>,
        config: AuthConfig,
        sink: Arc<dyn AuditSink>,
    ) -> Self {
        Self {
            directory,
            config,
            sink,
            active: None,
            failures: 0,
            locked_until: None,
        }
    }

    /// Authenticates `name` and makes it the active identity.
    ///
    /// Succeeding replaces any previously active identity. The call
    /// returns as soon as identity verification finishes — any
    /// "boot sequence" staging is a presentation concern that belongs
    /// to the host.
    ///
    /// `credential = None` skips the placeholder length check, as the
    /// demo users authenticate without one.
    ///
    /// # Errors
    ///
    /// - [`AuthError::LockedOut`] while the cooldown window is open;
    ///   the directory is not consulted and the failure counter is
    ///   untouched.
    /// - [`AuthError::IdentityNotFound`] for unknown names.
    /// - [`AuthError::InvalidCredential`] when the credential is
    ///   shorter than [`AuthConfig::min_credential_len`].
    ///
    /// Both failure variants count toward the lockout threshold.
    pub fn authenticate(
        &mut self,
        name: &str,
        credential: Option<&str>,
    ) -> Result<SessionId, AuthError> {
        // Lockout gate first: rejected before the directory is touched.
        if let Some(remaining) = self.remaining_cooldown() {
            return Err(AuthError::LockedOut { remaining });
        }
        // Cooldown elapsed: the counter starts over.
        if self.locked_until.take().is_some() {
            self.failures = 0;
        }

        let identity = match self.directory.lookup(name) {
            Some(identity) => identity.clone(),
            None => return Err(self.fail(name, AuthError::identity_not_found(name))),
        };

        if let Some(credential) = credential {
            // Placeholder check only; no secret is verified.
            if credential.chars().count() < self.config.min_credential_len {
                return Err(self.fail(name, AuthError::InvalidCredential));
            }
        }

        let id = SessionId::new();
        self.active = Some(ActiveIdentity {
            id,
            identity,
            expires_at: Instant::now() + self.config.session_timeout(),
        });
        self.failures = 0;

        self.sink
            .append(AuditEvent::now(AuditKind::LoginSuccess, name, "").with_session(id));
        debug!(target: "sgir::session", identity = name, session_id = %id, "session established");

        Ok(id)
    }

    /// Records one failure, locking the session when the threshold is
    /// reached, and returns the error for propagation.
    fn fail(&mut self, name: &str, error: AuthError) -> AuthError {
        self.failures += 1;
        self.sink
            .append(AuditEvent::now(AuditKind::LoginFailure, name, error.to_string()));

        if self.failures >= self.config.max_attempts {
            self.locked_until = Some(Instant::now() + self.config.lockout_window());
            self.sink.append(AuditEvent::now(
                AuditKind::Lockout,
                name,
                format!("max attempts reached: {}", self.config.max_attempts),
            ));
        }
        error
    }

    /// The active identity, or `None` when logged out or past the
    /// expiry deadline.
    #[must_use]
    pub fn current(&self) -> Option<&Identity> {
        self.active
            .as_ref()
            .filter(|active| Instant::now() < active.expires_at)
            .map(|active| &active.identity)
    }

    /// The active session id, subject to the same expiry rule as
    /// [`current`](Self::current).
    #[must_use]
    pub fn session_id(&self) -> Option<SessionId> {
        self.active
            .as_ref()
            .filter(|active| Instant::now() < active.expires_at)
            .map(|active| active.id)
    }

    /// Returns `true` while an unexpired identity is active.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }

    /// Resets the expiry deadline to now + timeout.
    ///
    /// The host calls this on any user-originated interaction; there
    /// are no implicit activity listeners in the core. No-op when
    /// logged out or already past the deadline.
    pub fn touch(&mut self) {
        let timeout = self.config.session_timeout();
        if let Some(active) = &mut self.active {
            let now = Instant::now();
            if now < active.expires_at {
                active.expires_at = now + timeout;
            }
        }
    }

    /// Remaining time before expiry, or `None` when logged out.
    #[must_use]
    pub fn remaining_validity(&self) -> Option<Duration> {
        let active = self.active.as_ref()?;
        let now = Instant::now();
        (now < active.expires_at).then(|| active.expires_at - now)
    }

    /// Clears the identity if the expiry deadline has passed.
    ///
    /// Equivalent to a forced logout with reason
    /// [`LogoutReason::SessionTimeout`]. Returns `true` if expiry
    /// fired.
    pub fn expire_if_due(&mut self) -> bool {
        let due = self
            .active
            .as_ref()
            .is_some_and(|active| Instant::now() >= active.expires_at);
        if due {
            self.clear(LogoutReason::SessionTimeout);
        }
        due
    }

    /// Clears the active identity, recording `reason`.
    ///
    /// Idempotent: a second call on a logged-out session does nothing
    /// and emits nothing.
    pub fn logout(&mut self, reason: LogoutReason) {
        if self.active.is_some() {
            self.clear(reason);
        }
    }

    fn clear(&mut self, reason: LogoutReason) {
        if let Some(active) = self.active.take() {
            self.sink.append(
                AuditEvent::now(AuditKind::Logout, &active.identity.name, reason.to_string())
                    .with_session(active.id),
            );
            debug!(
                target: "sgir::session",
                identity = %active.identity.name,
                reason = %reason,
                "session cleared"
            );
        }
    }

    /// Returns `true` while the lockout cooldown is open.
    #[must_use]
    pub fn is_locked_out(&self) -> bool {
        self.remaining_cooldown().is_some()
    }

    /// Time left in the cooldown window, or `None` when not locked.
    #[must_use]
    pub fn remaining_cooldown(&self) -> Option<Duration> {
        let until = self.locked_until?;
        let now = Instant::now();
        (now < until).then(|| until - now)
    }

    /// The directory this session authenticates against.
    #[must_use]
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// The session configuration.
    #[must_use]
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("active", &self.active.as_ref().map(|a| &a.identity.name))
            .field("failures", &self.failures)
            .field("locked", &self.is_locked_out())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemorySink;

    const GOOD_CREDENTIAL: &str = "long-enough-secret";

    fn session_with_sink() -> (Session, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let directory = Arc::new(Directory::builtin().expect("embedded table"));
        let session = Session::with_config(directory, AuthConfig::default(), sink.clone());
        (session, sink)
    }

    #[test]
    fn authenticate_sets_current() {
        let (mut session, _) = session_with_sink();
        let id = session
            .authenticate("Fábio", Some(GOOD_CREDENTIAL))
            .expect("known identity");

        assert_eq!(session.current().expect("active").name, "Fábio");
        assert_eq!(session.session_id(), Some(id));
        assert!(session.is_authenticated());
        assert!(session.remaining_validity().is_some());
    }

    #[test]
    fn authenticate_without_credential_skips_stub_check() {
        let (mut session, _) = session_with_sink();
        assert!(session.authenticate("Gideonis", None).is_ok());
    }

    #[test]
    fn unknown_identity_fails() {
        let (mut session, sink) = session_with_sink();
        let err = session.authenticate("Ghost", None).unwrap_err();

        assert!(matches!(err, AuthError::IdentityNotFound(_)));
        assert!(!session.is_authenticated());
        assert_eq!(sink.events().len(), 1);
        assert_eq!(sink.events()[0].kind, AuditKind::LoginFailure);
    }

    #[test]
    fn short_credential_fails() {
        let (mut session, _) = session_with_sink();
        let err = session.authenticate("Fábio", Some("short")).unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredential));
    }

    #[test]
    fn third_failure_locks_out() {
        let (mut session, sink) = session_with_sink();
        for _ in 0..3 {
            let _ = session.authenticate("Ghost", None);
        }

        assert!(session.is_locked_out());
        let kinds: Vec<_> = sink.events().iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                AuditKind::LoginFailure,
                AuditKind::LoginFailure,
                AuditKind::LoginFailure,
                AuditKind::Lockout,
            ]
        );
    }

    #[test]
    fn locked_out_rejects_valid_identity_without_counting() {
        let (mut session, sink) = session_with_sink();
        for _ in 0..3 {
            let _ = session.authenticate("Ghost", None);
        }
        let events_before = sink.events().len();

        // Even a valid login is rejected; the directory is not consulted.
        let err = session
            .authenticate("Fábio", Some(GOOD_CREDENTIAL))
            .unwrap_err();
        assert!(matches!(err, AuthError::LockedOut { .. }));
        assert_eq!(session.failures, 3, "counter untouched during cooldown");
        assert_eq!(sink.events().len(), events_before, "no events during cooldown");
    }

    #[test]
    fn cooldown_elapsed_resets_counter() {
        let (mut session, _) = session_with_sink();
        for _ in 0..3 {
            let _ = session.authenticate("Ghost", None);
        }

        // Backdate the lockout deadline.
        session.locked_until = Some(Instant::now() - Duration::from_secs(1));
        assert!(!session.is_locked_out());

        session
            .authenticate("Fábio", Some(GOOD_CREDENTIAL))
            .expect("cooldown over");
        assert_eq!(session.failures, 0);
    }

    #[test]
    fn failure_counter_resets_on_success() {
        let (mut session, _) = session_with_sink();
        let _ = session.authenticate("Ghost", None);
        let _ = session.authenticate("Ghost", None);

        session
            .authenticate("Fábio", Some(GOOD_CREDENTIAL))
            .expect("known identity");
        assert_eq!(session.failures, 0);

        // Two fresh failures must not lock out.
        let _ = session.authenticate("Ghost", None);
        let _ = session.authenticate("Ghost", None);
        assert!(!session.is_locked_out());
    }

    #[test]
    fn touch_pushes_deadline_forward() {
        let (mut session, _) = session_with_sink();
        session
            .authenticate("Fábio", Some(GOOD_CREDENTIAL))
            .expect("known identity");

        let before = session.active.as_ref().expect("active").expires_at;
        std::thread::sleep(Duration::from_millis(5));
        session.touch();
        let after = session.active.as_ref().expect("active").expires_at;

        assert!(after > before);
    }

    #[test]
    fn touch_is_noop_when_logged_out() {
        let (mut session, _) = session_with_sink();
        session.touch();
        assert!(session.active.is_none());
    }

    #[test]
    fn expired_session_is_invisible_before_expire_call() {
        let (mut session, _) = session_with_sink();
        session
            .authenticate("Fábio", Some(GOOD_CREDENTIAL))
            .expect("known identity");

        session.active.as_mut().expect("active").expires_at =
            Instant::now() - Duration::from_secs(1);

        // Lazy deadline check: already invisible.
        assert!(session.current().is_none());
        assert!(session.session_id().is_none());
        assert!(session.remaining_validity().is_none());
    }

    #[test]
    fn expire_if_due_clears_and_audits_timeout() {
        let (mut session, sink) = session_with_sink();
        session
            .authenticate("Fábio", Some(GOOD_CREDENTIAL))
            .expect("known identity");
        session.active.as_mut().expect("active").expires_at =
            Instant::now() - Duration::from_secs(1);

        assert!(session.expire_if_due());
        assert!(session.active.is_none());

        let last = sink.events().last().cloned().expect("logout event");
        assert_eq!(last.kind, AuditKind::Logout);
        assert_eq!(last.details, "session_timeout");
    }

    #[test]
    fn expire_if_due_is_noop_before_deadline() {
        let (mut session, _) = session_with_sink();
        session
            .authenticate("Fábio", Some(GOOD_CREDENTIAL))
            .expect("known identity");

        assert!(!session.expire_if_due());
        assert!(session.is_authenticated());
    }

    #[test]
    fn logout_is_idempotent() {
        let (mut session, sink) = session_with_sink();
        session
            .authenticate("Fábio", Some(GOOD_CREDENTIAL))
            .expect("known identity");

        session.logout(LogoutReason::UserLogout);
        assert!(session.current().is_none());
        let events_after_first = sink.events().len();

        session.logout(LogoutReason::UserLogout);
        assert_eq!(sink.events().len(), events_after_first, "second logout emits nothing");
    }

    #[test]
    fn reauthenticate_replaces_identity() {
        let (mut session, _) = session_with_sink();
        let first = session
            .authenticate("Fábio", Some(GOOD_CREDENTIAL))
            .expect("known identity");
        let second = session
            .authenticate("Gideonis", Some(GOOD_CREDENTIAL))
            .expect("known identity");

        assert_ne!(first, second);
        assert_eq!(session.current().expect("active").name, "Gideonis");
    }

    #[test]
    fn success_event_carries_session_id() {
        let (mut session, sink) = session_with_sink();
        let id = session
            .authenticate("Laio", Some(GOOD_CREDENTIAL))
            .expect("known identity");

        let event = sink.events().pop().expect("login event");
        assert_eq!(event.kind, AuditKind::LoginSuccess);
        assert_eq!(event.session_id, Some(id));
        assert_eq!(event.identity, "Laio");
    }
}
