//! Client-side session: who is signed in, their role, and the dashboard
//! snapshot, kept in step with the persisted slot.
//!
//! Each async operation is also available in two halves: the caller awaits
//! the [`Backend`] call itself and hands the result to a `complete_*`
//! method. UI code uses the split form so nothing borrows the store across
//! an await point.

use shared_types::{AppError, AppErrorKind, DashboardStats, User, UserPatch, UserRole};

use crate::backend::Backend;
use crate::stats::random_stats;
use crate::storage::SessionStorage;

/// Snapshot of the signed-in state. Either fully empty or fully populated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    user: Option<User>,
    stats: Option<DashboardStats>,
}

impl Session {
    fn signed_in(user: User, stats: DashboardStats) -> Self {
        Self {
            user: Some(user),
            stats: Some(stats),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Mirrors the user's variant.
    pub fn role(&self) -> Option<UserRole> {
        self.user.as_ref().map(User::role)
    }

    pub fn stats(&self) -> Option<&DashboardStats> {
        self.stats.as_ref()
    }
}

pub struct SessionStore<S: SessionStorage> {
    session: Session,
    storage: S,
    backend: Backend,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Empty session; the persisted slot is not read.
    pub fn new(storage: S, backend: Backend) -> Self {
        Self {
            session: Session::default(),
            storage,
            backend,
        }
    }

    /// Rehydrate from the persisted slot. A missing, unreadable or
    /// unparseable slot yields a signed-out session.
    pub fn restore(storage: S, backend: Backend) -> Self {
        let mut store = Self::new(storage, backend);
        match store.storage.load() {
            Ok(Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    let stats = random_stats(user.role(), &mut rand::thread_rng());
                    tracing::info!(id = user.id(), role = %user.role(), "session restored");
                    store.session = Session::signed_in(user, stats);
                }
                Err(e) => tracing::error!("stored session is not a valid user: {e}"),
            },
            Ok(None) => tracing::debug!("no stored session"),
            Err(e) => tracing::error!("failed to read stored session: {e}"),
        }
        store
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn backend(&self) -> &Backend {
        &self.backend
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&self, user: &User) -> Result<(), AppError> {
        let json = serde_json::to_string(user)?;
        self.storage.save(&json)
    }

    /// Persist `result` and, only if that succeeds, make it the session.
    fn commit(
        &mut self,
        op: &str,
        result: Result<User, AppError>,
        stats: impl FnOnce(UserRole) -> DashboardStats,
    ) -> bool {
        let outcome = result.and_then(|user| {
            self.persist(&user)?;
            Ok(user)
        });
        match outcome {
            Ok(user) => {
                let stats = stats(user.role());
                tracing::info!(id = user.id(), role = %user.role(), "{op} succeeded");
                self.session = Session::signed_in(user, stats);
                true
            }
            Err(e) if e.kind == AppErrorKind::Unauthorized => {
                tracing::warn!("{op} rejected: {}", e.message);
                false
            }
            Err(e) => {
                tracing::error!("{op} error: {e}");
                false
            }
        }
    }

    pub async fn login(&mut self, email: &str, password: &str) -> bool {
        let result = self.backend.authenticate(email, password).await;
        self.complete_login(result)
    }

    /// Commit an `authenticate` result with a fresh stats snapshot. On
    /// failure the previous session stays as it was.
    pub fn complete_login(&mut self, result: Result<User, AppError>) -> bool {
        self.commit("login", result, |role| {
            random_stats(role, &mut rand::thread_rng())
        })
    }

    /// Clear the session and the persisted slot. Never fails; a storage
    /// error is only logged.
    pub fn logout(&mut self) {
        if let Err(e) = self.storage.clear() {
            tracing::error!("failed to clear stored session: {e}");
        }
        self.session = Session::default();
        tracing::info!("signed out");
    }

    pub async fn register(&mut self, data: &UserPatch, role: UserRole) -> bool {
        let result = self.backend.create_account(data, role).await;
        self.complete_register(result)
    }

    /// Commit a `create_account` result with all-zero stats.
    pub fn complete_register(&mut self, result: Result<User, AppError>) -> bool {
        self.commit("register", result, DashboardStats::zeroed)
    }

    /// Merge `data` into the signed-in user. Without a session this
    /// returns `false` and creates nothing.
    pub async fn update_user_profile(&mut self, data: &UserPatch) -> bool {
        let Some(current) = self.session.user.clone() else {
            tracing::warn!("profile update without a session");
            return false;
        };
        let result = self.backend.update_account(&current, data).await;
        self.complete_update(result)
    }

    /// Commit an `update_account` result. Rejected if the session changed
    /// to another user (or ended) while the update was in flight.
    pub fn complete_update(&mut self, result: Result<User, AppError>) -> bool {
        let Some(current) = self.session.user.as_ref() else {
            tracing::warn!("profile update finished after sign-out");
            return false;
        };
        if let Ok(updated) = &result {
            if updated.id() != current.id() {
                tracing::warn!("profile update finished for a different user");
                return false;
            }
        }
        let stats = self.session.stats.clone();
        self.commit("update", result, |role| {
            stats.unwrap_or_else(|| DashboardStats::zeroed(role))
        })
    }
}
