use dioxus::prelude::*;
use platform::{default_storage, Backend, DynStorage, Session, SessionStore};
use shared_types::{AppConfig, AppError, User, UserPatch, UserRole, GENERIC_RETRY_MESSAGE};

/// Global session state. The store lives in a signal; backend calls are
/// awaited on a cloned [`Backend`] so no borrow is held across the delay,
/// and each result is committed in one write.
#[derive(Clone, Copy)]
pub struct AuthState {
    pub store: Signal<SessionStore<DynStorage>>,
}

impl AuthState {
    /// Rehydrate the session from the configured storage slot.
    pub fn new(config: &AppConfig) -> Self {
        let storage = default_storage(&config.session);
        let backend = Backend::new(config.session.latency);
        Self {
            store: Signal::new(SessionStore::restore(storage, backend)),
        }
    }

    pub fn session(&self) -> Session {
        self.store.read().session().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.read().session().is_authenticated()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.store.read().session().role()
    }

    pub fn user(&self) -> Option<User> {
        self.store.read().session().user().cloned()
    }

    pub fn backend(&self) -> Backend {
        self.store.read().backend().clone()
    }

    /// Sign in. On failure returns the message to show under the form.
    pub async fn login(mut self, email: String, password: String) -> Result<UserRole, String> {
        let result = self.backend().authenticate(&email, &password).await;
        let failure = failure_message(&result);
        if self.store.write().complete_login(result) {
            self.role().ok_or_else(|| GENERIC_RETRY_MESSAGE.to_string())
        } else {
            Err(failure)
        }
    }

    pub async fn register(mut self, data: UserPatch, role: UserRole) -> Result<UserRole, String> {
        let result = self.backend().create_account(&data, role).await;
        let failure = failure_message(&result);
        if self.store.write().complete_register(result) {
            Ok(role)
        } else {
            Err(failure)
        }
    }

    /// Save profile edits for the signed-in user.
    pub async fn update_profile(mut self, data: UserPatch) -> Result<(), String> {
        let Some(current) = self.user() else {
            tracing::warn!("profile update without a session");
            return Err(GENERIC_RETRY_MESSAGE.to_string());
        };
        let result = self.backend().update_account(&current, &data).await;
        let failure = failure_message(&result);
        if self.store.write().complete_update(result) {
            Ok(())
        } else {
            Err(failure)
        }
    }

    pub fn logout(&mut self) {
        self.store.write().logout();
    }
}

/// The message a failed result should surface. Successful results that
/// still fail to commit (storage errors) get the generic retry message.
fn failure_message(result: &Result<User, AppError>) -> String {
    match result {
        Err(e) => e.friendly_message(),
        Ok(_) => GENERIC_RETRY_MESSAGE.to_string(),
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::INVALID_CREDENTIALS_MESSAGE;

    #[test]
    fn unauthorized_failure_keeps_its_message() {
        let result = Err(AppError::unauthorized(INVALID_CREDENTIALS_MESSAGE));
        assert_eq!(failure_message(&result), "Invalid email or password");
    }

    #[test]
    fn internal_failure_is_generic() {
        let result = Err(AppError::storage("disk full"));
        assert_eq!(failure_message(&result), GENERIC_RETRY_MESSAGE);
    }
}
