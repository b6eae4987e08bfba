use biblio_types::{Role, Session};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::storage::SessionStorage;

/// Local storage key holding the persisted session record.
pub const STORAGE_KEY: &str = "auth-storage";

const RECORD_VERSION: u32 = 0;

#[derive(Serialize, Deserialize)]
struct PersistedRecord {
    state: PersistedState,
    #[serde(default)]
    version: u32,
}

#[derive(Serialize, Deserialize)]
struct PersistedState {
    user: Option<Session>,
}

/// Single source of truth for the authenticated identity.
///
/// Starts with no session and the rehydration flag set. The flag is cleared
/// by [`SessionStore::rehydrate`] (whatever it finds) or by a login; until
/// then callers must not decide on auth-gated navigation.
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
    session: Option<Session>,
    loading: bool,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            session: None,
            loading: true,
        }
    }

    /// Loads the persisted session, if any. Missing, unreadable or corrupt
    /// data all mean "logged out".
    pub fn rehydrate(&mut self) {
        self.session = self.read_persisted();
        self.loading = false;
    }

    pub fn login(&mut self, session: Session) {
        debug!("session opened for user {}", session.id);
        self.session = Some(session);
        self.loading = false;
        self.persist();
    }

    pub fn logout(&mut self) {
        if self.session.take().is_some() {
            debug!("session closed");
        }
        self.persist();
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Replaces the session with the new role when `userId` is the active
    /// user. Returns whether the active session changed.
    pub fn apply_role_change(&mut self, userId: i64, role: Role) -> bool {
        let updated = match &self.session {
            Some(current) if current.id == userId && current.role != role => current.with_role(role),
            _ => return false,
        };
        self.login(updated);
        true
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn read_persisted(&self) -> Option<Session> {
        let raw = match self.storage.load(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("could not read persisted session: {e}");
                return None;
            }
        };

        match serde_json::from_str::<PersistedRecord>(&raw) {
            Ok(record) => record.state.user,
            Err(e) => {
                warn!("discarding unreadable session record: {e}");
                None
            }
        }
    }

    fn persist(&mut self) {
        let result = match &self.session {
            Some(session) => {
                let record = PersistedRecord {
                    state: PersistedState {
                        user: Some(session.clone()),
                    },
                    version: RECORD_VERSION,
                };
                match serde_json::to_string(&record) {
                    Ok(text) => self.storage.save(STORAGE_KEY, &text),
                    Err(e) => {
                        warn!("could not serialize session: {e}");
                        return;
                    }
                }
            }
            None => self.storage.remove(STORAGE_KEY),
        };

        if let Err(e) = result {
            warn!("could not persist session: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryStorage;

    fn session() -> Session {
        Session {
            id: 12,
            nom: "Yasmine".into(),
            email: "yasmine@biblio.ma".into(),
            role: Role::User,
            token: "abc".into(),
        }
    }

    fn reload(store: SessionStore<MemoryStorage>) -> SessionStore<MemoryStorage> {
        let mut next = SessionStore::new(store.into_storage());
        next.rehydrate();
        next
    }

    #[test]
    fn starts_loading_without_session() {
        let store = SessionStore::new(MemoryStorage::new());
        assert!(store.is_loading());
        assert!(store.session().is_none());
    }

    #[test]
    fn rehydration_clears_flag_even_without_data() {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.rehydrate();
        assert!(!store.is_loading());
        assert!(store.session().is_none());
    }

    #[test]
    fn login_survives_reload() {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.rehydrate();
        store.login(session());

        let reloaded = reload(store);
        assert_eq!(reloaded.session(), Some(&session()));
        assert_eq!(reloaded.token(), Some("abc"));
        assert!(!reloaded.is_loading());
    }

    #[test]
    fn login_clears_loading_flag() {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.login(session());
        assert!(!store.is_loading());
    }

    #[test]
    fn loading_flag_is_cleared_by_rehydrate_and_login() {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.rehydrate();

        store.set_loading(true);
        assert!(store.is_loading());
        store.rehydrate();
        assert!(!store.is_loading());

        store.set_loading(true);
        store.login(session());
        assert!(!store.is_loading());
        assert_eq!(store.session(), Some(&session()));
    }

    #[test]
    fn logout_survives_reload() {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.login(session());
        store.logout();
        assert!(store.session().is_none());

        let reloaded = reload(store);
        assert!(reloaded.session().is_none());
    }

    #[test]
    fn logout_without_session_is_a_no_op() {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.rehydrate();
        store.logout();
        store.logout();
        assert!(store.session().is_none());
    }

    #[test]
    fn corrupt_record_means_logged_out() {
        let mut storage = MemoryStorage::new();
        storage.save(STORAGE_KEY, "{not json").unwrap();

        let mut store = SessionStore::new(storage);
        store.rehydrate();
        assert!(store.session().is_none());
        assert!(!store.is_loading());
    }

    #[test]
    fn partial_session_is_rejected() {
        let mut storage = MemoryStorage::new();
        storage
            .save(
                STORAGE_KEY,
                r#"{"state":{"user":{"id":1,"nom":"A","email":"a@b.ma","role":"USER"}},"version":0}"#,
            )
            .unwrap();

        let mut store = SessionStore::new(storage);
        store.rehydrate();
        assert!(store.session().is_none());
    }

    #[test]
    fn reads_record_written_by_previous_release() {
        let mut storage = MemoryStorage::new();
        storage
            .save(
                STORAGE_KEY,
                r#"{"state":{"user":{"id":3,"nom":"B","email":"b@b.ma","role":"ADMIN","token":"t"},"isLoading":false},"version":0}"#,
            )
            .unwrap();

        let mut store = SessionStore::new(storage);
        store.rehydrate();
        let restored = store.session().expect("session should be restored");
        assert_eq!(restored.id, 3);
        assert!(restored.is_admin());
    }

    #[test]
    fn role_change_of_active_user_replaces_session() {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.login(session());

        assert!(store.apply_role_change(12, Role::Admin));
        assert_eq!(store.session().map(|s| s.role), Some(Role::Admin));

        let reloaded = reload(store);
        assert_eq!(reloaded.session().map(|s| s.role), Some(Role::Admin));
    }

    #[test]
    fn role_change_of_other_user_is_ignored() {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.login(session());

        assert!(!store.apply_role_change(99, Role::Admin));
        assert_eq!(store.session(), Some(&session()));
    }
}
