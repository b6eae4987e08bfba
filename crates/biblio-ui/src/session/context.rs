use biblio_types::{Role, Session};
use leptos::prelude::*;

use super::storage::PlatformStorage;
use super::store::SessionStore;

/// Reactive handle on the application's [`SessionStore`].
///
/// Components read through the signals and mutate through the methods,
/// which keep the store (and its persistence) and the signals in step.
#[derive(Clone, Copy)]
pub struct SessionContext {
    store: StoredValue<SessionStore<PlatformStorage>>,
    session: RwSignal<Option<Session>>,
    loading: RwSignal<bool>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            store: StoredValue::new(SessionStore::new(PlatformStorage::default())),
            session: RwSignal::new(None),
            loading: RwSignal::new(true),
        }
    }

    pub fn session(&self) -> Option<Session> {
        self.session.get()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    pub fn is_admin(&self) -> bool {
        self.session
            .with(|s| s.as_ref().is_some_and(Session::is_admin))
    }

    pub fn token(&self) -> Option<String> {
        self.session
            .with(|s| s.as_ref().map(|s| s.token.clone()))
    }

    pub fn token_untracked(&self) -> Option<String> {
        self.session
            .with_untracked(|s| s.as_ref().map(|s| s.token.clone()))
    }

    pub fn user_id_untracked(&self) -> Option<i64> {
        self.session.with_untracked(|s| s.as_ref().map(|s| s.id))
    }

    pub fn rehydrate(&self) {
        self.store.update_value(|store| store.rehydrate());
        self.sync();
    }

    pub fn login(&self, session: Session) {
        self.store.update_value(|store| store.login(session));
        self.sync();
    }

    pub fn logout(&self) {
        self.store.update_value(|store| store.logout());
        self.sync();
    }

    pub fn apply_role_change(&self, userId: i64, role: Role) {
        let mut changed = false;
        self.store
            .update_value(|store| changed = store.apply_role_change(userId, role));
        if changed {
            self.sync();
        }
    }

    fn sync(&self) {
        let (session, loading) = self
            .store
            .with_value(|store| (store.session().cloned(), store.is_loading()));
        self.session.set(session);
        self.loading.set(loading);
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates the session context for this application root and schedules the
/// one rehydration pass. Effects only run in the browser, so the server
/// always renders the loading state.
pub fn provide_session() -> SessionContext {
    let ctx = SessionContext::new();
    provide_context(ctx);

    Effect::new(move |_| {
        ctx.rehydrate();
    });

    ctx
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
