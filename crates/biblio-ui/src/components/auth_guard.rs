use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::session::use_session;

/// Renders `children` only for an authenticated session (and an admin one
/// when `admin_only`). Nothing is decided while the session is still being
/// rehydrated.
#[component]
pub fn AuthGuard(#[prop(optional)] admin_only: bool, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if session.is_loading() {
            return;
        }
        match session.session() {
            None => navigate("/login", Default::default()),
            Some(current) if admin_only && !current.is_admin() => {
                navigate("/dashboard", Default::default())
            }
            Some(_) => {}
        }
    });

    let allowed = move || {
        !session.is_loading()
            && session
                .session()
                .is_some_and(|current| !admin_only || current.is_admin())
    };

    view! {
        <Show
            when=allowed
            fallback=|| {
                view! {
                    <div class="loading">
                        <div class="spinner"></div>
                        "Chargement..."
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
