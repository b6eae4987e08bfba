use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::session::use_session;

#[component]
fn NavLink(href: &'static str, icon: &'static str, label: &'static str) -> impl IntoView {
    let location = use_location();
    let isActive = move || location.pathname.get() == href;

    view! {
        <li class="nav-item" class:active=isActive>
            <a href=href>
                <span class="nav-icon">{icon}</span>
                <span>{label}</span>
            </a>
        </li>
    }
}

#[component]
pub fn Nav() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let identity = move || {
        session
            .session()
            .map(|s| format!("{} ({})", s.nom, s.role.as_str()))
            .unwrap_or_default()
    };

    let logout = move |_| {
        session.logout();
        navigate("/login", Default::default());
    };

    view! {
        <nav class="nav-sidebar">
            <div class="nav-brand">
                <div class="brand-icon">"B"</div>
                <span class="brand-text">"Bibliothèque"</span>
            </div>
            <ul class="nav-links">
                <NavLink href="/dashboard" icon="\u{25A3}" label="Tableau de bord" />
                <NavLink href="/dashboard/catalogue" icon="\u{1F4D6}" label="Catalogue" />
                <NavLink href="/dashboard/my-loans" icon="\u{21BB}" label="Mes emprunts" />
                <Show when=move || session.is_admin()>
                    <NavLink href="/dashboard/loans" icon="\u{2338}" label="Emprunts" />
                    <NavLink href="/dashboard/users" icon="\u{263A}" label="Utilisateurs" />
                </Show>
            </ul>
            <div class="nav-footer">
                <span class="nav-identity">{identity}</span>
                <button class="btn btn-ghost btn-sm" on:click=logout>
                    "Déconnexion"
                </button>
            </div>
        </nav>
    }
}
