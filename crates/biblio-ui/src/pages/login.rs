use biblio_types::{LoginRequest, Session};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::components::toast::use_toast;
use crate::session::use_session;
use crate::tasks::spawn;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let toast = use_toast();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        pending.set(true);

        let request = LoginRequest {
            email: email.get_untracked().trim().to_string(),
            mot_de_passe: password.get_untracked(),
        };
        let navigate = navigate.clone();
        spawn(async move {
            match api::login(request).await {
                Ok(response) => {
                    session.login(Session::from_auth(response));
                    toast.success("Connexion réussie", "Bienvenue sur votre tableau de bord.");
                    navigate("/dashboard", Default::default());
                }
                Err(_) => toast.error("Email ou mot de passe incorrect."),
            }
            pending.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-header">
                    <div class="login-icon">"B"</div>
                    <h1>"Connexion"</h1>
                    <p>"Entrez vos identifiants pour accéder à votre compte"</p>
                </div>

                <form on:submit=submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="nom@exemple.com"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">"Mot de passe"</label>
                        <input
                            type="password"
                            id="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled=move || pending.get()>
                        {move || if pending.get() { "Connexion..." } else { "Se connecter" }}
                    </button>
                </form>
                <p class="login-footer">
                    "Pas encore de compte ? " <a href="/register">"S'inscrire"</a>
                </p>
            </div>
        </div>
    }
}
