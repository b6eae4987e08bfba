use biblio_types::{RegisterRequest, Session};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::components::toast::use_toast;
use crate::session::use_session;
use crate::tasks::spawn;

const MIN_PASSWORD_LEN: usize = 6;

#[component]
fn Field(
    id: &'static str,
    label: &'static str,
    kind: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type=kind
                id=id
                required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let toast = use_toast();
    let navigate = use_navigate();

    let nom = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let adresse = RwSignal::new(String::new());
    let telephone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let motDePasse = password.get_untracked();
        if motDePasse != confirmation.get_untracked() {
            toast.error("Les mots de passe ne correspondent pas.");
            return;
        }
        if motDePasse.chars().count() < MIN_PASSWORD_LEN {
            toast.error("Le mot de passe doit contenir au moins 6 caractères.");
            return;
        }

        let request = RegisterRequest {
            nom: nom.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            adresse: adresse.get_untracked().trim().to_string(),
            telephone: telephone.get_untracked().trim().to_string(),
            mot_de_passe: motDePasse,
        };

        pending.set(true);
        let navigate = navigate.clone();
        spawn(async move {
            match api::register(request).await {
                Ok(response) => {
                    session.login(Session::from_auth(response));
                    toast.success("Inscription réussie", "Votre compte a été créé.");
                    navigate("/dashboard", Default::default());
                }
                Err(e) => toast.error(api::error_message(&e)),
            }
            pending.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-header">
                    <div class="login-icon">"B"</div>
                    <h1>"Inscription"</h1>
                    <p>"Créez votre compte de lecteur"</p>
                </div>

                <form on:submit=submit>
                    <Field id="nom" label="Nom complet" kind="text" value=nom />
                    <Field id="email" label="Email" kind="email" value=email />
                    <Field id="adresse" label="Adresse" kind="text" value=adresse />
                    <Field id="telephone" label="Téléphone" kind="tel" value=telephone />
                    <Field id="password" label="Mot de passe" kind="password" value=password />
                    <Field
                        id="confirmation"
                        label="Confirmer le mot de passe"
                        kind="password"
                        value=confirmation
                    />
                    <button type="submit" class="btn btn-primary" disabled=move || pending.get()>
                        {move || if pending.get() { "Création..." } else { "Créer un compte" }}
                    </button>
                </form>
                <p class="login-footer">
                    "Déjà inscrit ? " <a href="/login">"Se connecter"</a>
                </p>
            </div>
        </div>
    }
}
