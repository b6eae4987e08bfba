use biblio_types::LoanRequest;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::api;
use crate::components::toast::use_toast;
use crate::session::use_session;
use crate::tasks::spawn;

/// Turns a backend loan failure into a message for the librarian.
pub fn loan_failure_message(message: &str) -> String {
    let lower = message.to_lowercase();
    if message.contains("404") {
        "Service Emprunts indisponible (404). Vérifiez que le service est démarré.".into()
    } else if lower.contains("utilisateur") {
        "Utilisateur introuvable. ID invalide.".into()
    } else if lower.contains("livre") {
        "Livre introuvable ou indisponible.".into()
    } else {
        message.to_string()
    }
}

/// Records a loan of one book. Availability is checked each time the dialog
/// opens and submission stays disabled until the book is known to be free
/// and while a submission is in flight.
#[component]
pub fn LoanFormDialog(
    book_id: i64,
    book_title: String,
    #[prop(into)] on_success: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let toast = use_toast();

    let open = RwSignal::new(false);
    let available = RwSignal::new(Option::<bool>::None);
    let pending = RwSignal::new(false);
    let userId = RwSignal::new(String::new());
    let title = StoredValue::new(book_title);

    Effect::new(move |_| {
        if !open.get() {
            available.set(None);
            return;
        }
        let token = session.token_untracked();
        spawn(async move {
            let result = api::book_available(book_id, token).await;
            if !open.get_untracked() {
                return;
            }
            match result {
                Ok(isAvailable) => available.set(Some(isAvailable)),
                Err(_) => {
                    available.set(Some(false));
                    toast.error("Impossible de vérifier la disponibilité du livre.");
                }
            }
        });
    });

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() || available.get_untracked() != Some(true) {
            return;
        }
        let Some(token) = session.token_untracked() else {
            toast.error("Utilisateur non authentifié.");
            return;
        };
        let Ok(utilisateurId) = userId.get_untracked().trim().parse::<i64>() else {
            toast.error("Entrez un ID utilisateur numérique.");
            return;
        };

        pending.set(true);
        spawn(async move {
            let request = LoanRequest {
                utilisateur_id: utilisateurId,
                livre_id: book_id,
            };
            match api::create_loan(request, Some(token)).await {
                Ok(_) => {
                    toast.success(
                        "Emprunt créé",
                        format!(
                            "Le livre \"{}\" a été prêté avec succès.",
                            title.get_value()
                        ),
                    );
                    available.set(Some(false));
                    open.set(false);
                    userId.set(String::new());
                    on_success.run(());
                }
                Err(e) => toast.error(loan_failure_message(&api::error_message(&e))),
            }
            pending.set(false);
        });
    };

    view! {
        <button class="btn btn-primary btn-sm" on:click=move |_| open.set(true)>
            "Enregistrer prêt"
        </button>
        <Show when=move || open.get()>
            <div class="dialog-backdrop">
                <form class="dialog" on:submit=submit>
                    <h2 class="dialog-title">"Nouvel emprunt"</h2>
                    <p class="dialog-description">
                        "Enregistrez le prêt de " <strong>{title.get_value()}</strong> "."
                    </p>
                    <div class="form-group">
                        <label for="loan-user-id">"ID de l'utilisateur"</label>
                        <input
                            id="loan-user-id"
                            type="number"
                            placeholder="Entrez l'ID numérique"
                            required
                            prop:value=move || userId.get()
                            on:input=move |ev| userId.set(event_target_value(&ev))
                        />
                    </div>
                    {move || match available.get() {
                        None => {
                            view! { <p class="dialog-hint">"Vérification..."</p> }.into_any()
                        }
                        Some(false) => {
                            view! {
                                <p class="login-error">"Ce livre est actuellement indisponible."</p>
                            }
                                .into_any()
                        }
                        Some(true) => view! { <p class="dialog-hint">"Livre disponible."</p> }.into_any(),
                    }}
                    <div class="dialog-actions">
                        <button type="button" class="btn btn-ghost" on:click=move |_| open.set(false)>
                            "Annuler"
                        </button>
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=move || pending.get() || available.get() != Some(true)
                        >
                            {move || if pending.get() { "Traitement..." } else { "Confirmer le prêt" }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_service_is_reported_distinctly() {
        assert!(loan_failure_message("Erreur API: 404").contains("(404)"));
    }

    #[test]
    fn unknown_user_and_book_are_recognised() {
        assert_eq!(
            loan_failure_message("Utilisateur non trouvé avec l'id 9"),
            "Utilisateur introuvable. ID invalide."
        );
        assert_eq!(
            loan_failure_message("Le livre est déjà emprunté"),
            "Livre introuvable ou indisponible."
        );
    }

    #[test]
    fn other_messages_pass_through() {
        assert_eq!(loan_failure_message("Erreur API: 500"), "Erreur API: 500");
    }
}
