use biblio_types::{Book, BookInput};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::api;
use crate::components::toast::use_toast;
use crate::session::use_session;
use crate::tasks::spawn;

/// Fields the backend rejects when blank, in form order.
pub fn missing_fields(input: &BookInput) -> Vec<&'static str> {
    [
        ("Titre", &input.titre),
        ("Auteur", &input.auteur),
        ("Catégorie", &input.categorie),
        ("ISBN", &input.isbn),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(name, _)| name)
    .collect()
}

#[component]
fn TextField(id: &'static str, label: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                id=id
                type="text"
                required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

/// Creates a book, or edits `book` when given.
#[component]
pub fn BookFormDialog(
    #[prop(optional)] book: Option<Book>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let toast = use_toast();

    let editingId = book.as_ref().map(|b| b.id);
    let initial = StoredValue::new(book.as_ref().map(BookInput::from).unwrap_or_default());

    let open = RwSignal::new(false);
    let pending = RwSignal::new(false);
    let titre = RwSignal::new(String::new());
    let auteur = RwSignal::new(String::new());
    let categorie = RwSignal::new(String::new());
    let isbn = RwSignal::new(String::new());

    let openDialog = move |_| {
        let values = initial.get_value();
        titre.set(values.titre);
        auteur.set(values.auteur);
        categorie.set(values.categorie);
        isbn.set(values.isbn);
        open.set(true);
    };

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let input = BookInput {
            titre: titre.get_untracked().trim().to_string(),
            auteur: auteur.get_untracked().trim().to_string(),
            categorie: categorie.get_untracked().trim().to_string(),
            isbn: isbn.get_untracked().trim().to_string(),
        };
        let missing = missing_fields(&input);
        if !missing.is_empty() {
            toast.error(format!("Champs obligatoires: {}", missing.join(", ")));
            return;
        }
        let Some(token) = session.token_untracked() else {
            toast.error("Utilisateur non authentifié.");
            return;
        };

        pending.set(true);
        spawn(async move {
            let result = match editingId {
                Some(id) => api::update_book(id, input, Some(token)).await,
                None => api::create_book(input, Some(token)).await,
            };
            match result {
                Ok(saved) => {
                    let title = if editingId.is_some() { "Livre modifié" } else { "Livre ajouté" };
                    toast.success(title, format!("\"{}\" a été enregistré.", saved.titre));
                    initial.set_value(BookInput::from(&saved));
                    open.set(false);
                    on_saved.run(());
                }
                Err(e) => toast.error(api::error_message(&e)),
            }
            pending.set(false);
        });
    };

    let (heading, triggerClass, triggerLabel) = match editingId {
        Some(_) => ("Modifier le livre", "btn btn-ghost btn-sm", "Modifier"),
        None => ("Ajouter un livre", "btn btn-primary", "Ajouter un livre"),
    };

    view! {
        <button class=triggerClass on:click=openDialog>
            {triggerLabel}
        </button>
        <Show when=move || open.get()>
            <div class="dialog-backdrop">
                <form class="dialog" on:submit=submit>
                    <h2 class="dialog-title">{heading}</h2>
                    <TextField id="book-titre" label="Titre" value=titre />
                    <TextField id="book-auteur" label="Auteur" value=auteur />
                    <TextField id="book-categorie" label="Catégorie" value=categorie />
                    <TextField id="book-isbn" label="ISBN" value=isbn />
                    <div class="dialog-actions">
                        <button type="button" class="btn btn-ghost" on:click=move |_| open.set(false)>
                            "Annuler"
                        </button>
                        <button type="submit" class="btn btn-primary" disabled=move || pending.get()>
                            {move || if pending.get() { "Enregistrement..." } else { "Enregistrer" }}
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
    fn blank_fields_are_listed_in_order() {
        let input = BookInput {
            titre: "Dune".into(),
            auteur: " ".into(),
            categorie: String::new(),
            isbn: "9780441013593".into(),
        };
        assert_eq!(missing_fields(&input), vec!["Auteur", "Catégorie"]);
    }

    #[test]
    fn complete_input_has_no_missing_field() {
        let input = BookInput {
            titre: "Dune".into(),
            auteur: "Herbert".into(),
            categorie: "SF".into(),
            isbn: "9780441013593".into(),
        };
        assert!(missing_fields(&input).is_empty());
    }
}
