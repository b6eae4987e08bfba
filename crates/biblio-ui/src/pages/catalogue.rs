use biblio_types::{Book, BookSearch};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::api;
use crate::components::book_details_dialog::BookDetailsDialog;
use crate::components::book_form_dialog::BookFormDialog;
use crate::components::loan_form_dialog::LoanFormDialog;
use crate::components::toast::use_toast;
use crate::pending::PendingActions;
use crate::session::use_session;
use crate::tasks::spawn;

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[component]
pub fn CataloguePage() -> impl IntoView {
    let session = use_session();
    let toast = use_toast();

    let books = RwSignal::new(Option::<Result<Vec<Book>, String>>::None);
    let filter = RwSignal::new(String::new());
    let titre = RwSignal::new(String::new());
    let auteur = RwSignal::new(String::new());
    let categorie = RwSignal::new(String::new());
    let deleting = PendingActions::<i64>::new();

    let reload = move || {
        let token = session.token_untracked();
        spawn(async move {
            let result = api::list_books(token).await.map_err(|e| api::error_message(&e));
            if result.is_err() {
                toast.error("Impossible de charger le catalogue");
            }
            books.set(Some(result));
        });
    };

    Effect::new(move |_| {
        if session.token().is_some() {
            reload();
        }
    });

    let search = move |ev: SubmitEvent| {
        ev.prevent_default();
        let criteria = BookSearch {
            titre: non_empty(titre.get_untracked()),
            auteur: non_empty(auteur.get_untracked()),
            categorie: non_empty(categorie.get_untracked()),
        };
        let token = session.token_untracked();
        spawn(async move {
            let result = api::search_books(criteria, token)
                .await
                .map_err(|e| api::error_message(&e));
            if let Err(e) = &result {
                toast.error(e.clone());
            }
            books.set(Some(result));
        });
    };

    let resetSearch = move |_| {
        titre.set(String::new());
        auteur.set(String::new());
        categorie.set(String::new());
        reload();
    };

    let deleteBook = move |book: Book| {
        if !deleting.begin(book.id) {
            return;
        }
        let token = session.token_untracked();
        spawn(async move {
            match api::delete_book(book.id, token).await {
                Ok(()) => {
                    toast.success("Livre supprimé", format!("\"{}\" a été retiré du catalogue.", book.titre));
                    books.update(|state| {
                        if let Some(Ok(list)) = state {
                            list.retain(|b| b.id != book.id);
                        }
                    });
                }
                Err(e) => toast.error(api::error_message(&e)),
            }
            deleting.settle(&book.id);
        });
    };

    let visible = move || {
        let query = filter.get();
        books.get().map(|state| {
            state.map(|list| list.into_iter().filter(|b| b.matches(&query)).collect::<Vec<_>>())
        })
    };

    view! {
        <div class="dashboard-header">
            <h1>"Catalogue"</h1>
            <p class="subtitle">"Livres de la bibliothèque"</p>
        </div>

        <div class="card catalogue-toolbar">
            <input
                type="search"
                class="search-input"
                placeholder="Filtrer par titre, auteur ou catégorie"
                prop:value=move || filter.get()
                on:input=move |ev| filter.set(event_target_value(&ev))
            />
            <Show when=move || session.is_admin()>
                <BookFormDialog on_saved=move || reload() />
            </Show>
        </div>

        <form class="card search-form" on:submit=search>
            <div class="card-title">"Recherche avancée"</div>
            <input
                type="text"
                placeholder="Titre"
                prop:value=move || titre.get()
                on:input=move |ev| titre.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Auteur"
                prop:value=move || auteur.get()
                on:input=move |ev| auteur.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Catégorie"
                prop:value=move || categorie.get()
                on:input=move |ev| categorie.set(event_target_value(&ev))
            />
            <button type="submit" class="btn btn-primary btn-sm">
                "Rechercher"
            </button>
            <button type="button" class="btn btn-ghost btn-sm" on:click=resetSearch>
                "Réinitialiser"
            </button>
        </form>

        {move || match visible() {
            None => {
                view! {
                    <div class="loading">
                        <div class="spinner"></div>
                        "Chargement du catalogue..."
                    </div>
                }
                    .into_any()
            }
            Some(Err(e)) => {
                view! {
                    <div class="card">
                        <p class="login-error">"Échec du chargement: " {e}</p>
                    </div>
                }
                    .into_any()
            }
            Some(Ok(list)) if list.is_empty() => {
                view! {
                    <div class="container-empty">
                        <p>"Aucun livre trouvé"</p>
                    </div>
                }
                    .into_any()
            }
            Some(Ok(list)) => {
                let isAdmin = session.is_admin();
                view! {
                    <div class="book-grid">
                        {list
                            .into_iter()
                            .map(|book| {
                                view! {
                                    <BookCard
                                        book=book
                                        is_admin=isAdmin
                                        deleting=deleting
                                        on_delete=deleteBook
                                        on_changed=move || reload()
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                }
                    .into_any()
            }
        }}
    }
}

#[component]
fn BookCard<D, R>(
    book: Book,
    is_admin: bool,
    deleting: PendingActions<i64>,
    on_delete: D,
    on_changed: R,
) -> impl IntoView
where
    D: Fn(Book) + Copy + Send + Sync + 'static,
    R: Fn() + Copy + Send + Sync + 'static,
{
    let bookId = book.id;
    let toDelete = StoredValue::new(book.clone());

    view! {
        <div class="card book-card">
            <strong class="book-title">{book.titre.clone()}</strong>
            <div class="book-author">{book.auteur.clone()}</div>
            <div class="book-meta">
                <span class="badge">{book.categorie.clone()}</span>
                <span class="book-isbn">{format!("ISBN {}", book.isbn)}</span>
            </div>
            <div class="container-actions">
                <BookDetailsDialog book=book.clone() />
                {is_admin
                    .then(|| {
                        view! {
                            <BookFormDialog book=book.clone() on_saved=move || on_changed() />
                            <button
                                class="btn btn-ghost btn-sm"
                                disabled=move || deleting.is_pending(&bookId)
                                on:click=move |_| on_delete(toDelete.get_value())
                            >
                                {move || {
                                    if deleting.is_pending(&bookId) { "Suppression..." } else { "Supprimer" }
                                }}
                            </button>
                            <LoanFormDialog
                                book_id=bookId
                                book_title=book.titre.clone()
                                on_success=move || on_changed()
                            />
                        }
                    })}
            </div>
        </div>
    }
}
