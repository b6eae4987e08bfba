use biblio_types::{Book, Loan};
use leptos::prelude::*;

use crate::api;
use crate::components::loan_status::{short_date, LoanStatusBadge};
use crate::session::use_session;
use crate::tasks::spawn;

/// Book record plus its loan history, fetched each time the dialog opens.
#[component]
pub fn BookDetailsDialog(book: Book) -> impl IntoView {
    let session = use_session();

    let open = RwSignal::new(false);
    let history = RwSignal::new(Option::<Result<Vec<Loan>, String>>::None);
    let bookId = book.id;
    let book = StoredValue::new(book);

    Effect::new(move |_| {
        if !open.get() {
            history.set(None);
            return;
        }
        let token = session.token_untracked();
        spawn(async move {
            let result = api::book_loans(bookId, token)
                .await
                .map_err(|e| api::error_message(&e));
            if open.get_untracked() {
                history.set(Some(result));
            }
        });
    });

    view! {
        <button class="btn btn-ghost btn-sm" on:click=move |_| open.set(true)>
            "Détails"
        </button>
        <Show when=move || open.get()>
            <div class="dialog-backdrop">
                <div class="dialog">
                    {book
                        .with_value(|b| {
                            view! {
                                <h2 class="dialog-title">{b.titre.clone()}</h2>
                                <div class="metric-row">
                                    <span class="metric-label">"Auteur"</span>
                                    <span class="metric-value">{b.auteur.clone()}</span>
                                </div>
                                <div class="metric-row">
                                    <span class="metric-label">"Catégorie"</span>
                                    <span class="metric-value">{b.categorie.clone()}</span>
                                </div>
                                <div class="metric-row">
                                    <span class="metric-label">"ISBN"</span>
                                    <span class="metric-value">{b.isbn.clone()}</span>
                                </div>
                                <div class="metric-row">
                                    <span class="metric-label">"Ajouté le"</span>
                                    <span class="metric-value">
                                        {short_date(b.date_creation.as_deref())}
                                    </span>
                                </div>
                            }
                        })}
                    <h3>"Historique des emprunts"</h3>
                    {move || match history.get() {
                        None => view! { <p class="dialog-hint">"Chargement..."</p> }.into_any(),
                        Some(Err(e)) => view! { <p class="login-error">{e}</p> }.into_any(),
                        Some(Ok(loans)) if loans.is_empty() => {
                            view! { <p class="dialog-hint">"Aucun emprunt enregistré."</p> }.into_any()
                        }
                        Some(Ok(loans)) => {
                            view! {
                                <table>
                                    <thead>
                                        <tr>
                                            <th>"Utilisateur"</th>
                                            <th>"Emprunté le"</th>
                                            <th>"Retour prévu"</th>
                                            <th>"Statut"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {loans
                                            .into_iter()
                                            .map(|loan| {
                                                view! {
                                                    <tr>
                                                        <td>{format!("#{}", loan.utilisateur_id)}</td>
                                                        <td>{short_date(loan.date_emprunt.as_deref())}</td>
                                                        <td>
                                                            {short_date(loan.date_retour_prevue.as_deref())}
                                                        </td>
                                                        <td>
                                                            <LoanStatusBadge status=loan.statut />
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            }
                                .into_any()
                        }
                    }}
                    <div class="dialog-actions">
                        <button class="btn btn-ghost" on:click=move |_| open.set(false)>
                            "Fermer"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
