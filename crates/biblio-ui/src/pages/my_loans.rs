use std::collections::HashMap;

use biblio_types::{Book, Loan};
use leptos::prelude::*;

use crate::api;
use crate::components::loan_status::{short_date, LoanStatusBadge};
use crate::components::toast::use_toast;
use crate::session::use_session;
use crate::tasks::spawn;

#[derive(Clone)]
struct MyLoans {
    loans: Vec<Loan>,
    titles: HashMap<i64, String>,
}

async fn load(userId: i64, token: String) -> Result<MyLoans, String> {
    let loans = api::user_loans(userId, Some(token.clone()))
        .await
        .map_err(|e| api::error_message(&e))?;
    // Titles are a nicety; the history is still shown without them.
    let titles = api::list_books(Some(token))
        .await
        .map(|books: Vec<Book>| books.into_iter().map(|b| (b.id, b.titre)).collect())
        .unwrap_or_default();

    Ok(MyLoans { loans, titles })
}

#[component]
pub fn MyLoansPage() -> impl IntoView {
    let session = use_session();
    let toast = use_toast();
    let data = RwSignal::new(Option::<Result<MyLoans, String>>::None);

    Effect::new(move |_| {
        let Some(current) = session.session() else {
            return;
        };
        spawn(async move {
            let result = load(current.id, current.token).await;
            if result.is_err() {
                toast.error("Impossible de charger vos emprunts");
            }
            data.set(Some(result));
        });
    });

    view! {
        <div class="dashboard-header">
            <h1>"Mes emprunts"</h1>
            <p class="subtitle">"Historique de vos prêts"</p>
        </div>
        {move || match data.get() {
            None => {
                view! {
                    <div class="loading">
                        <div class="spinner"></div>
                        "Chargement..."
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
            Some(Ok(mine)) if mine.loans.is_empty() => {
                view! {
                    <div class="container-empty">
                        <p>"Vous n'avez aucun emprunt."</p>
                    </div>
                }
                    .into_any()
            }
            Some(Ok(mine)) => {
                let MyLoans { loans, titles } = mine;
                view! {
                    <div class="card">
                        <table>
                            <thead>
                                <tr>
                                    <th>"Livre"</th>
                                    <th>"Emprunté le"</th>
                                    <th>"Retour prévu"</th>
                                    <th>"Retourné le"</th>
                                    <th>"Statut"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {loans
                                    .into_iter()
                                    .map(|loan| {
                                        let title = titles
                                            .get(&loan.livre_id)
                                            .cloned()
                                            .unwrap_or_else(|| format!("Livre #{}", loan.livre_id));
                                        view! {
                                            <tr>
                                                <td>{title}</td>
                                                <td>{short_date(loan.date_emprunt.as_deref())}</td>
                                                <td>{short_date(loan.date_retour_prevue.as_deref())}</td>
                                                <td>
                                                    {short_date(loan.date_retour_effective.as_deref())}
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
                    </div>
                }
                    .into_any()
            }
        }}
    }
}
