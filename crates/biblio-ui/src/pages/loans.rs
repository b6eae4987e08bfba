use biblio_types::Loan;
use leptos::prelude::*;

use crate::api;
use crate::components::loan_status::{short_date, LoanStatusBadge};
use crate::components::toast::use_toast;
use crate::pending::PendingActions;
use crate::session::use_session;
use crate::tasks::spawn;

#[derive(Clone, Copy, Debug, PartialEq)]
enum LoanFilter {
    All,
    Overdue,
}

#[component]
pub fn LoansPage() -> impl IntoView {
    let session = use_session();
    let toast = use_toast();

    let loans = RwSignal::new(Option::<Result<Vec<Loan>, String>>::None);
    let filter = RwSignal::new(LoanFilter::All);
    let returning = PendingActions::<i64>::new();

    let reload = move || {
        let token = session.token_untracked();
        let which = filter.get_untracked();
        spawn(async move {
            let result = match which {
                LoanFilter::All => api::list_loans(token).await,
                LoanFilter::Overdue => api::overdue_loans(token).await,
            }
            .map_err(|e| api::error_message(&e));
            if result.is_err() {
                toast.error("Impossible de charger les emprunts");
            }
            loans.set(Some(result));
        });
    };

    Effect::new(move |_| {
        filter.track();
        if session.token().is_some() {
            reload();
        }
    });

    let returnLoan = move |loanId: i64| {
        if !returning.begin(loanId) {
            return;
        }
        let token = session.token_untracked();
        spawn(async move {
            match api::return_loan(loanId, token).await {
                Ok(_) => {
                    toast.success("Livre retourné", "L'emprunt a été marqué comme retourné.");
                    reload();
                }
                Err(_) => toast.error("Impossible de retourner le livre"),
            }
            returning.settle(&loanId);
        });
    };

    view! {
        <div class="dashboard-header">
            <h1>"Gestion des emprunts"</h1>
            <p class="subtitle">"Suivi des prêts et des retours"</p>
        </div>

        <div class="filter-tabs">
            <button
                class="btn btn-sm"
                class:btn-primary=move || filter.get() == LoanFilter::All
                on:click=move |_| filter.set(LoanFilter::All)
            >
                "Tous"
            </button>
            <button
                class="btn btn-sm"
                class:btn-primary=move || filter.get() == LoanFilter::Overdue
                on:click=move |_| filter.set(LoanFilter::Overdue)
            >
                "En retard"
            </button>
        </div>

        {move || match loans.get() {
            None => {
                view! {
                    <div class="loading">
                        <div class="spinner"></div>
                        "Chargement des emprunts..."
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
            Some(Ok(list)) => {
                view! {
                    <div class="card">
                        <table>
                            <thead>
                                <tr>
                                    <th>"#"</th>
                                    <th>"Livre"</th>
                                    <th>"Utilisateur"</th>
                                    <th>"Emprunté le"</th>
                                    <th>"Retour prévu"</th>
                                    <th>"Retourné le"</th>
                                    <th>"Statut"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {if list.is_empty() {
                                    view! {
                                        <tr>
                                            <td colspan="8">"Aucun emprunt"</td>
                                        </tr>
                                    }
                                        .into_any()
                                } else {
                                    list.into_iter()
                                        .map(|loan| {
                                            let loanId = loan.id;
                                            let isOpen = loan.statut.is_open();
                                            view! {
                                                <tr>
                                                    <td>{loanId}</td>
                                                    <td>{format!("Livre #{}", loan.livre_id)}</td>
                                                    <td>{format!("#{}", loan.utilisateur_id)}</td>
                                                    <td>{short_date(loan.date_emprunt.as_deref())}</td>
                                                    <td>{short_date(loan.date_retour_prevue.as_deref())}</td>
                                                    <td>
                                                        {short_date(loan.date_retour_effective.as_deref())}
                                                    </td>
                                                    <td>
                                                        <LoanStatusBadge status=loan.statut />
                                                    </td>
                                                    <td>
                                                        {isOpen
                                                            .then(|| {
                                                                view! {
                                                                    <button
                                                                        class="btn btn-ghost btn-sm"
                                                                        disabled=move || returning.is_pending(&loanId)
                                                                        on:click=move |_| returnLoan(loanId)
                                                                    >
                                                                        {move || {
                                                                            if returning.is_pending(&loanId) {
                                                                                "Retour..."
                                                                            } else {
                                                                                "Marquer retourné"
                                                                            }
                                                                        }}
                                                                    </button>
                                                                }
                                                            })}
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()
                                        .into_any()
                                }}
                            </tbody>
                        </table>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}
