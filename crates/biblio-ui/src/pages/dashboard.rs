use biblio_types::{Book, Loan};
use leptos::prelude::*;

use crate::api;
use crate::components::gauge::Gauge;
use crate::components::metric_card::{MetricCard, StatValue};
use crate::components::toast::use_toast;
use crate::session::use_session;
use crate::stats::{most_borrowed, LoanStats};
use crate::tasks::spawn;

const TOP_TITLES: usize = 6;

#[derive(Clone)]
struct DashboardData {
    books: Vec<Book>,
    loans: Vec<Loan>,
}

async fn load(userId: i64, isAdmin: bool, token: String) -> Result<DashboardData, String> {
    let books = api::list_books(Some(token.clone()))
        .await
        .map_err(|e| api::error_message(&e))?;
    // Admins see the whole library, members only their own history.
    let loans = if isAdmin {
        api::list_loans(Some(token)).await
    } else {
        api::user_loans(userId, Some(token)).await
    }
    .map_err(|e| api::error_message(&e))?;

    Ok(DashboardData { books, loans })
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let toast = use_toast();
    let data = RwSignal::new(Option::<Result<DashboardData, String>>::None);

    Effect::new(move |_| {
        let Some(current) = session.session() else {
            return;
        };
        spawn(async move {
            let result = load(current.id, current.is_admin(), current.token).await;
            if result.is_err() {
                toast.error("Impossible de charger les données du tableau de bord");
            }
            data.set(Some(result));
        });
    });

    view! {
        <div class="dashboard-header">
            <h1>"Tableau de bord"</h1>
            <p class="subtitle">"Vue d'ensemble des activités: prêts, livres et retards."</p>
        </div>
        {move || match data.get() {
            None => {
                view! {
                    <div class="loading">
                        <div class="spinner"></div>
                        "Chargement du tableau de bord..."
                    </div>
                }
                    .into_any()
            }
            Some(Ok(d)) => view! { <DashboardContent data=d /> }.into_any(),
            Some(Err(e)) => {
                view! {
                    <div class="card">
                        <p class="login-error">"Échec du chargement: " {e}</p>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}

#[component]
fn DashboardContent(data: DashboardData) -> impl IntoView {
    let stats = LoanStats::compute(&data.books, &data.loans);
    let ranking = most_borrowed(&data.books, &data.loans, TOP_TITLES);

    view! {
        <div class="dashboard-grid">
            <MetricCard title="Total des livres".to_string()>
                <StatValue value=stats.total_books caption="dans le catalogue" />
            </MetricCard>
            <MetricCard title="Emprunts actifs".to_string()>
                <StatValue value=stats.active caption="en cours" />
            </MetricCard>
            <MetricCard title="Retards".to_string()>
                <StatValue value=stats.overdue caption="à relancer" />
            </MetricCard>
            <MetricCard title="Livres sortis".to_string()>
                <Gauge pct=stats.occupancy_pct() label="du catalogue".to_string() />
            </MetricCard>
            <MetricCard title="Taux de retard".to_string()>
                <Gauge pct=stats.overdue_pct() label="des emprunts ouverts".to_string() />
            </MetricCard>
        </div>

        <div class="process-section">
            <div class="card">
                <div class="card-title">"Livres les plus empruntés"</div>
                <table>
                    <thead>
                        <tr>
                            <th>"Titre"</th>
                            <th>"Emprunts"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {if ranking.is_empty() {
                            view! {
                                <tr>
                                    <td colspan="2">"Aucun emprunt pour le moment"</td>
                                </tr>
                            }
                                .into_any()
                        } else {
                            ranking
                                .into_iter()
                                .map(|entry| {
                                    view! {
                                        <tr>
                                            <td>{entry.titre}</td>
                                            <td>{entry.count}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
