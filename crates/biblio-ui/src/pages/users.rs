use biblio_types::{Role, User};
use leptos::prelude::*;

use crate::api;
use crate::components::edit_user_dialog::EditUserDialog;
use crate::components::loan_status::short_date;
use crate::components::toast::use_toast;
use crate::pending::PendingActions;
use crate::session::use_session;
use crate::tasks::spawn;

const SELF_DELETE: &str = "Vous ne pouvez pas supprimer votre propre compte.";

/// Checks a deletion locally before it reaches the backend.
fn deletion_refusal(target: i64, current: Option<i64>) -> Option<&'static str> {
    (current == Some(target)).then_some(SELF_DELETE)
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let session = use_session();
    let toast = use_toast();

    let users = RwSignal::new(Option::<Result<Vec<User>, String>>::None);
    let confirming = RwSignal::new(Option::<i64>::None);
    let deleting = PendingActions::<i64>::new();

    Effect::new(move |_| {
        let token = session.token();
        if token.is_none() {
            return;
        }
        spawn(async move {
            let result = api::list_users(token).await.map_err(|e| api::error_message(&e));
            if result.is_err() {
                toast.error("Impossible de charger les utilisateurs");
            }
            users.set(Some(result));
        });
    });

    let setRole = move |userId: i64, role: Role| {
        users.update(|state| {
            if let Some(Ok(list)) = state {
                if let Some(user) = list.iter_mut().find(|u| u.id == userId) {
                    user.role = role;
                }
            }
        });
    };

    let askDelete = move |userId: i64| {
        if let Some(reason) = deletion_refusal(userId, session.user_id_untracked()) {
            toast.error(reason);
            return;
        }
        confirming.set(Some(userId));
    };

    let confirmDelete = move |_| {
        let Some(userId) = confirming.get_untracked() else {
            return;
        };
        if !deleting.begin(userId) {
            return;
        }
        confirming.set(None);
        let token = session.token_untracked();
        spawn(async move {
            match api::delete_user(userId, token).await {
                Ok(()) => {
                    toast.success("Utilisateur supprimé", "Le compte a été supprimé.");
                    users.update(|state| {
                        if let Some(Ok(list)) = state {
                            list.retain(|u| u.id != userId);
                        }
                    });
                }
                Err(e) => toast.error(api::error_message(&e)),
            }
            deleting.settle(&userId);
        });
    };

    view! {
        <div class="dashboard-header">
            <h1>"Utilisateurs"</h1>
            <p class="subtitle">"Comptes inscrits à la bibliothèque"</p>
        </div>

        <Show when=move || confirming.get().is_some()>
            <div class="dialog-backdrop">
                <div class="dialog">
                    <h2 class="dialog-title">"Supprimer l'utilisateur ?"</h2>
                    <p>"Cette action est irréversible."</p>
                    <div class="dialog-actions">
                        <button class="btn btn-ghost" on:click=move |_| confirming.set(None)>
                            "Annuler"
                        </button>
                        <button class="btn btn-danger" on:click=confirmDelete>
                            "Supprimer"
                        </button>
                    </div>
                </div>
            </div>
        </Show>

        {move || match users.get() {
            None => {
                view! {
                    <div class="loading">
                        <div class="spinner"></div>
                        "Chargement des utilisateurs..."
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
                                    <th>"Nom"</th>
                                    <th>"Email"</th>
                                    <th>"Téléphone"</th>
                                    <th>"Inscrit le"</th>
                                    <th>"Rôle"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {list
                                    .into_iter()
                                    .map(|user| {
                                        let userId = user.id;
                                        view! {
                                            <tr>
                                                <td>{user.nom}</td>
                                                <td>{user.email}</td>
                                                <td>{user.telephone}</td>
                                                <td>{short_date(user.date_inscription.as_deref())}</td>
                                                <td>
                                                    <span class="badge">{user.role.as_str()}</span>
                                                </td>
                                                <td class="container-actions">
                                                    <EditUserDialog
                                                        user_id=userId
                                                        current_role=user.role
                                                        on_saved=Callback::new(move |role: Role| setRole(userId, role))
                                                    />
                                                    <button
                                                        class="btn btn-ghost btn-sm"
                                                        disabled=move || deleting.is_pending(&userId)
                                                        on:click=move |_| askDelete(userId)
                                                    >
                                                        {move || {
                                                            if deleting.is_pending(&userId) {
                                                                "Suppression..."
                                                            } else {
                                                                "Supprimer"
                                                            }
                                                        }}
                                                    </button>
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refuses_to_delete_the_current_account() {
        assert_eq!(deletion_refusal(7, Some(7)), Some(SELF_DELETE));
        assert_eq!(deletion_refusal(7, Some(3)), None);
        assert_eq!(deletion_refusal(7, None), None);
    }
}
