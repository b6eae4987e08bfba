use biblio_types::{Role, UserUpdate};
use leptos::prelude::*;

use crate::api;
use crate::components::toast::use_toast;
use crate::session::use_session;
use crate::tasks::spawn;

fn parse_role(value: &str) -> Role {
    if value == Role::Admin.as_str() {
        Role::Admin
    } else {
        Role::User
    }
}

/// Changes a member's role. When the member is the logged-in user the
/// session is replaced so the new role applies immediately.
#[component]
pub fn EditUserDialog(
    user_id: i64,
    current_role: Role,
    #[prop(into)] on_saved: Callback<Role>,
) -> impl IntoView {
    let session = use_session();
    let toast = use_toast();

    let open = RwSignal::new(false);
    let pending = RwSignal::new(false);
    let role = RwSignal::new(current_role);
    let savedRole = StoredValue::new(current_role);

    let openDialog = move |_| {
        role.set(savedRole.get_value());
        open.set(true);
    };

    let save = move |_| {
        if pending.get_untracked() {
            return;
        }
        let Some(token) = session.token_untracked() else {
            toast.error("Utilisateur non authentifié.");
            return;
        };
        let requested = role.get_untracked();

        pending.set(true);
        spawn(async move {
            match api::update_user(user_id, UserUpdate::role(requested), Some(token)).await {
                Ok(updated) => {
                    toast.success(
                        "Utilisateur mis à jour",
                        format!("Le rôle a été changé en {}.", updated.role.as_str()),
                    );
                    savedRole.set_value(updated.role);
                    session.apply_role_change(user_id, updated.role);
                    open.set(false);
                    on_saved.run(updated.role);
                }
                Err(e) => toast.error(api::error_message(&e)),
            }
            pending.set(false);
        });
    };

    view! {
        <button class="btn btn-ghost btn-sm" on:click=openDialog>
            "Rôle"
        </button>
        <Show when=move || open.get()>
            <div class="dialog-backdrop">
                <div class="dialog">
                    <h2 class="dialog-title">"Modifier le rôle"</h2>
                    <div class="form-group">
                        <label for="user-role">"Rôle"</label>
                        <select
                            id="user-role"
                            prop:value=move || role.get().as_str()
                            on:change=move |ev| role.set(parse_role(&event_target_value(&ev)))
                        >
                            <option value="USER">"USER"</option>
                            <option value="ADMIN">"ADMIN"</option>
                        </select>
                    </div>
                    <div class="dialog-actions">
                        <button class="btn btn-ghost" on:click=move |_| open.set(false)>
                            "Annuler"
                        </button>
                        <button class="btn btn-primary" disabled=move || pending.get() on:click=save>
                            {move || if pending.get() { "Enregistrement..." } else { "Enregistrer" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_select_value_falls_back_to_user() {
        assert_eq!(parse_role("ADMIN"), Role::Admin);
        assert_eq!(parse_role("USER"), Role::User);
        assert_eq!(parse_role(""), Role::User);
    }
}
