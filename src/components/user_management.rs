//! Admin user management: list, create, re-role, and delete accounts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered inside the admin panel's Users tab. Every mutation refreshes
//! the list from the backend and surfaces a transient banner through the
//! panel's alert slot.

use leptos::prelude::*;

use crate::components::alert::{AlertKind, AlertSlot, show};
use crate::net::api::ApiClient;
#[cfg(feature = "hydrate")]
use crate::net::error::ApiError;
use crate::net::types::{NewUser, Role, UserProfile};
#[cfg(feature = "hydrate")]
use crate::net::types::UserUpdate;

#[component]
pub fn UserManagement(alert: RwSignal<AlertSlot>) -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let users = RwSignal::new(Vec::<UserProfile>::new());
    let loading = RwSignal::new(false);

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new("student".to_owned());
    let busy = RwSignal::new(false);

    {
        let api = api.clone();
        Effect::new(move || {
            reload(&api, users, loading);
        });
    }

    let on_create = {
        let api = api.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }
            let new_user = NewUser {
                email: email.get().trim().to_owned(),
                password: password.get(),
                full_name: full_name.get().trim().to_owned(),
                role: role.get(),
            };
            if new_user.full_name.is_empty() || new_user.email.is_empty() || new_user.password.is_empty() {
                show(alert, AlertKind::Error, "Name, email and password are required.");
                return;
            }
            busy.set(true);

            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    match api.create_user(&new_user).await {
                        Ok(created) => {
                            show(alert, AlertKind::Success, format!("User {} created.", created.email));
                            full_name.set(String::new());
                            email.set(String::new());
                            password.set(String::new());
                            role.set("student".to_owned());
                            reload(&api, users, loading);
                        }
                        Err(ApiError::SessionExpired) => {}
                        Err(e) => show(alert, AlertKind::Error, e.to_string()),
                    }
                    busy.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&api, new_user);
            }
        }
    };

    let api_rows = api.clone();
    let rows = move || {
        let api_rows = api_rows.clone();
        users
            .get()
            .into_iter()
            .map(move |user| {
                let api_delete = api_rows.clone();
                let api_role = api_rows.clone();
                let delete_id = user.id.clone();
                let role_id = user.id.clone();
                let is_student = user.role == Role::Student;
                let is_teacher = user.role == Role::Teacher;
                let is_admin = user.role == Role::Admin;

                let on_delete = move |_| {
                    let api = api_delete.clone();
                    let user_id = delete_id.clone();
                    #[cfg(feature = "hydrate")]
                    leptos::task::spawn_local(async move {
                        match api.delete_user(&user_id).await {
                            Ok(()) => {
                                show(alert, AlertKind::Success, "User deleted.");
                                reload(&api, users, loading);
                            }
                            Err(ApiError::SessionExpired) => {}
                            Err(e) => show(alert, AlertKind::Error, e.to_string()),
                        }
                    });
                    #[cfg(not(feature = "hydrate"))]
                    let _ = (api, user_id);
                };

                let on_role_change = move |ev: leptos::ev::Event| {
                    let value = event_target_value(&ev);
                    let api = api_role.clone();
                    let user_id = role_id.clone();
                    #[cfg(feature = "hydrate")]
                    leptos::task::spawn_local(async move {
                        let update = UserUpdate { role: Some(value), ..UserUpdate::default() };
                        match api.update_user(&user_id, &update).await {
                            Ok(updated) => {
                                show(alert, AlertKind::Success, format!("Role updated for {}.", updated.email));
                                reload(&api, users, loading);
                            }
                            Err(ApiError::SessionExpired) => {}
                            Err(e) => show(alert, AlertKind::Error, e.to_string()),
                        }
                    });
                    #[cfg(not(feature = "hydrate"))]
                    let _ = (value, api, user_id);
                };

                view! {
                    <tr class="user-row">
                        <td>{user.full_name}</td>
                        <td>{user.email}</td>
                        <td>
                            <select class="user-row__role" on:change=on_role_change>
                                <option value="student" selected=is_student>"student"</option>
                                <option value="teacher" selected=is_teacher>"teacher"</option>
                                <option value="admin" selected=is_admin>"admin"</option>
                            </select>
                        </td>
                        <td>
                            <button class="btn btn--danger" on:click=on_delete>
                                "Delete"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="admin-card">
            <h3>"User Management"</h3>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p>"Loading users..."</p> }
            >
                <table class="user-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Role"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>{rows.clone()}</tbody>
                </table>
            </Show>

            <form class="user-form" on:submit=on_create>
                <h4>"New user"</h4>
                <input
                    class="user-form__input"
                    type="text"
                    placeholder="Full name"
                    prop:value=move || full_name.get()
                    on:input=move |ev| full_name.set(event_target_value(&ev))
                />
                <input
                    class="user-form__input"
                    type="email"
                    placeholder="user@mail.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="user-form__input"
                    type="password"
                    placeholder="At least 6 characters"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <select
                    class="user-form__role"
                    prop:value=move || role.get()
                    on:change=move |ev| role.set(event_target_value(&ev))
                >
                    <option value="student">"student"</option>
                    <option value="teacher">"teacher"</option>
                    <option value="admin">"admin"</option>
                </select>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Create user"
                </button>
            </form>
        </div>
    }
}

/// Refresh the user list; load failures are logged, not surfaced.
fn reload(api: &ApiClient, users: RwSignal<Vec<UserProfile>>, loading: RwSignal<bool>) {
    #[cfg(feature = "hydrate")]
    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            loading.set(true);
            match api.list_users().await {
                Ok(items) => users.set(items),
                Err(e) => log::error!("user list load failed: {e}"),
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, users, loading);
    }
}
