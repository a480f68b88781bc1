//! Profile screen: view the signed-in account and edit local preferences.
//!
//! Preference edits update the stored session in place; the backend keeps its
//! own copy and is reconciled on next login.

use leptos::prelude::*;

use crate::state::notifications::use_notifications;
use crate::state::session::use_session;
use crate::utils::constants::{LANGUAGES, LOCATIONS};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();
    let notifications = use_notifications();

    let user = session.user();
    let (language, set_language) =
        signal(user.as_ref().map(|u| u.preferred_language.clone()).unwrap_or_default());
    let (location, set_location) =
        signal(user.as_ref().and_then(|u| u.location.clone()).unwrap_or_default());

    let on_save = move |_| {
        session.update_user(|u| {
            u.preferred_language = language.get_untracked();
            let loc = location.get_untracked();
            u.location = if loc.is_empty() { None } else { Some(loc) };
        });
        session.set_language(&language.get_untracked());
        notifications.success("Profile updated", None);
    };

    view! {
        <div class="profile-page">
            <h1>"Your Profile"</h1>

            {move || {
                match session.user() {
                    Some(user) => {
                        view! {
                            <div class="card profile-card">
                                <div class="profile-avatar">
                                    {user.name.chars().next().unwrap_or('?').to_uppercase().to_string()}
                                </div>
                                <dl class="profile-fields">
                                    <dt>"Name"</dt>
                                    <dd>{user.name.clone()}</dd>
                                    <dt>"Email"</dt>
                                    <dd>{user.email.clone()}</dd>
                                    <dt>"Role"</dt>
                                    <dd class="profile-role">{format!("{:?}", user.role)}</dd>
                                    <dt>"Farm size"</dt>
                                    <dd>
                                        {user
                                            .farm_size
                                            .map(|acres| format!("{acres} acres"))
                                            .unwrap_or_else(|| "Not set".to_string())}
                                    </dd>
                                    <dt>"Primary crops"</dt>
                                    <dd>
                                        {if user.primary_crops.is_empty() {
                                            "Not set".to_string()
                                        } else {
                                            user.primary_crops.join(", ")
                                        }}
                                    </dd>
                                </dl>
                            </div>
                        }
                            .into_any()
                    }
                    None => view! { <p>"No profile loaded."</p> }.into_any(),
                }
            }}

            <div class="card profile-preferences">
                <h3>"Preferences"</h3>

                <label>
                    "Language"
                    <select
                        prop:value=move || language.get()
                        on:change=move |ev| set_language.set(event_target_value(&ev))
                    >
                        {LANGUAGES
                            .iter()
                            .map(|(code, native, english)| {
                                view! {
                                    <option value=*code>{format!("{native} ({english})")}</option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>

                <label>
                    "Location"
                    <select
                        prop:value=move || location.get()
                        on:change=move |ev| set_location.set(event_target_value(&ev))
                    >
                        <option value="">"Not set"</option>
                        {LOCATIONS
                            .iter()
                            .map(|loc| view! { <option value=*loc>{*loc}</option> })
                            .collect_view()}
                    </select>
                </label>

                <label class="theme-row">
                    "Theme"
                    <button class="btn-secondary" on:click=move |_| session.toggle_theme()>
                        {move || if session.theme() == "dark" { "🌙 Dark" } else { "☀️ Light" }}
                    </button>
                </label>

                <button class="btn-primary" on:click=on_save>
                    "Save Preferences"
                </button>
            </div>
        </div>
    }
}
