//! Login / signup screen.
//!
//! Client-side validation runs before any network call; a form with field
//! errors is never submitted. Backend rejections render as a form-level
//! banner with the backend's own message.

use std::collections::BTreeMap;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use shared::dto::auth::{LoginRequest, SignupRequest};

use crate::services::auth as auth_api;
use crate::state::session::{use_session, Session};
use crate::utils::constants::{CROPS, STATES};
use crate::utils::url::get_query_param;
use crate::utils::validation::{AuthForm, AuthMode};

#[component]
pub fn AuthPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let initial_mode = if get_query_param("mode").as_deref() == Some("signup") {
        AuthMode::Signup
    } else {
        AuthMode::Login
    };

    let (mode, set_mode) = signal(initial_mode);
    let (form, set_form) = signal(AuthForm::default());
    let (errors, set_errors) = signal(BTreeMap::<&'static str, String>::new());
    let (banner, set_banner) = signal(None::<String>);
    let (busy, set_busy) = signal(false);
    let (show_password, set_show_password) = signal(false);

    let field_error = move |name: &'static str| errors.with(|e| e.get(name).cloned());

    let clear_field_error = move |name: &'static str| {
        set_errors.update(|e| {
            e.remove(name);
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let current_mode = mode.get_untracked();
        let current_form = form.get_untracked();

        let validation_errors = current_form.validate(current_mode);
        if !validation_errors.is_empty() {
            // Blocked before any network call.
            set_errors.set(validation_errors);
            return;
        }

        set_errors.set(BTreeMap::new());
        set_banner.set(None);
        set_busy.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = match current_mode {
                AuthMode::Login => {
                    auth_api::login(&LoginRequest {
                        email: current_form.email.clone(),
                        password: current_form.password.clone(),
                    })
                    .await
                }
                AuthMode::Signup => {
                    auth_api::signup(&SignupRequest {
                        name: current_form.name.clone(),
                        email: current_form.email.clone(),
                        phone: current_form.phone.clone(),
                        password: current_form.password.clone(),
                        location: current_form.location.clone(),
                        farm_size: (!current_form.farm_size.is_empty())
                            .then(|| current_form.farm_size.clone()),
                        primary_crops: current_form.primary_crops.clone(),
                    })
                    .await
                }
            };

            set_busy.try_set(false);
            match result {
                Ok(auth) => {
                    session.log_in(Session {
                        user: auth.user,
                        token: auth.token,
                    });
                    // Resume the screen the visitor was originally heading to.
                    let target =
                        get_query_param("redirect").unwrap_or_else(|| "/dashboard".to_string());
                    navigate(&target, Default::default());
                }
                Err(e) => {
                    log::warn!("authentication failed: {e}");
                    set_banner.try_set(Some(e.user_message()));
                }
            }
        });
    };

    view! {
        <div class="auth-screen">
            <section class="card auth-card">
                <div class="auth-heading">
                    <div class="auth-logo">"🌾"</div>
                    <h2>
                        {move || match mode.get() {
                            AuthMode::Login => "Welcome Back!",
                            AuthMode::Signup => "Join Krishi Sahayak",
                        }}
                    </h2>
                    <p>
                        {move || match mode.get() {
                            AuthMode::Login => "Sign in to your farming dashboard",
                            AuthMode::Signup => "Create your account to get started",
                        }}
                    </p>
                </div>

                <div class="mode-toggle">
                    <button
                        class:active=move || mode.get() == AuthMode::Login
                        on:click=move |_| set_mode.set(AuthMode::Login)
                    >
                        "Login"
                    </button>
                    <button
                        class:active=move || mode.get() == AuthMode::Signup
                        on:click=move |_| set_mode.set(AuthMode::Signup)
                    >
                        "Sign Up"
                    </button>
                </div>

                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || mode.get() == AuthMode::Signup>
                        <div class="field">
                            <input
                                placeholder="Full name"
                                prop:value=move || form.with(|f| f.name.clone())
                                on:input=move |ev| {
                                    set_form.update(|f| f.name = event_target_value(&ev));
                                    clear_field_error("name");
                                }
                            />
                            {move || {
                                field_error("name")
                                    .map(|e| view! { <p class="field-error">{e}</p> })
                            }}
                        </div>

                        <div class="field">
                            <input
                                placeholder="10-digit mobile"
                                prop:value=move || form.with(|f| f.phone.clone())
                                on:input=move |ev| {
                                    set_form.update(|f| f.phone = event_target_value(&ev));
                                    clear_field_error("phone");
                                }
                            />
                            {move || {
                                field_error("phone")
                                    .map(|e| view! { <p class="field-error">{e}</p> })
                            }}
                        </div>

                        <div class="field">
                            <select
                                prop:value=move || form.with(|f| f.location.clone())
                                on:change=move |ev| {
                                    set_form.update(|f| f.location = event_target_value(&ev));
                                    clear_field_error("location");
                                }
                            >
                                <option value="">"Select state"</option>
                                {STATES
                                    .iter()
                                    .map(|s| view! { <option value=*s>{*s}</option> })
                                    .collect_view()}
                            </select>
                            {move || {
                                field_error("location")
                                    .map(|e| view! { <p class="field-error">{e}</p> })
                            }}
                        </div>

                        <div class="field">
                            <select
                                prop:value=move || form.with(|f| f.farm_size.clone())
                                on:change=move |ev| {
                                    set_form.update(|f| f.farm_size = event_target_value(&ev));
                                }
                            >
                                <option value="">"Farm size (optional)"</option>
                                <option value="small">"Small (0-2 acres)"</option>
                                <option value="medium">"Medium (2-10)"</option>
                                <option value="large">"Large (10+)"</option>
                            </select>
                        </div>

                        <details class="crop-picker">
                            <summary>"Primary crops (optional)"</summary>
                            <div class="crop-grid">
                                {CROPS
                                    .iter()
                                    .map(|crop| {
                                        let crop = *crop;
                                        view! {
                                            <label class="crop-option">
                                                <input
                                                    type="checkbox"
                                                    prop:checked=move || {
                                                        form.with(|f| {
                                                            f.primary_crops.iter().any(|c| c == crop)
                                                        })
                                                    }
                                                    on:change=move |ev| {
                                                        let checked = event_target_checked(&ev);
                                                        set_form.update(|f| {
                                                            if checked {
                                                                f.primary_crops.push(crop.to_string());
                                                            } else {
                                                                f.primary_crops.retain(|c| c != crop);
                                                            }
                                                        });
                                                    }
                                                />
                                                {crop}
                                            </label>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </details>
                    </Show>

                    <div class="field">
                        <input
                            type="email"
                            placeholder="Email address"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| {
                                set_form.update(|f| f.email = event_target_value(&ev));
                                clear_field_error("email");
                            }
                        />
                        {move || {
                            field_error("email").map(|e| view! { <p class="field-error">{e}</p> })
                        }}
                    </div>

                    <div class="field password-field">
                        <input
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Password"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| {
                                set_form.update(|f| f.password = event_target_value(&ev));
                                clear_field_error("password");
                            }
                        />
                        <button
                            type="button"
                            class="password-toggle"
                            on:click=move |_| set_show_password.update(|s| *s = !*s)
                        >
                            {move || if show_password.get() { "🙈" } else { "👁" }}
                        </button>
                        {move || {
                            field_error("password")
                                .map(|e| view! { <p class="field-error">{e}</p> })
                        }}
                    </div>

                    <Show when=move || mode.get() == AuthMode::Signup>
                        <div class="field">
                            <input
                                type="password"
                                placeholder="Confirm password"
                                prop:value=move || form.with(|f| f.confirm_password.clone())
                                on:input=move |ev| {
                                    set_form.update(|f| f.confirm_password = event_target_value(&ev));
                                    clear_field_error("confirmPassword");
                                }
                            />
                            {move || {
                                field_error("confirmPassword")
                                    .map(|e| view! { <p class="field-error">{e}</p> })
                            }}
                        </div>
                    </Show>

                    {move || {
                        banner
                            .get()
                            .map(|message| view! { <div class="form-banner">{message}</div> })
                    }}

                    <button class="btn submit-btn" type="submit" disabled=move || busy.get()>
                        {move || match (busy.get(), mode.get()) {
                            (true, AuthMode::Login) => "Signing in...",
                            (true, AuthMode::Signup) => "Creating...",
                            (false, AuthMode::Login) => "Sign In",
                            (false, AuthMode::Signup) => "Create Account",
                        }}
                    </button>

                    <p class="mode-switch">
                        {move || match mode.get() {
                            AuthMode::Login => "New here? ",
                            AuthMode::Signup => "Have an account? ",
                        }}
                        <button
                            type="button"
                            on:click=move |_| {
                                set_mode.update(|m| {
                                    *m = match m {
                                        AuthMode::Login => AuthMode::Signup,
                                        AuthMode::Signup => AuthMode::Login,
                                    };
                                });
                            }
                        >
                            {move || match mode.get() {
                                AuthMode::Login => "Create one",
                                AuthMode::Signup => "Log in",
                            }}
                        </button>
                    </p>
                </form>
            </section>
        </div>
    }
}
