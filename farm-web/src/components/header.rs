//! Top navigation bar: brand, nav links, language picker, theme toggle,
//! and the profile / sign-in controls.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session::use_session;
use crate::utils::constants::LANGUAGES;

const NAV_ITEMS: &[(&str, &str)] = &[
    ("Dashboard", "/dashboard"),
    ("Crop Guide", "/crop-guide"),
    ("Disease Detection", "/disease-detection"),
    ("Market Prices", "/cost-calculator"),
    ("AI Assistant", "/chatbot"),
];

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let (language_open, set_language_open) = signal(false);
    let (profile_open, set_profile_open) = signal(false);

    let on_logout = move |_| {
        session.log_out();
        set_profile_open.set(false);
        navigate("/", Default::default());
    };

    let current_language = move || {
        let code = session.language();
        LANGUAGES
            .iter()
            .find(|(c, _, _)| *c == code)
            .copied()
            .unwrap_or(LANGUAGES[0])
    };

    view! {
        <header class="site-header">
            <div class="header-inner">
                <A href="/" attr:class="brand">
                    <span class="brand-icon">"🌾"</span>
                    <span class="brand-name">
                        <span class="brand-devanagari">"कृषि सहायक"</span>
                        <span class="brand-latin">"Krishi Sahayak"</span>
                    </span>
                </A>

                <nav class="main-nav">
                    {NAV_ITEMS
                        .iter()
                        .map(|(label, href)| {
                            view! {
                                <A href=*href attr:class="nav-link">{*label}</A>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="header-controls">
                    // Language picker
                    <div class="dropdown">
                        <button
                            class="control-btn"
                            on:click=move |_| set_language_open.update(|open| *open = !*open)
                        >
                            {move || current_language().0.to_uppercase()}
                            " ▾"
                        </button>
                        <Show when=move || language_open.get()>
                            <div class="dropdown-menu">
                                {LANGUAGES
                                    .iter()
                                    .map(|(code, native, english)| {
                                        let code = *code;
                                        view! {
                                            <button
                                                class="dropdown-item"
                                                class:active=move || session.language() == code
                                                on:click=move |_| {
                                                    session.set_language(code);
                                                    set_language_open.set(false);
                                                }
                                            >
                                                <span>{*native}</span>
                                                <span class="dropdown-hint">{format!("({english})")}</span>
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </Show>
                    </div>

                    // Theme toggle
                    <button
                        class="control-btn"
                        on:click=move |_| session.toggle_theme()
                    >
                        {move || if session.theme() == "light" { "🌙" } else { "☀️" }}
                    </button>

                    {move || {
                        match session.user() {
                            Some(user) => {
                                let name = user.name.clone();
                                let email = user.email.clone();
                                let logout = on_logout.clone();
                                view! {
                                    <div class="dropdown">
                                        <button
                                            class="control-btn profile-btn"
                                            on:click=move |_| set_profile_open.update(|open| *open = !*open)
                                        >
                                            "👤 " {name.clone()} " ▾"
                                        </button>
                                        <Show when=move || profile_open.get()>
                                            <div class="dropdown-menu">
                                                <div class="dropdown-header">
                                                    <p class="dropdown-name">{name.clone()}</p>
                                                    <p class="dropdown-email">{email.clone()}</p>
                                                </div>
                                                <A href="/profile" attr:class="dropdown-item">
                                                    "Your Profile"
                                                </A>
                                                <button
                                                    class="dropdown-item danger"
                                                    on:click=logout.clone()
                                                >
                                                    "Sign Out"
                                                </button>
                                            </div>
                                        </Show>
                                    </div>
                                }
                                    .into_any()
                            }
                            None => view! {
                                <div class="auth-links">
                                    <A href="/auth" attr:class="control-btn">"Login"</A>
                                    <A href="/auth?mode=signup" attr:class="control-btn primary">
                                        "Sign Up"
                                    </A>
                                </div>
                            }
                                .into_any(),
                        }
                    }}
                </div>
            </div>
        </header>
    }
}
