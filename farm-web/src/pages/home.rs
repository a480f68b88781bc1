//! Public landing screen.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::use_session;

const FEATURES: &[(&str, &str, &str, &str)] = &[
    (
        "📈",
        "Live Mandi Prices",
        "Track crop prices across major markets with history and forecasts",
        "/prices",
    ),
    (
        "🌱",
        "Crop Guide",
        "Season, soil, and duration guidance for the crops you grow",
        "/crop-guide",
    ),
    (
        "🔬",
        "Disease Detection",
        "Identify crop diseases and get treatment recommendations",
        "/disease-detection",
    ),
    (
        "🧮",
        "Market Intelligence",
        "State-level price summaries and selling recommendations",
        "/cost-calculator",
    ),
    (
        "💬",
        "AI Assistant",
        "Ask farming questions in your own language",
        "/chatbot",
    ),
    (
        "📡",
        "Smart Farm (IoT)",
        "Field sensors for soil, weather, and irrigation",
        "/iot",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();

    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"कृषि सहायक"</h1>
                <p class="hero-subtitle">
                    "Your farming companion for prices, crops, and planning"
                </p>
                {move || {
                    if session.is_authenticated() {
                        view! {
                            <A href="/dashboard" attr:class="btn hero-cta">
                                "Go to Dashboard"
                            </A>
                        }
                            .into_any()
                    } else {
                        view! {
                            <A href="/auth" attr:class="btn hero-cta">
                                "Get Started"
                            </A>
                        }
                            .into_any()
                    }
                }}
            </section>

            <section class="feature-grid">
                {FEATURES
                    .iter()
                    .map(|(icon, title, blurb, href)| {
                        view! {
                            <A href=*href attr:class="card feature-card">
                                <div class="feature-icon">{*icon}</div>
                                <h3>{*title}</h3>
                                <p>{*blurb}</p>
                            </A>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
