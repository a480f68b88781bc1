//! Farmer dashboard: greeting, quick price check, and feature shortcuts.

use leptos::prelude::*;
use leptos_router::components::A;

use shared::dto::market::PriceQuote;

use crate::services::api;
use crate::state::session::use_session;
use crate::utils::constants::{LOCATIONS, POPULAR_CROPS};
use crate::utils::format::{format_change, format_inr};

const SHORTCUTS: &[(&str, &str, &str)] = &[
    ("📈", "Full Price Tracker", "/prices"),
    ("🧮", "Market Intelligence", "/cost-calculator"),
    ("🌱", "Crop Guide", "/crop-guide"),
    ("🔬", "Disease Detection", "/disease-detection"),
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();

    let default_location = session
        .user()
        .and_then(|u| u.location)
        .filter(|loc| LOCATIONS.contains(&loc.as_str()))
        .unwrap_or_else(|| "Delhi".to_string());

    let (crop, set_crop) = signal("wheat".to_string());
    let (location, set_location) = signal(default_location);
    let (quotes, set_quotes) = signal(Vec::<PriceQuote>::new());

    // Refetch the quick view whenever the selection changes.
    Effect::new(move |_| {
        let crop = crop.get();
        let location = location.get();
        leptos::task::spawn_local(async move {
            match api::get_prices(&crop, &location).await {
                // try_set: the response may land after navigation away
                Ok(prices) => {
                    set_quotes.try_set(prices.into_iter().take(3).collect());
                }
                Err(e) => log::error!("quick price fetch failed: {e}"),
            }
        });
    });

    view! {
        <div class="dashboard-page">
            <section class="dashboard-greeting">
                <h1>
                    {move || {
                        match session.user() {
                            Some(user) => format!("Namaste, {}! 🙏", user.name),
                            None => "Namaste! 🙏".to_string(),
                        }
                    }}
                </h1>
                <p>"Here's what's happening in your markets today"</p>
            </section>

            <section class="card quick-prices">
                <div class="card-heading">
                    <h3>"Quick Price Check"</h3>
                    <A href="/prices">"View Full Tracker →"</A>
                </div>

                <div class="quick-price-controls">
                    <select
                        prop:value=move || crop.get()
                        on:change=move |ev| set_crop.set(event_target_value(&ev))
                    >
                        {POPULAR_CROPS
                            .iter()
                            .map(|(label, value, icon)| {
                                view! {
                                    <option value=*value>{format!("{icon} {label}")}</option>
                                }
                            })
                            .collect_view()}
                    </select>

                    <select
                        prop:value=move || location.get()
                        on:change=move |ev| set_location.set(event_target_value(&ev))
                    >
                        {LOCATIONS
                            .iter()
                            .map(|loc| view! { <option value=*loc>{*loc}</option> })
                            .collect_view()}
                    </select>
                </div>

                <div class="quote-list">
                    {move || {
                        quotes
                            .get()
                            .into_iter()
                            .map(|quote| {
                                view! {
                                    <div class="quote-row">
                                        <div>
                                            <p class="quote-market">{quote.market}</p>
                                            <p class="quote-variety">{quote.variety}</p>
                                        </div>
                                        <div class="quote-price">
                                            <p>{format!("{}/qtl", format_inr(quote.price))}</p>
                                            <p class={if quote.change >= 0.0 {
                                                "change up"
                                            } else {
                                                "change down"
                                            }}>
                                                {format_change(quote.change)}
                                            </p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </section>

            <section class="shortcut-grid">
                {SHORTCUTS
                    .iter()
                    .map(|(icon, label, href)| {
                        view! {
                            <A href=*href attr:class="card shortcut-card">
                                <span class="shortcut-icon">{*icon}</span>
                                <span>{*label}</span>
                            </A>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
