//! Market intelligence: mandi price summary, 30-day trend, and an optimal
//! selling-time recommendation for a chosen crop and state.

use leptos::prelude::*;

use shared::dto::market::{MarketSummary, SellingAdvice, TrendPoint};

use crate::services::api;
use crate::state::notifications::use_notifications;
use crate::utils::constants::{CROPS, POPULAR_CROPS, STATES};
use crate::utils::format::{format_change, format_inr};

#[component]
pub fn MarketIntelligencePage() -> impl IntoView {
    let notifications = use_notifications();

    let (crop, set_crop) = signal("Wheat".to_string());
    let (state, set_state) = signal("Punjab".to_string());
    let (searching, set_searching) = signal(false);

    let (summary, set_summary) = signal(Option::<MarketSummary>::None);
    let (trend, set_trend) = signal(Vec::<TrendPoint>::new());
    let (advice, set_advice) = signal(Option::<SellingAdvice>::None);

    // Data is fetched only on an explicit search, not on every selection
    // change, to keep mandi API usage down.
    let run_search = move || {
        let crop = crop.get_untracked();
        let state = state.get_untracked();
        leptos::task::spawn_local(async move {
            set_searching.try_set(true);

            match api::get_market_prices(&crop, &state).await {
                Ok(data) => {
                    set_summary.try_set(Some(data));
                }
                Err(e) => {
                    log::error!("market summary fetch failed: {e}");
                    notifications.error("Market data unavailable", Some(e.user_message()));
                }
            }
            match api::get_price_trends(&crop, &state, 30).await {
                Ok(data) => {
                    set_trend.try_set(data);
                }
                Err(e) => log::error!("trend fetch failed: {e}"),
            }
            match api::get_optimal_selling_time(&crop, &state).await {
                Ok(data) => {
                    set_advice.try_set(Some(data));
                }
                Err(e) => log::error!("selling advice fetch failed: {e}"),
            }

            set_searching.try_set(false);
        });
    };

    let stat_card = |label: &'static str, value: String, change: Option<f64>| {
        view! {
            <div class="card stat-card">
                <p class="stat-label">{label}</p>
                <p class="stat-value">{value}</p>
                {change
                    .map(|c| {
                        view! {
                            <p class={if c >= 0.0 { "change up" } else { "change down" }}>
                                {format_change(c)}
                            </p>
                        }
                    })}
            </div>
        }
    };

    view! {
        <div class="market-page">
            <h1>"🧮 Market Intelligence"</h1>
            <p class="page-subtitle">"Know the right price and the right time to sell"</p>

            <div class="card market-controls">
                <label>
                    "Crop"
                    <select
                        prop:value=move || crop.get()
                        on:change=move |ev| set_crop.set(event_target_value(&ev))
                    >
                        {CROPS
                            .iter()
                            .map(|c| view! { <option value=*c>{*c}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label>
                    "State"
                    <select
                        prop:value=move || state.get()
                        on:change=move |ev| set_state.set(event_target_value(&ev))
                    >
                        {STATES
                            .iter()
                            .map(|s| view! { <option value=*s>{*s}</option> })
                            .collect_view()}
                    </select>
                </label>
                <button
                    class="btn-primary"
                    disabled=move || searching.get()
                    on:click=move |_| run_search()
                >
                    {move || if searching.get() { "Searching…" } else { "Search Markets" }}
                </button>
            </div>

            {move || match summary.get() {
                None => {
                    view! {
                        <div class="popular-access">
                            <h3>"Popular crops"</h3>
                            <div class="crop-chips">
                                {POPULAR_CROPS
                                    .iter()
                                    .map(|(label, _, icon)| {
                                        view! {
                                            <button
                                                class="chip"
                                                on:click=move |_| {
                                                    set_crop.set(label.to_string());
                                                    run_search();
                                                }
                                            >
                                                {format!("{icon} {label}")}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                        .into_any()
                }
                Some(s) => {
                    view! {
                        <div class="market-results">
                            <div class="stat-grid">
                                {stat_card("Minimum Price", format_inr(s.min_price), Some(s.min_price_change))}
                                {stat_card("Modal Price", format_inr(s.modal_price), Some(s.modal_price_change))}
                                {stat_card("Maximum Price", format_inr(s.max_price), Some(s.max_price_change))}
                            </div>

                            {advice
                                .get()
                                .map(|a| {
                                    view! {
                                        <div class="card advice-card">
                                            <div class="advice-heading">
                                                <span class="advice-signal">
                                                    {a.recommendation.label()}
                                                </span>
                                                <span class="advice-confidence">
                                                    {format!("{}% confidence", a.confidence)}
                                                </span>
                                            </div>
                                            <p>{a.reason}</p>
                                            <dl class="advice-details">
                                                <dt>"Expected trend"</dt>
                                                <dd>{a.expected_trend}</dd>
                                                <dt>"Best time"</dt>
                                                <dd>{a.best_time}</dd>
                                            </dl>
                                        </div>
                                    }
                                })}

                            <div class="card markets-table-card">
                                <h3>"Nearby Markets"</h3>
                                <table class="price-table">
                                    <thead>
                                        <tr>
                                            <th>"Market"</th>
                                            <th>"Price (per qtl)"</th>
                                            <th>"Change"</th>
                                            <th>"Updated"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {s.markets
                                            .iter()
                                            .map(|m| {
                                                view! {
                                                    <tr>
                                                        <td>{m.name.clone()}</td>
                                                        <td>{format_inr(m.price)}</td>
                                                        <td class={if m.change >= 0.0 {
                                                            "change up"
                                                        } else {
                                                            "change down"
                                                        }}>{format_change(m.change)}</td>
                                                        <td>{m.updated_at.clone()}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            </div>

                            <div class="stat-grid quick-stats">
                                {stat_card("Weekly High", format_inr(s.weekly_high), None)}
                                {stat_card("Weekly Low", format_inr(s.weekly_low), None)}
                                {stat_card("Monthly Average", format_inr(s.monthly_avg), None)}
                                {stat_card("Volatility", format!("{:.1}%", s.volatility), None)}
                            </div>

                            <div class="card trend-card">
                                <h3>"30-Day Trend"</h3>
                                {move || {
                                    let points = trend.get();
                                    if points.is_empty() {
                                        view! { <p class="empty-state">"No trend data available."</p> }
                                            .into_any()
                                    } else {
                                        view! {
                                            <ul class="history-list">
                                                {points
                                                    .into_iter()
                                                    .map(|p| {
                                                        view! {
                                                            <li>
                                                                <span class="history-date">{p.date}</span>
                                                                <span>{format_inr(p.modal_price)}</span>
                                                            </li>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </ul>
                                        }
                                            .into_any()
                                    }
                                }}
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
