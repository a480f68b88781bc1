//! Live market price tracker with history and forecast tabs.

use leptos::prelude::*;

use shared::dto::market::{ForecastPoint, PricePoint, PriceQuote};

use crate::services::api;
use crate::utils::constants::{LOCATIONS, POPULAR_CROPS};
use crate::utils::format::{format_change, format_inr};

#[derive(Clone, Copy, PartialEq, Eq)]
enum PriceTab {
    Current,
    History,
    Forecast,
}

#[component]
pub fn PriceTrackerPage() -> impl IntoView {
    let (crop, set_crop) = signal("wheat".to_string());
    let (location, set_location) = signal("Delhi".to_string());
    let (tab, set_tab) = signal(PriceTab::Current);
    let (loading, set_loading) = signal(false);

    let (quotes, set_quotes) = signal(Vec::<PriceQuote>::new());
    let (history, set_history) = signal(Vec::<PricePoint>::new());
    let (forecast, set_forecast) = signal(Vec::<ForecastPoint>::new());

    // Each section keeps its previous data when its own request fails, so a
    // flaky forecast endpoint does not blank the current-price view.
    Effect::new(move |_| {
        let crop = crop.get();
        let location = location.get();
        leptos::task::spawn_local(async move {
            set_loading.try_set(true);

            match api::get_prices(&crop, &location).await {
                Ok(data) => {
                    set_quotes.try_set(data);
                }
                Err(e) => log::error!("price fetch failed: {e}"),
            }
            match api::get_price_history(&crop, &location).await {
                Ok(data) => {
                    set_history.try_set(data);
                }
                Err(e) => log::error!("history fetch failed: {e}"),
            }
            match api::get_forecast(&crop, &location).await {
                Ok(data) => {
                    set_forecast.try_set(data);
                }
                Err(e) => log::error!("forecast fetch failed: {e}"),
            }

            set_loading.try_set(false);
        });
    });

    let tab_button = move |label: &'static str, target: PriceTab| {
        view! {
            <button
                class="tab-button"
                class:active=move || tab.get() == target
                on:click=move |_| set_tab.set(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="price-tracker-page">
            <h1>"📈 Market Price Tracker"</h1>
            <p class="page-subtitle">"Live mandi prices, recent history, and a short-term forecast"</p>

            <div class="crop-chips">
                {POPULAR_CROPS
                    .iter()
                    .map(|(label, value, icon)| {
                        view! {
                            <button
                                class="chip"
                                class:selected=move || crop.get() == *value
                                on:click=move |_| set_crop.set(value.to_string())
                            >
                                {format!("{icon} {label}")}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="tracker-controls">
                <label>
                    "Market location"
                    <select
                        prop:value=move || location.get()
                        on:change=move |ev| set_location.set(event_target_value(&ev))
                    >
                        {LOCATIONS
                            .iter()
                            .map(|loc| view! { <option value=*loc>{*loc}</option> })
                            .collect_view()}
                    </select>
                </label>
                <Show when=move || loading.get()>
                    <span class="loading-hint">"Updating…"</span>
                </Show>
            </div>

            <div class="tab-bar">
                {tab_button("Current Prices", PriceTab::Current)}
                {tab_button("Price History", PriceTab::History)}
                {tab_button("7-Day Forecast", PriceTab::Forecast)}
            </div>

            {move || match tab.get() {
                PriceTab::Current => {
                    let rows = quotes.get();
                    if rows.is_empty() {
                        view! { <p class="empty-state">"No price data for this selection yet."</p> }
                            .into_any()
                    } else {
                        view! {
                            <table class="price-table">
                                <thead>
                                    <tr>
                                        <th>"Market"</th>
                                        <th>"Variety"</th>
                                        <th>"Quality"</th>
                                        <th>"Price (per qtl)"</th>
                                        <th>"Change"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {rows
                                        .into_iter()
                                        .map(|q| {
                                            view! {
                                                <tr>
                                                    <td>{q.market}</td>
                                                    <td>{q.variety}</td>
                                                    <td>{q.quality}</td>
                                                    <td>{format_inr(q.price)}</td>
                                                    <td class={if q.change >= 0.0 {
                                                        "change up"
                                                    } else {
                                                        "change down"
                                                    }}>{format_change(q.change)}</td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        }
                            .into_any()
                    }
                }
                PriceTab::History => {
                    let points = history.get();
                    if points.is_empty() {
                        view! { <p class="empty-state">"No history recorded for this selection."</p> }
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
                                                <span>{format_inr(p.price)}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                            .into_any()
                    }
                }
                PriceTab::Forecast => {
                    let points = forecast.get();
                    if points.is_empty() {
                        view! { <p class="empty-state">"Forecast unavailable for this selection."</p> }
                            .into_any()
                    } else {
                        view! {
                            <ul class="forecast-list">
                                {points
                                    .into_iter()
                                    .map(|p| {
                                        view! {
                                            <li>
                                                <span class="history-date">{p.date}</span>
                                                <span>{format_inr(p.predicted_price)}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                            .into_any()
                    }
                }
            }}
        </div>
    }
}
