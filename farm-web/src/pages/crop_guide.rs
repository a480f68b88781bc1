//! Crop guide: browsable catalog of crops with client-side search.

use leptos::prelude::*;

use shared::dto::catalog::Record;

use crate::services::api;

#[component]
pub fn CropGuidePage() -> impl IntoView {
    let (crops, set_crops) = signal(Vec::<Record>::new());
    let (query, set_query) = signal(String::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    leptos::task::spawn_local(async move {
        match api::get_crops().await {
            Ok(data) => {
                set_crops.try_set(data);
            }
            Err(e) => {
                log::error!("crop list fetch failed: {e}");
                set_error.try_set(Some(e.user_message()));
            }
        }
        set_loading.try_set(false);
    });

    let filtered = move || {
        let q = query.get();
        crops
            .get()
            .into_iter()
            .filter(|c| c.matches_query(&q))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="crop-guide-page">
            <h1>"🌱 Crop Guide"</h1>
            <p class="page-subtitle">"Growing seasons, soil needs, and care for common Indian crops"</p>

            <input
                class="search-input"
                type="search"
                placeholder="Search crops, seasons, soil types…"
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />

            {move || {
                if loading.get() {
                    return view! { <p class="empty-state">"Loading crops…"</p> }.into_any();
                }
                if let Some(msg) = error.get() {
                    return view! { <p class="error-state">{msg}</p> }.into_any();
                }
                let rows = filtered();
                if rows.is_empty() {
                    return view! { <p class="empty-state">"No crops match your search."</p> }
                        .into_any();
                }
                view! {
                    <div class="crop-grid">
                        {rows
                            .into_iter()
                            .map(|crop| {
                                view! {
                                    <div class="card crop-card">
                                        <h3>{crop.display("name")}</h3>
                                        <p class="crop-scientific">{crop.display("scientificName")}</p>
                                        <dl>
                                            <dt>"Category"</dt>
                                            <dd>{crop.display("category")}</dd>
                                            <dt>"Season"</dt>
                                            <dd>{crop.display("season")}</dd>
                                            <dt>"Duration"</dt>
                                            <dd>{format!("{} days", crop.display("duration"))}</dd>
                                            <dt>"Soil"</dt>
                                            <dd>{crop.display("soilType")}</dd>
                                            <dt>"Temperature"</dt>
                                            <dd>{crop.display("temperature")}</dd>
                                            <dt>"Rainfall"</dt>
                                            <dd>{crop.display("rainfall")}</dd>
                                        </dl>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}
