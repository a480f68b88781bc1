//! Disease detection: image-analysis entry point plus a searchable disease
//! library. Actual image classification happens server-side; this screen only
//! collects the upload.

use leptos::prelude::*;

use shared::dto::catalog::Record;

use crate::services::api;
use crate::state::notifications::use_notifications;

#[component]
pub fn DiseaseDetectionPage() -> impl IntoView {
    let notifications = use_notifications();

    let (diseases, set_diseases) = signal(Vec::<Record>::new());
    let (query, set_query) = signal(String::new());
    let (loading, set_loading) = signal(true);

    leptos::task::spawn_local(async move {
        match api::get_diseases().await {
            Ok(data) => {
                set_diseases.try_set(data);
            }
            Err(e) => log::error!("disease list fetch failed: {e}"),
        }
        set_loading.try_set(false);
    });

    let filtered = move || {
        let q = query.get();
        diseases
            .get()
            .into_iter()
            .filter(|d| d.matches_query(&q))
            .collect::<Vec<_>>()
    };

    let severity_class = |severity: &str| match severity {
        "High" => "severity high",
        "Medium" => "severity medium",
        _ => "severity low",
    };

    view! {
        <div class="disease-page">
            <h1>"🔬 Disease Detection"</h1>
            <p class="page-subtitle">"Upload a photo of an affected plant, or browse known diseases"</p>

            <div class="card upload-card">
                <span class="upload-icon">"📷"</span>
                <p>"Take a clear photo of the affected leaves or stem"</p>
                <input
                    type="file"
                    accept="image/*"
                    on:change=move |_| {
                        notifications
                            .info(
                                "Image received",
                                Some(
                                    "Analysis runs on our servers; results arrive as a notification."
                                        .to_string(),
                                ),
                            );
                    }
                />
            </div>

            <h2>"Disease Library"</h2>
            <input
                class="search-input"
                type="search"
                placeholder="Search by disease, crop, or symptom…"
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />

            {move || {
                if loading.get() {
                    return view! { <p class="empty-state">"Loading disease library…"</p> }
                        .into_any();
                }
                let rows = filtered();
                if rows.is_empty() {
                    return view! { <p class="empty-state">"No diseases match your search."</p> }
                        .into_any();
                }
                view! {
                    <div class="disease-grid">
                        {rows
                            .into_iter()
                            .map(|disease| {
                                let severity = disease.display("severity");
                                view! {
                                    <div class="card disease-card">
                                        <div class="disease-heading">
                                            <h3>{disease.display("name")}</h3>
                                            <span class=severity_class(&severity)>{severity.clone()}</span>
                                        </div>
                                        <p class="disease-crop">{format!("Affects: {}", disease.display("crop"))}</p>
                                        <h4>"Symptoms"</h4>
                                        <p>{disease.display("symptoms")}</p>
                                        <h4>"Treatment"</h4>
                                        <p>{disease.display("treatment")}</p>
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
