//! Admin panel: platform analytics plus CRUD over the crop, disease, and
//! cost-template catalogs. Reached only through the admin route guard; the
//! backend re-checks the role on every call.

use leptos::prelude::*;
use serde_json::Value;

use shared::dto::catalog::{AnalyticsSummary, Record};

use crate::services::api;
use crate::services::api::ApiError;
use crate::state::notifications::use_notifications;

#[derive(Clone, Copy, PartialEq, Eq)]
enum AdminTab {
    Dashboard,
    Crops,
    Diseases,
    CostTemplates,
    Users,
    Settings,
}

impl AdminTab {
    fn label(self) -> &'static str {
        match self {
            AdminTab::Dashboard => "📊 Dashboard",
            AdminTab::Crops => "🌱 Crops",
            AdminTab::Diseases => "🔬 Diseases",
            AdminTab::CostTemplates => "🧮 Cost Templates",
            AdminTab::Users => "👥 Users",
            AdminTab::Settings => "⚙️ Settings",
        }
    }

    fn entity(self) -> Option<EntityKind> {
        match self {
            AdminTab::Crops => Some(EntityKind::Crop),
            AdminTab::Diseases => Some(EntityKind::Disease),
            AdminTab::CostTemplates => Some(EntityKind::CostTemplate),
            _ => None,
        }
    }
}

const ADMIN_TABS: &[AdminTab] = &[
    AdminTab::Dashboard,
    AdminTab::Crops,
    AdminTab::Diseases,
    AdminTab::CostTemplates,
    AdminTab::Users,
    AdminTab::Settings,
];

/// Which catalog a CRUD tab operates on.
#[derive(Clone, Copy, PartialEq, Eq)]
enum EntityKind {
    Crop,
    Disease,
    CostTemplate,
}

enum FieldInput {
    Text,
    Number,
    TextArea,
    Select(&'static [&'static str]),
}

/// One editable column of a catalog record.
struct FieldDef {
    key: &'static str,
    label: &'static str,
    input: FieldInput,
}

const CROP_FIELDS: &[FieldDef] = &[
    FieldDef { key: "name", label: "Name", input: FieldInput::Text },
    FieldDef { key: "scientificName", label: "Scientific Name", input: FieldInput::Text },
    FieldDef {
        key: "category",
        label: "Category",
        input: FieldInput::Select(&["Cereals", "Pulses", "Vegetables", "Fruits", "Cash Crops"]),
    },
    FieldDef {
        key: "season",
        label: "Season",
        input: FieldInput::Select(&["Kharif", "Rabi", "Zaid", "Year Round"]),
    },
    FieldDef { key: "duration", label: "Duration (days)", input: FieldInput::Number },
    FieldDef { key: "soilType", label: "Soil Type", input: FieldInput::Text },
    FieldDef { key: "temperature", label: "Temperature Range", input: FieldInput::Text },
    FieldDef { key: "rainfall", label: "Rainfall", input: FieldInput::Text },
];

const DISEASE_FIELDS: &[FieldDef] = &[
    FieldDef { key: "name", label: "Name", input: FieldInput::Text },
    FieldDef { key: "crop", label: "Affected Crop", input: FieldInput::Text },
    FieldDef { key: "symptoms", label: "Symptoms", input: FieldInput::TextArea },
    FieldDef { key: "treatment", label: "Treatment", input: FieldInput::TextArea },
    FieldDef {
        key: "severity",
        label: "Severity",
        input: FieldInput::Select(&["Low", "Medium", "High"]),
    },
];

const COST_TEMPLATE_FIELDS: &[FieldDef] = &[
    FieldDef { key: "crop", label: "Crop", input: FieldInput::Text },
    FieldDef { key: "location", label: "Location", input: FieldInput::Text },
    FieldDef { key: "totalCost", label: "Total Cost (₹/acre)", input: FieldInput::Number },
    FieldDef { key: "expectedYield", label: "Expected Yield (qtl/acre)", input: FieldInput::Number },
    FieldDef { key: "profitMargin", label: "Profit Margin (%)", input: FieldInput::Number },
];

impl EntityKind {
    fn singular(self) -> &'static str {
        match self {
            EntityKind::Crop => "crop",
            EntityKind::Disease => "disease",
            EntityKind::CostTemplate => "cost template",
        }
    }

    fn fields(self) -> &'static [FieldDef] {
        match self {
            EntityKind::Crop => CROP_FIELDS,
            EntityKind::Disease => DISEASE_FIELDS,
            EntityKind::CostTemplate => COST_TEMPLATE_FIELDS,
        }
    }

    async fn fetch(self) -> Result<Vec<Record>, ApiError> {
        match self {
            EntityKind::Crop => api::get_crops().await,
            EntityKind::Disease => api::get_diseases().await,
            EntityKind::CostTemplate => api::get_cost_templates().await,
        }
    }

    async fn create(self, record: &Record) -> Result<Record, ApiError> {
        match self {
            EntityKind::Crop => api::create_crop(record).await,
            EntityKind::Disease => api::create_disease(record).await,
            EntityKind::CostTemplate => api::create_cost_template(record).await,
        }
    }

    async fn update(self, id: &str, record: &Record) -> Result<Record, ApiError> {
        match self {
            EntityKind::Crop => api::update_crop(id, record).await,
            EntityKind::Disease => api::update_disease(id, record).await,
            EntityKind::CostTemplate => api::update_cost_template(id, record).await,
        }
    }

    async fn delete(self, id: &str) -> Result<(), ApiError> {
        match self {
            EntityKind::Crop => api::delete_crop(id).await,
            EntityKind::Disease => api::delete_disease(id).await,
            EntityKind::CostTemplate => api::delete_cost_template(id).await,
        }
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

// Write failures block with a dialog so they are never missed mid-edit.
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let notifications = use_notifications();

    let (tab, set_tab) = signal(AdminTab::Dashboard);
    let (records, set_records) = signal(Vec::<Record>::new());
    let (search, set_search) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (analytics, set_analytics) = signal(Option::<AnalyticsSummary>::None);
    // The open editor: draft record, or None when closed. A draft without an
    // `_id` is a creation.
    let (draft, set_draft) = signal(Option::<Record>::None);

    // Reload whenever the active tab changes.
    Effect::new(move |_| {
        let current = tab.get();
        set_search.set(String::new());
        set_draft.set(None);
        leptos::task::spawn_local(async move {
            set_loading.try_set(true);
            match current.entity() {
                Some(kind) => match kind.fetch().await {
                    Ok(data) => {
                        set_records.try_set(data);
                    }
                    Err(e) => {
                        log::error!("{} list fetch failed: {e}", kind.singular());
                        notifications.error("Could not load records", Some(e.user_message()));
                    }
                },
                None if current == AdminTab::Dashboard => match api::get_user_analytics().await {
                    Ok(data) => {
                        set_analytics.try_set(Some(data));
                    }
                    Err(e) => log::error!("analytics fetch failed: {e}"),
                },
                None => {}
            }
            set_loading.try_set(false);
        });
    });

    let on_save = move |kind: EntityKind| {
        let Some(record) = draft.get_untracked() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let id = record.id().to_string();
            let result = if id.is_empty() {
                kind.create(&record).await
            } else {
                kind.update(&id, &record).await
            };
            match result {
                Ok(saved) => {
                    set_records.try_update(|list| {
                        match list.iter_mut().find(|r| !id.is_empty() && r.id() == id) {
                            Some(slot) => *slot = saved,
                            None => list.push(saved),
                        }
                    });
                    set_draft.try_set(None);
                    notifications.success(format!("Saved {}", kind.singular()), None);
                }
                Err(e) => {
                    log::error!("{} save failed: {e}", kind.singular());
                    alert(&format!("Could not save: {}", e.user_message()));
                }
            }
        });
    };

    let on_delete = move |kind: EntityKind, id: String| {
        if !confirm(&format!("Delete this {}? This cannot be undone.", kind.singular())) {
            return;
        }
        leptos::task::spawn_local(async move {
            match kind.delete(&id).await {
                Ok(()) => {
                    set_records.try_update(|list| list.retain(|r| r.id() != id));
                    notifications.success(format!("Deleted {}", kind.singular()), None);
                }
                Err(e) => {
                    log::error!("{} delete failed: {e}", kind.singular());
                    alert(&format!("Could not delete: {}", e.user_message()));
                }
            }
        });
    };

    let set_draft_field = move |key: &'static str, input: &FieldInput, raw: String| {
        let value = match input {
            // Numeric fields are sent as JSON numbers when they parse
            FieldInput::Number => match raw.parse::<f64>() {
                Ok(n) => Value::from(n),
                Err(_) => Value::String(raw),
            },
            _ => Value::String(raw),
        };
        set_draft.update(|d| {
            if let Some(record) = d {
                record.set(key, value);
            }
        });
    };

    let editor = move |kind: EntityKind| {
        view! {
            <div class="modal-backdrop" on:click=move |_| set_draft.set(None)>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <h3>
                        {move || {
                            let is_new = draft.get().map(|d| d.id().is_empty()).unwrap_or(true);
                            if is_new {
                                format!("Add {}", kind.singular())
                            } else {
                                format!("Edit {}", kind.singular())
                            }
                        }}
                    </h3>

                    {kind
                        .fields()
                        .iter()
                        .map(|field| {
                            let key = field.key;
                            let current = move || {
                                draft.get().map(|d| d.display(key)).unwrap_or_default()
                            };
                            let control = match &field.input {
                                FieldInput::Text => view! {
                                    <input
                                        type="text"
                                        prop:value=current
                                        on:input=move |ev| set_draft_field(
                                            key,
                                            &FieldInput::Text,
                                            event_target_value(&ev),
                                        )
                                    />
                                }
                                    .into_any(),
                                FieldInput::Number => view! {
                                    <input
                                        type="number"
                                        prop:value=current
                                        on:input=move |ev| set_draft_field(
                                            key,
                                            &FieldInput::Number,
                                            event_target_value(&ev),
                                        )
                                    />
                                }
                                    .into_any(),
                                FieldInput::TextArea => view! {
                                    <textarea
                                        prop:value=current
                                        on:input=move |ev| set_draft_field(
                                            key,
                                            &FieldInput::TextArea,
                                            event_target_value(&ev),
                                        )
                                    />
                                }
                                    .into_any(),
                                FieldInput::Select(options) => view! {
                                    <select
                                        prop:value=current
                                        on:change=move |ev| set_draft_field(
                                            key,
                                            &FieldInput::Text,
                                            event_target_value(&ev),
                                        )
                                    >
                                        <option value="">"Select…"</option>
                                        {options
                                            .iter()
                                            .map(|opt| {
                                                view! { <option value=*opt>{*opt}</option> }
                                            })
                                            .collect_view()}
                                    </select>
                                }
                                    .into_any(),
                            };
                            view! {
                                <label class="modal-field">
                                    {field.label}
                                    {control}
                                </label>
                            }
                        })
                        .collect_view()}

                    <div class="modal-actions">
                        <button class="btn-secondary" on:click=move |_| set_draft.set(None)>
                            "Cancel"
                        </button>
                        <button class="btn-primary" on:click=move |_| on_save(kind)>
                            "Save"
                        </button>
                    </div>
                </div>
            </div>
        }
    };

    let crud_tab = move |kind: EntityKind| {
        // Table shows the first few defined fields as columns.
        let columns: Vec<&'static FieldDef> = kind.fields().iter().take(4).collect();
        let header = columns
            .iter()
            .map(|f| view! { <th>{f.label}</th> })
            .collect_view();

        view! {
            <div class="admin-crud">
                <div class="crud-toolbar">
                    <input
                        class="search-input"
                        type="search"
                        placeholder="Search records…"
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                    <button
                        class="btn-primary"
                        on:click=move |_| set_draft.set(Some(Record::default()))
                    >
                        {format!("+ Add {}", kind.singular())}
                    </button>
                </div>

                <Show when=move || loading.get()>
                    <p class="empty-state">"Loading…"</p>
                </Show>

                <table class="admin-table">
                    <thead>
                        <tr>
                            {header}
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let q = search.get();
                            records
                                .get()
                                .into_iter()
                                .filter(|r| r.matches_query(&q))
                                .map(|record| {
                                    let id = record.id().to_string();
                                    let edit_copy = record.clone();
                                    let cells = kind
                                        .fields()
                                        .iter()
                                        .take(4)
                                        .map(|f| view! { <td>{record.display(f.key)}</td> })
                                        .collect_view();
                                    view! {
                                        <tr>
                                            {cells}
                                            <td class="row-actions">
                                                <button
                                                    class="btn-link"
                                                    on:click=move |_| set_draft.set(
                                                        Some(edit_copy.clone()),
                                                    )
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="btn-link danger"
                                                    on:click=move |_| on_delete(kind, id.clone())
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>

                <Show when=move || draft.get().is_some()>{editor(kind)}</Show>
            </div>
        }
    };

    let dashboard_tab = move || {
        view! {
            <div class="admin-dashboard">
                {move || match analytics.get() {
                    None => view! { <p class="empty-state">"Loading analytics…"</p> }.into_any(),
                    Some(summary) => {
                        view! {
                            <div class="stat-grid">
                                <div class="card stat-card">
                                    <p class="stat-label">"Total Users"</p>
                                    <p class="stat-value">
                                        {summary.user_stats.total_users.to_string()}
                                    </p>
                                </div>
                                <div class="card stat-card">
                                    <p class="stat-label">"Active Users"</p>
                                    <p class="stat-value">
                                        {summary.user_stats.active_users.to_string()}
                                    </p>
                                </div>
                                <div class="card stat-card">
                                    <p class="stat-label">"Total Queries"</p>
                                    <p class="stat-value">
                                        {summary.activity_stats.total_queries.to_string()}
                                    </p>
                                </div>
                                <div class="card stat-card">
                                    <p class="stat-label">"Disease Detections"</p>
                                    <p class="stat-value">
                                        {summary.activity_stats.disease_detections.to_string()}
                                    </p>
                                </div>
                            </div>
                            <div class="card popular-crops-card">
                                <h3>"Most Queried Crops"</h3>
                                <ul class="popular-crop-list">
                                    {summary
                                        .popular_crops
                                        .iter()
                                        .map(|crop| {
                                            view! {
                                                <li>
                                                    <span>{crop.name.clone()}</span>
                                                    <span>{format!("{:.0}%", crop.value)}</span>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        }
    };

    view! {
        <div class="admin-page">
            <h1>"Admin Panel"</h1>

            <div class="tab-bar admin-tabs">
                {ADMIN_TABS
                    .iter()
                    .map(|t| {
                        let t = *t;
                        view! {
                            <button
                                class="tab-button"
                                class:active=move || tab.get() == t
                                on:click=move |_| set_tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || match tab.get().entity() {
                Some(kind) => crud_tab(kind).into_any(),
                None => match tab.get() {
                    AdminTab::Dashboard => dashboard_tab().into_any(),
                    AdminTab::Users => view! {
                        <p class="empty-state">"User management is coming soon."</p>
                    }
                        .into_any(),
                    _ => view! {
                        <p class="empty-state">"Platform settings are coming soon."</p>
                    }
                        .into_any(),
                },
            }}
        </div>
    }
}
