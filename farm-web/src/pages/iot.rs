use leptos::prelude::*;

// Sample readings shown until field sensors are wired up.
const SENSOR_PREVIEW: &[(&str, &str, &str)] = &[
    ("💧", "Soil Moisture", "45%"),
    ("🌡️", "Temperature", "28°C"),
    ("💨", "Humidity", "62%"),
    ("☀️", "Light", "850 lux"),
    ("🧪", "Soil pH", "6.8"),
];

/// Smart-farm sensor dashboard preview.
#[component]
pub fn IotPage() -> impl IntoView {
    view! {
        <div class="iot-page">
            <h1>"📡 Smart Farm Monitoring"</h1>
            <p class="page-subtitle">
                "Live readings from your field sensors will appear here once devices are paired."
            </p>

            <div class="sensor-grid">
                {SENSOR_PREVIEW
                    .iter()
                    .map(|(icon, label, value)| {
                        view! {
                            <div class="card sensor-card">
                                <span class="sensor-icon">{*icon}</span>
                                <p class="sensor-label">{*label}</p>
                                <p class="sensor-value">{*value}</p>
                                <span class="sensor-sample">"sample data"</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="card coming-soon-card">
                <p>"Sensor pairing opens with our hardware partner program."</p>
                <span class="coming-soon-badge">"Coming Soon"</span>
            </div>
        </div>
    }
}
